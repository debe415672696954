pub mod applied_submission;
pub mod contact_submission;
pub mod post;
pub mod user;

pub use applied_submission::AppliedSubmission;
pub use contact_submission::ContactSubmission;
pub use post::{Post, PostPage, PostView};
pub use user::{PublicUser, User};
