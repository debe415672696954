pub mod post_service;
pub mod submission_service;
pub mod user_service;

pub use post_service::{PostError, PostService};
pub use submission_service::{AppliedForm, SubmissionError, SubmissionService};
pub use user_service::{UserError, UserService};
