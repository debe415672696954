// handlers/protected/posts/mod.rs - post listing and CRUD

pub mod create;
pub mod delete;
pub mod detail;
pub mod list;
pub mod update;

pub use create::create_post;
pub use delete::delete_post;
pub use detail::detail_get;
pub use list::home_get;
pub use update::update_put;

use serde::Deserialize;

use crate::handlers::validate::FieldErrors;

/// Editable post fields, shared by create and update
#[derive(Debug, Deserialize)]
pub struct PostForm {
    pub title: String,
    pub content: String,
}

impl PostForm {
    pub fn validate(&self) -> Result<(), crate::error::ApiError> {
        let mut form = FieldErrors::new();
        form.require("title", &self.title)
            .max_len("title", &self.title, 100)
            .require("content", &self.content);
        form.into_result()
    }
}
