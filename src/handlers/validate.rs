// handlers/validate.rs - shared form-field validation
//
// Validation failures surface inline as a field -> message map on the 400
// response, mirroring how the form layer reports them.

use std::collections::HashMap;

use crate::error::ApiError;

#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: HashMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.errors.insert(field.to_string(), "This field is required".to_string());
        }
        self
    }

    pub fn max_len(&mut self, field: &str, value: &str, max: usize) -> &mut Self {
        if value.chars().count() > max {
            self.errors
                .insert(field.to_string(), format!("Must be at most {} characters", max));
        }
        self
    }

    pub fn email(&mut self, field: &str, value: &str) -> &mut Self {
        if !value.trim().is_empty() && !value.contains('@') {
            self.errors
                .insert(field.to_string(), "Enter a valid email address".to_string());
        }
        self
    }

    pub fn into_result(self) -> Result<(), ApiError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation_error("Invalid form data", Some(self.errors)))
        }
    }
}
