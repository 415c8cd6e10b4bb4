//! Validation utilities.

use crate::FieldError;
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and flattens failures into field errors.
    fn validate_fields(&self) -> Result<(), Vec<FieldError>> {
        self.validate().map_err(field_errors)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to a flat list of field errors.
#[must_use]
pub fn field_errors(errors: ValidationErrors) -> Vec<FieldError> {
    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |m| m.to_string()),
                code: error.code.to_string(),
            })
        })
        .collect();
    field_errors.sort_by(|a, b| a.field.cmp(&b.field));
    field_errors
}

/// Joins field errors into a single human-readable message.
#[must_use]
pub fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Validates a `field` or `field,asc|desc` sort expression.
    pub fn sort_expression(value: &str) -> Result<(), ValidationError> {
        let mut parts = value.split(',').map(str::trim);

        let field = parts.next().unwrap_or_default();
        if field.is_empty() || !field.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ValidationError::new("sort_field_invalid")
                .with_message("Sort field must be a plain identifier".into()));
        }

        if let Some(direction) = parts.next() {
            if !direction.eq_ignore_ascii_case("asc") && !direction.eq_ignore_ascii_case("desc") {
                return Err(ValidationError::new("sort_direction_invalid")
                    .with_message("Sort direction must be asc or desc".into()));
            }
        }

        if parts.next().is_some() {
            return Err(ValidationError::new("sort_expression_malformed"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::rules::*;
    use super::*;

    #[derive(Validate)]
    struct SortInput {
        #[validate(range(min = 1, message = "must be positive"))]
        size: i64,
        #[validate(length(min = 1))]
        label: String,
    }

    #[test]
    fn test_sort_expression() {
        assert!(sort_expression("createdAt").is_ok());
        assert!(sort_expression("createdAt,desc").is_ok());
        assert!(sort_expression("end_time, ASC").is_ok());
        assert!(sort_expression("").is_err());
        assert!(sort_expression("created at").is_err());
        assert!(sort_expression("title;drop").is_err());
        assert!(sort_expression("title,up").is_err());
        assert!(sort_expression("title,asc,desc").is_err());
    }

    #[test]
    fn test_field_errors_are_flattened() {
        let input = SortInput {
            size: 0,
            label: String::new(),
        };
        let errors = input.validate_fields().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "label");
        assert_eq!(errors[1].field, "size");
        assert_eq!(errors[1].message, "must be positive");

        let message = describe(&errors);
        assert!(message.contains("size: must be positive"));
    }
}
