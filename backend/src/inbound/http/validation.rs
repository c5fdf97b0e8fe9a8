//! Shared validation helpers for inbound HTTP adapters.
//!
//! Translates domain validation failures into `400` errors that name the
//! offending field, and parses the optional category filter.

use serde_json::json;
use tracing::debug;

use crate::domain::{Category, Error, LoginValidationError, UserValidationError};

/// Message returned when the category filter is outside the enumeration.
pub const INVALID_CATEGORY_MESSAGE: &str = "category is not valid";

/// Validation error codes surfaced in the `result` details of a `400`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    InvalidFormat,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidFormat => "invalid_format",
        }
    }
}

fn field_error(field: &str, message: impl Into<String>, code: ValidationCode) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "code": code.as_str(),
    }))
}

/// Map a registration field failure to a `400` naming the field.
pub(crate) fn registration_error(err: UserValidationError) -> Error {
    field_error(err.field(), err.to_string(), ValidationCode::InvalidFormat)
}

/// Map a sign-in presence failure to a `400`.
pub(crate) fn login_error(err: LoginValidationError) -> Error {
    match err {
        LoginValidationError::MissingFields => Error::invalid_request(err.to_string())
            .with_details(json!({
                "fields": ["userID", "password"],
                "code": ValidationCode::MissingField.as_str(),
            })),
    }
}

/// Parse the optional `category` query parameter.
///
/// Absent or empty values mean "no filter". Values outside the enumeration
/// are rejected before any store access.
pub(crate) fn parse_category(raw: Option<&str>) -> Result<Option<Category>, Error> {
    match raw {
        None => Ok(None),
        Some(value) if value.is_empty() => Ok(None),
        Some(value) => value.parse::<Category>().map(Some).map_err(|err| {
            debug!(%err, "rejected category filter");
            Error::rejected(INVALID_CATEGORY_MESSAGE)
                .with_details(json!({ "field": "category", "value": value }))
        }),
    }
}
