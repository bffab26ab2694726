//! Response interpretation shared by every domain module.
//!
//! The engine reports a `(value, message)` pair, either nested under
//! `returnCode` or at the top level of the response. `value == -1` is a
//! rejection; anything else is success and `message` is logged at info.

use crate::errors::Failure;
use crate::proto;

/// Access to the status pair of an engine response.
pub trait Reply {
    fn status(&self) -> (i32, &str);

    /// Per-item messages, for responses that carry them.
    fn error_items(&self) -> Option<&[String]> {
        None
    }
}

/// Responses with a nested `return_code`; a missing one reads as `(0, "")`.
macro_rules! nested_reply {
    ($ty:ty) => {
        impl $crate::contract::Reply for $ty {
            fn status(&self) -> (i32, &str) {
                self.return_code
                    .as_ref()
                    .map_or((0, ""), |rc| (rc.value, rc.message.as_str()))
            }
        }
    };
    ($ty:ty, $errors:ident) => {
        impl $crate::contract::Reply for $ty {
            fn status(&self) -> (i32, &str) {
                self.return_code
                    .as_ref()
                    .map_or((0, ""), |rc| (rc.value, rc.message.as_str()))
            }

            fn error_items(&self) -> Option<&[String]> {
                Some(&self.$errors)
            }
        }
    };
}

/// Responses with `value` and `message` at the top level.
macro_rules! top_reply {
    ($ty:ty) => {
        impl $crate::contract::Reply for $ty {
            fn status(&self) -> (i32, &str) {
                (self.value, self.message.as_str())
            }
        }
    };
}

top_reply!(proto::StatusResponse);
nested_reply!(proto::ReturnCodeResponse);
nested_reply!(proto::NameListResponse);
nested_reply!(proto::ReturnCodeWithErrors, errors);

/// Local validation failure with the given message.
pub fn invalid(message: impl Into<String>) -> Failure {
    Failure::Invalid(message.into())
}

/// Apply the success/failure rule and return the status value.
///
/// # Errors
/// Returns the rejection when the engine reported `value == -1`.
pub fn interpret<R: Reply>(reply: &R) -> Result<i32, Failure> {
    let (value, message) = reply.status();
    if value == -1 {
        return Err(match reply.error_items() {
            Some(items) if message.is_empty() => Failure::RejectedItems(items.to_vec()),
            _ => Failure::Rejected(message.to_owned()),
        });
    }
    tracing::info!("{message}");
    Ok(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::errors::{AddCcaError, CreateLifePhaseError, FailureKind, OperationError};
    use crate::proto::{ReturnCode, ReturnCodeWithErrors, StatusResponse};

    #[test]
    fn success_returns_value() {
        assert_eq!(interpret(&StatusResponse::new(0, "done")).unwrap(), 0);
    }

    #[test]
    fn other_values_are_success() {
        assert_eq!(interpret(&StatusResponse::new(7, "")).unwrap(), 7);
    }

    #[test]
    fn top_level_rejection_uses_message() {
        let failure = interpret(&StatusResponse::new(-1, "No such project")).unwrap_err();
        let err = CreateLifePhaseError::from(failure);
        assert_eq!(err.to_string(), "Create life phase error: No such project");
        assert_eq!(err.kind(), FailureKind::RemoteRejected);
    }

    #[test]
    fn empty_message_with_items_uses_list_form() {
        let reply = ReturnCodeWithErrors {
            return_code: Some(ReturnCode::failed("")),
            errors: vec!["first".to_owned(), "second".to_owned()],
        };
        let err = AddCcaError::from(interpret(&reply).unwrap_err());
        assert_eq!(
            err.messages(),
            vec!["Add CCA error: first", "Add CCA error: second"]
        );
    }

    #[test]
    fn message_wins_over_items() {
        let reply = ReturnCodeWithErrors {
            return_code: Some(ReturnCode::failed("whole batch refused")),
            errors: vec!["ignored".to_owned()],
        };
        assert_eq!(
            interpret(&reply).unwrap_err(),
            Failure::Rejected("whole batch refused".to_owned())
        );
    }

    #[test]
    fn missing_return_code_reads_as_success() {
        assert_eq!(interpret(&ReturnCodeWithErrors::default()).unwrap(), 0);
    }
}
