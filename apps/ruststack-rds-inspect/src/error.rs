//! Error types for the inspect binary.

use ruststack_rds_model::RdsError;

/// Errors raised while configuring the binary or inspecting a document.
#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    /// An environment variable holds a value the binary does not accept.
    #[error("invalid value for {name}: {value}")]
    InvalidConfig {
        /// The environment variable.
        name: &'static str,
        /// The rejected value.
        value: String,
    },

    /// The input is not valid JSON, or not a request document.
    #[error("malformed request document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The document names an unknown action or its parameters do not fit the shape.
    #[error(transparent)]
    Request(#[from] RdsError),

    /// Strict mode found members the request shape does not declare.
    #[error("{action} does not declare member(s): {}", .members.join(", "))]
    UnknownMembers {
        /// The action named by the document.
        action: String,
        /// Paths of the undeclared members, e.g. `Tags[0].Colour`.
        members: Vec<String>,
    },
}

/// Convenience result type for the inspect binary.
pub type InspectResult<T> = Result<T, InspectError>;

#[cfg(test)]
mod tests {
    use ruststack_rds_model::RdsErrorCode;

    use super::*;

    #[test]
    fn test_should_format_unknown_members() {
        let err = InspectError::UnknownMembers {
            action: "CopyDBSnapshot".to_owned(),
            members: vec!["Colour".to_owned(), "Tags[0].Owner".to_owned()],
        };
        assert_eq!(
            err.to_string(),
            "CopyDBSnapshot does not declare member(s): Colour, Tags[0].Owner"
        );
    }

    #[test]
    fn test_should_pass_through_request_errors() {
        let err = InspectError::from(RdsError::invalid_action("DropDatabase"));
        assert!(matches!(&err, InspectError::Request(e) if e.code == RdsErrorCode::InvalidAction));
        assert!(err.to_string().contains("DropDatabase"));
    }
}
