//! RDS error types.
//!
//! RDS reports failures as `<Error><Code>...</Code><Message>...</Message></Error>`
//! documents. The codes below are the faults raised by the modelled operations
//! together with the generic query-protocol errors.

use std::fmt;

/// Well-known RDS error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum RdsErrorCode {
    // DB clusters
    /// The DB cluster does not exist.
    DBClusterNotFoundFault,
    /// A DB cluster with the same identifier already exists.
    DBClusterAlreadyExistsFault,
    /// The DB cluster is not in a valid state for the request.
    InvalidDBClusterStateFault,
    /// The DB cluster snapshot does not exist.
    DBClusterSnapshotNotFoundFault,
    /// A DB cluster snapshot with the same identifier already exists.
    DBClusterSnapshotAlreadyExistsFault,
    /// The DB cluster snapshot is not in a valid state for the request.
    InvalidDBClusterSnapshotStateFault,
    /// The DB cluster parameter group does not exist.
    DBClusterParameterGroupNotFoundFault,
    /// The account has reached its DB cluster quota.
    DBClusterQuotaExceededFault,

    // DB instances
    /// The DB instance does not exist.
    DBInstanceNotFoundFault,
    /// A DB instance with the same identifier already exists.
    DBInstanceAlreadyExistsFault,
    /// The DB instance is not in a valid state for the request.
    InvalidDBInstanceStateFault,
    /// The requested DB instance class is not available in the Availability Zone.
    InsufficientDBInstanceCapacityFault,
    /// The account has reached its DB instance quota.
    InstanceQuotaExceededFault,

    // DB snapshots
    /// The DB snapshot does not exist.
    DBSnapshotNotFoundFault,
    /// A DB snapshot with the same identifier already exists.
    DBSnapshotAlreadyExistsFault,
    /// The DB snapshot is not in a valid state for the request.
    InvalidDBSnapshotStateFault,
    /// The account has reached its snapshot quota.
    SnapshotQuotaExceededFault,

    // Networking and storage
    /// The DB subnet group does not exist.
    DBSubnetGroupNotFoundFault,
    /// The VPC security group is not valid for the request.
    InvalidVPCNetworkStateFault,
    /// Not enough free IP addresses remain in the subnet.
    InsufficientAvailableIPsInSubnetFault,
    /// The requested storage would exceed the account quota.
    StorageQuotaExceededFault,
    /// The S3 bucket or prefix cannot be used as a restore source.
    InvalidS3BucketFault,

    // Encryption and options
    /// The KMS key cannot be accessed.
    KMSKeyNotAccessibleFault,
    /// The option group does not exist.
    OptionGroupNotFoundFault,

    // RDS Proxy
    /// The proxy does not exist.
    DBProxyNotFoundFault,
    /// The proxy target group does not exist.
    DBProxyTargetGroupNotFoundFault,
    /// The target is already registered with the proxy target group.
    DBProxyTargetAlreadyRegisteredFault,
    /// The proxy is not in a valid state for the request.
    InvalidDBProxyStateFault,

    // Generic query-protocol errors
    /// A parameter value is invalid or out of range.
    #[default]
    InvalidParameterValue,
    /// Two or more parameters cannot be used together.
    InvalidParameterCombination,
    /// A required parameter is missing.
    MissingParameter,
    /// The action is not recognized.
    InvalidAction,
    /// The service failed to process the request.
    InternalFailure,
}

impl RdsErrorCode {
    /// Returns the error code string used in the `<Code>` element.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DBClusterNotFoundFault => "DBClusterNotFoundFault",
            Self::DBClusterAlreadyExistsFault => "DBClusterAlreadyExistsFault",
            Self::InvalidDBClusterStateFault => "InvalidDBClusterStateFault",
            Self::DBClusterSnapshotNotFoundFault => "DBClusterSnapshotNotFoundFault",
            Self::DBClusterSnapshotAlreadyExistsFault => "DBClusterSnapshotAlreadyExistsFault",
            Self::InvalidDBClusterSnapshotStateFault => "InvalidDBClusterSnapshotStateFault",
            Self::DBClusterParameterGroupNotFoundFault => "DBClusterParameterGroupNotFound",
            Self::DBClusterQuotaExceededFault => "DBClusterQuotaExceededFault",
            Self::DBInstanceNotFoundFault => "DBInstanceNotFound",
            Self::DBInstanceAlreadyExistsFault => "DBInstanceAlreadyExists",
            Self::InvalidDBInstanceStateFault => "InvalidDBInstanceState",
            Self::InsufficientDBInstanceCapacityFault => "InsufficientDBInstanceCapacity",
            Self::InstanceQuotaExceededFault => "InstanceQuotaExceeded",
            Self::DBSnapshotNotFoundFault => "DBSnapshotNotFound",
            Self::DBSnapshotAlreadyExistsFault => "DBSnapshotAlreadyExists",
            Self::InvalidDBSnapshotStateFault => "InvalidDBSnapshotState",
            Self::SnapshotQuotaExceededFault => "SnapshotQuotaExceeded",
            Self::DBSubnetGroupNotFoundFault => "DBSubnetGroupNotFoundFault",
            Self::InvalidVPCNetworkStateFault => "InvalidVPCNetworkStateFault",
            Self::InsufficientAvailableIPsInSubnetFault => "InsufficientAvailableIPsInSubnetFault",
            Self::StorageQuotaExceededFault => "StorageQuotaExceeded",
            Self::InvalidS3BucketFault => "InvalidS3BucketFault",
            Self::KMSKeyNotAccessibleFault => "KMSKeyNotAccessibleFault",
            Self::OptionGroupNotFoundFault => "OptionGroupNotFoundFault",
            Self::DBProxyNotFoundFault => "DBProxyNotFoundFault",
            Self::DBProxyTargetGroupNotFoundFault => "DBProxyTargetGroupNotFoundFault",
            Self::DBProxyTargetAlreadyRegisteredFault => "DBProxyTargetAlreadyRegisteredFault",
            Self::InvalidDBProxyStateFault => "InvalidDBProxyStateFault",
            Self::InvalidParameterValue => "InvalidParameterValue",
            Self::InvalidParameterCombination => "InvalidParameterCombination",
            Self::MissingParameter => "MissingParameter",
            Self::InvalidAction => "InvalidAction",
            Self::InternalFailure => "InternalFailure",
        }
    }

    /// Parse a `<Code>` value into a known error code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == code)
    }

    /// Returns the default HTTP status code for this error.
    #[must_use]
    pub fn default_status_code(&self) -> http::StatusCode {
        match self {
            Self::DBClusterNotFoundFault
            | Self::DBClusterSnapshotNotFoundFault
            | Self::DBClusterParameterGroupNotFoundFault
            | Self::DBInstanceNotFoundFault
            | Self::DBSnapshotNotFoundFault
            | Self::DBSubnetGroupNotFoundFault
            | Self::OptionGroupNotFoundFault
            | Self::DBProxyNotFoundFault
            | Self::DBProxyTargetGroupNotFoundFault => http::StatusCode::NOT_FOUND,
            Self::InternalFailure => http::StatusCode::INTERNAL_SERVER_ERROR,
            _ => http::StatusCode::BAD_REQUEST,
        }
    }

    const ALL: [Self; 33] = [
        Self::DBClusterNotFoundFault,
        Self::DBClusterAlreadyExistsFault,
        Self::InvalidDBClusterStateFault,
        Self::DBClusterSnapshotNotFoundFault,
        Self::DBClusterSnapshotAlreadyExistsFault,
        Self::InvalidDBClusterSnapshotStateFault,
        Self::DBClusterParameterGroupNotFoundFault,
        Self::DBClusterQuotaExceededFault,
        Self::DBInstanceNotFoundFault,
        Self::DBInstanceAlreadyExistsFault,
        Self::InvalidDBInstanceStateFault,
        Self::InsufficientDBInstanceCapacityFault,
        Self::InstanceQuotaExceededFault,
        Self::DBSnapshotNotFoundFault,
        Self::DBSnapshotAlreadyExistsFault,
        Self::InvalidDBSnapshotStateFault,
        Self::SnapshotQuotaExceededFault,
        Self::DBSubnetGroupNotFoundFault,
        Self::InvalidVPCNetworkStateFault,
        Self::InsufficientAvailableIPsInSubnetFault,
        Self::StorageQuotaExceededFault,
        Self::InvalidS3BucketFault,
        Self::KMSKeyNotAccessibleFault,
        Self::OptionGroupNotFoundFault,
        Self::DBProxyNotFoundFault,
        Self::DBProxyTargetGroupNotFoundFault,
        Self::DBProxyTargetAlreadyRegisteredFault,
        Self::InvalidDBProxyStateFault,
        Self::InvalidParameterValue,
        Self::InvalidParameterCombination,
        Self::MissingParameter,
        Self::InvalidAction,
        Self::InternalFailure,
    ];
}

impl fmt::Display for RdsErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An RDS error response.
#[derive(Debug)]
pub struct RdsError {
    /// The error code.
    pub code: RdsErrorCode,
    /// A human-readable error message.
    pub message: String,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// The underlying source error, if any.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for RdsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RdsError({}): {}", self.code, self.message)
    }
}

impl std::error::Error for RdsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl RdsError {
    /// Create a new `RdsError` from an error code.
    #[must_use]
    pub fn new(code: RdsErrorCode) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: code.as_str().to_owned(),
            code,
            source: None,
        }
    }

    /// Create a new `RdsError` with a custom message.
    #[must_use]
    pub fn with_message(code: RdsErrorCode, message: impl Into<String>) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: message.into(),
            code,
            source: None,
        }
    }

    /// Set the source error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // -- Convenience constructors --

    /// Invalid or out-of-range parameter value.
    #[must_use]
    pub fn invalid_parameter_value(message: impl Into<String>) -> Self {
        Self::with_message(RdsErrorCode::InvalidParameterValue, message)
    }

    /// A required parameter was not supplied.
    #[must_use]
    pub fn missing_parameter(name: &str) -> Self {
        Self::with_message(
            RdsErrorCode::MissingParameter,
            format!("The request must contain the parameter {name}"),
        )
    }

    /// Unknown action name.
    #[must_use]
    pub fn invalid_action(action: &str) -> Self {
        Self::with_message(
            RdsErrorCode::InvalidAction,
            format!("Could not find operation {action}"),
        )
    }

    /// Internal failure.
    #[must_use]
    pub fn internal_failure(message: impl Into<String>) -> Self {
        Self::with_message(RdsErrorCode::InternalFailure, message)
    }
}

/// Create an `RdsError` from an error code.
///
/// # Examples
///
/// ```
/// use ruststack_rds_model::rds_error;
/// use ruststack_rds_model::error::RdsErrorCode;
///
/// let err = rds_error!(InvalidParameterValue);
/// assert_eq!(err.code, RdsErrorCode::InvalidParameterValue);
///
/// let err = rds_error!(DBClusterNotFoundFault, "DBCluster aurora-1 not found.");
/// assert_eq!(err.message, "DBCluster aurora-1 not found.");
/// ```
#[macro_export]
macro_rules! rds_error {
    ($code:ident) => {
        $crate::error::RdsError::new($crate::error::RdsErrorCode::$code)
    };
    ($code:ident, $msg:expr) => {
        $crate::error::RdsError::with_message($crate::error::RdsErrorCode::$code, $msg)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_roundtrip_every_error_code() {
        for code in RdsErrorCode::ALL {
            assert_eq!(RdsErrorCode::from_code(code.as_str()), Some(code));
        }
        assert_eq!(RdsErrorCode::from_code("NoSuchFault"), None);
    }

    #[test]
    fn test_should_map_not_found_faults_to_404() {
        assert_eq!(
            RdsErrorCode::DBClusterNotFoundFault.default_status_code(),
            http::StatusCode::NOT_FOUND
        );
        assert_eq!(
            RdsErrorCode::DBProxyTargetGroupNotFoundFault.default_status_code(),
            http::StatusCode::NOT_FOUND
        );
        assert_eq!(
            RdsErrorCode::InternalFailure.default_status_code(),
            http::StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            RdsErrorCode::DBClusterSnapshotAlreadyExistsFault.default_status_code(),
            http::StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_should_use_code_as_default_message() {
        let err = RdsError::new(RdsErrorCode::SnapshotQuotaExceededFault);
        assert_eq!(err.message, "SnapshotQuotaExceeded");
        assert_eq!(err.status_code, http::StatusCode::BAD_REQUEST);
        assert!(err.source.is_none());
    }

    #[test]
    fn test_should_format_error_display() {
        let err = rds_error!(DBProxyNotFoundFault, "proxy my-proxy not found");
        assert_eq!(
            err.to_string(),
            "RdsError(DBProxyNotFoundFault): proxy my-proxy not found"
        );
    }

    #[test]
    fn test_should_expose_source_error() {
        let parse = "x".parse::<i32>().unwrap_err();
        let err = RdsError::invalid_parameter_value("bad port").with_source(parse);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_should_name_missing_parameter() {
        let err = RdsError::missing_parameter("DBClusterIdentifier");
        assert_eq!(err.code, RdsErrorCode::MissingParameter);
        assert!(err.message.contains("DBClusterIdentifier"));
    }
}
