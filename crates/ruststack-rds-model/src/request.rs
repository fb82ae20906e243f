//! Typed request envelope.
//!
//! [`RdsInput`] ties every request shape to the single operation it belongs to
//! and to that operation's result shape. [`RdsRequest`] is the closed sum of all
//! request shapes, used where the operation is only known at runtime (for
//! example when loading a JSON request document).

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::RdsError;
use crate::input::{
    CopyDBClusterSnapshotRequest, CopyDBSnapshotRequest, CreateDBClusterRequest,
    CreateDBInstanceReadReplicaRequest, DescribeDBSnapshotsRequest,
    DescribeOptionGroupOptionsRequest, DescribeOrderableDBInstanceOptionsRequest,
    ModifyDBClusterRequest, RegisterDBProxyTargetsRequest, RestoreDBClusterFromS3Request,
    RestoreDBClusterFromSnapshotRequest, RestoreDBClusterToPointInTimeRequest,
    RestoreDBInstanceFromDBSnapshotRequest, RestoreDBInstanceFromS3Request,
};
use crate::operations::RdsOperation;
use crate::output::{
    CopyDBClusterSnapshotResult, CopyDBSnapshotResult, CreateDBClusterResult,
    CreateDBInstanceReadReplicaResult, DescribeDBSnapshotsResult, DescribeOptionGroupOptionsResult,
    DescribeOrderableDBInstanceOptionsResult, ModifyDBClusterResult, RegisterDBProxyTargetsResult,
    RestoreDBClusterFromS3Result, RestoreDBClusterFromSnapshotResult,
    RestoreDBClusterToPointInTimeResult, RestoreDBInstanceFromDBSnapshotResult,
    RestoreDBInstanceFromS3Result,
};

/// A request shape for exactly one RDS operation.
pub trait RdsInput: Serialize + DeserializeOwned + fmt::Display {
    /// The operation this shape is the input of.
    const OPERATION: RdsOperation;

    /// The result shape returned by [`Self::OPERATION`].
    type Output: Serialize + DeserializeOwned + fmt::Display;
}

macro_rules! rds_requests {
    ($($op:ident => $input:ident, $output:ident;)*) => {
        $(
            impl RdsInput for $input {
                const OPERATION: RdsOperation = RdsOperation::$op;
                type Output = $output;
            }

            impl From<$input> for RdsRequest {
                fn from(input: $input) -> Self {
                    Self::$op(input)
                }
            }
        )*

        /// A request for any modelled RDS operation.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum RdsRequest {
            $(
                #[allow(missing_docs)]
                $op($input),
            )*
        }

        impl RdsRequest {
            /// The operation this request targets.
            #[must_use]
            pub fn operation(&self) -> RdsOperation {
                match self {
                    $(Self::$op(_) => RdsOperation::$op,)*
                }
            }

            /// Decode `parameters` as the request shape of `operation`.
            ///
            /// # Errors
            ///
            /// Returns `InvalidParameterValue` when the document does not match
            /// the shape; the `serde_json` error is kept as the source.
            pub fn from_json(operation: RdsOperation, parameters: Value) -> Result<Self, RdsError> {
                match operation {
                    $(RdsOperation::$op => decode::<$input>(parameters).map(Self::$op),)*
                }
            }

            /// Serialize the inner request shape, omitting unset members.
            ///
            /// # Errors
            ///
            /// Returns `InternalFailure` if the shape cannot be serialized.
            pub fn to_json(&self) -> Result<Value, RdsError> {
                let encoded = match self {
                    $(Self::$op(input) => serde_json::to_value(input),)*
                };
                encoded.map_err(|e| {
                    RdsError::internal_failure(format!("failed to encode {}", self.operation()))
                        .with_source(e)
                })
            }
        }

        impl fmt::Display for RdsRequest {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Self::$op(input) => fmt::Display::fmt(input, f),)*
                }
            }
        }
    };
}

rds_requests! {
    CopyDBClusterSnapshot => CopyDBClusterSnapshotRequest, CopyDBClusterSnapshotResult;
    CreateDBCluster => CreateDBClusterRequest, CreateDBClusterResult;
    ModifyDBCluster => ModifyDBClusterRequest, ModifyDBClusterResult;
    RestoreDBClusterFromS3 => RestoreDBClusterFromS3Request, RestoreDBClusterFromS3Result;
    RestoreDBClusterFromSnapshot =>
        RestoreDBClusterFromSnapshotRequest, RestoreDBClusterFromSnapshotResult;
    RestoreDBClusterToPointInTime =>
        RestoreDBClusterToPointInTimeRequest, RestoreDBClusterToPointInTimeResult;
    CreateDBInstanceReadReplica =>
        CreateDBInstanceReadReplicaRequest, CreateDBInstanceReadReplicaResult;
    RestoreDBInstanceFromDBSnapshot =>
        RestoreDBInstanceFromDBSnapshotRequest, RestoreDBInstanceFromDBSnapshotResult;
    RestoreDBInstanceFromS3 => RestoreDBInstanceFromS3Request, RestoreDBInstanceFromS3Result;
    CopyDBSnapshot => CopyDBSnapshotRequest, CopyDBSnapshotResult;
    DescribeDBSnapshots => DescribeDBSnapshotsRequest, DescribeDBSnapshotsResult;
    DescribeOrderableDBInstanceOptions =>
        DescribeOrderableDBInstanceOptionsRequest, DescribeOrderableDBInstanceOptionsResult;
    DescribeOptionGroupOptions =>
        DescribeOptionGroupOptionsRequest, DescribeOptionGroupOptionsResult;
    RegisterDBProxyTargets => RegisterDBProxyTargetsRequest, RegisterDBProxyTargetsResult;
}

impl RdsRequest {
    /// Decode `parameters` for the operation named by `action`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAction` for an unknown action name, otherwise the errors
    /// of [`RdsRequest::from_json`].
    pub fn from_action(action: &str, parameters: Value) -> Result<Self, RdsError> {
        let operation =
            RdsOperation::from_name(action).ok_or_else(|| RdsError::invalid_action(action))?;
        Self::from_json(operation, parameters)
    }
}

fn decode<T: RdsInput>(parameters: Value) -> Result<T, RdsError> {
    serde_json::from_value(parameters).map_err(|e| {
        RdsError::invalid_parameter_value(format!("invalid {} request: {e}", T::OPERATION))
            .with_source(e)
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::RdsErrorCode;
    use crate::types::Tag;

    #[test]
    fn test_should_bind_each_input_to_its_operation() {
        assert_eq!(
            CopyDBClusterSnapshotRequest::OPERATION,
            RdsOperation::CopyDBClusterSnapshot
        );
        assert_eq!(
            RegisterDBProxyTargetsRequest::OPERATION,
            RdsOperation::RegisterDBProxyTargets
        );
        assert_eq!(
            DescribeOptionGroupOptionsRequest::OPERATION,
            RdsOperation::DescribeOptionGroupOptions
        );
    }

    #[test]
    fn test_should_decode_every_operation_from_empty_document() {
        for op in RdsOperation::ALL {
            let req = RdsRequest::from_json(op, json!({})).unwrap();
            assert_eq!(req.operation(), op);
            assert_eq!(req.to_string(), "{}");
        }
    }

    #[test]
    fn test_should_decode_request_by_action_name() {
        let req = RdsRequest::from_action(
            "CopyDBClusterSnapshot",
            json!({
                "SourceDBClusterSnapshotIdentifier": "my-cluster-snapshot1",
                "TargetDBClusterSnapshotIdentifier": "my-cluster-snapshot2",
                "CopyTags": true,
                "Tags": [{"Key": "env", "Value": "dev"}]
            }),
        )
        .unwrap();

        let expected = CopyDBClusterSnapshotRequest::default()
            .with_source_db_cluster_snapshot_identifier("my-cluster-snapshot1")
            .with_target_db_cluster_snapshot_identifier("my-cluster-snapshot2")
            .with_copy_tags(true)
            .with_tags([Tag::new("env", "dev")]);
        assert_eq!(req, RdsRequest::from(expected));
    }

    #[test]
    fn test_should_reject_unknown_action() {
        let err = RdsRequest::from_action("DeleteEverything", json!({})).unwrap_err();
        assert_eq!(err.code, RdsErrorCode::InvalidAction);
        assert!(err.message.contains("DeleteEverything"));
    }

    #[test]
    fn test_should_reject_mistyped_parameter() {
        let err = RdsRequest::from_json(
            RdsOperation::ModifyDBCluster,
            json!({"DBClusterIdentifier": "aurora-1", "Port": "not-a-port"}),
        )
        .unwrap_err();
        assert_eq!(err.code, RdsErrorCode::InvalidParameterValue);
        assert!(err.message.contains("ModifyDBCluster"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_should_encode_only_set_members() {
        let req = RdsRequest::from(
            RegisterDBProxyTargetsRequest::default()
                .with_db_proxy_name("proxy-1")
                .with_db_instance_identifiers(["db-1", "db-2"]),
        );
        assert_eq!(
            req.to_json().unwrap(),
            json!({"DBProxyName": "proxy-1", "DBInstanceIdentifiers": ["db-1", "db-2"]})
        );
    }

    #[test]
    fn test_should_display_inner_request() {
        let req = RdsRequest::from(DescribeDBSnapshotsRequest::default().with_max_records(20));
        assert_eq!(req.to_string(), "{MaxRecords: 20}");
        assert_eq!(req.operation(), RdsOperation::DescribeDBSnapshots);
    }
}
