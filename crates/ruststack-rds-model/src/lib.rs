//! RDS model types for RustStack.
//!
//! Client-side shapes for a slice of the Amazon RDS API (version 2014-10-31):
//! one request and one result shape per modelled operation, plus the resource
//! and catalog records they carry. Every member is optional, so an unset member
//! stays distinguishable from a zero value or an empty list. Shapes build
//! fluently through `with_*` methods, compare and hash structurally, and render
//! a compact diagnostic form through `Display`.
//!
//! Request signing, transport and the Query/XML wire protocol are out of scope;
//! the serde derives give each shape a JSON document form using the RDS member
//! names.
// "RDS" and most member names read as code to `doc_markdown`.
#![allow(clippy::doc_markdown)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

pub mod display;
pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod request;
pub mod types;

pub use error::{RdsError, RdsErrorCode};
pub use operations::RdsOperation;
pub use request::{RdsInput, RdsRequest};

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::fmt::{Debug, Display};
    use std::hash::{Hash, Hasher};

    use serde::Serialize;
    use serde::de::DeserializeOwned;

    #[allow(clippy::wildcard_imports)]
    use crate::{input::*, output::*, types::*};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn assert_shape_contract<T>(name: &str)
    where
        T: Default + Clone + Debug + Display + PartialEq + Hash + Send + Sync,
        T: Serialize + DeserializeOwned,
    {
        let shape = T::default();
        assert_eq!(shape.to_string(), "{}", "{name} default rendering");
        assert_eq!(shape, T::default(), "{name} default equality");
        assert_eq!(hash_of(&shape), hash_of(&shape.clone()), "{name} hash");

        let json = serde_json::to_value(&shape).expect("serialize default shape");
        assert_eq!(json, serde_json::json!({}), "{name} default document");
        let parsed: T = serde_json::from_value(json).expect("deserialize default shape");
        assert_eq!(parsed, shape, "{name} round trip");
    }

    macro_rules! sweep {
        ($($ty:ty),* $(,)?) => {
            $(assert_shape_contract::<$ty>(stringify!($ty));)*
        };
    }

    #[test]
    fn test_should_honor_contract_for_shared_shapes() {
        sweep!(
            Tag,
            Filter,
            AvailabilityZone,
            Endpoint,
            ProcessorFeature,
            AvailableProcessorFeature,
            VpcSecurityGroupMembership,
            DomainMembership,
            CloudwatchLogsExportConfiguration,
            PendingCloudwatchLogsExports,
        );
    }

    #[test]
    fn test_should_honor_contract_for_resource_shapes() {
        sweep!(
            DBCluster,
            DBClusterMember,
            DBClusterOptionGroupStatus,
            DBClusterRole,
            DBClusterSnapshot,
            ScalingConfiguration,
            ScalingConfigurationInfo,
            DBInstance,
            DBInstanceRole,
            DBInstanceStatusInfo,
            DBParameterGroupStatus,
            DBSecurityGroupMembership,
            DBSubnetGroup,
            OptionGroupMembership,
            PendingModifiedValues,
            Subnet,
            DBSnapshot,
            MinimumEngineVersionPerAllowedValue,
            OptionGroupOption,
            OptionGroupOptionSetting,
            OptionVersion,
            OrderableDBInstanceOption,
            DBProxyTarget,
            TargetHealth,
        );
    }

    #[test]
    fn test_should_honor_contract_for_request_shapes() {
        sweep!(
            CopyDBClusterSnapshotRequest,
            CreateDBClusterRequest,
            ModifyDBClusterRequest,
            RestoreDBClusterFromS3Request,
            RestoreDBClusterFromSnapshotRequest,
            RestoreDBClusterToPointInTimeRequest,
            CreateDBInstanceReadReplicaRequest,
            RestoreDBInstanceFromDBSnapshotRequest,
            RestoreDBInstanceFromS3Request,
            CopyDBSnapshotRequest,
            DescribeDBSnapshotsRequest,
            DescribeOrderableDBInstanceOptionsRequest,
            DescribeOptionGroupOptionsRequest,
            RegisterDBProxyTargetsRequest,
        );
    }

    #[test]
    fn test_should_honor_contract_for_result_shapes() {
        sweep!(
            CopyDBClusterSnapshotResult,
            CreateDBClusterResult,
            ModifyDBClusterResult,
            RestoreDBClusterFromS3Result,
            RestoreDBClusterFromSnapshotResult,
            RestoreDBClusterToPointInTimeResult,
            CreateDBInstanceReadReplicaResult,
            RestoreDBInstanceFromDBSnapshotResult,
            RestoreDBInstanceFromS3Result,
            CopyDBSnapshotResult,
            DescribeDBSnapshotsResult,
            DescribeOrderableDBInstanceOptionsResult,
            DescribeOptionGroupOptionsResult,
            RegisterDBProxyTargetsResult,
        );
    }
}
