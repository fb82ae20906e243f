//! Result shapes returned by the RDS operations.

mod cluster;
mod instance;
mod options;
mod proxy;
mod snapshot;

pub use cluster::{
    CopyDBClusterSnapshotResult, CreateDBClusterResult, ModifyDBClusterResult,
    RestoreDBClusterFromS3Result, RestoreDBClusterFromSnapshotResult,
    RestoreDBClusterToPointInTimeResult,
};
pub use instance::{
    CreateDBInstanceReadReplicaResult, RestoreDBInstanceFromDBSnapshotResult,
    RestoreDBInstanceFromS3Result,
};
pub use options::{DescribeOptionGroupOptionsResult, DescribeOrderableDBInstanceOptionsResult};
pub use proxy::RegisterDBProxyTargetsResult;
pub use snapshot::{CopyDBSnapshotResult, DescribeDBSnapshotsResult};
