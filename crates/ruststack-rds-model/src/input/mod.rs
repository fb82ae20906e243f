//! Request shapes, one per RDS operation.

mod cluster;
mod instance;
mod options;
mod proxy;
mod snapshot;

pub use cluster::{
    CopyDBClusterSnapshotRequest, CreateDBClusterRequest, ModifyDBClusterRequest,
    RestoreDBClusterFromS3Request, RestoreDBClusterFromSnapshotRequest,
    RestoreDBClusterToPointInTimeRequest,
};
pub use instance::{
    CreateDBInstanceReadReplicaRequest, RestoreDBInstanceFromDBSnapshotRequest,
    RestoreDBInstanceFromS3Request,
};
pub use options::{DescribeOptionGroupOptionsRequest, DescribeOrderableDBInstanceOptionsRequest};
pub use proxy::RegisterDBProxyTargetsRequest;
pub use snapshot::{CopyDBSnapshotRequest, DescribeDBSnapshotsRequest};
