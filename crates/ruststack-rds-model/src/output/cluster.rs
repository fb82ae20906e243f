//! Output types for DB cluster operations.

use serde::{Deserialize, Serialize};

use crate::types::{DBCluster, DBClusterSnapshot};

/// Result of the `CopyDBClusterSnapshot` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CopyDBClusterSnapshotResult {
    /// The newly created DB cluster snapshot.
    #[serde(rename = "DBClusterSnapshot")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cluster_snapshot: Option<DBClusterSnapshot>,
}

impl CopyDBClusterSnapshotResult {
    #[must_use]
    pub fn with_db_cluster_snapshot(mut self, value: DBClusterSnapshot) -> Self {
        self.db_cluster_snapshot = Some(value);
        self
    }
}

/// Result of the `CreateDBCluster` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDBClusterResult {
    /// The newly created DB cluster.
    #[serde(rename = "DBCluster")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cluster: Option<DBCluster>,
}

impl CreateDBClusterResult {
    #[must_use]
    pub fn with_db_cluster(mut self, value: DBCluster) -> Self {
        self.db_cluster = Some(value);
        self
    }
}

/// Result of the `ModifyDBCluster` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyDBClusterResult {
    /// The modified DB cluster.
    #[serde(rename = "DBCluster")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cluster: Option<DBCluster>,
}

impl ModifyDBClusterResult {
    #[must_use]
    pub fn with_db_cluster(mut self, value: DBCluster) -> Self {
        self.db_cluster = Some(value);
        self
    }
}

/// Result of the `RestoreDBClusterFromS3` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreDBClusterFromS3Result {
    /// The restored DB cluster.
    #[serde(rename = "DBCluster")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cluster: Option<DBCluster>,
}

impl RestoreDBClusterFromS3Result {
    #[must_use]
    pub fn with_db_cluster(mut self, value: DBCluster) -> Self {
        self.db_cluster = Some(value);
        self
    }
}

/// Result of the `RestoreDBClusterFromSnapshot` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreDBClusterFromSnapshotResult {
    /// The restored DB cluster.
    #[serde(rename = "DBCluster")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cluster: Option<DBCluster>,
}

impl RestoreDBClusterFromSnapshotResult {
    #[must_use]
    pub fn with_db_cluster(mut self, value: DBCluster) -> Self {
        self.db_cluster = Some(value);
        self
    }
}

/// Result of the `RestoreDBClusterToPointInTime` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreDBClusterToPointInTimeResult {
    /// The restored DB cluster.
    #[serde(rename = "DBCluster")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cluster: Option<DBCluster>,
}

impl RestoreDBClusterToPointInTimeResult {
    #[must_use]
    pub fn with_db_cluster(mut self, value: DBCluster) -> Self {
        self.db_cluster = Some(value);
        self
    }
}

crate::display::impl_shape_display!(
    CopyDBClusterSnapshotResult,
    CreateDBClusterResult,
    ModifyDBClusterResult,
    RestoreDBClusterFromS3Result,
    RestoreDBClusterFromSnapshotResult,
    RestoreDBClusterToPointInTimeResult,
);
