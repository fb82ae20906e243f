//! Output types for DB instance operations.

use serde::{Deserialize, Serialize};

use crate::types::DBInstance;

/// Result of the `CreateDBInstanceReadReplica` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDBInstanceReadReplicaResult {
    /// The newly created read replica.
    #[serde(rename = "DBInstance")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_instance: Option<DBInstance>,
}

impl CreateDBInstanceReadReplicaResult {
    #[must_use]
    pub fn with_db_instance(mut self, value: DBInstance) -> Self {
        self.db_instance = Some(value);
        self
    }
}

/// Result of the `RestoreDBInstanceFromDBSnapshot` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreDBInstanceFromDBSnapshotResult {
    /// The restored DB instance.
    #[serde(rename = "DBInstance")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_instance: Option<DBInstance>,
}

impl RestoreDBInstanceFromDBSnapshotResult {
    #[must_use]
    pub fn with_db_instance(mut self, value: DBInstance) -> Self {
        self.db_instance = Some(value);
        self
    }
}

/// Result of the `RestoreDBInstanceFromS3` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreDBInstanceFromS3Result {
    /// The restored DB instance.
    #[serde(rename = "DBInstance")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_instance: Option<DBInstance>,
}

impl RestoreDBInstanceFromS3Result {
    #[must_use]
    pub fn with_db_instance(mut self, value: DBInstance) -> Self {
        self.db_instance = Some(value);
        self
    }
}

crate::display::impl_shape_display!(
    CreateDBInstanceReadReplicaResult,
    RestoreDBInstanceFromDBSnapshotResult,
    RestoreDBInstanceFromS3Result,
);
