//! RDS operation enum.

use std::fmt;

/// All modelled RDS operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RdsOperation {
    // DB clusters
    /// Copy a DB cluster snapshot.
    CopyDBClusterSnapshot,
    /// Create an Aurora DB cluster.
    CreateDBCluster,
    /// Modify the settings of a DB cluster.
    ModifyDBCluster,
    /// Create a DB cluster from a backup stored in Amazon S3.
    RestoreDBClusterFromS3,
    /// Create a DB cluster from a DB snapshot or DB cluster snapshot.
    RestoreDBClusterFromSnapshot,
    /// Restore a DB cluster to an arbitrary point in time.
    RestoreDBClusterToPointInTime,

    // DB instances
    /// Create a read replica of a DB instance.
    CreateDBInstanceReadReplica,
    /// Create a DB instance from a DB snapshot.
    RestoreDBInstanceFromDBSnapshot,
    /// Create a DB instance from a MySQL backup stored in Amazon S3.
    RestoreDBInstanceFromS3,

    // DB snapshots
    /// Copy a DB snapshot.
    CopyDBSnapshot,
    /// Describe DB snapshots.
    DescribeDBSnapshots,

    // Catalog
    /// List the orderable DB instance options for an engine.
    DescribeOrderableDBInstanceOptions,
    /// List the options available to an option group.
    DescribeOptionGroupOptions,

    // RDS Proxy
    /// Register DB instances or clusters with a proxy target group.
    RegisterDBProxyTargets,
}

impl RdsOperation {
    /// Every modelled operation, in declaration order.
    pub const ALL: [Self; 14] = [
        Self::CopyDBClusterSnapshot,
        Self::CreateDBCluster,
        Self::ModifyDBCluster,
        Self::RestoreDBClusterFromS3,
        Self::RestoreDBClusterFromSnapshot,
        Self::RestoreDBClusterToPointInTime,
        Self::CreateDBInstanceReadReplica,
        Self::RestoreDBInstanceFromDBSnapshot,
        Self::RestoreDBInstanceFromS3,
        Self::CopyDBSnapshot,
        Self::DescribeDBSnapshots,
        Self::DescribeOrderableDBInstanceOptions,
        Self::DescribeOptionGroupOptions,
        Self::RegisterDBProxyTargets,
    ];

    /// Returns the AWS action name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CopyDBClusterSnapshot => "CopyDBClusterSnapshot",
            Self::CreateDBCluster => "CreateDBCluster",
            Self::ModifyDBCluster => "ModifyDBCluster",
            Self::RestoreDBClusterFromS3 => "RestoreDBClusterFromS3",
            Self::RestoreDBClusterFromSnapshot => "RestoreDBClusterFromSnapshot",
            Self::RestoreDBClusterToPointInTime => "RestoreDBClusterToPointInTime",
            Self::CreateDBInstanceReadReplica => "CreateDBInstanceReadReplica",
            Self::RestoreDBInstanceFromDBSnapshot => "RestoreDBInstanceFromDBSnapshot",
            Self::RestoreDBInstanceFromS3 => "RestoreDBInstanceFromS3",
            Self::CopyDBSnapshot => "CopyDBSnapshot",
            Self::DescribeDBSnapshots => "DescribeDBSnapshots",
            Self::DescribeOrderableDBInstanceOptions => "DescribeOrderableDBInstanceOptions",
            Self::DescribeOptionGroupOptions => "DescribeOptionGroupOptions",
            Self::RegisterDBProxyTargets => "RegisterDBProxyTargets",
        }
    }

    /// Parse an action name string into an `RdsOperation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "CopyDBClusterSnapshot" => Some(Self::CopyDBClusterSnapshot),
            "CreateDBCluster" => Some(Self::CreateDBCluster),
            "ModifyDBCluster" => Some(Self::ModifyDBCluster),
            "RestoreDBClusterFromS3" => Some(Self::RestoreDBClusterFromS3),
            "RestoreDBClusterFromSnapshot" => Some(Self::RestoreDBClusterFromSnapshot),
            "RestoreDBClusterToPointInTime" => Some(Self::RestoreDBClusterToPointInTime),
            "CreateDBInstanceReadReplica" => Some(Self::CreateDBInstanceReadReplica),
            "RestoreDBInstanceFromDBSnapshot" => Some(Self::RestoreDBInstanceFromDBSnapshot),
            "RestoreDBInstanceFromS3" => Some(Self::RestoreDBInstanceFromS3),
            "CopyDBSnapshot" => Some(Self::CopyDBSnapshot),
            "DescribeDBSnapshots" => Some(Self::DescribeDBSnapshots),
            "DescribeOrderableDBInstanceOptions" => Some(Self::DescribeOrderableDBInstanceOptions),
            "DescribeOptionGroupOptions" => Some(Self::DescribeOptionGroupOptions),
            "RegisterDBProxyTargets" => Some(Self::RegisterDBProxyTargets),
            _ => None,
        }
    }
}

impl fmt::Display for RdsOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_roundtrip_every_operation_name() {
        for op in RdsOperation::ALL {
            assert_eq!(RdsOperation::from_name(op.as_str()), Some(op));
            assert_eq!(op.to_string(), op.as_str());
        }
    }

    #[test]
    fn test_should_reject_unknown_operation_name() {
        assert_eq!(RdsOperation::from_name("DeleteDBCluster"), None);
        assert_eq!(RdsOperation::from_name("copydbclustersnapshot"), None);
        assert_eq!(RdsOperation::from_name(""), None);
    }

    #[test]
    fn test_should_list_distinct_operations() {
        let names: std::collections::HashSet<_> =
            RdsOperation::ALL.iter().map(RdsOperation::as_str).collect();
        assert_eq!(names.len(), RdsOperation::ALL.len());
    }
}
