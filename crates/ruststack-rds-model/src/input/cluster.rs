//! Input types for DB cluster operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{CloudwatchLogsExportConfiguration, ScalingConfiguration, Tag};

/// Copies a snapshot of a DB cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CopyDBClusterSnapshotRequest {
    /// The identifier of the DB cluster snapshot to copy.
    #[serde(rename = "SourceDBClusterSnapshotIdentifier")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_db_cluster_snapshot_identifier: Option<String>,

    /// The identifier of the new DB cluster snapshot to create from the source DB cluster
    /// snapshot.
    #[serde(rename = "TargetDBClusterSnapshotIdentifier")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_db_cluster_snapshot_identifier: Option<String>,

    /// The AWS KMS key ID for an encrypted DB cluster snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,

    /// The URL that contains a Signature Version 4 signed request for the CopyDBClusterSnapshot
    /// API action in the AWS Region that contains the source DB cluster snapshot to copy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_signed_url: Option<String>,

    /// A value that indicates whether to copy all tags from the source DB cluster snapshot to
    /// the target DB cluster snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags: Option<bool>,

    /// A list of tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CopyDBClusterSnapshotRequest {
    #[must_use]
    pub fn with_source_db_cluster_snapshot_identifier(mut self, value: impl Into<String>) -> Self {
        self.source_db_cluster_snapshot_identifier = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_target_db_cluster_snapshot_identifier(mut self, value: impl Into<String>) -> Self {
        self.target_db_cluster_snapshot_identifier = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_kms_key_id(mut self, value: impl Into<String>) -> Self {
        self.kms_key_id = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_pre_signed_url(mut self, value: impl Into<String>) -> Self {
        self.pre_signed_url = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_copy_tags(mut self, value: bool) -> Self {
        self.copy_tags = Some(value);
        self
    }

    /// Appends to `Tags`, creating the list if it is unset.
    #[must_use]
    pub fn with_tags<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Tag>,
    {
        self.tags
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }
}

/// Creates a new Amazon Aurora DB cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDBClusterRequest {
    /// A list of Availability Zones (AZs) where instances in the DB cluster can be created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zones: Option<Vec<String>>,

    /// The number of days for which automated backups are retained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_retention_period: Option<i32>,

    /// A value that indicates that the DB cluster should be associated with the specified
    /// CharacterSet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_set_name: Option<String>,

    /// The name for your database of up to 64 alphanumeric characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,

    /// The DB cluster identifier.
    #[serde(rename = "DBClusterIdentifier")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cluster_identifier: Option<String>,

    /// The name of the DB cluster parameter group to associate with this DB cluster.
    #[serde(rename = "DBClusterParameterGroupName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cluster_parameter_group_name: Option<String>,

    /// A list of EC2 VPC security groups to associate with this DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_ids: Option<Vec<String>>,

    /// A DB subnet group to associate with this DB cluster.
    #[serde(rename = "DBSubnetGroupName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_subnet_group_name: Option<String>,

    /// The name of the database engine to be used for this DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,

    /// The version number of the database engine to use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,

    /// The port number on which the instances in the DB cluster accept connections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,

    /// The name of the master user for the DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_username: Option<String>,

    /// The password for the master database user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_user_password: Option<String>,

    /// A value that indicates that the DB cluster should be associated with the specified
    /// option group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,

    /// The daily time range during which automated backups are created if automated backups are
    /// enabled using the BackupRetentionPeriod parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_backup_window: Option<String>,

    /// The weekly time range during which system maintenance can occur, in Universal
    /// Coordinated Time (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_maintenance_window: Option<String>,

    /// The Amazon Resource Name (ARN) of the source DB instance or DB cluster if this DB
    /// cluster is created as a read replica.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_source_identifier: Option<String>,

    /// Tags to assign to the DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    /// A value that indicates whether the DB cluster is encrypted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_encrypted: Option<bool>,

    /// The AWS KMS key identifier for an encrypted DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,

    /// A URL that contains a Signature Version 4 signed request for the CreateDBCluster action
    /// to be called in the source AWS Region where the DB cluster is replicated from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_signed_url: Option<String>,

    /// A value that indicates whether to enable mapping of AWS Identity and Access Management
    /// (IAM) accounts to database accounts.
    #[serde(rename = "EnableIAMDatabaseAuthentication")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_iam_database_authentication: Option<bool>,

    /// The target backtrack window, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backtrack_window: Option<i64>,

    /// The list of log types that need to be enabled for exporting to CloudWatch Logs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_cloudwatch_logs_exports: Option<Vec<String>>,

    /// The DB engine mode of the DB cluster, either provisioned, serverless, parallelquery,
    /// global, or multimaster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_mode: Option<String>,

    /// For DB clusters in serverless DB engine mode, the scaling properties of the DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_configuration: Option<ScalingConfiguration>,

    /// A value that indicates whether the DB cluster has deletion protection enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,

    /// The global cluster ID of an Aurora cluster that becomes the primary cluster in the new
    /// global database cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_cluster_identifier: Option<String>,

    /// A value that indicates whether to enable the HTTP endpoint for an Aurora Serverless DB
    /// cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_http_endpoint: Option<bool>,

    /// A value that indicates whether to copy all tags from the DB cluster to snapshots of the
    /// DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_snapshot: Option<bool>,

    /// The Active Directory directory ID to create the DB cluster in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Specify the name of the IAM role to be used when making API calls to the Directory
    /// Service.
    #[serde(rename = "DomainIAMRoleName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_iam_role_name: Option<String>,
}

impl CreateDBClusterRequest {
    /// Appends to `AvailabilityZones`, creating the list if it is unset.
    #[must_use]
    pub fn with_availability_zones<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.availability_zones
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_backup_retention_period(mut self, value: i32) -> Self {
        self.backup_retention_period = Some(value);
        self
    }

    #[must_use]
    pub fn with_character_set_name(mut self, value: impl Into<String>) -> Self {
        self.character_set_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_database_name(mut self, value: impl Into<String>) -> Self {
        self.database_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_db_cluster_identifier(mut self, value: impl Into<String>) -> Self {
        self.db_cluster_identifier = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_db_cluster_parameter_group_name(mut self, value: impl Into<String>) -> Self {
        self.db_cluster_parameter_group_name = Some(value.into());
        self
    }

    /// Appends to `VpcSecurityGroupIds`, creating the list if it is unset.
    #[must_use]
    pub fn with_vpc_security_group_ids<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.vpc_security_group_ids
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_db_subnet_group_name(mut self, value: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_engine(mut self, value: impl Into<String>) -> Self {
        self.engine = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_engine_version(mut self, value: impl Into<String>) -> Self {
        self.engine_version = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_port(mut self, value: i32) -> Self {
        self.port = Some(value);
        self
    }

    #[must_use]
    pub fn with_master_username(mut self, value: impl Into<String>) -> Self {
        self.master_username = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_master_user_password(mut self, value: impl Into<String>) -> Self {
        self.master_user_password = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_option_group_name(mut self, value: impl Into<String>) -> Self {
        self.option_group_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_preferred_backup_window(mut self, value: impl Into<String>) -> Self {
        self.preferred_backup_window = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_preferred_maintenance_window(mut self, value: impl Into<String>) -> Self {
        self.preferred_maintenance_window = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_replication_source_identifier(mut self, value: impl Into<String>) -> Self {
        self.replication_source_identifier = Some(value.into());
        self
    }

    /// Appends to `Tags`, creating the list if it is unset.
    #[must_use]
    pub fn with_tags<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Tag>,
    {
        self.tags
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_storage_encrypted(mut self, value: bool) -> Self {
        self.storage_encrypted = Some(value);
        self
    }

    #[must_use]
    pub fn with_kms_key_id(mut self, value: impl Into<String>) -> Self {
        self.kms_key_id = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_pre_signed_url(mut self, value: impl Into<String>) -> Self {
        self.pre_signed_url = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_enable_iam_database_authentication(mut self, value: bool) -> Self {
        self.enable_iam_database_authentication = Some(value);
        self
    }

    #[must_use]
    pub fn with_backtrack_window(mut self, value: i64) -> Self {
        self.backtrack_window = Some(value);
        self
    }

    /// Appends to `EnableCloudwatchLogsExports`, creating the list if it is unset.
    #[must_use]
    pub fn with_enable_cloudwatch_logs_exports<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.enable_cloudwatch_logs_exports
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_engine_mode(mut self, value: impl Into<String>) -> Self {
        self.engine_mode = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_scaling_configuration(mut self, value: ScalingConfiguration) -> Self {
        self.scaling_configuration = Some(value);
        self
    }

    #[must_use]
    pub fn with_deletion_protection(mut self, value: bool) -> Self {
        self.deletion_protection = Some(value);
        self
    }

    #[must_use]
    pub fn with_global_cluster_identifier(mut self, value: impl Into<String>) -> Self {
        self.global_cluster_identifier = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_enable_http_endpoint(mut self, value: bool) -> Self {
        self.enable_http_endpoint = Some(value);
        self
    }

    #[must_use]
    pub fn with_copy_tags_to_snapshot(mut self, value: bool) -> Self {
        self.copy_tags_to_snapshot = Some(value);
        self
    }

    #[must_use]
    pub fn with_domain(mut self, value: impl Into<String>) -> Self {
        self.domain = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_domain_iam_role_name(mut self, value: impl Into<String>) -> Self {
        self.domain_iam_role_name = Some(value.into());
        self
    }
}

/// Modify a setting for an Amazon Aurora DB cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyDBClusterRequest {
    /// The DB cluster identifier for the cluster being modified.
    #[serde(rename = "DBClusterIdentifier")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cluster_identifier: Option<String>,

    /// The new DB cluster identifier for the DB cluster when renaming a DB cluster.
    #[serde(rename = "NewDBClusterIdentifier")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_db_cluster_identifier: Option<String>,

    /// A value that indicates whether the modifications in this request and any pending
    /// modifications are asynchronously applied as soon as possible, regardless of the
    /// PreferredMaintenanceWindow setting for the DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_immediately: Option<bool>,

    /// The number of days for which automated backups are retained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_retention_period: Option<i32>,

    /// The name of the DB cluster parameter group to use for the DB cluster.
    #[serde(rename = "DBClusterParameterGroupName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cluster_parameter_group_name: Option<String>,

    /// A list of VPC security groups that the DB cluster will belong to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_ids: Option<Vec<String>>,

    /// The port number on which the DB cluster accepts connections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,

    /// The new password for the master database user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_user_password: Option<String>,

    /// A value that indicates that the DB cluster should be associated with the specified
    /// option group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,

    /// The daily time range during which automated backups are created if automated backups are
    /// enabled, using the BackupRetentionPeriod parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_backup_window: Option<String>,

    /// The weekly time range during which system maintenance can occur, in Universal
    /// Coordinated Time (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_maintenance_window: Option<String>,

    /// A value that indicates whether to enable mapping of AWS Identity and Access Management
    /// (IAM) accounts to database accounts.
    #[serde(rename = "EnableIAMDatabaseAuthentication")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_iam_database_authentication: Option<bool>,

    /// The target backtrack window, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backtrack_window: Option<i64>,

    /// The configuration setting for the log types to be enabled for export to CloudWatch Logs
    /// for a specific DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloudwatch_logs_export_configuration: Option<CloudwatchLogsExportConfiguration>,

    /// The version number of the database engine to which you want to upgrade.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,

    /// A value that indicates whether major version upgrades are allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_major_version_upgrade: Option<bool>,

    /// The name of the DB parameter group to apply to all instances of the DB cluster.
    #[serde(rename = "DBInstanceParameterGroupName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_instance_parameter_group_name: Option<String>,

    /// The Active Directory directory ID to move the DB cluster to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Specify the name of the IAM role to be used when making API calls to the Directory
    /// Service.
    #[serde(rename = "DomainIAMRoleName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_iam_role_name: Option<String>,

    /// The scaling properties of the DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_configuration: Option<ScalingConfiguration>,

    /// A value that indicates whether the DB cluster has deletion protection enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,

    /// A value that indicates whether to enable the HTTP endpoint for an Aurora Serverless DB
    /// cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_http_endpoint: Option<bool>,

    /// A value that indicates whether to copy all tags from the DB cluster to snapshots of the
    /// DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_snapshot: Option<bool>,
}

impl ModifyDBClusterRequest {
    #[must_use]
    pub fn with_db_cluster_identifier(mut self, value: impl Into<String>) -> Self {
        self.db_cluster_identifier = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_new_db_cluster_identifier(mut self, value: impl Into<String>) -> Self {
        self.new_db_cluster_identifier = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_apply_immediately(mut self, value: bool) -> Self {
        self.apply_immediately = Some(value);
        self
    }

    #[must_use]
    pub fn with_backup_retention_period(mut self, value: i32) -> Self {
        self.backup_retention_period = Some(value);
        self
    }

    #[must_use]
    pub fn with_db_cluster_parameter_group_name(mut self, value: impl Into<String>) -> Self {
        self.db_cluster_parameter_group_name = Some(value.into());
        self
    }

    /// Appends to `VpcSecurityGroupIds`, creating the list if it is unset.
    #[must_use]
    pub fn with_vpc_security_group_ids<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.vpc_security_group_ids
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_port(mut self, value: i32) -> Self {
        self.port = Some(value);
        self
    }

    #[must_use]
    pub fn with_master_user_password(mut self, value: impl Into<String>) -> Self {
        self.master_user_password = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_option_group_name(mut self, value: impl Into<String>) -> Self {
        self.option_group_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_preferred_backup_window(mut self, value: impl Into<String>) -> Self {
        self.preferred_backup_window = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_preferred_maintenance_window(mut self, value: impl Into<String>) -> Self {
        self.preferred_maintenance_window = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_enable_iam_database_authentication(mut self, value: bool) -> Self {
        self.enable_iam_database_authentication = Some(value);
        self
    }

    #[must_use]
    pub fn with_backtrack_window(mut self, value: i64) -> Self {
        self.backtrack_window = Some(value);
        self
    }

    #[must_use]
    pub fn with_cloudwatch_logs_export_configuration(
        mut self,
        value: CloudwatchLogsExportConfiguration,
    ) -> Self {
        self.cloudwatch_logs_export_configuration = Some(value);
        self
    }

    #[must_use]
    pub fn with_engine_version(mut self, value: impl Into<String>) -> Self {
        self.engine_version = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_allow_major_version_upgrade(mut self, value: bool) -> Self {
        self.allow_major_version_upgrade = Some(value);
        self
    }

    #[must_use]
    pub fn with_db_instance_parameter_group_name(mut self, value: impl Into<String>) -> Self {
        self.db_instance_parameter_group_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_domain(mut self, value: impl Into<String>) -> Self {
        self.domain = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_domain_iam_role_name(mut self, value: impl Into<String>) -> Self {
        self.domain_iam_role_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_scaling_configuration(mut self, value: ScalingConfiguration) -> Self {
        self.scaling_configuration = Some(value);
        self
    }

    #[must_use]
    pub fn with_deletion_protection(mut self, value: bool) -> Self {
        self.deletion_protection = Some(value);
        self
    }

    #[must_use]
    pub fn with_enable_http_endpoint(mut self, value: bool) -> Self {
        self.enable_http_endpoint = Some(value);
        self
    }

    #[must_use]
    pub fn with_copy_tags_to_snapshot(mut self, value: bool) -> Self {
        self.copy_tags_to_snapshot = Some(value);
        self
    }
}

/// Creates an Amazon Aurora DB cluster from data stored in an Amazon S3 bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreDBClusterFromS3Request {
    /// A list of Availability Zones (AZs) where instances in the restored DB cluster can be
    /// created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zones: Option<Vec<String>>,

    /// The number of days for which automated backups of the restored DB cluster are retained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_retention_period: Option<i32>,

    /// A value that indicates that the restored DB cluster should be associated with the
    /// specified CharacterSet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_set_name: Option<String>,

    /// The database name for the restored DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,

    /// The name of the DB cluster to create from the source data in the Amazon S3 bucket.
    #[serde(rename = "DBClusterIdentifier")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cluster_identifier: Option<String>,

    /// The name of the DB cluster parameter group to associate with the restored DB cluster.
    #[serde(rename = "DBClusterParameterGroupName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cluster_parameter_group_name: Option<String>,

    /// A list of EC2 VPC security groups to associate with the restored DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_ids: Option<Vec<String>>,

    /// A DB subnet group to associate with the restored DB cluster.
    #[serde(rename = "DBSubnetGroupName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_subnet_group_name: Option<String>,

    /// The name of the database engine to be used for the restored DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,

    /// The version number of the database engine to use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,

    /// The port number on which the instances in the restored DB cluster accept connections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,

    /// The name of the master user for the restored DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_username: Option<String>,

    /// The password for the master database user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_user_password: Option<String>,

    /// A value that indicates that the restored DB cluster should be associated with the
    /// specified option group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,

    /// The daily time range during which automated backups are created if automated backups are
    /// enabled using the BackupRetentionPeriod parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_backup_window: Option<String>,

    /// The weekly time range during which system maintenance can occur, in Universal
    /// Coordinated Time (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_maintenance_window: Option<String>,

    /// A list of tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    /// A value that indicates whether the restored DB cluster is encrypted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_encrypted: Option<bool>,

    /// The AWS KMS key identifier for an encrypted DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,

    /// A value that indicates whether to enable mapping of AWS Identity and Access Management
    /// (IAM) accounts to database accounts.
    #[serde(rename = "EnableIAMDatabaseAuthentication")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_iam_database_authentication: Option<bool>,

    /// The identifier for the database engine that was backed up to create the files stored in
    /// the Amazon S3 bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_engine: Option<String>,

    /// The version of the database that the backup files were created from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_engine_version: Option<String>,

    /// The name of the Amazon S3 bucket that contains the data used to create the Amazon Aurora
    /// DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_bucket_name: Option<String>,

    /// The prefix for all of the file names that contain the data used to create the Amazon
    /// Aurora DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_prefix: Option<String>,

    /// The Amazon Resource Name (ARN) of the AWS Identity and Access Management (IAM) role that
    /// authorizes Amazon RDS to access the Amazon S3 bucket on your behalf.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_ingestion_role_arn: Option<String>,

    /// The target backtrack window, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backtrack_window: Option<i64>,

    /// The list of logs that the restored DB cluster is to export to CloudWatch Logs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_cloudwatch_logs_exports: Option<Vec<String>>,

    /// A value that indicates whether the DB cluster has deletion protection enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,

    /// A value that indicates whether to copy all tags from the restored DB cluster to
    /// snapshots of the restored DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_snapshot: Option<bool>,

    /// Specify the Active Directory directory ID to restore the DB cluster in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Specify the name of the IAM role to be used when making API calls to the Directory
    /// Service.
    #[serde(rename = "DomainIAMRoleName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_iam_role_name: Option<String>,
}

impl RestoreDBClusterFromS3Request {
    /// Appends to `AvailabilityZones`, creating the list if it is unset.
    #[must_use]
    pub fn with_availability_zones<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.availability_zones
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_backup_retention_period(mut self, value: i32) -> Self {
        self.backup_retention_period = Some(value);
        self
    }

    #[must_use]
    pub fn with_character_set_name(mut self, value: impl Into<String>) -> Self {
        self.character_set_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_database_name(mut self, value: impl Into<String>) -> Self {
        self.database_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_db_cluster_identifier(mut self, value: impl Into<String>) -> Self {
        self.db_cluster_identifier = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_db_cluster_parameter_group_name(mut self, value: impl Into<String>) -> Self {
        self.db_cluster_parameter_group_name = Some(value.into());
        self
    }

    /// Appends to `VpcSecurityGroupIds`, creating the list if it is unset.
    #[must_use]
    pub fn with_vpc_security_group_ids<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.vpc_security_group_ids
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_db_subnet_group_name(mut self, value: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_engine(mut self, value: impl Into<String>) -> Self {
        self.engine = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_engine_version(mut self, value: impl Into<String>) -> Self {
        self.engine_version = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_port(mut self, value: i32) -> Self {
        self.port = Some(value);
        self
    }

    #[must_use]
    pub fn with_master_username(mut self, value: impl Into<String>) -> Self {
        self.master_username = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_master_user_password(mut self, value: impl Into<String>) -> Self {
        self.master_user_password = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_option_group_name(mut self, value: impl Into<String>) -> Self {
        self.option_group_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_preferred_backup_window(mut self, value: impl Into<String>) -> Self {
        self.preferred_backup_window = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_preferred_maintenance_window(mut self, value: impl Into<String>) -> Self {
        self.preferred_maintenance_window = Some(value.into());
        self
    }

    /// Appends to `Tags`, creating the list if it is unset.
    #[must_use]
    pub fn with_tags<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Tag>,
    {
        self.tags
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_storage_encrypted(mut self, value: bool) -> Self {
        self.storage_encrypted = Some(value);
        self
    }

    #[must_use]
    pub fn with_kms_key_id(mut self, value: impl Into<String>) -> Self {
        self.kms_key_id = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_enable_iam_database_authentication(mut self, value: bool) -> Self {
        self.enable_iam_database_authentication = Some(value);
        self
    }

    #[must_use]
    pub fn with_source_engine(mut self, value: impl Into<String>) -> Self {
        self.source_engine = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_source_engine_version(mut self, value: impl Into<String>) -> Self {
        self.source_engine_version = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_s3_bucket_name(mut self, value: impl Into<String>) -> Self {
        self.s3_bucket_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_s3_prefix(mut self, value: impl Into<String>) -> Self {
        self.s3_prefix = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_s3_ingestion_role_arn(mut self, value: impl Into<String>) -> Self {
        self.s3_ingestion_role_arn = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_backtrack_window(mut self, value: i64) -> Self {
        self.backtrack_window = Some(value);
        self
    }

    /// Appends to `EnableCloudwatchLogsExports`, creating the list if it is unset.
    #[must_use]
    pub fn with_enable_cloudwatch_logs_exports<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.enable_cloudwatch_logs_exports
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_deletion_protection(mut self, value: bool) -> Self {
        self.deletion_protection = Some(value);
        self
    }

    #[must_use]
    pub fn with_copy_tags_to_snapshot(mut self, value: bool) -> Self {
        self.copy_tags_to_snapshot = Some(value);
        self
    }

    #[must_use]
    pub fn with_domain(mut self, value: impl Into<String>) -> Self {
        self.domain = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_domain_iam_role_name(mut self, value: impl Into<String>) -> Self {
        self.domain_iam_role_name = Some(value.into());
        self
    }
}

/// Creates a new DB cluster from a DB snapshot or DB cluster snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreDBClusterFromSnapshotRequest {
    /// Provides the list of Availability Zones (AZs) where instances in the restored DB cluster
    /// can be created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zones: Option<Vec<String>>,

    /// The name of the DB cluster to create from the DB snapshot or DB cluster snapshot.
    #[serde(rename = "DBClusterIdentifier")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cluster_identifier: Option<String>,

    /// The identifier for the DB snapshot or DB cluster snapshot to restore from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_identifier: Option<String>,

    /// The database engine to use for the new DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,

    /// The version of the database engine to use for the new DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,

    /// The port number on which the new DB cluster accepts connections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,

    /// The name of the DB subnet group to use for the new DB cluster.
    #[serde(rename = "DBSubnetGroupName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_subnet_group_name: Option<String>,

    /// The database name for the restored DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,

    /// The name of the option group to use for the restored DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,

    /// A list of VPC security groups that the new DB cluster will belong to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_ids: Option<Vec<String>>,

    /// The tags to be assigned to the restored DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    /// The AWS KMS key identifier to use when restoring an encrypted DB cluster from a DB
    /// snapshot or DB cluster snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,

    /// A value that indicates whether to enable mapping of AWS Identity and Access Management
    /// (IAM) accounts to database accounts.
    #[serde(rename = "EnableIAMDatabaseAuthentication")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_iam_database_authentication: Option<bool>,

    /// The target backtrack window, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backtrack_window: Option<i64>,

    /// The list of logs that the restored DB cluster is to export to Amazon CloudWatch Logs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_cloudwatch_logs_exports: Option<Vec<String>>,

    /// The DB engine mode of the DB cluster, either provisioned, serverless, parallelquery,
    /// global, or multimaster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_mode: Option<String>,

    /// For DB clusters in serverless DB engine mode, the scaling properties of the DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_configuration: Option<ScalingConfiguration>,

    /// The name of the DB cluster parameter group to associate with this DB cluster.
    #[serde(rename = "DBClusterParameterGroupName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cluster_parameter_group_name: Option<String>,

    /// A value that indicates whether the DB cluster has deletion protection enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,

    /// A value that indicates whether to copy all tags from the restored DB cluster to
    /// snapshots of the restored DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_snapshot: Option<bool>,

    /// Specify the Active Directory directory ID to restore the DB cluster in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Specify the name of the IAM role to be used when making API calls to the Directory
    /// Service.
    #[serde(rename = "DomainIAMRoleName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_iam_role_name: Option<String>,
}

impl RestoreDBClusterFromSnapshotRequest {
    /// Appends to `AvailabilityZones`, creating the list if it is unset.
    #[must_use]
    pub fn with_availability_zones<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.availability_zones
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_db_cluster_identifier(mut self, value: impl Into<String>) -> Self {
        self.db_cluster_identifier = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_snapshot_identifier(mut self, value: impl Into<String>) -> Self {
        self.snapshot_identifier = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_engine(mut self, value: impl Into<String>) -> Self {
        self.engine = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_engine_version(mut self, value: impl Into<String>) -> Self {
        self.engine_version = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_port(mut self, value: i32) -> Self {
        self.port = Some(value);
        self
    }

    #[must_use]
    pub fn with_db_subnet_group_name(mut self, value: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_database_name(mut self, value: impl Into<String>) -> Self {
        self.database_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_option_group_name(mut self, value: impl Into<String>) -> Self {
        self.option_group_name = Some(value.into());
        self
    }

    /// Appends to `VpcSecurityGroupIds`, creating the list if it is unset.
    #[must_use]
    pub fn with_vpc_security_group_ids<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.vpc_security_group_ids
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    /// Appends to `Tags`, creating the list if it is unset.
    #[must_use]
    pub fn with_tags<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Tag>,
    {
        self.tags
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_kms_key_id(mut self, value: impl Into<String>) -> Self {
        self.kms_key_id = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_enable_iam_database_authentication(mut self, value: bool) -> Self {
        self.enable_iam_database_authentication = Some(value);
        self
    }

    #[must_use]
    pub fn with_backtrack_window(mut self, value: i64) -> Self {
        self.backtrack_window = Some(value);
        self
    }

    /// Appends to `EnableCloudwatchLogsExports`, creating the list if it is unset.
    #[must_use]
    pub fn with_enable_cloudwatch_logs_exports<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.enable_cloudwatch_logs_exports
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_engine_mode(mut self, value: impl Into<String>) -> Self {
        self.engine_mode = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_scaling_configuration(mut self, value: ScalingConfiguration) -> Self {
        self.scaling_configuration = Some(value);
        self
    }

    #[must_use]
    pub fn with_db_cluster_parameter_group_name(mut self, value: impl Into<String>) -> Self {
        self.db_cluster_parameter_group_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_deletion_protection(mut self, value: bool) -> Self {
        self.deletion_protection = Some(value);
        self
    }

    #[must_use]
    pub fn with_copy_tags_to_snapshot(mut self, value: bool) -> Self {
        self.copy_tags_to_snapshot = Some(value);
        self
    }

    #[must_use]
    pub fn with_domain(mut self, value: impl Into<String>) -> Self {
        self.domain = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_domain_iam_role_name(mut self, value: impl Into<String>) -> Self {
        self.domain_iam_role_name = Some(value.into());
        self
    }
}

/// Restores a DB cluster to an arbitrary point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreDBClusterToPointInTimeRequest {
    /// The name of the new DB cluster to be created.
    #[serde(rename = "DBClusterIdentifier")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cluster_identifier: Option<String>,

    /// The type of restore to be performed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_type: Option<String>,

    /// The identifier of the source DB cluster from which to restore.
    #[serde(rename = "SourceDBClusterIdentifier")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_db_cluster_identifier: Option<String>,

    /// The date and time to restore the DB cluster to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_to_time: Option<DateTime<Utc>>,

    /// A value that indicates whether to restore the DB cluster to the latest restorable backup
    /// time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_latest_restorable_time: Option<bool>,

    /// The port number on which the new DB cluster accepts connections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,

    /// The DB subnet group name to use for the new DB cluster.
    #[serde(rename = "DBSubnetGroupName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_subnet_group_name: Option<String>,

    /// The name of the option group for the new DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,

    /// A list of VPC security groups that the new DB cluster belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_ids: Option<Vec<String>>,

    /// A list of tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    /// The AWS KMS key identifier to use when restoring an encrypted DB cluster from an
    /// encrypted DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,

    /// A value that indicates whether to enable mapping of AWS Identity and Access Management
    /// (IAM) accounts to database accounts.
    #[serde(rename = "EnableIAMDatabaseAuthentication")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_iam_database_authentication: Option<bool>,

    /// The target backtrack window, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backtrack_window: Option<i64>,

    /// The list of logs that the restored DB cluster is to export to CloudWatch Logs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_cloudwatch_logs_exports: Option<Vec<String>>,

    /// The name of the DB cluster parameter group to associate with this DB cluster.
    #[serde(rename = "DBClusterParameterGroupName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cluster_parameter_group_name: Option<String>,

    /// A value that indicates whether the DB cluster has deletion protection enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,

    /// A value that indicates whether to copy all tags from the restored DB cluster to
    /// snapshots of the restored DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_snapshot: Option<bool>,

    /// Specify the Active Directory directory ID to restore the DB cluster in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Specify the name of the IAM role to be used when making API calls to the Directory
    /// Service.
    #[serde(rename = "DomainIAMRoleName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_iam_role_name: Option<String>,
}

impl RestoreDBClusterToPointInTimeRequest {
    #[must_use]
    pub fn with_db_cluster_identifier(mut self, value: impl Into<String>) -> Self {
        self.db_cluster_identifier = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_restore_type(mut self, value: impl Into<String>) -> Self {
        self.restore_type = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_source_db_cluster_identifier(mut self, value: impl Into<String>) -> Self {
        self.source_db_cluster_identifier = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_restore_to_time(mut self, value: DateTime<Utc>) -> Self {
        self.restore_to_time = Some(value);
        self
    }

    #[must_use]
    pub fn with_use_latest_restorable_time(mut self, value: bool) -> Self {
        self.use_latest_restorable_time = Some(value);
        self
    }

    #[must_use]
    pub fn with_port(mut self, value: i32) -> Self {
        self.port = Some(value);
        self
    }

    #[must_use]
    pub fn with_db_subnet_group_name(mut self, value: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_option_group_name(mut self, value: impl Into<String>) -> Self {
        self.option_group_name = Some(value.into());
        self
    }

    /// Appends to `VpcSecurityGroupIds`, creating the list if it is unset.
    #[must_use]
    pub fn with_vpc_security_group_ids<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.vpc_security_group_ids
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    /// Appends to `Tags`, creating the list if it is unset.
    #[must_use]
    pub fn with_tags<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Tag>,
    {
        self.tags
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_kms_key_id(mut self, value: impl Into<String>) -> Self {
        self.kms_key_id = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_enable_iam_database_authentication(mut self, value: bool) -> Self {
        self.enable_iam_database_authentication = Some(value);
        self
    }

    #[must_use]
    pub fn with_backtrack_window(mut self, value: i64) -> Self {
        self.backtrack_window = Some(value);
        self
    }

    /// Appends to `EnableCloudwatchLogsExports`, creating the list if it is unset.
    #[must_use]
    pub fn with_enable_cloudwatch_logs_exports<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.enable_cloudwatch_logs_exports
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_db_cluster_parameter_group_name(mut self, value: impl Into<String>) -> Self {
        self.db_cluster_parameter_group_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_deletion_protection(mut self, value: bool) -> Self {
        self.deletion_protection = Some(value);
        self
    }

    #[must_use]
    pub fn with_copy_tags_to_snapshot(mut self, value: bool) -> Self {
        self.copy_tags_to_snapshot = Some(value);
        self
    }

    #[must_use]
    pub fn with_domain(mut self, value: impl Into<String>) -> Self {
        self.domain = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_domain_iam_role_name(mut self, value: impl Into<String>) -> Self {
        self.domain_iam_role_name = Some(value.into());
        self
    }
}

crate::display::impl_shape_display!(
    CopyDBClusterSnapshotRequest,
    CreateDBClusterRequest,
    ModifyDBClusterRequest,
    RestoreDBClusterFromS3Request,
    RestoreDBClusterFromSnapshotRequest,
    RestoreDBClusterToPointInTimeRequest,
);

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use chrono::TimeZone;

    use super::*;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn copy_request() -> CopyDBClusterSnapshotRequest {
        CopyDBClusterSnapshotRequest::default()
            .with_source_db_cluster_snapshot_identifier("my-cluster-snapshot1")
            .with_target_db_cluster_snapshot_identifier("my-cluster-snapshot2")
            .with_copy_tags(true)
    }

    #[test]
    fn test_should_build_copy_cluster_snapshot_request() {
        let req = copy_request();
        assert_eq!(req.copy_tags, Some(true));
        assert_eq!(req.kms_key_id, None);
        assert!(
            req.to_string()
                .contains("SourceDBClusterSnapshotIdentifier: my-cluster-snapshot1")
        );

        let again = copy_request();
        assert_eq!(req, again);
        assert_eq!(hash_of(&req), hash_of(&again));
    }

    #[test]
    fn test_should_read_back_assigned_fields() {
        let mut req = CopyDBClusterSnapshotRequest::default();
        req.pre_signed_url = Some("https://rds.us-west-2.amazonaws.com/?Action=Copy".to_owned());
        req.copy_tags = Some(false);
        assert_eq!(
            req.pre_signed_url.as_deref(),
            Some("https://rds.us-west-2.amazonaws.com/?Action=Copy")
        );
        assert_eq!(req.copy_tags, Some(false));
        assert_eq!(
            req,
            CopyDBClusterSnapshotRequest::default()
                .with_pre_signed_url("https://rds.us-west-2.amazonaws.com/?Action=Copy")
                .with_copy_tags(false)
        );
    }

    #[test]
    fn test_should_break_equality_when_a_field_changes() {
        let req = copy_request();
        let other = copy_request().with_copy_tags(false);
        assert_ne!(req, other);

        let mut cleared = copy_request();
        cleared.target_db_cluster_snapshot_identifier = None;
        assert_ne!(req, cleared);
        assert!(!cleared.to_string().contains("TargetDBClusterSnapshotIdentifier"));
    }

    #[test]
    fn test_should_append_tags_in_order() {
        let req = CopyDBClusterSnapshotRequest::default()
            .with_tags([Tag::new("a", "1"), Tag::new("b", "2")])
            .with_tags([Tag::new("c", "3")]);
        let keys: Vec<_> = req
            .tags
            .iter()
            .flatten()
            .filter_map(|t| t.key.as_deref())
            .collect();
        assert_eq!(keys, ["a", "b", "c"]);
    }

    #[test]
    fn test_should_replace_list_by_assignment() {
        let mut req = CreateDBClusterRequest::default().with_availability_zones(["us-east-1a"]);
        req.availability_zones = Some(vec!["us-east-1c".to_owned()]);
        assert_eq!(req.availability_zones, Some(vec!["us-east-1c".to_owned()]));
    }

    #[test]
    fn test_should_serialize_point_in_time_restore() {
        let req = RestoreDBClusterToPointInTimeRequest::default()
            .with_db_cluster_identifier("aurora-restored")
            .with_source_db_cluster_identifier("aurora-1")
            .with_restore_to_time(Utc.with_ymd_and_hms(2021, 6, 1, 12, 0, 0).unwrap())
            .with_restore_type("copy-on-write");
        let json = serde_json::to_value(&req).expect("serialize request");
        assert_eq!(json["DBClusterIdentifier"], "aurora-restored");
        assert_eq!(json["SourceDBClusterIdentifier"], "aurora-1");
        assert_eq!(json["RestoreToTime"], "2021-06-01T12:00:00Z");
        assert!(json.get("UseLatestRestorableTime").is_none());
    }

    #[test]
    fn test_should_nest_scaling_configuration_in_modify_request() {
        let req: ModifyDBClusterRequest = serde_json::from_value(serde_json::json!({
            "DBClusterIdentifier": "aurora-1",
            "ScalingConfiguration": {"MinCapacity": 1, "MaxCapacity": 8}
        }))
        .expect("deserialize ModifyDBClusterRequest");
        let scaling = req.scaling_configuration.expect("scaling configuration");
        assert_eq!(scaling.min_capacity, Some(1));
        assert_eq!(scaling.max_capacity, Some(8));
        assert_eq!(scaling.auto_pause, None);
    }
}
