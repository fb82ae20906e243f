//! Aurora DB cluster and DB cluster snapshot records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{DomainMembership, Tag, VpcSecurityGroupMembership};

/// Contains the details of an Amazon Aurora DB cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DBCluster {
    /// For all database engines except Amazon Aurora, AllocatedStorage specifies the allocated
    /// storage size in gibibytes (GiB).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_storage: Option<i32>,

    /// Provides the list of Availability Zones (AZs) where instances in the DB cluster can be
    /// created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zones: Option<Vec<String>>,

    /// Specifies the number of days for which automatic DB snapshots are retained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_retention_period: Option<i32>,

    /// If present, specifies the name of the character set that this cluster is associated
    /// with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_set_name: Option<String>,

    /// Contains the name of the initial database of this DB cluster that was provided at create
    /// time, if one was specified when the DB cluster was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,

    /// Contains a user-supplied DB cluster identifier.
    #[serde(rename = "DBClusterIdentifier")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cluster_identifier: Option<String>,

    /// Specifies the name of the DB cluster parameter group for the DB cluster.
    #[serde(rename = "DBClusterParameterGroup")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cluster_parameter_group: Option<String>,

    /// Specifies information on the subnet group associated with the DB cluster, including the
    /// name, description, and subnets in the subnet group.
    #[serde(rename = "DBSubnetGroup")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_subnet_group: Option<String>,

    /// Specifies the current state of this DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Specifies the progress of the operation as a percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_progress: Option<String>,

    /// The earliest time to which a database can be restored with point-in-time restore.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earliest_restorable_time: Option<DateTime<Utc>>,

    /// Specifies the connection endpoint for the primary instance of the DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// The reader endpoint for the DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reader_endpoint: Option<String>,

    /// Identifies all custom endpoints associated with the cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_endpoints: Option<Vec<String>>,

    /// Specifies whether the DB cluster has instances in multiple Availability Zones.
    #[serde(rename = "MultiAZ")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_az: Option<bool>,

    /// Provides the name of the database engine to be used for this DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,

    /// Indicates the database engine version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,

    /// Specifies the latest time to which a database can be restored with point-in-time
    /// restore.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_restorable_time: Option<DateTime<Utc>>,

    /// Specifies the port that the database engine is listening on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,

    /// Contains the master username for the DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_username: Option<String>,

    /// Provides the list of option group memberships for this DB cluster.
    #[serde(rename = "DBClusterOptionGroupMemberships")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cluster_option_group_memberships: Option<Vec<DBClusterOptionGroupStatus>>,

    /// Specifies the daily time range during which automated backups are created if automated
    /// backups are enabled, as determined by the BackupRetentionPeriod.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_backup_window: Option<String>,

    /// Specifies the weekly time range during which system maintenance can occur, in Universal
    /// Coordinated Time (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_maintenance_window: Option<String>,

    /// Contains the identifier of the source DB cluster if this DB cluster is a read replica.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_source_identifier: Option<String>,

    /// Contains one or more identifiers of the read replicas associated with this DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_replica_identifiers: Option<Vec<String>>,

    /// Provides the list of instances that make up the DB cluster.
    #[serde(rename = "DBClusterMembers")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cluster_members: Option<Vec<DBClusterMember>>,

    /// Provides a list of VPC security groups that the DB cluster belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_groups: Option<Vec<VpcSecurityGroupMembership>>,

    /// Specifies the ID that Amazon Route 53 assigns when you create a hosted zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosted_zone_id: Option<String>,

    /// Specifies whether the DB cluster is encrypted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_encrypted: Option<bool>,

    /// If StorageEncrypted is enabled, the AWS KMS key identifier for the encrypted DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,

    /// The AWS Region-unique, immutable identifier for the DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cluster_resource_id: Option<String>,

    /// The Amazon Resource Name (ARN) for the DB cluster.
    #[serde(rename = "DBClusterArn")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cluster_arn: Option<String>,

    /// Provides a list of the AWS Identity and Access Management (IAM) roles that are
    /// associated with the DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_roles: Option<Vec<DBClusterRole>>,

    /// A value that indicates whether the mapping of AWS Identity and Access Management (IAM)
    /// accounts to database accounts is enabled.
    #[serde(rename = "IAMDatabaseAuthenticationEnabled")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_database_authentication_enabled: Option<bool>,

    /// Identifies the clone group to which the DB cluster is associated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clone_group_id: Option<String>,

    /// Specifies the time when the DB cluster was created, in Universal Coordinated Time (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_create_time: Option<DateTime<Utc>>,

    /// The earliest time to which a DB cluster can be backtracked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earliest_backtrack_time: Option<DateTime<Utc>>,

    /// The target backtrack window, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backtrack_window: Option<i64>,

    /// The number of change records stored for Backtrack.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backtrack_consumed_change_records: Option<i64>,

    /// A list of log types that this DB cluster is configured to export to CloudWatch Logs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_cloudwatch_logs_exports: Option<Vec<String>>,

    /// The current capacity of an Aurora Serverless DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,

    /// The DB engine mode of the DB cluster, either provisioned, serverless, parallelquery,
    /// global, or multimaster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_mode: Option<String>,

    /// Shows the scaling configuration for an Aurora DB cluster in serverless DB engine mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_configuration_info: Option<ScalingConfigurationInfo>,

    /// Indicates if the DB cluster has deletion protection enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,

    /// A value that indicates whether the HTTP endpoint for an Aurora Serverless DB cluster is
    /// enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_endpoint_enabled: Option<bool>,

    /// The mode of the database activity stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_stream_mode: Option<String>,

    /// The status of the database activity stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_stream_status: Option<String>,

    /// The AWS KMS key identifier used for encrypting messages in the database activity stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_stream_kms_key_id: Option<String>,

    /// The name of the Amazon Kinesis data stream used for the database activity stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_stream_kinesis_stream_name: Option<String>,

    /// Specifies whether tags are copied from the DB cluster to snapshots of the DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_snapshot: Option<bool>,

    /// Specifies whether the DB cluster is a clone of a DB cluster owned by a different AWS
    /// account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_account_clone: Option<bool>,

    /// The Active Directory Domain membership records associated with the DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_memberships: Option<Vec<DomainMembership>>,

    /// Specifies whether a secondary cluster in an Aurora global database has write forwarding
    /// enabled, not enabled, or is in the process of enabling it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_write_forwarding_status: Option<String>,

    /// Specifies whether you have requested to enable write forwarding for a secondary cluster
    /// in an Aurora global database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_write_forwarding_requested: Option<bool>,
}

impl DBCluster {
    #[must_use]
    pub fn with_allocated_storage(mut self, value: i32) -> Self {
        self.allocated_storage = Some(value);
        self
    }

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
    pub fn with_db_cluster_parameter_group(mut self, value: impl Into<String>) -> Self {
        self.db_cluster_parameter_group = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_db_subnet_group(mut self, value: impl Into<String>) -> Self {
        self.db_subnet_group = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_percent_progress(mut self, value: impl Into<String>) -> Self {
        self.percent_progress = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_earliest_restorable_time(mut self, value: DateTime<Utc>) -> Self {
        self.earliest_restorable_time = Some(value);
        self
    }

    #[must_use]
    pub fn with_endpoint(mut self, value: impl Into<String>) -> Self {
        self.endpoint = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_reader_endpoint(mut self, value: impl Into<String>) -> Self {
        self.reader_endpoint = Some(value.into());
        self
    }

    /// Appends to `CustomEndpoints`, creating the list if it is unset.
    #[must_use]
    pub fn with_custom_endpoints<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.custom_endpoints
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_multi_az(mut self, value: bool) -> Self {
        self.multi_az = Some(value);
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
    pub fn with_latest_restorable_time(mut self, value: DateTime<Utc>) -> Self {
        self.latest_restorable_time = Some(value);
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

    /// Appends to `DBClusterOptionGroupMemberships`, creating the list if it is unset.
    #[must_use]
    pub fn with_db_cluster_option_group_memberships<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DBClusterOptionGroupStatus>,
    {
        self.db_cluster_option_group_memberships
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
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

    /// Appends to `ReadReplicaIdentifiers`, creating the list if it is unset.
    #[must_use]
    pub fn with_read_replica_identifiers<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.read_replica_identifiers
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    /// Appends to `DBClusterMembers`, creating the list if it is unset.
    #[must_use]
    pub fn with_db_cluster_members<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DBClusterMember>,
    {
        self.db_cluster_members
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    /// Appends to `VpcSecurityGroups`, creating the list if it is unset.
    #[must_use]
    pub fn with_vpc_security_groups<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<VpcSecurityGroupMembership>,
    {
        self.vpc_security_groups
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_hosted_zone_id(mut self, value: impl Into<String>) -> Self {
        self.hosted_zone_id = Some(value.into());
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
    pub fn with_db_cluster_resource_id(mut self, value: impl Into<String>) -> Self {
        self.db_cluster_resource_id = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_db_cluster_arn(mut self, value: impl Into<String>) -> Self {
        self.db_cluster_arn = Some(value.into());
        self
    }

    /// Appends to `AssociatedRoles`, creating the list if it is unset.
    #[must_use]
    pub fn with_associated_roles<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DBClusterRole>,
    {
        self.associated_roles
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_iam_database_authentication_enabled(mut self, value: bool) -> Self {
        self.iam_database_authentication_enabled = Some(value);
        self
    }

    #[must_use]
    pub fn with_clone_group_id(mut self, value: impl Into<String>) -> Self {
        self.clone_group_id = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_cluster_create_time(mut self, value: DateTime<Utc>) -> Self {
        self.cluster_create_time = Some(value);
        self
    }

    #[must_use]
    pub fn with_earliest_backtrack_time(mut self, value: DateTime<Utc>) -> Self {
        self.earliest_backtrack_time = Some(value);
        self
    }

    #[must_use]
    pub fn with_backtrack_window(mut self, value: i64) -> Self {
        self.backtrack_window = Some(value);
        self
    }

    #[must_use]
    pub fn with_backtrack_consumed_change_records(mut self, value: i64) -> Self {
        self.backtrack_consumed_change_records = Some(value);
        self
    }

    /// Appends to `EnabledCloudwatchLogsExports`, creating the list if it is unset.
    #[must_use]
    pub fn with_enabled_cloudwatch_logs_exports<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.enabled_cloudwatch_logs_exports
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_capacity(mut self, value: i32) -> Self {
        self.capacity = Some(value);
        self
    }

    #[must_use]
    pub fn with_engine_mode(mut self, value: impl Into<String>) -> Self {
        self.engine_mode = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_scaling_configuration_info(mut self, value: ScalingConfigurationInfo) -> Self {
        self.scaling_configuration_info = Some(value);
        self
    }

    #[must_use]
    pub fn with_deletion_protection(mut self, value: bool) -> Self {
        self.deletion_protection = Some(value);
        self
    }

    #[must_use]
    pub fn with_http_endpoint_enabled(mut self, value: bool) -> Self {
        self.http_endpoint_enabled = Some(value);
        self
    }

    #[must_use]
    pub fn with_activity_stream_mode(mut self, value: impl Into<String>) -> Self {
        self.activity_stream_mode = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_activity_stream_status(mut self, value: impl Into<String>) -> Self {
        self.activity_stream_status = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_activity_stream_kms_key_id(mut self, value: impl Into<String>) -> Self {
        self.activity_stream_kms_key_id = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_activity_stream_kinesis_stream_name(mut self, value: impl Into<String>) -> Self {
        self.activity_stream_kinesis_stream_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_copy_tags_to_snapshot(mut self, value: bool) -> Self {
        self.copy_tags_to_snapshot = Some(value);
        self
    }

    #[must_use]
    pub fn with_cross_account_clone(mut self, value: bool) -> Self {
        self.cross_account_clone = Some(value);
        self
    }

    /// Appends to `DomainMemberships`, creating the list if it is unset.
    #[must_use]
    pub fn with_domain_memberships<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DomainMembership>,
    {
        self.domain_memberships
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_global_write_forwarding_status(mut self, value: impl Into<String>) -> Self {
        self.global_write_forwarding_status = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_global_write_forwarding_requested(mut self, value: bool) -> Self {
        self.global_write_forwarding_requested = Some(value);
        self
    }
}

/// Contains the details for an Amazon RDS DB cluster snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DBClusterSnapshot {
    /// Provides the list of Availability Zones (AZs) where instances in the DB cluster snapshot
    /// can be restored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zones: Option<Vec<String>>,

    /// Specifies the identifier for the DB cluster snapshot.
    #[serde(rename = "DBClusterSnapshotIdentifier")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cluster_snapshot_identifier: Option<String>,

    /// Specifies the DB cluster identifier of the DB cluster that this DB cluster snapshot was
    /// created from.
    #[serde(rename = "DBClusterIdentifier")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cluster_identifier: Option<String>,

    /// Provides the time when the snapshot was taken, in Universal Coordinated Time (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_create_time: Option<DateTime<Utc>>,

    /// Specifies the name of the database engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,

    /// Specifies the allocated storage size in gibibytes (GiB).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_storage: Option<i32>,

    /// Specifies the status of this DB cluster snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Specifies the port that the DB cluster was listening on at the time of the snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,

    /// Provides the VPC ID associated with the DB cluster snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,

    /// Specifies the time when the DB cluster was created, in Universal Coordinated Time (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_create_time: Option<DateTime<Utc>>,

    /// Provides the master username for the DB cluster snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_username: Option<String>,

    /// Provides the version of the database engine for this DB cluster snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,

    /// Provides the license model information for this DB cluster snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<String>,

    /// Provides the type of the DB cluster snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_type: Option<String>,

    /// Specifies the percentage of the estimated data that has been transferred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_progress: Option<i32>,

    /// Specifies whether the DB cluster snapshot is encrypted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_encrypted: Option<bool>,

    /// If `StorageEncrypted` is true, the AWS KMS key identifier for the encrypted DB cluster
    /// snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,

    /// The Amazon Resource Name (ARN) for the DB cluster snapshot.
    #[serde(rename = "DBClusterSnapshotArn")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cluster_snapshot_arn: Option<String>,

    /// If the DB cluster snapshot was copied from a source DB cluster snapshot, the ARN of the
    /// source DB cluster snapshot.
    #[serde(rename = "SourceDBClusterSnapshotArn")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_db_cluster_snapshot_arn: Option<String>,

    /// True if mapping of IAM accounts to database accounts is enabled, and otherwise false.
    #[serde(rename = "IAMDatabaseAuthenticationEnabled")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_database_authentication_enabled: Option<bool>,

    /// The tags attached to the DB cluster snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_list: Option<Vec<Tag>>,
}

impl DBClusterSnapshot {
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
    pub fn with_db_cluster_snapshot_identifier(mut self, value: impl Into<String>) -> Self {
        self.db_cluster_snapshot_identifier = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_db_cluster_identifier(mut self, value: impl Into<String>) -> Self {
        self.db_cluster_identifier = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_snapshot_create_time(mut self, value: DateTime<Utc>) -> Self {
        self.snapshot_create_time = Some(value);
        self
    }

    #[must_use]
    pub fn with_engine(mut self, value: impl Into<String>) -> Self {
        self.engine = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_allocated_storage(mut self, value: i32) -> Self {
        self.allocated_storage = Some(value);
        self
    }

    #[must_use]
    pub fn with_status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_port(mut self, value: i32) -> Self {
        self.port = Some(value);
        self
    }

    #[must_use]
    pub fn with_vpc_id(mut self, value: impl Into<String>) -> Self {
        self.vpc_id = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_cluster_create_time(mut self, value: DateTime<Utc>) -> Self {
        self.cluster_create_time = Some(value);
        self
    }

    #[must_use]
    pub fn with_master_username(mut self, value: impl Into<String>) -> Self {
        self.master_username = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_engine_version(mut self, value: impl Into<String>) -> Self {
        self.engine_version = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_license_model(mut self, value: impl Into<String>) -> Self {
        self.license_model = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_snapshot_type(mut self, value: impl Into<String>) -> Self {
        self.snapshot_type = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_percent_progress(mut self, value: i32) -> Self {
        self.percent_progress = Some(value);
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
    pub fn with_db_cluster_snapshot_arn(mut self, value: impl Into<String>) -> Self {
        self.db_cluster_snapshot_arn = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_source_db_cluster_snapshot_arn(mut self, value: impl Into<String>) -> Self {
        self.source_db_cluster_snapshot_arn = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_iam_database_authentication_enabled(mut self, value: bool) -> Self {
        self.iam_database_authentication_enabled = Some(value);
        self
    }

    /// Appends to `TagList`, creating the list if it is unset.
    #[must_use]
    pub fn with_tag_list<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Tag>,
    {
        self.tag_list
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }
}

/// An instance that is part of a DB cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DBClusterMember {
    /// Specifies the instance identifier for this member of the DB cluster.
    #[serde(rename = "DBInstanceIdentifier")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_instance_identifier: Option<String>,

    /// Value that is `true` if the cluster member is the primary instance for the DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_cluster_writer: Option<bool>,

    /// Specifies the status of the DB cluster parameter group for this member of the DB
    /// cluster.
    #[serde(rename = "DBClusterParameterGroupStatus")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cluster_parameter_group_status: Option<String>,

    /// A value that specifies the order in which an Aurora Replica is promoted to the primary
    /// instance after a failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_tier: Option<i32>,
}

impl DBClusterMember {
    #[must_use]
    pub fn with_db_instance_identifier(mut self, value: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_is_cluster_writer(mut self, value: bool) -> Self {
        self.is_cluster_writer = Some(value);
        self
    }

    #[must_use]
    pub fn with_db_cluster_parameter_group_status(mut self, value: impl Into<String>) -> Self {
        self.db_cluster_parameter_group_status = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_promotion_tier(mut self, value: i32) -> Self {
        self.promotion_tier = Some(value);
        self
    }
}

/// An AWS Identity and Access Management (IAM) role that is associated with a DB cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DBClusterRole {
    /// The Amazon Resource Name (ARN) of the IAM role that is associated with the DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,

    /// Describes the state of association between the IAM role and the DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// The name of the feature associated with the IAM role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_name: Option<String>,
}

impl DBClusterRole {
    #[must_use]
    pub fn with_role_arn(mut self, value: impl Into<String>) -> Self {
        self.role_arn = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_feature_name(mut self, value: impl Into<String>) -> Self {
        self.feature_name = Some(value.into());
        self
    }
}

/// Status information for a DB cluster option group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DBClusterOptionGroupStatus {
    /// Specifies the name of the DB cluster option group.
    #[serde(rename = "DBClusterOptionGroupName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cluster_option_group_name: Option<String>,

    /// Specifies the status of the DB cluster option group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl DBClusterOptionGroupStatus {
    #[must_use]
    pub fn with_db_cluster_option_group_name(mut self, value: impl Into<String>) -> Self {
        self.db_cluster_option_group_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }
}

/// The scaling properties of a DB cluster in `serverless` DB engine mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScalingConfiguration {
    /// The minimum capacity for an Aurora DB cluster in `serverless` DB engine mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_capacity: Option<i32>,

    /// The maximum capacity for an Aurora DB cluster in `serverless` DB engine mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<i32>,

    /// A value that indicates whether to allow or disallow automatic pause.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_pause: Option<bool>,

    /// The time, in seconds, before an Aurora DB cluster in `serverless` mode is paused.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds_until_auto_pause: Option<i32>,

    /// The action to take when the timeout is reached, either `ForceApplyCapacityChange` or
    /// `RollbackCapacityChange`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_action: Option<String>,
}

impl ScalingConfiguration {
    #[must_use]
    pub fn with_min_capacity(mut self, value: i32) -> Self {
        self.min_capacity = Some(value);
        self
    }

    #[must_use]
    pub fn with_max_capacity(mut self, value: i32) -> Self {
        self.max_capacity = Some(value);
        self
    }

    #[must_use]
    pub fn with_auto_pause(mut self, value: bool) -> Self {
        self.auto_pause = Some(value);
        self
    }

    #[must_use]
    pub fn with_seconds_until_auto_pause(mut self, value: i32) -> Self {
        self.seconds_until_auto_pause = Some(value);
        self
    }

    #[must_use]
    pub fn with_timeout_action(mut self, value: impl Into<String>) -> Self {
        self.timeout_action = Some(value.into());
        self
    }
}

/// Shows the scaling configuration for an Aurora DB cluster in `serverless` DB engine mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScalingConfigurationInfo {
    /// The minimum capacity for the Aurora DB cluster in `serverless` DB engine mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_capacity: Option<i32>,

    /// The maximum capacity for an Aurora DB cluster in `serverless` DB engine mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<i32>,

    /// A value that indicates whether automatic pause is allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_pause: Option<bool>,

    /// The remaining amount of time, in seconds, before the cluster is paused.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds_until_auto_pause: Option<i32>,

    /// The timeout action of a call to `ModifyCurrentDBClusterCapacity`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_action: Option<String>,
}

impl ScalingConfigurationInfo {
    #[must_use]
    pub fn with_min_capacity(mut self, value: i32) -> Self {
        self.min_capacity = Some(value);
        self
    }

    #[must_use]
    pub fn with_max_capacity(mut self, value: i32) -> Self {
        self.max_capacity = Some(value);
        self
    }

    #[must_use]
    pub fn with_auto_pause(mut self, value: bool) -> Self {
        self.auto_pause = Some(value);
        self
    }

    #[must_use]
    pub fn with_seconds_until_auto_pause(mut self, value: i32) -> Self {
        self.seconds_until_auto_pause = Some(value);
        self
    }

    #[must_use]
    pub fn with_timeout_action(mut self, value: impl Into<String>) -> Self {
        self.timeout_action = Some(value.into());
        self
    }
}

crate::display::impl_shape_display!(
    DBCluster,
    DBClusterSnapshot,
    DBClusterMember,
    DBClusterRole,
    DBClusterOptionGroupStatus,
    ScalingConfiguration,
    ScalingConfigurationInfo,
);

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_should_use_rds_member_names() {
        let cluster = DBCluster::default()
            .with_db_cluster_identifier("aurora-1")
            .with_multi_az(true)
            .with_iam_database_authentication_enabled(false);
        let json = serde_json::to_value(&cluster).expect("serialize DBCluster");
        assert_eq!(
            json,
            serde_json::json!({
                "DBClusterIdentifier": "aurora-1",
                "MultiAZ": true,
                "IAMDatabaseAuthenticationEnabled": false
            })
        );
    }

    #[test]
    fn test_should_deserialize_cluster_description() {
        let json = r#"{
            "DBClusterIdentifier": "aurora-1",
            "Status": "available",
            "Port": 3306,
            "ClusterCreateTime": "2020-03-14T15:09:26Z",
            "DBClusterMembers": [
                {"DBInstanceIdentifier": "aurora-1-writer", "IsClusterWriter": true},
                {"DBInstanceIdentifier": "aurora-1-reader", "IsClusterWriter": false}
            ],
            "BacktrackWindow": 86400
        }"#;
        let cluster: DBCluster = serde_json::from_str(json).expect("deserialize DBCluster");

        let expected = DBCluster::default()
            .with_db_cluster_identifier("aurora-1")
            .with_status("available")
            .with_port(3306)
            .with_cluster_create_time(Utc.with_ymd_and_hms(2020, 3, 14, 15, 9, 26).unwrap())
            .with_db_cluster_members([
                DBClusterMember::default()
                    .with_db_instance_identifier("aurora-1-writer")
                    .with_is_cluster_writer(true),
                DBClusterMember::default()
                    .with_db_instance_identifier("aurora-1-reader")
                    .with_is_cluster_writer(false),
            ])
            .with_backtrack_window(86_400);
        assert_eq!(cluster, expected);
        assert_eq!(cluster.engine, None);
    }

    #[test]
    fn test_should_append_cluster_members_across_calls() {
        let cluster = DBCluster::default()
            .with_db_cluster_members([DBClusterMember::default().with_db_instance_identifier("a")])
            .with_db_cluster_members([
                DBClusterMember::default().with_db_instance_identifier("b"),
            ]);
        let ids: Vec<_> = cluster
            .db_cluster_members
            .iter()
            .flatten()
            .filter_map(|m| m.db_instance_identifier.as_deref())
            .collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn test_should_render_snapshot_with_tag_list() {
        let snapshot = DBClusterSnapshot::default()
            .with_db_cluster_snapshot_identifier("snap-1")
            .with_percent_progress(100)
            .with_tag_list([Tag::new("env", "dev")]);
        assert_eq!(
            snapshot.to_string(),
            "{DBClusterSnapshotIdentifier: snap-1,\
             PercentProgress: 100,\
             TagList: [{Key: env,Value: dev}]}"
        );
    }
}
