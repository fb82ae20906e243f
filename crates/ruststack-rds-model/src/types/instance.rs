//! DB instance records and the structures nested inside them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{
    AvailabilityZone, DomainMembership, Endpoint, PendingCloudwatchLogsExports,
    ProcessorFeature, VpcSecurityGroupMembership,
};

/// Contains the details of an Amazon RDS DB instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DBInstance {
    /// Contains a user-supplied database identifier.
    #[serde(rename = "DBInstanceIdentifier")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_instance_identifier: Option<String>,

    /// Contains the name of the compute and memory capacity class of the DB instance.
    #[serde(rename = "DBInstanceClass")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_instance_class: Option<String>,

    /// Provides the name of the database engine to be used for this DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,

    /// Specifies the current state of this database.
    #[serde(rename = "DBInstanceStatus")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_instance_status: Option<String>,

    /// Contains the master username for the DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_username: Option<String>,

    /// The meaning of this parameter differs according to the database engine you use.
    #[serde(rename = "DBName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,

    /// Specifies the connection endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Endpoint>,

    /// Specifies the allocated storage size specified in gibibytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_storage: Option<i32>,

    /// Provides the date and time the DB instance was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_create_time: Option<DateTime<Utc>>,

    /// Specifies the daily time range during which automated backups are created if automated
    /// backups are enabled, as determined by the BackupRetentionPeriod.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_backup_window: Option<String>,

    /// Specifies the number of days for which automatic DB snapshots are retained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_retention_period: Option<i32>,

    /// A list of DB security group elements containing DBSecurityGroup.Name and
    /// DBSecurityGroup.Status subelements.
    #[serde(rename = "DBSecurityGroups")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_security_groups: Option<Vec<DBSecurityGroupMembership>>,

    /// Provides a list of VPC security group elements that the DB instance belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_groups: Option<Vec<VpcSecurityGroupMembership>>,

    /// Provides the list of DB parameter groups applied to this DB instance.
    #[serde(rename = "DBParameterGroups")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_parameter_groups: Option<Vec<DBParameterGroupStatus>>,

    /// Specifies the name of the Availability Zone the DB instance is located in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,

    /// Specifies information on the subnet group associated with the DB instance, including the
    /// name, description, and subnets in the subnet group.
    #[serde(rename = "DBSubnetGroup")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_subnet_group: Option<DBSubnetGroup>,

    /// Specifies the weekly time range during which system maintenance can occur, in Universal
    /// Coordinated Time (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_maintenance_window: Option<String>,

    /// Specifies that changes to the DB instance are pending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_modified_values: Option<PendingModifiedValues>,

    /// Specifies the latest time to which a database can be restored with point-in-time
    /// restore.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_restorable_time: Option<DateTime<Utc>>,

    /// Specifies if the DB instance is a Multi-AZ deployment.
    #[serde(rename = "MultiAZ")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_az: Option<bool>,

    /// Indicates the database engine version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,

    /// Indicates that minor version patches are applied automatically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_minor_version_upgrade: Option<bool>,

    /// Contains the identifier of the source DB instance if this DB instance is a read replica.
    #[serde(rename = "ReadReplicaSourceDBInstanceIdentifier")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_replica_source_db_instance_identifier: Option<String>,

    /// Contains one or more identifiers of the read replicas associated with this DB instance.
    #[serde(rename = "ReadReplicaDBInstanceIdentifiers")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_replica_db_instance_identifiers: Option<Vec<String>>,

    /// Contains one or more identifiers of Aurora DB clusters to which the RDS DB instance is
    /// replicated as a read replica.
    #[serde(rename = "ReadReplicaDBClusterIdentifiers")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_replica_db_cluster_identifiers: Option<Vec<String>>,

    /// License model information for this DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<String>,

    /// Specifies the Provisioned IOPS (I/O operations per second) value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,

    /// Provides the list of option group memberships for this DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_memberships: Option<Vec<OptionGroupMembership>>,

    /// If present, specifies the name of the character set that this instance is associated
    /// with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_set_name: Option<String>,

    /// If present, specifies the name of the secondary Availability Zone for a DB instance with
    /// multi-AZ support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_availability_zone: Option<String>,

    /// Specifies the accessibility options for the DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publicly_accessible: Option<bool>,

    /// The status of a read replica.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_infos: Option<Vec<DBInstanceStatusInfo>>,

    /// Specifies the storage type associated with DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,

    /// The ARN from the key store with which the instance is associated for TDE encryption.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tde_credential_arn: Option<String>,

    /// Specifies the port that the DB instance listens on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_instance_port: Option<i32>,

    /// If the DB instance is a member of a DB cluster, contains the name of the DB cluster that
    /// the DB instance is a member of.
    #[serde(rename = "DBClusterIdentifier")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cluster_identifier: Option<String>,

    /// Specifies whether the DB instance is encrypted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_encrypted: Option<bool>,

    /// If StorageEncrypted is true, the AWS KMS key identifier for the encrypted DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,

    /// The AWS Region-unique, immutable identifier for the DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dbi_resource_id: Option<String>,

    /// The identifier of the CA certificate for this DB instance.
    #[serde(rename = "CACertificateIdentifier")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_certificate_identifier: Option<String>,

    /// The Active Directory Domain membership records associated with the DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_memberships: Option<Vec<DomainMembership>>,

    /// Specifies whether tags are copied from the DB instance to snapshots of the DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_snapshot: Option<bool>,

    /// The interval, in seconds, between points when Enhanced Monitoring metrics are collected
    /// for the DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_interval: Option<i32>,

    /// The Amazon Resource Name (ARN) of the Amazon CloudWatch Logs log stream that receives
    /// the Enhanced Monitoring metrics data for the DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhanced_monitoring_resource_arn: Option<String>,

    /// The ARN for the IAM role that permits RDS to send Enhanced Monitoring metrics to Amazon
    /// CloudWatch Logs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_role_arn: Option<String>,

    /// A value that specifies the order in which an Aurora Replica is promoted to the primary
    /// instance after a failure of the existing primary instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_tier: Option<i32>,

    /// The Amazon Resource Name (ARN) for the DB instance.
    #[serde(rename = "DBInstanceArn")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_instance_arn: Option<String>,

    /// The time zone of the DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// True if mapping of AWS Identity and Access Management (IAM) accounts to database
    /// accounts is enabled, and otherwise false.
    #[serde(rename = "IAMDatabaseAuthenticationEnabled")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_database_authentication_enabled: Option<bool>,

    /// True if Performance Insights is enabled for the DB instance, and otherwise false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_insights_enabled: Option<bool>,

    /// The AWS KMS key identifier for encryption of Performance Insights data.
    #[serde(rename = "PerformanceInsightsKMSKeyId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_insights_kms_key_id: Option<String>,

    /// The amount of time, in days, to retain Performance Insights data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_insights_retention_period: Option<i32>,

    /// A list of log types that this DB instance is configured to export to CloudWatch Logs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_cloudwatch_logs_exports: Option<Vec<String>>,

    /// The number of CPU cores and the number of threads per core for the DB instance class of
    /// the DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_features: Option<Vec<ProcessorFeature>>,

    /// Indicates if the DB instance has deletion protection enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,

    /// The AWS Identity and Access Management (IAM) roles associated with the DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_roles: Option<Vec<DBInstanceRole>>,

    /// Specifies the listener connection endpoint for SQL Server Always On.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listener_endpoint: Option<Endpoint>,

    /// The upper limit to which Amazon RDS can automatically scale the storage of the DB
    /// instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_allocated_storage: Option<i32>,
}

impl DBInstance {
    #[must_use]
    pub fn with_db_instance_identifier(mut self, value: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_db_instance_class(mut self, value: impl Into<String>) -> Self {
        self.db_instance_class = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_engine(mut self, value: impl Into<String>) -> Self {
        self.engine = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_db_instance_status(mut self, value: impl Into<String>) -> Self {
        self.db_instance_status = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_master_username(mut self, value: impl Into<String>) -> Self {
        self.master_username = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_db_name(mut self, value: impl Into<String>) -> Self {
        self.db_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_endpoint(mut self, value: Endpoint) -> Self {
        self.endpoint = Some(value);
        self
    }

    #[must_use]
    pub fn with_allocated_storage(mut self, value: i32) -> Self {
        self.allocated_storage = Some(value);
        self
    }

    #[must_use]
    pub fn with_instance_create_time(mut self, value: DateTime<Utc>) -> Self {
        self.instance_create_time = Some(value);
        self
    }

    #[must_use]
    pub fn with_preferred_backup_window(mut self, value: impl Into<String>) -> Self {
        self.preferred_backup_window = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_backup_retention_period(mut self, value: i32) -> Self {
        self.backup_retention_period = Some(value);
        self
    }

    /// Appends to `DBSecurityGroups`, creating the list if it is unset.
    #[must_use]
    pub fn with_db_security_groups<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DBSecurityGroupMembership>,
    {
        self.db_security_groups
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

    /// Appends to `DBParameterGroups`, creating the list if it is unset.
    #[must_use]
    pub fn with_db_parameter_groups<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DBParameterGroupStatus>,
    {
        self.db_parameter_groups
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_availability_zone(mut self, value: impl Into<String>) -> Self {
        self.availability_zone = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_db_subnet_group(mut self, value: DBSubnetGroup) -> Self {
        self.db_subnet_group = Some(value);
        self
    }

    #[must_use]
    pub fn with_preferred_maintenance_window(mut self, value: impl Into<String>) -> Self {
        self.preferred_maintenance_window = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_pending_modified_values(mut self, value: PendingModifiedValues) -> Self {
        self.pending_modified_values = Some(value);
        self
    }

    #[must_use]
    pub fn with_latest_restorable_time(mut self, value: DateTime<Utc>) -> Self {
        self.latest_restorable_time = Some(value);
        self
    }

    #[must_use]
    pub fn with_multi_az(mut self, value: bool) -> Self {
        self.multi_az = Some(value);
        self
    }

    #[must_use]
    pub fn with_engine_version(mut self, value: impl Into<String>) -> Self {
        self.engine_version = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_auto_minor_version_upgrade(mut self, value: bool) -> Self {
        self.auto_minor_version_upgrade = Some(value);
        self
    }

    #[must_use]
    pub fn with_read_replica_source_db_instance_identifier(
        mut self,
        value: impl Into<String>,
    ) -> Self {
        self.read_replica_source_db_instance_identifier = Some(value.into());
        self
    }

    /// Appends to `ReadReplicaDBInstanceIdentifiers`, creating the list if it is unset.
    #[must_use]
    pub fn with_read_replica_db_instance_identifiers<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.read_replica_db_instance_identifiers
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    /// Appends to `ReadReplicaDBClusterIdentifiers`, creating the list if it is unset.
    #[must_use]
    pub fn with_read_replica_db_cluster_identifiers<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.read_replica_db_cluster_identifiers
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_license_model(mut self, value: impl Into<String>) -> Self {
        self.license_model = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_iops(mut self, value: i32) -> Self {
        self.iops = Some(value);
        self
    }

    /// Appends to `OptionGroupMemberships`, creating the list if it is unset.
    #[must_use]
    pub fn with_option_group_memberships<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OptionGroupMembership>,
    {
        self.option_group_memberships
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_character_set_name(mut self, value: impl Into<String>) -> Self {
        self.character_set_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_secondary_availability_zone(mut self, value: impl Into<String>) -> Self {
        self.secondary_availability_zone = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_publicly_accessible(mut self, value: bool) -> Self {
        self.publicly_accessible = Some(value);
        self
    }

    /// Appends to `StatusInfos`, creating the list if it is unset.
    #[must_use]
    pub fn with_status_infos<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DBInstanceStatusInfo>,
    {
        self.status_infos
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_storage_type(mut self, value: impl Into<String>) -> Self {
        self.storage_type = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_tde_credential_arn(mut self, value: impl Into<String>) -> Self {
        self.tde_credential_arn = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_db_instance_port(mut self, value: i32) -> Self {
        self.db_instance_port = Some(value);
        self
    }

    #[must_use]
    pub fn with_db_cluster_identifier(mut self, value: impl Into<String>) -> Self {
        self.db_cluster_identifier = Some(value.into());
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
    pub fn with_dbi_resource_id(mut self, value: impl Into<String>) -> Self {
        self.dbi_resource_id = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_ca_certificate_identifier(mut self, value: impl Into<String>) -> Self {
        self.ca_certificate_identifier = Some(value.into());
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
    pub fn with_copy_tags_to_snapshot(mut self, value: bool) -> Self {
        self.copy_tags_to_snapshot = Some(value);
        self
    }

    #[must_use]
    pub fn with_monitoring_interval(mut self, value: i32) -> Self {
        self.monitoring_interval = Some(value);
        self
    }

    #[must_use]
    pub fn with_enhanced_monitoring_resource_arn(mut self, value: impl Into<String>) -> Self {
        self.enhanced_monitoring_resource_arn = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_monitoring_role_arn(mut self, value: impl Into<String>) -> Self {
        self.monitoring_role_arn = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_promotion_tier(mut self, value: i32) -> Self {
        self.promotion_tier = Some(value);
        self
    }

    #[must_use]
    pub fn with_db_instance_arn(mut self, value: impl Into<String>) -> Self {
        self.db_instance_arn = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_timezone(mut self, value: impl Into<String>) -> Self {
        self.timezone = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_iam_database_authentication_enabled(mut self, value: bool) -> Self {
        self.iam_database_authentication_enabled = Some(value);
        self
    }

    #[must_use]
    pub fn with_performance_insights_enabled(mut self, value: bool) -> Self {
        self.performance_insights_enabled = Some(value);
        self
    }

    #[must_use]
    pub fn with_performance_insights_kms_key_id(mut self, value: impl Into<String>) -> Self {
        self.performance_insights_kms_key_id = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_performance_insights_retention_period(mut self, value: i32) -> Self {
        self.performance_insights_retention_period = Some(value);
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

    /// Appends to `ProcessorFeatures`, creating the list if it is unset.
    #[must_use]
    pub fn with_processor_features<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ProcessorFeature>,
    {
        self.processor_features
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_deletion_protection(mut self, value: bool) -> Self {
        self.deletion_protection = Some(value);
        self
    }

    /// Appends to `AssociatedRoles`, creating the list if it is unset.
    #[must_use]
    pub fn with_associated_roles<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DBInstanceRole>,
    {
        self.associated_roles
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_listener_endpoint(mut self, value: Endpoint) -> Self {
        self.listener_endpoint = Some(value);
        self
    }

    #[must_use]
    pub fn with_max_allocated_storage(mut self, value: i32) -> Self {
        self.max_allocated_storage = Some(value);
        self
    }
}

/// Changes to the DB instance that are pending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PendingModifiedValues {
    /// The name of the compute and memory capacity class for the DB instance.
    #[serde(rename = "DBInstanceClass")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_instance_class: Option<String>,

    /// The allocated storage size for the DB instance specified in gibibytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_storage: Option<i32>,

    /// The master credentials for the DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_user_password: Option<String>,

    /// The port for the DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,

    /// The number of days for which automated backups are retained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_retention_period: Option<i32>,

    /// Indicates that the Single-AZ DB instance will change to a Multi-AZ deployment.
    #[serde(rename = "MultiAZ")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_az: Option<bool>,

    /// The database engine version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,

    /// The license model for the DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<String>,

    /// The Provisioned IOPS value for the DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,

    /// The database identifier for the DB instance.
    #[serde(rename = "DBInstanceIdentifier")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_instance_identifier: Option<String>,

    /// The storage type of the DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,

    /// The identifier of the CA certificate for the DB instance.
    #[serde(rename = "CACertificateIdentifier")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_certificate_identifier: Option<String>,

    /// The DB subnet group for the DB instance.
    #[serde(rename = "DBSubnetGroupName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_subnet_group_name: Option<String>,

    /// The log types that are in the process of being enabled or disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_cloudwatch_logs_exports: Option<PendingCloudwatchLogsExports>,

    /// The number of CPU cores and the number of threads per core for the DB instance class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_features: Option<Vec<ProcessorFeature>>,
}

impl PendingModifiedValues {
    #[must_use]
    pub fn with_db_instance_class(mut self, value: impl Into<String>) -> Self {
        self.db_instance_class = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_allocated_storage(mut self, value: i32) -> Self {
        self.allocated_storage = Some(value);
        self
    }

    #[must_use]
    pub fn with_master_user_password(mut self, value: impl Into<String>) -> Self {
        self.master_user_password = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_port(mut self, value: i32) -> Self {
        self.port = Some(value);
        self
    }

    #[must_use]
    pub fn with_backup_retention_period(mut self, value: i32) -> Self {
        self.backup_retention_period = Some(value);
        self
    }

    #[must_use]
    pub fn with_multi_az(mut self, value: bool) -> Self {
        self.multi_az = Some(value);
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
    pub fn with_iops(mut self, value: i32) -> Self {
        self.iops = Some(value);
        self
    }

    #[must_use]
    pub fn with_db_instance_identifier(mut self, value: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_storage_type(mut self, value: impl Into<String>) -> Self {
        self.storage_type = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_ca_certificate_identifier(mut self, value: impl Into<String>) -> Self {
        self.ca_certificate_identifier = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_db_subnet_group_name(mut self, value: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_pending_cloudwatch_logs_exports(
        mut self,
        value: PendingCloudwatchLogsExports,
    ) -> Self {
        self.pending_cloudwatch_logs_exports = Some(value);
        self
    }

    /// Appends to `ProcessorFeatures`, creating the list if it is unset.
    #[must_use]
    pub fn with_processor_features<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ProcessorFeature>,
    {
        self.processor_features
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }
}

/// Provides a list of status information for a DB instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DBInstanceStatusInfo {
    /// This value is currently "read replication."
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_type: Option<String>,

    /// Boolean value that is true if the instance is operating normally, or false if the
    /// instance is in an error state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal: Option<bool>,

    /// Status of the DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Details of the error if there is an error for the instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DBInstanceStatusInfo {
    #[must_use]
    pub fn with_status_type(mut self, value: impl Into<String>) -> Self {
        self.status_type = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_normal(mut self, value: bool) -> Self {
        self.normal = Some(value);
        self
    }

    #[must_use]
    pub fn with_status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_message(mut self, value: impl Into<String>) -> Self {
        self.message = Some(value.into());
        self
    }
}

/// An AWS Identity and Access Management (IAM) role that is associated with a DB instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DBInstanceRole {
    /// The Amazon Resource Name (ARN) of the IAM role that is associated with the DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,

    /// The name of the feature associated with the IAM role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_name: Option<String>,

    /// Describes the state of association between the IAM role and the DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl DBInstanceRole {
    #[must_use]
    pub fn with_role_arn(mut self, value: impl Into<String>) -> Self {
        self.role_arn = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_feature_name(mut self, value: impl Into<String>) -> Self {
        self.feature_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }
}

/// Contains the details of an Amazon RDS DB subnet group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DBSubnetGroup {
    /// The name of the DB subnet group.
    #[serde(rename = "DBSubnetGroupName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_subnet_group_name: Option<String>,

    /// Provides the description of the DB subnet group.
    #[serde(rename = "DBSubnetGroupDescription")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_subnet_group_description: Option<String>,

    /// Provides the VpcId of the DB subnet group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,

    /// Provides the status of the DB subnet group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_group_status: Option<String>,

    /// Contains a list of `Subnet` elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnets: Option<Vec<Subnet>>,

    /// The Amazon Resource Name (ARN) for the DB subnet group.
    #[serde(rename = "DBSubnetGroupArn")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_subnet_group_arn: Option<String>,
}

impl DBSubnetGroup {
    #[must_use]
    pub fn with_db_subnet_group_name(mut self, value: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_db_subnet_group_description(mut self, value: impl Into<String>) -> Self {
        self.db_subnet_group_description = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_vpc_id(mut self, value: impl Into<String>) -> Self {
        self.vpc_id = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_subnet_group_status(mut self, value: impl Into<String>) -> Self {
        self.subnet_group_status = Some(value.into());
        self
    }

    /// Appends to `Subnets`, creating the list if it is unset.
    #[must_use]
    pub fn with_subnets<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Subnet>,
    {
        self.subnets
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_db_subnet_group_arn(mut self, value: impl Into<String>) -> Self {
        self.db_subnet_group_arn = Some(value.into());
        self
    }
}

/// A subnet within a DB subnet group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Subnet {
    /// The identifier of the subnet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_identifier: Option<String>,

    /// The Availability Zone of the subnet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_availability_zone: Option<AvailabilityZone>,

    /// The status of the subnet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_status: Option<String>,
}

impl Subnet {
    #[must_use]
    pub fn with_subnet_identifier(mut self, value: impl Into<String>) -> Self {
        self.subnet_identifier = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_subnet_availability_zone(mut self, value: AvailabilityZone) -> Self {
        self.subnet_availability_zone = Some(value);
        self
    }

    #[must_use]
    pub fn with_subnet_status(mut self, value: impl Into<String>) -> Self {
        self.subnet_status = Some(value.into());
        self
    }
}

/// The status of the DB parameter group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DBParameterGroupStatus {
    /// The name of the DB parameter group.
    #[serde(rename = "DBParameterGroupName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_parameter_group_name: Option<String>,

    /// The status of parameter updates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_apply_status: Option<String>,
}

impl DBParameterGroupStatus {
    #[must_use]
    pub fn with_db_parameter_group_name(mut self, value: impl Into<String>) -> Self {
        self.db_parameter_group_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_parameter_apply_status(mut self, value: impl Into<String>) -> Self {
        self.parameter_apply_status = Some(value.into());
        self
    }
}

/// A DB security group membership of a DB instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DBSecurityGroupMembership {
    /// The name of the DB security group.
    #[serde(rename = "DBSecurityGroupName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_security_group_name: Option<String>,

    /// The status of the DB security group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl DBSecurityGroupMembership {
    #[must_use]
    pub fn with_db_security_group_name(mut self, value: impl Into<String>) -> Self {
        self.db_security_group_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }
}

/// Provides information on the option groups the DB instance is a member of.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OptionGroupMembership {
    /// The name of the option group that the instance belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,

    /// The status of the DB instance's option group membership.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl OptionGroupMembership {
    #[must_use]
    pub fn with_option_group_name(mut self, value: impl Into<String>) -> Self {
        self.option_group_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }
}

crate::display::impl_shape_display!(
    DBInstance,
    PendingModifiedValues,
    DBInstanceStatusInfo,
    DBInstanceRole,
    DBSubnetGroup,
    Subnet,
    DBParameterGroupStatus,
    DBSecurityGroupMembership,
    OptionGroupMembership,
);
