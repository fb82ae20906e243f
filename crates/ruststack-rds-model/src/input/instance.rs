//! Input types for DB instance operations.

use serde::{Deserialize, Serialize};

use crate::types::{ProcessorFeature, Tag};

/// Creates a new DB instance that acts as a read replica for an existing source DB instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDBInstanceReadReplicaRequest {
    /// The DB instance identifier of the read replica.
    #[serde(rename = "DBInstanceIdentifier")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_instance_identifier: Option<String>,

    /// The identifier of the DB instance that will act as the source for the read replica.
    #[serde(rename = "SourceDBInstanceIdentifier")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_db_instance_identifier: Option<String>,

    /// The compute and memory capacity of the read replica, for example, db.m4.large.
    #[serde(rename = "DBInstanceClass")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_instance_class: Option<String>,

    /// The Availability Zone (AZ) where the read replica will be created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,

    /// The port number that the DB instance uses for connections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,

    /// A value that indicates whether the read replica is in a Multi-AZ deployment.
    #[serde(rename = "MultiAZ")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_az: Option<bool>,

    /// A value that indicates whether minor engine upgrades are applied automatically to the
    /// read replica during the maintenance window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_minor_version_upgrade: Option<bool>,

    /// The amount of Provisioned IOPS (input/output operations per second) to be initially
    /// allocated for the DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,

    /// The option group the DB instance is associated with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,

    /// The name of the DB parameter group to associate with this DB instance.
    #[serde(rename = "DBParameterGroupName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_parameter_group_name: Option<String>,

    /// A value that indicates whether the DB instance is publicly accessible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publicly_accessible: Option<bool>,

    /// A list of tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    /// Specifies a DB subnet group for the DB instance.
    #[serde(rename = "DBSubnetGroupName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_subnet_group_name: Option<String>,

    /// A list of EC2 VPC security groups to associate with the read replica.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_ids: Option<Vec<String>>,

    /// Specifies the storage type to be associated with the read replica.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,

    /// A value that indicates whether to copy all tags from the read replica to snapshots of
    /// the read replica.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_snapshot: Option<bool>,

    /// The interval, in seconds, between points when Enhanced Monitoring metrics are collected
    /// for the read replica.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_interval: Option<i32>,

    /// The ARN for the IAM role that permits RDS to send enhanced monitoring metrics to Amazon
    /// CloudWatch Logs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_role_arn: Option<String>,

    /// The AWS KMS key ID for an encrypted read replica.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,

    /// The URL that contains a Signature Version 4 signed request for the
    /// CreateDBInstanceReadReplica API action in the source AWS Region that contains the source
    /// DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_signed_url: Option<String>,

    /// A value that indicates whether to enable mapping of AWS Identity and Access Management
    /// (IAM) accounts to database accounts.
    #[serde(rename = "EnableIAMDatabaseAuthentication")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_iam_database_authentication: Option<bool>,

    /// A value that indicates whether to enable Performance Insights for the read replica.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_performance_insights: Option<bool>,

    /// The AWS KMS key identifier for encryption of Performance Insights data.
    #[serde(rename = "PerformanceInsightsKMSKeyId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_insights_kms_key_id: Option<String>,

    /// The amount of time, in days, to retain Performance Insights data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_insights_retention_period: Option<i32>,

    /// The list of logs that the new DB instance is to export to CloudWatch Logs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_cloudwatch_logs_exports: Option<Vec<String>>,

    /// The number of CPU cores and the number of threads per core for the DB instance class of
    /// the DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_features: Option<Vec<ProcessorFeature>>,

    /// A value that indicates whether the DB instance class of the DB instance uses its default
    /// processor features.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_default_processor_features: Option<bool>,

    /// A value that indicates whether the DB instance has deletion protection enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,

    /// The Active Directory directory ID to create the DB instance in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Specify the name of the IAM role to be used when making API calls to the Directory
    /// Service.
    #[serde(rename = "DomainIAMRoleName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_iam_role_name: Option<String>,
}

impl CreateDBInstanceReadReplicaRequest {
    #[must_use]
    pub fn with_db_instance_identifier(mut self, value: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_source_db_instance_identifier(mut self, value: impl Into<String>) -> Self {
        self.source_db_instance_identifier = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_db_instance_class(mut self, value: impl Into<String>) -> Self {
        self.db_instance_class = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_availability_zone(mut self, value: impl Into<String>) -> Self {
        self.availability_zone = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_port(mut self, value: i32) -> Self {
        self.port = Some(value);
        self
    }

    #[must_use]
    pub fn with_multi_az(mut self, value: bool) -> Self {
        self.multi_az = Some(value);
        self
    }

    #[must_use]
    pub fn with_auto_minor_version_upgrade(mut self, value: bool) -> Self {
        self.auto_minor_version_upgrade = Some(value);
        self
    }

    #[must_use]
    pub fn with_iops(mut self, value: i32) -> Self {
        self.iops = Some(value);
        self
    }

    #[must_use]
    pub fn with_option_group_name(mut self, value: impl Into<String>) -> Self {
        self.option_group_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_db_parameter_group_name(mut self, value: impl Into<String>) -> Self {
        self.db_parameter_group_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_publicly_accessible(mut self, value: bool) -> Self {
        self.publicly_accessible = Some(value);
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
    pub fn with_db_subnet_group_name(mut self, value: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(value.into());
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
    pub fn with_storage_type(mut self, value: impl Into<String>) -> Self {
        self.storage_type = Some(value.into());
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
    pub fn with_monitoring_role_arn(mut self, value: impl Into<String>) -> Self {
        self.monitoring_role_arn = Some(value.into());
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
    pub fn with_enable_performance_insights(mut self, value: bool) -> Self {
        self.enable_performance_insights = Some(value);
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
    pub fn with_use_default_processor_features(mut self, value: bool) -> Self {
        self.use_default_processor_features = Some(value);
        self
    }

    #[must_use]
    pub fn with_deletion_protection(mut self, value: bool) -> Self {
        self.deletion_protection = Some(value);
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

/// Creates a new DB instance from a DB snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreDBInstanceFromDBSnapshotRequest {
    /// Name of the DB instance to create from the DB snapshot.
    #[serde(rename = "DBInstanceIdentifier")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_instance_identifier: Option<String>,

    /// The identifier for the DB snapshot to restore from.
    #[serde(rename = "DBSnapshotIdentifier")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_snapshot_identifier: Option<String>,

    /// The compute and memory capacity of the Amazon RDS DB instance, for example, db.m4.large.
    #[serde(rename = "DBInstanceClass")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_instance_class: Option<String>,

    /// The port number on which the database accepts connections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,

    /// The Availability Zone (AZ) where the DB instance will be created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,

    /// The DB subnet group name to use for the new instance.
    #[serde(rename = "DBSubnetGroupName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_subnet_group_name: Option<String>,

    /// A value that indicates whether the DB instance is a Multi-AZ deployment.
    #[serde(rename = "MultiAZ")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_az: Option<bool>,

    /// A value that indicates whether the DB instance is publicly accessible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publicly_accessible: Option<bool>,

    /// A value that indicates whether minor version upgrades are applied automatically to the
    /// DB instance during the maintenance window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_minor_version_upgrade: Option<bool>,

    /// License model information for the restored DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<String>,

    /// The database name for the restored DB instance.
    #[serde(rename = "DBName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,

    /// The database engine to use for the new instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,

    /// Specifies the amount of provisioned IOPS for the DB instance, expressed in I/O
    /// operations per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,

    /// The name of the option group to be used for the restored DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,

    /// A list of tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    /// Specifies the storage type to be associated with the DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,

    /// The ARN from the key store with which to associate the instance for TDE encryption.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tde_credential_arn: Option<String>,

    /// The password for the given ARN from the key store in order to access the device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tde_credential_password: Option<String>,

    /// A list of EC2 VPC security groups to associate with this DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_ids: Option<Vec<String>>,

    /// Specify the Active Directory directory ID to restore the DB instance in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// A value that indicates whether to copy all tags from the restored DB instance to
    /// snapshots of the DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_snapshot: Option<bool>,

    /// Specify the name of the IAM role to be used when making API calls to the Directory
    /// Service.
    #[serde(rename = "DomainIAMRoleName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_iam_role_name: Option<String>,

    /// A value that indicates whether to enable mapping of AWS Identity and Access Management
    /// (IAM) accounts to database accounts.
    #[serde(rename = "EnableIAMDatabaseAuthentication")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_iam_database_authentication: Option<bool>,

    /// The list of logs that the restored DB instance is to export to CloudWatch Logs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_cloudwatch_logs_exports: Option<Vec<String>>,

    /// The number of CPU cores and the number of threads per core for the DB instance class of
    /// the DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_features: Option<Vec<ProcessorFeature>>,

    /// A value that indicates whether the DB instance class of the DB instance uses its default
    /// processor features.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_default_processor_features: Option<bool>,

    /// The name of the DB parameter group to associate with this DB instance.
    #[serde(rename = "DBParameterGroupName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_parameter_group_name: Option<String>,

    /// A value that indicates whether the DB instance has deletion protection enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,
}

impl RestoreDBInstanceFromDBSnapshotRequest {
    #[must_use]
    pub fn with_db_instance_identifier(mut self, value: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_db_snapshot_identifier(mut self, value: impl Into<String>) -> Self {
        self.db_snapshot_identifier = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_db_instance_class(mut self, value: impl Into<String>) -> Self {
        self.db_instance_class = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_port(mut self, value: i32) -> Self {
        self.port = Some(value);
        self
    }

    #[must_use]
    pub fn with_availability_zone(mut self, value: impl Into<String>) -> Self {
        self.availability_zone = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_db_subnet_group_name(mut self, value: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_multi_az(mut self, value: bool) -> Self {
        self.multi_az = Some(value);
        self
    }

    #[must_use]
    pub fn with_publicly_accessible(mut self, value: bool) -> Self {
        self.publicly_accessible = Some(value);
        self
    }

    #[must_use]
    pub fn with_auto_minor_version_upgrade(mut self, value: bool) -> Self {
        self.auto_minor_version_upgrade = Some(value);
        self
    }

    #[must_use]
    pub fn with_license_model(mut self, value: impl Into<String>) -> Self {
        self.license_model = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_db_name(mut self, value: impl Into<String>) -> Self {
        self.db_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_engine(mut self, value: impl Into<String>) -> Self {
        self.engine = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_iops(mut self, value: i32) -> Self {
        self.iops = Some(value);
        self
    }

    #[must_use]
    pub fn with_option_group_name(mut self, value: impl Into<String>) -> Self {
        self.option_group_name = Some(value.into());
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
    pub fn with_tde_credential_password(mut self, value: impl Into<String>) -> Self {
        self.tde_credential_password = Some(value.into());
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
    pub fn with_domain(mut self, value: impl Into<String>) -> Self {
        self.domain = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_copy_tags_to_snapshot(mut self, value: bool) -> Self {
        self.copy_tags_to_snapshot = Some(value);
        self
    }

    #[must_use]
    pub fn with_domain_iam_role_name(mut self, value: impl Into<String>) -> Self {
        self.domain_iam_role_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_enable_iam_database_authentication(mut self, value: bool) -> Self {
        self.enable_iam_database_authentication = Some(value);
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
    pub fn with_use_default_processor_features(mut self, value: bool) -> Self {
        self.use_default_processor_features = Some(value);
        self
    }

    #[must_use]
    pub fn with_db_parameter_group_name(mut self, value: impl Into<String>) -> Self {
        self.db_parameter_group_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_deletion_protection(mut self, value: bool) -> Self {
        self.deletion_protection = Some(value);
        self
    }
}

/// Amazon Relational Database Service (Amazon RDS) supports importing MySQL databases by using
/// backup files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreDBInstanceFromS3Request {
    /// The name of the database to create when the DB instance is created.
    #[serde(rename = "DBName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,

    /// The DB instance identifier.
    #[serde(rename = "DBInstanceIdentifier")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_instance_identifier: Option<String>,

    /// The amount of storage (in gigabytes) to allocate initially for the DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_storage: Option<i32>,

    /// The compute and memory capacity of the DB instance, for example, db.m4.large.
    #[serde(rename = "DBInstanceClass")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_instance_class: Option<String>,

    /// The name of the database engine to be used for this instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,

    /// The name for the master user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_username: Option<String>,

    /// The password for the master user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_user_password: Option<String>,

    /// A list of DB security groups to associate with this DB instance.
    #[serde(rename = "DBSecurityGroups")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_security_groups: Option<Vec<String>>,

    /// A list of VPC security groups to associate with this DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_ids: Option<Vec<String>>,

    /// The Availability Zone that the DB instance is created in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,

    /// A DB subnet group to associate with this DB instance.
    #[serde(rename = "DBSubnetGroupName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_subnet_group_name: Option<String>,

    /// The time range each week during which system maintenance can occur, in Universal
    /// Coordinated Time (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_maintenance_window: Option<String>,

    /// The name of the DB parameter group to associate with this DB instance.
    #[serde(rename = "DBParameterGroupName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_parameter_group_name: Option<String>,

    /// The number of days for which automated backups are retained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_retention_period: Option<i32>,

    /// The time range each day during which automated backups are created if automated backups
    /// are enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_backup_window: Option<String>,

    /// The port number on which the database accepts connections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,

    /// A value that indicates whether the DB instance is a Multi-AZ deployment.
    #[serde(rename = "MultiAZ")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_az: Option<bool>,

    /// The version number of the database engine to use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,

    /// A value that indicates whether minor engine upgrades are applied automatically to the DB
    /// instance during the maintenance window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_minor_version_upgrade: Option<bool>,

    /// The license model for this DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<String>,

    /// The amount of Provisioned IOPS (input/output operations per second) to allocate
    /// initially for the DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,

    /// The name of the option group to associate with this DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,

    /// A value that indicates whether the DB instance is publicly accessible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publicly_accessible: Option<bool>,

    /// A list of tags to associate with this DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    /// Specifies the storage type to be associated with the DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,

    /// A value that indicates whether the new DB instance is encrypted or not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_encrypted: Option<bool>,

    /// The AWS KMS key identifier for an encrypted DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,

    /// A value that indicates whether to copy all tags from the DB instance to snapshots of the
    /// DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_snapshot: Option<bool>,

    /// The interval, in seconds, between points when Enhanced Monitoring metrics are collected
    /// for the DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_interval: Option<i32>,

    /// The ARN for the IAM role that permits RDS to send enhanced monitoring metrics to Amazon
    /// CloudWatch Logs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_role_arn: Option<String>,

    /// A value that indicates whether to enable mapping of AWS Identity and Access Management
    /// (IAM) accounts to database accounts.
    #[serde(rename = "EnableIAMDatabaseAuthentication")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_iam_database_authentication: Option<bool>,

    /// The name of the engine of your source database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_engine: Option<String>,

    /// The engine version of your source database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_engine_version: Option<String>,

    /// The name of your Amazon S3 bucket that contains your database backup file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_bucket_name: Option<String>,

    /// The prefix of your Amazon S3 bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_prefix: Option<String>,

    /// An AWS Identity and Access Management (IAM) role to allow Amazon RDS to access your
    /// Amazon S3 bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_ingestion_role_arn: Option<String>,

    /// A value that indicates whether to enable Performance Insights for the DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_performance_insights: Option<bool>,

    /// The AWS KMS key identifier for encryption of Performance Insights data.
    #[serde(rename = "PerformanceInsightsKMSKeyId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_insights_kms_key_id: Option<String>,

    /// The amount of time, in days, to retain Performance Insights data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_insights_retention_period: Option<i32>,

    /// The list of logs that the restored DB instance is to export to CloudWatch Logs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_cloudwatch_logs_exports: Option<Vec<String>>,

    /// The number of CPU cores and the number of threads per core for the DB instance class of
    /// the DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_features: Option<Vec<ProcessorFeature>>,

    /// A value that indicates whether the DB instance class of the DB instance uses its default
    /// processor features.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_default_processor_features: Option<bool>,

    /// A value that indicates whether the DB instance has deletion protection enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,
}

impl RestoreDBInstanceFromS3Request {
    #[must_use]
    pub fn with_db_name(mut self, value: impl Into<String>) -> Self {
        self.db_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_db_instance_identifier(mut self, value: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_allocated_storage(mut self, value: i32) -> Self {
        self.allocated_storage = Some(value);
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
    pub fn with_master_username(mut self, value: impl Into<String>) -> Self {
        self.master_username = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_master_user_password(mut self, value: impl Into<String>) -> Self {
        self.master_user_password = Some(value.into());
        self
    }

    /// Appends to `DBSecurityGroups`, creating the list if it is unset.
    #[must_use]
    pub fn with_db_security_groups<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.db_security_groups
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
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
    pub fn with_availability_zone(mut self, value: impl Into<String>) -> Self {
        self.availability_zone = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_db_subnet_group_name(mut self, value: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_preferred_maintenance_window(mut self, value: impl Into<String>) -> Self {
        self.preferred_maintenance_window = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_db_parameter_group_name(mut self, value: impl Into<String>) -> Self {
        self.db_parameter_group_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_backup_retention_period(mut self, value: i32) -> Self {
        self.backup_retention_period = Some(value);
        self
    }

    #[must_use]
    pub fn with_preferred_backup_window(mut self, value: impl Into<String>) -> Self {
        self.preferred_backup_window = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_port(mut self, value: i32) -> Self {
        self.port = Some(value);
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
    pub fn with_option_group_name(mut self, value: impl Into<String>) -> Self {
        self.option_group_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_publicly_accessible(mut self, value: bool) -> Self {
        self.publicly_accessible = Some(value);
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
    pub fn with_storage_type(mut self, value: impl Into<String>) -> Self {
        self.storage_type = Some(value.into());
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
    pub fn with_monitoring_role_arn(mut self, value: impl Into<String>) -> Self {
        self.monitoring_role_arn = Some(value.into());
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
    pub fn with_enable_performance_insights(mut self, value: bool) -> Self {
        self.enable_performance_insights = Some(value);
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
    pub fn with_use_default_processor_features(mut self, value: bool) -> Self {
        self.use_default_processor_features = Some(value);
        self
    }

    #[must_use]
    pub fn with_deletion_protection(mut self, value: bool) -> Self {
        self.deletion_protection = Some(value);
        self
    }
}

crate::display::impl_shape_display!(
    CreateDBInstanceReadReplicaRequest,
    RestoreDBInstanceFromDBSnapshotRequest,
    RestoreDBInstanceFromS3Request,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_serialize_read_replica_request() {
        let req = CreateDBInstanceReadReplicaRequest::default()
            .with_db_instance_identifier("db-1-replica")
            .with_source_db_instance_identifier("db-1")
            .with_multi_az(true)
            .with_processor_features([ProcessorFeature::default()
                .with_name("coreCount")
                .with_value("2")]);
        let json = serde_json::to_value(&req).expect("serialize request");
        assert_eq!(
            json,
            serde_json::json!({
                "DBInstanceIdentifier": "db-1-replica",
                "SourceDBInstanceIdentifier": "db-1",
                "MultiAZ": true,
                "ProcessorFeatures": [{"Name": "coreCount", "Value": "2"}]
            })
        );
    }

    #[test]
    fn test_should_keep_unset_booleans_absent() {
        let req = RestoreDBInstanceFromDBSnapshotRequest::default();
        assert_eq!(req.multi_az, None);
        assert_eq!(req.deletion_protection, None);
        assert_eq!(req.to_string(), "{}");
    }
}
