//! DB snapshot record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::ProcessorFeature;

/// Contains the details of an Amazon RDS DB snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DBSnapshot {
    /// Specifies the identifier for the DB snapshot.
    #[serde(rename = "DBSnapshotIdentifier")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_snapshot_identifier: Option<String>,

    /// Specifies the DB instance identifier of the DB instance this DB snapshot was created
    /// from.
    #[serde(rename = "DBInstanceIdentifier")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_instance_identifier: Option<String>,

    /// Provides the time when the snapshot was taken, in Universal Coordinated Time (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_create_time: Option<DateTime<Utc>>,

    /// Specifies the name of the database engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,

    /// Specifies the allocated storage size in gibibytes (GiB).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_storage: Option<i32>,

    /// Specifies the status of this DB snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Specifies the port that the database engine was listening on at the time of the
    /// snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,

    /// Specifies the name of the Availability Zone the DB instance was located in at the time
    /// of the DB snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,

    /// Provides the VPC ID associated with the DB snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,

    /// Specifies the time when the snapshot was taken, in Universal Coordinated Time (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_create_time: Option<DateTime<Utc>>,

    /// Provides the master username for the DB snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_username: Option<String>,

    /// Specifies the version of the database engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,

    /// License model information for the restored DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<String>,

    /// Provides the type of the DB snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_type: Option<String>,

    /// Specifies the Provisioned IOPS (I/O operations per second) value of the DB instance at
    /// the time of the snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,

    /// Provides the option group name for the DB snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,

    /// The percentage of the estimated data that has been transferred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_progress: Option<i32>,

    /// The AWS Region that the DB snapshot was created in or copied from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_region: Option<String>,

    /// The DB snapshot Amazon Resource Name (ARN) that the DB snapshot was copied from.
    #[serde(rename = "SourceDBSnapshotIdentifier")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_db_snapshot_identifier: Option<String>,

    /// Specifies the storage type associated with DB snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,

    /// The ARN from the key store with which to associate the instance for TDE encryption.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tde_credential_arn: Option<String>,

    /// Specifies whether the DB snapshot is encrypted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted: Option<bool>,

    /// If Encrypted is true, the AWS KMS key identifier for the encrypted DB snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,

    /// The Amazon Resource Name (ARN) for the DB snapshot.
    #[serde(rename = "DBSnapshotArn")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_snapshot_arn: Option<String>,

    /// The time zone of the DB snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// True if mapping of AWS Identity and Access Management (IAM) accounts to database
    /// accounts is enabled, and otherwise false.
    #[serde(rename = "IAMDatabaseAuthenticationEnabled")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_database_authentication_enabled: Option<bool>,

    /// The number of CPU cores and the number of threads per core for the DB instance class of
    /// the DB instance when the DB snapshot was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_features: Option<Vec<ProcessorFeature>>,

    /// The identifier for the source DB instance, which can't be changed and which is unique to
    /// an AWS Region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dbi_resource_id: Option<String>,
}

impl DBSnapshot {
    #[must_use]
    pub fn with_db_snapshot_identifier(mut self, value: impl Into<String>) -> Self {
        self.db_snapshot_identifier = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_db_instance_identifier(mut self, value: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(value.into());
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
    pub fn with_availability_zone(mut self, value: impl Into<String>) -> Self {
        self.availability_zone = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_vpc_id(mut self, value: impl Into<String>) -> Self {
        self.vpc_id = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_instance_create_time(mut self, value: DateTime<Utc>) -> Self {
        self.instance_create_time = Some(value);
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
    pub fn with_percent_progress(mut self, value: i32) -> Self {
        self.percent_progress = Some(value);
        self
    }

    #[must_use]
    pub fn with_source_region(mut self, value: impl Into<String>) -> Self {
        self.source_region = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_source_db_snapshot_identifier(mut self, value: impl Into<String>) -> Self {
        self.source_db_snapshot_identifier = Some(value.into());
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
    pub fn with_encrypted(mut self, value: bool) -> Self {
        self.encrypted = Some(value);
        self
    }

    #[must_use]
    pub fn with_kms_key_id(mut self, value: impl Into<String>) -> Self {
        self.kms_key_id = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_db_snapshot_arn(mut self, value: impl Into<String>) -> Self {
        self.db_snapshot_arn = Some(value.into());
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
    pub fn with_dbi_resource_id(mut self, value: impl Into<String>) -> Self {
        self.dbi_resource_id = Some(value.into());
        self
    }
}

crate::display::impl_shape_display!(DBSnapshot);
