//! Input types for DB snapshot operations.

use serde::{Deserialize, Serialize};

use crate::types::{Filter, Tag};

/// Copies the specified DB snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CopyDBSnapshotRequest {
    /// The identifier for the source DB snapshot.
    #[serde(rename = "SourceDBSnapshotIdentifier")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_db_snapshot_identifier: Option<String>,

    /// The identifier for the copy of the snapshot.
    #[serde(rename = "TargetDBSnapshotIdentifier")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_db_snapshot_identifier: Option<String>,

    /// The AWS KMS key ID for an encrypted DB snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,

    /// A list of tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    /// A value that indicates whether to copy all tags from the source DB snapshot to the
    /// target DB snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags: Option<bool>,

    /// The URL that contains a Signature Version 4 signed request for the CopyDBSnapshot API
    /// action in the source AWS Region that contains the source DB snapshot to copy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_signed_url: Option<String>,

    /// The name of an option group to associate with the copy of the snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,
}

impl CopyDBSnapshotRequest {
    #[must_use]
    pub fn with_source_db_snapshot_identifier(mut self, value: impl Into<String>) -> Self {
        self.source_db_snapshot_identifier = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_target_db_snapshot_identifier(mut self, value: impl Into<String>) -> Self {
        self.target_db_snapshot_identifier = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_kms_key_id(mut self, value: impl Into<String>) -> Self {
        self.kms_key_id = Some(value.into());
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
    pub fn with_copy_tags(mut self, value: bool) -> Self {
        self.copy_tags = Some(value);
        self
    }

    #[must_use]
    pub fn with_pre_signed_url(mut self, value: impl Into<String>) -> Self {
        self.pre_signed_url = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_option_group_name(mut self, value: impl Into<String>) -> Self {
        self.option_group_name = Some(value.into());
        self
    }
}

/// Returns information about DB snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDBSnapshotsRequest {
    /// The ID of the DB instance to retrieve the list of DB snapshots for.
    #[serde(rename = "DBInstanceIdentifier")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_instance_identifier: Option<String>,

    /// A specific DB snapshot identifier to describe.
    #[serde(rename = "DBSnapshotIdentifier")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_snapshot_identifier: Option<String>,

    /// The type of snapshots to be returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_type: Option<String>,

    /// A filter that specifies one or more DB snapshots to describe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,

    /// The maximum number of records to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<i32>,

    /// An optional pagination token provided by a previous DescribeDBSnapshots request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,

    /// A value that indicates whether to include shared manual DB cluster snapshots from other
    /// AWS accounts that this AWS account has been given permission to copy or restore.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_shared: Option<bool>,

    /// A value that indicates whether to include manual DB cluster snapshots that are public
    /// and can be copied or restored by any AWS account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_public: Option<bool>,

    /// A specific DB resource ID to describe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dbi_resource_id: Option<String>,
}

impl DescribeDBSnapshotsRequest {
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
    pub fn with_snapshot_type(mut self, value: impl Into<String>) -> Self {
        self.snapshot_type = Some(value.into());
        self
    }

    /// Appends to `Filters`, creating the list if it is unset.
    #[must_use]
    pub fn with_filters<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Filter>,
    {
        self.filters
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_max_records(mut self, value: i32) -> Self {
        self.max_records = Some(value);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, value: impl Into<String>) -> Self {
        self.marker = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_include_shared(mut self, value: bool) -> Self {
        self.include_shared = Some(value);
        self
    }

    #[must_use]
    pub fn with_include_public(mut self, value: bool) -> Self {
        self.include_public = Some(value);
        self
    }

    #[must_use]
    pub fn with_dbi_resource_id(mut self, value: impl Into<String>) -> Self {
        self.dbi_resource_id = Some(value.into());
        self
    }
}

crate::display::impl_shape_display!(CopyDBSnapshotRequest, DescribeDBSnapshotsRequest);
