//! Output types for DB snapshot operations.

use serde::{Deserialize, Serialize};

use crate::types::DBSnapshot;

/// Result of the `CopyDBSnapshot` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CopyDBSnapshotResult {
    /// The newly created DB snapshot.
    #[serde(rename = "DBSnapshot")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_snapshot: Option<DBSnapshot>,
}

impl CopyDBSnapshotResult {
    #[must_use]
    pub fn with_db_snapshot(mut self, value: DBSnapshot) -> Self {
        self.db_snapshot = Some(value);
        self
    }
}

/// Result of the `DescribeDBSnapshots` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDBSnapshotsResult {
    /// An optional pagination token; when present, only records beyond the marker remain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,

    /// The DB snapshots matching the request.
    #[serde(rename = "DBSnapshots")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_snapshots: Option<Vec<DBSnapshot>>,
}

impl DescribeDBSnapshotsResult {
    #[must_use]
    pub fn with_marker(mut self, value: impl Into<String>) -> Self {
        self.marker = Some(value.into());
        self
    }

    /// Appends to `DBSnapshots`, creating the list if it is unset.
    #[must_use]
    pub fn with_db_snapshots<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DBSnapshot>,
    {
        self.db_snapshots
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }
}

crate::display::impl_shape_display!(CopyDBSnapshotResult, DescribeDBSnapshotsResult);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_deserialize_describe_snapshots_page() {
        let json = r#"{
            "Marker": "page-2",
            "DBSnapshots": [
                {"DBSnapshotIdentifier": "rds:db-1-2021-01-01", "SnapshotType": "automated"},
                {"DBSnapshotIdentifier": "manual-1", "SnapshotType": "manual"}
            ]
        }"#;
        let result: DescribeDBSnapshotsResult =
            serde_json::from_str(json).expect("deserialize DescribeDBSnapshotsResult");
        assert_eq!(result.marker.as_deref(), Some("page-2"));
        let snapshots = result.db_snapshots.expect("snapshots");
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[1].snapshot_type.as_deref(), Some("manual"));
    }

    #[test]
    fn test_should_render_wrapped_snapshot() {
        let result = CopyDBSnapshotResult::default()
            .with_db_snapshot(DBSnapshot::default().with_db_snapshot_identifier("copy-1"));
        assert_eq!(result.to_string(), "{DBSnapshot: {DBSnapshotIdentifier: copy-1}}");
    }
}
