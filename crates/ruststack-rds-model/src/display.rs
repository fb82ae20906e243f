//! Diagnostic rendering shared by every shape.
//!
//! A shape renders as `{Name: value,Name: value}` using the RDS member names in
//! declaration order. Unset members are left out, nested shapes render the same
//! way, lists render as `[a, b]` and strings are written without quotes. The
//! output is meant for logs and debugging, not for the wire.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Render a serializable shape into `f`.
///
/// The shape is first lowered to a [`Value`]; `serde_json` is built with
/// `preserve_order`, so members keep their declaration order.
pub fn fmt_shape<T>(shape: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: Serialize + ?Sized,
{
    let value = serde_json::to_value(shape).map_err(|_| fmt::Error)?;
    write_value(&value, f)
}

fn write_value(value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        Value::Null => Ok(()),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Number(n) => write!(f, "{n}"),
        Value::String(s) => f.write_str(s),
        Value::Array(items) => {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_value(item, f)?;
            }
            f.write_str("]")
        }
        Value::Object(members) => {
            f.write_str("{")?;
            let present = members.iter().filter(|(_, v)| !v.is_null());
            for (i, (name, member)) in present.enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{name}: ")?;
                write_value(member, f)?;
            }
            f.write_str("}")
        }
    }
}

/// Implement `Display` through [`fmt_shape`] for each listed shape.
macro_rules! impl_shape_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ::std::fmt::Display for $ty {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    $crate::display::fmt_shape(self, f)
                }
            }
        )*
    };
}

pub(crate) use impl_shape_display;

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::input::{CopyDBClusterSnapshotRequest, ModifyDBClusterRequest};
    use crate::types::{DBSnapshot, ScalingConfiguration, Tag};

    #[test]
    fn test_should_render_empty_shape_as_braces() {
        assert_eq!(CopyDBClusterSnapshotRequest::default().to_string(), "{}");
    }

    #[test]
    fn test_should_render_members_in_declaration_order() {
        let req = CopyDBClusterSnapshotRequest::default()
            .with_copy_tags(true)
            .with_target_db_cluster_snapshot_identifier("snap-2")
            .with_source_db_cluster_snapshot_identifier("snap-1");
        assert_eq!(
            req.to_string(),
            "{SourceDBClusterSnapshotIdentifier: snap-1,\
             TargetDBClusterSnapshotIdentifier: snap-2,\
             CopyTags: true}"
        );
    }

    #[test]
    fn test_should_omit_unset_members() {
        let req = CopyDBClusterSnapshotRequest::default().with_kms_key_id("alias/rds");
        let rendered = req.to_string();
        assert_eq!(rendered, "{KmsKeyId: alias/rds}");
        assert!(!rendered.contains("PreSignedUrl"));
        assert!(!rendered.contains("Tags"));
    }

    #[test]
    fn test_should_render_lists_and_nested_shapes() {
        let req = CopyDBClusterSnapshotRequest::default()
            .with_tags([Tag::new("env", "prod"), Tag::new("team", "db")]);
        assert_eq!(
            req.to_string(),
            "{Tags: [{Key: env,Value: prod}, {Key: team,Value: db}]}"
        );
    }

    #[test]
    fn test_should_render_empty_list_distinct_from_unset() {
        let req =
            ModifyDBClusterRequest::default().with_vpc_security_group_ids(Vec::<String>::new());
        assert_eq!(req.to_string(), "{VpcSecurityGroupIds: []}");
    }

    #[test]
    fn test_should_render_nested_scaling_configuration() {
        let req = ModifyDBClusterRequest::default()
            .with_db_cluster_identifier("aurora-1")
            .with_scaling_configuration(
                ScalingConfiguration::default()
                    .with_min_capacity(2)
                    .with_auto_pause(false),
            );
        assert_eq!(
            req.to_string(),
            "{DBClusterIdentifier: aurora-1,\
             ScalingConfiguration: {MinCapacity: 2,AutoPause: false}}"
        );
    }

    #[test]
    fn test_should_render_timestamps_as_rfc3339() {
        let created = Utc.with_ymd_and_hms(2020, 3, 14, 15, 9, 26).unwrap();
        let snapshot = DBSnapshot::default()
            .with_db_snapshot_identifier("rds:db-1-2020-03-14")
            .with_snapshot_create_time(created);
        assert_eq!(
            snapshot.to_string(),
            "{DBSnapshotIdentifier: rds:db-1-2020-03-14,SnapshotCreateTime: 2020-03-14T15:09:26Z}"
        );
    }
}
