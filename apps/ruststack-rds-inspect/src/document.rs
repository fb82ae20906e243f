//! Request documents.
//!
//! A request document names an RDS action and carries its parameters using the
//! RDS member names:
//!
//! ```json
//! {"Action": "CopyDBClusterSnapshot", "Parameters": {"CopyTags": true}}
//! ```
//!
//! An input may hold several documents back to back, optionally separated by
//! whitespace or newlines.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use ruststack_rds_model::RdsRequest;

use crate::config::OutputFormat;
use crate::error::{InspectError, InspectResult};

/// A single `{"Action": ..., "Parameters": ...}` document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RequestDocument {
    /// The RDS action name, e.g. `CopyDBClusterSnapshot`.
    pub action: String,
    /// The request members; absent means an empty request.
    #[serde(default = "empty_parameters")]
    pub parameters: Value,
}

fn empty_parameters() -> Value {
    Value::Object(Map::new())
}

impl RequestDocument {
    /// Decode the parameters into the typed request for the named action.
    ///
    /// With `strict` set, members the request shape does not declare are an
    /// error instead of being dropped.
    pub fn decode(self, strict: bool) -> InspectResult<RdsRequest> {
        let unknown_source = strict.then(|| self.parameters.clone());
        let request = RdsRequest::from_action(&self.action, self.parameters)?;

        if let Some(given) = unknown_source {
            let canonical = request.to_json()?;
            let mut members = Vec::new();
            collect_undeclared("", &given, &canonical, &mut members);
            if !members.is_empty() {
                return Err(InspectError::UnknownMembers {
                    action: self.action,
                    members,
                });
            }
        }

        debug!(action = %request.operation(), strict, "decoded request document");
        Ok(request)
    }
}

/// Split `input` into request documents.
///
/// Parsing stops at the first malformed document.
pub fn parse_documents(input: &str) -> InspectResult<Vec<RequestDocument>> {
    serde_json::Deserializer::from_str(input)
        .into_iter::<RequestDocument>()
        .map(|doc| doc.map_err(InspectError::from))
        .collect()
}

/// Render a decoded request as `<Action> <body>`.
pub fn render(request: &RdsRequest, format: OutputFormat) -> InspectResult<String> {
    let body = match format {
        OutputFormat::Text => request.to_string(),
        OutputFormat::Json => serde_json::to_string(&request.to_json()?)?,
    };
    Ok(format!("{} {body}", request.operation()))
}

// Record every non-null member of `given` that is missing from `canonical`,
// descending into nested objects and list elements.
fn collect_undeclared(path: &str, given: &Value, canonical: &Value, out: &mut Vec<String>) {
    match (given, canonical) {
        (Value::Object(given), Value::Object(canonical)) => {
            for (name, member) in given {
                let member_path = if path.is_empty() {
                    name.clone()
                } else {
                    format!("{path}.{name}")
                };
                match canonical.get(name) {
                    Some(declared) => collect_undeclared(&member_path, member, declared, out),
                    None if !member.is_null() => out.push(member_path),
                    None => {}
                }
            }
        }
        (Value::Array(given), Value::Array(canonical)) => {
            for (i, (item, declared)) in given.iter().zip(canonical).enumerate() {
                collect_undeclared(&format!("{path}[{i}]"), item, declared, out);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use ruststack_rds_model::{RdsErrorCode, RdsOperation};
    use serde_json::json;

    use super::*;

    fn document(value: Value) -> RequestDocument {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_should_parse_back_to_back_documents() {
        let input = r#"
            {"Action": "DescribeDBSnapshots", "Parameters": {"MaxRecords": 20}}
            {"Action": "CopyDBSnapshot"}
        "#;
        let docs = parse_documents(input).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].action, "DescribeDBSnapshots");
        assert_eq!(docs[1].parameters, json!({}));
    }

    #[test]
    fn test_should_reject_document_without_action() {
        let err = parse_documents(r#"{"Parameters": {}}"#).unwrap_err();
        assert!(matches!(err, InspectError::Malformed(_)));
        assert!(err.to_string().contains("Action"));
    }

    #[test]
    fn test_should_decode_and_render_text() {
        let request = document(json!({
            "Action": "CopyDBClusterSnapshot",
            "Parameters": {
                "SourceDBClusterSnapshotIdentifier": "my-cluster-snapshot1",
                "TargetDBClusterSnapshotIdentifier": "my-cluster-snapshot2",
                "CopyTags": true
            }
        }))
        .decode(false)
        .unwrap();
        assert_eq!(request.operation(), RdsOperation::CopyDBClusterSnapshot);
        assert_eq!(
            render(&request, OutputFormat::Text).unwrap(),
            "CopyDBClusterSnapshot {SourceDBClusterSnapshotIdentifier: my-cluster-snapshot1,\
             TargetDBClusterSnapshotIdentifier: my-cluster-snapshot2,\
             CopyTags: true}"
        );
    }

    #[test]
    fn test_should_render_canonical_json() {
        let request = document(json!({
            "Action": "RegisterDBProxyTargets",
            "Parameters": {"DBProxyName": "proxy-1", "DBClusterIdentifiers": ["aurora-1"]}
        }))
        .decode(false)
        .unwrap();
        let expected = concat!(
            "RegisterDBProxyTargets ",
            r#"{"DBProxyName":"proxy-1","DBClusterIdentifiers":["aurora-1"]}"#
        );
        assert_eq!(render(&request, OutputFormat::Json).unwrap(), expected);
    }

    #[test]
    fn test_should_drop_unknown_members_when_lenient() {
        let request = document(json!({
            "Action": "CopyDBSnapshot",
            "Parameters": {"SourceDBSnapshotIdentifier": "snap-1", "Colour": "blue"}
        }))
        .decode(false)
        .unwrap();
        assert_eq!(request.to_string(), "{SourceDBSnapshotIdentifier: snap-1}");
    }

    #[test]
    fn test_should_report_unknown_members_when_strict() {
        let err = document(json!({
            "Action": "CopyDBSnapshot",
            "Parameters": {
                "SourceDBSnapshotIdentifier": "snap-1",
                "Colour": "blue",
                "Tags": [{"Key": "env", "Value": "dev", "Owner": "ops"}],
                "KmsKeyId": null
            }
        }))
        .decode(true)
        .unwrap_err();
        match err {
            InspectError::UnknownMembers { action, members } => {
                assert_eq!(action, "CopyDBSnapshot");
                assert_eq!(members, ["Colour", "Tags[0].Owner"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_should_accept_declared_members_when_strict() {
        let request = document(json!({
            "Action": "ModifyDBCluster",
            "Parameters": {
                "DBClusterIdentifier": "aurora-1",
                "ScalingConfiguration": {"MinCapacity": 2, "AutoPause": true}
            }
        }))
        .decode(true)
        .unwrap();
        assert_eq!(request.operation(), RdsOperation::ModifyDBCluster);
    }

    #[test]
    fn test_should_surface_unknown_action() {
        let err = document(json!({"Action": "DropDatabase"}))
            .decode(false)
            .unwrap_err();
        assert!(matches!(
            err,
            InspectError::Request(ref e) if e.code == RdsErrorCode::InvalidAction
        ));
    }
}
