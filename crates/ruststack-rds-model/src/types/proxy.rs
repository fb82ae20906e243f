//! RDS Proxy target records.

use serde::{Deserialize, Serialize};

/// Contains the details for an RDS Proxy target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DBProxyTarget {
    /// The Amazon Resource Name (ARN) for the RDS DB instance or Aurora DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_arn: Option<String>,

    /// The writer endpoint for the RDS DB instance or Aurora DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// The DB cluster identifier when the target represents an Aurora DB cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracked_cluster_id: Option<String>,

    /// The identifier representing the target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rds_resource_id: Option<String>,

    /// The port that the RDS Proxy uses to connect to the target RDS DB instance or Aurora DB
    /// cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,

    /// Specifies the kind of database, such as an RDS DB instance or an Aurora DB cluster, that
    /// the target represents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<TargetType>,

    /// Information about the connection health of the RDS Proxy target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_health: Option<TargetHealth>,
}

impl DBProxyTarget {
    #[must_use]
    pub fn with_target_arn(mut self, value: impl Into<String>) -> Self {
        self.target_arn = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_endpoint(mut self, value: impl Into<String>) -> Self {
        self.endpoint = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_tracked_cluster_id(mut self, value: impl Into<String>) -> Self {
        self.tracked_cluster_id = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_rds_resource_id(mut self, value: impl Into<String>) -> Self {
        self.rds_resource_id = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_port(mut self, value: i32) -> Self {
        self.port = Some(value);
        self
    }

    #[must_use]
    pub fn with_type(mut self, value: TargetType) -> Self {
        self.r#type = Some(value);
        self
    }

    #[must_use]
    pub fn with_target_health(mut self, value: TargetHealth) -> Self {
        self.target_health = Some(value);
        self
    }
}

/// Information about the connection health of an RDS Proxy target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TargetHealth {
    /// The current state of the connection health lifecycle for the RDS Proxy target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<TargetState>,

    /// The reason for the current health `State` of the RDS Proxy target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<TargetHealthReason>,

    /// A description of the health of the RDS Proxy target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TargetHealth {
    #[must_use]
    pub fn with_state(mut self, value: TargetState) -> Self {
        self.state = Some(value);
        self
    }

    #[must_use]
    pub fn with_reason(mut self, value: TargetHealthReason) -> Self {
        self.reason = Some(value);
        self
    }

    #[must_use]
    pub fn with_description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// The kind of database a proxy target represents.
///
/// Values the model does not know about are preserved in `Unknown` so that a
/// newer service response still deserializes. Build values from strings with
/// `From<&str>`; equality and hashing go through the wire string, so an
/// `Unknown` holding a known name equals the named variant.
#[derive(Debug, Clone)]
pub enum TargetType {
    /// An RDS DB instance.
    RdsInstance,
    /// The endpoint of an Aurora Serverless DB cluster.
    RdsServerlessEndpoint,
    /// An Aurora DB cluster whose membership the proxy tracks.
    TrackedCluster,
    /// A target type not known to this model. Only `From<&str>` should build it.
    Unknown(String),
}

impl TargetType {
    /// Returns the RDS wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::RdsInstance => "RDS_INSTANCE",
            Self::RdsServerlessEndpoint => "RDS_SERVERLESS_ENDPOINT",
            Self::TrackedCluster => "TRACKED_CLUSTER",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for TargetType {
    fn from(s: &str) -> Self {
        match s {
            "RDS_INSTANCE" => Self::RdsInstance,
            "RDS_SERVERLESS_ENDPOINT" => Self::RdsServerlessEndpoint,
            "TRACKED_CLUSTER" => Self::TrackedCluster,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

/// Lifecycle state of a proxy target's connection health.
#[derive(Debug, Clone)]
pub enum TargetState {
    /// The target is being registered with the proxy.
    Registering,
    /// The proxy can connect to the target.
    Available,
    /// The proxy cannot connect to the target.
    Unavailable,
    /// A target state not known to this model. Only `From<&str>` should build it.
    Unknown(String),
}

impl TargetState {
    /// Returns the RDS wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Registering => "REGISTERING",
            Self::Available => "AVAILABLE",
            Self::Unavailable => "UNAVAILABLE",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for TargetState {
    fn from(s: &str) -> Self {
        match s {
            "REGISTERING" => Self::Registering,
            "AVAILABLE" => Self::Available,
            "UNAVAILABLE" => Self::Unavailable,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

/// Why a proxy target is in its current health state.
#[derive(Debug, Clone)]
pub enum TargetHealthReason {
    /// The target could not be reached over the network.
    Unreachable,
    /// The proxy reached the target but the connection failed.
    ConnectionFailed,
    /// The proxy credentials were rejected by the target.
    AuthFailure,
    /// The proxy is still scaling up to serve the target.
    PendingProxyCapacity,
    /// A health reason not known to this model. Only `From<&str>` should build it.
    Unknown(String),
}

impl TargetHealthReason {
    /// Returns the RDS wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unreachable => "UNREACHABLE",
            Self::ConnectionFailed => "CONNECTION_FAILED",
            Self::AuthFailure => "AUTH_FAILURE",
            Self::PendingProxyCapacity => "PENDING_PROXY_CAPACITY",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl From<&str> for TargetHealthReason {
    fn from(s: &str) -> Self {
        match s {
            "UNREACHABLE" => Self::Unreachable,
            "CONNECTION_FAILED" => Self::ConnectionFailed,
            "AUTH_FAILURE" => Self::AuthFailure,
            "PENDING_PROXY_CAPACITY" => Self::PendingProxyCapacity,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

/// Wire-string equality, hashing, serde and `Display` for the string-backed
/// enums above.
macro_rules! impl_wire_string {
    ($($ty:ident),* $(,)?) => {
        $(
            impl PartialEq for $ty {
                fn eq(&self, other: &Self) -> bool {
                    self.as_str() == other.as_str()
                }
            }

            impl Eq for $ty {}

            impl std::hash::Hash for $ty {
                fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                    std::hash::Hash::hash(self.as_str(), state);
                }
            }

            impl Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    serializer.serialize_str(self.as_str())
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: serde::Deserializer<'de>,
                {
                    let s = String::deserialize(deserializer)?;
                    Ok(Self::from(s.as_str()))
                }
            }

            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

impl_wire_string!(TargetType, TargetState, TargetHealthReason);

crate::display::impl_shape_display!(DBProxyTarget, TargetHealth);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_serialize_target_type_as_wire_string() {
        let target = DBProxyTarget::default()
            .with_rds_resource_id("db-ABCDEFGHIJKL")
            .with_type(TargetType::RdsInstance);
        let json = serde_json::to_string(&target).expect("serialize DBProxyTarget");
        assert_eq!(
            json,
            r#"{"RdsResourceId":"db-ABCDEFGHIJKL","Type":"RDS_INSTANCE"}"#
        );
        assert_eq!(
            target.to_string(),
            "{RdsResourceId: db-ABCDEFGHIJKL,Type: RDS_INSTANCE}"
        );
    }

    #[test]
    fn test_should_roundtrip_target_health() {
        let health = TargetHealth::default()
            .with_state(TargetState::Unavailable)
            .with_reason(TargetHealthReason::AuthFailure)
            .with_description("password authentication failed");
        let json = serde_json::to_string(&health).expect("serialize TargetHealth");
        let parsed: TargetHealth = serde_json::from_str(&json).expect("deserialize TargetHealth");
        assert_eq!(parsed, health);
    }

    #[test]
    fn test_should_preserve_unknown_enum_values() {
        let parsed: TargetState =
            serde_json::from_str(r#""DRAINING""#).expect("deserialize TargetState");
        assert_eq!(parsed, TargetState::Unknown("DRAINING".to_owned()));
        assert_eq!(parsed.to_string(), "DRAINING");
        assert_eq!(
            serde_json::to_string(&parsed).expect("serialize TargetState"),
            r#""DRAINING""#
        );
    }

    #[test]
    fn test_should_treat_unknown_known_name_as_named_variant() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        fn hash_of<T: Hash>(value: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        let spelled = TargetType::Unknown("RDS_INSTANCE".to_owned());
        assert_eq!(spelled, TargetType::RdsInstance);
        assert_eq!(hash_of(&spelled), hash_of(&TargetType::RdsInstance));

        let json = serde_json::to_string(&spelled).expect("serialize TargetType");
        let parsed: TargetType = serde_json::from_str(&json).expect("deserialize TargetType");
        assert!(matches!(parsed, TargetType::RdsInstance));
        assert_eq!(parsed, spelled);

        assert_eq!(TargetState::Unknown("AVAILABLE".to_owned()), TargetState::Available);
        assert_ne!(TargetState::Unknown("DRAINING".to_owned()), TargetState::Available);
        assert_eq!(
            TargetHealthReason::Unknown("AUTH_FAILURE".to_owned()),
            TargetHealthReason::AuthFailure
        );
    }

    #[test]
    fn test_should_display_all_enum_variants() {
        assert_eq!(TargetType::RdsServerlessEndpoint.to_string(), "RDS_SERVERLESS_ENDPOINT");
        assert_eq!(TargetType::TrackedCluster.to_string(), "TRACKED_CLUSTER");
        assert_eq!(TargetState::Registering.to_string(), "REGISTERING");
        assert_eq!(TargetState::Available.to_string(), "AVAILABLE");
        assert_eq!(TargetHealthReason::Unreachable.to_string(), "UNREACHABLE");
        assert_eq!(
            TargetHealthReason::PendingProxyCapacity.to_string(),
            "PENDING_PROXY_CAPACITY"
        );
        assert_eq!(
            TargetHealthReason::from("CONNECTION_FAILED"),
            TargetHealthReason::ConnectionFailed
        );
    }
}
