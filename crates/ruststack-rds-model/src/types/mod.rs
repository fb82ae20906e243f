//! Shared RDS shapes.
//!
//! Resource records (`DBCluster`, `DBInstance`, `DBSnapshot`, ...) live in the
//! submodules grouped by resource family; the small structures they share
//! (tags, filters, endpoints, processor features) are defined here.
//!
//! Every field is optional. An absent field is distinct from a zero value or an
//! empty list, and absent fields are omitted from serialized output.

mod cluster;
mod instance;
mod options;
mod proxy;
mod snapshot;

pub use cluster::{
    DBCluster, DBClusterMember, DBClusterOptionGroupStatus, DBClusterRole, DBClusterSnapshot,
    ScalingConfiguration, ScalingConfigurationInfo,
};
pub use instance::{
    DBInstance, DBInstanceRole, DBInstanceStatusInfo, DBParameterGroupStatus,
    DBSecurityGroupMembership, DBSubnetGroup, OptionGroupMembership, PendingModifiedValues, Subnet,
};
pub use options::{
    MinimumEngineVersionPerAllowedValue, OptionGroupOption, OptionGroupOptionSetting,
    OptionVersion, OrderableDBInstanceOption,
};
pub use proxy::{DBProxyTarget, TargetHealth, TargetHealthReason, TargetState, TargetType};
pub use snapshot::DBSnapshot;

use serde::{Deserialize, Serialize};

/// Metadata assigned to an Amazon RDS resource consisting of a key-value pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    /// A key is the required name of the tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// A value is the optional value of the tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Tag {
    /// Create a tag with both key and value set.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }

    #[must_use]
    pub fn with_key(mut self, value: impl Into<String>) -> Self {
        self.key = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// A filter name and value pair that is used to return a more specific list of results from a
/// describe operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Filter {
    /// The name of the filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// One or more filter values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl Filter {
    /// Create a filter matching any of `values` on `name`.
    #[must_use]
    pub fn new<I>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::default().with_name(name).with_values(values)
    }

    #[must_use]
    pub fn with_name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    /// Appends to `Values`, creating the list if it is unset.
    #[must_use]
    pub fn with_values<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.values
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }
}

/// Contains Availability Zone information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AvailabilityZone {
    /// The name of the Availability Zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AvailabilityZone {
    #[must_use]
    pub fn with_name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }
}

/// The connection endpoint of a DB instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Endpoint {
    /// Specifies the DNS address of the DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Specifies the port that the database engine is listening on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,

    /// Specifies the ID that Amazon Route 53 assigns when you create a hosted zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosted_zone_id: Option<String>,
}

impl Endpoint {
    #[must_use]
    pub fn with_address(mut self, value: impl Into<String>) -> Self {
        self.address = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_port(mut self, value: i32) -> Self {
        self.port = Some(value);
        self
    }

    #[must_use]
    pub fn with_hosted_zone_id(mut self, value: impl Into<String>) -> Self {
        self.hosted_zone_id = Some(value.into());
        self
    }
}

/// A processor feature setting, such as the number of CPU cores or threads per core.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProcessorFeature {
    /// The name of the processor feature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The value of a processor feature name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ProcessorFeature {
    #[must_use]
    pub fn with_name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// A processor feature available for a DB instance class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AvailableProcessorFeature {
    /// The name of the processor feature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The default value for the processor feature of the DB instance class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    /// The allowed values for the processor feature of the DB instance class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<String>,
}

impl AvailableProcessorFeature {
    #[must_use]
    pub fn with_name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_allowed_values(mut self, value: impl Into<String>) -> Self {
        self.allowed_values = Some(value.into());
        self
    }
}

/// A VPC security group membership of a DB instance or cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VpcSecurityGroupMembership {
    /// The name of the VPC security group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_id: Option<String>,

    /// The status of the VPC security group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl VpcSecurityGroupMembership {
    #[must_use]
    pub fn with_vpc_security_group_id(mut self, value: impl Into<String>) -> Self {
        self.vpc_security_group_id = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }
}

/// An Active Directory domain membership record associated with the DB instance or cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainMembership {
    /// The identifier of the Active Directory domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// The status of the Active Directory domain membership.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// The fully qualified domain name of the Active Directory domain.
    #[serde(rename = "FQDN")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fqdn: Option<String>,

    /// The name of the IAM role to be used when making API calls to the Directory Service.
    #[serde(rename = "IAMRoleName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_role_name: Option<String>,
}

impl DomainMembership {
    #[must_use]
    pub fn with_domain(mut self, value: impl Into<String>) -> Self {
        self.domain = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_fqdn(mut self, value: impl Into<String>) -> Self {
        self.fqdn = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_iam_role_name(mut self, value: impl Into<String>) -> Self {
        self.iam_role_name = Some(value.into());
        self
    }
}

/// The log types to enable or disable for exporting to CloudWatch Logs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CloudwatchLogsExportConfiguration {
    /// The list of log types to enable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_log_types: Option<Vec<String>>,

    /// The list of log types to disable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_log_types: Option<Vec<String>>,
}

impl CloudwatchLogsExportConfiguration {
    /// Appends to `EnableLogTypes`, creating the list if it is unset.
    #[must_use]
    pub fn with_enable_log_types<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.enable_log_types
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    /// Appends to `DisableLogTypes`, creating the list if it is unset.
    #[must_use]
    pub fn with_disable_log_types<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.disable_log_types
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }
}

/// Log types whose export to CloudWatch Logs is in the process of being changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PendingCloudwatchLogsExports {
    /// Log types that are in the process of being enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_types_to_enable: Option<Vec<String>>,

    /// Log types that are in the process of being deactivated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_types_to_disable: Option<Vec<String>>,
}

impl PendingCloudwatchLogsExports {
    /// Appends to `LogTypesToEnable`, creating the list if it is unset.
    #[must_use]
    pub fn with_log_types_to_enable<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.log_types_to_enable
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    /// Appends to `LogTypesToDisable`, creating the list if it is unset.
    #[must_use]
    pub fn with_log_types_to_disable<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.log_types_to_disable
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }
}

crate::display::impl_shape_display!(
    Tag,
    Filter,
    AvailabilityZone,
    Endpoint,
    ProcessorFeature,
    AvailableProcessorFeature,
    VpcSecurityGroupMembership,
    DomainMembership,
    CloudwatchLogsExportConfiguration,
    PendingCloudwatchLogsExports,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_serialize_tag() {
        let tag = Tag::new("env", "prod");
        let json = serde_json::to_string(&tag).expect("serialize Tag");
        assert_eq!(json, r#"{"Key":"env","Value":"prod"}"#);
    }

    #[test]
    fn test_should_skip_unset_members_when_serializing() {
        let endpoint = Endpoint::default().with_address("db-1.example.internal");
        let json = serde_json::to_string(&endpoint).expect("serialize Endpoint");
        assert_eq!(json, r#"{"Address":"db-1.example.internal"}"#);
    }

    #[test]
    fn test_should_append_on_repeated_list_withers() {
        let filter =
            Filter::new("engine", ["aurora"]).with_values(["aurora-mysql", "aurora-postgresql"]);
        assert_eq!(filter.name.as_deref(), Some("engine"));
        assert_eq!(
            filter.values,
            Some(vec![
                "aurora".to_owned(),
                "aurora-mysql".to_owned(),
                "aurora-postgresql".to_owned(),
            ])
        );
    }

    #[test]
    fn test_should_keep_empty_list_distinct_from_unset() {
        let unset = Filter::default().with_name("engine");
        let empty = Filter::default()
            .with_name("engine")
            .with_values(Vec::<String>::new());
        assert_eq!(unset.values, None);
        assert_eq!(empty.values, Some(Vec::new()));
        assert_ne!(unset, empty);
        let json = serde_json::to_string(&empty).expect("serialize Filter");
        assert_eq!(json, r#"{"Name":"engine","Values":[]}"#);
    }

    #[test]
    fn test_should_match_assignment_and_wither() {
        let mut assigned = ProcessorFeature::default();
        assigned.name = Some("coreCount".to_owned());
        assigned.value = Some("4".to_owned());

        let built = ProcessorFeature::default().with_name("coreCount").with_value("4");
        assert_eq!(assigned, built);
        assert_eq!(assigned.name.as_deref(), Some("coreCount"));
    }

    #[test]
    fn test_should_break_equality_on_any_single_change() {
        let base = VpcSecurityGroupMembership::default()
            .with_vpc_security_group_id("sg-1")
            .with_status("active");
        assert_ne!(base, base.clone().with_status("removing"));
        assert_ne!(base, base.clone().with_vpc_security_group_id("sg-2"));

        let mut cleared = base.clone();
        cleared.status = None;
        assert_ne!(base, cleared);
    }

    #[test]
    fn test_should_render_pending_log_exports() {
        let pending = PendingCloudwatchLogsExports::default()
            .with_log_types_to_enable(["audit", "error"])
            .with_log_types_to_disable(["slowquery"]);
        assert_eq!(
            pending.to_string(),
            "{LogTypesToEnable: [audit, error],LogTypesToDisable: [slowquery]}"
        );
    }
}
