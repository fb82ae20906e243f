//! Orderable instance options and option group options.
//!
//! These are read-only catalog records returned by
//! `DescribeOrderableDBInstanceOptions` and `DescribeOptionGroupOptions`.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::types::{AvailabilityZone, AvailableProcessorFeature};

/// Contains a list of available options for a DB instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderableDBInstanceOption {
    /// The engine type of a DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,

    /// The engine version of a DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,

    /// The DB instance class for a DB instance.
    #[serde(rename = "DBInstanceClass")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_instance_class: Option<String>,

    /// The license model for a DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<String>,

    /// A list of Availability Zones for a DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zones: Option<Vec<AvailabilityZone>>,

    /// Indicates whether a DB instance is Multi-AZ capable.
    #[serde(rename = "MultiAZCapable")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_az_capable: Option<bool>,

    /// Indicates whether a DB instance can have a read replica.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_replica_capable: Option<bool>,

    /// Indicates whether a DB instance is in a VPC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc: Option<bool>,

    /// Indicates whether a DB instance supports encrypted storage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_storage_encryption: Option<bool>,

    /// Indicates the storage type for a DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,

    /// Indicates whether a DB instance supports provisioned IOPS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_iops: Option<bool>,

    /// Indicates whether a DB instance supports Enhanced Monitoring at intervals from 1 to 60
    /// seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_enhanced_monitoring: Option<bool>,

    /// Indicates whether a DB instance supports IAM database authentication.
    #[serde(rename = "SupportsIAMDatabaseAuthentication")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_iam_database_authentication: Option<bool>,

    /// True if a DB instance supports Performance Insights, otherwise false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_performance_insights: Option<bool>,

    /// Minimum storage size for a DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_storage_size: Option<i32>,

    /// Maximum storage size for a DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_storage_size: Option<i32>,

    /// Minimum total provisioned IOPS for a DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_iops_per_db_instance: Option<i32>,

    /// Maximum total provisioned IOPS for a DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_iops_per_db_instance: Option<i32>,

    /// Minimum provisioned IOPS per GiB for a DB instance.
    #[serde(default, with = "iops_per_gib")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_iops_per_gib: Option<f64>,

    /// Maximum provisioned IOPS per GiB for a DB instance.
    #[serde(default, with = "iops_per_gib")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_iops_per_gib: Option<f64>,

    /// A list of the available processor features for the DB instance class of a DB instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_processor_features: Option<Vec<AvailableProcessorFeature>>,

    /// A list of the supported DB engine modes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_engine_modes: Option<Vec<String>>,

    /// Whether or not Amazon RDS can automatically scale storage for DB instances that use the
    /// specified instance class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_storage_autoscaling: Option<bool>,

    /// Whether a DB instance supports Kerberos Authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_kerberos_authentication: Option<bool>,
}

impl OrderableDBInstanceOption {
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
    pub fn with_db_instance_class(mut self, value: impl Into<String>) -> Self {
        self.db_instance_class = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_license_model(mut self, value: impl Into<String>) -> Self {
        self.license_model = Some(value.into());
        self
    }

    /// Appends to `AvailabilityZones`, creating the list if it is unset.
    #[must_use]
    pub fn with_availability_zones<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<AvailabilityZone>,
    {
        self.availability_zones
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_multi_az_capable(mut self, value: bool) -> Self {
        self.multi_az_capable = Some(value);
        self
    }

    #[must_use]
    pub fn with_read_replica_capable(mut self, value: bool) -> Self {
        self.read_replica_capable = Some(value);
        self
    }

    #[must_use]
    pub fn with_vpc(mut self, value: bool) -> Self {
        self.vpc = Some(value);
        self
    }

    #[must_use]
    pub fn with_supports_storage_encryption(mut self, value: bool) -> Self {
        self.supports_storage_encryption = Some(value);
        self
    }

    #[must_use]
    pub fn with_storage_type(mut self, value: impl Into<String>) -> Self {
        self.storage_type = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_supports_iops(mut self, value: bool) -> Self {
        self.supports_iops = Some(value);
        self
    }

    #[must_use]
    pub fn with_supports_enhanced_monitoring(mut self, value: bool) -> Self {
        self.supports_enhanced_monitoring = Some(value);
        self
    }

    #[must_use]
    pub fn with_supports_iam_database_authentication(mut self, value: bool) -> Self {
        self.supports_iam_database_authentication = Some(value);
        self
    }

    #[must_use]
    pub fn with_supports_performance_insights(mut self, value: bool) -> Self {
        self.supports_performance_insights = Some(value);
        self
    }

    #[must_use]
    pub fn with_min_storage_size(mut self, value: i32) -> Self {
        self.min_storage_size = Some(value);
        self
    }

    #[must_use]
    pub fn with_max_storage_size(mut self, value: i32) -> Self {
        self.max_storage_size = Some(value);
        self
    }

    #[must_use]
    pub fn with_min_iops_per_db_instance(mut self, value: i32) -> Self {
        self.min_iops_per_db_instance = Some(value);
        self
    }

    #[must_use]
    pub fn with_max_iops_per_db_instance(mut self, value: i32) -> Self {
        self.max_iops_per_db_instance = Some(value);
        self
    }

    #[must_use]
    pub fn with_min_iops_per_gib(mut self, value: f64) -> Self {
        self.min_iops_per_gib = Some(value);
        self
    }

    #[must_use]
    pub fn with_max_iops_per_gib(mut self, value: f64) -> Self {
        self.max_iops_per_gib = Some(value);
        self
    }

    /// Appends to `AvailableProcessorFeatures`, creating the list if it is unset.
    #[must_use]
    pub fn with_available_processor_features<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<AvailableProcessorFeature>,
    {
        self.available_processor_features
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    /// Appends to `SupportedEngineModes`, creating the list if it is unset.
    #[must_use]
    pub fn with_supported_engine_modes<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.supported_engine_modes
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_supports_storage_autoscaling(mut self, value: bool) -> Self {
        self.supports_storage_autoscaling = Some(value);
        self
    }

    #[must_use]
    pub fn with_supports_kerberos_authentication(mut self, value: bool) -> Self {
        self.supports_kerberos_authentication = Some(value);
        self
    }
}

// `f64` has no `Hash`; IOPS-per-GiB bounds hash by their bit pattern with
// negative zero folded into positive zero so equal values hash equally.
impl Hash for OrderableDBInstanceOption {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.engine.hash(state);
        self.engine_version.hash(state);
        self.db_instance_class.hash(state);
        self.license_model.hash(state);
        self.availability_zones.hash(state);
        self.multi_az_capable.hash(state);
        self.read_replica_capable.hash(state);
        self.vpc.hash(state);
        self.supports_storage_encryption.hash(state);
        self.storage_type.hash(state);
        self.supports_iops.hash(state);
        self.supports_enhanced_monitoring.hash(state);
        self.supports_iam_database_authentication.hash(state);
        self.supports_performance_insights.hash(state);
        self.min_storage_size.hash(state);
        self.max_storage_size.hash(state);
        self.min_iops_per_db_instance.hash(state);
        self.max_iops_per_db_instance.hash(state);
        self.min_iops_per_gib.map(|v| (v + 0.0).to_bits()).hash(state);
        self.max_iops_per_gib.map(|v| (v + 0.0).to_bits()).hash(state);
        self.available_processor_features.hash(state);
        self.supported_engine_modes.hash(state);
        self.supports_storage_autoscaling.hash(state);
        self.supports_kerberos_authentication.hash(state);
    }
}

// JSON has no NaN or infinity, so non-finite bounds travel as the strings
// `NaN`, `Infinity` and `-Infinity`.
mod iops_per_gib {
    use serde::de::{self, Unexpected};
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *value {
            None => serializer.serialize_none(),
            Some(v) if v.is_nan() => serializer.serialize_str("NaN"),
            Some(v) if v == f64::INFINITY => serializer.serialize_str("Infinity"),
            Some(v) if v == f64::NEG_INFINITY => serializer.serialize_str("-Infinity"),
            Some(v) => serializer.serialize_f64(v),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Bound {
            Number(f64),
            Text(String),
        }

        match Option::<Bound>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Bound::Number(v)) => Ok(Some(v)),
            Some(Bound::Text(s)) => match s.as_str() {
                "NaN" => Ok(Some(f64::NAN)),
                "Infinity" => Ok(Some(f64::INFINITY)),
                "-Infinity" => Ok(Some(f64::NEG_INFINITY)),
                other => Err(de::Error::invalid_value(
                    Unexpected::Str(other),
                    &"a number, NaN, Infinity or -Infinity",
                )),
            },
        }
    }
}

/// Available option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OptionGroupOption {
    /// The name of the option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The description of the option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The name of the engine that this option can be applied to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_name: Option<String>,

    /// Indicates the major engine version that the option is available for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_engine_version: Option<String>,

    /// The minimum required engine version for the option to be applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_required_minor_engine_version: Option<String>,

    /// Specifies whether the option requires a port.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_required: Option<bool>,

    /// If the option requires a port, specifies the default port for the option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_port: Option<i32>,

    /// The options that are prerequisites for this option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options_depended_on: Option<Vec<String>>,

    /// The options that conflict with this option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options_conflicts_with: Option<Vec<String>>,

    /// Persistent options can't be removed from an option group while DB instances are
    /// associated with the option group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistent: Option<bool>,

    /// Permanent options can never be removed from an option group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permanent: Option<bool>,

    /// If true, you must enable the Auto Minor Version Upgrade setting for your DB instance
    /// before you can use this option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_auto_minor_engine_version_upgrade: Option<bool>,

    /// If true, you can only use this option with a DB instance that is in a VPC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_only: Option<bool>,

    /// If true, you can change the option to an earlier version of the option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_option_version_downgrade: Option<bool>,

    /// The option settings that are available (and the default value) for each option in an
    /// option group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_option_settings: Option<Vec<OptionGroupOptionSetting>>,

    /// The versions that are available for the option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_option_versions: Option<Vec<OptionVersion>>,
}

impl OptionGroupOption {
    #[must_use]
    pub fn with_name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_engine_name(mut self, value: impl Into<String>) -> Self {
        self.engine_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_major_engine_version(mut self, value: impl Into<String>) -> Self {
        self.major_engine_version = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_minimum_required_minor_engine_version(mut self, value: impl Into<String>) -> Self {
        self.minimum_required_minor_engine_version = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_port_required(mut self, value: bool) -> Self {
        self.port_required = Some(value);
        self
    }

    #[must_use]
    pub fn with_default_port(mut self, value: i32) -> Self {
        self.default_port = Some(value);
        self
    }

    /// Appends to `OptionsDependedOn`, creating the list if it is unset.
    #[must_use]
    pub fn with_options_depended_on<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.options_depended_on
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    /// Appends to `OptionsConflictsWith`, creating the list if it is unset.
    #[must_use]
    pub fn with_options_conflicts_with<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.options_conflicts_with
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_persistent(mut self, value: bool) -> Self {
        self.persistent = Some(value);
        self
    }

    #[must_use]
    pub fn with_permanent(mut self, value: bool) -> Self {
        self.permanent = Some(value);
        self
    }

    #[must_use]
    pub fn with_requires_auto_minor_engine_version_upgrade(mut self, value: bool) -> Self {
        self.requires_auto_minor_engine_version_upgrade = Some(value);
        self
    }

    #[must_use]
    pub fn with_vpc_only(mut self, value: bool) -> Self {
        self.vpc_only = Some(value);
        self
    }

    #[must_use]
    pub fn with_supports_option_version_downgrade(mut self, value: bool) -> Self {
        self.supports_option_version_downgrade = Some(value);
        self
    }

    /// Appends to `OptionGroupOptionSettings`, creating the list if it is unset.
    #[must_use]
    pub fn with_option_group_option_settings<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OptionGroupOptionSetting>,
    {
        self.option_group_option_settings
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    /// Appends to `OptionGroupOptionVersions`, creating the list if it is unset.
    #[must_use]
    pub fn with_option_group_option_versions<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OptionVersion>,
    {
        self.option_group_option_versions
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }
}

/// Option group option settings are used to display settings available for each option with
/// their default values and other information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OptionGroupOptionSetting {
    /// The name of the option group option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setting_name: Option<String>,

    /// The description of the option group option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setting_description: Option<String>,

    /// The default value for the option group option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    /// The DB engine specific parameter type for the option group option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_type: Option<String>,

    /// Indicates the acceptable values for the option group option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<String>,

    /// Boolean value where true indicates that this option group option can be changed from the
    /// default value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_modifiable: Option<bool>,

    /// Boolean value where true indicates that a value must be specified for this option
    /// setting of the option group option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,

    /// The minimum DB engine version required for each corresponding allowed value for this
    /// option setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_engine_version_per_allowed_value: Option<Vec<MinimumEngineVersionPerAllowedValue>>,
}

impl OptionGroupOptionSetting {
    #[must_use]
    pub fn with_setting_name(mut self, value: impl Into<String>) -> Self {
        self.setting_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_setting_description(mut self, value: impl Into<String>) -> Self {
        self.setting_description = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_apply_type(mut self, value: impl Into<String>) -> Self {
        self.apply_type = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_allowed_values(mut self, value: impl Into<String>) -> Self {
        self.allowed_values = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_is_modifiable(mut self, value: bool) -> Self {
        self.is_modifiable = Some(value);
        self
    }

    #[must_use]
    pub fn with_is_required(mut self, value: bool) -> Self {
        self.is_required = Some(value);
        self
    }

    /// Appends to `MinimumEngineVersionPerAllowedValue`, creating the list if it is unset.
    #[must_use]
    pub fn with_minimum_engine_version_per_allowed_value<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<MinimumEngineVersionPerAllowedValue>,
    {
        self.minimum_engine_version_per_allowed_value
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }
}

/// The version for an option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OptionVersion {
    /// The version of the option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// True if the version is the default version of the option, and otherwise false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

impl OptionVersion {
    #[must_use]
    pub fn with_version(mut self, value: impl Into<String>) -> Self {
        self.version = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_is_default(mut self, value: bool) -> Self {
        self.is_default = Some(value);
        self
    }
}

/// The minimum DB engine version required for each corresponding allowed value for an option
/// setting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MinimumEngineVersionPerAllowedValue {
    /// The allowed value for an option setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_value: Option<String>,

    /// The minimum DB engine version required for the allowed value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_engine_version: Option<String>,
}

impl MinimumEngineVersionPerAllowedValue {
    #[must_use]
    pub fn with_allowed_value(mut self, value: impl Into<String>) -> Self {
        self.allowed_value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_minimum_engine_version(mut self, value: impl Into<String>) -> Self {
        self.minimum_engine_version = Some(value.into());
        self
    }
}

crate::display::impl_shape_display!(
    OrderableDBInstanceOption,
    OptionGroupOption,
    OptionGroupOptionSetting,
    OptionVersion,
    MinimumEngineVersionPerAllowedValue,
);

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use super::*;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_should_hash_equal_iops_bounds_equally() {
        let positive = OrderableDBInstanceOption::default()
            .with_engine("postgres")
            .with_min_iops_per_gib(0.0)
            .with_max_iops_per_gib(50.0);
        let negative = OrderableDBInstanceOption::default()
            .with_engine("postgres")
            .with_min_iops_per_gib(-0.0)
            .with_max_iops_per_gib(50.0);
        assert_eq!(positive, negative);
        assert_eq!(hash_of(&positive), hash_of(&negative));
    }

    #[test]
    fn test_should_distinguish_iops_bounds() {
        let low = OrderableDBInstanceOption::default().with_max_iops_per_gib(10.0);
        let high = OrderableDBInstanceOption::default().with_max_iops_per_gib(50.0);
        assert_ne!(low, high);
        assert_ne!(hash_of(&low), hash_of(&high));
    }

    #[test]
    fn test_should_render_fractional_iops() {
        let option = OrderableDBInstanceOption::default()
            .with_db_instance_class("db.m5.large")
            .with_min_iops_per_gib(0.5);
        assert_eq!(
            option.to_string(),
            "{DBInstanceClass: db.m5.large,MinIopsPerGib: 0.5}"
        );
    }

    #[test]
    fn test_should_keep_non_finite_iops_bounds() {
        let option = OrderableDBInstanceOption::default()
            .with_min_iops_per_gib(f64::NAN)
            .with_max_iops_per_gib(f64::INFINITY);
        assert_eq!(option.to_string(), "{MinIopsPerGib: NaN,MaxIopsPerGib: Infinity}");

        let json = serde_json::to_string(&option).expect("serialize OrderableDBInstanceOption");
        assert_eq!(json, r#"{"MinIopsPerGib":"NaN","MaxIopsPerGib":"Infinity"}"#);
        let parsed: OrderableDBInstanceOption =
            serde_json::from_str(&json).expect("deserialize OrderableDBInstanceOption");
        assert!(parsed.min_iops_per_gib.is_some_and(f64::is_nan));
        assert_eq!(parsed.max_iops_per_gib, Some(f64::INFINITY));
        assert_eq!(hash_of(&parsed), hash_of(&option));
    }

    #[test]
    fn test_should_read_iops_bounds_from_numbers_and_strings() {
        let parsed: OrderableDBInstanceOption =
            serde_json::from_str(r#"{"MinIopsPerGib": 1.5, "MaxIopsPerGib": "-Infinity"}"#)
                .expect("deserialize OrderableDBInstanceOption");
        assert_eq!(parsed.min_iops_per_gib, Some(1.5));
        assert_eq!(parsed.max_iops_per_gib, Some(f64::NEG_INFINITY));

        let unset: OrderableDBInstanceOption =
            serde_json::from_str(r#"{"MinIopsPerGib": null}"#).expect("deserialize null bound");
        assert_eq!(unset.min_iops_per_gib, None);
        assert_eq!(unset.max_iops_per_gib, None);

        let err = serde_json::from_str::<OrderableDBInstanceOption>(r#"{"MinIopsPerGib": "lots"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("lots"));
    }

    #[test]
    fn test_should_roundtrip_option_group_option() {
        let option = OptionGroupOption::default()
            .with_name("MEMCACHED")
            .with_engine_name("mysql")
            .with_port_required(true)
            .with_default_port(11211)
            .with_options_depended_on(["INNODB"]);
        let json = serde_json::to_string(&option).expect("serialize OptionGroupOption");
        let parsed: OptionGroupOption =
            serde_json::from_str(&json).expect("deserialize OptionGroupOption");
        assert_eq!(parsed, option);
    }
}
