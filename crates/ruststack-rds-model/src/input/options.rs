//! Input types for catalog queries.

use serde::{Deserialize, Serialize};

use crate::types::Filter;

/// Returns a list of orderable DB instance options for the specified engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeOrderableDBInstanceOptionsRequest {
    /// The name of the engine to retrieve DB instance options for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,

    /// The engine version filter value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,

    /// The DB instance class filter value.
    #[serde(rename = "DBInstanceClass")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_instance_class: Option<String>,

    /// The license model filter value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<String>,

    /// The Availability Zone group associated with a Local Zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone_group: Option<String>,

    /// A value that indicates whether to show only VPC or non-VPC offerings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc: Option<bool>,

    /// This parameter isn't currently supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,

    /// The maximum number of records to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<i32>,

    /// An optional pagination token provided by a previous `DescribeOrderableDBInstanceOptions`
    /// request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl DescribeOrderableDBInstanceOptionsRequest {
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

    #[must_use]
    pub fn with_availability_zone_group(mut self, value: impl Into<String>) -> Self {
        self.availability_zone_group = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_vpc(mut self, value: bool) -> Self {
        self.vpc = Some(value);
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
}

/// Describes all available options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeOptionGroupOptionsRequest {
    /// A required parameter. Options available for the given engine name are described.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_name: Option<String>,

    /// If specified, filters the results to include only options for the specified major engine
    /// version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_engine_version: Option<String>,

    /// This parameter isn't currently supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,

    /// The maximum number of records to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<i32>,

    /// An optional pagination token provided by a previous request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl DescribeOptionGroupOptionsRequest {
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
}

crate::display::impl_shape_display!(
    DescribeOrderableDBInstanceOptionsRequest,
    DescribeOptionGroupOptionsRequest,
);
