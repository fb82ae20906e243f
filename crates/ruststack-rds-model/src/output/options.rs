//! Output types for catalog queries.

use serde::{Deserialize, Serialize};

use crate::types::{OptionGroupOption, OrderableDBInstanceOption};

/// Result of the `DescribeOrderableDBInstanceOptions` operation.
#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeOrderableDBInstanceOptionsResult {
    /// The orderable DB instance options matching the request.
    #[serde(rename = "OrderableDBInstanceOptions")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderable_db_instance_options: Option<Vec<OrderableDBInstanceOption>>,

    /// An optional pagination token; when present, only records beyond the marker remain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl DescribeOrderableDBInstanceOptionsResult {
    /// Appends to `OrderableDBInstanceOptions`, creating the list if it is unset.
    #[must_use]
    pub fn with_orderable_db_instance_options<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OrderableDBInstanceOption>,
    {
        self.orderable_db_instance_options
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_marker(mut self, value: impl Into<String>) -> Self {
        self.marker = Some(value.into());
        self
    }
}

/// Result of the `DescribeOptionGroupOptions` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeOptionGroupOptionsResult {
    /// The available option group options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_options: Option<Vec<OptionGroupOption>>,

    /// An optional pagination token; when present, only records beyond the marker remain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl DescribeOptionGroupOptionsResult {
    /// Appends to `OptionGroupOptions`, creating the list if it is unset.
    #[must_use]
    pub fn with_option_group_options<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OptionGroupOption>,
    {
        self.option_group_options
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_marker(mut self, value: impl Into<String>) -> Self {
        self.marker = Some(value.into());
        self
    }
}

crate::display::impl_shape_display!(
    DescribeOrderableDBInstanceOptionsResult,
    DescribeOptionGroupOptionsResult,
);
