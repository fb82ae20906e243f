//! Input types for RDS Proxy operations.

use serde::{Deserialize, Serialize};

/// Associate one or more `DBProxyTarget` data structures with a `DBProxyTargetGroup`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterDBProxyTargetsRequest {
    /// The identifier of the `DBProxy` that is associated with the `DBProxyTargetGroup`.
    #[serde(rename = "DBProxyName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_proxy_name: Option<String>,

    /// The identifier of the `DBProxyTargetGroup`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_group_name: Option<String>,

    /// One or more DB instance identifiers.
    #[serde(rename = "DBInstanceIdentifiers")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_instance_identifiers: Option<Vec<String>>,

    /// One or more DB cluster identifiers.
    #[serde(rename = "DBClusterIdentifiers")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cluster_identifiers: Option<Vec<String>>,
}

impl RegisterDBProxyTargetsRequest {
    #[must_use]
    pub fn with_db_proxy_name(mut self, value: impl Into<String>) -> Self {
        self.db_proxy_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_target_group_name(mut self, value: impl Into<String>) -> Self {
        self.target_group_name = Some(value.into());
        self
    }

    /// Appends to `DBInstanceIdentifiers`, creating the list if it is unset.
    #[must_use]
    pub fn with_db_instance_identifiers<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.db_instance_identifiers
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    /// Appends to `DBClusterIdentifiers`, creating the list if it is unset.
    #[must_use]
    pub fn with_db_cluster_identifiers<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.db_cluster_identifiers
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }
}

crate::display::impl_shape_display!(RegisterDBProxyTargetsRequest);
