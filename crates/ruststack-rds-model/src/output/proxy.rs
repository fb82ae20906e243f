//! Output types for RDS Proxy operations.

use serde::{Deserialize, Serialize};

use crate::types::DBProxyTarget;

/// Result of the `RegisterDBProxyTargets` operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterDBProxyTargetsResult {
    /// One or more `DBProxyTarget` objects that are created when you register targets with a
    /// target group.
    #[serde(rename = "DBProxyTargets")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_proxy_targets: Option<Vec<DBProxyTarget>>,
}

impl RegisterDBProxyTargetsResult {
    /// Appends to `DBProxyTargets`, creating the list if it is unset.
    #[must_use]
    pub fn with_db_proxy_targets<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DBProxyTarget>,
    {
        self.db_proxy_targets
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }
}

crate::display::impl_shape_display!(RegisterDBProxyTargetsResult);
