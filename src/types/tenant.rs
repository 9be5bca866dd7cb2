// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::defaults;
use serde::{Deserialize, Serialize};

/// Origin pull secret coordinates carried on a tenant spec.
///
/// Callers embed this in their own CRD spec; both fields are optional and
/// fall back to the well-known origin secret shipped with the platform.
#[derive(Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PullSecretRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl PullSecretRef {
    /// Resolve the origin secret coordinates. Unset or empty fields resolve
    /// to the platform defaults; the descriptor itself is never mutated.
    pub fn resolved(&self) -> (&str, &str) {
        let name = self
            .name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(defaults::PULL_SECRET_NAME);
        let namespace = self
            .namespace
            .as_deref()
            .filter(|ns| !ns.is_empty())
            .unwrap_or(defaults::PULL_SECRET_NAMESPACE);
        (name, namespace)
    }
}
