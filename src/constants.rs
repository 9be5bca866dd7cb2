// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Well-known coordinates of the origin pull secret
pub mod defaults {
    /// Name used when the tenant does not name a source secret
    pub const PULL_SECRET_NAME: &str = "samples-registry-credentials";
    /// Namespace used when the tenant does not name a source namespace
    pub const PULL_SECRET_NAMESPACE: &str = "openshift";
}

/// Secret type for registry pull credentials
pub const DOCKER_CONFIG_JSON: &str = "kubernetes.io/dockerconfigjson";
