// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pull secret replication and service account linking.

pub mod pull_secret;
pub mod service_accounts;

pub use pull_secret::{copy_pull_secret_to_namespace, copy_secret};
pub use service_accounts::link_secret_to_service_accounts;
