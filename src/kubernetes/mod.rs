// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes primitives shared by the sync operations.

pub mod upsert;

pub use upsert::upsert;
