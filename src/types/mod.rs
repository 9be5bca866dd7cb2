// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Configuration types consumed from the embedding operator.

pub mod tenant;

pub use tenant::PullSecretRef;
