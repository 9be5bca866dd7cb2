// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Replication of registry pull secrets into tenant namespaces.

use crate::constants::DOCKER_CONFIG_JSON;
use crate::error::{PullSyncError, Result};
use crate::kubernetes::upsert;
use crate::types::tenant::PullSecretRef;
use k8s_openapi::api::core::v1::Secret;
use kube::{Api, Client};
use tracing::{info, instrument};

/// Copy the tenant's origin pull secret to a destination namespace,
/// resolving unset origin coordinates to the platform defaults.
#[instrument(skip(client, pull_secret))]
pub async fn copy_pull_secret_to_namespace(
    client: &Client,
    pull_secret: &PullSecretRef,
    dest_name: &str,
    dest_namespace: &str,
) -> Result<()> {
    let (src_name, src_namespace) = pull_secret.resolved();
    copy_secret(client, src_name, src_namespace, dest_name, dest_namespace).await
}

/// Copy or update the destination secret from the source secret.
///
/// The destination's type and payload are overwritten from the source on
/// every call, even when they already match, so repeated invocations always
/// converge on the source. Every other destination field is left to the
/// API server.
#[instrument(skip(client))]
pub async fn copy_secret(
    client: &Client,
    src_name: &str,
    src_namespace: &str,
    dest_name: &str,
    dest_namespace: &str,
) -> Result<()> {
    let sources: Api<Secret> = Api::namespaced(client.clone(), src_namespace);
    let source = sources
        .get(src_name)
        .await
        .map_err(|e| PullSyncError::from_api::<Secret>(src_namespace, src_name, e))?;

    let destinations: Api<Secret> = Api::namespaced(client.clone(), dest_namespace);
    upsert(&destinations, dest_namespace, dest_name, |dest: &mut Secret| {
        dest.type_ = source
            .type_
            .clone()
            .or_else(|| Some(DOCKER_CONFIG_JSON.to_string()));
        dest.data = source.data.clone();
    })
    .await?;

    info!(
        "Copied secret {}/{} to {}/{}",
        src_namespace, src_name, dest_namespace, dest_name
    );

    Ok(())
}
