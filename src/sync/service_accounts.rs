// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Linking pull secrets to service accounts.

use crate::error::{PullSyncError, Result};
use crate::kubernetes::upsert;
use k8s_openapi::api::core::v1::{LocalObjectReference, ServiceAccount};
use kube::{api::ListParams, Api, Client, ResourceExt};
use tracing::{debug, info, instrument};

/// Ensure every service account in the namespace references `secret_name`
/// as an image pull secret.
///
/// Accounts already holding the reference are skipped without a write.
/// Processing stops at the first account that fails; accounts linked before
/// the failure keep their update, and the next reconciliation pass picks up
/// the remainder.
#[instrument(skip(client))]
pub async fn link_secret_to_service_accounts(
    client: &Client,
    namespace: &str,
    secret_name: &str,
) -> Result<()> {
    let accounts: Api<ServiceAccount> = Api::namespaced(client.clone(), namespace);
    let account_list = accounts.list(&ListParams::default()).await?;

    for name in account_list.items.iter().map(|sa| sa.name_any()) {
        link_account(&accounts, namespace, &name, secret_name)
            .await
            .map_err(|e| PullSyncError::ServiceAccountSync {
                name: name.clone(),
                source: Box::new(e),
            })?;
    }

    Ok(())
}

/// Link a single service account, re-fetching it first so a stale listing
/// snapshot cannot clobber concurrent edits.
async fn link_account(
    accounts: &Api<ServiceAccount>,
    namespace: &str,
    name: &str,
    secret_name: &str,
) -> Result<()> {
    let current = accounts
        .get(name)
        .await
        .map_err(|e| PullSyncError::from_api::<ServiceAccount>(namespace, name, e))?;

    if references_secret(&current, secret_name) {
        debug!(
            "Service account {}/{} already references secret {}",
            namespace, name, secret_name
        );
        return Ok(());
    }

    upsert(accounts, namespace, name, |sa: &mut ServiceAccount| {
        // Re-checked inside the mutation in case a concurrent writer got
        // there between the fetch above and this write.
        if !references_secret(sa, secret_name) {
            sa.image_pull_secrets
                .get_or_insert_with(Vec::new)
                .push(LocalObjectReference {
                    name: secret_name.to_string(),
                });
        }
    })
    .await?;

    info!(
        "Linked secret {} to service account {}/{}",
        secret_name, namespace, name
    );

    Ok(())
}

fn references_secret(account: &ServiceAccount, secret_name: &str) -> bool {
    account
        .image_pull_secrets
        .as_ref()
        .is_some_and(|refs| refs.iter().any(|r| r.name == secret_name))
}
