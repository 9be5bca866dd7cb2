// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Create-or-update primitive for namespaced objects.

use crate::error::{PullSyncError, Result};
use kube::{
    api::{Api, PostParams},
    Resource,
};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use tracing::debug;

/// Fetch the object by name, apply `mutate` to it, and write it back:
/// a replace when it exists, a create when it does not.
///
/// The replace carries the resourceVersion from the fetch, so a concurrent
/// writer surfaces as a 409 conflict (classified as `Conflict`) rather than
/// a lost update. A create that loses a creation race fails the same way.
/// Fields not touched by `mutate` keep whatever the fetched object held.
pub async fn upsert<K, F>(api: &Api<K>, namespace: &str, name: &str, mutate: F) -> Result<K>
where
    K: Resource<DynamicType = ()> + Clone + DeserializeOwned + Serialize + Default + Debug,
    F: FnOnce(&mut K),
{
    let existing = api
        .get_opt(name)
        .await
        .map_err(|e| PullSyncError::from_api::<K>(namespace, name, e))?;

    match existing {
        Some(mut object) => {
            mutate(&mut object);
            debug!("Updating {} {}/{}", K::kind(&()), namespace, name);
            api.replace(name, &PostParams::default(), &object)
                .await
                .map_err(|e| PullSyncError::from_api::<K>(namespace, name, e))
        }
        None => {
            let mut object = K::default();
            object.meta_mut().name = Some(name.to_string());
            mutate(&mut object);
            debug!("Creating {} {}/{}", K::kind(&()), namespace, name);
            api.create(&PostParams::default(), &object)
                .await
                .map_err(|e| PullSyncError::from_api::<K>(namespace, name, e))
        }
    }
}
