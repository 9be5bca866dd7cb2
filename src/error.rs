// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::Resource;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PullSyncError {
    #[error("{kind} {namespace}/{name} not found")]
    NotFound {
        kind: String,
        namespace: String,
        name: String,
    },

    #[error("Conflicting write on {kind} {namespace}/{name}: {source}")]
    Conflict {
        kind: String,
        namespace: String,
        name: String,
        source: kube::Error,
    },

    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to sync service account {name}: {source}")]
    ServiceAccountSync {
        name: String,
        source: Box<PullSyncError>,
    },
}

impl PullSyncError {
    /// Classify a kube API failure for the object it was issued against.
    /// 404 and 409 are surfaced as their own variants so callers can tell
    /// "nothing to sync from" apart from "retry on the next pass".
    pub(crate) fn from_api<K>(namespace: &str, name: &str, err: kube::Error) -> Self
    where
        K: Resource<DynamicType = ()>,
    {
        let kind = K::kind(&()).into_owned();
        match err {
            kube::Error::Api(resp) if resp.code == 404 => PullSyncError::NotFound {
                kind,
                namespace: namespace.to_string(),
                name: name.to_string(),
            },
            kube::Error::Api(resp) if resp.code == 409 => PullSyncError::Conflict {
                kind,
                namespace: namespace.to_string(),
                name: name.to_string(),
                source: kube::Error::Api(resp),
            },
            other => PullSyncError::KubeError(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, PullSyncError>;
