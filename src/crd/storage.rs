//! # Storage Configuration
//!
//! Storage backend configuration for the registry.
//!
//! On the wire a storage block is a union by presence: five optional keys,
//! one per backend. Nothing here rejects a block with several backends set.
//! [`ImageRegistryConfigStorage::backend`] offers a typed view that reports
//! the ambiguity instead of picking one.

use crate::error::{Error, Result};
use k8s_openapi::api::core::v1 as corev1;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Amazon S3 (or S3-compatible) storage
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageRegistryConfigStorageS3 {
    /// Bucket name in which to store the registry's data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
    /// Region in which the bucket exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Endpoint for S3-compatible storage services
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_endpoint: Option<String>,
    /// Whether the registry stores the image in encrypted format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypt: Option<bool>,
}

/// Azure blob storage
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageRegistryConfigStorageAzure {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
}

/// Google Cloud Storage
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageRegistryConfigStorageGCS {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
}

/// OpenStack Swift object storage
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageRegistryConfigStorageSwift {
    /// Keystone authentication URL
    #[serde(default, rename = "authURL", skip_serializing_if = "Option::is_none")]
    pub auth_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
}

/// Storage on a volume mounted into the registry pods
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageRegistryConfigStorageFilesystem {
    #[serde(default, skip_serializing_if = "VolumeSource::is_empty")]
    pub volume_source: VolumeSource,
}

/// Location of a volume, one of the core/v1 volume sources
///
/// Mirrors the source half of a pod volume (everything but `name`), so any
/// volume a pod could mount can back the registry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VolumeSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_elastic_block_store: Option<corev1::AWSElasticBlockStoreVolumeSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure_disk: Option<corev1::AzureDiskVolumeSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure_file: Option<corev1::AzureFileVolumeSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cephfs: Option<corev1::CephFSVolumeSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cinder: Option<corev1::CinderVolumeSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_map: Option<corev1::ConfigMapVolumeSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csi: Option<corev1::CSIVolumeSource>,
    #[serde(default, rename = "downwardAPI", skip_serializing_if = "Option::is_none")]
    pub downward_api: Option<corev1::DownwardAPIVolumeSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_dir: Option<corev1::EmptyDirVolumeSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ephemeral: Option<corev1::EphemeralVolumeSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fc: Option<corev1::FCVolumeSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex_volume: Option<corev1::FlexVolumeSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flocker: Option<corev1::FlockerVolumeSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gce_persistent_disk: Option<corev1::GCEPersistentDiskVolumeSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_repo: Option<corev1::GitRepoVolumeSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glusterfs: Option<corev1::GlusterfsVolumeSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_path: Option<corev1::HostPathVolumeSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iscsi: Option<corev1::ISCSIVolumeSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nfs: Option<corev1::NFSVolumeSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistent_volume_claim: Option<corev1::PersistentVolumeClaimVolumeSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photon_persistent_disk: Option<corev1::PhotonPersistentDiskVolumeSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portworx_volume: Option<corev1::PortworxVolumeSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projected: Option<corev1::ProjectedVolumeSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quobyte: Option<corev1::QuobyteVolumeSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rbd: Option<corev1::RBDVolumeSource>,
    #[serde(default, rename = "scaleIO", skip_serializing_if = "Option::is_none")]
    pub scale_io: Option<corev1::ScaleIOVolumeSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<corev1::SecretVolumeSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storageos: Option<corev1::StorageOSVolumeSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vsphere_volume: Option<corev1::VsphereVirtualDiskVolumeSource>,
}

impl VolumeSource {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Storage backend selection, as written on the wire
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageRegistryConfigStorage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure: Option<ImageRegistryConfigStorageAzure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filesystem: Option<ImageRegistryConfigStorageFilesystem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gcs: Option<ImageRegistryConfigStorageGCS>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3: Option<ImageRegistryConfigStorageS3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swift: Option<ImageRegistryConfigStorageSwift>,
}

impl ImageRegistryConfigStorage {
    /// Backends present in this block, in wire key order
    #[must_use]
    pub fn configured(&self) -> Vec<StorageKind> {
        [
            (self.azure.is_some(), StorageKind::Azure),
            (self.filesystem.is_some(), StorageKind::Filesystem),
            (self.gcs.is_some(), StorageKind::Gcs),
            (self.s3.is_some(), StorageKind::S3),
            (self.swift.is_some(), StorageKind::Swift),
        ]
        .into_iter()
        .filter_map(|(present, kind)| present.then_some(kind))
        .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.configured().is_empty()
    }

    /// Kind of the single configured backend
    ///
    /// `Ok(None)` when no backend is set, [`Error::AmbiguousStorage`] when
    /// more than one is.
    pub fn kind(&self) -> Result<Option<StorageKind>> {
        let mut configured = self.configured();
        if configured.len() > 1 {
            return Err(Error::AmbiguousStorage(configured));
        }
        Ok(configured.pop())
    }

    /// Typed copy of the single configured backend
    pub fn backend(&self) -> Result<Option<StorageBackend>> {
        self.clone().into_backend()
    }

    pub fn into_backend(self) -> Result<Option<StorageBackend>> {
        self.kind()?;
        Ok(self
            .azure
            .map(StorageBackend::Azure)
            .or(self.filesystem.map(StorageBackend::Filesystem))
            .or(self.gcs.map(StorageBackend::Gcs))
            .or(self.s3.map(StorageBackend::S3))
            .or(self.swift.map(StorageBackend::Swift)))
    }
}

impl From<StorageBackend> for ImageRegistryConfigStorage {
    fn from(backend: StorageBackend) -> Self {
        let mut storage = Self::default();
        match backend {
            StorageBackend::Azure(azure) => storage.azure = Some(azure),
            StorageBackend::Filesystem(filesystem) => storage.filesystem = Some(filesystem),
            StorageBackend::Gcs(gcs) => storage.gcs = Some(gcs),
            StorageBackend::S3(s3) => storage.s3 = Some(s3),
            StorageBackend::Swift(swift) => storage.swift = Some(swift),
        }
        storage
    }
}

/// Storage backend identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StorageKind {
    Azure,
    Filesystem,
    Gcs,
    S3,
    Swift,
}

impl StorageKind {
    /// Wire key of the backend inside a storage block
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKind::Azure => "azure",
            StorageKind::Filesystem => "filesystem",
            StorageKind::Gcs => "gcs",
            StorageKind::S3 => "s3",
            StorageKind::Swift => "swift",
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single storage backend
#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    Azure(ImageRegistryConfigStorageAzure),
    Filesystem(ImageRegistryConfigStorageFilesystem),
    Gcs(ImageRegistryConfigStorageGCS),
    S3(ImageRegistryConfigStorageS3),
    Swift(ImageRegistryConfigStorageSwift),
}

impl StorageBackend {
    #[must_use]
    pub fn kind(&self) -> StorageKind {
        match self {
            StorageBackend::Azure(_) => StorageKind::Azure,
            StorageBackend::Filesystem(_) => StorageKind::Filesystem,
            StorageBackend::Gcs(_) => StorageKind::Gcs,
            StorageBackend::S3(_) => StorageKind::S3,
            StorageBackend::Swift(_) => StorageKind::Swift,
        }
    }
}
