//! # Round Trip Tests
//!
//! Encoding and decoding of `Config` and `ConfigList` documents: values
//! survive a round trip unchanged, unset fields are left out, and copies
//! are independent of their source.

use image_registry_operator_api::crd::{
    ConditionStatus, Config, ConfigList, ImageRegistryConfigProxy, ImageRegistryConfigRequests,
    ImageRegistryConfigRequestsLimits, ImageRegistryConfigRoute, ImageRegistryConfigStorage,
    ImageRegistryConfigStorageAzure, ImageRegistryConfigStorageFilesystem,
    ImageRegistryConfigStorageGCS, ImageRegistryConfigStorageS3, ImageRegistryConfigStorageSwift,
    ImageRegistrySpec, ImageRegistryStatus, ManagementState, OperatorCondition, StorageBackend,
    VolumeSource,
};
use image_registry_operator_api::document::{decode, encode, Document, Format};
use image_registry_operator_api::duration::Duration;
use k8s_openapi::api::core::v1::{EmptyDirVolumeSource, PersistentVolumeClaimVolumeSource};

fn full_spec(storage: ImageRegistryConfigStorage) -> ImageRegistrySpec {
    ImageRegistrySpec {
        management_state: ManagementState::Managed,
        http_secret: Some("secret".to_string()),
        proxy: ImageRegistryConfigProxy {
            http: Some("http://proxy:3128".to_string()),
            https: Some("https://proxy:3129".to_string()),
            no_proxy: Some(".svc".to_string()),
        },
        storage,
        requests: ImageRegistryConfigRequests {
            read: ImageRegistryConfigRequestsLimits {
                max_running: Some(100),
                max_in_queue: Some(20),
                max_wait_in_queue: Some(Duration::from_secs(90)),
            },
            write: ImageRegistryConfigRequestsLimits {
                max_running: Some(5),
                max_in_queue: None,
                max_wait_in_queue: Some(Duration::from_millis(250)),
            },
        },
        tls: Some(false),
        ca_config_name: Some("registry-cas".to_string()),
        default_route: Some(false),
        routes: vec![
            ImageRegistryConfigRoute::new("a", "a.example.com", "a-tls"),
            ImageRegistryConfigRoute::new("b", "b.example.com", "b-tls"),
        ],
        replicas: Some(3),
        log_level: Some(4),
    }
}

fn every_backend() -> Vec<StorageBackend> {
    vec![
        StorageBackend::Azure(ImageRegistryConfigStorageAzure {
            container: Some("registry".to_string()),
        }),
        StorageBackend::Filesystem(ImageRegistryConfigStorageFilesystem {
            volume_source: VolumeSource {
                persistent_volume_claim: Some(PersistentVolumeClaimVolumeSource {
                    claim_name: "image-registry-storage".to_string(),
                    read_only: None,
                }),
                ..VolumeSource::default()
            },
        }),
        StorageBackend::Gcs(ImageRegistryConfigStorageGCS {
            bucket: Some("registry".to_string()),
        }),
        StorageBackend::S3(ImageRegistryConfigStorageS3 {
            bucket: Some("registry".to_string()),
            region: Some("eu-west-1".to_string()),
            region_endpoint: Some("https://s3.eu-west-1.amazonaws.com".to_string()),
            encrypt: Some(true),
        }),
        StorageBackend::Swift(ImageRegistryConfigStorageSwift {
            auth_url: Some("https://keystone.example.com/v3".to_string()),
            container: Some("registry".to_string()),
        }),
    ]
}

fn named(name: &str, spec: ImageRegistrySpec) -> Config {
    Config::new(name, spec)
}

#[test]
fn test_fully_populated_round_trip_for_every_backend() {
    for backend in every_backend() {
        let kind = backend.kind();
        let mut config = named("instance", full_spec(backend.into()));

        let mut status = ImageRegistryStatus {
            storage_managed: true,
            internal_registry_hostname: "image-registry.openshift-image-registry.svc:5000"
                .to_string(),
            storage: config.spec.storage.clone(),
            ..ImageRegistryStatus::default()
        };
        status.operator.observed_generation = Some(1);
        status.operator.ready_replicas = 3;
        status.operator.set_condition(
            OperatorCondition::new("StorageExists", ConditionStatus::True)
                .with_reason("Created")
                .with_message("storage created"),
        );
        config.status = Some(status);

        for format in [Format::Yaml, Format::Json] {
            let encoded = encode(&config, format).unwrap();
            match decode(&encoded).unwrap() {
                Document::Config(decoded) => {
                    assert_eq!(*decoded, config, "{kind} via {format} should round trip");
                }
                Document::List(_) => panic!("Expected a single Config"),
            }
        }
    }
}

#[test]
fn test_unset_fields_are_omitted() {
    let config = named(
        "instance",
        ImageRegistrySpec {
            management_state: ManagementState::Removed,
            ..ImageRegistrySpec::default()
        },
    );

    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(
        value["spec"],
        serde_json::json!({"managementState": "Removed"})
    );
    assert_eq!(value["apiVersion"], "imageregistry.operator.openshift.io/v1");
    assert_eq!(value["kind"], "Config");

    // Decoding the sparse document restores defaults
    let decoded: Config = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, config);
    assert!(decoded.status.is_none());
    assert_eq!(
        decoded.spec,
        ImageRegistrySpec {
            management_state: ManagementState::Removed,
            ..ImageRegistrySpec::default()
        }
    );
}

#[test]
fn test_partially_set_nested_blocks_keep_only_set_keys() {
    let config = named(
        "instance",
        ImageRegistrySpec {
            management_state: ManagementState::Managed,
            proxy: ImageRegistryConfigProxy {
                https: Some("https://proxy:3129".to_string()),
                ..ImageRegistryConfigProxy::default()
            },
            requests: ImageRegistryConfigRequests {
                write: ImageRegistryConfigRequestsLimits {
                    max_in_queue: Some(7),
                    ..ImageRegistryConfigRequestsLimits::default()
                },
                ..ImageRegistryConfigRequests::default()
            },
            storage: ImageRegistryConfigStorage {
                filesystem: Some(ImageRegistryConfigStorageFilesystem {
                    volume_source: VolumeSource {
                        empty_dir: Some(EmptyDirVolumeSource::default()),
                        ..VolumeSource::default()
                    },
                }),
                ..ImageRegistryConfigStorage::default()
            },
            ..ImageRegistrySpec::default()
        },
    );

    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(
        value["spec"],
        serde_json::json!({
            "managementState": "Managed",
            "proxy": {"https": "https://proxy:3129"},
            "storage": {"filesystem": {"volumeSource": {"emptyDir": {}}}},
            "requests": {"write": {"maxinqueue": 7}}
        })
    );
}

#[test]
fn test_explicit_false_and_zero_are_kept() {
    let config = named(
        "instance",
        ImageRegistrySpec {
            tls: Some(false),
            replicas: Some(0),
            ..ImageRegistrySpec::default()
        },
    );

    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value["spec"]["tls"], false);
    assert_eq!(value["spec"]["replicas"], 0);
}

#[test]
fn test_config_list_sizes_and_order() {
    for size in [0_usize, 1, 5] {
        let list: ConfigList = (0..size)
            .map(|i| {
                named(
                    &format!("config-{i}"),
                    ImageRegistrySpec {
                        replicas: Some(i32::try_from(i).unwrap()),
                        ..ImageRegistrySpec::default()
                    },
                )
            })
            .collect();
        assert_eq!(list.len(), size);
        assert_eq!(list.is_empty(), size == 0);

        let json = encode(&list, Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["kind"], "ConfigList");
        assert_eq!(value["apiVersion"], "imageregistry.operator.openshift.io/v1");
        assert_eq!(value["items"].as_array().map(Vec::len), Some(size));

        let decoded = match decode(&json).unwrap() {
            Document::List(decoded) => decoded,
            Document::Config(_) => panic!("Expected a ConfigList"),
        };
        assert_eq!(decoded, list);

        let names: Vec<_> = decoded
            .iter()
            .map(|c| c.metadata.name.clone().unwrap_or_default())
            .collect();
        let expected: Vec<_> = (0..size).map(|i| format!("config-{i}")).collect();
        assert_eq!(names, expected);
    }
}

#[test]
fn test_config_list_decodes_from_yaml() {
    let yaml = r#"
apiVersion: imageregistry.operator.openshift.io/v1
kind: ConfigList
metadata:
  resourceVersion: "42"
items:
  - metadata:
      name: instance
    spec:
      managementState: Managed
      storage:
        gcs:
          bucket: registry
  - metadata:
      name: other
    spec:
      managementState: Unmanaged
"#;

    let document = decode(yaml).unwrap();
    assert_eq!(document.kind(), "ConfigList");
    let Document::List(list) = document else {
        panic!("Expected a ConfigList");
    };
    assert_eq!(list.metadata.resource_version.as_deref(), Some("42"));
    assert_eq!(list.len(), 2);
    assert_eq!(list.items[0].spec.storage.gcs.as_ref().unwrap().bucket.as_deref(), Some("registry"));
    assert_eq!(list.items[1].spec.management_state, ManagementState::Unmanaged);
}

#[test]
fn test_unsupported_kind_is_rejected() {
    let yaml = "apiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: x\n";
    assert!(decode(yaml).is_err());
}

#[test]
fn test_clone_is_independent() {
    let mut original = named(
        "instance",
        full_spec(StorageBackend::S3(ImageRegistryConfigStorageS3::default()).into()),
    );
    original.status = Some(ImageRegistryStatus::default());

    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.spec.routes.push(ImageRegistryConfigRoute::new("c", "c.example.com", "c-tls"));
    copy.spec.routes[0].hostname = "changed.example.com".to_string();
    copy.spec.proxy.http = None;
    copy.spec.storage.s3.as_mut().unwrap().bucket = Some("changed".to_string());
    copy.spec.requests.read.max_wait_in_queue = None;
    if let Some(status) = copy.status.as_mut() {
        status.operator.set_condition(OperatorCondition::new("StorageTagged", ConditionStatus::False));
    }

    assert_eq!(original.spec.routes.len(), 2);
    assert_eq!(original.spec.routes[0].hostname, "a.example.com");
    assert_eq!(original.spec.proxy.http.as_deref(), Some("http://proxy:3128"));
    assert!(original.spec.storage.s3.as_ref().unwrap().bucket.is_none());
    assert_eq!(
        original.spec.requests.read.max_wait_in_queue,
        Some(Duration::from_secs(90))
    );
    assert!(original.status.as_ref().unwrap().operator.conditions.is_empty());
    assert_ne!(copy, original);
}

#[test]
fn test_storage_backend_conversion_round_trip() {
    for backend in every_backend() {
        let storage = ImageRegistryConfigStorage::from(backend.clone());
        assert_eq!(storage.configured(), vec![backend.kind()]);
        assert_eq!(storage.into_backend().unwrap(), Some(backend));
    }
}
