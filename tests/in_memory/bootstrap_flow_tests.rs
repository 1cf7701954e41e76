//! Bootstrapped registries driving the user data service.

use super::helpers::document;
use camino::Utf8PathBuf;
use docshard::{
    bootstrap::{
        adapters::memory::{InMemoryConnector, InMemoryEnvironment},
        services::{Bootstrapper, open_root},
    },
    config::{BootstrapConfig, parse_config},
    routing::domain::BackendRegistry,
    user_data::{domain::USERS_COLLECTION, services::UserDataService},
};
use rstest::rstest;
use serde_json::json;
use std::sync::Arc;

fn credential(project: &str) -> String {
    format!(r#"{{"type": "service_account", "project_id": "{project}"}}"#)
}

fn scratch_root() -> Utf8PathBuf {
    let dir = std::env::temp_dir().join(format!("docshard-flow-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("create scratch root");
    Utf8PathBuf::from_path_buf(dir).expect("scratch root is UTF-8")
}

async fn bootstrap(
    config: BootstrapConfig,
    connector: &InMemoryConnector,
    environment: InMemoryEnvironment,
) -> BackendRegistry {
    let path = scratch_root();
    let root = open_root(&path).expect("open scratch root");
    let registry = Bootstrapper::new(config, Arc::new(connector.clone()), environment, root)
        .bootstrap()
        .await;
    std::fs::remove_dir_all(&path).expect("remove scratch root");
    registry
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicated_main_backend_serves_every_key() {
    let connector = InMemoryConnector::new();
    let environment = InMemoryEnvironment::new()
        .with_var("FIREBASE_SERVICE_ACCOUNT_JSON", credential("prod"));
    let registry = bootstrap(BootstrapConfig::default(), &connector, environment).await;
    let service = UserDataService::new(registry);

    assert_eq!(service.backend_count(), 3);
    for index in 0..10 {
        let key = format!("user-{index}@example.com");
        service
            .save_user_data(&key, document(json!({"index": index})))
            .await
            .expect("save through any connection");
    }

    let store = connector
        .store_for_project("prod")
        .expect("connector state")
        .expect("main project store");
    assert_eq!(store.document_count().expect("count"), 10);
    assert!(
        store
            .peek(&USERS_COLLECTION, "user-0@example.com")
            .expect("peek")
            .is_some()
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn configured_sources_shape_the_registry() {
    let config = parse_config(
        r#"{"bootstrap": {
            "main_credentials_env": "MAIN_SA",
            "additional_env_prefix": "SHARD",
            "additional_name_prefix": "shard",
            "additional_slots": 2
        }}"#,
    )
    .expect("config should parse");
    let connector = InMemoryConnector::new();
    let environment = InMemoryEnvironment::new()
        .with_var("MAIN_SA", credential("prod"))
        .with_var("SHARD1_CREDENTIALS", credential("one"))
        .with_var("SHARD3_CREDENTIALS", credential("three"));

    let registry = bootstrap(config.bootstrap, &connector, environment).await;

    let names: Vec<String> = registry
        .names()
        .iter()
        .map(|name| name.as_str().to_owned())
        .collect();
    assert_eq!(names, ["main", "shard1"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_credentials_leave_the_service_unavailable() {
    let connector = InMemoryConnector::new();
    let registry = bootstrap(
        BootstrapConfig::default(),
        &connector,
        InMemoryEnvironment::new(),
    )
    .await;
    let service = UserDataService::new(registry);

    assert_eq!(service.backend_count(), 0);
    assert!(service.get_user_data("alice@example.com").await.is_err());
}
