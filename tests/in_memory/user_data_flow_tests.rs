//! User data service flows over in-memory stores.

use super::helpers::{Backends, document};
use docshard::{
    routing::domain::{FailoverPolicy, FailoverScope},
    store::ports::DocumentStoreError,
    user_data::{
        domain::{TOKENS_COLLECTION, USERS_COLLECTION, UserDataError},
        services::UserDataService,
    },
};
use rstest::{fixture, rstest};
use serde_json::json;
use std::time::Duration;

const ALICE: &str = "alice@example.com";
const BOB: &str = "bob@example.com";

#[fixture]
fn backends() -> Backends {
    Backends::named(&["a", "b", "c"])
}

fn service(backends: &Backends) -> UserDataService {
    UserDataService::new(backends.registry.clone())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn records_land_on_their_primary(backends: Backends) {
    let service = service(&backends);

    service
        .save_user_data(ALICE, document(json!({"name": "Alice"})))
        .await
        .expect("save alice");
    service
        .save_user_data(BOB, document(json!({"name": "Bob"})))
        .await
        .expect("save bob");

    assert!(backends.store("a").peek(&USERS_COLLECTION, ALICE).expect("peek").is_some());
    assert!(backends.store("b").peek(&USERS_COLLECTION, BOB).expect("peek").is_some());
    assert_eq!(backends.store("c").call_count(), 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rate_limited_primary_fails_over_in_order(backends: Backends) {
    backends
        .store("b")
        .fail_next(DocumentStoreError::RateLimited("429 Too Many Requests".to_owned()))
        .expect("queue failure");
    let service = service(&backends);

    service
        .save_user_data(BOB, document(json!({"name": "Bob"})))
        .await
        .expect("fallback accepts the write");

    assert!(backends.store("a").peek(&USERS_COLLECTION, BOB).expect("peek").is_some());
    assert_eq!(backends.store("c").call_count(), 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn read_after_failover_misses_until_fallback_answers(backends: Backends) {
    let service = service(&backends);
    backends
        .store("a")
        .fail_next(DocumentStoreError::Unavailable("maintenance".to_owned()))
        .expect("queue failure");
    service
        .save_user_data(ALICE, document(json!({"name": "Alice"})))
        .await
        .expect("save lands on fallback");

    let healthy_read = service.get_user_data(ALICE).await.expect("read primary");
    assert_eq!(healthy_read, None);

    backends
        .store("a")
        .fail_next(DocumentStoreError::Unavailable("maintenance".to_owned()))
        .expect("queue failure");
    let fallback_read = service.get_user_data(ALICE).await.expect("read fallback");
    assert_eq!(fallback_read, Some(document(json!({"name": "Alice"}))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tokens_and_records_live_in_separate_collections(backends: Backends) {
    let service = service(&backends);

    service
        .save_user_data(ALICE, document(json!({"name": "Alice"})))
        .await
        .expect("save record");
    service
        .save_user_tokens(ALICE, document(json!({"access_token": "t"})))
        .await
        .expect("save tokens");

    let store = backends.store("a");
    assert_eq!(
        store.peek(&USERS_COLLECTION, ALICE).expect("peek"),
        Some(document(json!({"name": "Alice"})))
    );
    assert_eq!(
        store.peek(&TOKENS_COLLECTION, ALICE).expect("peek"),
        Some(document(json!({"access_token": "t"})))
    );
    assert_eq!(store.document_count().expect("count"), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn total_outage_reports_every_attempt(backends: Backends) {
    for (_, store) in &backends.stores {
        store
            .fail_always(DocumentStoreError::Unavailable("outage".to_owned()))
            .expect("set failure");
    }
    let service = service(&backends);

    let result = service.get_user_tokens(ALICE).await;

    assert_eq!(result, Err(UserDataError::Exhausted { attempts: 3 }));
    for (_, store) in &backends.stores {
        assert_eq!(store.call_count(), 1);
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn slow_primary_times_out_and_fails_over(backends: Backends) {
    backends
        .store("a")
        .set_latency(Duration::from_secs(2))
        .expect("set latency");
    let policy = FailoverPolicy::default().with_attempt_timeout(Duration::from_millis(50));
    let service = UserDataService::with_policy(backends.registry.clone(), policy);

    service
        .save_user_data(ALICE, document(json!({"name": "Alice"})))
        .await
        .expect("fallback accepts the write");

    assert!(backends.store("b").peek(&USERS_COLLECTION, ALICE).expect("peek").is_some());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn strict_scope_rejects_missing_record_update(backends: Backends) {
    let policy = FailoverPolicy::default().with_scope(FailoverScope::TransientOnly);
    let service = UserDataService::with_policy(backends.registry.clone(), policy);

    let result = service
        .update_user_data(ALICE, document(json!({"plan": "pro"})))
        .await;

    assert_eq!(result, Err(UserDataError::Rejected));
    assert_eq!(backends.store("b").call_count(), 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_leaves_fallback_copies_in_place(backends: Backends) {
    let service = service(&backends);
    backends
        .store("a")
        .fail_next(DocumentStoreError::Unavailable("maintenance".to_owned()))
        .expect("queue failure");
    service
        .save_user_data(ALICE, document(json!({"name": "Alice"})))
        .await
        .expect("save lands on fallback");

    service.delete_user_data(ALICE).await.expect("delete on primary");

    assert!(backends.store("b").peek(&USERS_COLLECTION, ALICE).expect("peek").is_some());
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_callers_share_one_service(backends: Backends) {
    let service = service(&backends);
    let keys: Vec<String> = (0..16).map(|index| format!("user-{index}@example.com")).collect();

    let mut handles = Vec::new();
    for field in 0..4 {
        for key in &keys {
            let caller = service.clone();
            let owned_key = key.clone();
            handles.push(tokio::spawn(async move {
                let mut record = serde_json::Map::new();
                record.insert(format!("field_{field}"), json!(field));
                caller.save_user_data(&owned_key, record).await
            }));
        }
    }
    for handle in handles {
        handle
            .await
            .expect("save task completes")
            .expect("save succeeds");
    }

    for key in &keys {
        let primary = service.primary_backend(key).expect("registry is not empty");
        let stored = backends
            .store(primary.as_str())
            .peek(&USERS_COLLECTION, key)
            .expect("peek");
        assert_eq!(
            stored,
            Some(document(json!({
                "field_0": 0,
                "field_1": 1,
                "field_2": 2,
                "field_3": 3
            }))),
            "record for {key} on {primary}"
        );
    }
    let total: usize = backends
        .stores
        .iter()
        .map(|(_, store)| store.document_count().expect("count"))
        .sum();
    assert_eq!(total, keys.len());
}
