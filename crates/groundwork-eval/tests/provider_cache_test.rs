mod common;

use common::{counting_factory, MockProvider};
use futures_util::future::join_all;
use groundwork_addrs::{ModulePath, ProviderConfigRef};
use groundwork_eval::{EvalError, ProviderCache};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_concurrent_init_constructs_once() {
    let mock = Arc::new(
        MockProvider::test_thing().with_schema_delay(Duration::from_millis(20)),
    );
    let (factory, constructions) = counting_factory("test", Arc::clone(&mock));
    let cache = Arc::new(ProviderCache::new(factory));

    let addr = ProviderConfigRef::new("test").absolute(ModulePath::root());

    let workers = (0..16).map(|_| {
        let cache = Arc::clone(&cache);
        let addr = addr.clone();
        tokio::spawn(async move { cache.init_provider("test", addr).await })
    });

    for result in join_all(workers).await {
        result.unwrap().unwrap();
    }

    assert_eq!(constructions.load(Ordering::SeqCst), 1);
    assert_eq!(mock.schema_requests().len(), 1);
}

#[tokio::test]
async fn test_schema_lookup_before_init_is_none() {
    let (factory, _) = counting_factory("test", Arc::new(MockProvider::test_thing()));
    let cache = ProviderCache::new(factory);

    let addr = ProviderConfigRef::new("test").absolute(ModulePath::root());
    assert!(cache.schema(&addr).await.is_none());
    assert!(cache.provider(&addr).await.is_none());
}

#[tokio::test]
async fn test_schema_mismatch_is_fatal() {
    // Declares a resource type and a data source the schema does not cover
    let mock = Arc::new(
        MockProvider::test_thing()
            .with_resource("test_missing", true)
            .with_data_source("test_absent", true),
    );
    let (factory, _) = counting_factory("test", mock);
    let cache = ProviderCache::new(factory);

    let addr = ProviderConfigRef::new("test").absolute(ModulePath::root());
    let err = cache
        .init_provider("test", addr.clone())
        .await
        .err()
        .unwrap();

    match err {
        EvalError::SchemaMismatch {
            provider,
            missing_resources,
            missing_data_sources,
        } => {
            assert_eq!(provider, "test");
            assert_eq!(missing_resources, vec!["test_missing".to_string()]);
            assert_eq!(missing_data_sources, vec!["test_absent".to_string()]);
        }
        other => panic!("expected SchemaMismatch, got {:?}", other),
    }

    // A failed initialization caches nothing
    assert!(cache.provider(&addr).await.is_none());
    assert!(cache.schema(&addr).await.is_none());
}

#[tokio::test]
async fn test_types_without_schema_are_not_requested() {
    let mock = Arc::new(
        MockProvider::test_thing()
            .with_resource("test_legacy", false)
            .with_data_source("test_legacy", false),
    );
    let (factory, _) = counting_factory("test", Arc::clone(&mock));
    let cache = ProviderCache::new(factory);

    let addr = ProviderConfigRef::new("test").absolute(ModulePath::root());
    cache.init_provider("test", addr).await.unwrap();

    // Legacy descriptors without negotiated schemas stay out of the request
    let requests = mock.schema_requests();
    assert_eq!(requests[0].resource_types, vec!["test_thing".to_string()]);
    assert_eq!(requests[0].data_sources, vec!["test_thing".to_string()]);
}

#[tokio::test]
async fn test_distinct_keys_do_not_share_handles() {
    let mock = Arc::new(MockProvider::test_thing());
    let (factory, constructions) = counting_factory("test", mock);
    let cache = ProviderCache::new(factory);

    let at_root = ProviderConfigRef::new("test").absolute(ModulePath::root());
    let in_child =
        ProviderConfigRef::new("test").absolute(ModulePath::root().child("child", None));

    cache.init_provider("test", at_root.clone()).await.unwrap();
    cache.init_provider("test", in_child.clone()).await.unwrap();
    assert_eq!(constructions.load(Ordering::SeqCst), 2);

    // Closing one instance leaves the other live
    cache.close_provider(&at_root).await.unwrap();
    assert!(cache.provider(&at_root).await.is_none());
    assert!(cache.provider(&in_child).await.is_some());
}
