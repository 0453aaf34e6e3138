use crate::{BindingKinds, Platform};

#[test]
fn cloudflare_kinds() {
    let platform = Platform::cloudflare();
    let kinds = platform.kinds();

    assert_eq!(kinds.iter().count(), 5);
    assert_eq!(kinds.get("r2BucketBindings"), Some("R2Bucket"));
    assert_eq!(kinds.get("d1DatabaseBindings"), Some("D1Database"));
    assert_eq!(kinds.get("kvNamespaceBindings"), Some("KVNamespace"));
    assert_eq!(kinds.get("queueBindings"), Some("Queue"));
    assert_eq!(kinds.get("serviceBindings"), Some("Service"));
    assert_eq!(kinds.get("vectorizeBindings"), None);
}

#[test]
fn cloudflare_identity() {
    let platform = Platform::cloudflare();

    assert_eq!(platform.binding_tag(), "cloudflare.binding");
    assert_eq!(platform.namespace(), "cloudflare");
    assert_eq!(platform.types_package(), "@cloudflare/workers-types");
    assert_eq!(platform, Platform::default());
}

#[test]
fn qualify_prefixes_namespace() {
    assert_eq!(
        Platform::cloudflare().qualify("KVNamespace"),
        "cloudflare.KVNamespace"
    );
}

#[test]
fn empty_type_name_is_absent() {
    let kinds: BindingKinds = [("blank", ""), ("queue", "Queue")].into_iter().collect();

    assert_eq!(kinds.get("blank"), None);
    assert_eq!(kinds.get("queue"), Some("Queue"));
    assert_eq!(kinds.iter().count(), 2);
}

#[test]
fn custom_platform() {
    let platform = Platform::new(
        "edge.binding",
        "edge",
        "@edge/types",
        BindingKinds::new([("cacheBindings", "Cache")]),
    );

    assert_eq!(platform.kinds().get("cacheBindings"), Some("Cache"));
    assert_eq!(platform.qualify("Cache"), "edge.Cache");
    assert_eq!(
        platform.kinds().iter().collect::<Vec<_>>(),
        [("cacheBindings", "Cache")]
    );
}
