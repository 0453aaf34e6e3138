//! Target platforms whose type library provides declared types for bindings.

use std::collections::BTreeMap;

/// Platform resource kind -> declared type name, e.g.
/// `kvNamespaceBindings -> KVNamespace`.
///
/// Immutable once built. Entries with an empty type name are treated as
/// absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BindingKinds {
    entries: BTreeMap<String, String>,
}

impl BindingKinds {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Declared type for a resource kind.
    pub fn get(&self, kind: &str) -> Option<&str> {
        self.entries
            .get(kind)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for BindingKinds {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Everything needed to recognize and reference platform-native bindings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Platform {
    binding_tag: String,
    namespace: String,
    types_package: String,
    kinds: BindingKinds,
}

impl Platform {
    pub fn new(
        binding_tag: impl Into<String>,
        namespace: impl Into<String>,
        types_package: impl Into<String>,
        kinds: BindingKinds,
    ) -> Self {
        Self {
            binding_tag: binding_tag.into(),
            namespace: namespace.into(),
            types_package: types_package.into(),
            kinds,
        }
    }

    /// Cloudflare Workers, typed by `@cloudflare/workers-types`.
    pub fn cloudflare() -> Self {
        Self::new(
            "cloudflare.binding",
            "cloudflare",
            "@cloudflare/workers-types",
            BindingKinds::new([
                ("r2BucketBindings", "R2Bucket"),
                ("d1DatabaseBindings", "D1Database"),
                ("kvNamespaceBindings", "KVNamespace"),
                ("queueBindings", "Queue"),
                ("serviceBindings", "Service"),
            ]),
        )
    }

    /// `Include` tag that marks a platform binding.
    pub fn binding_tag(&self) -> &str {
        &self.binding_tag
    }

    /// Name the types package is imported under.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Package a manifest must depend on for platform types to be available.
    pub fn types_package(&self) -> &str {
        &self.types_package
    }

    pub fn kinds(&self) -> &BindingKinds {
        &self.kinds
    }

    /// `KVNamespace` -> `cloudflare.KVNamespace`.
    pub fn qualify(&self, type_name: &str) -> String {
        format!("{}.{}", self.namespace, type_name)
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::cloudflare()
    }
}
