#![deny(warnings, rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod xds;

pub use k8s_openapi::api::core::v1::Secret;
pub use k8s_openapi::ByteString;
pub use kube::api::{ObjectMeta, ResourceExt};

/// Splits a comma-separated annotation into its trimmed, non-empty items.
/// Returns an empty vector when the annotation is absent.
pub fn annotation_csv(meta: &ObjectMeta, key: &str) -> Vec<String> {
    let Some(raw) = meta.annotations.as_ref().and_then(|a| a.get(key)) else {
        return vec![];
    };
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}
