use kube::ResourceExt;
use kubert::index::{IndexNamespacedResource, NamespacedRemoved};
use parking_lot::RwLock;
use std::sync::Arc;

/// Scopes an index to a set of namespaces.
///
/// Events for objects outside the set are dropped before they reach the
/// inner index; an empty set admits everything. Resets are forwarded with
/// their contents filtered rather than decomposed, so the inner index still
/// observes the initial sync of every watch.
pub(crate) struct NamespaceFilter<T> {
    inner: T,
    namespaces: Arc<[String]>,
}

// === impl NamespaceFilter ===

impl<T> NamespaceFilter<T> {
    pub(crate) fn new(inner: T, namespaces: Arc<[String]>) -> Self {
        Self { inner, namespaces }
    }

    pub(crate) fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    fn admits(&self, namespace: &str) -> bool {
        self.namespaces.is_empty() || self.namespaces.iter().any(|ns| ns == namespace)
    }
}

impl<R, T> IndexNamespacedResource<R> for NamespaceFilter<Arc<RwLock<T>>>
where
    R: ResourceExt,
    T: IndexNamespacedResource<R>,
{
    fn apply(&mut self, resource: R) {
        if self.admits(resource.namespace().as_deref().unwrap_or_default()) {
            self.inner.write().apply(resource);
        }
    }

    fn delete(&mut self, namespace: String, name: String) {
        if self.admits(&namespace) {
            self.inner.write().delete(namespace, name);
        }
    }

    fn reset(&mut self, mut resources: Vec<R>, mut removed: NamespacedRemoved) {
        if !self.namespaces.is_empty() {
            resources.retain(|r| self.admits(r.namespace().as_deref().unwrap_or_default()));
            removed.retain(|namespace, _| self.admits(namespace));
        }
        self.inner.write().reset(resources, removed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::k8s;

    #[derive(Default)]
    struct Recorder {
        applied: Vec<String>,
        deleted: Vec<String>,
        resets: usize,
    }

    impl IndexNamespacedResource<k8s::xds::Cluster> for Recorder {
        fn apply(&mut self, resource: k8s::xds::Cluster) {
            self.applied.push(format!(
                "{}/{}",
                resource.namespace().unwrap_or_default(),
                resource.name_any()
            ));
        }

        fn delete(&mut self, namespace: String, name: String) {
            self.deleted.push(format!("{namespace}/{name}"));
        }

        fn reset(&mut self, resources: Vec<k8s::xds::Cluster>, removed: NamespacedRemoved) {
            self.resets += 1;
            for resource in resources {
                self.apply(resource);
            }
            for (namespace, names) in removed {
                for name in names {
                    self.delete(namespace.clone(), name);
                }
            }
        }
    }

    fn cluster(ns: &str, name: &str) -> k8s::xds::Cluster {
        k8s::xds::Cluster {
            metadata: k8s::ObjectMeta {
                namespace: Some(ns.to_string()),
                name: Some(name.to_string()),
                ..Default::default()
            },
            spec: k8s::xds::ClusterSpec(serde_json::json!({ "name": name })),
        }
    }

    fn filtered(namespaces: &[&str]) -> (Arc<RwLock<Recorder>>, NamespaceFilter<Arc<RwLock<Recorder>>>) {
        let inner = Arc::new(RwLock::new(Recorder::default()));
        let namespaces = namespaces
            .iter()
            .map(|ns| ns.to_string())
            .collect::<Vec<_>>()
            .into();
        (inner.clone(), NamespaceFilter::new(inner, namespaces))
    }

    #[test]
    fn out_of_scope_events_are_dropped() {
        let (inner, mut filter) = filtered(&["prod"]);

        filter.apply(cluster("prod", "a"));
        filter.apply(cluster("dev", "b"));
        filter.delete("dev".to_string(), "b".to_string());
        filter.delete("prod".to_string(), "a".to_string());

        assert_eq!(inner.read().applied, vec!["prod/a"]);
        assert_eq!(inner.read().deleted, vec!["prod/a"]);
    }

    #[test]
    fn empty_set_admits_everything() {
        let (inner, mut filter) = filtered(&[]);

        filter.apply(cluster("prod", "a"));
        filter.apply(cluster("dev", "b"));

        assert_eq!(inner.read().applied, vec!["prod/a", "dev/b"]);
    }

    #[test]
    fn resets_are_forwarded_filtered() {
        let (inner, mut filter) = filtered(&["prod"]);

        let mut removed = NamespacedRemoved::default();
        removed.entry("prod".to_string()).or_default().insert("x".to_string());
        removed.entry("dev".to_string()).or_default().insert("y".to_string());

        filter.reset(vec![cluster("prod", "a"), cluster("dev", "b")], removed);

        let inner = inner.read();
        assert_eq!(inner.resets, 1, "the inner index must see the sync itself");
        assert_eq!(inner.applied, vec!["prod/a"]);
        assert_eq!(inner.deleted, vec!["prod/x"]);
    }
}
