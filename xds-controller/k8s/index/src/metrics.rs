use std::sync::Arc;

use kube::ResourceExt;
use kubert::index::NamespacedRemoved;
use parking_lot::RwLock;
use prometheus_client::{
    encoding::EncodeLabelSet,
    metrics::{counter::Counter, family::Family, gauge::Gauge},
    registry::Registry,
};

/// Wraps an index so that every watch event is counted and the per-kind
/// store sizes stay published.
pub struct IndexMetrics<T> {
    inner: T,

    index_size: Family<KindLabels, Gauge>,
    index_applies: Family<KindLabels, Counter>,
    index_deletes: Family<KindLabels, Counter>,
    index_resets: Family<KindLabels, Counter>,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
struct KindLabels {
    kind: String,
}

/// The number of live objects an index holds for one watched type.
pub trait SizedIndex<R> {
    fn size(&self) -> usize;
}

impl<T, R> SizedIndex<R> for Arc<RwLock<T>>
where
    T: SizedIndex<R>,
{
    fn size(&self) -> usize {
        SizedIndex::<R>::size(&*self.read())
    }
}

/// Counters the snapshot rebuild path records directly: how often each
/// node's snapshot was rebuilt versus actually republished, plus gauges
/// for the tracked nodes and service validity.
#[derive(Clone, Debug, Default)]
pub struct SnapshotMetrics {
    rebuilds: Family<NodeLabels, Counter>,
    publications: Family<NodeLabels, Counter>,
    services: Family<ValidityLabels, Gauge>,
    nodes: Gauge,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
struct NodeLabels {
    node_id: String,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
struct ValidityLabels {
    validity: &'static str,
}

// === impl IndexMetrics ===

impl<T> IndexMetrics<T> {
    pub fn register(inner: T, prom: &mut Registry) -> Self {
        let index_size = Family::default();
        prom.register(
            "index_size",
            "Gauge of the number of objects in the index",
            index_size.clone(),
        );

        let index_applies = Family::default();
        prom.register(
            "index_applies",
            "Count of applies to the index",
            index_applies.clone(),
        );

        let index_deletes = Family::default();
        prom.register(
            "index_deletes",
            "Count of deletes to the index",
            index_deletes.clone(),
        );

        let index_resets = Family::default();
        prom.register(
            "index_resets",
            "Count of resets to the index",
            index_resets.clone(),
        );

        Self {
            inner,
            index_size,
            index_applies,
            index_deletes,
            index_resets,
        }
    }

    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }
}

impl<R, T> kubert::index::IndexNamespacedResource<R> for IndexMetrics<Arc<RwLock<T>>>
where
    T: SizedIndex<R>,
    T: kubert::index::IndexNamespacedResource<R>,
    R: ResourceExt<DynamicType = ()>,
{
    fn apply(&mut self, resource: R) {
        let kind = R::kind(&());
        self.index_applies
            .get_or_create(&KindLabels {
                kind: kind.to_string(),
            })
            .inc();
        self.inner.write().apply(resource);
        let size = SizedIndex::<R>::size(&self.inner);
        self.index_size
            .get_or_create(&KindLabels {
                kind: kind.to_string(),
            })
            .set(size as i64);
    }

    fn delete(&mut self, namespace: String, name: String) {
        let kind = R::kind(&());
        self.index_deletes
            .get_or_create(&KindLabels {
                kind: kind.to_string(),
            })
            .inc();
        self.inner.write().delete(namespace, name);
        let size = SizedIndex::<R>::size(&self.inner);
        self.index_size
            .get_or_create(&KindLabels {
                kind: kind.to_string(),
            })
            .set(size as i64);
    }

    fn reset(&mut self, resources: Vec<R>, removed: NamespacedRemoved) {
        let kind = R::kind(&());
        self.index_resets
            .get_or_create(&KindLabels {
                kind: kind.to_string(),
            })
            .inc();
        self.inner.write().reset(resources, removed);
        let size = SizedIndex::<R>::size(&self.inner);
        self.index_size
            .get_or_create(&KindLabels {
                kind: kind.to_string(),
            })
            .set(size as i64);
    }
}

// === impl SnapshotMetrics ===

impl SnapshotMetrics {
    pub fn register(prom: &mut Registry) -> Self {
        let rebuilds = Family::<NodeLabels, Counter>::default();
        prom.register(
            "rebuilds",
            "Count of snapshot rebuilds per node",
            rebuilds.clone(),
        );

        let publications = Family::<NodeLabels, Counter>::default();
        prom.register(
            "publications",
            "Count of snapshot rebuilds that changed the published snapshot",
            publications.clone(),
        );

        let services = Family::<ValidityLabels, Gauge>::default();
        prom.register(
            "virtual_services",
            "Gauge of virtual services by validity",
            services.clone(),
        );

        let nodes = Gauge::default();
        prom.register(
            "nodes",
            "Gauge of node IDs with a published snapshot",
            nodes.clone(),
        );

        Self {
            rebuilds,
            publications,
            services,
            nodes,
        }
    }

    pub(crate) fn rebuilt(&self, node_id: &str, published: bool) {
        let labels = NodeLabels {
            node_id: node_id.to_owned(),
        };
        self.rebuilds.get_or_create(&labels).inc();
        if published {
            self.publications.get_or_create(&labels).inc();
        }
    }

    pub(crate) fn set_services(&self, valid: usize, invalid: usize) {
        self.services
            .get_or_create(&ValidityLabels { validity: "valid" })
            .set(valid as i64);
        self.services
            .get_or_create(&ValidityLabels {
                validity: "invalid",
            })
            .set(invalid as i64);
    }

    pub(crate) fn set_nodes(&self, count: usize) {
        self.nodes.set(count as i64);
    }
}
