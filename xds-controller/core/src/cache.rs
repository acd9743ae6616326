use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::RwLock;
use tokio::sync::watch;

use crate::snapshot::Snapshot;

/// Holds the live snapshot for every node ID and notifies ADS streams of
/// publications.
///
/// Each node gets a `tokio::sync::watch` channel created lazily by whichever
/// side arrives first: a stream may subscribe before the node has any
/// config (it observes an empty snapshot), and a publication for a node with
/// no streams simply parks the snapshot in the channel.
#[derive(Debug, Default)]
pub struct SnapshotCache {
    nodes: RwLock<AHashMap<String, watch::Sender<Arc<Snapshot>>>>,
}

// === impl SnapshotCache ===

impl SnapshotCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes a snapshot, returning whether anything changed.
    ///
    /// A snapshot whose digest matches the node's current one is dropped so
    /// redundant feed events do not wake the node's streams. Publishing an
    /// empty snapshot retires a node that no longer has any config.
    pub fn set(&self, node_id: &str, snapshot: Snapshot) -> bool {
        let mut nodes = self.nodes.write();
        match nodes.get(node_id) {
            Some(tx) => {
                if tx.borrow().digest() == snapshot.digest() {
                    tracing::trace!(node = %node_id, "snapshot unchanged");
                    return false;
                }
                tracing::debug!(node = %node_id, empty = snapshot.is_empty(), "publishing snapshot");
                tx.send_replace(Arc::new(snapshot));
            }
            None => {
                if snapshot.is_empty() {
                    return false;
                }
                tracing::debug!(node = %node_id, "publishing first snapshot");
                let (tx, _rx) = watch::channel(Arc::new(snapshot));
                nodes.insert(node_id.to_owned(), tx);
            }
        }
        true
    }

    pub fn get(&self, node_id: &str) -> Option<Arc<Snapshot>> {
        self.nodes.read().get(node_id).map(|tx| tx.borrow().clone())
    }

    /// Subscribes to a node's publications, registering the node if needed.
    pub fn watch(&self, node_id: &str) -> watch::Receiver<Arc<Snapshot>> {
        if let Some(tx) = self.nodes.read().get(node_id) {
            return tx.subscribe();
        }
        self.nodes
            .write()
            .entry(node_id.to_owned())
            .or_insert_with(|| watch::channel(Arc::new(Snapshot::default())).0)
            .subscribe()
    }

    /// Node IDs that currently hold a non-empty snapshot.
    pub fn node_ids(&self) -> Vec<String> {
        self.nodes
            .read()
            .iter()
            .filter(|(_, tx)| !tx.borrow().is_empty())
            .map(|(node, _)| node.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{Resource, ResourceType};
    use envoy_api::config::cluster::v3::Cluster;

    fn snapshot(cluster_name: &str) -> Snapshot {
        let cluster = Cluster {
            name: cluster_name.into(),
            ..Default::default()
        };
        Snapshot::new(
            vec![Resource::new(ResourceType::Cluster, cluster_name, &cluster)],
            Vec::new(),
            Vec::new(),
            Vec::new(),
        )
    }

    #[test]
    fn redundant_publications_are_suppressed() {
        let cache = SnapshotCache::new();
        assert!(cache.set("node-a", snapshot("backend")));
        assert!(!cache.set("node-a", snapshot("backend")));
        assert!(cache.set("node-a", snapshot("other")));
    }

    #[test]
    fn watchers_observe_publications() {
        let cache = SnapshotCache::new();
        let rx = cache.watch("node-a");
        assert!(rx.borrow().is_empty());

        cache.set("node-a", snapshot("backend"));
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow().resources(ResourceType::Cluster).len(), 1);
    }

    #[test]
    fn emptied_nodes_drop_out_of_the_node_list() {
        let cache = SnapshotCache::new();
        cache.set("node-a", snapshot("backend"));
        cache.set("node-b", snapshot("backend"));
        assert_eq!(cache.node_ids().len(), 2);

        assert!(cache.set("node-b", Snapshot::default()));
        let nodes = cache.node_ids();
        assert_eq!(nodes, vec!["node-a".to_string()]);

        // An empty snapshot for a node nobody knows is a no-op.
        assert!(!cache.set("node-c", Snapshot::default()));
    }
}
