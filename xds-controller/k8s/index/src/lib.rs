//! Keeps Envoy node snapshots in lockstep with the cluster.
//!
//! The index watches ten resource types: the nine `envoy.kaasops.io` CRDs
//! and the SDS-labeled Kubernetes secrets. Each watch event is distilled
//! into a store, the virtual services the event can affect are recompiled,
//! and the snapshots of the nodes those services publish to are reassembled
//! into the cache the ADS server reads from:
//!
//! ```text
//! [ VirtualService ] -> [ compile ] -> [ assemble ] -> [ SnapshotCache ]
//!         |                  |
//!    [ template ]       [ store: Listener, Cluster, Route, HttpFilter,
//!                         AccessLogConfig, Policy, Tracing, Secret ]
//! ```
//!
//! Compilation handles one virtual service at a time, so one broken service
//! never takes its peers down; assembly resolves the conflicts that only
//! exist between services, such as duplicate domains on a shared listener.
//! Every (re)compiled service reports its outcome through the status
//! channel, and the same index answers the admission webhook's questions
//! about candidate objects.

#![deny(warnings, rust_2018_idioms)]
#![forbid(unsafe_code)]

mod assemble;
mod compile;
mod index;
mod merge;
mod metrics;
mod store;
mod template;
mod tls;

#[cfg(test)]
mod tests;

pub use self::{
    index::{Index, SharedIndex},
    metrics::{IndexMetrics, SizedIndex, SnapshotMetrics},
};

/// Default annotation carrying the comma-separated node IDs of a virtual
/// service or listener.
pub const DEFAULT_NODE_ID_ANNOTATION: &str = "envoy.kaasops.io/node-id";

/// Default annotation carrying the comma-separated domains a TLS secret
/// serves, for certificate auto-discovery.
pub const DEFAULT_DOMAIN_ANNOTATION: &str = "envoy.kaasops.io/domains";

/// Annotation that switches per-service access log file naming on.
pub(crate) const AUTO_FILENAME_ANNOTATION: &str = "envoy.kaasops.io/auto-generated-filename";

/// Cluster-level knobs wired through from the command line.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Annotation queried for node IDs on virtual services and listeners.
    pub node_id_annotation: String,

    /// Annotation queried for the domains of SDS-cached TLS secrets.
    pub domain_annotation: String,

    /// Namespace assumed for admission-reviewed objects without one.
    pub default_namespace: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            node_id_annotation: DEFAULT_NODE_ID_ANNOTATION.to_string(),
            domain_annotation: DEFAULT_DOMAIN_ANNOTATION.to_string(),
            default_namespace: "default".to_string(),
        }
    }
}
