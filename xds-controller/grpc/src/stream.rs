//! Per-stream state for the state-of-the-world protocol.
//!
//! Each resource family on a stream is an independent conversation: the
//! client subscribes with a set of resource names, the server answers with
//! the family's full state and a nonce, and the client ACKs or NACKs that
//! nonce. A cache publication re-answers every family whose version moved
//! past what the stream last sent.

use std::collections::BTreeSet;

use envoy_api::service::discovery::v3::{DiscoveryRequest, DiscoveryResponse};
use envoy_xds_controller_core::{ResourceType, Snapshot};
use tracing::{debug, trace, warn};

/// Tracks what one ADS stream has been sent.
pub(crate) struct StreamState {
    node: String,
    nonce: u64,
    subs: [Option<Subscription>; 4],
}

/// One resource family's subscription on a stream.
struct Subscription {
    /// Requested resource names; empty subscribes to the whole family.
    names: BTreeSet<String>,
    /// Version of the last response, empty until something is sent.
    sent_version: String,
    /// Nonce of the last response, matched against ACKs.
    nonce: String,
}

// === impl StreamState ===

impl StreamState {
    pub(crate) fn new(node: String) -> Self {
        Self {
            node,
            nonce: 0,
            subs: Default::default(),
        }
    }

    pub(crate) fn node(&self) -> &str {
        &self.node
    }

    /// Processes one request, returning the response it warrants, if any.
    ///
    /// The first request for a family opens its subscription and is answered
    /// immediately. Afterwards a request is an ACK, a NACK, or a change to
    /// the requested names; only the last produces a response.
    pub(crate) fn handle_request(
        &mut self,
        snapshot: &Snapshot,
        req: &DiscoveryRequest,
    ) -> Option<DiscoveryResponse> {
        let Some(ty) = ResourceType::from_type_url(&req.type_url) else {
            debug!(node = %self.node, url = %req.type_url, "ignoring unknown type URL");
            return None;
        };
        let names = req.resource_names.iter().cloned().collect::<BTreeSet<_>>();

        let idx = slot(ty);
        match self.subs[idx].as_mut() {
            None => {
                let mut sub = Subscription {
                    names,
                    sent_version: String::new(),
                    nonce: String::new(),
                };
                let rsp = respond(&mut self.nonce, &mut sub, snapshot, ty);
                self.subs[idx] = Some(sub);
                rsp
            }

            Some(sub) => {
                // An ACK or NACK that references anything but the latest
                // nonce is stale; a fresher response is already in flight.
                if !req.response_nonce.is_empty() && req.response_nonce != sub.nonce {
                    trace!(
                        node = %self.node,
                        url = %req.type_url,
                        nonce = %req.response_nonce,
                        "stale nonce",
                    );
                    return None;
                }

                if let Some(detail) = &req.error_detail {
                    warn!(
                        node = %self.node,
                        url = %req.type_url,
                        code = detail.code,
                        error = %detail.message,
                        "client rejected configuration",
                    );
                    return None;
                }

                if names != sub.names || req.response_nonce.is_empty() {
                    sub.names = names;
                    return respond(&mut self.nonce, sub, snapshot, ty);
                }

                trace!(
                    node = %self.node,
                    url = %req.type_url,
                    version = %req.version_info,
                    "acknowledged",
                );
                None
            }
        }
    }

    /// Answers a publication with a response for every subscribed family
    /// whose version differs from what was last sent.
    pub(crate) fn handle_snapshot(&mut self, snapshot: &Snapshot) -> Vec<DiscoveryResponse> {
        let mut out = Vec::new();
        for ty in ResourceType::ALL {
            if let Some(sub) = self.subs[slot(ty)].as_mut() {
                if sub.sent_version == snapshot.version(ty) {
                    continue;
                }
                if let Some(rsp) = respond(&mut self.nonce, sub, snapshot, ty) {
                    out.push(rsp);
                }
            }
        }
        out
    }
}

fn slot(ty: ResourceType) -> usize {
    match ty {
        ResourceType::Cluster => 0,
        ResourceType::Secret => 1,
        ResourceType::Listener => 2,
        ResourceType::RouteConfiguration => 3,
    }
}

/// Builds the response for one family and records its version and nonce.
///
/// Nothing is sent for a node that has never published; its subscriptions
/// are answered by the first publication instead. A node that retires back
/// to an empty snapshot still pushes, so clients observe the removal.
fn respond(
    nonce: &mut u64,
    sub: &mut Subscription,
    snapshot: &Snapshot,
    ty: ResourceType,
) -> Option<DiscoveryResponse> {
    if snapshot.is_empty() && sub.sent_version.is_empty() {
        return None;
    }

    *nonce += 1;
    let version = snapshot.version(ty);
    let resources = snapshot
        .resources(ty)
        .iter()
        .filter(|r| sub.names.is_empty() || sub.names.contains(&r.name))
        .map(|r| r.body.clone())
        .collect();

    sub.sent_version = version.clone();
    sub.nonce = nonce.to_string();
    Some(DiscoveryResponse {
        version_info: version,
        resources,
        type_url: ty.type_url().to_owned(),
        nonce: sub.nonce.clone(),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use envoy_xds_controller_core::Resource;

    fn cluster(name: &str) -> Resource {
        Resource::new(
            ResourceType::Cluster,
            name,
            &envoy_api::config::cluster::v3::Cluster {
                name: name.into(),
                ..Default::default()
            },
        )
    }

    fn listener(name: &str) -> Resource {
        Resource::new(
            ResourceType::Listener,
            name,
            &envoy_api::config::listener::v3::Listener {
                name: name.into(),
                ..Default::default()
            },
        )
    }

    fn clusters(names: &[&str]) -> Snapshot {
        Snapshot::new(
            names.iter().map(|n| cluster(n)).collect(),
            Vec::new(),
            Vec::new(),
            Vec::new(),
        )
    }

    fn request(ty: ResourceType, names: &[&str], version: &str, nonce: &str) -> DiscoveryRequest {
        DiscoveryRequest {
            version_info: version.into(),
            resource_names: names.iter().map(ToString::to_string).collect(),
            type_url: ty.type_url().into(),
            response_nonce: nonce.into(),
            ..Default::default()
        }
    }

    fn nack(ty: ResourceType, nonce: &str, message: &str) -> DiscoveryRequest {
        DiscoveryRequest {
            error_detail: Some(envoy_api::google::rpc::Status {
                code: 3,
                message: message.into(),
                ..Default::default()
            }),
            ..request(ty, &[], "", nonce)
        }
    }

    #[test]
    fn new_subscriptions_answer_from_the_snapshot() {
        let mut state = StreamState::new("node-a".into());
        let snap = clusters(&["backend"]);

        let rsp = state
            .handle_request(&snap, &request(ResourceType::Cluster, &[], "", ""))
            .expect("first request is answered");
        assert_eq!(rsp.type_url, ResourceType::Cluster.type_url());
        assert_eq!(rsp.version_info, snap.version(ResourceType::Cluster));
        assert_eq!(rsp.nonce, "1");
        assert_eq!(
            rsp.resources,
            vec![snap.resources(ResourceType::Cluster)[0].body.clone()],
        );
    }

    #[test]
    fn acks_are_quiet() {
        let mut state = StreamState::new("node-a".into());
        let snap = clusters(&["backend"]);

        let rsp = state
            .handle_request(&snap, &request(ResourceType::Cluster, &[], "", ""))
            .expect("first request is answered");
        let ack = request(ResourceType::Cluster, &[], &rsp.version_info, &rsp.nonce);
        assert!(state.handle_request(&snap, &ack).is_none());

        // An unchanged publication is quiet too.
        assert!(state.handle_snapshot(&snap).is_empty());
    }

    #[test]
    fn resource_names_narrow_the_response() {
        let mut state = StreamState::new("node-a".into());
        let snap = clusters(&["alpha", "beta"]);

        let rsp = state
            .handle_request(&snap, &request(ResourceType::Cluster, &["alpha"], "", ""))
            .expect("first request is answered");
        assert_eq!(rsp.resources.len(), 1);

        // Widening the subscription is answered immediately, even though the
        // version was already acknowledged.
        let widened = request(
            ResourceType::Cluster,
            &["alpha", "beta"],
            &rsp.version_info,
            &rsp.nonce,
        );
        let rsp = state
            .handle_request(&snap, &widened)
            .expect("subscription change is answered");
        assert_eq!(rsp.resources.len(), 2);
        assert_eq!(rsp.nonce, "2");
    }

    #[test]
    fn stale_nonces_are_ignored() {
        let mut state = StreamState::new("node-a".into());
        let snap = clusters(&["alpha", "beta"]);

        state
            .handle_request(&snap, &request(ResourceType::Cluster, &["alpha"], "", ""))
            .expect("first request is answered");
        let stale = request(ResourceType::Cluster, &["alpha", "beta"], "", "999");
        assert!(state.handle_request(&snap, &stale).is_none());
    }

    #[test]
    fn nacks_do_not_resend() {
        let mut state = StreamState::new("node-a".into());
        let snap = clusters(&["backend"]);

        let rsp = state
            .handle_request(&snap, &request(ResourceType::Cluster, &[], "", ""))
            .expect("first request is answered");
        assert!(state
            .handle_request(&snap, &nack(ResourceType::Cluster, &rsp.nonce, "bad cluster"))
            .is_none());

        // The rejected version is only replaced by new content.
        assert!(state.handle_snapshot(&snap).is_empty());
        let pushed = state.handle_snapshot(&clusters(&["backend", "extra"]));
        assert_eq!(pushed.len(), 1);
        assert_eq!(pushed[0].resources.len(), 2);
    }

    #[test]
    fn publications_push_every_stale_family() {
        let mut state = StreamState::new("node-a".into());
        let snap = Snapshot::new(
            vec![cluster("backend")],
            Vec::new(),
            vec![listener("http")],
            Vec::new(),
        );
        state
            .handle_request(&snap, &request(ResourceType::Cluster, &[], "", ""))
            .expect("cluster request is answered");
        state
            .handle_request(&snap, &request(ResourceType::Listener, &[], "", ""))
            .expect("listener request is answered");

        // Only the listener family changes, so only it is pushed.
        let next = Snapshot::new(
            vec![cluster("backend")],
            Vec::new(),
            vec![listener("https")],
            Vec::new(),
        );
        let pushed = state.handle_snapshot(&next);
        assert_eq!(pushed.len(), 1);
        assert_eq!(pushed[0].type_url, ResourceType::Listener.type_url());
    }

    #[test]
    fn cold_nodes_wait_for_their_first_snapshot() {
        let mut state = StreamState::new("node-a".into());
        assert!(state
            .handle_request(&Snapshot::default(), &request(ResourceType::Cluster, &[], "", ""))
            .is_none());

        let pushed = state.handle_snapshot(&clusters(&["backend"]));
        assert_eq!(pushed.len(), 1);
        assert_eq!(pushed[0].nonce, "1");
        assert_eq!(pushed[0].resources.len(), 1);
    }

    #[test]
    fn retired_nodes_push_their_empty_state() {
        let mut state = StreamState::new("node-a".into());
        let snap = clusters(&["backend"]);
        state
            .handle_request(&snap, &request(ResourceType::Cluster, &[], "", ""))
            .expect("first request is answered");

        let pushed = state.handle_snapshot(&Snapshot::default());
        assert_eq!(pushed.len(), 1);
        assert!(pushed[0].resources.is_empty());
    }

    #[test]
    fn unknown_type_urls_are_ignored() {
        let mut state = StreamState::new("node-a".into());
        let req = DiscoveryRequest {
            type_url: "type.googleapis.com/envoy.config.endpoint.v3.ClusterLoadAssignment".into(),
            ..Default::default()
        };
        assert!(state.handle_request(&clusters(&["backend"]), &req).is_none());
    }
}
