use crate::stream::StreamState;
use envoy_api::service::discovery::v3::{
    aggregated_discovery_service_server::{
        AggregatedDiscoveryService, AggregatedDiscoveryServiceServer,
    },
    DeltaDiscoveryRequest, DeltaDiscoveryResponse, DiscoveryRequest, DiscoveryResponse,
};
use envoy_xds_controller_core::SnapshotCache;
use futures::prelude::*;
use std::{pin::Pin, sync::Arc};
use tracing::debug;

/// Serves aggregated discovery from the snapshot cache.
///
/// Every stream is scoped to the node ID carried by its first request and
/// follows that node's publications until the client hangs up or the
/// process drains.
#[derive(Clone, Debug)]
pub struct AdsServer {
    cache: Arc<SnapshotCache>,
    drain: drain::Watch,
}

// === impl AdsServer ===

impl AdsServer {
    pub fn new(cache: Arc<SnapshotCache>, drain: drain::Watch) -> Self {
        Self { cache, drain }
    }

    pub fn svc(self) -> AggregatedDiscoveryServiceServer<Self> {
        AggregatedDiscoveryServiceServer::new(self)
    }
}

#[async_trait::async_trait]
impl AggregatedDiscoveryService for AdsServer {
    type StreamAggregatedResourcesStream = BoxDiscoveryStream;

    async fn stream_aggregated_resources(
        &self,
        req: tonic::Request<tonic::Streaming<DiscoveryRequest>>,
    ) -> Result<tonic::Response<BoxDiscoveryStream>, tonic::Status> {
        Ok(tonic::Response::new(response_stream(
            self.cache.clone(),
            self.drain.clone(),
            req.into_inner(),
        )))
    }

    type DeltaAggregatedResourcesStream =
        futures::stream::Empty<Result<DeltaDiscoveryResponse, tonic::Status>>;

    async fn delta_aggregated_resources(
        &self,
        _req: tonic::Request<tonic::Streaming<DeltaDiscoveryRequest>>,
    ) -> Result<tonic::Response<Self::DeltaAggregatedResourcesStream>, tonic::Status> {
        // The cache only holds full per-node states.
        Err(tonic::Status::unimplemented("delta xDS is not served"))
    }
}

type BoxDiscoveryStream =
    Pin<Box<dyn Stream<Item = Result<DiscoveryResponse, tonic::Status>> + Send>>;

fn response_stream(
    cache: Arc<SnapshotCache>,
    drain: drain::Watch,
    mut requests: tonic::Streaming<DiscoveryRequest>,
) -> BoxDiscoveryStream {
    Box::pin(async_stream::try_stream! {
        tokio::pin! {
            let shutdown = drain.signaled();
        }

        // The first request names the node; the whole stream is scoped to
        // that node's snapshot.
        let first = tokio::select! {
            res = requests.next() => match res {
                Some(req) => req,
                None => return,
            },
            _ = (&mut shutdown) => return,
        }?;
        let node = first
            .node
            .as_ref()
            .map(|n| n.id.clone())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| tonic::Status::invalid_argument("discovery request carries no node ID"))?;
        debug!(%node, "ads stream opened");

        let mut rx = cache.watch(&node);
        let mut snapshot = rx.borrow_and_update().clone();
        let mut state = StreamState::new(node);

        if let Some(rsp) = state.handle_request(&snapshot, &first) {
            yield rsp;
        }

        loop {
            let req = tokio::select! {
                res = requests.next() => match res {
                    Some(req) => req,
                    None => {
                        debug!(node = %state.node(), "ads stream closed");
                        return;
                    }
                },

                res = rx.changed() => {
                    if res.is_err() {
                        return;
                    }
                    snapshot = rx.borrow_and_update().clone();
                    for rsp in state.handle_snapshot(&snapshot) {
                        yield rsp;
                    }
                    continue;
                }

                // Close the stream on shutdown so it does not hold the
                // server open.
                _ = (&mut shutdown) => {
                    return;
                }
            }?;
            if let Some(rsp) = state.handle_request(&snapshot, &req) {
                yield rsp;
            }
        }
    })
}
