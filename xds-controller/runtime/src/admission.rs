use crate::{
    core::{NamespacedName, ObjectKind},
    index::{Index, SharedIndex},
    k8s,
};
use anyhow::{anyhow, Result};
use futures::future;
use hyper::{body::Buf, http, Body, Request, Response};
use kube::{
    core::{admission::Operation, DynamicObject},
    Resource,
};
use serde::de::DeserializeOwned;
use std::task;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Reviews writes to the configuration resources against the live index, so
/// an object that cannot compile, or whose deletion would break a compiled
/// service, never reaches the cluster.
#[derive(Clone)]
pub struct Admission {
    index: SharedIndex,
    default_namespace: String,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read request body: {0}")]
    Request(#[from] hyper::Error),

    #[error("failed to encode json response: {0}")]
    Json(#[from] serde_json::Error),
}

type Review = kube::core::admission::AdmissionReview<DynamicObject>;
type AdmissionRequest = kube::core::admission::AdmissionRequest<DynamicObject>;
type AdmissionResponse = kube::core::admission::AdmissionResponse;

impl hyper::service::Service<Request<Body>> for Admission {
    type Response = Response<Body>;
    type Error = Error;
    type Future = future::BoxFuture<'static, Result<Response<Body>, Error>>;

    fn poll_ready(&mut self, _cx: &mut task::Context<'_>) -> task::Poll<Result<(), Error>> {
        task::Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        if req.method() != http::Method::POST || req.uri().path() != "/" {
            return Box::pin(future::ok(
                Response::builder()
                    .status(http::StatusCode::NOT_FOUND)
                    .body(Body::empty())
                    .expect("not found response must be valid"),
            ));
        }

        let admission = self.clone();
        Box::pin(async move {
            let bytes = hyper::body::aggregate(req.into_body()).await?;
            let review: Review = match serde_json::from_reader(bytes.reader()) {
                Ok(review) => review,
                Err(error) => {
                    warn!(%error, "Failed to parse request body");
                    return json_response(AdmissionResponse::invalid(error).into_review());
                }
            };

            let req: AdmissionRequest = match review.try_into() {
                Ok(req) => req,
                Err(error) => {
                    warn!(%error, "Invalid admission request");
                    return json_response(AdmissionResponse::invalid(error).into_review());
                }
            };
            debug!(?req);

            let rsp = admission.admit(req);
            debug!(?rsp);
            json_response(rsp.into_review())
        })
    }
}

// === impl Admission ===

impl Admission {
    pub fn new(index: SharedIndex, default_namespace: String) -> Self {
        Self {
            index,
            default_namespace,
        }
    }

    fn admit(self, req: AdmissionRequest) -> AdmissionResponse {
        if matches!(req.operation, Operation::Delete) {
            return self.admit_delete(req);
        }

        if is_kind::<k8s::xds::VirtualService>(&req) {
            return self.check(req, Index::check_virtual_service);
        }

        if is_kind::<k8s::xds::VirtualServiceTemplate>(&req) {
            return self.check(req, Index::check_template);
        }

        if is_kind::<k8s::xds::Listener>(&req) {
            return self.check(req, Index::check_listener);
        }

        if is_kind::<k8s::xds::Cluster>(&req) {
            return self.check(req, Index::check_cluster);
        }

        if is_kind::<k8s::xds::Route>(&req) {
            return self.check(req, Index::check_route);
        }

        if is_kind::<k8s::xds::HttpFilter>(&req) {
            return self.check(req, Index::check_http_filter);
        }

        if is_kind::<k8s::xds::AccessLogConfig>(&req) {
            return self.check(req, Index::check_access_log_config);
        }

        if is_kind::<k8s::xds::Policy>(&req) {
            return self.check(req, Index::check_policy);
        }

        if is_kind::<k8s::xds::Tracing>(&req) {
            return self.check(req, Index::check_tracing);
        }

        // Secret writes are not validated; only their deletion is guarded.
        if is_kind::<k8s::Secret>(&req) {
            return AdmissionResponse::from(&req);
        }

        AdmissionResponse::invalid(format_args!(
            "unsupported resource type: {}.{}.{}",
            req.kind.group, req.kind.version, req.kind.kind
        ))
    }

    /// Parses the object under review as `T` and validates it against the
    /// current state of the index.
    fn check<T, F>(self, req: AdmissionRequest, validate: F) -> AdmissionResponse
    where
        T: DeserializeOwned,
        F: FnOnce(&Index, &T) -> Result<(), crate::core::Error>,
    {
        let rsp = AdmissionResponse::from(&req);
        let kind = req.kind.kind.clone();

        let obj: T = match self.parse_object(req) {
            Ok(obj) => obj,
            Err(error) => {
                warn!(%error, %kind, "Failed to deserialize object under review");
                return rsp.deny(error);
            }
        };

        match validate(&*self.index.read(), &obj) {
            Ok(()) => rsp,
            Err(error) => {
                info!(%error, %kind, "Denying admission");
                rsp.deny(error)
            }
        }
    }

    /// Refuses to delete an object another compiled service still depends
    /// on. A delete review carries no object, so the target is identified by
    /// group, kind, and name alone.
    fn admit_delete(self, req: AdmissionRequest) -> AdmissionResponse {
        let rsp = AdmissionResponse::from(&req);

        let Some(kind) = delete_target_kind(&req) else {
            return rsp;
        };
        let namespace = req
            .namespace
            .clone()
            .unwrap_or_else(|| self.default_namespace.clone());
        let target = NamespacedName::new(namespace, req.name.clone());

        if let Some(dependent) = self.index.read().in_use_by(kind, &target) {
            info!(%kind, %target, %dependent, "Denying delete");
            return rsp.deny(format_args!(
                "{} {} is in use by virtual service {}",
                kind, target, dependent
            ));
        }
        rsp
    }

    /// Recovers the typed object from the review. The review's namespace is
    /// injected into the metadata when absent, falling back to the default
    /// namespace, so unqualified objects index the same way they compile.
    fn parse_object<T: DeserializeOwned>(&self, req: AdmissionRequest) -> Result<T> {
        let namespace = req.namespace;
        let mut obj = req
            .object
            .ok_or_else(|| anyhow!("no object in admission request"))?;
        if obj.metadata.namespace.is_none() {
            obj.metadata.namespace = namespace.or_else(|| Some(self.default_namespace.clone()));
        }
        Ok(serde_json::from_value(serde_json::to_value(obj)?)?)
    }
}

fn delete_target_kind(req: &AdmissionRequest) -> Option<ObjectKind> {
    if is_kind::<k8s::xds::VirtualService>(req) {
        Some(ObjectKind::VirtualService)
    } else if is_kind::<k8s::xds::VirtualServiceTemplate>(req) {
        Some(ObjectKind::VirtualServiceTemplate)
    } else if is_kind::<k8s::xds::Listener>(req) {
        Some(ObjectKind::Listener)
    } else if is_kind::<k8s::xds::Cluster>(req) {
        Some(ObjectKind::Cluster)
    } else if is_kind::<k8s::xds::Route>(req) {
        Some(ObjectKind::Route)
    } else if is_kind::<k8s::xds::HttpFilter>(req) {
        Some(ObjectKind::HttpFilter)
    } else if is_kind::<k8s::xds::AccessLogConfig>(req) {
        Some(ObjectKind::AccessLogConfig)
    } else if is_kind::<k8s::xds::Policy>(req) {
        Some(ObjectKind::Policy)
    } else if is_kind::<k8s::xds::Tracing>(req) {
        Some(ObjectKind::Tracing)
    } else if is_kind::<k8s::Secret>(req) {
        Some(ObjectKind::Secret)
    } else {
        None
    }
}

fn is_kind<T>(req: &AdmissionRequest) -> bool
where
    T: Resource,
    T::DynamicType: Default,
{
    let dt = Default::default();
    req.kind.group.eq_ignore_ascii_case(&T::group(&dt))
        && req.kind.kind.eq_ignore_ascii_case(&T::kind(&dt))
}

fn json_response(rsp: Review) -> Result<Response<Body>, Error> {
    let bytes = serde_json::to_vec(&rsp)?;
    Ok(Response::builder()
        .status(http::StatusCode::OK)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Body::from(bytes))
        .expect("admission review response must be valid"))
}
