/// \[#next-free-field: 10\]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Router {
    /// Whether the router generates dynamic cluster statistics. Defaults to
    /// true. Can be disabled in high performance scenarios.
    #[prost(message, optional, tag = "1")]
    pub dynamic_stats: ::core::option::Option<bool>,
    /// Whether to start a child span for egress routed calls. This can be
    /// useful in scenarios where other filters (auth, ratelimit, etc.) make
    /// outbound calls and have child spans rooted at the same ingress parent.
    /// Defaults to false.
    #[prost(bool, tag = "2")]
    pub start_child_span: bool,
    /// Do not add any additional ``x-envoy-`` headers to requests or responses.
    /// This only affects the :ref:`router filter generated x-envoy- headers
    /// <config_http_filters_router_headers_set>`, other Envoy filters and the
    /// HTTP connection manager may continue to set ``x-envoy-`` headers.
    #[prost(bool, tag = "4")]
    pub suppress_envoy_headers: bool,
    /// If not set, ingress Envoy will ignore :ref:`x-envoy-expected-rq-timeout-ms
    /// <config_http_filters_router_x-envoy-expected-rq-timeout-ms>` header,
    /// populated by egress Envoy, when deriving timeout for upstream cluster.
    #[prost(bool, tag = "6")]
    pub respect_expected_rq_timeout: bool,
}
