/// \[#next-free-field: 59\]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HttpConnectionManager {
    /// Supplies the type of codec that the connection manager should use.
    #[prost(enumeration = "http_connection_manager::CodecType", tag = "1")]
    pub codec_type: i32,
    /// The human readable prefix to use when emitting statistics for the
    /// connection manager. See the :ref:`statistics documentation
    /// <config_http_conn_man_stats>` for more information.
    #[prost(string, tag = "2")]
    pub stat_prefix: ::prost::alloc::string::String,
    /// A list of individual HTTP filters that make up the filter chain for
    /// requests made to the connection manager. :ref:`Order matters
    /// <arch_overview_http_filters_ordering>` as the filters are processed
    /// sequentially as request events happen.
    #[prost(message, repeated, tag = "5")]
    pub http_filters: ::prost::alloc::vec::Vec<HttpFilter>,
    /// Presence of the object defines whether the connection manager emits
    /// :ref:`tracing <arch_overview_tracing>` data to the :ref:`configured
    /// tracing provider <envoy_v3_api_msg_config.trace.v3.Tracing>`.
    #[prost(message, optional, tag = "7")]
    pub tracing: ::core::option::Option<http_connection_manager::Tracing>,
    /// An optional override that the connection manager will write to the server
    /// header in responses. If not set, the default is ``envoy``.
    #[prost(string, tag = "10")]
    pub server_name: ::prost::alloc::string::String,
    /// Configuration for :ref:`HTTP access logs <arch_overview_access_logs>`
    /// emitted by the connection manager.
    #[prost(message, repeated, tag = "13")]
    pub access_log: ::prost::alloc::vec::Vec<
        super::super::super::super::super::config::accesslog::v3::AccessLog,
    >,
    /// If set to true, the connection manager will use the real remote address
    /// of the client connection when determining internal versus external
    /// origin and manipulating various headers. If set to false or absent, the
    /// connection manager will use the
    /// :ref:`config_http_conn_man_headers_x-forwarded-for` HTTP header. See the
    /// documentation for :ref:`config_http_conn_man_headers_x-forwarded-for`,
    /// :ref:`config_http_conn_man_headers_x-envoy-internal`, and
    /// :ref:`config_http_conn_man_headers_x-envoy-external-address` for more
    /// information.
    #[prost(message, optional, tag = "14")]
    pub use_remote_address: ::core::option::Option<bool>,
    /// The number of additional ingress proxy hops from the right side of the
    /// :ref:`config_http_conn_man_headers_x-forwarded-for` HTTP header to
    /// trust when determining the origin client's IP address. The default is
    /// zero if this option is not specified. See the documentation for
    /// :ref:`config_http_conn_man_headers_x-forwarded-for` for more
    /// information.
    #[prost(uint32, tag = "19")]
    pub xff_num_trusted_hops: u32,
    /// Whether the connection manager will generate the :ref:`x-request-id
    /// <config_http_conn_man_headers_x-request-id>` header if it does not exist.
    /// This defaults to true. Generating a random UUID4 is expensive so in high
    /// throughput scenarios where this feature is not desired it can be disabled.
    #[prost(message, optional, tag = "15")]
    pub generate_request_id: ::core::option::Option<bool>,
    /// Should paths be normalized according to RFC 3986 before any processing of
    /// requests by HTTP filters or routing? This affects the upstream ``:path``
    /// header as well. For paths that fail this check, Envoy will respond with
    /// 400 to paths that are malformed. This defaults to false currently but
    /// will default true in the future.
    #[prost(message, optional, tag = "30")]
    pub normalize_path: ::core::option::Option<bool>,
    /// Determines if adjacent slashes in the path are merged into one before any
    /// processing of requests by HTTP filters or routing. This affects the
    /// upstream ``:path`` header as well. Without setting this option, incoming
    /// requests with path ``//dir///file`` will not match against route with
    /// ``prefix`` match set to ``/dir``. Defaults to ``false``.
    #[prost(bool, tag = "33")]
    pub merge_slashes: bool,
    /// The additional settings for the connection manager related to upgrades.
    #[prost(message, repeated, tag = "23")]
    pub upgrade_configs: ::prost::alloc::vec::Vec<
        http_connection_manager::UpgradeConfig,
    >,
    #[prost(oneof = "http_connection_manager::RouteSpecifier", tags = "3, 4")]
    pub route_specifier: ::core::option::Option<
        http_connection_manager::RouteSpecifier,
    >,
}
/// Nested message and enum types in `HttpConnectionManager`.
pub mod http_connection_manager {
    /// \[#next-free-field: 11\]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Tracing {
        /// Target percentage of requests managed by this HTTP connection manager
        /// that will be force traced if the :ref:`x-client-trace-id
        /// <config_http_conn_man_headers_x-client-trace-id>` header is set. This
        /// field is a direct analog for the runtime variable
        /// 'tracing.client_enabled' in the :ref:`HTTP Connection Manager
        /// <config_http_conn_man_runtime>`. Default: 100%
        #[prost(message, optional, tag = "3")]
        pub client_sampling: ::core::option::Option<
            super::super::super::super::super::super::kind::v3::Percent,
        >,
        /// Target percentage of requests managed by this HTTP connection manager
        /// that will be randomly selected for trace generation, if not requested
        /// by the client or not forced. This field is a direct analog for the
        /// runtime variable 'tracing.random_sampling' in the :ref:`HTTP
        /// Connection Manager <config_http_conn_man_runtime>`. Default: 100%
        #[prost(message, optional, tag = "4")]
        pub random_sampling: ::core::option::Option<
            super::super::super::super::super::super::kind::v3::Percent,
        >,
        /// Target percentage of requests managed by this HTTP connection manager
        /// that will be traced after all other sampling checks have been applied
        /// (client-directed, force tracing, random sampling). This field
        /// functions as an upper limit on the total configured sampling rate.
        /// Default: 100%
        #[prost(message, optional, tag = "5")]
        pub overall_sampling: ::core::option::Option<
            super::super::super::super::super::super::kind::v3::Percent,
        >,
        /// Whether to annotate spans with additional data. If true, spans will
        /// include logs for stream events.
        #[prost(bool, tag = "6")]
        pub verbose: bool,
        /// Maximum length of the request path to extract and include in the
        /// HttpUrl tag. Used to truncate lengthy request paths to meet the needs
        /// of a tracing backend. Default: 256
        #[prost(message, optional, tag = "7")]
        pub max_path_tag_length: ::core::option::Option<u32>,
        /// Configuration for an external tracing provider. If not specified, no
        /// tracing will be performed.
        #[prost(message, optional, tag = "9")]
        pub provider: ::core::option::Option<
            super::super::super::super::super::super::config::trace::v3::tracing::Http,
        >,
        /// Create separate tracing span for each upstream request if true. And if
        /// this flag is set to true, the tracing provider will assume that Envoy
        /// will be independent hop in the trace chain and may set span type to
        /// client or server based on this flag.
        #[prost(message, optional, tag = "10")]
        pub spawn_upstream_span: ::core::option::Option<bool>,
    }
    /// The configuration for HTTP upgrades.
    /// For each upgrade type desired, an UpgradeConfig must be added.
    ///
    /// .. warning::
    ///
    ///    The current implementation of upgrade headers does not handle
    ///    multi-valued upgrade headers. Support for multi-valued headers may be
    ///    added in the future if needed.
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct UpgradeConfig {
        /// The case-insensitive name of this upgrade, e.g. "websocket".
        /// For each upgrade type present in upgrade_configs, requests with
        /// Upgrade: \[upgrade_type\] will be proxied upstream.
        #[prost(string, tag = "1")]
        pub upgrade_type: ::prost::alloc::string::String,
        /// If present, this represents the filter chain which will be created for
        /// this type of upgrade. If no filters are present, the filter chain for
        /// HTTP connections will be used for this upgrade type.
        #[prost(message, repeated, tag = "2")]
        pub filters: ::prost::alloc::vec::Vec<super::HttpFilter>,
        /// Determines if upgrades are enabled or disabled by default. Defaults to
        /// true. This can be overridden on a per-route basis with :ref:`cluster
        /// <envoy_v3_api_field_config.route.v3.RouteAction.upgrade_configs>` as
        /// documented in the :ref:`upgrade documentation
        /// <arch_overview_upgrades>`.
        #[prost(message, optional, tag = "3")]
        pub enabled: ::core::option::Option<bool>,
    }
    #[derive(
        Clone,
        Copy,
        Debug,
        PartialEq,
        Eq,
        Hash,
        PartialOrd,
        Ord,
        ::prost::Enumeration
    )]
    #[repr(i32)]
    pub enum CodecType {
        /// For every new connection, the connection manager will determine which
        /// codec to use. This mode supports both ALPN for TLS listeners as well
        /// as protocol inference for plaintext listeners. If ALPN data is
        /// available, it is preferred, otherwise protocol inference is used. In
        /// almost all cases, this is the right option to choose for this setting.
        Auto = 0,
        /// The connection manager will assume that the client is speaking HTTP/1.1.
        Http1 = 1,
        /// The connection manager will assume that the client is speaking HTTP/2
        /// (Envoy will assume connection prefix (PRI) knowledge).
        Http2 = 2,
        /// The connection manager will assume that the client is speaking HTTP/3.
        /// This needs to be consistent with listener and transport socket config.
        Http3 = 3,
    }
    impl CodecType {
        /// String value of the enum field names used in the ProtoBuf definition.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                CodecType::Auto => "AUTO",
                CodecType::Http1 => "HTTP1",
                CodecType::Http2 => "HTTP2",
                CodecType::Http3 => "HTTP3",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "AUTO" => Some(Self::Auto),
                "HTTP1" => Some(Self::Http1),
                "HTTP2" => Some(Self::Http2),
                "HTTP3" => Some(Self::Http3),
                _ => None,
            }
        }
    }
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum RouteSpecifier {
        /// The connection manager's route table will be dynamically loaded via
        /// the RDS API.
        #[prost(message, tag = "3")]
        Rds(super::Rds),
        /// The route table for the connection manager is static and is specified
        /// in this property.
        #[prost(message, tag = "4")]
        RouteConfig(
            super::super::super::super::super::super::config::route::v3::RouteConfiguration,
        ),
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Rds {
    /// Configuration source specifier for RDS.
    #[prost(message, optional, tag = "1")]
    pub config_source: ::core::option::Option<
        super::super::super::super::super::config::core::v3::ConfigSource,
    >,
    /// The name of the route configuration. This name will be passed to the RDS
    /// API. This allows an Envoy configuration with multiple HTTP listeners
    /// (and associated HTTP connection manager filters) to use different route
    /// configurations.
    #[prost(string, tag = "2")]
    pub route_config_name: ::prost::alloc::string::String,
}
/// \[#next-free-field: 8\]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HttpFilter {
    /// The name of the filter configuration. It also serves as a resource name
    /// in ExtensionConfigDS.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// If true, clients that do not support this filter may ignore the filter
    /// but otherwise accept the config. Otherwise, clients that do not support
    /// this filter must reject the config.
    #[prost(bool, tag = "6")]
    pub is_optional: bool,
    /// If true, the filter is disabled by default and must be explicitly enabled
    /// by setting per filter configuration in the route configuration.
    #[prost(bool, tag = "7")]
    pub disabled: bool,
    #[prost(oneof = "http_filter::ConfigType", tags = "4")]
    pub config_type: ::core::option::Option<http_filter::ConfigType>,
}
/// Nested message and enum types in `HttpFilter`.
pub mod http_filter {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum ConfigType {
        /// Filter specific configuration which depends on the filter being
        /// instantiated. See the supported filters for further documentation.
        ///
        /// To support configuring a :ref:`match tree
        /// <arch_overview_matching_api>`, use an :ref:`ExtensionWithMatcher
        /// <envoy_v3_api_msg_extensions.common.matching.v3.ExtensionWithMatcher>`
        /// with the desired HTTP filter.
        /// \[#extension-category: envoy.filters.http\]
        #[prost(message, tag = "4")]
        TypedConfig(::prost_types::Any),
    }
}
