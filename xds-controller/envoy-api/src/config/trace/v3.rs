/// The tracing configuration specifies settings for an HTTP tracer provider
/// used by Envoy.
///
/// Envoy may support other tracers in the future, but right now the HTTP
/// tracer is the only one supported.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Tracing {
    /// Provides configuration for the HTTP tracer.
    #[prost(message, optional, tag = "1")]
    pub http: ::core::option::Option<tracing::Http>,
}
/// Nested message and enum types in `Tracing`.
pub mod tracing {
    /// Configuration for an HTTP tracer provider used by Envoy.
    ///
    /// The configuration is defined by the :ref:`HttpConnectionManager.Tracing
    /// <envoy_v3_api_msg_extensions.filters.network.http_connection_manager.v3.HttpConnectionManager.Tracing>`
    /// :ref:`provider
    /// <envoy_v3_api_field_extensions.filters.network.http_connection_manager.v3.HttpConnectionManager.Tracing.provider>`
    /// field.
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Http {
        /// The name of the HTTP trace driver to instantiate. The name must match
        /// a supported HTTP trace driver.
        #[prost(string, tag = "1")]
        pub name: ::prost::alloc::string::String,
        /// Trace driver specific configuration which must be set according to the
        /// driver being instantiated.
        /// \[#extension-category: envoy.tracers\]
        #[prost(oneof = "http::ConfigType", tags = "3")]
        pub config_type: ::core::option::Option<http::ConfigType>,
    }
    /// Nested message and enum types in `Http`.
    pub mod http {
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum ConfigType {
            #[prost(message, tag = "3")]
            TypedConfig(::prost_types::Any),
        }
    }
}
/// Configuration for the Zipkin tracer.
/// \[#next-free-field: 8\]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ZipkinConfig {
    /// The cluster manager cluster that hosts the Zipkin collectors.
    #[prost(string, tag = "1")]
    pub collector_cluster: ::prost::alloc::string::String,
    /// The API endpoint of the Zipkin service where the spans will be sent. When
    /// using a standard Zipkin installation, the API endpoint is typically
    /// /api/v2/spans, which corresponds to the V2 POST endpoint.
    #[prost(string, tag = "2")]
    pub collector_endpoint: ::prost::alloc::string::String,
    /// Determines whether a 128bit trace id will be used when creating a new
    /// trace instance. The default value is false, which will result in a 64 bit
    /// trace id being used.
    #[prost(bool, tag = "3")]
    pub trace_id_128bit: bool,
    /// Determines whether client and server spans will share the same span
    /// context. The default value is true.
    #[prost(message, optional, tag = "4")]
    pub shared_span_context: ::core::option::Option<bool>,
    /// Determines the selected collector endpoint version.
    #[prost(enumeration = "zipkin_config::CollectorEndpointVersion", tag = "5")]
    pub collector_endpoint_version: i32,
    /// Optional hostname to use when sending spans to the collector_cluster.
    /// Useful for collectors that require a specific hostname. Defaults to
    /// :ref:`collector_cluster
    /// <envoy_v3_api_field_config.trace.v3.ZipkinConfig.collector_cluster>`
    /// above.
    #[prost(string, tag = "6")]
    pub collector_hostname: ::prost::alloc::string::String,
}
/// Nested message and enum types in `ZipkinConfig`.
pub mod zipkin_config {
    /// Available Zipkin collector endpoint versions.
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
    pub enum CollectorEndpointVersion {
        /// Zipkin API v1, JSON over HTTP.
        /// \[#comment: The default implementation of Zipkin client before this
        /// field is added was only v1 and the way user configure this was by not
        /// explicitly specifying the version. Consequently, before this is added,
        /// the corresponding Zipkin collector expected to receive v1 payload.
        /// Hence the motivation of adding HTTP_JSON_V1 as the default is to avoid
        /// a breaking change to the behavior of importing this".\]
        DeprecatedAndUnavailableDoNotUse = 0,
        /// Zipkin API v2, JSON over HTTP.
        HttpJson = 1,
        /// Zipkin API v2, protobuf over HTTP.
        HttpProto = 2,
    }
    impl CollectorEndpointVersion {
        /// String value of the enum field names used in the ProtoBuf definition.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                CollectorEndpointVersion::DeprecatedAndUnavailableDoNotUse => {
                    "DEPRECATED_AND_UNAVAILABLE_DO_NOT_USE"
                }
                CollectorEndpointVersion::HttpJson => "HTTP_JSON",
                CollectorEndpointVersion::HttpProto => "HTTP_PROTO",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "DEPRECATED_AND_UNAVAILABLE_DO_NOT_USE" => {
                    Some(Self::DeprecatedAndUnavailableDoNotUse)
                }
                "HTTP_JSON" => Some(Self::HttpJson),
                "HTTP_PROTO" => Some(Self::HttpProto),
                _ => None,
            }
        }
    }
}
/// Configuration for the OpenTelemetry tracer.
/// \[#next-free-field: 7\]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OpenTelemetryConfig {
    /// The upstream gRPC cluster that will receive OTLP traces. Note that the
    /// tracer drops traces if the server does not read data fast enough.
    /// This field can be used to provide an alternative to the OTLP HTTP
    /// exporter.
    #[prost(message, optional, tag = "1")]
    pub grpc_service: ::core::option::Option<
        super::super::core::v3::GrpcService,
    >,
    /// The name for the service. This will be populated in the ResourceSpan
    /// Resource attributes. If it is not provided, it will default to
    /// "unknown_service:envoy".
    #[prost(string, tag = "2")]
    pub service_name: ::prost::alloc::string::String,
}
