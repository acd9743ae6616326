/// Specifies the match criteria for selecting a specific filter chain for a
/// listener.
///
/// In order for a filter chain to be selected, *ALL* of its criteria must be
/// fulfilled by the incoming connection, properties of which are set by the
/// networking stack and/or listener filters.
/// \[#next-free-field: 14\]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FilterChainMatch {
    /// Optional destination port to consider when use_original_dst is set on the
    /// listener in determining a filter chain match.
    #[prost(message, optional, tag = "8")]
    pub destination_port: ::core::option::Option<u32>,
    /// If non-empty, a transport protocol to consider when determining a filter
    /// chain match. This value will be compared against the transport protocol of
    /// a new connection, when it's detected by one of the listener filters.
    ///
    /// Suggested values include:
    ///
    /// * ``raw_buffer`` - default, used when no transport protocol is detected,
    /// * ``tls`` - set by :ref:`envoy.filters.listener.tls_inspector
    ///    <config_listener_filters_tls_inspector>` when TLS protocol is detected.
    #[prost(string, tag = "9")]
    pub transport_protocol: ::prost::alloc::string::String,
    /// If non-empty, a list of server names (e.g. SNI for TLS protocol) to
    /// consider when determining a filter chain match. Those values will be
    /// compared against the server names of a new connection, when detected by
    /// one of the listener filters.
    ///
    /// The server name will be matched against all wildcard domains, i.e.
    /// ``www.example.com`` will be first matched against ``www.example.com``,
    /// then ``*.example.com``, then ``*.com``.
    ///
    /// Note that partial wildcards are not supported, and values like
    /// ``*w.example.com`` are invalid.
    #[prost(string, repeated, tag = "11")]
    pub server_names: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
/// A single filter chain wraps a set of match criteria, an option TLS context,
/// a set of filters, and various other parameters.
/// \[#next-free-field: 10\]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FilterChain {
    /// The criteria to use when matching a connection to this filter chain.
    #[prost(message, optional, tag = "1")]
    pub filter_chain_match: ::core::option::Option<FilterChainMatch>,
    /// A list of individual network filters that make up the filter chain for
    /// connections established with the listener. Order matters as the filters
    /// are processed sequentially as connection events happen. Note: If the
    /// filter list is empty, the connection will close by default.
    #[prost(message, repeated, tag = "3")]
    pub filters: ::prost::alloc::vec::Vec<Filter>,
    /// Optional custom transport socket implementation to use for downstream
    /// connections. To setup TLS, set a transport socket with name
    /// ``envoy.transport_sockets.tls`` and
    /// :ref:`DownstreamTlsContext
    /// <envoy_v3_api_msg_extensions.transport_sockets.tls.v3.DownstreamTlsContext>`
    /// in the ``typed_config``.
    #[prost(message, optional, tag = "6")]
    pub transport_socket: ::core::option::Option<
        super::super::core::v3::TransportSocket,
    >,
    /// The unique name (or empty) by which this filter chain is known.
    /// Note: :ref:`filter_chain_matcher
    /// <envoy_v3_api_field_config.listener.v3.Listener.filter_chain_matcher>`
    /// requires that filter chains are uniquely named within a listener.
    #[prost(string, tag = "7")]
    pub name: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Filter {
    /// The name of the filter to instantiate. The name must match a
    /// :ref:`supported filter <config_network_filters>`.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(oneof = "filter::ConfigType", tags = "4")]
    pub config_type: ::core::option::Option<filter::ConfigType>,
}
/// Nested message and enum types in `Filter`.
pub mod filter {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum ConfigType {
        /// Filter specific configuration which depends on the filter being
        /// instantiated. See the supported filters for further documentation.
        /// \[#extension-category: envoy.filters.network\]
        #[prost(message, tag = "4")]
        TypedConfig(::prost_types::Any),
    }
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListenerFilter {
    /// The name of the filter to instantiate. The name must match a
    /// :ref:`supported filter <config_listener_filters>`.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(oneof = "listener_filter::ConfigType", tags = "2")]
    pub config_type: ::core::option::Option<listener_filter::ConfigType>,
}
/// Nested message and enum types in `ListenerFilter`.
pub mod listener_filter {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum ConfigType {
        /// Filter specific configuration which depends on the filter being
        /// instantiated. See the supported filters for further documentation.
        #[prost(message, tag = "2")]
        TypedConfig(::prost_types::Any),
    }
}
/// \[#next-free-field: 34\]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Listener {
    /// The unique name by which this listener is known. If no name is provided,
    /// Envoy will allocate an internal UUID for the listener. If the listener is
    /// to be dynamically updated or removed via :ref:`LDS <config_listeners_lds>`
    /// a unique name must be provided.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// The address that the listener should listen on. In general, the address
    /// must be unique, though that is governed by the bind rules of the OS.
    #[prost(message, optional, tag = "2")]
    pub address: ::core::option::Option<super::super::core::v3::Address>,
    /// A list of filter chains to consider for this listener. The
    /// :ref:`FilterChain <envoy_v3_api_msg_config.listener.v3.FilterChain>` with
    /// the most specific :ref:`FilterChainMatch
    /// <envoy_v3_api_msg_config.listener.v3.FilterChainMatch>` criteria is used
    /// on a connection.
    #[prost(message, repeated, tag = "3")]
    pub filter_chains: ::prost::alloc::vec::Vec<FilterChain>,
    /// Listener metadata.
    #[prost(message, optional, tag = "6")]
    pub metadata: ::core::option::Option<super::super::core::v3::Metadata>,
    /// Listener filters have the opportunity to manipulate and augment the
    /// connection metadata that is used in connection filter chain matching, for
    /// example. These filters are run before any in :ref:`filter_chains
    /// <envoy_v3_api_field_config.listener.v3.Listener.filter_chains>`. Order
    /// matters as the filters are processed sequentially right after a socket has
    /// been accepted by the listener, and before a connection is created.
    #[prost(message, repeated, tag = "9")]
    pub listener_filters: ::prost::alloc::vec::Vec<ListenerFilter>,
    /// The traffic direction of this listener.
    #[prost(enumeration = "super::super::core::v3::TrafficDirection", tag = "16")]
    pub traffic_direction: i32,
    /// When this flag is set to true, listeners set the ``SO_REUSEPORT`` socket
    /// option and create one socket for each worker thread. This makes inbound
    /// connections distribute among worker threads roughly evenly in cases where
    /// there are a high number of connections. When this flag is set to false,
    /// all worker threads share one socket. Before Linux v4.19-rc1, new TCP
    /// connections may be rejected during hot restart (see `3rd paragraph in
    /// 'soreuseport' commit message <https://github.com/torvalds/linux/commit/c617f398edd4db2b8567a28e89>`_).
    #[prost(message, optional, tag = "29")]
    pub enable_reuse_port: ::core::option::Option<bool>,
}
