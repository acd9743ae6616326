//! Canonical names of built-in Envoy extensions.
//!
//! Envoy selects filter and transport socket implementations by these names;
//! the `typed_config` carried next to the name must agree with the extension
//! it selects.

/// HTTP connection manager network filter.
pub const HTTP_CONNECTION_MANAGER: &str = "envoy.filters.network.http_connection_manager";

/// Router HTTP filter. Must be the terminal filter in an HTTP filter chain.
pub const HTTP_ROUTER: &str = "envoy.filters.http.router";

/// Role-based access control HTTP filter.
pub const HTTP_RBAC: &str = "envoy.filters.http.rbac";

/// TLS inspector listener filter.
pub const TLS_INSPECTOR: &str = "envoy.filters.listener.tls_inspector";

/// TLS transport socket.
pub const TRANSPORT_SOCKET_TLS: &str = "envoy.transport_sockets.tls";

/// File access logger.
pub const FILE_ACCESS_LOG: &str = "envoy.access_loggers.file";

/// Stdout access logger.
pub const STDOUT_ACCESS_LOG: &str = "envoy.access_loggers.stdout";

/// Stderr access logger.
pub const STDERR_ACCESS_LOG: &str = "envoy.access_loggers.stderr";

/// Zipkin tracer.
pub const TRACER_ZIPKIN: &str = "envoy.tracers.zipkin";

/// OpenTelemetry tracer.
pub const TRACER_OPENTELEMETRY: &str = "envoy.tracers.opentelemetry";
