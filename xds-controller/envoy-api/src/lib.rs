//! Vendored Envoy xDS v3 API types.
//!
//! The message modules mirror the upstream protobuf package layout
//! (`envoy.config.listener.v3` lives at [`config::listener::v3`] and so on)
//! and carry prost-generated definitions pruned to the resources this
//! control plane materializes. The `envoy.type` packages are mapped to
//! [`kind`] because `type` is a reserved word.
//!
//! [`json`] implements the protobuf JSON mapping for these types and
//! [`validate`] the structural checks applied after decoding.

#![allow(
    clippy::doc_markdown,
    clippy::use_self,
    clippy::enum_variant_names,
    clippy::large_enum_variant
)]

pub mod config;
pub mod extensions;
pub mod google;
pub mod json;
pub mod kind;
pub mod service;
pub mod validate;
pub mod wellknown;

/// Prefix every `google.protobuf.Any` type URL carries.
pub const TYPE_URL_PREFIX: &str = "type.googleapis.com";

/// Returns the `Any` type URL for a fully qualified protobuf message name.
pub fn type_url(message_name: &str) -> String {
    format!("{TYPE_URL_PREFIX}/{message_name}")
}

/// Strips the `type.googleapis.com/` prefix from an `Any` type URL.
///
/// URLs without a `/` are returned unchanged, per the protobuf spec which
/// only requires the last path segment to name the message.
pub fn message_name(type_url: &str) -> &str {
    type_url.rsplit_once('/').map_or(type_url, |(_, name)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_url_round_trip() {
        let url = type_url("envoy.config.listener.v3.Listener");
        assert_eq!(url, "type.googleapis.com/envoy.config.listener.v3.Listener");
        assert_eq!(message_name(&url), "envoy.config.listener.v3.Listener");
        assert_eq!(message_name("envoy.config.listener.v3.Listener"), "envoy.config.listener.v3.Listener");
    }
}
