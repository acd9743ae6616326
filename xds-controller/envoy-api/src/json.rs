//! Canonical-JSON decoding for the vendored message tree.
//!
//! Envoy resources are usually written as JSON (or YAML that becomes JSON)
//! following the protobuf canonical JSON mapping: lowerCamelCase or
//! original snake_case field names, durations as `"3s"` strings, bytes as
//! base64, enums by name or number, wrapper types as bare scalars, and
//! `Any` as an object carrying an `@type` key. Decoding is strict: a field
//! that is not part of the target message is an error, as is setting more
//! than one member of a oneof.
//!
//! Only the messages this crate vendors can appear inside an `Any`; an
//! unrecognized `@type` is rejected rather than passed through opaquely,
//! since the payload could not be re-encoded to wire bytes.

use prost::Message;
use serde_json::Value;

use base64::Engine as _;

mod config;
mod extensions;

/// Decodes a message from canonical protobuf JSON.
pub trait FromJson: Sized {
    /// The fully qualified protobuf message name.
    const NAME: &'static str;

    fn from_json(value: &Value) -> Result<Self, Error>;
}

/// Parses a message from raw JSON bytes.
pub fn from_slice<M: FromJson>(bytes: &[u8]) -> Result<M, Error> {
    let value = serde_json::from_slice(bytes)?;
    M::from_json(&value)
}

/// Parses a message from an already-parsed JSON value.
pub fn from_value<M: FromJson>(value: &Value) -> Result<M, Error> {
    M::from_json(value)
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("{message} must be a JSON object")]
    NotAnObject { message: &'static str },

    #[error("{message} has no field named {field:?}")]
    UnknownField { message: &'static str, field: String },

    #[error("{message}.{field} is set under both its JSON and original name")]
    DuplicateField {
        message: &'static str,
        field: &'static str,
    },

    #[error("{message}.{field} must be {expected}")]
    FieldType {
        message: &'static str,
        field: &'static str,
        expected: &'static str,
    },

    #[error("{message} sets more than one member of the {oneof:?} oneof")]
    OneofConflict {
        message: &'static str,
        oneof: &'static str,
    },

    #[error("{enum_name} has no value named {value:?}")]
    EnumName {
        enum_name: &'static str,
        value: String,
    },

    #[error("{value} is not a valid {enum_name} number")]
    EnumNumber {
        enum_name: &'static str,
        value: serde_json::Number,
    },

    #[error("{message}.{field}: {value:?} is not a valid duration")]
    Duration {
        message: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("{message}.{field} is not valid base64")]
    Base64 {
        message: &'static str,
        field: &'static str,
    },

    #[error("{message}.{field} is out of range")]
    Range {
        message: &'static str,
        field: &'static str,
    },

    #[error("{message}.{field} must carry an @type key")]
    MissingTypeUrl {
        message: &'static str,
        field: &'static str,
    },

    #[error("cannot decode {0:?}: the message type is not vendored")]
    UnsupportedTypeUrl(String),
}

/// Tracks which keys of a message object have been consumed.
///
/// Each field is looked up under both its lowerCamelCase JSON name and its
/// original snake_case name; whatever remains unconsumed when [`Fields::finish`]
/// runs is reported as an unknown field.
pub(crate) struct Fields<'a> {
    message: &'static str,
    map: &'a serde_json::Map<String, Value>,
    taken: Vec<&'a str>,
}

// === impl Fields ===

impl<'a> Fields<'a> {
    pub(crate) fn new(message: &'static str, value: &'a Value) -> Result<Self, Error> {
        let map = value
            .as_object()
            .ok_or(Error::NotAnObject { message })?;
        Ok(Self {
            message,
            map,
            taken: Vec::new(),
        })
    }

    /// Removes a field by either of its names. JSON `null` reads as absent.
    pub(crate) fn take(
        &mut self,
        json_name: &'static str,
        orig_name: &'static str,
    ) -> Result<Option<&'a Value>, Error> {
        let json = self.map.get_key_value(json_name);
        let orig = if orig_name == json_name {
            None
        } else {
            self.map.get_key_value(orig_name)
        };
        match (json, orig) {
            (Some(_), Some(_)) => Err(Error::DuplicateField {
                message: self.message,
                field: orig_name,
            }),
            (Some((key, value)), None) | (None, Some((key, value))) => {
                self.taken.push(key.as_str());
                if value.is_null() {
                    Ok(None)
                } else {
                    Ok(Some(value))
                }
            }
            (None, None) => Ok(None),
        }
    }

    /// Rejects any keys that no field consumed.
    pub(crate) fn finish(self) -> Result<(), Error> {
        for key in self.map.keys() {
            if !self.taken.iter().any(|taken| *taken == key) {
                return Err(Error::UnknownField {
                    message: self.message,
                    field: key.clone(),
                });
            }
        }
        Ok(())
    }

    fn type_error(&self, field: &'static str, expected: &'static str) -> Error {
        Error::FieldType {
            message: self.message,
            field,
            expected,
        }
    }

    pub(crate) fn string(
        &mut self,
        json: &'static str,
        orig: &'static str,
    ) -> Result<String, Error> {
        match self.take(json, orig)? {
            None => Ok(String::new()),
            Some(v) => expect_str(self.message, orig, v).map(str::to_owned),
        }
    }

    pub(crate) fn strings(
        &mut self,
        json: &'static str,
        orig: &'static str,
    ) -> Result<Vec<String>, Error> {
        match self.take(json, orig)? {
            None => Ok(Vec::new()),
            Some(v) => v
                .as_array()
                .ok_or_else(|| self.type_error(orig, "an array of strings"))?
                .iter()
                .map(|item| expect_str(self.message, orig, item).map(str::to_owned))
                .collect(),
        }
    }

    pub(crate) fn boolean(&mut self, json: &'static str, orig: &'static str) -> Result<bool, Error> {
        match self.take(json, orig)? {
            None => Ok(false),
            Some(v) => parse_bool(self.message, orig, v),
        }
    }

    /// A `google.protobuf.BoolValue`, written as a bare boolean.
    pub(crate) fn opt_bool(
        &mut self,
        json: &'static str,
        orig: &'static str,
    ) -> Result<Option<bool>, Error> {
        self.take(json, orig)?
            .map(|v| parse_bool(self.message, orig, v))
            .transpose()
    }

    pub(crate) fn uint32(&mut self, json: &'static str, orig: &'static str) -> Result<u32, Error> {
        match self.take(json, orig)? {
            None => Ok(0),
            Some(v) => parse_u32(self.message, orig, v),
        }
    }

    /// A `google.protobuf.UInt32Value`, written as a bare number.
    pub(crate) fn opt_uint32(
        &mut self,
        json: &'static str,
        orig: &'static str,
    ) -> Result<Option<u32>, Error> {
        self.take(json, orig)?
            .map(|v| parse_u32(self.message, orig, v))
            .transpose()
    }

    pub(crate) fn double(&mut self, json: &'static str, orig: &'static str) -> Result<f64, Error> {
        match self.take(json, orig)? {
            None => Ok(0.0),
            Some(v) => parse_f64(self.message, orig, v),
        }
    }

    pub(crate) fn opt_duration(
        &mut self,
        json: &'static str,
        orig: &'static str,
    ) -> Result<Option<::prost_types::Duration>, Error> {
        self.take(json, orig)?
            .map(|v| parse_duration(self.message, orig, v))
            .transpose()
    }

    pub(crate) fn opt_struct(
        &mut self,
        json: &'static str,
        orig: &'static str,
    ) -> Result<Option<::prost_types::Struct>, Error> {
        self.take(json, orig)?
            .map(|v| parse_struct(self.message, orig, v))
            .transpose()
    }

    pub(crate) fn message<M: FromJson>(
        &mut self,
        json: &'static str,
        orig: &'static str,
    ) -> Result<Option<M>, Error> {
        self.take(json, orig)?.map(M::from_json).transpose()
    }

    pub(crate) fn messages<M: FromJson>(
        &mut self,
        json: &'static str,
        orig: &'static str,
    ) -> Result<Vec<M>, Error> {
        match self.take(json, orig)? {
            None => Ok(Vec::new()),
            Some(v) => v
                .as_array()
                .ok_or_else(|| self.type_error(orig, "an array of objects"))?
                .iter()
                .map(M::from_json)
                .collect(),
        }
    }

    pub(crate) fn enumeration<E: Into<i32>>(
        &mut self,
        json: &'static str,
        orig: &'static str,
        enum_name: &'static str,
        from_str: fn(&str) -> Option<E>,
    ) -> Result<i32, Error> {
        match self.take(json, orig)? {
            None => Ok(0),
            Some(v) => parse_enum(self.message, orig, enum_name, from_str, v),
        }
    }

    pub(crate) fn any(
        &mut self,
        json: &'static str,
        orig: &'static str,
    ) -> Result<Option<::prost_types::Any>, Error> {
        self.take(json, orig)?
            .map(|v| parse_any(self.message, orig, v))
            .transpose()
    }

    pub(crate) fn any_map(
        &mut self,
        json: &'static str,
        orig: &'static str,
    ) -> Result<std::collections::BTreeMap<String, ::prost_types::Any>, Error> {
        match self.take(json, orig)? {
            None => Ok(Default::default()),
            Some(v) => v
                .as_object()
                .ok_or_else(|| self.type_error(orig, "an object"))?
                .iter()
                .map(|(key, item)| Ok((key.clone(), parse_any(self.message, orig, item)?)))
                .collect(),
        }
    }

    pub(crate) fn message_map<M: FromJson>(
        &mut self,
        json: &'static str,
        orig: &'static str,
    ) -> Result<std::collections::BTreeMap<String, M>, Error> {
        match self.take(json, orig)? {
            None => Ok(Default::default()),
            Some(v) => v
                .as_object()
                .ok_or_else(|| self.type_error(orig, "an object"))?
                .iter()
                .map(|(key, item)| Ok((key.clone(), M::from_json(item)?)))
                .collect(),
        }
    }

    pub(crate) fn struct_map(
        &mut self,
        json: &'static str,
        orig: &'static str,
    ) -> Result<std::collections::BTreeMap<String, ::prost_types::Struct>, Error> {
        match self.take(json, orig)? {
            None => Ok(Default::default()),
            Some(v) => v
                .as_object()
                .ok_or_else(|| self.type_error(orig, "an object"))?
                .iter()
                .map(|(key, item)| Ok((key.clone(), parse_struct(self.message, orig, item)?)))
                .collect(),
        }
    }
}

/// Stores a oneof member, rejecting a second assignment.
pub(crate) fn set_oneof<T>(
    slot: &mut Option<T>,
    message: &'static str,
    oneof: &'static str,
    value: T,
) -> Result<(), Error> {
    if slot.replace(value).is_some() {
        return Err(Error::OneofConflict { message, oneof });
    }
    Ok(())
}

pub(crate) fn expect_str<'a>(
    message: &'static str,
    field: &'static str,
    v: &'a Value,
) -> Result<&'a str, Error> {
    v.as_str().ok_or(Error::FieldType {
        message,
        field,
        expected: "a string",
    })
}

pub(crate) fn parse_bool(
    message: &'static str,
    field: &'static str,
    v: &Value,
) -> Result<bool, Error> {
    v.as_bool().ok_or(Error::FieldType {
        message,
        field,
        expected: "a boolean",
    })
}

pub(crate) fn parse_u32(
    message: &'static str,
    field: &'static str,
    v: &Value,
) -> Result<u32, Error> {
    match v {
        Value::Number(n) => n
            .as_u64()
            .and_then(|u| u32::try_from(u).ok())
            .or_else(|| {
                // The canonical mapping permits exactly-integral floats.
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u32::MAX))
                    .map(|f| f as u32)
            })
            .ok_or(Error::Range { message, field }),
        Value::String(s) => s.parse().map_err(|_| Error::FieldType {
            message,
            field,
            expected: "an unsigned 32-bit integer",
        }),
        _ => Err(Error::FieldType {
            message,
            field,
            expected: "an unsigned 32-bit integer",
        }),
    }
}

pub(crate) fn parse_f64(
    message: &'static str,
    field: &'static str,
    v: &Value,
) -> Result<f64, Error> {
    match v {
        Value::Number(n) => Ok(n.as_f64().unwrap_or(0.0)),
        Value::String(s) => match s.as_str() {
            "NaN" => Ok(f64::NAN),
            "Infinity" => Ok(f64::INFINITY),
            "-Infinity" => Ok(f64::NEG_INFINITY),
            other => other.parse().map_err(|_| Error::FieldType {
                message,
                field,
                expected: "a number",
            }),
        },
        _ => Err(Error::FieldType {
            message,
            field,
            expected: "a number",
        }),
    }
}

pub(crate) fn parse_bytes(
    message: &'static str,
    field: &'static str,
    v: &Value,
) -> Result<Vec<u8>, Error> {
    let text = expect_str(message, field, v)?;
    // Both the standard and URL-safe alphabets appear in the wild, with and
    // without padding.
    for engine in [
        &base64::engine::general_purpose::STANDARD,
        &base64::engine::general_purpose::STANDARD_NO_PAD,
        &base64::engine::general_purpose::URL_SAFE_NO_PAD,
    ] {
        if let Ok(bytes) = engine.decode(text) {
            return Ok(bytes);
        }
    }
    Err(Error::Base64 { message, field })
}

const MAX_DURATION_SECONDS: i64 = 315_576_000_000;

pub(crate) fn parse_duration(
    message: &'static str,
    field: &'static str,
    v: &Value,
) -> Result<::prost_types::Duration, Error> {
    let text = expect_str(message, field, v)?;
    let invalid = || Error::Duration {
        message,
        field,
        value: text.to_owned(),
    };

    let raw = text.strip_suffix('s').ok_or_else(invalid)?;
    let (negative, raw) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };
    let (secs_text, frac_text) = match raw.split_once('.') {
        Some((secs, frac)) => (secs, Some(frac)),
        None => (raw, None),
    };

    let seconds: i64 = secs_text.parse().map_err(|_| invalid())?;
    let nanos: i32 = match frac_text {
        None => 0,
        Some(frac) => {
            if frac.is_empty() || frac.len() > 9 || frac.bytes().any(|b| !b.is_ascii_digit()) {
                return Err(invalid());
            }
            let scale = 10_i32.pow(9 - frac.len() as u32);
            let frac: i32 = frac.parse().map_err(|_| invalid())?;
            frac * scale
        }
    };
    if seconds > MAX_DURATION_SECONDS {
        return Err(invalid());
    }

    Ok(::prost_types::Duration {
        seconds: if negative { -seconds } else { seconds },
        nanos: if negative { -nanos } else { nanos },
    })
}

pub(crate) fn parse_struct(
    message: &'static str,
    field: &'static str,
    v: &Value,
) -> Result<::prost_types::Struct, Error> {
    let obj = v.as_object().ok_or(Error::FieldType {
        message,
        field,
        expected: "an object",
    })?;
    Ok(::prost_types::Struct {
        fields: obj
            .iter()
            .map(|(key, item)| (key.clone(), pb_value(item)))
            .collect(),
    })
}

fn pb_value(v: &Value) -> ::prost_types::Value {
    use ::prost_types::value::Kind;
    let kind = match v {
        Value::Null => Kind::NullValue(0),
        Value::Bool(b) => Kind::BoolValue(*b),
        Value::Number(n) => Kind::NumberValue(n.as_f64().unwrap_or(0.0)),
        Value::String(s) => Kind::StringValue(s.clone()),
        Value::Array(items) => Kind::ListValue(::prost_types::ListValue {
            values: items.iter().map(pb_value).collect(),
        }),
        Value::Object(obj) => Kind::StructValue(::prost_types::Struct {
            fields: obj
                .iter()
                .map(|(key, item)| (key.clone(), pb_value(item)))
                .collect(),
        }),
    };
    ::prost_types::Value { kind: Some(kind) }
}

pub(crate) fn parse_enum<E: Into<i32>>(
    message: &'static str,
    field: &'static str,
    enum_name: &'static str,
    from_str: fn(&str) -> Option<E>,
    v: &Value,
) -> Result<i32, Error> {
    match v {
        Value::String(s) => from_str(s).map(Into::into).ok_or_else(|| Error::EnumName {
            enum_name,
            value: s.clone(),
        }),
        // Proto3 enums are open, so any in-range number is kept as-is.
        Value::Number(n) => n
            .as_i64()
            .and_then(|i| i32::try_from(i).ok())
            .ok_or_else(|| Error::EnumNumber {
                enum_name,
                value: n.clone(),
            }),
        _ => Err(Error::FieldType {
            message,
            field,
            expected: "an enum name or number",
        }),
    }
}

pub(crate) fn parse_any(
    message: &'static str,
    field: &'static str,
    v: &Value,
) -> Result<::prost_types::Any, Error> {
    let obj = v.as_object().ok_or(Error::FieldType {
        message,
        field,
        expected: "an object",
    })?;
    let type_url = obj
        .get("@type")
        .and_then(Value::as_str)
        .ok_or(Error::MissingTypeUrl { message, field })?
        .to_owned();

    let mut payload = obj.clone();
    payload.remove("@type");
    let encoded = decode_any(&type_url, &Value::Object(payload))?;

    Ok(::prost_types::Any {
        type_url,
        value: encoded,
    })
}

fn encode<M: FromJson + Message>(value: &Value) -> Result<Vec<u8>, Error> {
    Ok(M::from_json(value)?.encode_to_vec())
}

/// Decodes an `Any` payload to wire bytes by dispatching on the message name.
fn decode_any(type_url: &str, value: &Value) -> Result<Vec<u8>, Error> {
    use crate::config::trace::v3::{OpenTelemetryConfig, ZipkinConfig};
    use crate::extensions::access_loggers::file::v3::FileAccessLog;
    use crate::extensions::access_loggers::stream::v3::{StderrAccessLog, StdoutAccessLog};
    use crate::extensions::filters::http::rbac::v3::{Rbac, RbacPerRoute};
    use crate::extensions::filters::http::router::v3::Router;
    use crate::extensions::filters::listener::tls_inspector::v3::TlsInspector;
    use crate::extensions::filters::network::http_connection_manager::v3::HttpConnectionManager;
    use crate::extensions::transport_sockets::tls::v3::{
        DownstreamTlsContext, UpstreamTlsContext,
    };

    match crate::message_name(type_url) {
        HttpConnectionManager::NAME => encode::<HttpConnectionManager>(value),
        Router::NAME => encode::<Router>(value),
        Rbac::NAME => encode::<Rbac>(value),
        RbacPerRoute::NAME => encode::<RbacPerRoute>(value),
        TlsInspector::NAME => encode::<TlsInspector>(value),
        FileAccessLog::NAME => encode::<FileAccessLog>(value),
        StdoutAccessLog::NAME => encode::<StdoutAccessLog>(value),
        StderrAccessLog::NAME => encode::<StderrAccessLog>(value),
        DownstreamTlsContext::NAME => encode::<DownstreamTlsContext>(value),
        UpstreamTlsContext::NAME => encode::<UpstreamTlsContext>(value),
        ZipkinConfig::NAME => encode::<ZipkinConfig>(value),
        OpenTelemetryConfig::NAME => encode::<OpenTelemetryConfig>(value),
        _ => Err(Error::UnsupportedTypeUrl(type_url.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::core::v3::{socket_address, Address, SocketAddress};
    use crate::config::listener::v3::Listener;
    use crate::config::route::v3::{route, Route, VirtualHost};

    #[test]
    fn accepts_both_field_name_forms() {
        let camel: SocketAddress =
            from_slice(br#"{"address": "0.0.0.0", "portValue": 8080}"#).unwrap();
        let snake: SocketAddress =
            from_slice(br#"{"address": "0.0.0.0", "port_value": 8080}"#).unwrap();
        assert_eq!(camel, snake);
        assert_eq!(
            camel.port_specifier,
            Some(socket_address::PortSpecifier::PortValue(8080))
        );
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = from_slice::<Listener>(br#"{"name": "http", "bogus": 1}"#).unwrap_err();
        assert!(matches!(err, Error::UnknownField { field, .. } if field == "bogus"));
    }

    #[test]
    fn rejects_oneof_conflicts() {
        let err = from_slice::<Address>(
            br#"{"socketAddress": {"address": "::"}, "pipe": {"path": "/run/envoy.sock"}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::OneofConflict { .. }));
    }

    #[test]
    fn routes_decode_actions_and_filter_overrides() {
        let vh: VirtualHost = from_slice(
            br#"{
                "name": "example",
                "domains": ["example.com"],
                "routes": [{
                    "match": {"prefix": "/"},
                    "route": {"cluster": "backend", "timeout": "2.5s"}
                }]
            }"#,
        )
        .unwrap();
        let action = vh.routes[0].action.as_ref().unwrap();
        match action {
            route::Action::Route(route) => {
                let timeout = route.timeout.as_ref().unwrap();
                assert_eq!((timeout.seconds, timeout.nanos), (2, 500_000_000));
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn any_requires_a_vendored_type() {
        let err = from_slice::<Route>(
            br#"{
                "match": {"prefix": "/"},
                "route": {"cluster": "backend"},
                "typedPerFilterConfig": {
                    "envoy.filters.http.lua": {
                        "@type": "type.googleapis.com/envoy.extensions.filters.http.lua.v3.Lua"
                    }
                }
            }"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnsupportedTypeUrl(_)));
    }

    #[test]
    fn durations_must_carry_a_unit() {
        let err = from_slice::<Route>(
            br#"{"match": {"prefix": "/"}, "route": {"cluster": "c", "timeout": "250ms"}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Duration { .. }));
    }

    #[test]
    fn enums_decode_by_name_and_number() {
        let by_name: SocketAddress =
            from_slice(br#"{"protocol": "UDP", "address": "::", "portValue": 53}"#).unwrap();
        let by_number: SocketAddress =
            from_slice(br#"{"protocol": 1, "address": "::", "portValue": 53}"#).unwrap();
        assert_eq!(by_name.protocol, by_number.protocol);
        assert!(matches!(
            from_slice::<SocketAddress>(br#"{"protocol": "QUIC", "address": "::"}"#),
            Err(Error::EnumName { .. })
        ));
    }
}
