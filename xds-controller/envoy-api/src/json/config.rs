//! Decoders for the `envoy.config.*` and `envoy.type.*` packages.

use serde_json::Value;

use super::{
    expect_str, parse_any, parse_bool, parse_bytes, parse_enum, parse_struct, parse_u32,
    set_oneof, Error, Fields, FromJson,
};
use crate::config::accesslog::v3 as accesslog;
use crate::config::cluster::v3 as cluster;
use crate::config::core::v3 as core;
use crate::config::endpoint::v3 as endpoint;
use crate::config::listener::v3 as listener;
use crate::config::rbac::v3 as rbac;
use crate::config::route::v3 as route;
use crate::config::trace::v3 as trace;
use crate::kind::matcher::v3 as matcher;
use crate::kind::v3 as kind;

// --- envoy.config.core.v3 ---

impl FromJson for core::Locality {
    const NAME: &'static str = "envoy.config.core.v3.Locality";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let locality = Self {
            region: f.string("region", "region")?,
            zone: f.string("zone", "zone")?,
            sub_zone: f.string("subZone", "sub_zone")?,
        };
        f.finish()?;
        Ok(locality)
    }
}

impl FromJson for core::Metadata {
    const NAME: &'static str = "envoy.config.core.v3.Metadata";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let metadata = Self {
            filter_metadata: f.struct_map("filterMetadata", "filter_metadata")?,
        };
        f.finish()?;
        Ok(metadata)
    }
}

impl FromJson for core::HeaderValue {
    const NAME: &'static str = "envoy.config.core.v3.HeaderValue";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let header = Self {
            key: f.string("key", "key")?,
            value: f.string("value", "value")?,
        };
        f.finish()?;
        Ok(header)
    }
}

impl FromJson for core::HeaderValueOption {
    const NAME: &'static str = "envoy.config.core.v3.HeaderValueOption";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let option = Self {
            header: f.message("header", "header")?,
            append_action: f.enumeration(
                "appendAction",
                "append_action",
                "envoy.config.core.v3.HeaderValueOption.HeaderAppendAction",
                core::header_value_option::HeaderAppendAction::from_str_name,
            )?,
        };
        f.finish()?;
        Ok(option)
    }
}

impl FromJson for core::DataSource {
    const NAME: &'static str = "envoy.config.core.v3.DataSource";

    fn from_json(value: &Value) -> Result<Self, Error> {
        use core::data_source::Specifier;
        let mut f = Fields::new(Self::NAME, value)?;
        let mut specifier = None;
        if let Some(v) = f.take("filename", "filename")? {
            let filename = expect_str(Self::NAME, "filename", v)?.to_owned();
            set_oneof(&mut specifier, Self::NAME, "specifier", Specifier::Filename(filename))?;
        }
        if let Some(v) = f.take("inlineBytes", "inline_bytes")? {
            let bytes = parse_bytes(Self::NAME, "inline_bytes", v)?;
            set_oneof(&mut specifier, Self::NAME, "specifier", Specifier::InlineBytes(bytes))?;
        }
        if let Some(v) = f.take("inlineString", "inline_string")? {
            let text = expect_str(Self::NAME, "inline_string", v)?.to_owned();
            set_oneof(&mut specifier, Self::NAME, "specifier", Specifier::InlineString(text))?;
        }
        if let Some(v) = f.take("environmentVariable", "environment_variable")? {
            let var = expect_str(Self::NAME, "environment_variable", v)?.to_owned();
            set_oneof(
                &mut specifier,
                Self::NAME,
                "specifier",
                Specifier::EnvironmentVariable(var),
            )?;
        }
        f.finish()?;
        Ok(Self { specifier })
    }
}

impl FromJson for core::CidrRange {
    const NAME: &'static str = "envoy.config.core.v3.CidrRange";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let range = Self {
            address_prefix: f.string("addressPrefix", "address_prefix")?,
            prefix_len: f.opt_uint32("prefixLen", "prefix_len")?,
        };
        f.finish()?;
        Ok(range)
    }
}

impl FromJson for core::Pipe {
    const NAME: &'static str = "envoy.config.core.v3.Pipe";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let pipe = Self {
            path: f.string("path", "path")?,
            mode: f.uint32("mode", "mode")?,
        };
        f.finish()?;
        Ok(pipe)
    }
}

impl FromJson for core::SocketAddress {
    const NAME: &'static str = "envoy.config.core.v3.SocketAddress";

    fn from_json(value: &Value) -> Result<Self, Error> {
        use core::socket_address::PortSpecifier;
        let mut f = Fields::new(Self::NAME, value)?;
        let protocol = f.enumeration(
            "protocol",
            "protocol",
            "envoy.config.core.v3.SocketAddress.Protocol",
            core::socket_address::Protocol::from_str_name,
        )?;
        let address = f.string("address", "address")?;
        let resolver_name = f.string("resolverName", "resolver_name")?;
        let ipv4_compat = f.boolean("ipv4Compat", "ipv4_compat")?;
        let mut port_specifier = None;
        if let Some(v) = f.take("portValue", "port_value")? {
            let port = parse_u32(Self::NAME, "port_value", v)?;
            set_oneof(
                &mut port_specifier,
                Self::NAME,
                "port_specifier",
                PortSpecifier::PortValue(port),
            )?;
        }
        if let Some(v) = f.take("namedPort", "named_port")? {
            let named = expect_str(Self::NAME, "named_port", v)?.to_owned();
            set_oneof(
                &mut port_specifier,
                Self::NAME,
                "port_specifier",
                PortSpecifier::NamedPort(named),
            )?;
        }
        f.finish()?;
        Ok(Self {
            protocol,
            address,
            resolver_name,
            ipv4_compat,
            port_specifier,
        })
    }
}

impl FromJson for core::Address {
    const NAME: &'static str = "envoy.config.core.v3.Address";

    fn from_json(value: &Value) -> Result<Self, Error> {
        use core::address::Address;
        let mut f = Fields::new(Self::NAME, value)?;
        let mut address = None;
        if let Some(v) = f.take("socketAddress", "socket_address")? {
            let socket = core::SocketAddress::from_json(v)?;
            set_oneof(&mut address, Self::NAME, "address", Address::SocketAddress(socket))?;
        }
        if let Some(v) = f.take("pipe", "pipe")? {
            let pipe = core::Pipe::from_json(v)?;
            set_oneof(&mut address, Self::NAME, "address", Address::Pipe(pipe))?;
        }
        f.finish()?;
        Ok(Self { address })
    }
}

impl FromJson for core::TransportSocket {
    const NAME: &'static str = "envoy.config.core.v3.TransportSocket";

    fn from_json(value: &Value) -> Result<Self, Error> {
        use core::transport_socket::ConfigType;
        let mut f = Fields::new(Self::NAME, value)?;
        let name = f.string("name", "name")?;
        let mut config_type = None;
        if let Some(v) = f.take("typedConfig", "typed_config")? {
            let any = parse_any(Self::NAME, "typed_config", v)?;
            set_oneof(&mut config_type, Self::NAME, "config_type", ConfigType::TypedConfig(any))?;
        }
        f.finish()?;
        Ok(Self { name, config_type })
    }
}

impl FromJson for core::AggregatedConfigSource {
    const NAME: &'static str = "envoy.config.core.v3.AggregatedConfigSource";

    fn from_json(value: &Value) -> Result<Self, Error> {
        Fields::new(Self::NAME, value)?.finish()?;
        Ok(Self {})
    }
}

impl FromJson for core::SelfConfigSource {
    const NAME: &'static str = "envoy.config.core.v3.SelfConfigSource";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let source = Self {
            transport_api_version: f.enumeration(
                "transportApiVersion",
                "transport_api_version",
                "envoy.config.core.v3.ApiVersion",
                core::ApiVersion::from_str_name,
            )?,
        };
        f.finish()?;
        Ok(source)
    }
}

impl FromJson for core::ConfigSource {
    const NAME: &'static str = "envoy.config.core.v3.ConfigSource";

    fn from_json(value: &Value) -> Result<Self, Error> {
        use core::config_source::ConfigSourceSpecifier;
        let mut f = Fields::new(Self::NAME, value)?;
        let initial_fetch_timeout = f.opt_duration("initialFetchTimeout", "initial_fetch_timeout")?;
        let resource_api_version = f.enumeration(
            "resourceApiVersion",
            "resource_api_version",
            "envoy.config.core.v3.ApiVersion",
            core::ApiVersion::from_str_name,
        )?;
        let mut specifier = None;
        if let Some(v) = f.take("path", "path")? {
            let path = expect_str(Self::NAME, "path", v)?.to_owned();
            set_oneof(
                &mut specifier,
                Self::NAME,
                "config_source_specifier",
                ConfigSourceSpecifier::Path(path),
            )?;
        }
        if let Some(v) = f.take("ads", "ads")? {
            let ads = core::AggregatedConfigSource::from_json(v)?;
            set_oneof(
                &mut specifier,
                Self::NAME,
                "config_source_specifier",
                ConfigSourceSpecifier::Ads(ads),
            )?;
        }
        if let Some(v) = f.take("self", "self")? {
            let this = core::SelfConfigSource::from_json(v)?;
            set_oneof(
                &mut specifier,
                Self::NAME,
                "config_source_specifier",
                ConfigSourceSpecifier::Self_(this),
            )?;
        }
        f.finish()?;
        Ok(Self {
            initial_fetch_timeout,
            resource_api_version,
            config_source_specifier: specifier,
        })
    }
}

impl FromJson for core::grpc_service::EnvoyGrpc {
    const NAME: &'static str = "envoy.config.core.v3.GrpcService.EnvoyGrpc";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let grpc = Self {
            cluster_name: f.string("clusterName", "cluster_name")?,
            authority: f.string("authority", "authority")?,
        };
        f.finish()?;
        Ok(grpc)
    }
}

impl FromJson for core::GrpcService {
    const NAME: &'static str = "envoy.config.core.v3.GrpcService";

    fn from_json(value: &Value) -> Result<Self, Error> {
        use core::grpc_service::TargetSpecifier;
        let mut f = Fields::new(Self::NAME, value)?;
        let timeout = f.opt_duration("timeout", "timeout")?;
        let initial_metadata = f.messages("initialMetadata", "initial_metadata")?;
        let mut target = None;
        if let Some(v) = f.take("envoyGrpc", "envoy_grpc")? {
            let envoy_grpc = core::grpc_service::EnvoyGrpc::from_json(v)?;
            set_oneof(
                &mut target,
                Self::NAME,
                "target_specifier",
                TargetSpecifier::EnvoyGrpc(envoy_grpc),
            )?;
        }
        f.finish()?;
        Ok(Self {
            timeout,
            initial_metadata,
            target_specifier: target,
        })
    }
}

impl FromJson for core::SubstitutionFormatString {
    const NAME: &'static str = "envoy.config.core.v3.SubstitutionFormatString";

    fn from_json(value: &Value) -> Result<Self, Error> {
        use core::substitution_format_string::Format;
        let mut f = Fields::new(Self::NAME, value)?;
        let omit_empty_values = f.boolean("omitEmptyValues", "omit_empty_values")?;
        let content_type = f.string("contentType", "content_type")?;
        let mut format = None;
        if let Some(v) = f.take("textFormat", "text_format")? {
            let text = expect_str(Self::NAME, "text_format", v)?.to_owned();
            set_oneof(&mut format, Self::NAME, "format", Format::TextFormat(text))?;
        }
        if let Some(v) = f.take("jsonFormat", "json_format")? {
            let json = parse_struct(Self::NAME, "json_format", v)?;
            set_oneof(&mut format, Self::NAME, "format", Format::JsonFormat(json))?;
        }
        if let Some(v) = f.take("textFormatSource", "text_format_source")? {
            let source = core::DataSource::from_json(v)?;
            set_oneof(&mut format, Self::NAME, "format", Format::TextFormatSource(source))?;
        }
        f.finish()?;
        Ok(Self {
            omit_empty_values,
            content_type,
            format,
        })
    }
}

// --- envoy.type.v3 ---

impl FromJson for kind::Percent {
    const NAME: &'static str = "envoy.type.v3.Percent";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let percent = Self {
            value: f.double("value", "value")?,
        };
        f.finish()?;
        Ok(percent)
    }
}

impl FromJson for matcher::regex_matcher::GoogleRe2 {
    const NAME: &'static str = "envoy.type.matcher.v3.RegexMatcher.GoogleRE2";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        // The historical max_program_size knob is obsolete and ignored.
        let _ = f.take("maxProgramSize", "max_program_size")?;
        f.finish()?;
        Ok(Self {})
    }
}

impl FromJson for matcher::RegexMatcher {
    const NAME: &'static str = "envoy.type.matcher.v3.RegexMatcher";

    fn from_json(value: &Value) -> Result<Self, Error> {
        use matcher::regex_matcher::EngineType;
        let mut f = Fields::new(Self::NAME, value)?;
        let regex = f.string("regex", "regex")?;
        let mut engine_type = None;
        if let Some(v) = f.take("googleRe2", "google_re2")? {
            let re2 = matcher::regex_matcher::GoogleRe2::from_json(v)?;
            set_oneof(&mut engine_type, Self::NAME, "engine_type", EngineType::GoogleRe2(re2))?;
        }
        f.finish()?;
        Ok(Self { regex, engine_type })
    }
}

impl FromJson for matcher::StringMatcher {
    const NAME: &'static str = "envoy.type.matcher.v3.StringMatcher";

    fn from_json(value: &Value) -> Result<Self, Error> {
        use matcher::string_matcher::MatchPattern;
        let mut f = Fields::new(Self::NAME, value)?;
        let ignore_case = f.boolean("ignoreCase", "ignore_case")?;
        let mut pattern = None;
        if let Some(v) = f.take("exact", "exact")? {
            let exact = expect_str(Self::NAME, "exact", v)?.to_owned();
            set_oneof(&mut pattern, Self::NAME, "match_pattern", MatchPattern::Exact(exact))?;
        }
        if let Some(v) = f.take("prefix", "prefix")? {
            let prefix = expect_str(Self::NAME, "prefix", v)?.to_owned();
            set_oneof(&mut pattern, Self::NAME, "match_pattern", MatchPattern::Prefix(prefix))?;
        }
        if let Some(v) = f.take("suffix", "suffix")? {
            let suffix = expect_str(Self::NAME, "suffix", v)?.to_owned();
            set_oneof(&mut pattern, Self::NAME, "match_pattern", MatchPattern::Suffix(suffix))?;
        }
        if let Some(v) = f.take("safeRegex", "safe_regex")? {
            let regex = matcher::RegexMatcher::from_json(v)?;
            set_oneof(&mut pattern, Self::NAME, "match_pattern", MatchPattern::SafeRegex(regex))?;
        }
        if let Some(v) = f.take("contains", "contains")? {
            let contains = expect_str(Self::NAME, "contains", v)?.to_owned();
            set_oneof(&mut pattern, Self::NAME, "match_pattern", MatchPattern::Contains(contains))?;
        }
        f.finish()?;
        Ok(Self {
            ignore_case,
            match_pattern: pattern,
        })
    }
}

impl FromJson for matcher::PathMatcher {
    const NAME: &'static str = "envoy.type.matcher.v3.PathMatcher";

    fn from_json(value: &Value) -> Result<Self, Error> {
        use matcher::path_matcher::Rule;
        let mut f = Fields::new(Self::NAME, value)?;
        let mut rule = None;
        if let Some(v) = f.take("path", "path")? {
            let path = matcher::StringMatcher::from_json(v)?;
            set_oneof(&mut rule, Self::NAME, "rule", Rule::Path(path))?;
        }
        f.finish()?;
        Ok(Self { rule })
    }
}

// --- envoy.config.listener.v3 ---

impl FromJson for listener::FilterChainMatch {
    const NAME: &'static str = "envoy.config.listener.v3.FilterChainMatch";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let chain_match = Self {
            destination_port: f.opt_uint32("destinationPort", "destination_port")?,
            transport_protocol: f.string("transportProtocol", "transport_protocol")?,
            server_names: f.strings("serverNames", "server_names")?,
        };
        f.finish()?;
        Ok(chain_match)
    }
}

impl FromJson for listener::FilterChain {
    const NAME: &'static str = "envoy.config.listener.v3.FilterChain";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let chain = Self {
            filter_chain_match: f.message("filterChainMatch", "filter_chain_match")?,
            filters: f.messages("filters", "filters")?,
            transport_socket: f.message("transportSocket", "transport_socket")?,
            name: f.string("name", "name")?,
        };
        f.finish()?;
        Ok(chain)
    }
}

impl FromJson for listener::Filter {
    const NAME: &'static str = "envoy.config.listener.v3.Filter";

    fn from_json(value: &Value) -> Result<Self, Error> {
        use listener::filter::ConfigType;
        let mut f = Fields::new(Self::NAME, value)?;
        let name = f.string("name", "name")?;
        let mut config_type = None;
        if let Some(v) = f.take("typedConfig", "typed_config")? {
            let any = parse_any(Self::NAME, "typed_config", v)?;
            set_oneof(&mut config_type, Self::NAME, "config_type", ConfigType::TypedConfig(any))?;
        }
        f.finish()?;
        Ok(Self { name, config_type })
    }
}

impl FromJson for listener::ListenerFilter {
    const NAME: &'static str = "envoy.config.listener.v3.ListenerFilter";

    fn from_json(value: &Value) -> Result<Self, Error> {
        use listener::listener_filter::ConfigType;
        let mut f = Fields::new(Self::NAME, value)?;
        let name = f.string("name", "name")?;
        let mut config_type = None;
        if let Some(v) = f.take("typedConfig", "typed_config")? {
            let any = parse_any(Self::NAME, "typed_config", v)?;
            set_oneof(&mut config_type, Self::NAME, "config_type", ConfigType::TypedConfig(any))?;
        }
        f.finish()?;
        Ok(Self { name, config_type })
    }
}

impl FromJson for listener::Listener {
    const NAME: &'static str = "envoy.config.listener.v3.Listener";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let listener = Self {
            name: f.string("name", "name")?,
            address: f.message("address", "address")?,
            filter_chains: f.messages("filterChains", "filter_chains")?,
            metadata: f.message("metadata", "metadata")?,
            listener_filters: f.messages("listenerFilters", "listener_filters")?,
            traffic_direction: f.enumeration(
                "trafficDirection",
                "traffic_direction",
                "envoy.config.core.v3.TrafficDirection",
                core::TrafficDirection::from_str_name,
            )?,
            enable_reuse_port: f.opt_bool("enableReusePort", "enable_reuse_port")?,
        };
        f.finish()?;
        Ok(listener)
    }
}

// --- envoy.config.route.v3 ---

impl FromJson for route::RouteConfiguration {
    const NAME: &'static str = "envoy.config.route.v3.RouteConfiguration";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let config = Self {
            name: f.string("name", "name")?,
            virtual_hosts: f.messages("virtualHosts", "virtual_hosts")?,
        };
        f.finish()?;
        Ok(config)
    }
}

impl FromJson for route::VirtualHost {
    const NAME: &'static str = "envoy.config.route.v3.VirtualHost";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let vh = Self {
            name: f.string("name", "name")?,
            domains: f.strings("domains", "domains")?,
            routes: f.messages("routes", "routes")?,
            request_headers_to_add: f.messages("requestHeadersToAdd", "request_headers_to_add")?,
            request_headers_to_remove: f
                .strings("requestHeadersToRemove", "request_headers_to_remove")?,
            response_headers_to_add: f
                .messages("responseHeadersToAdd", "response_headers_to_add")?,
            response_headers_to_remove: f
                .strings("responseHeadersToRemove", "response_headers_to_remove")?,
            typed_per_filter_config: f.any_map("typedPerFilterConfig", "typed_per_filter_config")?,
            retry_policy: f.message("retryPolicy", "retry_policy")?,
        };
        f.finish()?;
        Ok(vh)
    }
}

impl FromJson for route::Route {
    const NAME: &'static str = "envoy.config.route.v3.Route";

    fn from_json(value: &Value) -> Result<Self, Error> {
        use route::route::Action;
        let mut f = Fields::new(Self::NAME, value)?;
        let name = f.string("name", "name")?;
        let r#match = f.message("match", "match")?;
        let typed_per_filter_config = f.any_map("typedPerFilterConfig", "typed_per_filter_config")?;
        let request_headers_to_add = f.messages("requestHeadersToAdd", "request_headers_to_add")?;
        let request_headers_to_remove =
            f.strings("requestHeadersToRemove", "request_headers_to_remove")?;
        let response_headers_to_add =
            f.messages("responseHeadersToAdd", "response_headers_to_add")?;
        let response_headers_to_remove =
            f.strings("responseHeadersToRemove", "response_headers_to_remove")?;
        let mut action = None;
        if let Some(v) = f.take("route", "route")? {
            let route = route::RouteAction::from_json(v)?;
            set_oneof(&mut action, Self::NAME, "action", Action::Route(route))?;
        }
        if let Some(v) = f.take("redirect", "redirect")? {
            let redirect = route::RedirectAction::from_json(v)?;
            set_oneof(&mut action, Self::NAME, "action", Action::Redirect(redirect))?;
        }
        if let Some(v) = f.take("directResponse", "direct_response")? {
            let direct = route::DirectResponseAction::from_json(v)?;
            set_oneof(&mut action, Self::NAME, "action", Action::DirectResponse(direct))?;
        }
        f.finish()?;
        Ok(Self {
            name,
            r#match,
            typed_per_filter_config,
            request_headers_to_add,
            request_headers_to_remove,
            response_headers_to_add,
            response_headers_to_remove,
            action,
        })
    }
}

impl FromJson for route::RouteMatch {
    const NAME: &'static str = "envoy.config.route.v3.RouteMatch";

    fn from_json(value: &Value) -> Result<Self, Error> {
        use route::route_match::PathSpecifier;
        let mut f = Fields::new(Self::NAME, value)?;
        let case_sensitive = f.opt_bool("caseSensitive", "case_sensitive")?;
        let headers = f.messages("headers", "headers")?;
        let mut path_specifier = None;
        if let Some(v) = f.take("prefix", "prefix")? {
            let prefix = expect_str(Self::NAME, "prefix", v)?.to_owned();
            set_oneof(
                &mut path_specifier,
                Self::NAME,
                "path_specifier",
                PathSpecifier::Prefix(prefix),
            )?;
        }
        if let Some(v) = f.take("path", "path")? {
            let path = expect_str(Self::NAME, "path", v)?.to_owned();
            set_oneof(
                &mut path_specifier,
                Self::NAME,
                "path_specifier",
                PathSpecifier::Path(path),
            )?;
        }
        if let Some(v) = f.take("safeRegex", "safe_regex")? {
            let regex = matcher::RegexMatcher::from_json(v)?;
            set_oneof(
                &mut path_specifier,
                Self::NAME,
                "path_specifier",
                PathSpecifier::SafeRegex(regex),
            )?;
        }
        f.finish()?;
        Ok(Self {
            case_sensitive,
            headers,
            path_specifier,
        })
    }
}

impl FromJson for route::RetryPolicy {
    const NAME: &'static str = "envoy.config.route.v3.RetryPolicy";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let policy = Self {
            retry_on: f.string("retryOn", "retry_on")?,
            num_retries: f.opt_uint32("numRetries", "num_retries")?,
            per_try_timeout: f.opt_duration("perTryTimeout", "per_try_timeout")?,
        };
        f.finish()?;
        Ok(policy)
    }
}

impl FromJson for route::route_action::UpgradeConfig {
    const NAME: &'static str = "envoy.config.route.v3.RouteAction.UpgradeConfig";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let config = Self {
            upgrade_type: f.string("upgradeType", "upgrade_type")?,
            enabled: f.opt_bool("enabled", "enabled")?,
        };
        f.finish()?;
        Ok(config)
    }
}

impl FromJson for route::RouteAction {
    const NAME: &'static str = "envoy.config.route.v3.RouteAction";

    fn from_json(value: &Value) -> Result<Self, Error> {
        use route::route_action::{ClusterSpecifier, HostRewriteSpecifier};
        let mut f = Fields::new(Self::NAME, value)?;
        let prefix_rewrite = f.string("prefixRewrite", "prefix_rewrite")?;
        let timeout = f.opt_duration("timeout", "timeout")?;
        let idle_timeout = f.opt_duration("idleTimeout", "idle_timeout")?;
        let retry_policy = f.message("retryPolicy", "retry_policy")?;
        let upgrade_configs = f.messages("upgradeConfigs", "upgrade_configs")?;
        let mut cluster_specifier = None;
        if let Some(v) = f.take("cluster", "cluster")? {
            let cluster = expect_str(Self::NAME, "cluster", v)?.to_owned();
            set_oneof(
                &mut cluster_specifier,
                Self::NAME,
                "cluster_specifier",
                ClusterSpecifier::Cluster(cluster),
            )?;
        }
        if let Some(v) = f.take("clusterHeader", "cluster_header")? {
            let header = expect_str(Self::NAME, "cluster_header", v)?.to_owned();
            set_oneof(
                &mut cluster_specifier,
                Self::NAME,
                "cluster_specifier",
                ClusterSpecifier::ClusterHeader(header),
            )?;
        }
        if let Some(v) = f.take("weightedClusters", "weighted_clusters")? {
            let weighted = route::WeightedCluster::from_json(v)?;
            set_oneof(
                &mut cluster_specifier,
                Self::NAME,
                "cluster_specifier",
                ClusterSpecifier::WeightedClusters(weighted),
            )?;
        }
        let mut host_rewrite_specifier = None;
        if let Some(v) = f.take("hostRewriteLiteral", "host_rewrite_literal")? {
            let host = expect_str(Self::NAME, "host_rewrite_literal", v)?.to_owned();
            set_oneof(
                &mut host_rewrite_specifier,
                Self::NAME,
                "host_rewrite_specifier",
                HostRewriteSpecifier::HostRewriteLiteral(host),
            )?;
        }
        if let Some(v) = f.take("autoHostRewrite", "auto_host_rewrite")? {
            let auto = parse_bool(Self::NAME, "auto_host_rewrite", v)?;
            set_oneof(
                &mut host_rewrite_specifier,
                Self::NAME,
                "host_rewrite_specifier",
                HostRewriteSpecifier::AutoHostRewrite(auto),
            )?;
        }
        f.finish()?;
        Ok(Self {
            prefix_rewrite,
            timeout,
            idle_timeout,
            retry_policy,
            upgrade_configs,
            cluster_specifier,
            host_rewrite_specifier,
        })
    }
}

impl FromJson for route::weighted_cluster::ClusterWeight {
    const NAME: &'static str = "envoy.config.route.v3.WeightedCluster.ClusterWeight";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let weight = Self {
            name: f.string("name", "name")?,
            weight: f.opt_uint32("weight", "weight")?,
            typed_per_filter_config: f.any_map("typedPerFilterConfig", "typed_per_filter_config")?,
        };
        f.finish()?;
        Ok(weight)
    }
}

impl FromJson for route::WeightedCluster {
    const NAME: &'static str = "envoy.config.route.v3.WeightedCluster";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let weighted = Self {
            clusters: f.messages("clusters", "clusters")?,
        };
        f.finish()?;
        Ok(weighted)
    }
}

impl FromJson for route::RedirectAction {
    const NAME: &'static str = "envoy.config.route.v3.RedirectAction";

    fn from_json(value: &Value) -> Result<Self, Error> {
        use route::redirect_action::{PathRewriteSpecifier, SchemeRewriteSpecifier};
        let mut f = Fields::new(Self::NAME, value)?;
        let host_redirect = f.string("hostRedirect", "host_redirect")?;
        let port_redirect = f.uint32("portRedirect", "port_redirect")?;
        let response_code = f.enumeration(
            "responseCode",
            "response_code",
            "envoy.config.route.v3.RedirectAction.RedirectResponseCode",
            route::redirect_action::RedirectResponseCode::from_str_name,
        )?;
        let strip_query = f.boolean("stripQuery", "strip_query")?;
        let mut scheme = None;
        if let Some(v) = f.take("httpsRedirect", "https_redirect")? {
            let https = parse_bool(Self::NAME, "https_redirect", v)?;
            set_oneof(
                &mut scheme,
                Self::NAME,
                "scheme_rewrite_specifier",
                SchemeRewriteSpecifier::HttpsRedirect(https),
            )?;
        }
        if let Some(v) = f.take("schemeRedirect", "scheme_redirect")? {
            let value = expect_str(Self::NAME, "scheme_redirect", v)?.to_owned();
            set_oneof(
                &mut scheme,
                Self::NAME,
                "scheme_rewrite_specifier",
                SchemeRewriteSpecifier::SchemeRedirect(value),
            )?;
        }
        let mut path = None;
        if let Some(v) = f.take("pathRedirect", "path_redirect")? {
            let value = expect_str(Self::NAME, "path_redirect", v)?.to_owned();
            set_oneof(
                &mut path,
                Self::NAME,
                "path_rewrite_specifier",
                PathRewriteSpecifier::PathRedirect(value),
            )?;
        }
        if let Some(v) = f.take("prefixRewrite", "prefix_rewrite")? {
            let value = expect_str(Self::NAME, "prefix_rewrite", v)?.to_owned();
            set_oneof(
                &mut path,
                Self::NAME,
                "path_rewrite_specifier",
                PathRewriteSpecifier::PrefixRewrite(value),
            )?;
        }
        f.finish()?;
        Ok(Self {
            host_redirect,
            port_redirect,
            response_code,
            strip_query,
            scheme_rewrite_specifier: scheme,
            path_rewrite_specifier: path,
        })
    }
}

impl FromJson for route::DirectResponseAction {
    const NAME: &'static str = "envoy.config.route.v3.DirectResponseAction";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let direct = Self {
            status: f.uint32("status", "status")?,
            body: f.message("body", "body")?,
        };
        f.finish()?;
        Ok(direct)
    }
}

impl FromJson for route::HeaderMatcher {
    const NAME: &'static str = "envoy.config.route.v3.HeaderMatcher";

    fn from_json(value: &Value) -> Result<Self, Error> {
        use route::header_matcher::HeaderMatchSpecifier;
        let mut f = Fields::new(Self::NAME, value)?;
        let name = f.string("name", "name")?;
        let invert_match = f.boolean("invertMatch", "invert_match")?;
        let mut specifier = None;
        if let Some(v) = f.take("exactMatch", "exact_match")? {
            let exact = expect_str(Self::NAME, "exact_match", v)?.to_owned();
            set_oneof(
                &mut specifier,
                Self::NAME,
                "header_match_specifier",
                HeaderMatchSpecifier::ExactMatch(exact),
            )?;
        }
        if let Some(v) = f.take("presentMatch", "present_match")? {
            let present = parse_bool(Self::NAME, "present_match", v)?;
            set_oneof(
                &mut specifier,
                Self::NAME,
                "header_match_specifier",
                HeaderMatchSpecifier::PresentMatch(present),
            )?;
        }
        if let Some(v) = f.take("prefixMatch", "prefix_match")? {
            let prefix = expect_str(Self::NAME, "prefix_match", v)?.to_owned();
            set_oneof(
                &mut specifier,
                Self::NAME,
                "header_match_specifier",
                HeaderMatchSpecifier::PrefixMatch(prefix),
            )?;
        }
        if let Some(v) = f.take("suffixMatch", "suffix_match")? {
            let suffix = expect_str(Self::NAME, "suffix_match", v)?.to_owned();
            set_oneof(
                &mut specifier,
                Self::NAME,
                "header_match_specifier",
                HeaderMatchSpecifier::SuffixMatch(suffix),
            )?;
        }
        if let Some(v) = f.take("stringMatch", "string_match")? {
            let string_match = matcher::StringMatcher::from_json(v)?;
            set_oneof(
                &mut specifier,
                Self::NAME,
                "header_match_specifier",
                HeaderMatchSpecifier::StringMatch(string_match),
            )?;
        }
        f.finish()?;
        Ok(Self {
            name,
            invert_match,
            header_match_specifier: specifier,
        })
    }
}

// --- envoy.config.cluster.v3 ---

impl FromJson for cluster::cluster::EdsClusterConfig {
    const NAME: &'static str = "envoy.config.cluster.v3.Cluster.EdsClusterConfig";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let config = Self {
            eds_config: f.message("edsConfig", "eds_config")?,
            service_name: f.string("serviceName", "service_name")?,
        };
        f.finish()?;
        Ok(config)
    }
}

impl FromJson for cluster::Cluster {
    const NAME: &'static str = "envoy.config.cluster.v3.Cluster";

    fn from_json(value: &Value) -> Result<Self, Error> {
        use cluster::cluster::ClusterDiscoveryType;
        let mut f = Fields::new(Self::NAME, value)?;
        let name = f.string("name", "name")?;
        let eds_cluster_config = f.message("edsClusterConfig", "eds_cluster_config")?;
        let connect_timeout = f.opt_duration("connectTimeout", "connect_timeout")?;
        let lb_policy = f.enumeration(
            "lbPolicy",
            "lb_policy",
            "envoy.config.cluster.v3.Cluster.LbPolicy",
            cluster::cluster::LbPolicy::from_str_name,
        )?;
        let load_assignment = f.message("loadAssignment", "load_assignment")?;
        let dns_lookup_family = f.enumeration(
            "dnsLookupFamily",
            "dns_lookup_family",
            "envoy.config.cluster.v3.Cluster.DnsLookupFamily",
            cluster::cluster::DnsLookupFamily::from_str_name,
        )?;
        let transport_socket = f.message("transportSocket", "transport_socket")?;
        let typed_extension_protocol_options =
            f.any_map("typedExtensionProtocolOptions", "typed_extension_protocol_options")?;
        let mut discovery_type = None;
        if let Some(v) = f.take("type", "type")? {
            let ty = parse_enum(
                Self::NAME,
                "type",
                "envoy.config.cluster.v3.Cluster.DiscoveryType",
                cluster::cluster::DiscoveryType::from_str_name,
                v,
            )?;
            set_oneof(
                &mut discovery_type,
                Self::NAME,
                "cluster_discovery_type",
                ClusterDiscoveryType::Type(ty),
            )?;
        }
        f.finish()?;
        Ok(Self {
            name,
            eds_cluster_config,
            connect_timeout,
            lb_policy,
            load_assignment,
            dns_lookup_family,
            transport_socket,
            typed_extension_protocol_options,
            cluster_discovery_type: discovery_type,
        })
    }
}

// --- envoy.config.endpoint.v3 ---

impl FromJson for endpoint::Endpoint {
    const NAME: &'static str = "envoy.config.endpoint.v3.Endpoint";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let endpoint = Self {
            address: f.message("address", "address")?,
            hostname: f.string("hostname", "hostname")?,
        };
        f.finish()?;
        Ok(endpoint)
    }
}

impl FromJson for endpoint::LbEndpoint {
    const NAME: &'static str = "envoy.config.endpoint.v3.LbEndpoint";

    fn from_json(value: &Value) -> Result<Self, Error> {
        use endpoint::lb_endpoint::HostIdentifier;
        let mut f = Fields::new(Self::NAME, value)?;
        let health_status = f.enumeration(
            "healthStatus",
            "health_status",
            "envoy.config.core.v3.HealthStatus",
            core::HealthStatus::from_str_name,
        )?;
        let load_balancing_weight = f.opt_uint32("loadBalancingWeight", "load_balancing_weight")?;
        let mut host_identifier = None;
        if let Some(v) = f.take("endpoint", "endpoint")? {
            let endpoint = endpoint::Endpoint::from_json(v)?;
            set_oneof(
                &mut host_identifier,
                Self::NAME,
                "host_identifier",
                HostIdentifier::Endpoint(endpoint),
            )?;
        }
        f.finish()?;
        Ok(Self {
            health_status,
            load_balancing_weight,
            host_identifier,
        })
    }
}

impl FromJson for endpoint::LocalityLbEndpoints {
    const NAME: &'static str = "envoy.config.endpoint.v3.LocalityLbEndpoints";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let endpoints = Self {
            locality: f.message("locality", "locality")?,
            lb_endpoints: f.messages("lbEndpoints", "lb_endpoints")?,
            load_balancing_weight: f.opt_uint32("loadBalancingWeight", "load_balancing_weight")?,
            priority: f.uint32("priority", "priority")?,
        };
        f.finish()?;
        Ok(endpoints)
    }
}

impl FromJson for endpoint::ClusterLoadAssignment {
    const NAME: &'static str = "envoy.config.endpoint.v3.ClusterLoadAssignment";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let assignment = Self {
            cluster_name: f.string("clusterName", "cluster_name")?,
            endpoints: f.messages("endpoints", "endpoints")?,
        };
        f.finish()?;
        Ok(assignment)
    }
}

// --- envoy.config.accesslog.v3 ---

impl FromJson for accesslog::AccessLog {
    const NAME: &'static str = "envoy.config.accesslog.v3.AccessLog";

    fn from_json(value: &Value) -> Result<Self, Error> {
        use accesslog::access_log::ConfigType;
        let mut f = Fields::new(Self::NAME, value)?;
        let name = f.string("name", "name")?;
        let mut config_type = None;
        if let Some(v) = f.take("typedConfig", "typed_config")? {
            let any = parse_any(Self::NAME, "typed_config", v)?;
            set_oneof(&mut config_type, Self::NAME, "config_type", ConfigType::TypedConfig(any))?;
        }
        f.finish()?;
        Ok(Self { name, config_type })
    }
}

// --- envoy.config.rbac.v3 ---

impl FromJson for rbac::Rbac {
    const NAME: &'static str = "envoy.config.rbac.v3.RBAC";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let rbac = Self {
            action: f.enumeration(
                "action",
                "action",
                "envoy.config.rbac.v3.RBAC.Action",
                rbac::rbac::Action::from_str_name,
            )?,
            policies: f.message_map("policies", "policies")?,
        };
        f.finish()?;
        Ok(rbac)
    }
}

impl FromJson for rbac::Policy {
    const NAME: &'static str = "envoy.config.rbac.v3.Policy";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let policy = Self {
            permissions: f.messages("permissions", "permissions")?,
            principals: f.messages("principals", "principals")?,
        };
        f.finish()?;
        Ok(policy)
    }
}

impl FromJson for rbac::permission::Set {
    const NAME: &'static str = "envoy.config.rbac.v3.Permission.Set";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let set = Self {
            rules: f.messages("rules", "rules")?,
        };
        f.finish()?;
        Ok(set)
    }
}

impl FromJson for rbac::Permission {
    const NAME: &'static str = "envoy.config.rbac.v3.Permission";

    fn from_json(value: &Value) -> Result<Self, Error> {
        use rbac::permission::Rule;
        let mut f = Fields::new(Self::NAME, value)?;
        let mut rule = None;
        if let Some(v) = f.take("andRules", "and_rules")? {
            let set = rbac::permission::Set::from_json(v)?;
            set_oneof(&mut rule, Self::NAME, "rule", Rule::AndRules(set))?;
        }
        if let Some(v) = f.take("orRules", "or_rules")? {
            let set = rbac::permission::Set::from_json(v)?;
            set_oneof(&mut rule, Self::NAME, "rule", Rule::OrRules(set))?;
        }
        if let Some(v) = f.take("any", "any")? {
            let any = parse_bool(Self::NAME, "any", v)?;
            set_oneof(&mut rule, Self::NAME, "rule", Rule::Any(any))?;
        }
        if let Some(v) = f.take("header", "header")? {
            let header = route::HeaderMatcher::from_json(v)?;
            set_oneof(&mut rule, Self::NAME, "rule", Rule::Header(header))?;
        }
        if let Some(v) = f.take("destinationIp", "destination_ip")? {
            let ip = core::CidrRange::from_json(v)?;
            set_oneof(&mut rule, Self::NAME, "rule", Rule::DestinationIp(ip))?;
        }
        if let Some(v) = f.take("destinationPort", "destination_port")? {
            let port = parse_u32(Self::NAME, "destination_port", v)?;
            set_oneof(&mut rule, Self::NAME, "rule", Rule::DestinationPort(port))?;
        }
        if let Some(v) = f.take("notRule", "not_rule")? {
            let not = Box::new(Self::from_json(v)?);
            set_oneof(&mut rule, Self::NAME, "rule", Rule::NotRule(not))?;
        }
        if let Some(v) = f.take("requestedServerName", "requested_server_name")? {
            let sni = matcher::StringMatcher::from_json(v)?;
            set_oneof(&mut rule, Self::NAME, "rule", Rule::RequestedServerName(sni))?;
        }
        if let Some(v) = f.take("urlPath", "url_path")? {
            let path = matcher::PathMatcher::from_json(v)?;
            set_oneof(&mut rule, Self::NAME, "rule", Rule::UrlPath(path))?;
        }
        f.finish()?;
        Ok(Self { rule })
    }
}

impl FromJson for rbac::principal::Set {
    const NAME: &'static str = "envoy.config.rbac.v3.Principal.Set";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let set = Self {
            ids: f.messages("ids", "ids")?,
        };
        f.finish()?;
        Ok(set)
    }
}

impl FromJson for rbac::principal::Authenticated {
    const NAME: &'static str = "envoy.config.rbac.v3.Principal.Authenticated";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let authenticated = Self {
            principal_name: f.message("principalName", "principal_name")?,
        };
        f.finish()?;
        Ok(authenticated)
    }
}

impl FromJson for rbac::Principal {
    const NAME: &'static str = "envoy.config.rbac.v3.Principal";

    fn from_json(value: &Value) -> Result<Self, Error> {
        use rbac::principal::Identifier;
        let mut f = Fields::new(Self::NAME, value)?;
        let mut identifier = None;
        if let Some(v) = f.take("andIds", "and_ids")? {
            let set = rbac::principal::Set::from_json(v)?;
            set_oneof(&mut identifier, Self::NAME, "identifier", Identifier::AndIds(set))?;
        }
        if let Some(v) = f.take("orIds", "or_ids")? {
            let set = rbac::principal::Set::from_json(v)?;
            set_oneof(&mut identifier, Self::NAME, "identifier", Identifier::OrIds(set))?;
        }
        if let Some(v) = f.take("any", "any")? {
            let any = parse_bool(Self::NAME, "any", v)?;
            set_oneof(&mut identifier, Self::NAME, "identifier", Identifier::Any(any))?;
        }
        if let Some(v) = f.take("authenticated", "authenticated")? {
            let authenticated = rbac::principal::Authenticated::from_json(v)?;
            set_oneof(
                &mut identifier,
                Self::NAME,
                "identifier",
                Identifier::Authenticated(authenticated),
            )?;
        }
        if let Some(v) = f.take("header", "header")? {
            let header = route::HeaderMatcher::from_json(v)?;
            set_oneof(&mut identifier, Self::NAME, "identifier", Identifier::Header(header))?;
        }
        if let Some(v) = f.take("notId", "not_id")? {
            let not = Box::new(Self::from_json(v)?);
            set_oneof(&mut identifier, Self::NAME, "identifier", Identifier::NotId(not))?;
        }
        if let Some(v) = f.take("urlPath", "url_path")? {
            let path = matcher::PathMatcher::from_json(v)?;
            set_oneof(&mut identifier, Self::NAME, "identifier", Identifier::UrlPath(path))?;
        }
        if let Some(v) = f.take("directRemoteIp", "direct_remote_ip")? {
            let ip = core::CidrRange::from_json(v)?;
            set_oneof(
                &mut identifier,
                Self::NAME,
                "identifier",
                Identifier::DirectRemoteIp(ip),
            )?;
        }
        if let Some(v) = f.take("remoteIp", "remote_ip")? {
            let ip = core::CidrRange::from_json(v)?;
            set_oneof(&mut identifier, Self::NAME, "identifier", Identifier::RemoteIp(ip))?;
        }
        f.finish()?;
        Ok(Self { identifier })
    }
}

// --- envoy.config.trace.v3 ---

impl FromJson for trace::tracing::Http {
    const NAME: &'static str = "envoy.config.trace.v3.Tracing.Http";

    fn from_json(value: &Value) -> Result<Self, Error> {
        use trace::tracing::http::ConfigType;
        let mut f = Fields::new(Self::NAME, value)?;
        let name = f.string("name", "name")?;
        let mut config_type = None;
        if let Some(v) = f.take("typedConfig", "typed_config")? {
            let any = parse_any(Self::NAME, "typed_config", v)?;
            set_oneof(&mut config_type, Self::NAME, "config_type", ConfigType::TypedConfig(any))?;
        }
        f.finish()?;
        Ok(Self { name, config_type })
    }
}

impl FromJson for trace::ZipkinConfig {
    const NAME: &'static str = "envoy.config.trace.v3.ZipkinConfig";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let config = Self {
            collector_cluster: f.string("collectorCluster", "collector_cluster")?,
            collector_endpoint: f.string("collectorEndpoint", "collector_endpoint")?,
            trace_id_128bit: f.boolean("traceId128bit", "trace_id_128bit")?,
            shared_span_context: f.opt_bool("sharedSpanContext", "shared_span_context")?,
            collector_endpoint_version: f.enumeration(
                "collectorEndpointVersion",
                "collector_endpoint_version",
                "envoy.config.trace.v3.ZipkinConfig.CollectorEndpointVersion",
                trace::zipkin_config::CollectorEndpointVersion::from_str_name,
            )?,
            collector_hostname: f.string("collectorHostname", "collector_hostname")?,
        };
        f.finish()?;
        Ok(config)
    }
}

impl FromJson for trace::OpenTelemetryConfig {
    const NAME: &'static str = "envoy.config.trace.v3.OpenTelemetryConfig";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let config = Self {
            grpc_service: f.message("grpcService", "grpc_service")?,
            service_name: f.string("serviceName", "service_name")?,
        };
        f.finish()?;
        Ok(config)
    }
}
