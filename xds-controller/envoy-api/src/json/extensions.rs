//! Decoders for the `envoy.extensions.*` packages.

use serde_json::Value;

use super::{expect_str, parse_any, parse_struct, set_oneof, Error, Fields, FromJson};
use crate::extensions::access_loggers::file::v3 as file_logger;
use crate::extensions::access_loggers::stream::v3 as stream_logger;
use crate::extensions::filters::http::rbac::v3 as http_rbac;
use crate::extensions::filters::http::router::v3 as router;
use crate::extensions::filters::listener::tls_inspector::v3 as tls_inspector;
use crate::extensions::filters::network::http_connection_manager::v3 as hcm;
use crate::extensions::transport_sockets::tls::v3 as tls;

// --- envoy.extensions.filters.network.http_connection_manager.v3 ---

impl FromJson for hcm::HttpConnectionManager {
    const NAME: &'static str =
        "envoy.extensions.filters.network.http_connection_manager.v3.HttpConnectionManager";

    fn from_json(value: &Value) -> Result<Self, Error> {
        use hcm::http_connection_manager::RouteSpecifier;
        let mut f = Fields::new(Self::NAME, value)?;
        let codec_type = f.enumeration(
            "codecType",
            "codec_type",
            "envoy.extensions.filters.network.http_connection_manager.v3.HttpConnectionManager.CodecType",
            hcm::http_connection_manager::CodecType::from_str_name,
        )?;
        let stat_prefix = f.string("statPrefix", "stat_prefix")?;
        let http_filters = f.messages("httpFilters", "http_filters")?;
        let tracing = f.message("tracing", "tracing")?;
        let server_name = f.string("serverName", "server_name")?;
        let access_log = f.messages("accessLog", "access_log")?;
        let use_remote_address = f.opt_bool("useRemoteAddress", "use_remote_address")?;
        let xff_num_trusted_hops = f.uint32("xffNumTrustedHops", "xff_num_trusted_hops")?;
        let generate_request_id = f.opt_bool("generateRequestId", "generate_request_id")?;
        let normalize_path = f.opt_bool("normalizePath", "normalize_path")?;
        let merge_slashes = f.boolean("mergeSlashes", "merge_slashes")?;
        let upgrade_configs = f.messages("upgradeConfigs", "upgrade_configs")?;
        let mut route_specifier = None;
        if let Some(v) = f.take("rds", "rds")? {
            let rds = hcm::Rds::from_json(v)?;
            set_oneof(
                &mut route_specifier,
                Self::NAME,
                "route_specifier",
                RouteSpecifier::Rds(rds),
            )?;
        }
        if let Some(v) = f.take("routeConfig", "route_config")? {
            let config = crate::config::route::v3::RouteConfiguration::from_json(v)?;
            set_oneof(
                &mut route_specifier,
                Self::NAME,
                "route_specifier",
                RouteSpecifier::RouteConfig(config),
            )?;
        }
        f.finish()?;
        Ok(Self {
            codec_type,
            stat_prefix,
            http_filters,
            tracing,
            server_name,
            access_log,
            use_remote_address,
            xff_num_trusted_hops,
            generate_request_id,
            normalize_path,
            merge_slashes,
            upgrade_configs,
            route_specifier,
        })
    }
}

impl FromJson for hcm::http_connection_manager::Tracing {
    const NAME: &'static str =
        "envoy.extensions.filters.network.http_connection_manager.v3.HttpConnectionManager.Tracing";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let tracing = Self {
            client_sampling: f.message("clientSampling", "client_sampling")?,
            random_sampling: f.message("randomSampling", "random_sampling")?,
            overall_sampling: f.message("overallSampling", "overall_sampling")?,
            verbose: f.boolean("verbose", "verbose")?,
            max_path_tag_length: f.opt_uint32("maxPathTagLength", "max_path_tag_length")?,
            provider: f.message("provider", "provider")?,
            spawn_upstream_span: f.opt_bool("spawnUpstreamSpan", "spawn_upstream_span")?,
        };
        f.finish()?;
        Ok(tracing)
    }
}

impl FromJson for hcm::http_connection_manager::UpgradeConfig {
    const NAME: &'static str =
        "envoy.extensions.filters.network.http_connection_manager.v3.HttpConnectionManager.UpgradeConfig";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let config = Self {
            upgrade_type: f.string("upgradeType", "upgrade_type")?,
            filters: f.messages("filters", "filters")?,
            enabled: f.opt_bool("enabled", "enabled")?,
        };
        f.finish()?;
        Ok(config)
    }
}

impl FromJson for hcm::Rds {
    const NAME: &'static str =
        "envoy.extensions.filters.network.http_connection_manager.v3.Rds";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let rds = Self {
            config_source: f.message("configSource", "config_source")?,
            route_config_name: f.string("routeConfigName", "route_config_name")?,
        };
        f.finish()?;
        Ok(rds)
    }
}

impl FromJson for hcm::HttpFilter {
    const NAME: &'static str =
        "envoy.extensions.filters.network.http_connection_manager.v3.HttpFilter";

    fn from_json(value: &Value) -> Result<Self, Error> {
        use hcm::http_filter::ConfigType;
        let mut f = Fields::new(Self::NAME, value)?;
        let name = f.string("name", "name")?;
        let is_optional = f.boolean("isOptional", "is_optional")?;
        let disabled = f.boolean("disabled", "disabled")?;
        let mut config_type = None;
        if let Some(v) = f.take("typedConfig", "typed_config")? {
            let any = parse_any(Self::NAME, "typed_config", v)?;
            set_oneof(&mut config_type, Self::NAME, "config_type", ConfigType::TypedConfig(any))?;
        }
        f.finish()?;
        Ok(Self {
            name,
            is_optional,
            disabled,
            config_type,
        })
    }
}

// --- envoy.extensions.filters.http.router.v3 ---

impl FromJson for router::Router {
    const NAME: &'static str = "envoy.extensions.filters.http.router.v3.Router";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let router = Self {
            dynamic_stats: f.opt_bool("dynamicStats", "dynamic_stats")?,
            start_child_span: f.boolean("startChildSpan", "start_child_span")?,
            suppress_envoy_headers: f.boolean("suppressEnvoyHeaders", "suppress_envoy_headers")?,
            respect_expected_rq_timeout: f
                .boolean("respectExpectedRqTimeout", "respect_expected_rq_timeout")?,
        };
        f.finish()?;
        Ok(router)
    }
}

// --- envoy.extensions.filters.http.rbac.v3 ---

impl FromJson for http_rbac::Rbac {
    const NAME: &'static str = "envoy.extensions.filters.http.rbac.v3.RBAC";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let rbac = Self {
            rules: f.message("rules", "rules")?,
            rules_stat_prefix: f.string("rulesStatPrefix", "rules_stat_prefix")?,
            shadow_rules: f.message("shadowRules", "shadow_rules")?,
            shadow_rules_stat_prefix: f
                .string("shadowRulesStatPrefix", "shadow_rules_stat_prefix")?,
        };
        f.finish()?;
        Ok(rbac)
    }
}

impl FromJson for http_rbac::RbacPerRoute {
    const NAME: &'static str = "envoy.extensions.filters.http.rbac.v3.RBACPerRoute";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let per_route = Self {
            rbac: f.message("rbac", "rbac")?,
        };
        f.finish()?;
        Ok(per_route)
    }
}

// --- envoy.extensions.filters.listener.tls_inspector.v3 ---

impl FromJson for tls_inspector::TlsInspector {
    const NAME: &'static str = "envoy.extensions.filters.listener.tls_inspector.v3.TlsInspector";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let inspector = Self {
            enable_ja3_fingerprinting: f
                .opt_bool("enableJa3Fingerprinting", "enable_ja3_fingerprinting")?,
            initial_read_buffer_size: f
                .opt_uint32("initialReadBufferSize", "initial_read_buffer_size")?,
        };
        f.finish()?;
        Ok(inspector)
    }
}

// --- envoy.extensions.access_loggers ---

impl FromJson for file_logger::FileAccessLog {
    const NAME: &'static str = "envoy.extensions.access_loggers.file.v3.FileAccessLog";

    fn from_json(value: &Value) -> Result<Self, Error> {
        use file_logger::file_access_log::AccessLogFormat;
        let mut f = Fields::new(Self::NAME, value)?;
        let path = f.string("path", "path")?;
        let mut format = None;
        if let Some(v) = f.take("format", "format")? {
            let text = expect_str(Self::NAME, "format", v)?.to_owned();
            set_oneof(
                &mut format,
                Self::NAME,
                "access_log_format",
                AccessLogFormat::Format(text),
            )?;
        }
        if let Some(v) = f.take("jsonFormat", "json_format")? {
            let json = parse_struct(Self::NAME, "json_format", v)?;
            set_oneof(
                &mut format,
                Self::NAME,
                "access_log_format",
                AccessLogFormat::JsonFormat(json),
            )?;
        }
        if let Some(v) = f.take("typedJsonFormat", "typed_json_format")? {
            let json = parse_struct(Self::NAME, "typed_json_format", v)?;
            set_oneof(
                &mut format,
                Self::NAME,
                "access_log_format",
                AccessLogFormat::TypedJsonFormat(json),
            )?;
        }
        if let Some(v) = f.take("logFormat", "log_format")? {
            let log_format = crate::config::core::v3::SubstitutionFormatString::from_json(v)?;
            set_oneof(
                &mut format,
                Self::NAME,
                "access_log_format",
                AccessLogFormat::LogFormat(log_format),
            )?;
        }
        f.finish()?;
        Ok(Self {
            path,
            access_log_format: format,
        })
    }
}

impl FromJson for stream_logger::StdoutAccessLog {
    const NAME: &'static str = "envoy.extensions.access_loggers.stream.v3.StdoutAccessLog";

    fn from_json(value: &Value) -> Result<Self, Error> {
        use stream_logger::stdout_access_log::AccessLogFormat;
        let mut f = Fields::new(Self::NAME, value)?;
        let mut format = None;
        if let Some(v) = f.take("logFormat", "log_format")? {
            let log_format = crate::config::core::v3::SubstitutionFormatString::from_json(v)?;
            set_oneof(
                &mut format,
                Self::NAME,
                "access_log_format",
                AccessLogFormat::LogFormat(log_format),
            )?;
        }
        f.finish()?;
        Ok(Self {
            access_log_format: format,
        })
    }
}

impl FromJson for stream_logger::StderrAccessLog {
    const NAME: &'static str = "envoy.extensions.access_loggers.stream.v3.StderrAccessLog";

    fn from_json(value: &Value) -> Result<Self, Error> {
        use stream_logger::stderr_access_log::AccessLogFormat;
        let mut f = Fields::new(Self::NAME, value)?;
        let mut format = None;
        if let Some(v) = f.take("logFormat", "log_format")? {
            let log_format = crate::config::core::v3::SubstitutionFormatString::from_json(v)?;
            set_oneof(
                &mut format,
                Self::NAME,
                "access_log_format",
                AccessLogFormat::LogFormat(log_format),
            )?;
        }
        f.finish()?;
        Ok(Self {
            access_log_format: format,
        })
    }
}

// --- envoy.extensions.transport_sockets.tls.v3 ---

impl FromJson for tls::TlsParameters {
    const NAME: &'static str = "envoy.extensions.transport_sockets.tls.v3.TlsParameters";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let params = Self {
            tls_minimum_protocol_version: f.enumeration(
                "tlsMinimumProtocolVersion",
                "tls_minimum_protocol_version",
                "envoy.extensions.transport_sockets.tls.v3.TlsParameters.TlsProtocol",
                tls::tls_parameters::TlsProtocol::from_str_name,
            )?,
            tls_maximum_protocol_version: f.enumeration(
                "tlsMaximumProtocolVersion",
                "tls_maximum_protocol_version",
                "envoy.extensions.transport_sockets.tls.v3.TlsParameters.TlsProtocol",
                tls::tls_parameters::TlsProtocol::from_str_name,
            )?,
            cipher_suites: f.strings("cipherSuites", "cipher_suites")?,
            ecdh_curves: f.strings("ecdhCurves", "ecdh_curves")?,
        };
        f.finish()?;
        Ok(params)
    }
}

impl FromJson for tls::TlsCertificate {
    const NAME: &'static str = "envoy.extensions.transport_sockets.tls.v3.TlsCertificate";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let cert = Self {
            certificate_chain: f.message("certificateChain", "certificate_chain")?,
            private_key: f.message("privateKey", "private_key")?,
            password: f.message("password", "password")?,
        };
        f.finish()?;
        Ok(cert)
    }
}

impl FromJson for tls::CertificateValidationContext {
    const NAME: &'static str =
        "envoy.extensions.transport_sockets.tls.v3.CertificateValidationContext";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let context = Self {
            trusted_ca: f.message("trustedCa", "trusted_ca")?,
            match_subject_alt_names: f
                .messages("matchSubjectAltNames", "match_subject_alt_names")?,
            allow_expired_certificate: f
                .boolean("allowExpiredCertificate", "allow_expired_certificate")?,
        };
        f.finish()?;
        Ok(context)
    }
}

impl FromJson for tls::SdsSecretConfig {
    const NAME: &'static str = "envoy.extensions.transport_sockets.tls.v3.SdsSecretConfig";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let config = Self {
            name: f.string("name", "name")?,
            sds_config: f.message("sdsConfig", "sds_config")?,
        };
        f.finish()?;
        Ok(config)
    }
}

impl FromJson for tls::CommonTlsContext {
    const NAME: &'static str = "envoy.extensions.transport_sockets.tls.v3.CommonTlsContext";

    fn from_json(value: &Value) -> Result<Self, Error> {
        use tls::common_tls_context::ValidationContextType;
        let mut f = Fields::new(Self::NAME, value)?;
        let tls_params = f.message("tlsParams", "tls_params")?;
        let tls_certificates = f.messages("tlsCertificates", "tls_certificates")?;
        let tls_certificate_sds_secret_configs = f.messages(
            "tlsCertificateSdsSecretConfigs",
            "tls_certificate_sds_secret_configs",
        )?;
        let alpn_protocols = f.strings("alpnProtocols", "alpn_protocols")?;
        let mut validation = None;
        if let Some(v) = f.take("validationContext", "validation_context")? {
            let context = tls::CertificateValidationContext::from_json(v)?;
            set_oneof(
                &mut validation,
                Self::NAME,
                "validation_context_type",
                ValidationContextType::ValidationContext(context),
            )?;
        }
        if let Some(v) = f.take(
            "validationContextSdsSecretConfig",
            "validation_context_sds_secret_config",
        )? {
            let config = tls::SdsSecretConfig::from_json(v)?;
            set_oneof(
                &mut validation,
                Self::NAME,
                "validation_context_type",
                ValidationContextType::ValidationContextSdsSecretConfig(config),
            )?;
        }
        f.finish()?;
        Ok(Self {
            tls_params,
            tls_certificates,
            tls_certificate_sds_secret_configs,
            alpn_protocols,
            validation_context_type: validation,
        })
    }
}

impl FromJson for tls::DownstreamTlsContext {
    const NAME: &'static str = "envoy.extensions.transport_sockets.tls.v3.DownstreamTlsContext";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let context = Self {
            common_tls_context: f.message("commonTlsContext", "common_tls_context")?,
            require_client_certificate: f
                .opt_bool("requireClientCertificate", "require_client_certificate")?,
            require_sni: f.opt_bool("requireSni", "require_sni")?,
        };
        f.finish()?;
        Ok(context)
    }
}

impl FromJson for tls::UpstreamTlsContext {
    const NAME: &'static str = "envoy.extensions.transport_sockets.tls.v3.UpstreamTlsContext";

    fn from_json(value: &Value) -> Result<Self, Error> {
        let mut f = Fields::new(Self::NAME, value)?;
        let context = Self {
            common_tls_context: f.message("commonTlsContext", "common_tls_context")?,
            sni: f.string("sni", "sni")?,
            allow_renegotiation: f.boolean("allowRenegotiation", "allow_renegotiation")?,
        };
        f.finish()?;
        Ok(context)
    }
}
