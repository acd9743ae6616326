/// A regex matcher designed for safety when used with untrusted input.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RegexMatcher {
    /// The regex match string. The string must be supported by the configured
    /// engine. The regex is matched against the full string, not as a partial
    /// match.
    #[prost(string, tag = "2")]
    pub regex: ::prost::alloc::string::String,
    #[prost(oneof = "regex_matcher::EngineType", tags = "1")]
    pub engine_type: ::core::option::Option<regex_matcher::EngineType>,
}
/// Nested message and enum types in `RegexMatcher`.
pub mod regex_matcher {
    /// Google's `RE2 <https://github.com/google/re2>`_ regex engine. The regex
    /// string must adhere to the documented `syntax
    /// <https://github.com/google/re2/wiki/Syntax>`_. The engine is designed to
    /// complete execution in linear time as well as limit the amount of memory
    /// used.
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct GoogleRe2 {}
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum EngineType {
        /// Google's RE2 regex engine. This field is deprecated; regexes are
        /// always RE2 now.
        #[prost(message, tag = "1")]
        GoogleRe2(GoogleRe2),
    }
}
/// Specifies the way to match a string.
/// \[#next-free-field: 9\]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StringMatcher {
    /// If true, indicates the exact/prefix/suffix/contains matching should be
    /// case insensitive. This has no effect for the safe_regex match. For
    /// example, the matcher ``data`` will match both input string ``Data`` and
    /// ``data`` if set to true.
    #[prost(bool, tag = "6")]
    pub ignore_case: bool,
    #[prost(oneof = "string_matcher::MatchPattern", tags = "1, 2, 3, 5, 7")]
    pub match_pattern: ::core::option::Option<string_matcher::MatchPattern>,
}
/// Nested message and enum types in `StringMatcher`.
pub mod string_matcher {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum MatchPattern {
        /// The input string must match exactly the string specified here.
        ///
        /// Examples:
        ///
        /// * ``abc`` only matches the value ``abc``.
        #[prost(string, tag = "1")]
        Exact(::prost::alloc::string::String),
        /// The input string must have the prefix specified here.
        /// Note: empty prefix is not allowed, please use regex instead.
        ///
        /// Examples:
        ///
        /// * ``abc`` matches the value ``abc.xyz``
        #[prost(string, tag = "2")]
        Prefix(::prost::alloc::string::String),
        /// The input string must have the suffix specified here.
        /// Note: empty prefix is not allowed, please use regex instead.
        ///
        /// Examples:
        ///
        /// * ``abc`` matches the value ``xyz.abc``
        #[prost(string, tag = "3")]
        Suffix(::prost::alloc::string::String),
        /// The input string must match the regular expression specified here.
        #[prost(message, tag = "5")]
        SafeRegex(super::RegexMatcher),
        /// The input string must have the substring specified here.
        /// Note: empty contains match is not allowed, please use regex instead.
        ///
        /// Examples:
        ///
        /// * ``abc`` matches the value ``xyz.abc.def``
        #[prost(string, tag = "7")]
        Contains(::prost::alloc::string::String),
    }
}
/// Specifies a list of ways to match a string.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListStringMatcher {
    #[prost(message, repeated, tag = "1")]
    pub patterns: ::prost::alloc::vec::Vec<StringMatcher>,
}
/// Specifies the way to match a path on HTTP request.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PathMatcher {
    #[prost(oneof = "path_matcher::Rule", tags = "1")]
    pub rule: ::core::option::Option<path_matcher::Rule>,
}
/// Nested message and enum types in `PathMatcher`.
pub mod path_matcher {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Rule {
        /// The ``path`` must match the URL path portion of the :path header. The
        /// query and fragment string (if present) are removed in the URL path
        /// portion. For example, the path ``/data`` will match the :path header
        /// ``/data#fragment?param=value``.
        #[prost(message, tag = "1")]
        Path(super::StringMatcher),
    }
}
