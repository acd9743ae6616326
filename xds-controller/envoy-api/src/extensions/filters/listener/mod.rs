pub mod tls_inspector;
