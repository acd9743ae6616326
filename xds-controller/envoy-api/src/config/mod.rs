pub mod accesslog;
pub mod cluster;
pub mod core;
pub mod endpoint;
pub mod listener;
pub mod rbac;
pub mod route;
pub mod trace;
