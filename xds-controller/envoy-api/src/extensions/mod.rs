pub mod access_loggers;
pub mod filters;
pub mod transport_sockets;
