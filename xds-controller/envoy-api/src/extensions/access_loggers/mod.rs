pub mod file;
pub mod stream;
