pub mod matcher;
pub mod v3;
