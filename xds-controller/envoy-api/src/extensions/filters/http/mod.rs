pub mod rbac;
pub mod router;
