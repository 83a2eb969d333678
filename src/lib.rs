pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod security;

pub use config::AuditConfig;
pub use error::AuditError;
pub use security::{AuditReport, HeaderAuditor, HeaderCheckResult, ServiceReport};
