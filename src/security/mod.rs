pub mod audit;
pub mod report;
pub mod checks;

pub use audit::HeaderAuditor;
pub use checks::{ExpectedHeader, HeaderCheckResult, ServiceReport};
pub use report::AuditReport;
