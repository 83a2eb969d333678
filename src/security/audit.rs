use crate::config::AuditConfig;
use crate::error::Result;
use crate::output::Output;
use crate::security::checks::ServiceReport;
use crate::security::report::AuditReport;
use reqwest::Client;

/// Fetches each configured service once and inspects its security headers
pub struct HeaderAuditor {
    client: Client,
    config: AuditConfig,
}

impl HeaderAuditor {
    pub fn new(config: AuditConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(HeaderAuditor { client, config })
    }

    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Issue a single GET and inspect the response headers.
    ///
    /// Any status code counts as an answer; only transport-level failures are errors.
    pub async fn check_security_headers(&self, url: &str) -> Result<ServiceReport> {
        let response = self.client.get(url).send().await?;
        Ok(ServiceReport::from_headers(response.headers(), &self.config.headers))
    }

    /// Like `check_security_headers`, but prints the failure and yields nothing
    pub async fn audit_url(&self, url: &str) -> Option<ServiceReport> {
        match self.check_security_headers(url).await {
            Ok(report) => Some(report),
            Err(e) => {
                Output::check_failed(url, &e.to_string());
                None
            }
        }
    }

    /// Check every target in order. Failed URLs are left out of the report.
    pub async fn run(&self) -> AuditReport {
        let mut report = AuditReport::new();

        for url in &self.config.targets {
            Output::progress(url);
            match self.audit_url(url).await {
                Some(service) => report.insert(url, service),
                None => report.mark_unreachable(url),
            }
        }

        report
    }
}
