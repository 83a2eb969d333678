use crate::error::Result;
use crate::security::checks::ServiceReport;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fs;
use std::path::Path;

/// Findings for every service that answered, keyed by URL in audit order
#[derive(Debug, Clone, Default)]
pub struct AuditReport {
    services: Vec<(String, ServiceReport)>,
    unreachable: Vec<String>,
}

impl AuditReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a service, replacing the findings of an earlier check of the same URL
    pub fn insert(&mut self, url: &str, report: ServiceReport) {
        match self.services.iter_mut().find(|(u, _)| u == url) {
            Some(entry) => entry.1 = report,
            None => self.services.push((url.to_string(), report)),
        }
    }

    /// Remember a URL that produced no report. Not part of the JSON output.
    pub fn mark_unreachable(&mut self, url: &str) {
        if !self.unreachable.iter().any(|u| u == url) {
            self.unreachable.push(url.to_string());
        }
    }

    pub fn get(&self, url: &str) -> Option<&ServiceReport> {
        self.services
            .iter()
            .find(|(u, _)| u == url)
            .map(|(_, r)| r)
    }

    pub fn services(&self) -> impl Iterator<Item = (&str, &ServiceReport)> {
        self.services.iter().map(|(u, r)| (u.as_str(), r))
    }

    pub fn unreachable(&self) -> &[String] {
        &self.unreachable
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Render as JSON with 2-space indentation
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the JSON report, replacing any existing file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

impl Serialize for AuditReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.services.len()))?;
        for (url, report) in &self.services {
            map.serialize_entry(url, report)?;
        }
        map.end()
    }
}
