use reqwest::header::{HeaderMap, HeaderValue};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// A security header and the value fragment that marks it as securely configured
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedHeader {
    pub name: String,
    pub expected: String,
}

impl ExpectedHeader {
    pub fn new(name: &str, expected: &str) -> Self {
        ExpectedHeader {
            name: name.to_string(),
            expected: expected.to_string(),
        }
    }
}

/// The built-in header table
pub fn default_security_headers() -> Vec<ExpectedHeader> {
    vec![
        ExpectedHeader::new("X-Content-Type-Options", "nosniff"),
        ExpectedHeader::new("X-Frame-Options", "DENY"),
        ExpectedHeader::new("X-XSS-Protection", "1; mode=block"),
        ExpectedHeader::new("Strict-Transport-Security", "max-age=31536000"),
        ExpectedHeader::new("Content-Security-Policy", "default-src 'self'"),
        ExpectedHeader::new("Referrer-Policy", "strict-origin-when-cross-origin"),
    ]
}

/// Result of inspecting one header on one response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderCheckResult {
    pub present: bool,
    pub value: Option<String>,
    pub secure: bool,
}

impl HeaderCheckResult {
    pub fn missing() -> Self {
        HeaderCheckResult {
            present: false,
            value: None,
            secure: false,
        }
    }

    pub fn observed(value: String, expected: &str) -> Self {
        let secure = value.contains(expected);
        HeaderCheckResult {
            present: true,
            value: Some(value),
            secure,
        }
    }
}

/// Header bytes outside visible ASCII are read as Latin-1
fn decode_value(value: &HeaderValue) -> String {
    match value.to_str() {
        Ok(s) => s.to_string(),
        Err(_) => value.as_bytes().iter().map(|&b| b as char).collect(),
    }
}

/// Inspect a single header. Lookup is case-insensitive; repeated headers are joined with ", ".
pub fn check_header(headers: &HeaderMap, header: &ExpectedHeader) -> HeaderCheckResult {
    let values: Vec<String> = headers
        .get_all(header.name.as_str())
        .iter()
        .map(decode_value)
        .collect();

    if values.is_empty() {
        HeaderCheckResult::missing()
    } else {
        HeaderCheckResult::observed(values.join(", "), &header.expected)
    }
}

/// Per-service findings, one entry per configured header in table order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceReport {
    results: Vec<(String, HeaderCheckResult)>,
}

impl ServiceReport {
    /// Build a report for one response against the given header table.
    ///
    /// A name listed twice keeps its first position and its last expected value.
    pub fn from_headers(headers: &HeaderMap, table: &[ExpectedHeader]) -> Self {
        let mut report = ServiceReport::default();
        for header in table {
            report.set(&header.name, check_header(headers, header));
        }
        report
    }

    fn set(&mut self, name: &str, result: HeaderCheckResult) {
        match self.results.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = result,
            None => self.results.push((name.to_string(), result)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&HeaderCheckResult> {
        self.results
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, r)| r)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HeaderCheckResult)> {
        self.results.iter().map(|(n, r)| (n.as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn secure_count(&self) -> usize {
        self.results.iter().filter(|(_, r)| r.secure).count()
    }
}

impl Serialize for ServiceReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.results.len()))?;
        for (name, result) in &self.results {
            map.serialize_entry(name, result)?;
        }
        map.end()
    }
}
