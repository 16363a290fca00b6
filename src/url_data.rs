/// Data structures for the URL dedupe tool
use serde::{Deserialize, Serialize};

/// URLs sharing one registrable domain, in input order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DomainGroup {
    pub base: String,
    pub urls: Vec<String>,
}

impl DomainGroup {
    pub fn new(base: String, first_url: String) -> DomainGroup {
        DomainGroup {
            base,
            urls: vec![first_url],
        }
    }

    pub fn count(&self) -> usize {
        self.urls.len()
    }
}

/// A non-blank line that could not be parsed as a URL
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RejectedLine {
    pub line_number: usize, // 1-based, counting blank lines
    pub line: String,
    pub reason: String,
}

/// Result of one dedupe run
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DedupeReport {
    pub groups: Vec<DomainGroup>,
    pub rejected: Vec<RejectedLine>,
}

impl DedupeReport {
    pub fn total_urls(&self) -> usize {
        self.groups.iter().map(DomainGroup::count).sum()
    }
}
