/// URL dedupe operations: grouping raw input lines by registrable domain

use std::collections::HashMap;

use crate::domain::{extract_domain, trim_line};
use crate::url_data::{DedupeReport, DomainGroup, RejectedLine};

/// Group every parseable line of `raw` by registrable domain
///
/// Groups appear in first-seen order and each keeps its lines in input order.
/// Lines that fail to parse are recorded in `rejected` and never stop the run.
pub fn group_report(raw: &str) -> DedupeReport {
    let mut report = DedupeReport::default();
    // domain key -> position in report.groups
    let mut positions: HashMap<String, usize> = HashMap::new();

    for (index, line) in raw.split('\n').enumerate() {
        let line = trim_line(line);
        if line.is_empty() {
            continue;
        }

        match extract_domain(line) {
            Ok(domain) => match positions.get(&domain) {
                Some(&position) => report.groups[position].urls.push(line.to_string()),
                None => {
                    positions.insert(domain.clone(), report.groups.len());
                    report.groups.push(DomainGroup::new(domain, line.to_string()));
                }
            },
            Err(e) => {
                log::warn!("Skipping line {}: {}", index + 1, e);
                report.rejected.push(RejectedLine {
                    line_number: index + 1,
                    line: line.to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    log::debug!(
        "Grouped {} URLs into {} domains ({} rejected)",
        report.total_urls(),
        report.groups.len(),
        report.rejected.len()
    );

    report
}

/// Group lines by registrable domain, dropping lines that fail to parse
pub fn group(raw: &str) -> Vec<DomainGroup> {
    group_report(raw).groups
}
