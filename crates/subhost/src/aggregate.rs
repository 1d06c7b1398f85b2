//! Deduplication and ordering of report rows.

use std::collections::HashSet;
use subhost_core::ResultRecord;

/// Keep the first occurrence of each (domain, subdomain, ip, host) tuple.
#[must_use]
pub fn dedup(records: Vec<ResultRecord>) -> Vec<ResultRecord> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| seen.insert(record.key()))
        .collect()
}

/// Sort ascending by organization name. Equal names keep their input order.
pub fn sort_by_host(records: &mut [ResultRecord]) {
    records.sort_by(|a, b| a.host.cmp(&b.host));
}

/// Deduplicate, then sort by host.
#[must_use]
pub fn aggregate(records: Vec<ResultRecord>) -> Vec<ResultRecord> {
    let mut records = dedup(records);
    sort_by_host(&mut records);
    records
}
