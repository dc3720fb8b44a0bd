//! Label selector matching

use std::collections::BTreeMap;

/// Check whether a Service selector selects the given labels
///
/// Every selector pair must be present in `labels` with an equal value; extra
/// labels are ignored. An empty selector selects nothing.
pub fn selector_matches(
    selector: &BTreeMap<String, String>,
    labels: &BTreeMap<String, String>,
) -> bool {
    if selector.is_empty() {
        return false;
    }

    selector
        .iter()
        .all(|(key, value)| labels.get(key) == Some(value))
}
