use crate::record::DispatchRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregates derived from one pass over a dispatch record sequence.
///
/// Computed once by [`summarize`] and passed to every consumer; both maps are
/// keyed only by docks that appear at least once in the input.
///
/// # Examples
///
/// ```
/// use dispatch_report::record::DispatchRecord;
/// use dispatch_report::aggregate::summarize;
///
/// let records = vec![
///     DispatchRecord::new(1, "X", "Prov1", 10),
///     DispatchRecord::new(2, "X", "Prov3", 3),
/// ];
/// let summary = summarize(&records);
/// assert_eq!(summary.events_by_dock[&1], 1);
/// assert_eq!(summary.totals_by_dock[&2]["X"], 3);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DispatchSummary {
    /// Dock number -> dispatch-event count
    pub events_by_dock: BTreeMap<i32, u32>,
    /// Dock number -> (cleaned product name -> cumulative quantity)
    pub totals_by_dock: BTreeMap<i32, BTreeMap<String, i64>>,
}

/// Fold the record sequence into per-dock aggregates.
///
/// Quantities accumulate in `i64` so pathological inputs cannot wrap an
/// `i32` total.
pub fn summarize(records: &[DispatchRecord]) -> DispatchSummary {
    let mut summary = DispatchSummary::default();
    for record in records {
        *summary.events_by_dock.entry(record.dock).or_insert(0) += 1;
        *summary
            .totals_by_dock
            .entry(record.dock)
            .or_default()
            .entry(record.product())
            .or_insert(0) += i64::from(record.quantity);
    }
    summary
}

impl DispatchSummary {
    /// The dock with the fewest dispatch events, or `None` when there is no
    /// data.
    ///
    /// Docks are scanned in ascending numeric order with a strictly-less
    /// comparison, so on a tie the lowest-numbered dock wins.
    pub fn least_active_dock(&self) -> Option<i32> {
        let mut min_dock = None;
        let mut min_events = u32::MAX;
        for (&dock, &events) in &self.events_by_dock {
            if events < min_events {
                min_events = events;
                min_dock = Some(dock);
            }
        }
        min_dock
    }

    /// The product with the largest cumulative quantity at `dock`.
    ///
    /// Products are scanned in ascending lexicographic order with a
    /// strictly-greater comparison against a running maximum that starts at
    /// zero: ties keep the earlier key, and a product whose total is zero or
    /// negative is never selected, even when it is the only one.
    pub fn top_product(&self, dock: i32) -> Option<&str> {
        let products = self.totals_by_dock.get(&dock)?;
        let mut top = None;
        let mut max_quantity: i64 = 0;
        for (name, &quantity) in products {
            if quantity > max_quantity {
                max_quantity = quantity;
                top = Some(name.as_str());
            }
        }
        top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<DispatchRecord> {
        vec![
            DispatchRecord::new(1, "X", "Prov1", 10),
            DispatchRecord::new(1, "Y", "Prov2", 5),
            DispatchRecord::new(2, "X", "Prov3", 3),
        ]
    }

    #[test]
    fn test_event_counts_match_record_multiplicity() {
        let summary = summarize(&sample_records());
        assert_eq!(summary.events_by_dock.len(), 2);
        assert_eq!(summary.events_by_dock[&1], 2);
        assert_eq!(summary.events_by_dock[&2], 1);
    }

    #[test]
    fn test_quantity_totals_match_record_sums() {
        let summary = summarize(&sample_records());
        assert_eq!(summary.totals_by_dock[&1]["X"], 10);
        assert_eq!(summary.totals_by_dock[&1]["Y"], 5);
        assert_eq!(summary.totals_by_dock[&2]["X"], 3);

        let dock1_total: i64 = summary.totals_by_dock[&1].values().sum();
        assert_eq!(dock1_total, 15);
    }

    #[test]
    fn test_duplicate_records_all_contribute() {
        let rec = DispatchRecord::new(4, "Pipes", "Chaco", 6);
        let summary = summarize(&[rec, rec, rec]);
        assert_eq!(summary.events_by_dock[&4], 3);
        assert_eq!(summary.totals_by_dock[&4]["Pipes"], 18);
    }

    #[test]
    fn test_least_active_dock() {
        let summary = summarize(&sample_records());
        assert_eq!(summary.least_active_dock(), Some(2));
    }

    #[test]
    fn test_least_active_dock_tie_keeps_lowest() {
        let records = vec![
            DispatchRecord::new(3, "A", "P", 1),
            DispatchRecord::new(1, "B", "P", 1),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.least_active_dock(), Some(1));
    }

    #[test]
    fn test_least_active_dock_empty_input() {
        let summary = summarize(&[]);
        assert_eq!(summary.least_active_dock(), None);
    }

    #[test]
    fn test_least_active_dock_deterministic() {
        let records = sample_records();
        assert_eq!(
            summarize(&records).least_active_dock(),
            summarize(&records).least_active_dock()
        );
    }

    #[test]
    fn test_top_product_tie_keeps_earlier_key() {
        let records = vec![
            DispatchRecord::new(0, "A", "P", 5),
            DispatchRecord::new(0, "B", "P", 5),
        ];
        let summary = summarize(&records);
        // "A" is first to strictly exceed the zero floor; "B" only equals it
        assert_eq!(summary.top_product(0), Some("A"));
    }

    #[test]
    fn test_top_product_zero_total_never_selected() {
        let records = vec![DispatchRecord::new(6, "Void", "P", 0)];
        let summary = summarize(&records);
        assert!(summary.totals_by_dock[&6].contains_key("Void"));
        assert_eq!(summary.top_product(6), None);
    }

    #[test]
    fn test_top_product_unknown_dock() {
        let summary = summarize(&sample_records());
        assert_eq!(summary.top_product(99), None);
    }
}
