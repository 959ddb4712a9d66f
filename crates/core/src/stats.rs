//! Per-status statistics arithmetic.
//!
//! The store supplies a total and whatever `(status, count)` groups its
//! aggregation produced; this module fills in missing statuses and computes
//! percentages so that every status is always reported, in a fixed order.

use serde::Serialize;

use crate::reading_status::ReadingStatus;

/// Count and share of one status within a filtered book set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatusCount {
    pub status: ReadingStatus,
    pub count: i64,
    /// Percentage of the total, one decimal place. `0` when the total is 0.
    pub percentage: f64,
}

/// `count / total * 100`, rounded to one decimal place. Zero when `total` is 0.
pub fn percentage_of(count: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    let raw = count as f64 / total as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}

/// Build the three-entry breakdown in [`ReadingStatus::ALL`] order.
///
/// Statuses missing from `grouped` are reported with a zero count.
pub fn status_breakdown(total: i64, grouped: &[(ReadingStatus, i64)]) -> Vec<StatusCount> {
    ReadingStatus::ALL
        .into_iter()
        .map(|status| {
            let count = grouped
                .iter()
                .filter(|(s, _)| *s == status)
                .map(|(_, c)| *c)
                .sum();
            StatusCount {
                status,
                count,
                percentage: percentage_of(count, total),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_total_yields_zero_percentages() {
        let breakdown = status_breakdown(0, &[]);
        assert_eq!(breakdown.len(), 3);
        for entry in &breakdown {
            assert_eq!(entry.count, 0);
            assert_eq!(entry.percentage, 0.0);
        }
    }

    #[test]
    fn all_statuses_present_in_fixed_order() {
        let breakdown = status_breakdown(1, &[(ReadingStatus::Pending, 1)]);
        let order: Vec<_> = breakdown.iter().map(|e| e.status).collect();
        assert_eq!(
            order,
            vec![
                ReadingStatus::Read,
                ReadingStatus::Pending,
                ReadingStatus::Reading
            ]
        );
        assert_eq!(breakdown[1].count, 1);
        assert_eq!(breakdown[1].percentage, 100.0);
        assert_eq!(breakdown[0].percentage, 0.0);
        assert_eq!(breakdown[2].percentage, 0.0);
    }

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(percentage_of(1, 3), 33.3);
        assert_eq!(percentage_of(2, 3), 66.7);
        assert_eq!(percentage_of(1, 8), 12.5);
        assert_eq!(percentage_of(5, 0), 0.0);
    }

    #[test]
    fn percentages_sum_to_about_one_hundred() {
        for total in 1..=40_i64 {
            for read in 0..=total {
                for pending in 0..=(total - read) {
                    let reading = total - read - pending;
                    let grouped = [
                        (ReadingStatus::Read, read),
                        (ReadingStatus::Pending, pending),
                        (ReadingStatus::Reading, reading),
                    ];
                    let breakdown = status_breakdown(total, &grouped);
                    let counts: i64 = breakdown.iter().map(|e| e.count).sum();
                    let sum: f64 = breakdown.iter().map(|e| e.percentage).sum();
                    assert_eq!(counts, total);
                    assert!(
                        (99.7..=100.3).contains(&sum),
                        "sum {sum} out of range for {read}/{pending}/{reading}"
                    );
                }
            }
        }
    }

    #[test]
    fn serializes_status_as_label() {
        let entry = StatusCount {
            status: ReadingStatus::Read,
            count: 2,
            percentage: 50.0,
        };
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(json["status"], "Leído");
        assert_eq!(json["count"], 2);
        assert_eq!(json["percentage"], 50.0);
    }
}
