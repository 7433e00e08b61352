pub mod error;
pub mod field;
pub mod ids;
pub mod item;
pub mod stats;
pub mod table;

pub use error::{ModelError, Result};
pub use field::MailField;
pub use ids::ItemId;
pub use item::MailItem;
pub use stats::{CourierSummary, Outcome, OutcomeCounts, RunStats};
pub use table::MailTable;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_counts_total() {
        let mut counts = OutcomeCounts::default();
        counts.record(Outcome::Address);
        counts.record(Outcome::Address);
        counts.record(Outcome::Returned);
        assert_eq!(counts.address, 2);
        assert_eq!(counts.returned, 1);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn stats_serialize_round_trip() {
        let mut stats = RunStats {
            total_rows: 10,
            cainiao_rows: 4,
            excluded_rows: 1,
            final_count: 3,
            ..RunStats::default()
        };
        stats.courier_stats.push(CourierSummary {
            name: "张三".to_string(),
            count: 3,
            tracking_numbers: vec![
                "1300000016".to_string(),
                "1300000031".to_string(),
                "1300000032".to_string(),
            ],
        });
        let json = serde_json::to_string(&stats).expect("serialize stats");
        let round: RunStats = serde_json::from_str(&json).expect("deserialize stats");
        assert_eq!(round.final_count, 3);
        assert_eq!(round.courier_stats[0].name, "张三");
        assert_eq!(round.courier_stats[0].count, 3);
    }
}
