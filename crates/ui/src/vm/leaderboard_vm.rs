use services::LeaderboardItem;

use crate::vm::time_fmt::format_date;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardRowVm {
    pub rank: usize,
    pub name: String,
    pub score_label: String,
    pub date_label: String,
}

impl From<&LeaderboardItem> for LeaderboardRowVm {
    fn from(item: &LeaderboardItem) -> Self {
        Self {
            rank: item.rank,
            name: item.name.clone(),
            score_label: format!("{}%", item.score_percent),
            date_label: format_date(item.recorded_at),
        }
    }
}

#[must_use]
pub fn map_leaderboard_rows(items: &[LeaderboardItem]) -> Vec<LeaderboardRowVm> {
    items.iter().map(LeaderboardRowVm::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_core::time::fixed_now;

    #[test]
    fn row_formats_score_and_date() {
        let item = LeaderboardItem {
            rank: 1,
            name: "Guest User".into(),
            score_percent: 50,
            recorded_at: fixed_now(),
            quiz_type: "q1".into(),
        };
        let rows = map_leaderboard_rows(&[item]);
        assert_eq!(rows[0].score_label, "50%");
        assert_eq!(rows[0].date_label, "2023-11-14");
        assert_eq!(rows[0].name, "Guest User");
    }
}
