use serde::{Deserialize, Serialize};

/// Per-user running totals accumulated from game submissions. Counters only
/// ever grow; `best_score` is a running maximum.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    pub user_id: String,
    pub total_games: i64,
    pub total_correct: i64,
    pub total_wrong: i64,
    pub best_score: i64,
}

impl Profile {
    pub fn empty(user_id: &str) -> Self {
        Profile {
            user_id: user_id.to_string(),
            total_games: 0,
            total_correct: 0,
            total_wrong: 0,
            best_score: 0,
        }
    }

    /// Mean correct answers per game; 0 for a profile with no games.
    pub fn average_score(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        round2(self.total_correct as f64 / self.total_games as f64)
    }

    /// Correct answers as a percentage of all answers; 0 when nothing has
    /// been answered yet.
    pub fn accuracy(&self) -> f64 {
        let answered = self.total_correct + self.total_wrong;
        if answered == 0 {
            return 0.0;
        }
        round2(self.total_correct as f64 / answered as f64 * 100.0)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_profile_reports_zero_stats() {
        let profile = Profile::empty("user-1");

        assert_eq!(profile.total_games, 0);
        assert_eq!(profile.average_score(), 0.0);
        assert_eq!(profile.accuracy(), 0.0);
    }

    #[test]
    fn test_derived_stats_round_to_two_decimals() {
        let profile = Profile {
            user_id: "user-1".to_string(),
            total_games: 3,
            total_correct: 10,
            total_wrong: 5,
            best_score: 7,
        };

        // 10 / 3 = 3.333...
        assert_eq!(profile.average_score(), 3.33);
        // 10 / 15 * 100 = 66.666...
        assert_eq!(profile.accuracy(), 66.67);
    }

    #[test]
    fn test_all_wrong_answers_report_zero_accuracy() {
        let profile = Profile {
            user_id: "user-1".to_string(),
            total_games: 2,
            total_correct: 0,
            total_wrong: 8,
            best_score: 0,
        };

        assert_eq!(profile.accuracy(), 0.0);
        assert_eq!(profile.average_score(), 0.0);
    }
}
