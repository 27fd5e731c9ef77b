use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A multiple-choice question. Read-only from the API; retired questions are
/// deactivated rather than deleted.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: i64,
    pub question_text: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_option: CorrectOption,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum CorrectOption {
    A,
    B,
    C,
    D,
}

impl Question {
    pub fn options(&self) -> [&str; 4] {
        [
            &self.option_a,
            &self.option_b,
            &self.option_c,
            &self.option_d,
        ]
    }

    pub fn correct_answer_text(&self) -> &str {
        match self.correct_option {
            CorrectOption::A => &self.option_a,
            CorrectOption::B => &self.option_b,
            CorrectOption::C => &self.option_c,
            CorrectOption::D => &self.option_d,
        }
    }
}

#[cfg(test)]
impl Question {
    pub fn test_question(id: i64, is_active: bool) -> Self {
        Question {
            id,
            question_text: format!("Question {}?", id),
            option_a: "Alpha".to_string(),
            option_b: "Bravo".to_string(),
            option_c: "Charlie".to_string(),
            option_d: "Delta".to_string(),
            correct_option: CorrectOption::B,
            is_active,
            created_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_option_round_trip_serialization() {
        let variants = [
            CorrectOption::A,
            CorrectOption::B,
            CorrectOption::C,
            CorrectOption::D,
        ];

        for variant in variants {
            let json = serde_json::to_string(&variant).expect("variant should serialize");
            let parsed: CorrectOption =
                serde_json::from_str(&json).expect("variant should deserialize");
            assert_eq!(variant, parsed);
        }
    }

    #[test]
    fn correct_option_rejects_unknown_variant() {
        let parsed = serde_json::from_str::<CorrectOption>("\"E\"");

        assert!(parsed.is_err());
    }

    #[test]
    fn correct_answer_text_follows_marker() {
        let mut question = Question::test_question(1, true);
        assert_eq!(question.correct_answer_text(), "Bravo");

        question.correct_option = CorrectOption::D;
        assert_eq!(question.correct_answer_text(), "Delta");
    }

    #[test]
    fn options_preserve_order() {
        let question = Question::test_question(1, true);

        assert_eq!(
            question.options(),
            ["Alpha", "Bravo", "Charlie", "Delta"]
        );
    }
}
