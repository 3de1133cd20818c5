pub const TOPIC_FIELD: &str = "topic_name";
pub const DEFAULT_TOPIC_NAME: &str = "Quiz";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedAnswer {
    pub question_id: i32,
    pub option: String,
}

/// A quiz form after the `q<id>` keys have been picked out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSubmission {
    /// In form order. A repeated key yields repeated entries.
    pub answers: Vec<SubmittedAnswer>,
    pub topic_name: Option<String>,
}

impl QuizSubmission {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut submission = QuizSubmission::default();
        for (key, value) in pairs {
            if key == TOPIC_FIELD {
                if submission.topic_name.is_none() && !value.trim().is_empty() {
                    submission.topic_name = Some(value);
                }
            } else if let Some(question_id) = parse_question_key(&key) {
                submission.answers.push(SubmittedAnswer {
                    question_id,
                    option: value,
                });
            }
        }
        submission
    }

    pub fn topic_label(&self) -> &str {
        self.topic_name.as_deref().unwrap_or(DEFAULT_TOPIC_NAME)
    }
}

/// `q42` -> 42. Anything else is not an answer field.
pub fn parse_question_key(key: &str) -> Option<i32> {
    let digits = key.strip_prefix('q')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
