use serde::Serialize;

use crate::models::question::Question;

/// Per-question feedback shown after a submission. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewItem {
    pub question_id: i32,
    pub question_text: String,
    pub user_answer: String,
    pub user_answer_text: Option<String>,
    pub correct_answer: String,
    pub correct_answer_text: Option<String>,
    pub explanation: Option<String>,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    pub score: i32,
    pub total: i32,
}

pub struct GradingService;

impl GradingService {
    /// Strict letter equality against the stored correct option.
    pub fn grade_answer(question: &Question, submitted: &str) -> ReviewItem {
        let is_correct = question.correct_option == submitted;
        ReviewItem {
            question_id: question.id,
            question_text: question.question_text.clone(),
            user_answer: submitted.to_string(),
            user_answer_text: question.option_text(submitted).map(str::to_string),
            correct_answer: question.correct_option.clone(),
            correct_answer_text: question
                .option_text(&question.correct_option)
                .map(str::to_string),
            explanation: question.explanation.clone(),
            is_correct,
        }
    }

    pub fn tally(review: &[ReviewItem]) -> Tally {
        Tally {
            score: review.iter().filter(|item| item.is_correct).count() as i32,
            total: review.len() as i32,
        }
    }
}
