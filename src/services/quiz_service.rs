use std::sync::Arc;

use rand::seq::SliceRandom;

use crate::database::store::PortalStore;
use crate::dto::quiz_dto::QuizSubmission;
use crate::error::Result;
use crate::models::mock_result::{MockResult, NewResult};
use crate::models::question::Question;
use crate::services::grading_service::{GradingService, ReviewItem};
use crate::utils::sampling::sample_ids;

#[derive(Debug, Clone)]
pub struct QuizOutcome {
    pub result: MockResult,
    pub review: Vec<ReviewItem>,
}

impl QuizOutcome {
    pub fn score(&self) -> i32 {
        self.result.score
    }

    pub fn total(&self) -> i32 {
        self.result.total_questions
    }
}

#[derive(Clone)]
pub struct QuizService {
    store: Arc<dyn PortalStore>,
    quiz_size: usize,
}

impl QuizService {
    pub fn new(store: Arc<dyn PortalStore>, quiz_size: usize) -> Self {
        Self { store, quiz_size }
    }

    /// A fresh random set of at most `quiz_size` questions for `topic`.
    /// Empty when the topic has no questions.
    pub async fn sample_questions(&self, topic: &str) -> Result<Vec<Question>> {
        let ids = self.store.question_ids_for_topic(topic).await?;
        if ids.is_empty() {
            tracing::info!(topic, "No questions found for topic");
            return Ok(Vec::new());
        }

        let picked = {
            let mut rng = rand::thread_rng();
            sample_ids(&ids, self.quiz_size, &mut rng)
        };
        let mut questions = self.store.questions_by_ids(&picked).await?;
        questions.retain(|q| q.topic == topic);
        questions.shuffle(&mut rand::thread_rng());

        tracing::info!(topic, available = ids.len(), served = questions.len(), "Sampled quiz");
        Ok(questions)
    }

    /// Scores every `q<id>` answer against its stored question and records
    /// one result row, whatever the score.
    pub async fn submit(&self, user_id: i32, submission: &QuizSubmission) -> Result<QuizOutcome> {
        let mut review = Vec::with_capacity(submission.answers.len());
        for answer in &submission.answers {
            let Some(question) = self.store.find_question(answer.question_id).await? else {
                tracing::debug!(question_id = answer.question_id, "Skipping unknown question");
                continue;
            };
            review.push(GradingService::grade_answer(&question, &answer.option));
        }

        let tally = GradingService::tally(&review);
        let result = self
            .store
            .insert_result(&NewResult {
                user_id,
                score: tally.score,
                total_questions: tally.total,
                topic_name: submission.topic_label().to_string(),
            })
            .await?;

        tracing::info!(
            user_id,
            topic = %result.topic_name,
            score = result.score,
            total = result.total_questions,
            "Quiz submitted"
        );
        Ok(QuizOutcome { result, review })
    }
}
