// SPDX-License-Identifier: MPL-2.0
//! Linear ten-question quiz flow.
//!
//! Navigation validates that the current question is answered before moving
//! forward; going back never validates. Scoring compares the recorded answers
//! against the authored answer key, one point per exact match.

use crate::content::{AnswerKey, Choice};
use std::collections::BTreeMap;

pub const QUESTION_COUNT: u8 = 10;

/// Where the quiz UI currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStage {
    /// Intro screen with the start button.
    Intro,
    /// Question flow.
    InProgress,
    /// Result screen with the final score.
    Complete { score: u8 },
}

/// Validation failure for forward navigation and submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizError {
    /// The current question has no selected choice.
    NoSelection,
}

/// Quiz progress and recorded answers.
#[derive(Debug, Clone)]
pub struct QuizState {
    stage: QuizStage,
    current: u8,
    answers: BTreeMap<u8, Choice>,
}

impl Default for QuizState {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stage: QuizStage::Intro,
            current: 1,
            answers: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn stage(&self) -> QuizStage {
        self.stage
    }

    /// Current question number, 1-based.
    #[must_use]
    pub fn current_question(&self) -> u8 {
        self.current
    }

    #[must_use]
    pub fn answer(&self, question: u8) -> Option<Choice> {
        self.answers.get(&question).copied()
    }

    /// Starts (or restarts) the question flow from a clean slate.
    pub fn start(&mut self) {
        self.current = 1;
        self.answers.clear();
        self.stage = QuizStage::InProgress;
    }

    /// Records the selected choice for a question.
    pub fn select(&mut self, question: u8, choice: Choice) {
        if (1..=QUESTION_COUNT).contains(&question) {
            self.answers.insert(question, choice);
        }
    }

    /// Advances to the next question. Requires the current question to be
    /// answered; the index is clamped at the last question.
    pub fn next(&mut self) -> Result<(), QuizError> {
        if self.answer(self.current).is_none() {
            return Err(QuizError::NoSelection);
        }
        if self.current < QUESTION_COUNT {
            self.current += 1;
        }
        Ok(())
    }

    /// Goes back one question, clamped at the first. No validation.
    pub fn previous(&mut self) {
        if self.current > 1 {
            self.current -= 1;
        }
    }

    /// Submits the quiz. The final question must be answered; the score is
    /// one point per answer matching the key.
    pub fn submit(&mut self, key: &AnswerKey) -> Result<u8, QuizError> {
        if self.answer(self.current).is_none() {
            return Err(QuizError::NoSelection);
        }
        let score = (1..=QUESTION_COUNT)
            .filter(|question| {
                self.answers.get(question).copied() == key.correct(*question)
                    && self.answers.contains_key(question)
            })
            .count() as u8;
        self.stage = QuizStage::Complete { score };
        Ok(score)
    }

    /// Clears all answers and returns to the intro screen.
    pub fn restart(&mut self) {
        self.current = 1;
        self.answers.clear();
        self.stage = QuizStage::Intro;
    }

    /// Tiered feedback message for a final score.
    #[must_use]
    pub fn score_message(score: u8) -> &'static str {
        if score >= 9 {
            "Perfetto! Conosci molto bene Regalbuto!"
        } else if score >= 7 {
            "Molto bene! Hai una buona conoscenza della città."
        } else if score >= 5 {
            "Discreto! Conosci alcuni aspetti di Regalbuto."
        } else if score >= 3 {
            "Non male, ma potresti studiare un po' di più!"
        } else {
            "Sembra che tu debba esplorare meglio Regalbuto!"
        }
    }
}
