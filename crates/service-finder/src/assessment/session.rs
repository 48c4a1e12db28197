//! Step-by-step questionnaire state, as driven by an interactive front end.
//!
//! Selection caps and the "at least one option" rule live here rather than in
//! the scoring engine, which accepts whatever answers it is handed.

use super::catalog::AssessmentCatalog;
use super::domain::{Question, SelectionMode, UserAnswer};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("option '{option_id}' is not offered by question {question_id}")]
    UnknownOption {
        question_id: &'static str,
        option_id: String,
    },
    #[error("select at least one option before continuing")]
    NoSelection,
    #[error("the assessment is already complete")]
    Completed,
}

/// Result of advancing past the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStep {
    Next,
    Complete(Vec<UserAnswer>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Selected,
    Deselected,
    /// The question's selection cap was already reached.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct AssessmentSession<'a> {
    catalog: &'a AssessmentCatalog,
    step: usize,
    answers: Vec<UserAnswer>,
    selected: Vec<&'static str>,
    completed: bool,
}

impl AssessmentSession<'static> {
    pub fn standard() -> Self {
        Self::new(AssessmentCatalog::standard())
    }
}

impl<'a> AssessmentSession<'a> {
    pub fn new(catalog: &'a AssessmentCatalog) -> Self {
        Self {
            catalog,
            step: 0,
            answers: Vec::new(),
            selected: Vec::new(),
            completed: false,
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn total_steps(&self) -> usize {
        self.catalog.questions().len()
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn current_question(&self) -> &'a Question {
        &self.catalog.questions()[self.step]
    }

    pub fn selected(&self) -> &[&'static str] {
        &self.selected
    }

    pub fn answers(&self) -> &[UserAnswer] {
        &self.answers
    }

    pub fn progress_percent(&self) -> u8 {
        let total = self.total_steps().max(1);
        (((self.step + 1) as f32 / total as f32) * 100.0).round() as u8
    }

    pub fn toggle(&mut self, option_id: &str) -> Result<Toggle, SessionError> {
        if self.completed {
            return Err(SessionError::Completed);
        }

        let question = self.current_question();
        let option = question
            .find_option(option_id)
            .ok_or_else(|| SessionError::UnknownOption {
                question_id: question.id,
                option_id: option_id.to_string(),
            })?;

        if question.mode == SelectionMode::Single {
            self.selected = vec![option.id];
            return Ok(Toggle::Selected);
        }

        if let Some(position) = self.selected.iter().position(|id| *id == option.id) {
            self.selected.remove(position);
            return Ok(Toggle::Deselected);
        }

        let cap = question.max_selections.unwrap_or(usize::MAX);
        if self.selected.len() >= cap {
            return Ok(Toggle::Ignored);
        }

        self.selected.push(option.id);
        Ok(Toggle::Selected)
    }

    /// Store the current selection and move on, or finish after the last question.
    pub fn advance(&mut self) -> Result<SessionStep, SessionError> {
        if self.completed {
            return Err(SessionError::Completed);
        }
        if self.selected.is_empty() {
            return Err(SessionError::NoSelection);
        }

        let question_id = self.current_question().id;
        self.answers.retain(|answer| answer.question_id != question_id);
        self.answers
            .push(UserAnswer::new(question_id, self.selected.iter().copied()));

        if self.step + 1 == self.total_steps() {
            self.completed = true;
            return Ok(SessionStep::Complete(self.answers.clone()));
        }

        self.step += 1;
        self.restore_selection();
        Ok(SessionStep::Next)
    }

    /// Drop the pending selection for the current question.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn back(&mut self) {
        if self.step == 0 || self.completed {
            return;
        }
        self.step -= 1;
        self.restore_selection();
    }

    pub fn restart(&mut self) {
        self.step = 0;
        self.answers.clear();
        self.selected.clear();
        self.completed = false;
    }

    fn restore_selection(&mut self) {
        let question = self.current_question();
        self.selected = self
            .answers
            .iter()
            .find(|answer| answer.question_id == question.id)
            .map(|answer| {
                answer
                    .selected_options
                    .iter()
                    .filter_map(|id| question.find_option(id).map(|option| option.id))
                    .collect()
            })
            .unwrap_or_default();
    }
}
