use super::domain::{Persona, Question};
use super::personas::standard_personas;
use super::questions::standard_questions;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Immutable question and persona tables with id lookups.
#[derive(Debug)]
pub struct AssessmentCatalog {
    questions: Vec<Question>,
    personas: Vec<Persona>,
    question_index: HashMap<&'static str, usize>,
}

impl AssessmentCatalog {
    /// The process-wide catalog, built on first use.
    pub fn standard() -> &'static AssessmentCatalog {
        static CATALOG: OnceLock<AssessmentCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| Self::new(standard_questions(), standard_personas()))
    }

    pub(crate) fn new(questions: Vec<Question>, personas: Vec<Persona>) -> Self {
        let question_index = questions
            .iter()
            .enumerate()
            .map(|(position, question)| (question.id, position))
            .collect();

        Self {
            questions,
            personas,
            question_index,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn personas(&self) -> &[Persona] {
        &self.personas
    }

    pub fn find_question(&self, question_id: &str) -> Option<&Question> {
        self.question_index
            .get(question_id)
            .map(|&position| &self.questions[position])
    }

    pub fn find_persona_by_id(&self, persona_id: &str) -> Option<&Persona> {
        self.personas.iter().find(|persona| persona.id == persona_id)
    }

    /// Highest score reachable by selecting the best options, honouring selection caps.
    pub fn max_attainable_score(&self) -> u32 {
        self.questions.iter().map(Question::max_points).sum()
    }
}
