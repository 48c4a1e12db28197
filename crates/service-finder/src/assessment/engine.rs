use super::catalog::AssessmentCatalog;
use super::domain::{DuplicateAnswerPolicy, Persona, UserAnswer};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Stateless scorer mapping recorded answers onto a persona.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationEngine<'a> {
    catalog: &'a AssessmentCatalog,
    policy: DuplicateAnswerPolicy,
}

impl RecommendationEngine<'static> {
    pub fn standard() -> Self {
        Self::new(AssessmentCatalog::standard(), DuplicateAnswerPolicy::default())
    }
}

impl<'a> RecommendationEngine<'a> {
    pub fn new(catalog: &'a AssessmentCatalog, policy: DuplicateAnswerPolicy) -> Self {
        Self { catalog, policy }
    }

    pub fn with_policy(self, policy: DuplicateAnswerPolicy) -> Self {
        Self { policy, ..self }
    }

    pub fn catalog(&self) -> &'a AssessmentCatalog {
        self.catalog
    }

    pub fn policy(&self) -> DuplicateAnswerPolicy {
        self.policy
    }

    pub fn score(&self, answers: &[UserAnswer]) -> u32 {
        self.breakdown(answers).total_score()
    }

    /// Resolve every answer against the catalog, recording what counted and what was skipped.
    pub fn breakdown(&self, answers: &[UserAnswer]) -> ScoreBreakdown {
        let mut breakdown = ScoreBreakdown::default();
        let last_positions = match self.policy {
            DuplicateAnswerPolicy::SumAll => None,
            DuplicateAnswerPolicy::LastAnswerWins => Some(last_answer_positions(answers)),
        };

        for (position, answer) in answers.iter().enumerate() {
            if let Some(last) = &last_positions {
                if last.get(answer.question_id.as_str()) != Some(&position) {
                    breakdown.superseded_answers += 1;
                    continue;
                }
            }

            let Some(question) = self.catalog.find_question(&answer.question_id) else {
                debug!(question_id = %answer.question_id, "skipping answer for unknown question");
                breakdown.skipped.push(SkippedReference::UnknownQuestion {
                    question_id: answer.question_id.clone(),
                });
                continue;
            };

            for option_id in &answer.selected_options {
                match question.find_option(option_id) {
                    Some(option) => breakdown.contributions.push(ScoreContribution {
                        question_id: question.id,
                        option_id: option.id,
                        points: option.points,
                    }),
                    None => {
                        debug!(
                            question_id = question.id,
                            option_id = %option_id,
                            "skipping unknown option"
                        );
                        breakdown.skipped.push(SkippedReference::UnknownOption {
                            question_id: question.id.to_string(),
                            option_id: option_id.clone(),
                        });
                    }
                }
            }
        }

        breakdown
    }

    /// First persona in catalog order whose range holds `score`, else the first persona.
    pub fn match_persona(&self, score: u32) -> &'a Persona {
        let personas = self.catalog.personas();
        personas
            .iter()
            .find(|persona| persona.range.contains(score))
            .unwrap_or_else(|| {
                debug!(score, "score outside every persona range, using default persona");
                // The catalog is never built without personas.
                &personas[0]
            })
    }

    pub fn recommend(&self, answers: &[UserAnswer]) -> Recommendation<'a> {
        let total_score = self.score(answers);
        let persona = self.match_persona(total_score);
        debug!(
            total_score,
            persona = persona.id,
            answers = answers.len(),
            "assessment scored"
        );

        Recommendation {
            persona,
            total_score,
        }
    }
}

fn last_answer_positions(answers: &[UserAnswer]) -> HashMap<&str, usize> {
    answers
        .iter()
        .enumerate()
        .map(|(position, answer)| (answer.question_id.as_str(), position))
        .collect()
}

/// Matched persona alongside the raw score that selected it.
#[derive(Debug, Clone, Copy)]
pub struct Recommendation<'a> {
    pub persona: &'a Persona,
    pub total_score: u32,
}

/// Points awarded for one resolved option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreContribution {
    pub question_id: &'static str,
    pub option_id: &'static str,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkippedReference {
    UnknownQuestion {
        question_id: String,
    },
    UnknownOption {
        question_id: String,
        option_id: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub contributions: Vec<ScoreContribution>,
    pub skipped: Vec<SkippedReference>,
    pub superseded_answers: usize,
}

impl ScoreBreakdown {
    pub fn total_score(&self) -> u32 {
        self.contributions
            .iter()
            .map(|contribution| contribution.points)
            .sum()
    }
}
