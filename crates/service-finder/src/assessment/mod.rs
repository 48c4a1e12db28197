//! Federal market maturity assessment: the fixed questionnaire, the persona
//! catalog, and the scoring engine that maps answers onto a persona.

mod catalog;
pub mod domain;
mod engine;
pub mod import;
mod personas;
mod questions;
pub mod router;
pub mod session;
pub mod views;

#[cfg(test)]
mod tests;

pub use catalog::AssessmentCatalog;
pub use domain::{
    DuplicateAnswerPolicy, PackageOffer, Persona, PersonaPackage, Question, QuestionOption,
    ScoreRange, SelectionMode, ServiceLineItem, UserAnswer,
};
pub use engine::{
    Recommendation, RecommendationEngine, ScoreBreakdown, ScoreContribution, SkippedReference,
};
pub use import::{AnswerImportError, AnswerSheet, AnswerSheetImporter};
pub use router::assessment_router;
pub use session::{AssessmentSession, SessionError, SessionStep, Toggle};
pub use views::{PackageView, PersonaRangeView, QuestionView, RecommendationView};
