use axum::response::Response;
use serde_json::Value;
use std::sync::Arc;

use crate::assessment::domain::{
    Persona, PersonaPackage, Question, QuestionOption, ScoreRange, SelectionMode,
};
use crate::assessment::{AssessmentCatalog, RecommendationEngine, UserAnswer};

pub(super) fn answer(question_id: &str, options: &[&str]) -> UserAnswer {
    UserAnswer::new(question_id, options.iter().copied())
}

/// Answers worth exactly 101 points: 25 + 30 + 25 + 3 + 18.
pub(super) fn ultra_answers() -> Vec<UserAnswer> {
    vec![
        answer("q1", &["mature"]),
        answer("q2", &["over_20m"]),
        answer("q3", &["over_ten"]),
        answer("q7", &["basic"]),
        answer("q11", &["full_team"]),
    ]
}

/// A full walk through the questionnaire landing in the Frustrated band (50 points).
pub(super) fn frustrated_answers() -> Vec<UserAnswer> {
    vec![
        answer("q1", &["registered_plus"]),
        answer("q2", &["under_250k"]),
        answer("q3", &["one_two"]),
        answer("q4", &["informal_research"]),
        answer("q5", &["sam_sba"]),
        answer("q6", &["basic_cape"]),
        answer("q7", &["basic"]),
        answer("q8", &["grow_pipeline"]),
        answer("q9", &["losing_bids", "thin_pipeline"]),
        answer("q10", &["one"]),
        answer("q11", &["part_time"]),
        answer("q12", &["low"]),
        answer("q13", &["under_50k"]),
        answer("q14", &["reactive"]),
        answer("q15", &["none_above"]),
    ]
}

pub(super) fn shared_engine() -> Arc<RecommendationEngine<'static>> {
    Arc::new(RecommendationEngine::standard())
}

fn empty_package() -> PersonaPackage {
    PersonaPackage {
        package_name: "Package Coming Soon",
        services: Vec::new(),
        retail_total: 0,
        package_total: 0,
        discount_percentage: 0,
    }
}

fn persona(id: &'static str, range: ScoreRange) -> Persona {
    Persona {
        id,
        name: id,
        description: "test persona",
        range,
        characteristics: Vec::new(),
        key_insights: Vec::new(),
        package: empty_package(),
    }
}

/// Catalog with a hole between 10 and 20 to exercise the fallback persona.
pub(super) fn gapped_catalog() -> AssessmentCatalog {
    AssessmentCatalog::new(
        vec![Question {
            id: "only",
            text: "Pick a number",
            mode: SelectionMode::Single,
            max_selections: None,
            options: vec![
                QuestionOption {
                    id: "five",
                    text: "Five",
                    subtext: None,
                    points: 5,
                },
                QuestionOption {
                    id: "fifteen",
                    text: "Fifteen",
                    subtext: None,
                    points: 15,
                },
            ],
        }],
        vec![
            persona("low", ScoreRange::bounded(0, 10)),
            persona("high", ScoreRange::open_ended(20)),
        ],
    )
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
