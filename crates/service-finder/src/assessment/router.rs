use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::UserAnswer;
use super::engine::{RecommendationEngine, ScoreBreakdown};
use super::views::{persona_ranges, question_views, PersonaRangeView, RecommendationView};

type SharedEngine = Arc<RecommendationEngine<'static>>;

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub answers: Vec<UserAnswer>,
    #[serde(default)]
    pub include_breakdown: bool,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    #[serde(flatten)]
    pub recommendation: RecommendationView,
    pub score_ranges: Vec<PersonaRangeView>,
    pub assessed_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}

/// Router exposing the questionnaire catalog and the recommendation endpoint.
pub fn assessment_router(engine: SharedEngine) -> Router {
    Router::new()
        .route("/api/v1/assessment/questions", get(questions_handler))
        .route("/api/v1/assessment/personas", get(personas_handler))
        .route(
            "/api/v1/assessment/recommendation",
            post(recommendation_handler),
        )
        .with_state(engine)
}

pub(crate) async fn questions_handler(State(engine): State<SharedEngine>) -> Response {
    let views = question_views(engine.catalog());
    (StatusCode::OK, Json(views)).into_response()
}

pub(crate) async fn personas_handler(State(engine): State<SharedEngine>) -> Response {
    let views = persona_ranges(engine.catalog(), None);
    (StatusCode::OK, Json(views)).into_response()
}

pub(crate) async fn recommendation_handler(
    State(engine): State<SharedEngine>,
    Json(request): Json<RecommendationRequest>,
) -> Response {
    let recommendation = engine.recommend(&request.answers);
    let breakdown = request
        .include_breakdown
        .then(|| engine.breakdown(&request.answers));

    tracing::info!(
        persona = recommendation.persona.id,
        total_score = recommendation.total_score,
        "recommendation served"
    );

    let response = RecommendationResponse {
        recommendation: recommendation.view(),
        score_ranges: persona_ranges(engine.catalog(), Some(&recommendation)),
        assessed_at: Utc::now(),
        breakdown,
    };
    (StatusCode::OK, Json(response)).into_response()
}
