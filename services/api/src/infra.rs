use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use service_finder::assessment::UserAnswer;
use service_finder::error::AppError;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Parse `q5=sam_only,gsa_schedule` into an answer record.
pub(crate) fn parse_answer(raw: &str) -> Result<UserAnswer, String> {
    let (question, options) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected QUESTION=OPTION[,OPTION...], got '{raw}'"))?;

    let question = question.trim();
    if question.is_empty() {
        return Err(format!("missing question id in '{raw}'"));
    }

    let options: Vec<&str> = options
        .split(',')
        .map(str::trim)
        .filter(|option| !option.is_empty())
        .collect();

    Ok(UserAnswer::new(question, options))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AnswerFile {
    Bare(Vec<UserAnswer>),
    Wrapped { answers: Vec<UserAnswer> },
}

/// Accepts either a bare answer array or a recommendation request body.
pub(crate) fn load_answers_json(path: &Path) -> Result<Vec<UserAnswer>, AppError> {
    let raw = std::fs::read_to_string(path)?;
    parse_answers_json(&raw)
}

fn parse_answers_json(raw: &str) -> Result<Vec<UserAnswer>, AppError> {
    let answers = match serde_json::from_str(raw)? {
        AnswerFile::Bare(answers) | AnswerFile::Wrapped { answers } => answers,
    };
    Ok(answers)
}
