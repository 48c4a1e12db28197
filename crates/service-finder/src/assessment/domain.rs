use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    Single,
    Multiple,
}

impl SelectionMode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Single => "Single choice",
            Self::Multiple => "Multiple choice",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionOption {
    pub id: &'static str,
    pub text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtext: Option<&'static str>,
    pub points: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub mode: SelectionMode,
    /// Advisory cap for the questionnaire; scoring never reads it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_selections: Option<usize>,
    pub options: Vec<QuestionOption>,
}

impl Question {
    pub fn find_option(&self, option_id: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|option| option.id == option_id)
    }

    pub fn max_points(&self) -> u32 {
        match self.mode {
            SelectionMode::Single => self
                .options
                .iter()
                .map(|option| option.points)
                .max()
                .unwrap_or(0),
            SelectionMode::Multiple => {
                let mut points: Vec<u32> = self.options.iter().map(|option| option.points).collect();
                points.sort_unstable_by(|a, b| b.cmp(a));
                let take = self.max_selections.unwrap_or(points.len());
                points.into_iter().take(take).sum()
            }
        }
    }

    pub fn selection_hint(&self) -> Option<String> {
        match (self.mode, self.max_selections) {
            (SelectionMode::Single, _) => None,
            (SelectionMode::Multiple, Some(limit)) => Some(format!("Select up to {limit} options")),
            (SelectionMode::Multiple, None) => Some("Select all that apply".to_string()),
        }
    }
}

/// One recorded answer as supplied by the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAnswer {
    #[serde(alias = "questionId", alias = "questionAnswered")]
    pub question_id: String,
    #[serde(default, alias = "selectedOptions")]
    pub selected_options: Vec<String>,
}

impl UserAnswer {
    pub fn new<Q, I, O>(question_id: Q, selected_options: I) -> Self
    where
        Q: Into<String>,
        I: IntoIterator<Item = O>,
        O: Into<String>,
    {
        Self {
            question_id: question_id.into(),
            selected_options: selected_options.into_iter().map(Into::into).collect(),
        }
    }
}

/// Inclusive point range owned by a persona. `max_points == None` is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreRange {
    pub min_points: u32,
    pub max_points: Option<u32>,
}

impl ScoreRange {
    pub const fn bounded(min_points: u32, max_points: u32) -> Self {
        Self {
            min_points,
            max_points: Some(max_points),
        }
    }

    pub const fn open_ended(min_points: u32) -> Self {
        Self {
            min_points,
            max_points: None,
        }
    }

    pub fn contains(&self, score: u32) -> bool {
        score >= self.min_points && self.max_points.map_or(true, |max| score <= max)
    }

    pub fn label(&self) -> String {
        match self.max_points {
            Some(max) => format!("{}-{} pts", self.min_points, max),
            None => format!("{}+ pts", self.min_points),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceLineItem {
    pub name: &'static str,
    pub retail_price: u32,
    pub package_price: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonaPackage {
    pub package_name: &'static str,
    pub services: Vec<ServiceLineItem>,
    pub retail_total: u32,
    pub package_total: u32,
    pub discount_percentage: u8,
}

/// How the results page should present a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageOffer {
    Priced,
    ComingSoon,
}

impl PackageOffer {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Priced => "Recommended Package",
            Self::ComingSoon => "Package Coming Soon",
        }
    }
}

impl PersonaPackage {
    pub fn offer(&self) -> PackageOffer {
        if self.retail_total > 0 {
            PackageOffer::Priced
        } else {
            PackageOffer::ComingSoon
        }
    }

    pub fn savings(&self) -> u32 {
        self.retail_total.saturating_sub(self.package_total)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Persona {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub range: ScoreRange,
    pub characteristics: Vec<&'static str>,
    pub key_insights: Vec<&'static str>,
    pub package: PersonaPackage,
}

/// Which answers are counted when the same question appears more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateAnswerPolicy {
    /// Every supplied answer contributes, duplicates included.
    #[default]
    SumAll,
    /// Only the last answer supplied for a question contributes.
    LastAnswerWins,
}

impl DuplicateAnswerPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sum" | "sum_all" | "all" => Some(Self::SumAll),
            "last" | "last_answer_wins" | "dedupe" => Some(Self::LastAnswerWins),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SumAll => "sum all answers",
            Self::LastAnswerWins => "last answer wins",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_ended_range_accepts_any_score_above_floor() {
        let range = ScoreRange::open_ended(101);
        assert!(!range.contains(100));
        assert!(range.contains(101));
        assert!(range.contains(u32::MAX));
        assert_eq!(range.label(), "101+ pts");
    }

    #[test]
    fn bounded_range_is_inclusive() {
        let range = ScoreRange::bounded(21, 40);
        assert!(range.contains(21));
        assert!(range.contains(40));
        assert!(!range.contains(20));
        assert!(!range.contains(41));
        assert_eq!(range.label(), "21-40 pts");
    }

    #[test]
    fn answers_accept_camel_case_payloads() {
        let answer: UserAnswer =
            serde_json::from_str(r#"{"questionAnswered":"q2","selectedOptions":["over_20m"]}"#)
                .expect("camel case answer parses");
        assert_eq!(answer, UserAnswer::new("q2", ["over_20m"]));

        let answer: UserAnswer = serde_json::from_str(r#"{"questionId":"q9"}"#)
            .expect("missing selections default to empty");
        assert!(answer.selected_options.is_empty());
    }

    #[test]
    fn duplicate_policy_parses_known_values() {
        assert_eq!(
            DuplicateAnswerPolicy::parse(" SUM "),
            Some(DuplicateAnswerPolicy::SumAll)
        );
        assert_eq!(
            DuplicateAnswerPolicy::parse("last"),
            Some(DuplicateAnswerPolicy::LastAnswerWins)
        );
        assert_eq!(DuplicateAnswerPolicy::parse("maybe"), None);
    }
}
