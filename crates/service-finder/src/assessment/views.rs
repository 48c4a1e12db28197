use super::catalog::AssessmentCatalog;
use super::domain::{PackageOffer, Persona, PersonaPackage, Question, SelectionMode, ServiceLineItem};
use super::engine::Recommendation;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PackageView {
    pub package_name: &'static str,
    pub availability: PackageOffer,
    pub availability_label: &'static str,
    pub services: Vec<ServiceLineItem>,
    pub retail_total: u32,
    pub package_total: u32,
    pub discount_percentage: u8,
    pub savings: u32,
}

impl From<&PersonaPackage> for PackageView {
    fn from(package: &PersonaPackage) -> Self {
        let availability = package.offer();
        Self {
            package_name: package.package_name,
            availability,
            availability_label: availability.label(),
            services: package.services.clone(),
            retail_total: package.retail_total,
            package_total: package.package_total,
            discount_percentage: package.discount_percentage,
            savings: package.savings(),
        }
    }
}

/// Everything the results page renders, without further catalog lookups.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationView {
    pub persona_id: &'static str,
    pub persona_name: &'static str,
    pub description: &'static str,
    pub score_range: String,
    pub characteristics: Vec<&'static str>,
    pub key_insights: Vec<&'static str>,
    pub package: PackageView,
    pub total_score: u32,
}

impl Recommendation<'_> {
    pub fn view(&self) -> RecommendationView {
        let persona = self.persona;
        RecommendationView {
            persona_id: persona.id,
            persona_name: persona.name,
            description: persona.description,
            score_range: persona.range.label(),
            characteristics: persona.characteristics.clone(),
            key_insights: persona.key_insights.clone(),
            package: PackageView::from(&persona.package),
            total_score: self.total_score,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonaRangeView {
    pub persona_id: &'static str,
    pub persona_name: &'static str,
    pub min_points: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_points: Option<u32>,
    pub range_label: String,
    pub package_name: &'static str,
    pub availability: PackageOffer,
    pub is_match: bool,
}

impl PersonaRangeView {
    fn new(persona: &Persona, matched: Option<&str>) -> Self {
        Self {
            persona_id: persona.id,
            persona_name: persona.name,
            min_points: persona.range.min_points,
            max_points: persona.range.max_points,
            range_label: persona.range.label(),
            package_name: persona.package.package_name,
            availability: persona.package.offer(),
            is_match: matched == Some(persona.id),
        }
    }
}

/// Score-range reference table, optionally highlighting the matched persona.
pub fn persona_ranges(
    catalog: &AssessmentCatalog,
    matched: Option<&Recommendation<'_>>,
) -> Vec<PersonaRangeView> {
    let matched_id = matched.map(|recommendation| recommendation.persona.id);
    catalog
        .personas()
        .iter()
        .map(|persona| PersonaRangeView::new(persona, matched_id))
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionView {
    pub id: &'static str,
    pub text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtext: Option<&'static str>,
}

/// Question as shown to respondents. Point values stay server-side.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: &'static str,
    pub position: usize,
    pub text: &'static str,
    pub mode: SelectionMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_selections: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_hint: Option<String>,
    pub options: Vec<OptionView>,
}

impl QuestionView {
    fn new(position: usize, question: &Question) -> Self {
        Self {
            id: question.id,
            position,
            text: question.text,
            mode: question.mode,
            max_selections: question.max_selections,
            selection_hint: question.selection_hint(),
            options: question
                .options
                .iter()
                .map(|option| OptionView {
                    id: option.id,
                    text: option.text,
                    subtext: option.subtext,
                })
                .collect(),
        }
    }
}

pub fn question_views(catalog: &AssessmentCatalog) -> Vec<QuestionView> {
    catalog
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| QuestionView::new(index + 1, question))
        .collect()
}
