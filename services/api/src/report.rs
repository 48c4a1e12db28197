use crate::infra::load_answers_json;
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use service_finder::assessment::views::{persona_ranges, question_views};
use service_finder::assessment::{
    AnswerSheetImporter, AssessmentCatalog, AssessmentSession, PackageOffer, PersonaRangeView,
    Question, RecommendationEngine, RecommendationView, ScoreBreakdown, SessionStep, Toggle,
    UserAnswer,
};
use service_finder::config::AppConfig;
use service_finder::error::AppError;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Emit JSON instead of a formatted listing
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RecommendArgs {
    /// Answer as QUESTION=OPTION[,OPTION...]; repeat for each question
    #[arg(long = "answer", value_parser = crate::infra::parse_answer)]
    pub(crate) answers: Vec<UserAnswer>,
    /// JSON file holding an array of {"questionId", "selectedOptions"} records
    #[arg(long)]
    pub(crate) answers_json: Option<PathBuf>,
    /// Include the per-option score breakdown
    #[arg(long)]
    pub(crate) breakdown: bool,
    /// Emit JSON instead of a formatted report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ImportArgs {
    /// CSV export with Respondent, Question and Selected Options columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Emit JSON instead of a formatted report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
struct RecommendationReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    respondent: Option<String>,
    #[serde(flatten)]
    recommendation: RecommendationView,
    score_ranges: Vec<PersonaRangeView>,
    assessed_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<ScoreBreakdown>,
}

impl RecommendationReport {
    fn new(
        engine: &RecommendationEngine<'_>,
        respondent: Option<String>,
        answers: &[UserAnswer],
        include_breakdown: bool,
    ) -> Self {
        let recommendation = engine.recommend(answers);
        Self {
            respondent,
            recommendation: recommendation.view(),
            score_ranges: persona_ranges(engine.catalog(), Some(&recommendation)),
            assessed_at: Utc::now(),
            breakdown: include_breakdown.then(|| engine.breakdown(answers)),
        }
    }
}

fn configured_engine() -> Result<RecommendationEngine<'static>, AppError> {
    let config = AppConfig::load()?;
    Ok(RecommendationEngine::standard().with_policy(config.assessment.duplicate_answers))
}

pub(crate) fn run_questions(args: CatalogArgs) -> Result<(), AppError> {
    let catalog = AssessmentCatalog::standard();
    let views = question_views(catalog);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    println!("Federal readiness assessment ({} questions)", views.len());
    for view in &views {
        println!("\n{}. {}", view.position, view.text);
        if let Some(hint) = &view.selection_hint {
            println!("   ({hint})");
        }
        for option in &view.options {
            match option.subtext {
                Some(subtext) => println!("   - [{}] {} ({})", option.id, option.text, subtext),
                None => println!("   - [{}] {}", option.id, option.text),
            }
        }
    }

    Ok(())
}

pub(crate) fn run_personas(args: CatalogArgs) -> Result<(), AppError> {
    let catalog = AssessmentCatalog::standard();
    let ranges = persona_ranges(catalog, None);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&ranges)?);
        return Ok(());
    }

    println!("Persona score ranges");
    render_ranges(&ranges);
    println!(
        "Maximum attainable score: {} pts",
        catalog.max_attainable_score()
    );
    Ok(())
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        mut answers,
        answers_json,
        breakdown,
        json,
    } = args;

    if let Some(path) = answers_json {
        let mut loaded = load_answers_json(&path)?;
        loaded.append(&mut answers);
        answers = loaded;
    }

    let engine = configured_engine()?;
    let report = RecommendationReport::new(&engine, None, &answers, breakdown);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_report(&report);
    }
    Ok(())
}

pub(crate) fn run_import(args: ImportArgs) -> Result<(), AppError> {
    let sheets = AnswerSheetImporter::from_path(&args.csv)?;
    let engine = configured_engine()?;

    let reports: Vec<RecommendationReport> = sheets
        .into_iter()
        .map(|sheet| {
            RecommendationReport::new(&engine, Some(sheet.respondent), &sheet.answers, false)
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    println!(
        "Imported {} respondent(s) from {}",
        reports.len(),
        args.csv.display()
    );
    for report in &reports {
        let view = &report.recommendation;
        println!(
            "- {}: {} pts -> {} ({})",
            report.respondent.as_deref().unwrap_or("unknown"),
            view.total_score,
            view.persona_name,
            view.package.availability_label
        );
    }
    Ok(())
}

pub(crate) fn run_interview() -> Result<(), AppError> {
    let engine = configured_engine()?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let outcome = interview(&engine, stdin.lock(), &mut stdout.lock())?;

    if let Some(answers) = outcome {
        let report = RecommendationReport::new(&engine, None, &answers, false);
        render_report(&report);
    }
    Ok(())
}

/// Walk the questionnaire over a line-oriented reader. Returns `None` when the
/// respondent quits or input ends before the last question.
pub(crate) fn interview<R: BufRead, W: Write>(
    engine: &RecommendationEngine<'_>,
    input: R,
    output: &mut W,
) -> Result<Option<Vec<UserAnswer>>, AppError> {
    let mut session = AssessmentSession::new(engine.catalog());
    let mut lines = input.lines();

    loop {
        let question = session.current_question();
        writeln!(
            output,
            "\nQuestion {} of {} ({}% complete)",
            session.step() + 1,
            session.total_steps(),
            session.progress_percent()
        )?;
        writeln!(output, "{}", question.text)?;
        if let Some(hint) = question.selection_hint() {
            writeln!(output, "({hint})")?;
        }
        for (index, option) in question.options.iter().enumerate() {
            let marker = if session.selected().contains(&option.id) {
                "*"
            } else {
                " "
            };
            writeln!(output, " {marker}{}. {}", index + 1, option.text)?;
        }
        write!(output, "Choose (numbers or ids, comma separated; b = back, q = quit): ")?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            return Ok(None);
        };
        let line = line.trim();

        match line {
            "q" | "quit" => return Ok(None),
            "b" | "back" => {
                session.back();
                continue;
            }
            "" => {}
            _ => {
                let previous: Vec<&'static str> = session.selected().to_vec();
                session.clear_selection();

                let mut rejected = false;
                for token in line.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                    let option_id = resolve_option(question, token);
                    match session.toggle(&option_id) {
                        Ok(Toggle::Ignored) => {
                            rejected = true;
                            let hint = question
                                .selection_hint()
                                .unwrap_or_else(|| "selection limit reached".to_string());
                            writeln!(output, "  '{token}' not added: {hint}")?;
                        }
                        Ok(_) => {}
                        Err(err) => {
                            rejected = true;
                            writeln!(output, "  {err}")?;
                        }
                    }
                }

                if rejected {
                    session.clear_selection();
                    for option_id in previous {
                        session.toggle(option_id)?;
                    }
                    continue;
                }
            }
        }

        match session.advance() {
            Ok(SessionStep::Next) => {}
            Ok(SessionStep::Complete(answers)) => return Ok(Some(answers)),
            Err(err) => writeln!(output, "  {err}")?,
        }
    }
}

fn resolve_option(question: &Question, token: &str) -> String {
    token
        .parse::<usize>()
        .ok()
        .and_then(|position| position.checked_sub(1))
        .and_then(|index| question.options.get(index))
        .map(|option| option.id.to_string())
        .unwrap_or_else(|| token.to_string())
}

fn render_report(report: &RecommendationReport) {
    let view = &report.recommendation;
    let package = &view.package;

    println!("Your business persona: {}", view.persona_name);
    println!("Score: {} pts ({})", view.total_score, view.score_range);
    println!("{}", view.description);

    println!("\nCharacteristics");
    for characteristic in &view.characteristics {
        println!("- {characteristic}");
    }
    println!("\nKey insights");
    for insight in &view.key_insights {
        println!("- {insight}");
    }

    println!("\nRecommended package: {}", package.package_name);
    match package.availability {
        PackageOffer::Priced => {
            println!("{:<48} {:>12} {:>12}", "Service", "Retail", "Package");
            for service in &package.services {
                println!(
                    "{:<48} {:>12} {:>12}",
                    service.name,
                    format_dollars(service.retail_price),
                    format_dollars(service.package_price)
                );
            }
            println!(
                "{:<48} {:>12} {:>12}",
                "Total",
                format_dollars(package.retail_total),
                format_dollars(package.package_total)
            );
            println!(
                "You save {} ({}% off retail)",
                format_dollars(package.savings),
                package.discount_percentage
            );
        }
        PackageOffer::ComingSoon => {
            println!("{}", package.availability_label);
            for service in &package.services {
                println!("- {}", service.name);
            }
        }
    }

    if let Some(breakdown) = &report.breakdown {
        println!("\nScore breakdown");
        for contribution in &breakdown.contributions {
            println!(
                "- {} / {}: {} pts",
                contribution.question_id, contribution.option_id, contribution.points
            );
        }
        if !breakdown.skipped.is_empty() {
            println!("- {} unrecognised reference(s) ignored", breakdown.skipped.len());
        }
    }

    println!("\nScore ranges");
    render_ranges(&report.score_ranges);
}

fn render_ranges(ranges: &[PersonaRangeView]) {
    for range in ranges {
        let marker = if range.is_match { ">" } else { " " };
        println!(
            "{marker} {:<22} {:<12} {}",
            range.persona_name, range.range_label, range.package_name
        );
    }
}

fn format_dollars(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("${grouped}")
}
