use super::domain::{Question, QuestionOption, SelectionMode};

const fn choice(id: &'static str, text: &'static str, points: u32) -> QuestionOption {
    QuestionOption {
        id,
        text,
        subtext: None,
        points,
    }
}

const fn detailed(
    id: &'static str,
    text: &'static str,
    subtext: &'static str,
    points: u32,
) -> QuestionOption {
    QuestionOption {
        id,
        text,
        subtext: Some(subtext),
        points,
    }
}

pub(crate) fn standard_questions() -> Vec<Question> {
    vec![
        Question {
            id: "q1",
            text: "What best describes your current federal contracting status?",
            mode: SelectionMode::Single,
            max_selections: None,
            options: vec![
                detailed(
                    "not_registered",
                    "Not yet registered (no SAM.gov, CAGE, or UEI)",
                    "Have not started federal registrations",
                    0,
                ),
                detailed(
                    "recently_registered",
                    "Recently registered (≤6 months)",
                    "Active SAM.gov, minimal activity",
                    5,
                ),
                detailed(
                    "registered_1yr",
                    "Registered 6-12 months",
                    "Some exploration, no wins yet",
                    8,
                ),
                detailed("registered_plus", "Registered 1-3 years", "0-2 contracts", 12),
                detailed(
                    "established",
                    "Established contractor (3-5 years)",
                    "3-10 contracts",
                    18,
                ),
                detailed(
                    "mature",
                    "Mature contractor (5+ years)",
                    "10+ contracts, significant portfolio",
                    25,
                ),
            ],
        },
        Question {
            id: "q2",
            text: "What is your total annual federal revenue?",
            mode: SelectionMode::Single,
            max_selections: None,
            options: vec![
                detailed("zero", "$0", "No federal contracts yet", 0),
                detailed(
                    "under_250k",
                    "Under $250K",
                    "First contract or very small wins",
                    5,
                ),
                detailed("250k_1m", "$250K - $1M", "Early-stage revenue", 10),
                detailed("1m_5m", "$1M - $5M", "Growing federal presence", 15),
                detailed("5m_20m", "$5M - $20M", "Established federal business", 20),
                detailed("over_20m", "Over $20M", "Significant federal contractor", 30),
            ],
        },
        Question {
            id: "q3",
            text: "How many federal contracts do you currently hold or have completed in the last 3 years?",
            mode: SelectionMode::Single,
            max_selections: None,
            options: vec![
                choice("zero", "0 contracts", 0),
                choice("one_two", "1-2 contracts", 8),
                choice("three_five", "3-5 contracts", 12),
                choice("six_ten", "6-10 contracts", 18),
                choice("over_ten", "10+ contracts", 25),
            ],
        },
        Question {
            id: "q4",
            text: "Have you completed any market research to identify your target federal opportunities?",
            mode: SelectionMode::Single,
            max_selections: None,
            options: vec![
                detailed(
                    "no_research",
                    "No - have not started research",
                    "No data-driven insights yet",
                    0,
                ),
                detailed(
                    "informal_research",
                    "Informal research only",
                    "Google searches, website browsing",
                    2,
                ),
                detailed(
                    "some_research",
                    "Some basic research completed",
                    "USASpending queries, basic spend analysis",
                    5,
                ),
                detailed(
                    "comprehensive_research",
                    "Comprehensive market research completed",
                    "Professional analysis, validated insights",
                    10,
                ),
                detailed(
                    "ongoing_research",
                    "Ongoing intelligence and research capability",
                    "In-house or recurring professional support",
                    15,
                ),
            ],
        },
        Question {
            id: "q5",
            text: "What federal registrations and profiles have you completed?",
            mode: SelectionMode::Multiple,
            max_selections: None,
            options: vec![
                choice("none", "None - not started", 0),
                choice("sam_only", "SAM.gov registration only", 3),
                choice("sam_sba", "SAM.gov + SBA/DSBS profile", 5),
                choice("gsa_schedule", "GSA Schedule", 10),
                choice("gwac_idiq", "GWAC or IDIQ vehicle", 12),
                choice(
                    "multiple_vehicles",
                    "Multiple contract vehicles (GSA + others)",
                    15,
                ),
            ],
        },
        Question {
            id: "q6",
            text: "Do you have federal-specific marketing collateral?",
            mode: SelectionMode::Multiple,
            max_selections: None,
            options: vec![
                choice("none", "No federal collateral", 0),
                detailed(
                    "basic_cape",
                    "Basic capability statement",
                    "DIY or generic template",
                    2,
                ),
                detailed(
                    "professional_cape",
                    "Professional capability statement",
                    "Research-driven, well-designed",
                    5,
                ),
                choice("video", "Video content", 5),
                choice("case_studies", "Past performance case studies", 5),
                detailed(
                    "full_suite",
                    "Full federal marketing suite",
                    "Cape, videos, case studies, leave-behinds",
                    10,
                ),
            ],
        },
        Question {
            id: "q7",
            text: "How would you describe your federal market knowledge?",
            mode: SelectionMode::Single,
            max_selections: None,
            options: vec![
                detailed(
                    "minimal",
                    "Minimal - just exploring",
                    "Do not know where to start",
                    0,
                ),
                detailed(
                    "basic",
                    "Basic understanding",
                    "Know about SAM.gov, have heard of set-asides",
                    3,
                ),
                detailed(
                    "intermediate",
                    "Intermediate knowledge",
                    "Understand procurement basics, have target agencies",
                    8,
                ),
                detailed(
                    "advanced",
                    "Advanced understanding",
                    "Know vehicles, procurement strategies, timing",
                    12,
                ),
                detailed(
                    "expert",
                    "Expert-level knowledge",
                    "Deep market intelligence, insider understanding",
                    18,
                ),
            ],
        },
        Question {
            id: "q8",
            text: "What is your PRIMARY goal? (Select one)",
            mode: SelectionMode::Single,
            max_selections: None,
            options: vec![
                choice("first_contract", "Win my first federal contract", 0),
                choice("grow_pipeline", "Grow my pipeline and win more contracts", 0),
                choice("optimize", "Optimize my current portfolio", 0),
                choice(
                    "diversify",
                    "Diversify into new agencies or contract types",
                    0,
                ),
                choice("ma_prep", "Prepare for M&A or strategic exit", 0),
            ],
        },
        Question {
            id: "q9",
            text: "What is your BIGGEST challenge right now? (Select up to 2)",
            mode: SelectionMode::Multiple,
            max_selections: Some(2),
            options: vec![
                choice("no_knowledge", "Do not know how federal market works", 0),
                choice("no_relationships", "No federal relationships or CO access", 0),
                choice("thin_pipeline", "Thin pipeline - hard to forecast", 0),
                choice("losing_bids", "Losing bids to competitors", 0),
                choice("compliance", "Contract management/compliance burden", 0),
                choice("scale", "Do not know how to scale or replicate wins", 0),
            ],
        },
        Question {
            id: "q10",
            text: "How many federal agencies do you actively target or work with?",
            mode: SelectionMode::Single,
            max_selections: None,
            options: vec![
                choice("none", "0 - still identifying targets", 0),
                choice("one", "1 agency", 5),
                choice("two_three", "2-3 agencies", 10),
                choice("four_six", "4-6 agencies", 15),
                choice("over_six", "7+ agencies", 20),
            ],
        },
        Question {
            id: "q11",
            text: "Do you have a dedicated federal BD team?",
            mode: SelectionMode::Single,
            max_selections: None,
            options: vec![
                choice("no_team", "No - founder/owner handles everything", 0),
                choice("part_time", "Part-time person (1 person, <20 hrs/week)", 3),
                choice("one_fte", "1 full-time BD person", 8),
                choice("small_team", "2-3 person BD team", 12),
                choice("full_team", "Full BD/capture team (4+ people)", 18),
            ],
        },
        Question {
            id: "q12",
            text: "How would you describe your win rate on federal proposals?",
            mode: SelectionMode::Single,
            max_selections: None,
            options: vec![
                choice("no_bids", "Have not submitted proposals yet", 0),
                choice("low", "Low (0-15% win rate)", 2),
                choice("fair", "Fair (15-30% win rate)", 8),
                choice("good", "Good (30-50% win rate)", 12),
                choice("excellent", "Excellent (50%+ win rate)", 18),
            ],
        },
        Question {
            id: "q13",
            text: "What is your annual federal BD/capture budget?",
            mode: SelectionMode::Single,
            max_selections: None,
            options: vec![
                detailed("under_50k", "Under $50K", "Minimal investment capacity", 0),
                detailed("50k_150k", "$50K - $150K", "Early-stage investment", 5),
                detailed("150k_300k", "$150K - $300K", "Growing investment", 10),
                detailed("300k_500k", "$300K - $500K", "Established budget", 15),
                detailed(
                    "over_500k",
                    "Over $500K",
                    "Significant investment capacity",
                    20,
                ),
            ],
        },
        Question {
            id: "q14",
            text: "How far out can you forecast your federal pipeline?",
            mode: SelectionMode::Single,
            max_selections: None,
            options: vec![
                choice("no_pipeline", "No pipeline tracking", 0),
                choice("reactive", "Reactive - respond to posted RFPs only", 3),
                choice("3_6_months", "3-6 months visibility", 8),
                choice("6_12_months", "6-12 months visibility", 12),
                choice(
                    "over_12_months",
                    "12+ months visibility with early capture",
                    18,
                ),
            ],
        },
        Question {
            id: "q15",
            text: "Which of the following have you completed? (Select all that apply)",
            mode: SelectionMode::Multiple,
            max_selections: None,
            options: vec![
                choice("none_above", "None of the above", 0),
                choice("market_research", "Professional market research", 5),
                choice("agency_mapping", "Agency prioritization and buyer mapping", 5),
                choice("co_database", "Contracting Officer database", 5),
                choice("competitor_intel", "Competitor intelligence analysis", 5),
                choice("pipeline_tool", "Formal pipeline management system", 5),
                choice("cpars", "CPARS/past performance strategy", 5),
            ],
        },
    ]
}
