use super::domain::{Persona, PersonaPackage, ScoreRange, ServiceLineItem};

const DISCOUNT_PERCENTAGE: u8 = 25;

fn coming_soon_package() -> PersonaPackage {
    PersonaPackage {
        package_name: "Package Coming Soon",
        services: vec![ServiceLineItem {
            name: "Service Package",
            retail_price: 0,
            package_price: 0,
        }],
        retail_total: 0,
        package_total: 0,
        discount_percentage: DISCOUNT_PERCENTAGE,
    }
}

fn line_item(name: &'static str, retail_price: u32, package_price: u32) -> ServiceLineItem {
    ServiceLineItem {
        name,
        retail_price,
        package_price,
    }
}

pub(crate) fn standard_personas() -> Vec<Persona> {
    vec![
        Persona {
            id: "brand-new",
            name: "Brand New",
            description: "No federal experience, little to no understanding of how the market works.",
            range: ScoreRange::bounded(10, 20),
            characteristics: vec![
                "0 federal contracts",
                "No SAM.gov registration or recently started",
                "Minimal knowledge of federal processes",
                "No established relationships with agencies",
                "Limited or no federal-specific collateral",
            ],
            key_insights: vec![
                "Research must come FIRST before any registrations",
                "Need foundational education on federal market dynamics",
                "Focus on eligibility and market intelligence before BD activities",
                "Avoid premature registration without research-driven strategy",
            ],
            package: PersonaPackage {
                package_name: "Steptoe Federal Launch Package",
                services: vec![
                    line_item("Federal Registration Suite", 10_000, 7_500),
                    line_item("Capability Statement & Collateral", 15_000, 11_250),
                    line_item("Federal Market Range Analysis", 35_000, 26_250),
                    line_item("Agency Prioritization Report", 60_000, 45_000),
                ],
                retail_total: 120_000,
                package_total: 90_000,
                discount_percentage: DISCOUNT_PERCENTAGE,
            },
        },
        Persona {
            id: "new-ish",
            name: "New-ish",
            description: "Registered 1 year or less, has done some things (usually SAM.gov), no plan, no real knowledge of how system works or strategic insights.",
            range: ScoreRange::bounded(21, 40),
            characteristics: vec![
                "Registered ≤1 year",
                "Completed SAM.gov (maybe SBA/DSBS)",
                "Little to no federal revenue yet",
                "No strategic market research completed",
                "Capability statement may exist but not research-driven",
            ],
            key_insights: vec![
                "Foundation Audit needed to validate existing registrations",
                "Market research critical before optimizing profiles",
                "Likely has code/keyword misalignment",
                "Email domain and profile completeness need review",
            ],
            package: PersonaPackage {
                package_name: "Steptoe Foundation Optimization Package",
                services: vec![
                    line_item("Fed Foundation Audit", 7_500, 5_625),
                    line_item("Capability Statement & Collateral", 15_000, 11_250),
                    line_item("Federal Market Range Analysis", 35_000, 26_250),
                    line_item("Agency Prioritization Report", 60_000, 45_000),
                ],
                retail_total: 117_500,
                package_total: 88_125,
                discount_percentage: DISCOUNT_PERCENTAGE,
            },
        },
        Persona {
            id: "frustrated",
            name: "Frustrated",
            description: "Registered more than a year. Either (a) has not dedicated any real time or resources, (b) has tried a few things, failed and is down on the opp, or (c) is overwhelmed and paralyzed.",
            range: ScoreRange::bounded(41, 60),
            characteristics: vec![
                "Registered >1 year",
                "Minimal wins or no wins despite activity",
                "Tried some BD efforts without success",
                "May feel overwhelmed by federal complexity",
                "Lacks clear strategy or consistent execution",
            ],
            key_insights: vec![
                "Needs diagnostic to understand why efforts are not working",
                "Research likely incomplete or not actionable",
                "May need relationship strategy overhaul",
                "Foundation elements probably need optimization post-research",
            ],
            package: coming_soon_package(),
        },
        Persona {
            id: "semi-successful",
            name: "Semi-Successful",
            description: "Had a win or two, has no idea how to replicate, scale or diversify.",
            range: ScoreRange::bounded(61, 80),
            characteristics: vec![
                "1-3 federal contracts",
                "Some federal revenue ($100K-$2M)",
                "Wins were somewhat accidental or relationship-driven",
                "No repeatable capture/BD process",
                "Limited agency or vehicle diversification",
            ],
            key_insights: vec![
                "Needs systematic approach to replicate success",
                "Pipeline development and forecast discipline required",
                "Opportunity to expand into adjacent agencies",
                "May benefit from vehicle strategy (GSA, GWACs, IDIQs)",
            ],
            package: coming_soon_package(),
        },
        Persona {
            id: "successful",
            name: "Successful",
            description: "Established track record in the government, although perhaps limited to one or a couple of agencies, but overall understands how to play in the market and is ready to take the next step.",
            range: ScoreRange::bounded(81, 100),
            characteristics: vec![
                "$2M-$20M annual federal revenue",
                "Multiple contracts across 2-4 agencies",
                "Understands federal BD fundamentals",
                "Has in-house BD resources",
                "Ready to scale or diversify",
            ],
            key_insights: vec![
                "Focus on optimization and portfolio strategy",
                "Contract management/compliance becomes critical",
                "Agency diversification or market expansion opportunities",
                "May consider M&A positioning or strategic partnerships",
            ],
            package: coming_soon_package(),
        },
        Persona {
            id: "ultra-successful",
            name: "Ultra-Successful",
            description: "Significant federal work, has very specific and targeted areas of support they are willing to pay a premium for high-quality assistance. Usually has their own fed bd and capture teams, so they need an outside specialist to help with specific initiative. High likelihood this is a prime candidate for full lobbying.",
            range: ScoreRange::open_ended(101),
            characteristics: vec![
                "$20M+ annual federal revenue",
                "Established federal BD/capture team",
                "Multiple agencies, vehicles, and contract types",
                "Sophisticated understanding of federal market",
                "Seeking specialized/premium support for specific initiatives",
            ],
            key_insights: vec![
                "Needs high-value specialists, not generalists",
                "May be acquisition-ready or seeking strategic exit",
                "Lobbying and legislative strategy may be relevant",
                "Contract portfolio optimization and risk management critical",
            ],
            package: coming_soon_package(),
        },
    ]
}
