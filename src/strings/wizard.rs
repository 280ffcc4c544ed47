//! # Wizard Strings
//!
//! Step titles, field prompts and the option catalogue shown by the
//! interactive wizard, plus the on-screen results summary.

use crate::application::state::{INPUT_STEPS, WizardStep};
use crate::domain::types::{Answers, Field, Strategy};

/// One selectable answer: the stored `value`, its display `label` and an
/// optional one-line description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOption {
    pub value: &'static str,
    pub label: &'static str,
    pub description: Option<&'static str>,
}

const fn option(value: &'static str, label: &'static str, description: Option<&'static str>) -> FieldOption {
    FieldOption {
        value,
        label,
        description,
    }
}

pub const PRODUCT_TYPES: &[FieldOption] = &[
    option("saas", "SaaS", None),
    option("physical", "Physical", None),
    option("service", "Service", None),
    option("platform", "Platform", None),
];

pub const BUSINESS_MODELS: &[FieldOption] = &[option("b2b", "B2B", None), option("b2c", "B2C", None)];

pub const COMPANY_SIZES: &[FieldOption] = &[
    option("smb", "SMB", Some("10-200 employees")),
    option("midmarket", "MidMarket", Some("200-1000 employees")),
    option("enterprise", "Enterprise", Some("1000+ employees")),
];

pub const CUSTOMER_SEGMENTS: &[FieldOption] = &[
    option("mass", "Mass", Some("Broad consumer audience")),
    option("premium", "Premium", Some("Affluent, quality-focused consumers")),
];

pub const PRODUCT_STAGES: &[FieldOption] = &[
    option("mvp", "MVP / Pre-Launch", Some("Just starting out")),
    option("growth", "Growth", Some("Product-market fit achieved")),
    option("mature", "Mature", Some("Established in market")),
];

pub const BUDGETS: &[FieldOption] = &[
    option("low", "Low Budget", Some("Under $5K/month")),
    option("medium", "Medium Budget", Some("$5K-$25K/month")),
    option("high", "High Budget", Some("$25K+/month")),
];

pub const TIMELINES: &[FieldOption] = &[
    option("short", "Short", Some("1-3 months")),
    option("medium", "Medium", Some("3-6 months")),
    option("long", "Long", Some("6-12 months")),
];

pub const PRIMARY_GOALS: &[FieldOption] = &[
    option("awareness", "Brand Awareness", Some("Get your name out there")),
    option("leads", "Lead Generation", Some("Build your pipeline")),
    option("revenue", "Revenue Growth", Some("Drive sales and conversions")),
    option("adoption", "Product Adoption", Some("Get users engaged")),
];

/// Choices for `field`. Target markets follow the business model: company
/// sizes for `b2b`, consumer segments for anything else. Free-text fields
/// have none.
pub fn options_for(field: Field, business_model: &str) -> &'static [FieldOption] {
    match field {
        Field::ProductType => PRODUCT_TYPES,
        Field::BusinessModel => BUSINESS_MODELS,
        Field::TargetMarket if business_model == "b2b" => COMPANY_SIZES,
        Field::TargetMarket => CUSTOMER_SEGMENTS,
        Field::ProductStage => PRODUCT_STAGES,
        Field::Budget => BUDGETS,
        Field::Timeline => TIMELINES,
        Field::PrimaryGoal => PRIMARY_GOALS,
        Field::ProductName | Field::Differentiator => &[],
    }
}

pub fn field_label(field: Field, business_model: &str) -> &'static str {
    match field {
        Field::ProductName => "Product Name",
        Field::ProductType => "Product Type",
        Field::BusinessModel => "Business Model",
        Field::TargetMarket if business_model == "b2b" => "Company Size",
        Field::TargetMarket => "Customer Segment",
        Field::ProductStage => "Product Stage",
        Field::Budget => "Monthly Marketing Budget",
        Field::Timeline => "Launch Timeline",
        Field::Differentiator => "Key Differentiator",
        Field::PrimaryGoal => "Primary Goal",
    }
}

fn placeholder(field: Field) -> Option<&'static str> {
    match field {
        Field::ProductName => Some("Enter your product name"),
        Field::Differentiator => Some(
            "What problem do you solve better than anyone else? What makes you different?",
        ),
        _ => None,
    }
}

pub fn step_title(step: WizardStep) -> &'static str {
    match step {
        WizardStep::Basics => "Let's start with the basics",
        WizardStep::Market => "Target Market",
        WizardStep::Resources => "Budget & Timeline",
        WizardStep::Differentiator => "Differentiation",
        WizardStep::Goal => "Primary Goal",
        WizardStep::Results => "Your GTM Strategy",
    }
}

fn step_subtitle(step: WizardStep) -> &'static str {
    match step {
        WizardStep::Basics => "Tell us about your product",
        WizardStep::Market => "Who are you selling to?",
        WizardStep::Resources => "What resources do you have?",
        WizardStep::Differentiator => "What makes you unique?",
        WizardStep::Goal => "What's your top priority?",
        WizardStep::Results => "",
    }
}

pub fn format_step_header(step: WizardStep) -> String {
    format!(
        "### 🧭 Step {} of {}: {}\n{}",
        step.number(),
        INPUT_STEPS,
        step_title(step),
        step_subtitle(step)
    )
}

/// Prompt for one field, listing numbered options and the current value.
pub fn format_field_prompt(field: Field, answers: &Answers) -> String {
    let mut output = format!("**{}**", field_label(field, &answers.business_model));

    let options = options_for(field, &answers.business_model);
    for (i, choice) in options.iter().enumerate() {
        output.push_str(&format!("\n  {}. {}", i + 1, choice.label));
        if let Some(description) = choice.description {
            output.push_str(&format!(" ({description})"));
        }
    }
    if let Some(hint) = placeholder(field) {
        output.push_str(&format!("\n  {hint}"));
    }

    let current = answers.get(field);
    if !current.is_empty() {
        output.push_str(&format!("\nCurrent: `{current}` (press Enter to keep)"));
    }
    output
}

/// Label shown for the button that leaves `step`.
pub fn advance_label(step: WizardStep) -> &'static str {
    if step == WizardStep::Goal {
        "Generate Strategy"
    } else {
        "Next"
    }
}

pub fn format_results(answers: &Answers, strategy: &Strategy) -> String {
    let mut output = format!("### ✅ {} for {}\n", step_title(WizardStep::Results), answers.product_name);

    output.push_str(&format!("\n**🎯 Positioning Statement**\n{}\n", strategy.positioning));

    output.push_str("\n**👥 Ideal Customer Profile**\n");
    output.push_str(&format!("Company Size: {}\n", strategy.icp.size));
    output.push_str(&format!("Decision Maker: {}\n", strategy.icp.decision));
    output.push_str(&format!("Sales Cycle: {}\n", strategy.icp.cycle));
    for characteristic in &strategy.icp.characteristics {
        output.push_str(&format!("  • {characteristic}\n"));
    }

    output.push_str("\n**📣 Recommended Channels**\n");
    for channel in &strategy.channels {
        output.push_str(&format!(
            "  [{}] {} - {}\n",
            channel.priority, channel.name, channel.rationale
        ));
    }

    output.push_str("\n**🛠 Key Tactics**\n");
    for (i, tactic) in strategy.tactics.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, tactic));
    }

    output.push_str("\n**📈 Success Metrics**\n");
    for metric in &strategy.metrics {
        output.push_str(&format!("  • {metric}\n"));
    }

    output.push_str("\n**🗓 Timeline & Phases**\n");
    for phase in &strategy.phases {
        output.push_str(&format!("  {} - {}: {}\n", phase.phase, phase.focus, phase.activities));
    }

    output
}
