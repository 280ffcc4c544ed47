//! # Lookup Tables
//!
//! Static rows behind every strategy section. Selection is an exhaustive
//! match over option keys; a `None` from a selector means the combination
//! has no row and the caller falls back to the table default.

use crate::domain::types::{
    BusinessModel, Budget, Channel, IdealCustomerProfile, Phase, Priority, PrimaryGoal,
    ProductType, TargetMarket, Timeline,
};
use crate::domain::types::Priority::{High, Medium};

pub const DEFAULT_NOUN: &str = "solution";

pub fn product_noun(product_type: ProductType) -> &'static str {
    match product_type {
        ProductType::Saas => "software solution",
        ProductType::Physical => "product",
        ProductType::Service => "service",
        ProductType::Platform => "platform",
    }
}

pub struct IcpRow {
    pub size: &'static str,
    pub decision: &'static str,
    pub cycle: &'static str,
    pub characteristics: [&'static str; 3],
}

impl From<&IcpRow> for IdealCustomerProfile {
    fn from(row: &IcpRow) -> Self {
        Self {
            size: row.size.to_string(),
            decision: row.decision.to_string(),
            cycle: row.cycle.to_string(),
            characteristics: row.characteristics.iter().map(|c| c.to_string()).collect(),
        }
    }
}

const B2B_SMB: IcpRow = IcpRow {
    size: "10-200 employees",
    decision: "Director or VP level",
    cycle: "1-3 months",
    characteristics: ["Budget-conscious", "Quick decision-making", "Self-service preferred"],
};

const B2B_MIDMARKET: IcpRow = IcpRow {
    size: "200-1000 employees",
    decision: "VP or C-level with committee",
    cycle: "3-6 months",
    characteristics: ["ROI-focused", "Security-conscious", "Integration requirements"],
};

const B2B_ENTERPRISE: IcpRow = IcpRow {
    size: "1000+ employees",
    decision: "C-level with procurement",
    cycle: "6-12 months",
    characteristics: [
        "Enterprise features required",
        "Compliance-focused",
        "Complex integration needs",
    ],
};

const B2C_MASS: IcpRow = IcpRow {
    size: "Individual consumers",
    decision: "End user",
    cycle: "Minutes to hours",
    characteristics: ["Price-sensitive", "Impulse buyers", "Mobile-first"],
};

const B2C_PREMIUM: IcpRow = IcpRow {
    size: "Affluent consumers",
    decision: "End user with research",
    cycle: "Days to weeks",
    characteristics: ["Quality-focused", "Brand-conscious", "Experience-driven"],
};

pub const DEFAULT_ICP: &IcpRow = &B2B_SMB;

pub fn icp_row(model: BusinessModel, market: TargetMarket) -> Option<&'static IcpRow> {
    match (model, market) {
        (BusinessModel::B2b, TargetMarket::Smb) => Some(&B2B_SMB),
        (BusinessModel::B2b, TargetMarket::MidMarket) => Some(&B2B_MIDMARKET),
        (BusinessModel::B2b, TargetMarket::Enterprise) => Some(&B2B_ENTERPRISE),
        (BusinessModel::B2c, TargetMarket::Mass) => Some(&B2C_MASS),
        (BusinessModel::B2c, TargetMarket::Premium) => Some(&B2C_PREMIUM),
        _ => None,
    }
}

pub struct ChannelRow {
    pub name: &'static str,
    pub priority: Priority,
    pub rationale: &'static str,
}

impl From<&ChannelRow> for Channel {
    fn from(row: &ChannelRow) -> Self {
        Self {
            name: row.name.to_string(),
            priority: row.priority,
            rationale: row.rationale.to_string(),
        }
    }
}

const fn channel(name: &'static str, priority: Priority, rationale: &'static str) -> ChannelRow {
    ChannelRow {
        name,
        priority,
        rationale,
    }
}

const B2B_LOW: &[ChannelRow] = &[
    channel("LinkedIn Organic", High, "Cost-effective reach to B2B audience"),
    channel("Content Marketing", High, "Build authority and SEO presence"),
    channel("Email Outreach", Medium, "Direct connection with prospects"),
    channel("Industry Communities", Medium, "Build credibility in niche"),
];

const B2B_MEDIUM: &[ChannelRow] = &[
    channel("LinkedIn Ads", High, "Targeted B2B advertising"),
    channel("Google Search Ads", High, "Capture high-intent searches"),
    channel("Content Marketing", High, "Build authority and inbound leads"),
    channel("Webinars", Medium, "Educate and generate qualified leads"),
    channel("Partnership Marketing", Medium, "Leverage existing networks"),
];

const B2B_HIGH: &[ChannelRow] = &[
    channel("Multi-Channel ABM", High, "Targeted approach to key accounts"),
    channel("LinkedIn Ads", High, "Reach decision-makers"),
    channel("Google Search Ads", High, "Capture demand"),
    channel("Content Marketing", High, "Thought leadership"),
    channel("Events & Conferences", Medium, "Face-to-face connections"),
    channel("PR & Analyst Relations", Medium, "Build credibility"),
];

const B2C_LOW: &[ChannelRow] = &[
    channel("Social Media Organic", High, "Build community cost-effectively"),
    channel("Content Marketing", High, "SEO and brand awareness"),
    channel("Referral Program", Medium, "Word-of-mouth growth"),
    channel("Email Marketing", Medium, "Nurture and retention"),
];

const B2C_MEDIUM: &[ChannelRow] = &[
    channel("Facebook/Instagram Ads", High, "Broad consumer reach"),
    channel("Google Ads", High, "Capture purchase intent"),
    channel("Influencer Marketing", Medium, "Social proof and reach"),
    channel("Content Marketing", Medium, "SEO and engagement"),
];

const B2C_HIGH: &[ChannelRow] = &[
    channel("Multi-Channel Performance Marketing", High, "Maximize reach"),
    channel("TV/Connected TV", Medium, "Mass awareness"),
    channel("Influencer Partnerships", High, "Authenticity at scale"),
    channel("Content Marketing", High, "SEO and brand"),
];

pub const DEFAULT_CHANNELS: &[ChannelRow] = B2B_LOW;

/// Every (model, budget) pair has a row; misses only come from unparsable keys.
pub fn channel_rows(model: BusinessModel, budget: Budget) -> &'static [ChannelRow] {
    match (model, budget) {
        (BusinessModel::B2b, Budget::Low) => B2B_LOW,
        (BusinessModel::B2b, Budget::Medium) => B2B_MEDIUM,
        (BusinessModel::B2b, Budget::High) => B2B_HIGH,
        (BusinessModel::B2c, Budget::Low) => B2C_LOW,
        (BusinessModel::B2c, Budget::Medium) => B2C_MEDIUM,
        (BusinessModel::B2c, Budget::High) => B2C_HIGH,
    }
}

pub const DEFAULT_GOAL: PrimaryGoal = PrimaryGoal::Awareness;

pub fn tactics(goal: PrimaryGoal) -> &'static [&'static str] {
    match goal {
        PrimaryGoal::Awareness => &[
            "Launch content campaign targeting your ICP",
            "Create thought leadership pieces",
            "Start a podcast or video series",
            "Engage in industry communities",
            "Develop a strong social media presence",
        ],
        PrimaryGoal::Leads => &[
            "Create gated content (whitepapers, guides)",
            "Launch targeted ad campaigns",
            "Optimize website for conversion",
            "Implement lead magnets",
            "Host webinars and workshops",
        ],
        PrimaryGoal::Revenue => &[
            "Implement free trial or freemium model",
            "Launch promotional campaigns",
            "Optimize sales funnel",
            "Create urgency with limited-time offers",
            "Develop partnership channels",
        ],
        PrimaryGoal::Adoption => &[
            "Create comprehensive onboarding",
            "Develop educational content",
            "Implement in-app guidance",
            "Build customer success program",
            "Launch user community",
        ],
    }
}

pub fn metrics(goal: PrimaryGoal) -> &'static [&'static str] {
    match goal {
        PrimaryGoal::Awareness => &[
            "Website traffic growth",
            "Social media impressions and engagement",
            "Brand search volume",
            "Share of voice in industry",
        ],
        PrimaryGoal::Leads => &[
            "Marketing Qualified Leads (MQLs)",
            "Lead conversion rate",
            "Cost per lead",
            "Lead-to-opportunity rate",
        ],
        PrimaryGoal::Revenue => &[
            "Monthly Recurring Revenue (MRR) or Revenue",
            "Customer Acquisition Cost (CAC)",
            "Average Contract Value (ACV)",
            "Sales cycle length",
            "Win rate",
        ],
        PrimaryGoal::Adoption => &[
            "Activation rate",
            "Time to value",
            "Feature adoption",
            "User engagement score",
            "Net Promoter Score (NPS)",
        ],
    }
}

pub struct PhaseRow {
    pub phase: &'static str,
    pub focus: &'static str,
    pub activities: &'static str,
}

impl From<&PhaseRow> for Phase {
    fn from(row: &PhaseRow) -> Self {
        Self {
            phase: row.phase.to_string(),
            focus: row.focus.to_string(),
            activities: row.activities.to_string(),
        }
    }
}

const fn phase(phase: &'static str, focus: &'static str, activities: &'static str) -> PhaseRow {
    PhaseRow {
        phase,
        focus,
        activities,
    }
}

const WEEKLY: &[PhaseRow] = &[
    phase("Week 1-2", "Foundation", "Set up tracking, finalise messaging, prepare assets"),
    phase("Week 3-6", "Launch", "Execute initial campaigns, start content creation"),
    phase("Week 7-12", "Optimise", "Analyse results, optimise channels, scale what works"),
];

const MONTHLY: &[PhaseRow] = &[
    phase("Month 1", "Foundation", "Research, positioning, asset creation"),
    phase("Month 2-3", "Launch", "Initial campaigns across 2-3 channels"),
    phase("Month 4-6", "Scale", "Expand successful channels, test new ones"),
];

const QUARTERLY: &[PhaseRow] = &[
    phase("Q1", "Foundation & Testing", "Market research, positioning, MVP campaigns"),
    phase("Q2", "Launch & Learn", "Full campaign launch, A/B testing, optimisation"),
    phase("Q3", "Scale & Expand", "Scale winning channels, add new channels"),
    phase("Q4", "Optimise & Refine", "Advanced optimisation, partnership development"),
];

/// `None` (an unrecognized timeline) shares the long-range plan.
pub fn phases(timeline: Option<Timeline>) -> &'static [PhaseRow] {
    match timeline {
        Some(Timeline::Short) => WEEKLY,
        Some(Timeline::Medium) => MONTHLY,
        Some(Timeline::Long) | None => QUARTERLY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icp_rows_cover_documented_pairs_only() {
        let mut matched = 0;
        for model in BusinessModel::ALL {
            for market in TargetMarket::ALL {
                if icp_row(*model, *market).is_some() {
                    matched += 1;
                }
            }
        }
        assert_eq!(matched, 5);
        assert!(icp_row(BusinessModel::B2c, TargetMarket::Enterprise).is_none());
    }

    #[test]
    fn test_channel_list_sizes() {
        for model in BusinessModel::ALL {
            for budget in Budget::ALL {
                let rows = channel_rows(*model, *budget);
                assert!((4..=6).contains(&rows.len()), "{model}-{budget}");
            }
        }
        assert_eq!(channel_rows(BusinessModel::B2b, Budget::High).len(), 6);
    }

    #[test]
    fn test_goal_tables_sizes() {
        for goal in PrimaryGoal::ALL {
            assert_eq!(tactics(*goal).len(), 5);
            assert!((4..=5).contains(&metrics(*goal).len()));
        }
    }
}
