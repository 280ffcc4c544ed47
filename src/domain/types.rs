//! # Domain Types
//!
//! The answer set collected by the wizard, the option keys its enumerated
//! fields map onto, and the strategy record derived from it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw answers as entered. Values are kept verbatim so that anything outside
/// a field's domain still flows through the fallback lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Answers {
    pub product_name: String,
    pub product_type: String,
    pub business_model: String,
    pub target_market: String,
    pub product_stage: String,
    pub budget: String,
    pub timeline: String,
    pub differentiator: String,
    pub primary_goal: String,
}

impl Answers {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::ProductName => &self.product_name,
            Field::ProductType => &self.product_type,
            Field::BusinessModel => &self.business_model,
            Field::TargetMarket => &self.target_market,
            Field::ProductStage => &self.product_stage,
            Field::Budget => &self.budget,
            Field::Timeline => &self.timeline,
            Field::Differentiator => &self.differentiator,
            Field::PrimaryGoal => &self.primary_goal,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::ProductName => &mut self.product_name,
            Field::ProductType => &mut self.product_type,
            Field::BusinessModel => &mut self.business_model,
            Field::TargetMarket => &mut self.target_market,
            Field::ProductStage => &mut self.product_stage,
            Field::Budget => &mut self.budget,
            Field::Timeline => &mut self.timeline,
            Field::Differentiator => &mut self.differentiator,
            Field::PrimaryGoal => &mut self.primary_goal,
        };
        *slot = value.into();
    }

    /// Fields from `fields` that are still empty. Presence is the only check.
    pub fn missing(&self, fields: &[Field]) -> Vec<Field> {
        fields
            .iter()
            .copied()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    pub fn missing_fields(&self) -> Vec<Field> {
        self.missing(&Field::ALL)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    ProductName,
    ProductType,
    BusinessModel,
    TargetMarket,
    ProductStage,
    Budget,
    Timeline,
    Differentiator,
    PrimaryGoal,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::ProductName,
        Field::ProductType,
        Field::BusinessModel,
        Field::TargetMarket,
        Field::ProductStage,
        Field::Budget,
        Field::Timeline,
        Field::Differentiator,
        Field::PrimaryGoal,
    ];

    /// Name used in answer files.
    pub fn key(self) -> &'static str {
        match self {
            Field::ProductName => "productName",
            Field::ProductType => "productType",
            Field::BusinessModel => "businessModel",
            Field::TargetMarket => "targetMarket",
            Field::ProductStage => "productStage",
            Field::Budget => "budget",
            Field::Timeline => "timeline",
            Field::Differentiator => "differentiator",
            Field::PrimaryGoal => "primaryGoal",
        }
    }

    pub fn is_free_text(self) -> bool {
        matches!(self, Field::ProductName | Field::Differentiator)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Declares an option enum together with its answer-file key.
macro_rules! option_key {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $key:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Exact, case-sensitive match against the stored key.
            pub fn from_key(key: &str) -> Option<Self> {
                match key {
                    $($key => Some($name::$variant),)+
                    _ => None,
                }
            }

            pub fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }
    };
}

option_key!(ProductType {
    Saas => "saas",
    Physical => "physical",
    Service => "service",
    Platform => "platform",
});

option_key!(BusinessModel {
    B2b => "b2b",
    B2c => "b2c",
});

option_key!(
    /// Company size for B2B, customer segment for B2C.
    TargetMarket {
        Smb => "smb",
        MidMarket => "midmarket",
        Enterprise => "enterprise",
        Mass => "mass",
        Premium => "premium",
    }
);

option_key!(Budget {
    Low => "low",
    Medium => "medium",
    High => "high",
});

option_key!(Timeline {
    Short => "short",
    Medium => "medium",
    Long => "long",
});

option_key!(PrimaryGoal {
    Awareness => "awareness",
    Leads => "leads",
    Revenue => "revenue",
    Adoption => "adoption",
});

/// What happens when an answer combination has no table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupPolicy {
    /// Log the miss and use the table default.
    #[default]
    Lenient,
    /// Refuse to generate.
    Strict,
}

/// Derived go-to-market strategy. Recomputed on every generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    pub positioning: String,
    pub icp: IdealCustomerProfile,
    pub channels: Vec<Channel>,
    pub tactics: Vec<String>,
    pub metrics: Vec<String>,
    pub phases: Vec<Phase>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdealCustomerProfile {
    pub size: String,
    pub decision: String,
    pub cycle: String,
    pub characteristics: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::High => f.write_str("High"),
            Priority::Medium => f.write_str("Medium"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub name: String,
    pub priority: Priority,
    pub rationale: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub phase: String,
    pub focus: String,
    pub activities: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_missing_is_presence_only() {
        let mut answers = Answers::default();
        answers.set(Field::ProductName, "Acme");
        answers.set(Field::ProductType, " ");

        let missing = answers.missing(&[Field::ProductName, Field::ProductType, Field::BusinessModel]);
        assert_eq!(missing, vec![Field::BusinessModel]);
        assert_eq!(answers.missing_fields().len(), 7);
    }

    #[test]
    fn test_option_keys_are_case_sensitive() {
        assert_eq!(ProductType::from_key("saas"), Some(ProductType::Saas));
        assert_eq!(ProductType::from_key("SaaS"), None);
        assert_eq!(TargetMarket::from_key("midmarket"), Some(TargetMarket::MidMarket));
        assert_eq!(Timeline::Long.to_string(), "long");
    }

    #[test]
    fn test_answers_deserialize_camel_case() {
        let answers: Answers =
            serde_yaml::from_str("productName: Acme\nbusinessModel: b2b\nprimaryGoal: leads\n")
                .expect("valid yaml");
        assert_eq!(answers.product_name, "Acme");
        assert_eq!(answers.business_model, "b2b");
        assert_eq!(answers.primary_goal, "leads");
        assert!(answers.timeline.is_empty());
    }
}
