use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::benchmark::{BenchmarkCategory, RatingDisplay};

/// One entry of the business type catalog consumed by the shell for
/// selection widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BusinessTypeEntry {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const BUSINESS_TYPES: [BusinessTypeEntry; 8] = [
    BusinessTypeEntry {
        value: "retail",
        label: "Retail Store",
        icon: "🏪",
    },
    BusinessTypeEntry {
        value: "restaurant",
        label: "Restaurant / Cafe",
        icon: "🍽️",
    },
    BusinessTypeEntry {
        value: "ecommerce",
        label: "E-commerce / Online",
        icon: "🛒",
    },
    BusinessTypeEntry {
        value: "service",
        label: "Service Business",
        icon: "🔧",
    },
    BusinessTypeEntry {
        value: "healthcare",
        label: "Healthcare / Medical",
        icon: "🏥",
    },
    BusinessTypeEntry {
        value: "professional",
        label: "Professional Services",
        icon: "💼",
    },
    BusinessTypeEntry {
        value: "hospitality",
        label: "Hotel / Hospitality",
        icon: "🏨",
    },
    BusinessTypeEntry {
        value: "other",
        label: "Other",
        icon: "🏢",
    },
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    Retail,
    Restaurant,
    Ecommerce,
    Service,
    Healthcare,
    Professional,
    Hospitality,
    #[default]
    Other,
}

impl BusinessType {
    /// Total parse: unrecognized tags fall through to `Other`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "retail" => Self::Retail,
            "restaurant" => Self::Restaurant,
            "ecommerce" => Self::Ecommerce,
            "service" => Self::Service,
            "healthcare" => Self::Healthcare,
            "professional" => Self::Professional,
            "hospitality" => Self::Hospitality,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.entry().value
    }

    pub fn label(&self) -> &'static str {
        self.entry().label
    }

    pub fn entry(&self) -> &'static BusinessTypeEntry {
        let index = match self {
            Self::Retail => 0,
            Self::Restaurant => 1,
            Self::Ecommerce => 2,
            Self::Service => 3,
            Self::Healthcare => 4,
            Self::Professional => 5,
            Self::Hospitality => 6,
            Self::Other => 7,
        };
        &BUSINESS_TYPES[index]
    }
}

impl FromStr for BusinessType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for BusinessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a user-entered dollar amount. Accepts `$` prefixes and comma
/// grouping; anything non-numeric or negative coerces to 0.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// Clamp an already-numeric amount to finite and non-negative.
pub(crate) fn coerce_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Merchant figures as entered by the user.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub business_type: BusinessType,
    pub monthly_volume: f64,
    pub monthly_fees: f64,
    /// Carried for display and the lead record only; not used in calculation
    #[serde(default)]
    pub avg_ticket: f64,
}

impl CalculationInput {
    /// Build an input with all amounts coerced to finite, non-negative values.
    pub fn new(
        business_type: BusinessType,
        monthly_volume: f64,
        monthly_fees: f64,
        avg_ticket: f64,
    ) -> Self {
        Self {
            business_type,
            monthly_volume: coerce_amount(monthly_volume),
            monthly_fees: coerce_amount(monthly_fees),
            avg_ticket: coerce_amount(avg_ticket),
        }
    }
}

/// Benchmark verdict attached to a calculation: the category plus its
/// static label, message, and styling bundle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Benchmark {
    pub category: BenchmarkCategory,
    pub label: &'static str,
    pub message: &'static str,
    pub display: RatingDisplay,
}

impl From<BenchmarkCategory> for Benchmark {
    fn from(category: BenchmarkCategory) -> Self {
        let display = category.display();
        Self {
            category,
            label: display.label,
            message: category.message(),
            display,
        }
    }
}

/// Estimated savings at the proposed rate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Savings {
    pub monthly: f64,
    pub annual: f64,
    /// effective_rate - proposed_rate when a reduction applies, else 0
    pub rate_difference: f64,
}

/// Complete output of one calculation run. Immutable; a fresh value is
/// produced on every submission.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CalculationResult {
    pub input: CalculationInput,
    pub effective_rate: f64,
    pub benchmark: Benchmark,
    pub proposed_rate: f64,
    pub savings: Savings,
    pub timestamp: DateTime<Utc>,
}
