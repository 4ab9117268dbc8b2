use serde::{Deserialize, Serialize};

/// Qualitative bucket for an effective rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenchmarkCategory {
    Good,    // rate < 2.5
    Average, // 2.5 <= rate <= 3.5
    High,    // rate > 3.5
}

/// Static display bundle for a benchmark category: color name plus the
/// background/text/bar tokens the shell renders with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RatingDisplay {
    pub color: &'static str,
    pub bg: &'static str,
    pub text: &'static str,
    pub label: &'static str,
    pub bar_color: &'static str,
}

impl BenchmarkCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Average => "average",
            Self::High => "high",
        }
    }

    /// Display bundle lookup. Static data keyed by the enum so the mapping
    /// is exhaustive at compile time.
    pub fn display(&self) -> RatingDisplay {
        match self {
            Self::Good => RatingDisplay {
                color: "green",
                bg: "bg-green-100",
                text: "text-green-700",
                label: "Good Rate",
                bar_color: "bg-green-500",
            },
            Self::Average => RatingDisplay {
                color: "yellow",
                bg: "bg-yellow-100",
                text: "text-yellow-700",
                label: "Average Rate",
                bar_color: "bg-yellow-500",
            },
            Self::High => RatingDisplay {
                color: "red",
                bg: "bg-red-100",
                text: "text-red-700",
                label: "High Rate",
                bar_color: "bg-red-500",
            },
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Good => "You're already getting a competitive rate, below the market average.",
            Self::Average => {
                "Your rate is in line with the market average. There may be room to negotiate."
            }
            Self::High => "Your rate is above the market average. You're likely overpaying.",
        }
    }
}

/// Classification thresholds. Left-closed/right-open bands except the final
/// one: both boundary values land in Average.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkThresholds {
    /// Rates strictly below this are Good (percentage points)
    #[serde(default = "default_good_below")]
    pub good_below: f64,

    /// Rates up to and including this are Average; above is High
    #[serde(default = "default_average_max")]
    pub average_max: f64,
}

impl Default for BenchmarkThresholds {
    fn default() -> Self {
        Self {
            good_below: default_good_below(),
            average_max: default_average_max(),
        }
    }
}

fn default_good_below() -> f64 {
    2.5
}
fn default_average_max() -> f64 {
    3.5
}

impl BenchmarkThresholds {
    pub fn validate(&self) -> Result<(), String> {
        if !self.good_below.is_finite() || !self.average_max.is_finite() {
            return Err("benchmark thresholds must be finite".to_string());
        }
        if self.good_below > self.average_max {
            return Err(format!(
                "good_below ({}) must not exceed average_max ({})",
                self.good_below, self.average_max
            ));
        }
        Ok(())
    }
}

/// Classify an effective rate against the default thresholds.
pub fn classify(effective_rate: f64) -> BenchmarkCategory {
    classify_with(&BenchmarkThresholds::default(), effective_rate)
}

pub fn classify_with(thresholds: &BenchmarkThresholds, effective_rate: f64) -> BenchmarkCategory {
    if effective_rate < thresholds.good_below {
        BenchmarkCategory::Good
    } else if effective_rate <= thresholds.average_max {
        BenchmarkCategory::Average
    } else {
        BenchmarkCategory::High
    }
}
