//! Calculation engine: pure functions from merchant figures to an
//! effective rate, benchmark verdict, and savings proposal.
//!
//! The engine never fails. Invalid or missing numeric input normalizes to
//! zero and produces a well-formed, zeroed result; callers get the same
//! output for the same input, timestamp aside.

use chrono::Utc;
use serde::Serialize;

use crate::benchmark::{classify_with, BenchmarkThresholds};
use crate::core::{Benchmark, CalculationInput, CalculationResult, Savings};

/// Default rate reduction offered in proposals, in percentage points.
pub const DEFAULT_REDUCTION: f64 = 0.5;

/// Round half away from zero to two decimal places. Replicated here rather
/// than shared with the display formatters: this rounding is part of the
/// engine's contract, not presentation.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Effective rate: total fees as a percentage of total volume, rounded to
/// two decimals. Non-positive or non-finite volume, or negative or
/// non-finite fees, yield 0.
pub fn calculate_effective_rate(monthly_fees: f64, monthly_volume: f64) -> f64 {
    if !monthly_volume.is_finite() || monthly_volume <= 0.0 {
        return 0.0;
    }
    if !monthly_fees.is_finite() || monthly_fees < 0.0 {
        return 0.0;
    }
    round2((monthly_fees / monthly_volume) * 100.0)
}

/// Proposal produced by [`calculate_savings_proposal`]. All fields are
/// rounded to two decimals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct SavingsProposal {
    pub current_rate: f64,
    pub proposed_rate: f64,
    pub monthly_savings: f64,
    pub annual_savings: f64,
}

/// Propose a reduced rate and the savings it would yield.
///
/// A non-positive current rate or volume yields the zeroed proposal. The
/// proposed rate is floored at zero: a reduction larger than the current
/// rate proposes 0, and the savings come from the full current rate.
pub fn calculate_savings_proposal(
    current_rate: f64,
    monthly_volume: f64,
    reduction: f64,
) -> SavingsProposal {
    let rate_ok = current_rate.is_finite() && current_rate > 0.0;
    let volume_ok = monthly_volume.is_finite() && monthly_volume > 0.0;
    if !rate_ok || !volume_ok {
        return SavingsProposal::default();
    }

    let proposed_rate = (current_rate - reduction).max(0.0);
    let monthly_savings = ((current_rate - proposed_rate) / 100.0) * monthly_volume;
    // Annual derives from the unrounded monthly figure
    let annual_savings = monthly_savings * 12.0;

    SavingsProposal {
        current_rate: round2(current_rate),
        proposed_rate: round2(proposed_rate),
        monthly_savings: round2(monthly_savings),
        annual_savings: round2(annual_savings),
    }
}

/// Run the full calculation with the default thresholds and reduction.
pub fn run_calculations(input: CalculationInput) -> CalculationResult {
    run_calculations_with(&BenchmarkThresholds::default(), DEFAULT_REDUCTION, input)
}

/// Run the full calculation: coerce input, compute the effective rate,
/// classify it, and attach the savings proposal.
pub fn run_calculations_with(
    thresholds: &BenchmarkThresholds,
    reduction: f64,
    input: CalculationInput,
) -> CalculationResult {
    let input = CalculationInput::new(
        input.business_type,
        input.monthly_volume,
        input.monthly_fees,
        input.avg_ticket,
    );

    let effective_rate = calculate_effective_rate(input.monthly_fees, input.monthly_volume);
    let category = classify_with(thresholds, effective_rate);
    let proposal = calculate_savings_proposal(effective_rate, input.monthly_volume, reduction);

    // Computed from the actual values so a changed reduction or the zero
    // floor stays reflected here
    let rate_difference = if proposal.proposed_rate > 0.0 {
        round2(effective_rate - proposal.proposed_rate)
    } else {
        0.0
    };

    CalculationResult {
        input,
        effective_rate,
        benchmark: Benchmark::from(category),
        proposed_rate: proposal.proposed_rate,
        savings: Savings {
            monthly: proposal.monthly_savings,
            annual: proposal.annual_savings,
            rate_difference,
        },
        timestamp: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::BenchmarkCategory;
    use crate::core::BusinessType;
    use pretty_assertions::assert_eq;

    #[test]
    fn effective_rate_for_typical_merchant() {
        assert_eq!(calculate_effective_rate(1500.0, 50000.0), 3.0);
        assert_eq!(calculate_effective_rate(1425.0, 50000.0), 2.85);
    }

    #[test]
    fn effective_rate_rounds_not_truncates() {
        // 1.005% exactly would truncate to 1.00
        assert_eq!(calculate_effective_rate(333.0, 9990.0), 3.33);
        assert_eq!(calculate_effective_rate(1.0, 300.0), 0.33);
        assert_eq!(calculate_effective_rate(2.0, 300.0), 0.67);
    }

    #[test]
    fn non_positive_volume_yields_zero_rate() {
        assert_eq!(calculate_effective_rate(1500.0, 0.0), 0.0);
        assert_eq!(calculate_effective_rate(1500.0, -50000.0), 0.0);
        assert_eq!(calculate_effective_rate(1500.0, f64::NAN), 0.0);
    }

    #[test]
    fn negative_fees_yield_zero_rate() {
        assert_eq!(calculate_effective_rate(-1.0, 50000.0), 0.0);
        assert_eq!(calculate_effective_rate(f64::NAN, 50000.0), 0.0);
        assert_eq!(calculate_effective_rate(0.0, 50000.0), 0.0);
    }

    #[test]
    fn proposal_applies_the_reduction() {
        let proposal = calculate_savings_proposal(3.0, 50000.0, 0.5);
        assert_eq!(
            proposal,
            SavingsProposal {
                current_rate: 3.0,
                proposed_rate: 2.5,
                monthly_savings: 250.0,
                annual_savings: 3000.0,
            }
        );
    }

    #[test]
    fn proposal_floors_the_proposed_rate_at_zero() {
        let proposal = calculate_savings_proposal(0.3, 50000.0, 0.5);
        assert_eq!(proposal.proposed_rate, 0.0);
        assert_eq!(proposal.monthly_savings, 150.0);
        assert_eq!(proposal.annual_savings, 1800.0);
    }

    #[test]
    fn proposal_zeroes_on_invalid_input() {
        assert_eq!(
            calculate_savings_proposal(0.0, 50000.0, 0.5),
            SavingsProposal::default()
        );
        assert_eq!(
            calculate_savings_proposal(3.0, 0.0, 0.5),
            SavingsProposal::default()
        );
        assert_eq!(
            calculate_savings_proposal(f64::NAN, 50000.0, 0.5),
            SavingsProposal::default()
        );
    }

    #[test]
    fn run_calculations_end_to_end() {
        let input = CalculationInput::new(BusinessType::Retail, 50000.0, 1500.0, 75.0);
        let result = run_calculations(input);

        assert_eq!(result.effective_rate, 3.0);
        assert_eq!(result.benchmark.category, BenchmarkCategory::Average);
        assert_eq!(result.proposed_rate, 2.5);
        assert_eq!(result.savings.monthly, 250.0);
        assert_eq!(result.savings.annual, 3000.0);
        assert_eq!(result.savings.rate_difference, 0.5);
        assert_eq!(result.input.avg_ticket, 75.0);
    }

    #[test]
    fn run_calculations_zeroes_rate_difference_when_floor_applies() {
        // 0.3% effective rate: the 0.5 reduction floors the proposal at 0
        let input = CalculationInput::new(BusinessType::Service, 50000.0, 150.0, 0.0);
        let result = run_calculations(input);

        assert_eq!(result.effective_rate, 0.3);
        assert_eq!(result.proposed_rate, 0.0);
        assert_eq!(result.savings.rate_difference, 0.0);
        assert_eq!(result.savings.monthly, 150.0);
    }

    #[test]
    fn run_calculations_is_stable_apart_from_timestamp() {
        let input = CalculationInput::new(BusinessType::Ecommerce, 82500.0, 2310.0, 42.0);
        let a = run_calculations(input);
        let b = run_calculations(input);

        assert_eq!(a.effective_rate, b.effective_rate);
        assert_eq!(a.benchmark, b.benchmark);
        assert_eq!(a.proposed_rate, b.proposed_rate);
        assert_eq!(a.savings, b.savings);
    }

    #[test]
    fn run_calculations_handles_degraded_input() {
        let input = CalculationInput {
            business_type: BusinessType::Other,
            monthly_volume: -10.0,
            monthly_fees: f64::INFINITY,
            avg_ticket: 0.0,
        };
        let result = run_calculations(input);

        assert_eq!(result.input.monthly_volume, 0.0);
        assert_eq!(result.input.monthly_fees, 0.0);
        assert_eq!(result.effective_rate, 0.0);
        assert_eq!(result.benchmark.category, BenchmarkCategory::Good);
        assert_eq!(result.proposed_rate, 0.0);
        assert_eq!(result.savings.monthly, 0.0);
    }
}
