//! Screen-flow state machine for the calculator shell.
//!
//! The flow is input -> results -> capture. Transitions consume the session
//! and return a new one; there is no shared mutable step flag. A capture
//! snapshot is only reachable after a calculation has been run, so a lead
//! can never be built without one.

use crate::core::CalculationResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Input,
    Results,
    Capture,
}

#[derive(Clone, Debug)]
pub struct Session {
    step: Step,
    result: Option<CalculationResult>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            step: Step::Input,
            result: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    /// Record a completed calculation and move to the results screen.
    pub fn submit_input(self, result: CalculationResult) -> Self {
        Self {
            step: Step::Results,
            result: Some(result),
        }
    }

    /// Move from results to lead capture. An identity transition from any
    /// other step: capture is unreachable without a prior calculation.
    pub fn begin_capture(self) -> Self {
        match (self.step, &self.result) {
            (Step::Results, Some(_)) => Self {
                step: Step::Capture,
                ..self
            },
            _ => self,
        }
    }

    /// The calculation backing the capture screen, if we are on it.
    pub fn capture_snapshot(&self) -> Option<&CalculationResult> {
        match self.step {
            Step::Capture => self.result.as_ref(),
            _ => None,
        }
    }

    /// Discard the current calculation and start over.
    pub fn restart(self) -> Self {
        Self::new()
    }

    /// A lead was persisted; the flow returns to a fresh input screen.
    pub fn lead_saved(self) -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BusinessType, CalculationInput};
    use crate::engine::run_calculations;

    fn sample_result() -> CalculationResult {
        run_calculations(CalculationInput::new(
            BusinessType::Retail,
            50000.0,
            1500.0,
            0.0,
        ))
    }

    #[test]
    fn fresh_session_starts_on_input() {
        let session = Session::new();
        assert_eq!(session.step(), Step::Input);
        assert!(session.result().is_none());
        assert!(session.capture_snapshot().is_none());
    }

    #[test]
    fn submitting_input_moves_to_results() {
        let session = Session::new().submit_input(sample_result());
        assert_eq!(session.step(), Step::Results);
        assert!(session.result().is_some());
    }

    #[test]
    fn capture_requires_a_prior_calculation() {
        // begin_capture straight from Input is an identity transition
        let session = Session::new().begin_capture();
        assert_eq!(session.step(), Step::Input);
        assert!(session.capture_snapshot().is_none());
    }

    #[test]
    fn capture_exposes_the_snapshot() {
        let session = Session::new().submit_input(sample_result()).begin_capture();
        assert_eq!(session.step(), Step::Capture);
        let snapshot = session.capture_snapshot().unwrap();
        assert_eq!(snapshot.effective_rate, 3.0);
    }

    #[test]
    fn restart_and_lead_saved_reset_the_flow() {
        let session = Session::new().submit_input(sample_result()).restart();
        assert_eq!(session.step(), Step::Input);
        assert!(session.result().is_none());

        let session = Session::new()
            .submit_input(sample_result())
            .begin_capture()
            .lead_saved();
        assert_eq!(session.step(), Step::Input);
        assert!(session.result().is_none());
    }
}
