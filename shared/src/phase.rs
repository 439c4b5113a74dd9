use crate::error::AnalyzeError;

/// Single-flight guard for the analyze action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnalysisPhase {
    #[default]
    Idle,
    InFlight,
}

impl AnalysisPhase {
    /// Moves to `InFlight`, refusing if a request is already outstanding.
    pub fn begin(&mut self) -> Result<(), AnalyzeError> {
        match self {
            AnalysisPhase::Idle => {
                *self = AnalysisPhase::InFlight;
                Ok(())
            }
            AnalysisPhase::InFlight => Err(AnalyzeError::Busy),
        }
    }

    pub fn finish(&mut self) {
        *self = AnalysisPhase::Idle;
    }

    pub fn is_in_flight(self) -> bool {
        self == AnalysisPhase::InFlight
    }
}
