//! AnalyzePatientHandler - Command handler for the clinical analysis.

use crate::domain::foundation::DomainError;
use crate::domain::patient::PatientVector;
use crate::domain::scoring::{ClinicalAnalysis, ScoringEngine};

/// Command to compute the clinical analysis for one patient.
#[derive(Debug, Clone)]
pub struct AnalyzePatientCommand {
    pub patient: PatientVector,
}

/// Handler for the deterministic clinical analysis.
///
/// The engine itself is total and synchronous; this handler only adds the
/// boundary validation so incomplete clinical input fails fast instead of
/// being silently scored.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyzePatientHandler;

impl AnalyzePatientHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        command: AnalyzePatientCommand,
    ) -> Result<ClinicalAnalysis, DomainError> {
        command.patient.validate()?;
        Ok(ScoringEngine::analyze(&command.patient))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::scoring::RiskLevel;

    #[test]
    fn baseline_patient_analysis_is_moderate() {
        let handler = AnalyzePatientHandler::new();

        let analysis = handler
            .handle(AnalyzePatientCommand {
                patient: PatientVector::baseline(),
            })
            .unwrap();

        assert_eq!(analysis.severity_score, 3);
        assert_eq!(analysis.mortality_risk.value(), 25.0);
        assert_eq!(analysis.risk_level, RiskLevel::Moderate);
    }

    #[test]
    fn out_of_range_vector_is_rejected() {
        let handler = AnalyzePatientHandler::new();

        let mut patient = PatientVector::baseline();
        patient.temperature = 30.0;

        let err = handler
            .handle(AnalyzePatientCommand { patient })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::OutOfRange);
    }
}
