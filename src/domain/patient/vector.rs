//! Patient input vector - the single input record of the scoring engine.

use serde::{Deserialize, Serialize};

use super::bounds::bounds_for;
use crate::domain::foundation::ValidationError;

/// A complete set of physiological and demographic inputs for one patient.
///
/// All continuous fields carry the caller's raw values; clinical range
/// enforcement belongs to the API boundary via [`PatientVector::validate`].
/// The scoring formulas are total over arbitrary finite values and never
/// divide by an input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientVector {
    pub age: f64,
    pub bmi: f64,
    pub heart_rate: f64,
    pub respiratory_rate: f64,
    pub mean_arterial_pressure: f64,
    pub temperature: f64,
    pub gcs_eyes: f64,
    pub gcs_motor: f64,
    pub gcs_verbal: f64,
    pub creatinine: f64,
    pub blood_urea_nitrogen: f64,
    pub sodium: f64,
    pub albumin: f64,
    pub wbcs: f64,
    pub hematocrit: f64,
    pub pao2: f64,
    pub blood_ph: f64,
    pub aids: bool,
    pub cirrhosis: bool,
    pub diabetes: bool,
    pub hepatic_failure: bool,
    pub immunosuppression: bool,
}

impl PatientVector {
    /// Glasgow Coma Scale total (eyes + motor + verbal, valid range 3-15).
    pub fn gcs_total(&self) -> f64 {
        self.gcs_eyes + self.gcs_motor + self.gcs_verbal
    }

    /// Checks every continuous field against the canonical bounds table.
    ///
    /// Returns the first violation found, in field-table order. Comorbidity
    /// flags are booleans and cannot be out of range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in self.continuous_fields() {
            if let Some(bounds) = bounds_for(field) {
                bounds.check(value)?;
            }
        }
        Ok(())
    }

    /// The continuous fields paired with their canonical names.
    fn continuous_fields(&self) -> [(&'static str, f64); 17] {
        [
            ("age", self.age),
            ("bmi", self.bmi),
            ("heart_rate", self.heart_rate),
            ("respiratory_rate", self.respiratory_rate),
            ("mean_arterial_pressure", self.mean_arterial_pressure),
            ("temperature", self.temperature),
            ("gcs_eyes", self.gcs_eyes),
            ("gcs_motor", self.gcs_motor),
            ("gcs_verbal", self.gcs_verbal),
            ("creatinine", self.creatinine),
            ("blood_urea_nitrogen", self.blood_urea_nitrogen),
            ("sodium", self.sodium),
            ("albumin", self.albumin),
            ("wbcs", self.wbcs),
            ("hematocrit", self.hematocrit),
            ("pao2", self.pao2),
            ("blood_ph", self.blood_ph),
        ]
    }

    /// A reference admission profile: a 65-year-old with unremarkable vitals
    /// and labs and no comorbidities. Used as the seed for input controls and
    /// as a known-answer fixture in tests.
    pub fn baseline() -> Self {
        Self {
            age: 65.0,
            bmi: 25.0,
            heart_rate: 80.0,
            respiratory_rate: 16.0,
            mean_arterial_pressure: 90.0,
            temperature: 37.0,
            gcs_eyes: 4.0,
            gcs_motor: 6.0,
            gcs_verbal: 5.0,
            creatinine: 1.0,
            blood_urea_nitrogen: 20.0,
            sodium: 140.0,
            albumin: 4.0,
            wbcs: 8.0,
            hematocrit: 40.0,
            pao2: 95.0,
            blood_ph: 7.4,
            aids: false,
            cirrhosis: false,
            diabetes: false,
            hepatic_failure: false,
            immunosuppression: false,
        }
    }
}
