//! Canonical clinical bounds for patient input fields.
//!
//! These ranges are enforced at the API boundary, not inside the scoring
//! engine; the engine stays total over whatever numbers reach it.

use serde::Serialize;

use crate::domain::foundation::ValidationError;

/// Inclusive clinical range for a single input field.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldBounds {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub unit: &'static str,
}

impl FieldBounds {
    /// Checks a value against this range.
    pub fn check(&self, value: f64) -> Result<(), ValidationError> {
        if value < self.min || value > self.max || value.is_nan() {
            return Err(ValidationError::out_of_range(
                self.field, self.min, self.max, value,
            ));
        }
        Ok(())
    }
}

/// The canonical bounds table, one entry per patient input field.
///
/// Comorbidity flags are 0/1 and surface here only for input controls; in the
/// domain model they are booleans.
pub const FIELD_BOUNDS: &[FieldBounds] = &[
    FieldBounds { field: "age", min: 18.0, max: 100.0, step: 1.0, unit: "years" },
    FieldBounds { field: "bmi", min: 12.0, max: 50.0, step: 0.1, unit: "kg/m²" },
    FieldBounds { field: "heart_rate", min: 30.0, max: 200.0, step: 1.0, unit: "bpm" },
    FieldBounds { field: "respiratory_rate", min: 4.0, max: 60.0, step: 1.0, unit: "breaths/min" },
    FieldBounds { field: "mean_arterial_pressure", min: 40.0, max: 160.0, step: 1.0, unit: "mmHg" },
    FieldBounds { field: "temperature", min: 33.0, max: 42.0, step: 0.1, unit: "°C" },
    FieldBounds { field: "gcs_eyes", min: 1.0, max: 4.0, step: 1.0, unit: "points" },
    FieldBounds { field: "gcs_motor", min: 1.0, max: 6.0, step: 1.0, unit: "points" },
    FieldBounds { field: "gcs_verbal", min: 1.0, max: 5.0, step: 1.0, unit: "points" },
    FieldBounds { field: "creatinine", min: 0.2, max: 15.0, step: 0.1, unit: "mg/dL" },
    FieldBounds { field: "blood_urea_nitrogen", min: 1.0, max: 150.0, step: 1.0, unit: "mg/dL" },
    FieldBounds { field: "sodium", min: 110.0, max: 170.0, step: 1.0, unit: "mEq/L" },
    FieldBounds { field: "albumin", min: 1.0, max: 7.0, step: 0.1, unit: "g/dL" },
    FieldBounds { field: "wbcs", min: 0.0, max: 50.0, step: 0.1, unit: "×10³/µL" },
    FieldBounds { field: "hematocrit", min: 15.0, max: 60.0, step: 1.0, unit: "%" },
    FieldBounds { field: "pao2", min: 30.0, max: 500.0, step: 1.0, unit: "mmHg" },
    FieldBounds { field: "blood_ph", min: 6.8, max: 7.8, step: 0.01, unit: "" },
    FieldBounds { field: "aids", min: 0.0, max: 1.0, step: 1.0, unit: "" },
    FieldBounds { field: "cirrhosis", min: 0.0, max: 1.0, step: 1.0, unit: "" },
    FieldBounds { field: "diabetes", min: 0.0, max: 1.0, step: 1.0, unit: "" },
    FieldBounds { field: "hepatic_failure", min: 0.0, max: 1.0, step: 1.0, unit: "" },
    FieldBounds { field: "immunosuppression", min: 0.0, max: 1.0, step: 1.0, unit: "" },
];

/// Looks up the bounds for a field by name.
pub fn bounds_for(field: &str) -> Option<&'static FieldBounds> {
    FIELD_BOUNDS.iter().find(|b| b.field == field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_table_covers_all_22_fields() {
        assert_eq!(FIELD_BOUNDS.len(), 22);
    }

    #[test]
    fn bounds_for_finds_known_field() {
        let bounds = bounds_for("pao2").unwrap();
        assert_eq!(bounds.min, 30.0);
        assert_eq!(bounds.max, 500.0);
    }

    #[test]
    fn bounds_for_unknown_field_is_none() {
        assert!(bounds_for("lactate").is_none());
    }

    #[test]
    fn check_accepts_inclusive_endpoints() {
        let bounds = bounds_for("temperature").unwrap();
        assert!(bounds.check(33.0).is_ok());
        assert!(bounds.check(42.0).is_ok());
    }

    #[test]
    fn check_rejects_out_of_range() {
        let bounds = bounds_for("age").unwrap();
        assert!(bounds.check(17.9).is_err());
        assert!(bounds.check(100.5).is_err());
    }

    #[test]
    fn check_rejects_nan() {
        let bounds = bounds_for("bmi").unwrap();
        assert!(bounds.check(f64::NAN).is_err());
    }
}
