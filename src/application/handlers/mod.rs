//! Application handlers - Commands and queries over the domain and ports.

mod analyze_patient;
mod get_dataset_overview;
mod predict_mortality;

pub use analyze_patient::{AnalyzePatientCommand, AnalyzePatientHandler};
pub use get_dataset_overview::{GetDatasetOverviewHandler, GetDatasetOverviewQuery};
pub use predict_mortality::{
    PredictMortalityCommand, PredictMortalityHandler, PredictMortalityResult,
};
