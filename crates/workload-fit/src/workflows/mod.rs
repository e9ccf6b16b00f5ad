pub mod ai_ml;
pub mod catalog;
pub mod suitability;
