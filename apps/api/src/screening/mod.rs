// Standardized screening questionnaires (PHQ-9, GAD-7): question catalog,
// score interpretation and coping-strategy tables.

pub mod catalog;
pub mod handlers;
pub mod interpreter;

pub use catalog::Instrument;
