mod phase_fields;
mod summary;

pub use phase_fields::PhaseFieldsTab;
pub use summary::SummaryTab;
