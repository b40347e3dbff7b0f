pub mod assistance;
pub mod domain;
pub mod entry;
pub mod measure;

pub use assistance::AssistanceLevel;
pub use domain::OutcomeDomain;
pub use entry::{EntryMethod, OutcomeEntry};
pub use measure::{InterpretationBand, OutcomeMeasure, ScoringKind};
