// Assessment wizard: three fixed steps, each gated on the length of one answer.

pub mod steps;
pub mod wizard;

pub use steps::Step;
pub use wizard::{AssessmentWizard, WizardError, WizardProgress};
