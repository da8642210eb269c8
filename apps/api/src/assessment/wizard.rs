use thiserror::Error;

use crate::assessment::steps::Step;
use crate::models::Profile;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("answer for step {step:?} must be longer than {min_exclusive} characters (got {actual})")]
    TooShort {
        step: Step,
        min_exclusive: usize,
        actual: usize,
    },
}

/// Outcome of a successful advance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardProgress {
    /// Moved on to this step.
    Step(Step),
    /// Last step passed; the full profile is handed over.
    Complete(Profile),
}

/// Forward-only three-step form. Sole producer of `Profile`.
#[derive(Debug, Clone, Default)]
pub struct AssessmentWizard {
    step: Step,
    passions: String,
    skills: String,
    preferred_work_style: String,
}

impl AssessmentWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// The answer held for the current step.
    pub fn answer(&self) -> &str {
        self.answer_for(self.step)
    }

    pub fn answer_for(&self, step: Step) -> &str {
        match step {
            Step::Passions => &self.passions,
            Step::Skills => &self.skills,
            Step::WorkStyle => &self.preferred_work_style,
        }
    }

    /// Replaces the current step's answer. Earlier answers are frozen.
    pub fn set_answer(&mut self, text: impl Into<String>) {
        let text = text.into();
        match self.step {
            Step::Passions => self.passions = text,
            Step::Skills => self.skills = text,
            Step::WorkStyle => self.preferred_work_style = text,
        }
    }

    pub fn can_advance(&self) -> bool {
        answer_length(self.answer()) > self.step.min_length_exclusive()
    }

    pub fn advance(&mut self) -> Result<WizardProgress, WizardError> {
        if !self.can_advance() {
            return Err(WizardError::TooShort {
                step: self.step,
                min_exclusive: self.step.min_length_exclusive(),
                actual: answer_length(self.answer()),
            });
        }

        match self.step.next() {
            Some(next) => {
                self.step = next;
                Ok(WizardProgress::Step(next))
            }
            None => Ok(WizardProgress::Complete(Profile {
                passions: self.passions.clone(),
                skills: self.skills.clone(),
                preferred_work_style: self.preferred_work_style.clone(),
            })),
        }
    }
}

/// Length in characters, untrimmed.
fn answer_length(text: &str) -> usize {
    text.chars().count()
}
