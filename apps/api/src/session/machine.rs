//! Five-state view machine: Landing → Assessment → Analyzing → Results | Error.
//!
//! Each state owns its data, so a populated result list can only exist in
//! `Results` and an error message only in `Error`.

use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::assessment::{AssessmentWizard, Step, WizardError, WizardProgress};
use crate::models::{CareerSuggestion, Profile};
use crate::recommendation::RequestError;
use crate::results::{CardOutOfRange, ResultsBoard};

/// The one message shown for every failure. Causes go to the log only.
pub const ERROR_MESSAGE: &str =
    "Hubo un error al conectar con la IA. Verifica tu API Key o intenta más tarde.";

/// The request issued on entering `Analyzing`, tagged so a late answer
/// can be matched against the submission it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub id: Uuid,
    pub profile: Profile,
}

#[derive(Debug, Clone)]
pub enum ViewState {
    Landing,
    Assessment(AssessmentWizard),
    Analyzing(PendingRequest),
    Results(ResultsBoard),
    Error { message: String },
}

impl ViewState {
    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Landing => "landing",
            ViewState::Assessment(_) => "assessment",
            ViewState::Analyzing(_) => "analyzing",
            ViewState::Results(_) => "results",
            ViewState::Error { .. } => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("cannot {action} while the session is in {state}")]
    NotAllowed {
        action: &'static str,
        state: &'static str,
    },

    #[error(transparent)]
    Wizard(#[from] WizardError),

    #[error(transparent)]
    Card(#[from] CardOutOfRange),
}

/// What a successful wizard advance did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    Step(Step),
    /// The session is now `Analyzing`; the caller must run exactly this request.
    Submitted(PendingRequest),
}

/// What applying a recommendation outcome did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Results(usize),
    Failed,
    /// The session had moved on; the outcome was dropped.
    Stale,
}

#[derive(Debug, Clone)]
pub struct Session {
    state: ViewState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: ViewState::Landing,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Landing → Assessment with an empty wizard.
    pub fn start(&mut self) -> Result<(), TransitionError> {
        match self.state {
            ViewState::Landing => {
                self.transition(ViewState::Assessment(AssessmentWizard::new()));
                Ok(())
            }
            _ => Err(self.not_allowed("start")),
        }
    }

    /// Sets the answer for the wizard's current step.
    pub fn set_answer(&mut self, text: String) -> Result<(), TransitionError> {
        match &mut self.state {
            ViewState::Assessment(wizard) => {
                wizard.set_answer(text);
                Ok(())
            }
            _ => Err(self.not_allowed("answer")),
        }
    }

    /// Advances the wizard. On the last step the session enters `Analyzing`
    /// and hands back the one request to run.
    pub fn advance(&mut self) -> Result<Advance, TransitionError> {
        let progress = match &mut self.state {
            ViewState::Assessment(wizard) => wizard.advance()?,
            _ => return Err(self.not_allowed("advance")),
        };

        match progress {
            WizardProgress::Step(step) => Ok(Advance::Step(step)),
            WizardProgress::Complete(profile) => {
                let pending = PendingRequest {
                    id: Uuid::new_v4(),
                    profile,
                };
                self.transition(ViewState::Analyzing(pending.clone()));
                Ok(Advance::Submitted(pending))
            }
        }
    }

    /// Applies the outcome of request `id`. Failures and empty lists both
    /// land in `Error`; outcomes for anything but the current request are dropped.
    pub fn resolve(
        &mut self,
        id: Uuid,
        outcome: Result<Vec<CareerSuggestion>, RequestError>,
    ) -> Resolution {
        match &self.state {
            ViewState::Analyzing(pending) if pending.id == id => {}
            other => {
                warn!(
                    "Discarding outcome of request {id}: session is in {}",
                    other.name()
                );
                return Resolution::Stale;
            }
        }

        match outcome {
            Ok(suggestions) => match ResultsBoard::new(suggestions) {
                Some(board) => {
                    let count = board.suggestions().len();
                    self.transition(ViewState::Results(board));
                    Resolution::Results(count)
                }
                None => {
                    warn!("Request {id} produced no suggestions");
                    self.fail();
                    Resolution::Failed
                }
            },
            Err(e) => {
                error!("Request {id} failed: {e}");
                self.fail();
                Resolution::Failed
            }
        }
    }

    pub fn toggle_card(&mut self, index: usize) -> Result<Option<usize>, TransitionError> {
        match &mut self.state {
            ViewState::Results(board) => Ok(board.toggle(index)?),
            _ => Err(self.not_allowed("toggle a card")),
        }
    }

    /// Error → Assessment. The user fills the form again from scratch.
    pub fn retry(&mut self) -> Result<(), TransitionError> {
        match self.state {
            ViewState::Error { .. } => {
                self.transition(ViewState::Assessment(AssessmentWizard::new()));
                Ok(())
            }
            _ => Err(self.not_allowed("retry")),
        }
    }

    /// Results → Landing, dropping the profile and every suggestion.
    pub fn reset(&mut self) -> Result<(), TransitionError> {
        match self.state {
            ViewState::Results(_) => {
                self.transition(ViewState::Landing);
                Ok(())
            }
            _ => Err(self.not_allowed("reset")),
        }
    }

    fn fail(&mut self) {
        self.transition(ViewState::Error {
            message: ERROR_MESSAGE.to_string(),
        });
    }

    fn transition(&mut self, next: ViewState) {
        info!("Session: {} -> {}", self.state.name(), next.name());
        self.state = next;
    }

    fn not_allowed(&self, action: &'static str) -> TransitionError {
        TransitionError::NotAllowed {
            action,
            state: self.state.name(),
        }
    }
}
