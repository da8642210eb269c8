//! Serializable snapshot of the session, one shape per state.

use serde::Serialize;

use crate::assessment::steps::{Step, StepCopy};
use crate::assessment::AssessmentWizard;
use crate::results::dashboard::{CardView, ChartBar};
use crate::results::ResultsBoard;
use crate::session::machine::{Session, ViewState};

pub const ANALYZING_MESSAGE: &str = "Analizando tu perfil...";

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionView {
    Landing,
    Assessment(AssessmentView),
    Analyzing { message: &'static str },
    Results(ResultsView),
    Error { message: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentView {
    pub step: Step,
    pub step_number: u8,
    pub total_steps: usize,
    pub field: &'static str,
    pub answer: String,
    pub min_length_exclusive: usize,
    pub can_advance: bool,
    pub button_label: &'static str,
    pub copy: StepCopy,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultsView {
    pub count: usize,
    pub expanded: Option<usize>,
    pub chart: Vec<ChartBar>,
    pub cards: Vec<CardView>,
}

impl From<&AssessmentWizard> for AssessmentView {
    fn from(wizard: &AssessmentWizard) -> Self {
        let step = wizard.step();
        AssessmentView {
            step,
            step_number: step.number(),
            total_steps: Step::ALL.len(),
            field: step.field(),
            answer: wizard.answer().to_string(),
            min_length_exclusive: step.min_length_exclusive(),
            can_advance: wizard.can_advance(),
            button_label: step.button_label(),
            copy: step.copy(),
        }
    }
}

impl From<&ResultsBoard> for ResultsView {
    fn from(board: &ResultsBoard) -> Self {
        ResultsView {
            count: board.suggestions().len(),
            expanded: board.expanded(),
            chart: board.chart(),
            cards: board.cards(),
        }
    }
}

impl From<&ViewState> for SessionView {
    fn from(state: &ViewState) -> Self {
        match state {
            ViewState::Landing => SessionView::Landing,
            ViewState::Assessment(wizard) => SessionView::Assessment(wizard.into()),
            ViewState::Analyzing(_) => SessionView::Analyzing {
                message: ANALYZING_MESSAGE,
            },
            ViewState::Results(board) => SessionView::Results(board.into()),
            ViewState::Error { message } => SessionView::Error {
                message: message.clone(),
            },
        }
    }
}

impl Session {
    pub fn view(&self) -> SessionView {
        self.state().into()
    }
}
