//! Train selection and simulation dialog state machine.
//!
//! Selection moves between three states: nothing selected, a train
//! selected, and the simulation dialog open. The dialog remembers the
//! selection that was current when it opened and restores it on close,
//! and while it is open new train selections are ignored.

use railwatch_types::TrainId;
use tracing::debug;

/// Where the operator's focus currently sits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// No train selected, no dialog open.
    #[default]
    Idle,
    /// A train is selected for inspection.
    TrainSelected(TrainId),
    /// The simulation dialog is open, retaining whatever selection was
    /// current when it opened.
    SimulationOpen(Option<TrainId>),
}

impl Selection {
    /// Select a train for inspection.
    ///
    /// Ignored (returning `false`) while the simulation dialog is open.
    pub fn select(&mut self, train: TrainId) -> bool {
        if matches!(self, Self::SimulationOpen(_)) {
            debug!(train = %train, "selection ignored while simulation dialog is open");
            return false;
        }
        *self = Self::TrainSelected(train);
        true
    }

    /// Select a train and open the simulation dialog in one step.
    ///
    /// Valid from any state; if the dialog is already open its carried
    /// selection is replaced.
    pub fn open_dialog_for(&mut self, train: TrainId) {
        *self = Self::SimulationOpen(Some(train));
    }

    /// Open the simulation dialog, carrying the current selection.
    ///
    /// Opening an already-open dialog changes nothing.
    pub fn open_dialog(&mut self) {
        *self = match std::mem::take(self) {
            Self::Idle => Self::SimulationOpen(None),
            Self::TrainSelected(train) => Self::SimulationOpen(Some(train)),
            open @ Self::SimulationOpen(_) => {
                debug!("simulation dialog already open");
                open
            }
        };
    }

    /// Close the simulation dialog, restoring the selection it carried.
    ///
    /// Closing when no dialog is open changes nothing.
    pub fn close_dialog(&mut self) {
        *self = match std::mem::take(self) {
            Self::SimulationOpen(Some(train)) => Self::TrainSelected(train),
            Self::SimulationOpen(None) => Self::Idle,
            closed => {
                debug!("no simulation dialog to close");
                closed
            }
        };
    }

    /// The train currently in focus, if any.
    pub const fn selected_train(&self) -> Option<&TrainId> {
        match self {
            Self::Idle => None,
            Self::TrainSelected(train) => Some(train),
            Self::SimulationOpen(selected) => selected.as_ref(),
        }
    }

    /// Whether the simulation dialog is open.
    pub const fn is_dialog_open(&self) -> bool {
        matches!(self, Self::SimulationOpen(_))
    }
}
