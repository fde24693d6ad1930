//! Builds the nested grid diagram of a trace.
//!
//! The outer grid has two columns and one row per state: column 0 holds the
//! state label, column 1 a nested grid summarising the state. The nested grid
//! has one row per participant atom, showing its identifier followed by one
//! `{label}:{value}` cell per configured field.
//!
//! ```text
//!  State:0              Server0  role:Leader     voted:Server0
//!                       Server1  role:Follower   voted:Server0
//!  State:1 (loopback)   Server0  role:Leader     voted:
//!                       ...
//! ```
//!
//! Every grid is fully built before it is attached to its parent; nothing is
//! drawn until the finished tree is rendered.

use log::{debug, info};

use trellis_core::{
    draw::{Grid, TextBox, TextStyle},
    geometry::{CellCoord, Dimensions},
};

use crate::{
    config::LayoutConfig,
    error::TrellisError,
    trace::{Atom, Instance, TraceError},
};

/// Composes trace states into a grid tree.
#[derive(Debug, Clone)]
pub struct TraceComposer {
    layout: LayoutConfig,
    style: TextStyle,
}

impl TraceComposer {
    /// Creates a composer.
    ///
    /// # Arguments
    ///
    /// * `layout` - Grid geometry, participant signature and displayed fields.
    /// * `style` - Style applied to every text box.
    pub fn new(layout: LayoutConfig, style: TextStyle) -> Self {
        Self { layout, style }
    }

    /// Builds the outer state grid.
    ///
    /// # Arguments
    ///
    /// * `states` - The trace states, in trace order.
    /// * `loopback` - Index of the state the trace loops back to, if any.
    ///
    /// # Errors
    ///
    /// - [`TraceError::Empty`] if there are no states.
    /// - [`TraceError::LoopbackOutOfRange`] if `loopback` is not a state index.
    /// - Any query error of the states, and grid errors for invalid geometry.
    pub fn compose<I: Instance>(
        &self,
        states: &[I],
        loopback: Option<usize>,
    ) -> Result<Grid, TrellisError> {
        if states.is_empty() {
            return Err(TraceError::Empty.into());
        }
        if let Some(loopback) = loopback.filter(|index| *index >= states.len()) {
            return Err(TraceError::LoopbackOutOfRange {
                loopback,
                states: states.len(),
            }
            .into());
        }

        info!(states = states.len(), loopback:?; "Composing trace");

        let mut grid = Grid::new(
            self.layout
                .states()
                .grid_config(Dimensions::new(2, states.len())),
        )?;

        for (index, state) in states.iter().enumerate() {
            grid.place(
                CellCoord::new(0, index),
                self.text(state_label(index, loopback)),
            )?;

            match self.compose_state(state)? {
                Some(state_grid) => {
                    grid.place(CellCoord::new(1, index), state_grid)?;
                }
                None => {
                    debug!(state = index; "State has no participants, leaving cell empty");
                }
            }
        }

        Ok(grid)
    }

    /// Builds the participant grid of one state.
    ///
    /// Returns `None` when the state has no atoms of the participant signature.
    ///
    /// # Errors
    ///
    /// Propagates query errors for unknown signatures or fields.
    pub fn compose_state<I: Instance>(&self, state: &I) -> Result<Option<Grid>, TrellisError> {
        let participants = state.atoms(self.layout.signature())?;
        if participants.is_empty() {
            return Ok(None);
        }

        let fields = self.layout.fields();
        let mut grid = Grid::new(
            self.layout
                .participants()
                .grid_config(Dimensions::new(1 + fields.len(), participants.len())),
        )?;

        for (row, participant) in participants.iter().enumerate() {
            grid.place(CellCoord::new(0, row), self.text(participant.id()))?;

            for (column, field) in fields.iter().enumerate() {
                let related = state.join(participant, field.relation())?;
                grid.place(
                    CellCoord::new(column + 1, row),
                    self.text(format!("{}:{}", field.label(), join_ids(&related))),
                )?;
            }
        }

        debug!(
            participants = participants.len(),
            fields = fields.len();
            "Composed state grid"
        );
        Ok(Some(grid))
    }

    fn text(&self, content: impl Into<String>) -> TextBox {
        TextBox::new(content).with_style(self.style.clone())
    }
}

/// Returns the label of the state at `index`.
pub fn state_label(index: usize, loopback: Option<usize>) -> String {
    if loopback == Some(index) {
        format!("State:{index} (loopback)")
    } else {
        format!("State:{index}")
    }
}

fn join_ids(atoms: &[Atom]) -> String {
    atoms.iter().map(Atom::id).collect::<Vec<_>>().join(", ")
}
