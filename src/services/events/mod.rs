// Cell click notifications
// Observer registration for hosts that want to react to cell clicks

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::grid::{Cell, GridMatrix};

/// Payload delivered when a clickable cell is clicked
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellClick {
    pub date: NaiveDate,
    pub value: f64,
}

impl From<&Cell> for CellClick {
    fn from(cell: &Cell) -> Self {
        Self {
            date: cell.date,
            value: cell.value,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait CellClickListener {
    fn on_cell_click(&mut self, click: &CellClick);
}

impl<F> CellClickListener for F
where
    F: FnMut(&CellClick),
{
    fn on_cell_click(&mut self, click: &CellClick) {
        self(click)
    }
}

/// Fans a click out to every subscribed listener, in subscription order.
#[derive(Default)]
pub struct CellClickEmitter {
    listeners: Vec<Box<dyn CellClickListener>>,
}

impl std::fmt::Debug for CellClickEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CellClickEmitter")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl CellClickEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<L>(&mut self, listener: L)
    where
        L: CellClickListener + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Notify listeners of a click on `cell`.
    ///
    /// Returns false without notifying anyone when the cell is not clickable.
    pub fn emit(&mut self, cell: &Cell) -> bool {
        if !cell.clickable {
            log::trace!("Suppressed click on out-of-range cell {}", cell.date);
            return false;
        }

        let click = CellClick::from(cell);
        for listener in &mut self.listeners {
            listener.on_cell_click(&click);
        }
        true
    }

    /// Resolve a grid position, then [`emit`](Self::emit) for it.
    pub fn click_at(&mut self, grid: &GridMatrix, weekday: usize, column: usize) -> bool {
        match grid.cell(weekday, column) {
            Some(cell) => self.emit(cell),
            None => false,
        }
    }
}
