use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Fixed grid width, matching a host inventory row.
pub const GRID_COLUMNS: usize = 9;
pub const MIN_GRID_ROWS: usize = 2;
pub const MAX_GRID_ROWS: usize = 6;
pub const DEFAULT_GRID_ROWS: usize = 5;

/// Grid geometry. The last row is reserved for navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    rows: usize,
}

impl GridLayout {
    pub fn new(rows: usize) -> Result<Self> {
        if !(MIN_GRID_ROWS..=MAX_GRID_ROWS).contains(&rows) {
            return Err(Error::InvalidLayout(format!(
                "rows must be between {} and {}, got {}",
                MIN_GRID_ROWS, MAX_GRID_ROWS, rows
            )));
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        GRID_COLUMNS
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.rows * GRID_COLUMNS
    }

    /// Catalog slots per page: capacity minus the reserved navigation row.
    pub fn page_capacity(&self) -> usize {
        self.capacity() - GRID_COLUMNS
    }

    /// First slot of the navigation row.
    pub fn action_row(&self) -> usize {
        self.page_capacity()
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            rows: DEFAULT_GRID_ROWS,
        }
    }
}
