//! Configuration for the layout engine

use serde::Deserialize;

/// Placement constants for the fixed-grid layout
///
/// Every field can be overridden from the `[layout]` table of a render
/// configuration file; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// X of the left entity column
    pub left_x: f64,

    /// X of the right entity column
    pub right_x: f64,

    /// X of the first process grid column
    pub process_start_x: f64,

    /// Horizontal distance between process grid columns
    pub process_column_gap: f64,

    /// Number of process grid columns
    pub process_columns: usize,

    /// Y of the first row, shared by entities and processes
    pub row_start_y: f64,

    /// Vertical distance between process grid rows
    pub process_row_gap: f64,

    /// Vertical step between entities in the same column
    pub entity_row_height: f64,

    /// Height of the band entity rows wrap around in
    pub entity_band_height: f64,

    /// Y delta from a process to its store (negative is above)
    pub store_offset_y: f64,

    /// Entity box size (width, height)
    pub entity_size: (f64, f64),

    /// Process ellipse size (width, height)
    pub process_size: (f64, f64),

    /// Store size (width, height)
    pub store_size: (f64, f64),

    /// Title block origin (x, y)
    pub title_position: (f64, f64),

    /// Title block size (width, height)
    pub title_size: (f64, f64),
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            left_x: 150.0,
            right_x: 1450.0,
            process_start_x: 500.0,
            process_column_gap: 350.0,
            process_columns: 3,
            row_start_y: 300.0,
            process_row_gap: 250.0,
            entity_row_height: 200.0,
            entity_band_height: 600.0,
            store_offset_y: -120.0,
            entity_size: (140.0, 70.0),
            process_size: (130.0, 100.0),
            store_size: (130.0, 40.0),
            title_position: (600.0, 50.0),
            title_size: (600.0, 40.0),
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the x of both entity columns
    pub fn with_entity_columns(mut self, left_x: f64, right_x: f64) -> Self {
        self.left_x = left_x;
        self.right_x = right_x;
        self
    }

    /// Set the process grid origin, column gap and row gap
    pub fn with_process_grid(mut self, start_x: f64, column_gap: f64, row_gap: f64) -> Self {
        self.process_start_x = start_x;
        self.process_column_gap = column_gap;
        self.process_row_gap = row_gap;
        self
    }

    /// Set the number of process grid columns
    pub fn with_process_columns(mut self, columns: usize) -> Self {
        self.process_columns = columns;
        self
    }

    /// Set the y of the first row
    pub fn with_row_start(mut self, y: f64) -> Self {
        self.row_start_y = y;
        self
    }

    /// Set the entity row step and the band it wraps around in
    pub fn with_entity_band(mut self, row_height: f64, band_height: f64) -> Self {
        self.entity_row_height = row_height;
        self.entity_band_height = band_height;
        self
    }

    /// Set the store offset relative to its process
    pub fn with_store_offset(mut self, offset_y: f64) -> Self {
        self.store_offset_y = offset_y;
        self
    }

    /// Number of distinct entity rows before positions wrap around
    pub fn entity_rows_per_band(&self) -> usize {
        if self.entity_row_height <= 0.0 {
            return 0;
        }
        (self.entity_band_height / self.entity_row_height).floor() as usize
    }

    /// Whether the process grid spacing leaves room for a process and its store
    pub fn process_grid_is_clear(&self) -> bool {
        self.process_column_gap > self.process_size.0
            && self.process_row_gap > self.process_size.1 + self.store_size.1
    }
}
