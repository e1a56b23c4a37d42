//! Simulation configuration: grid size, the row swaps to scramble, playback
//! pacing and SVG layout.
//!
//! Stored as JSON. Every field has a default, so a config file only needs
//! to name what it changes.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Largest grid whose rows and columns can still be labelled `a..=z`.
pub const MAX_GRID_SIZE: u16 = 26;

/// A pair of rows whose boxes trade places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSwap {
    pub a: u16,
    pub b: u16,
}

impl RowSwap {
    pub const fn new(a: u16, b: u16) -> Self {
        Self { a, b }
    }
}

/// Geometry and colors of the exported SVG document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgLayout {
    /// Side of each box in pixels
    pub cell_size: u32,
    /// Distance between the top-left corners of neighbouring boxes
    pub cell_pitch: u32,
    /// Fill of boxes that reached the dock
    pub dock_fill: String,
    /// Fill of the marked box
    pub marked_fill: String,
}

impl Default for SvgLayout {
    fn default() -> Self {
        Self {
            cell_size: 75,
            cell_pitch: 85,
            dock_fill: "green".to_string(),
            marked_fill: "blue".to_string(),
        }
    }
}

/// Top-level configuration that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Rows and columns of the visible grid
    pub grid_size: u16,
    /// Row pairs swapped, in order, to build the move queue
    pub swaps: Vec<RowSwap>,
    /// Delay between frames during animated playback
    pub step_interval_ms: u64,
    /// Label of the box drawn in the marker color, if any
    pub marked_label: Option<String>,
    pub svg: SvgLayout,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            swaps: vec![
                RowSwap::new(1, 10),
                RowSwap::new(2, 9),
                RowSwap::new(3, 8),
                RowSwap::new(4, 7),
                RowSwap::new(5, 6),
            ],
            step_interval_ms: 200,
            marked_label: Some("Data-f-e".to_string()),
            svg: SvgLayout::default(),
        }
    }
}

impl SimulationConfig {
    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Load from `path` when given, otherwise use the defaults. The result is validated.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => {
                tracing::debug!("No config file given, using defaults");
                Self::default()
            }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            anyhow::bail!("Grid size must be at least 1");
        }
        if self.grid_size > MAX_GRID_SIZE {
            anyhow::bail!("Grid size must be at most {}", MAX_GRID_SIZE);
        }

        for swap in &self.swaps {
            for row in [swap.a, swap.b] {
                if row == 0 || row > self.grid_size {
                    anyhow::bail!(
                        "Swap ({}, {}) names row {} outside 1..={}",
                        swap.a,
                        swap.b,
                        row,
                        self.grid_size
                    );
                }
            }
        }

        if self.step_interval_ms == 0 {
            anyhow::bail!("Step interval must be at least 1 ms");
        }

        if self.svg.cell_size == 0 || self.svg.cell_pitch < self.svg.cell_size {
            anyhow::bail!("SVG cell pitch must be at least the (non-zero) cell size");
        }

        if let Some(label) = &self.marked_label {
            if label.trim().is_empty() {
                anyhow::bail!("Marked label cannot be blank; omit it instead");
            }
        }

        Ok(())
    }
}
