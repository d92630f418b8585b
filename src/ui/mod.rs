//! UI module - handles all TUI rendering
//!
//! Structure:
//! - `draw/` - Frame layout: sidebar form and main panel
//! - `theme.rs` - Color themes and presets
//! - `chart.rs` - Trend chart widget
//! - `data_table.rs` - Formatted data table

pub mod chart;
pub mod data_table;
mod draw;
pub mod theme;

// Re-export main draw function
pub use draw::draw;

pub use theme::Theme;
