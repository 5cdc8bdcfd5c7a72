//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`bars`]: the array as a bar chart, colored from the current frame
//! - [`legend`]: algorithm name, description, live fields and color key
//! - [`log`]: step messages up to the shown frame
//! - [`status`]: status bar with keybindings and run state
//!
//! Each pane module exports a primary `render_*` function that draws from
//! borrowed engine data and holds no state of its own beyond scroll offsets
//! owned by the [`App`](crate::ui::App).

pub mod bars;
pub mod legend;
pub mod log;
pub mod status;

// Re-export render functions for convenience
pub use bars::render_bars_pane;
pub use legend::render_legend_pane;
pub use log::render_log_pane;
pub use status::{render_status_bar, StatusRenderData};
