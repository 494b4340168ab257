//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`chart`]: One bar per element, coloured by the frame's highlight sets
//! - [`algorithms`]: The six algorithms with the current selection
//! - [`metrics`]: Comparisons, swaps, steps and elapsed time
//! - [`status`]: Status bar with keybindings and playback state
//!
//! Every pane is a stateless `render_*()` function; the app passes it
//! whatever it needs for one frame.

pub mod algorithms;
pub mod chart;
pub mod metrics;
pub mod status;

// Re-export render functions for convenience
pub use algorithms::render_algorithms_pane;
pub use chart::render_chart_pane;
pub use metrics::{render_metrics_pane, MetricsRenderData};
pub use status::{render_status_bar, StatusRenderData};
