//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop and the playback tick
//! - **[`panes`]**: stateless render functions for each visible pane (chart,
//!   algorithm list, metrics, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point is [`App`]: construct it with a [`Session`] and call
//! [`App::run`] to start the event loop.
//!
//! [`Session`]: crate::playback::Session
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
