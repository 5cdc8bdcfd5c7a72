//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, autoplay timing
//! - **[`panes`]**: stateless render functions for each visible pane (bars,
//!   legend, step log, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with an algorithm and
//! an input array, then call [`App::run`] to start the event loop. The UI only
//! reads frames and issues controller commands; it never touches algorithm
//! state.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
