//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — key handling and the event loop that clocks playback
//! - **[`panes`]** — stateless render functions for the bars, controls and
//!   status bar
//! - **[`theme`]** — centralized color palette and the bar gradient
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Controller`] and call [`App::run`] to start the event loop.
//!
//! [`Controller`]: crate::playback::Controller
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
