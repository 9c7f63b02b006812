//! TUI pane rendering modules
//!
//! - [`bars`]: the array, one coloured bar per value
//! - [`controls`]: reset/start buttons, direction, algorithm and speed
//! - [`status`]: status bar with step counter and playback indicator
//!
//! Each pane exports a `render_*` function that takes the controller's
//! read-only [`PlaybackView`](crate::playback::PlaybackView).

pub mod bars;
pub mod controls;
pub mod status;

pub use bars::render_bars_pane;
pub use controls::render_controls_pane;
pub use status::render_status_bar;
