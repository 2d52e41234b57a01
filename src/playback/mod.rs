//! Playback core: keeps the transport widget and the result list in step with
//! the page's media element.

mod controller;
mod media;
mod progress;
mod session;
mod time_format;
mod widget;

#[cfg(not(target_arch = "wasm32"))]
mod detached;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(test)]
mod testing;
#[cfg(test)]
mod tests;

pub use controller::{PlaybackController, ResultSet};
pub use media::MediaEvent;
pub use time_format::format_time;
pub use widget::{PlayerMode, PlayerWidget, TimeDisplay, WidgetView, WidgetVisualState};

#[cfg(not(target_arch = "wasm32"))]
pub use detached::{bind_media_events, PageMedia, PageSession};
#[cfg(target_arch = "wasm32")]
pub use web::{bind_media_events, PageMedia, PageSession};
