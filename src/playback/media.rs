//! The page's shared media element, seen through a small trait so the playback
//! logic can run against the browser element or an in-memory stand-in.

use crate::error::PlaybackError;
use futures_util::future::LocalBoxFuture;

/// Resolves once the media element has actually started (or refused to start).
pub type PlayStart = LocalBoxFuture<'static, Result<(), PlaybackError>>;

/// A contiguous span of downloaded media, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BufferedRange {
    pub start: f64,
    pub end: f64,
}

/// Handle to the single playback resource of the page.
///
/// Clones address the same element, so the widget and the controller can each
/// hold one. Positions are `None` when the element reports nothing; `NaN` may
/// still come through and is handled by the formatting helpers.
pub trait MediaHandle: Clone + 'static {
    fn current_time(&self) -> Option<f64>;
    fn duration(&self) -> Option<f64>;
    fn paused(&self) -> bool;
    fn buffered(&self) -> Vec<BufferedRange>;

    /// Point the element at a new source.
    fn load(&self, location: &str);
    /// Ask the element to start; the outcome arrives asynchronously.
    fn play(&self) -> PlayStart;
    fn pause(&self);
}

/// Media events either observer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaEvent {
    Playing,
    Pause,
    Ended,
    DurationChange,
    TimeUpdate,
    Progress,
}

impl MediaEvent {
    pub const ALL: [MediaEvent; 6] = [
        MediaEvent::Playing,
        MediaEvent::Pause,
        MediaEvent::Ended,
        MediaEvent::DurationChange,
        MediaEvent::TimeUpdate,
        MediaEvent::Progress,
    ];

    /// DOM event type name.
    pub fn dom_name(self) -> &'static str {
        match self {
            MediaEvent::Playing => "playing",
            MediaEvent::Pause => "pause",
            MediaEvent::Ended => "ended",
            MediaEvent::DurationChange => "durationchange",
            MediaEvent::TimeUpdate => "timeupdate",
            MediaEvent::Progress => "progress",
        }
    }

    /// Route this event to the matching observer method.
    pub fn dispatch<O: MediaObserver + ?Sized>(self, observer: &mut O) {
        match self {
            MediaEvent::Playing => observer.on_playing(),
            MediaEvent::Pause => observer.on_pause(),
            MediaEvent::Ended => observer.on_ended(),
            MediaEvent::DurationChange => observer.on_duration_change(),
            MediaEvent::TimeUpdate => observer.on_time_update(),
            MediaEvent::Progress => observer.on_progress(),
        }
    }
}

/// Receiver of media events. Implementors override only what they need.
pub trait MediaObserver {
    fn on_playing(&mut self) {}
    fn on_pause(&mut self) {}
    fn on_ended(&mut self) {}
    fn on_duration_change(&mut self) {}
    fn on_time_update(&mut self) {}
    fn on_progress(&mut self) {}
}
