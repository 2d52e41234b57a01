//! In-memory stand-ins for the browser pieces, used by the unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use futures_util::future::{self, FutureExt};

use super::media::{BufferedRange, MediaHandle, PlayStart};
use super::session::{MediaSession, NowPlaying};
use super::widget::{PlayerMode, TimeDisplay, WidgetView};
use crate::error::PlaybackError;

struct FakeState {
    current_time: Option<f64>,
    duration: Option<f64>,
    paused: bool,
    buffered: Vec<BufferedRange>,
    loads: Vec<String>,
    play_calls: usize,
    pause_calls: usize,
    rejection: Option<String>,
}

impl Default for FakeState {
    fn default() -> Self {
        Self {
            current_time: None,
            duration: None,
            paused: true,
            buffered: Vec::new(),
            loads: Vec::new(),
            play_calls: 0,
            pause_calls: 0,
            rejection: None,
        }
    }
}

/// Shared media element double: every clone sees the same state.
#[derive(Clone, Default)]
pub struct FakeMedia {
    state: Rc<RefCell<FakeState>>,
}

impl FakeMedia {
    pub fn set_current_time(&self, value: Option<f64>) {
        self.state.borrow_mut().current_time = value;
    }

    pub fn set_duration(&self, value: Option<f64>) {
        self.state.borrow_mut().duration = value;
    }

    pub fn set_paused(&self, value: bool) {
        self.state.borrow_mut().paused = value;
    }

    pub fn set_buffered(&self, ranges: Vec<BufferedRange>) {
        self.state.borrow_mut().buffered = ranges;
    }

    /// Make every following `play()` fail with `reason`.
    pub fn reject_play(&self, reason: &str) {
        self.state.borrow_mut().rejection = Some(reason.to_string());
    }

    pub fn loads(&self) -> Vec<String> {
        self.state.borrow().loads.clone()
    }

    pub fn play_calls(&self) -> usize {
        self.state.borrow().play_calls
    }

    pub fn pause_calls(&self) -> usize {
        self.state.borrow().pause_calls
    }
}

impl MediaHandle for FakeMedia {
    fn current_time(&self) -> Option<f64> {
        self.state.borrow().current_time
    }

    fn duration(&self) -> Option<f64> {
        self.state.borrow().duration
    }

    fn paused(&self) -> bool {
        self.state.borrow().paused
    }

    fn buffered(&self) -> Vec<BufferedRange> {
        self.state.borrow().buffered.clone()
    }

    fn load(&self, location: &str) {
        let mut state = self.state.borrow_mut();
        state.loads.push(location.to_string());
        state.current_time = Some(0.0);
        state.duration = None;
        state.buffered.clear();
    }

    fn play(&self) -> PlayStart {
        let mut state = self.state.borrow_mut();
        state.play_calls += 1;
        let outcome = match state.rejection.clone() {
            Some(reason) => Err(PlaybackError::Rejected(reason)),
            None => {
                state.paused = false;
                Ok(())
            }
        };
        future::ready(outcome).boxed_local()
    }

    fn pause(&self) {
        let mut state = self.state.borrow_mut();
        state.pause_calls += 1;
        state.paused = true;
    }
}

/// Widget view that keeps every render it receives.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub modes: Vec<PlayerMode>,
    pub times: Vec<TimeDisplay>,
}

impl WidgetView for RecordingView {
    fn show_mode(&mut self, mode: PlayerMode) {
        self.modes.push(mode);
    }

    fn show_times(&mut self, times: TimeDisplay) {
        self.times.push(times);
    }
}

pub struct FakeSession {
    available: bool,
    failing: bool,
    published: RefCell<Vec<NowPlaying>>,
}

impl Default for FakeSession {
    fn default() -> Self {
        Self {
            available: true,
            failing: false,
            published: RefCell::new(Vec::new()),
        }
    }
}

impl FakeSession {
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn published(&self) -> Vec<NowPlaying> {
        self.published.borrow().clone()
    }
}

impl MediaSession for FakeSession {
    fn is_available(&self) -> bool {
        self.available
    }

    fn publish(&self, now_playing: &NowPlaying) -> Result<(), PlaybackError> {
        if self.failing {
            return Err(PlaybackError::Session("MediaMetadata is not a constructor".into()));
        }
        self.published.borrow_mut().push(now_playing.clone());
        Ok(())
    }
}
