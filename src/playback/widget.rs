//! Transport widget state, re-derived from the media element on every event.

use super::media::{MediaHandle, MediaObserver, PlayStart};
use super::progress::{buffered_end, percent};
use super::time_format::format_time;

/// Which of the three mutually exclusive widget looks is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerMode {
    /// Nothing loaded yet, or the duration is still unknown.
    #[default]
    Disabled,
    Paused,
    Playing,
}

/// Visibility of the widget's tagged elements for a given mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlVisibility {
    pub play: bool,
    pub pause: bool,
    pub disabled: bool,
    pub times: bool,
}

impl PlayerMode {
    pub fn derive(duration: Option<f64>, paused: bool) -> Self {
        match duration {
            Some(d) if !d.is_nan() => {
                if paused {
                    PlayerMode::Paused
                } else {
                    PlayerMode::Playing
                }
            }
            _ => PlayerMode::Disabled,
        }
    }

    pub fn controls(self) -> ControlVisibility {
        match self {
            PlayerMode::Disabled => ControlVisibility {
                play: false,
                pause: false,
                disabled: true,
                times: false,
            },
            PlayerMode::Paused => ControlVisibility {
                play: true,
                pause: false,
                disabled: false,
                times: true,
            },
            PlayerMode::Playing => ControlVisibility {
                play: false,
                pause: true,
                disabled: false,
                times: true,
            },
        }
    }
}

/// Time labels and bar widths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeDisplay {
    pub current: String,
    pub total: String,
    pub played_width: String,
    pub loaded_width: String,
}

impl Default for TimeDisplay {
    fn default() -> Self {
        Self {
            current: format_time(None),
            total: format_time(None),
            played_width: percent(None, None),
            loaded_width: percent(None, None),
        }
    }
}

impl TimeDisplay {
    pub fn derive<M: MediaHandle>(media: &M) -> Self {
        let current = media.current_time();
        let duration = media.duration();
        let loaded = buffered_end(&media.buffered());
        Self {
            current: format_time(current),
            total: format_time(duration),
            played_width: percent(current, duration),
            loaded_width: percent(Some(loaded), duration),
        }
    }
}

/// Everything the widget shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WidgetVisualState {
    pub mode: PlayerMode,
    pub times: TimeDisplay,
}

impl WidgetVisualState {
    pub fn derive<M: MediaHandle>(media: &M) -> Self {
        Self {
            mode: PlayerMode::derive(media.duration(), media.paused()),
            times: TimeDisplay::derive(media),
        }
    }
}

/// Render target for the widget.
pub trait WidgetView {
    fn show_mode(&mut self, mode: PlayerMode);
    fn show_times(&mut self, times: TimeDisplay);
}

pub struct PlayerWidget<M: MediaHandle, V: WidgetView> {
    media: M,
    view: V,
}

impl<M: MediaHandle, V: WidgetView> PlayerWidget<M, V> {
    /// Bind to `media` and render straight away, so an element that already
    /// has a source shows correctly before its first event.
    pub fn new(media: M, mut view: V) -> Self {
        let initial = WidgetVisualState::derive(&media);
        view.show_mode(initial.mode);
        view.show_times(initial.times);
        Self { media, view }
    }

    #[cfg(test)]
    pub fn visual_state(&self) -> WidgetVisualState {
        WidgetVisualState::derive(&self.media)
    }

    #[cfg(test)]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn press_play(&self) -> PlayStart {
        self.media.play()
    }

    pub fn press_pause(&self) {
        self.media.pause();
    }

    fn show_state(&mut self) {
        let mode = PlayerMode::derive(self.media.duration(), self.media.paused());
        self.view.show_mode(mode);
    }

    fn show_times(&mut self) {
        let times = TimeDisplay::derive(&self.media);
        self.view.show_times(times);
    }
}

impl<M: MediaHandle, V: WidgetView> MediaObserver for PlayerWidget<M, V> {
    fn on_playing(&mut self) {
        tracing::debug!("playing");
        self.show_state();
    }

    fn on_pause(&mut self) {
        tracing::debug!("pause");
        self.show_state();
    }

    fn on_ended(&mut self) {
        tracing::debug!("ended");
        self.show_state();
    }

    fn on_duration_change(&mut self) {
        tracing::debug!("durationchange {:?}", self.media.duration());
        self.show_state();
        self.show_times();
    }

    fn on_time_update(&mut self) {
        tracing::debug!("timeupdate {:?}", self.media.current_time());
        self.show_times();
    }

    fn on_progress(&mut self) {
        tracing::debug!("progress {:?}", self.media.buffered());
        self.show_times();
    }
}
