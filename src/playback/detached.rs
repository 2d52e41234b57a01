//! Inert stand-ins for builds without a browser: nothing ever loads, so the
//! widget stays disabled and no events fire.

use futures_util::FutureExt;

use super::media::{BufferedRange, MediaEvent, MediaHandle, PlayStart};
use super::session::{MediaSession, NowPlaying};
use crate::error::PlaybackError;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PageMedia;

impl PageMedia {
    pub fn attach() -> Option<Self> {
        Some(Self)
    }

    pub fn adopt_into(&self, _container_id: &str) {}
}

impl MediaHandle for PageMedia {
    fn current_time(&self) -> Option<f64> {
        None
    }

    fn duration(&self) -> Option<f64> {
        None
    }

    fn paused(&self) -> bool {
        true
    }

    fn buffered(&self) -> Vec<BufferedRange> {
        Vec::new()
    }

    fn load(&self, location: &str) {
        tracing::debug!("no media element; ignoring load of {location}");
    }

    fn play(&self) -> PlayStart {
        futures_util::future::ready(Err(PlaybackError::Unavailable)).boxed_local()
    }

    fn pause(&self) {}
}

pub fn bind_media_events<F>(_media: &PageMedia, _on_event: F)
where
    F: FnMut(MediaEvent) + 'static,
{
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PageSession;

impl MediaSession for PageSession {
    fn is_available(&self) -> bool {
        false
    }

    fn publish(&self, _now_playing: &NowPlaying) -> Result<(), PlaybackError> {
        Err(PlaybackError::Unavailable)
    }
}
