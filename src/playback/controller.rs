//! Result-set playback: which track is playing, and what comes next.

use std::rc::Rc;

use super::media::{MediaHandle, MediaObserver, PlayStart};
use super::session::{MediaSession, NowPlaying};
use crate::api::Track;
use crate::error::PlaybackError;

/// Tracks returned by one query, in list order.
///
/// Membership is by identity: a track fetched by an earlier query is not part
/// of a later set even when it describes the same item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    tracks: Vec<Rc<Track>>,
}

impl ResultSet {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks: tracks.into_iter().map(Rc::new).collect(),
        }
    }

    pub fn tracks(&self) -> &[Rc<Track>] {
        &self.tracks
    }

    pub fn get(&self, index: usize) -> Option<&Rc<Track>> {
        self.tracks.get(index)
    }

    pub fn position(&self, track: &Rc<Track>) -> Option<usize> {
        self.tracks.iter().position(|t| Rc::ptr_eq(t, track))
    }
}

/// A play request whose outcome has not been confirmed yet.
pub struct PendingStart {
    track: Rc<Track>,
    start: PlayStart,
}

impl PendingStart {
    pub fn track(&self) -> &Rc<Track> {
        &self.track
    }

    /// Wait for the element to confirm the start, then publish now-playing
    /// metadata. The metadata step is best effort and never fails the start.
    pub async fn settle<S: MediaSession + ?Sized>(self, session: &S) -> Result<(), PlaybackError> {
        self.start.await?;

        if !session.is_available() {
            return Ok(());
        }
        if let Err(err) = session.publish(&NowPlaying::for_track(&self.track)) {
            tracing::debug!("now-playing update skipped: {err}");
        }
        Ok(())
    }
}

pub struct PlaybackController<M: MediaHandle> {
    media: M,
    results: ResultSet,
    now_playing: Option<Rc<Track>>,
    marked: Option<Rc<Track>>,
    pending: Option<PendingStart>,
}

impl<M: MediaHandle> PlaybackController<M> {
    pub fn new(media: M) -> Self {
        Self {
            media,
            results: ResultSet::default(),
            now_playing: None,
            marked: None,
            pending: None,
        }
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn now_playing(&self) -> Option<&Rc<Track>> {
        self.now_playing.as_ref()
    }

    /// Whether `track`'s row should show the playing marker.
    pub fn is_marked(&self, track: &Rc<Track>) -> bool {
        self.marked
            .as_ref()
            .is_some_and(|marked| Rc::ptr_eq(marked, track))
    }

    /// Swap in a new result set. The marker never carries over.
    pub fn set_results(&mut self, results: ResultSet) {
        self.marked = None;
        self.results = results;
    }

    /// Load `track` and start it. The start confirmation is parked until
    /// [`take_pending_start`](Self::take_pending_start) collects it; a newer
    /// request replaces an uncollected one.
    pub fn play_track(&mut self, track: Rc<Track>) {
        let location = track.playback_location();
        tracing::info!("starting {} ({location})", track.title);

        self.media.load(&location);
        let start = self.media.play();

        self.marked = Some(Rc::clone(&track));
        self.now_playing = Some(Rc::clone(&track));
        self.pending = Some(PendingStart { track, start });
    }

    pub fn take_pending_start(&mut self) -> Option<PendingStart> {
        self.pending.take()
    }

    /// The browser refused to start `track`; stop claiming it plays.
    pub fn start_rejected(&mut self, track: &Rc<Track>) {
        let is_current = self
            .now_playing
            .as_ref()
            .is_some_and(|current| Rc::ptr_eq(current, track));
        if is_current {
            self.marked = None;
        }
    }
}

impl<M: MediaHandle> MediaObserver for PlaybackController<M> {
    fn on_playing(&mut self) {
        if let Some(track) = &self.now_playing {
            self.marked = Some(Rc::clone(track));
        }
    }

    fn on_pause(&mut self) {
        if self.now_playing.is_some() {
            self.marked = None;
        }
    }

    fn on_ended(&mut self) {
        self.marked = None;
        let Some(finished) = self.now_playing.take() else {
            return;
        };

        let Some(index) = self.results.position(&finished) else {
            tracing::debug!("finished track is no longer listed; not advancing");
            return;
        };
        match self.results.get(index + 1).cloned() {
            Some(next) => self.play_track(next),
            None => tracing::debug!("end of results reached"),
        }
    }
}
