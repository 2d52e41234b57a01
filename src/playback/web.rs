//! Browser bindings: the page `<audio>` element and `navigator.mediaSession`.

use std::cell::RefCell;
use std::rc::Rc;

use futures_util::FutureExt;
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, HtmlAudioElement};

use super::media::{BufferedRange, MediaEvent, MediaHandle, PlayStart};
use super::session::{MediaSession, NowPlaying};
use crate::error::PlaybackError;

pub const AUDIO_ELEMENT_ID: &str = "beets-audio";

/// The page's single audio element.
#[derive(Clone, PartialEq)]
pub struct PageMedia {
    audio: HtmlAudioElement,
}

impl PageMedia {
    /// Find the page's audio element, creating it on first use.
    pub fn attach() -> Option<Self> {
        let document = window()?.document()?;

        if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
            let audio = existing.dyn_into::<HtmlAudioElement>().ok()?;
            return Some(Self { audio });
        }

        let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
        audio.set_id(AUDIO_ELEMENT_ID);
        audio.set_attribute("preload", "metadata").ok()?;
        document.body()?.append_child(&audio).ok()?;

        Some(Self { audio })
    }

    /// Move the element under the widget container once it is in the DOM.
    pub fn adopt_into(&self, container_id: &str) {
        let Some(container) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(container_id))
        else {
            return;
        };
        if let Err(err) = container.append_child(&self.audio) {
            tracing::debug!("could not move audio element: {}", describe_js_error(&err));
        }
    }
}

fn describe_js_error(value: &JsValue) -> String {
    Reflect::get(value, &"name".into())
        .ok()
        .and_then(|name| name.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "unknown error".to_string())
}

impl MediaHandle for PageMedia {
    fn current_time(&self) -> Option<f64> {
        Some(self.audio.current_time())
    }

    fn duration(&self) -> Option<f64> {
        Some(self.audio.duration())
    }

    fn paused(&self) -> bool {
        self.audio.paused()
    }

    fn buffered(&self) -> Vec<BufferedRange> {
        let ranges = self.audio.buffered();
        (0..ranges.length())
            .filter_map(|i| {
                let start = ranges.start(i).ok()?;
                let end = ranges.end(i).ok()?;
                Some(BufferedRange { start, end })
            })
            .collect()
    }

    fn load(&self, location: &str) {
        self.audio.set_src(location);
    }

    fn play(&self) -> PlayStart {
        match self.audio.play() {
            Ok(promise) => async move {
                wasm_bindgen_futures::JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(|err| PlaybackError::Rejected(describe_js_error(&err)))
            }
            .boxed_local(),
            Err(err) => {
                futures_util::future::ready(Err(PlaybackError::Rejected(describe_js_error(&err))))
                    .boxed_local()
            }
        }
    }

    fn pause(&self) {
        if let Err(err) = self.audio.pause() {
            tracing::debug!("pause failed: {}", describe_js_error(&err));
        }
    }
}

/// Forward every [`MediaEvent`] the element fires to `on_event`.
/// Listeners live as long as the page.
pub fn bind_media_events<F>(media: &PageMedia, on_event: F)
where
    F: FnMut(MediaEvent) + 'static,
{
    let handler = Rc::new(RefCell::new(on_event));
    for event in MediaEvent::ALL {
        let handler = Rc::clone(&handler);
        let callback = Closure::wrap(Box::new(move || {
            match handler.try_borrow_mut() {
                Ok(mut handler) => (*handler)(event),
                Err(_) => {
                    tracing::debug!("{} dropped: handler already running", event.dom_name())
                }
            }
        }) as Box<dyn FnMut()>);
        if let Err(err) = media
            .audio
            .add_event_listener_with_callback(event.dom_name(), callback.as_ref().unchecked_ref())
        {
            tracing::warn!(
                "could not listen for {}: {}",
                event.dom_name(),
                describe_js_error(&err)
            );
        }
        callback.forget();
    }
}

/// `navigator.mediaSession`, when the browser has one.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PageSession;

impl PageSession {
    fn navigator() -> Option<JsValue> {
        window().map(|w| JsValue::from(w.navigator()))
    }
}

fn set_field(target: &Object, key: &str, value: &JsValue) -> Result<(), PlaybackError> {
    Reflect::set(target, &key.into(), value)
        .map(|_| ())
        .map_err(|err| PlaybackError::Session(describe_js_error(&err)))
}

impl MediaSession for PageSession {
    fn is_available(&self) -> bool {
        Self::navigator()
            .and_then(|navigator| Reflect::has(&navigator, &"mediaSession".into()).ok())
            .unwrap_or(false)
    }

    fn publish(&self, now_playing: &NowPlaying) -> Result<(), PlaybackError> {
        let window = window().ok_or(PlaybackError::Unavailable)?;
        let navigator = JsValue::from(window.navigator());
        let session = Reflect::get(&navigator, &"mediaSession".into())
            .map_err(|err| PlaybackError::Session(describe_js_error(&err)))?;
        if session.is_undefined() || session.is_null() {
            return Err(PlaybackError::Unavailable);
        }

        let constructor = Reflect::get(&window, &"MediaMetadata".into())
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
            .ok_or_else(|| PlaybackError::Session("MediaMetadata is missing".to_string()))?;

        let artwork = Array::new();
        for art in &now_playing.artwork {
            let entry = Object::new();
            set_field(&entry, "src", &art.src.as_str().into())?;
            set_field(&entry, "sizes", &art.sizes.as_str().into())?;
            artwork.push(&entry);
        }

        let init = Object::new();
        set_field(&init, "title", &now_playing.title.as_str().into())?;
        set_field(&init, "artist", &now_playing.artist.as_str().into())?;
        set_field(&init, "album", &now_playing.album.as_str().into())?;
        set_field(&init, "artwork", &artwork)?;

        let metadata = Reflect::construct(&constructor, &Array::of1(&init))
            .map_err(|err| PlaybackError::Session(describe_js_error(&err)))?;
        Reflect::set(&session, &"metadata".into(), &metadata)
            .map(|_| ())
            .map_err(|err| PlaybackError::Session(describe_js_error(&err)))
    }
}
