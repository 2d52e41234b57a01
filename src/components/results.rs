use std::rc::Rc;

use crate::api::Track;
use crate::components::{AppContext, Icon};
use dioxus::prelude::*;

/// A track handed to a view. Equality is identity so a row rendered for an
/// older query never stands in for a track of the current one.
#[derive(Clone)]
pub struct TrackRef(pub Rc<Track>);

impl PartialEq for TrackRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[component]
pub fn ResultList() -> Element {
    let ctx = use_context::<AppContext>();
    let tracks: Vec<Rc<Track>> = ctx.controller.read().results().tracks().to_vec();

    rsx! {
        ul { id: "results", class: "no-select",
            for (index, track) in tracks.into_iter().enumerate() {
                ResultRow { key: "{index}", track: TrackRef(track) }
            }
        }
    }
}

#[component]
fn ResultRow(track: TrackRef) -> Element {
    let ctx = use_context::<AppContext>();
    let TrackRef(track) = track;
    let playing = ctx.controller.read().is_marked(&track);
    let selected = ctx
        .selected
        .read()
        .as_ref()
        .is_some_and(|current| Rc::ptr_eq(current, &track));

    let on_select = {
        let ctx = ctx.clone();
        let track = Rc::clone(&track);
        move |_| ctx.select(Rc::clone(&track))
    };
    let on_play = {
        let ctx = ctx.clone();
        let track = Rc::clone(&track);
        move |_| ctx.play(Rc::clone(&track))
    };

    rsx! {
        li {
            class: if selected { "selected" } else { "" },
            onclick: on_select,
            ondoubleclick: on_play,
            span { class: "playing", hidden: !playing,
                Icon { name: "speaker".to_string(), class: "icon".to_string() }
            }
            span { class: "title", "{track.title}" }
            span { class: "artist", "{track.artist}" }
            span { class: "album", "{track.album}" }
        }
    }
}
