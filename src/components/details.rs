use std::rc::Rc;

use crate::components::{AppContext, Icon, TrackRef};
use crate::playback::format_time;
use dioxus::prelude::*;

/// Detail panels for the selected row.
#[component]
pub fn TrackDetail() -> Element {
    let ctx = use_context::<AppContext>();
    let Some(track) = ctx.selected.read().clone() else {
        return rsx! {
            div { id: "main-detail" }
        };
    };

    rsx! {
        div { id: "main-detail",
            MainDetail { track: TrackRef(Rc::clone(&track)) }
        }
        div { id: "extra-detail",
            ExtraDetail { track: TrackRef(track) }
        }
    }
}

#[component]
fn MainDetail(track: TrackRef) -> Element {
    let ctx = use_context::<AppContext>();
    let TrackRef(track) = track;

    let on_play = {
        let track = Rc::clone(&track);
        move |_| ctx.play(Rc::clone(&track))
    };

    rsx! {
        h2 { class: "title", "{track.title}" }
        p { class: "artist", "{track.artist}" }
        p { class: "album", "{track.album}" }
        button { class: "play", r#type: "button", onclick: on_play,
            Icon { name: "play".to_string(), class: "icon".to_string() }
            "Play"
        }
    }
}

#[component]
fn ExtraDetail(track: TrackRef) -> Element {
    let TrackRef(track) = track;
    let position = track.track_position();
    let format = track.format.clone().filter(|f| !f.is_empty()).map(|format| {
        match track.bitrate {
            Some(bitrate) if bitrate > 0 => format!("{format}, {}kbps", bitrate / 1000),
            _ => format,
        }
    });
    let length = track.length.map(|secs| format_time(Some(secs)));
    let release = match (track.year.filter(|y| *y > 0), track.genre.as_deref()) {
        (Some(year), Some(genre)) if !genre.is_empty() => Some(format!("{year} · {genre}")),
        (Some(year), _) => Some(year.to_string()),
        (None, Some(genre)) if !genre.is_empty() => Some(genre.to_string()),
        _ => None,
    };
    let musicbrainz = track.musicbrainz_url();
    let lyrics = track.lyrics.clone().filter(|l| !l.trim().is_empty());
    let comments = track.comments.clone().filter(|c| !c.trim().is_empty());

    rsx! {
        dl {
            if let Some(position) = position {
                dt { "Track" }
                dd { "{position}" }
            }
            if let Some(length) = length {
                dt { "Length" }
                dd { "{length}" }
            }
            if let Some(format) = format {
                dt { "Format" }
                dd { "{format}" }
            }
            if let Some(release) = release {
                dt { "Released" }
                dd { "{release}" }
            }
            if let Some(url) = musicbrainz {
                dt { "MusicBrainz" }
                dd {
                    a { href: "{url}", target: "_blank", rel: "noopener", "View recording" }
                }
            }
        }
        if let Some(lyrics) = lyrics {
            h3 { "Lyrics" }
            pre { class: "lyrics", "{lyrics}" }
        }
        if let Some(comments) = comments {
            h3 { "Comments" }
            p { class: "comments", "{comments}" }
        }
    }
}
