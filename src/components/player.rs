use crate::components::{AppContext, Icon};
use crate::playback::{PlayerMode, TimeDisplay, WidgetView, WidgetVisualState};
use dioxus::prelude::*;

pub const PLAYER_CONTAINER_ID: &str = "player";

/// The widget renders into a signal; the transport component below reads it.
impl WidgetView for Signal<WidgetVisualState> {
    fn show_mode(&mut self, mode: PlayerMode) {
        if self.peek().mode != mode {
            self.write().mode = mode;
        }
    }

    fn show_times(&mut self, times: TimeDisplay) {
        if self.peek().times != times {
            self.write().times = times;
        }
    }
}

#[component]
pub fn Transport() -> Element {
    let ctx = use_context::<AppContext>();
    let state = ctx.widget_state.read().clone();
    let controls = state.mode.controls();
    let times = state.times;

    let on_play = {
        let ctx = ctx.clone();
        move |_| ctx.press_play()
    };
    let on_pause = move |_| ctx.press_pause();

    rsx! {
        div { id: PLAYER_CONTAINER_ID,
            button {
                class: "play",
                r#type: "button",
                hidden: !controls.play,
                onclick: on_play,
                Icon { name: "play".to_string(), class: "icon".to_string() }
            }
            button {
                class: "pause",
                r#type: "button",
                hidden: !controls.pause,
                onclick: on_pause,
                Icon { name: "pause".to_string(), class: "icon".to_string() }
            }
            span { class: "disabled", hidden: !controls.disabled,
                Icon { name: "disabled".to_string(), class: "icon".to_string() }
            }
            span { class: "times", hidden: !controls.times,
                span { class: "currentTime", "{times.current}" }
                " / "
                span { class: "totalTime", "{times.total}" }
            }
            div { class: "slider",
                div { class: "loaded", style: "width: {times.loaded_width}" }
                div { class: "played", style: "width: {times.played_width}" }
            }
        }
    }
}
