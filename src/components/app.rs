use std::rc::Rc;

use dioxus::core::{spawn_forever, Runtime, RuntimeGuard};
use dioxus::prelude::*;

use crate::api::{LibraryClient, QueryGeneration, Track};
use crate::components::{QueryForm, ResultList, TrackDetail, Transport, PLAYER_CONTAINER_ID};
use crate::config::AppConfig;
use crate::playback::{
    bind_media_events, MediaEvent, PageMedia, PageSession, PlaybackController, PlayerWidget,
    ResultSet, WidgetVisualState,
};
use crate::routing;

pub type PageWidget = PlayerWidget<PageMedia, Signal<WidgetVisualState>>;

/// Application state shared with every component through context.
#[derive(Clone)]
pub struct AppContext {
    client: LibraryClient,
    pub controller: Signal<PlaybackController<PageMedia>>,
    pub widget_state: Signal<WidgetVisualState>,
    widget: Signal<Option<PageWidget>>,
    pub selected: Signal<Option<Rc<Track>>>,
    pub query_text: Signal<String>,
    query_generation: Signal<QueryGeneration>,
}

impl AppContext {
    /// Run a catalog query; only the newest query's results are applied.
    pub fn search(&self, query: String) {
        let query = query.trim().to_string();
        if query.is_empty() {
            return;
        }
        routing::remember_query(&query);

        let mut generation = self.query_generation;
        let ticket = generation.write().begin();

        let client = self.client.clone();
        let mut controller = self.controller;
        let mut selected = self.selected;
        spawn_forever(async move {
            match client.query(&query).await {
                Ok(tracks) => {
                    if !generation.peek().is_current(ticket) {
                        tracing::debug!("dropping stale results for {query:?}");
                        return;
                    }
                    tracing::debug!("{} results for {query:?}", tracks.len());
                    controller.write().set_results(ResultSet::new(tracks));
                    selected.set(None);
                }
                Err(err) => tracing::warn!("query {query:?} failed: {err}"),
            }
        });
    }

    pub fn select(&self, track: Rc<Track>) {
        let mut selected = self.selected;
        selected.set(Some(track));
    }

    pub fn play(&self, track: Rc<Track>) {
        let mut controller = self.controller;
        controller.write().play_track(track);
        self.drive_pending_start();
    }

    pub fn press_play(&self) {
        let start = self.widget.read().as_ref().map(|widget| widget.press_play());
        if let Some(start) = start {
            spawn_forever(async move {
                if let Err(err) = start.await {
                    tracing::debug!("resume refused: {err}");
                }
            });
        }
    }

    pub fn press_pause(&self) {
        if let Some(widget) = self.widget.read().as_ref() {
            widget.press_pause();
        }
    }

    fn handle_media_event(&self, event: MediaEvent) {
        let mut widget = self.widget;
        if let Some(widget) = widget.write().as_mut() {
            event.dispatch(widget);
        }

        // The controller only cares about transport changes; skipping the
        // frequent time events keeps the result rows from re-rendering.
        if matches!(
            event,
            MediaEvent::Playing | MediaEvent::Pause | MediaEvent::Ended
        ) {
            let mut controller = self.controller;
            event.dispatch(&mut *controller.write());
            self.drive_pending_start();
        }
    }

    /// Wait for the element to confirm a start, then publish now-playing data.
    fn drive_pending_start(&self) {
        let mut controller = self.controller;
        let Some(pending) = controller.write().take_pending_start() else {
            return;
        };
        spawn_forever(async move {
            let track = Rc::clone(pending.track());
            if let Err(err) = pending.settle(&PageSession).await {
                tracing::warn!("could not start {:?}: {err}", track.title);
                controller.write().start_rejected(&track);
            }
        });
    }
}

#[component]
pub fn AppShell(media: PageMedia) -> Element {
    let config = use_context::<AppConfig>();
    let client = use_hook(|| LibraryClient::new(&config.api_base));
    let controller = use_signal({
        let media = media.clone();
        move || PlaybackController::new(media)
    });
    let widget_state = use_signal(WidgetVisualState::default);
    let widget = use_signal(|| None::<PageWidget>);
    let selected = use_signal(|| None::<Rc<Track>>);
    let query_text = use_signal(|| {
        routing::query_from_hash(&routing::current_hash()).unwrap_or_default()
    });
    let query_generation = use_signal(QueryGeneration::default);

    let ctx = use_context_provider(|| AppContext {
        client,
        controller,
        widget_state,
        widget,
        selected,
        query_text,
        query_generation,
    });

    // One-time setup: bind the widget and route media events to both observers.
    {
        let ctx = ctx.clone();
        use_effect(move || {
            media.adopt_into(PLAYER_CONTAINER_ID);

            let mut widget = ctx.widget;
            widget.set(Some(PlayerWidget::new(media.clone(), ctx.widget_state)));

            let runtime = Runtime::current();
            let events_ctx = ctx.clone();
            bind_media_events(&media, move |event| {
                let _guard = RuntimeGuard::new(runtime.clone());
                events_ctx.handle_media_event(event);
            });

            let hash_runtime = Runtime::current();
            let hash_ctx = ctx.clone();
            routing::on_hash_change(move |hash| {
                let _guard = RuntimeGuard::new(hash_runtime.clone());
                let showing = hash_ctx.query_text.peek().clone();
                if let Some(query) = routing::query_to_restore(&hash, &showing) {
                    let mut query_text = hash_ctx.query_text;
                    query_text.set(query.clone());
                    hash_ctx.search(query);
                }
            });

            let restored = ctx.query_text.peek().clone();
            if !restored.is_empty() {
                ctx.search(restored);
            }
        });
    }

    rsx! {
        div { id: "header", class: "no-select",
            h1 { "beets" }
            QueryForm {}
        }
        div { id: "entities", ResultList {} }
        div { id: "detail", TrackDetail {} }
        Transport {}
    }
}
