//! Query-to-autoplay walk-through with the widget and controller sharing one element.

use std::rc::Rc;

use futures_util::FutureExt;

use super::testing::{FakeMedia, FakeSession, RecordingView};
use super::*;
use crate::api::{query_path, QueryResponse};

const BODY: &str = r#"{"results": [
    {"id": 101, "title": "Come Together", "artist": "The Beatles", "album": "Abbey Road", "album_id": 7},
    {"id": 102, "title": "Something", "artist": "The Beatles", "album": "Abbey Road", "album_id": 7},
    {"id": 103, "title": "Maxwell's Silver Hammer", "artist": "The Beatles", "album": "Abbey Road", "album_id": 7}
]}"#;

/// Deliver one event to both observers, widget first as the page does.
fn fire(
    event: MediaEvent,
    widget: &mut PlayerWidget<FakeMedia, RecordingView>,
    controller: &mut PlaybackController<FakeMedia>,
) {
    event.dispatch(widget);
    event.dispatch(controller);
}

#[test]
fn query_select_play_and_advance() {
    assert_eq!(
        query_path("beatles abbey road").as_deref(),
        Some("item/query/beatles/abbey/road")
    );
    let body: QueryResponse = serde_json::from_str(BODY).unwrap();

    let media = FakeMedia::default();
    let session = FakeSession::default();
    let mut widget = PlayerWidget::new(media.clone(), RecordingView::default());
    let mut controller = PlaybackController::new(media.clone());
    assert_eq!(widget.visual_state().mode, PlayerMode::Disabled);

    controller.set_results(ResultSet::new(body.results));
    let second = Rc::clone(controller.results().get(1).unwrap());
    let third = Rc::clone(controller.results().get(2).unwrap());

    controller.play_track(Rc::clone(&second));
    let started = controller
        .take_pending_start()
        .unwrap()
        .settle(&session)
        .now_or_never()
        .unwrap();
    assert_eq!(started, Ok(()));
    assert_eq!(media.loads(), vec!["item/102/file".to_string()]);
    assert!(controller.is_marked(&second));
    assert_eq!(session.published()[0].title, "Something");

    media.set_duration(Some(182.0));
    fire(MediaEvent::DurationChange, &mut widget, &mut controller);
    fire(MediaEvent::Playing, &mut widget, &mut controller);
    assert_eq!(widget.visual_state().mode, PlayerMode::Playing);
    assert_eq!(widget.view().modes.last(), Some(&PlayerMode::Playing));

    media.set_current_time(Some(91.0));
    fire(MediaEvent::TimeUpdate, &mut widget, &mut controller);
    assert_eq!(widget.view().times.last().unwrap().played_width, "50%");

    // Natural end of track.
    media.set_paused(true);
    fire(MediaEvent::Ended, &mut widget, &mut controller);

    assert_eq!(
        media.loads(),
        vec!["item/102/file".to_string(), "item/103/file".to_string()]
    );
    assert!(Rc::ptr_eq(controller.now_playing().unwrap(), &third));
    assert!(controller.is_marked(&third));
    assert!(!controller.is_marked(&second));

    let advanced = controller
        .take_pending_start()
        .unwrap()
        .settle(&session)
        .now_or_never()
        .unwrap();
    assert_eq!(advanced, Ok(()));
    assert_eq!(session.published().len(), 2);

    // The new source has no duration yet.
    fire(MediaEvent::DurationChange, &mut widget, &mut controller);
    assert_eq!(widget.view().modes.last(), Some(&PlayerMode::Disabled));
}

#[test]
fn pausing_from_the_widget_clears_the_row_marker() {
    let media = FakeMedia::default();
    let mut widget = PlayerWidget::new(media.clone(), RecordingView::default());
    let mut controller = PlaybackController::new(media.clone());
    let body: QueryResponse = serde_json::from_str(BODY).unwrap();
    controller.set_results(ResultSet::new(body.results));
    let first = Rc::clone(controller.results().get(0).unwrap());

    controller.play_track(Rc::clone(&first));
    media.set_duration(Some(259.0));
    fire(MediaEvent::Playing, &mut widget, &mut controller);

    widget.press_pause();
    fire(MediaEvent::Pause, &mut widget, &mut controller);
    assert_eq!(widget.view().modes.last(), Some(&PlayerMode::Paused));
    assert!(!controller.is_marked(&first));

    let _ = widget.press_play();
    fire(MediaEvent::Playing, &mut widget, &mut controller);
    assert_eq!(widget.view().modes.last(), Some(&PlayerMode::Playing));
    assert!(controller.is_marked(&first));
}
