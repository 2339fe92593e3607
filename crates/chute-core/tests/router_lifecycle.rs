//! Navigation keeps at most one live poller and releases it on the way out.

mod common;

use chute_core::{ActiveView, Route, Router, StreamState};
use common::{ScriptedDevice, advance_to, context};
use serde_json::json;
use tokio::time::Instant;

fn polls(route: Route) -> bool {
    matches!(route, Route::Photos | Route::Security)
}

#[tokio::test(start_paused = true)]
async fn test_live_pollers_never_exceed_one() {
    let device = ScriptedDevice::new();
    let (ctx, scheduler) = context(device);
    let mut router = Router::new(ctx);

    let sequence = [
        "/security",
        "/photos",
        "/security",
        "/security",
        "/",
        "/photos",
        "/live-stream",
        "/nowhere",
        "/security",
        "/photos",
    ];

    for path in sequence {
        let route = router.navigate(path).unwrap().route();
        assert_eq!(route, Route::from_path(path));
        assert!(scheduler.live_count() <= 1);
        assert_eq!(scheduler.live_count(), usize::from(polls(route)));
    }

    router.shutdown();
    assert_eq!(scheduler.live_count(), 0);
    assert!(router.current().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_rapid_toggling_does_not_leak() {
    let device = ScriptedDevice::new();
    let (ctx, scheduler) = context(device);
    let mut router = Router::new(ctx);

    for _ in 0..100 {
        router.navigate("/security").unwrap();
        router.navigate("/photos").unwrap();
        assert_eq!(scheduler.live_count(), 1);
    }

    router.navigate("/").unwrap();
    assert_eq!(scheduler.live_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_same_route_keeps_view_instance() {
    let device = ScriptedDevice::new();
    let (ctx, _) = context(device);
    let mut router = Router::new(ctx);

    let first = match router.navigate("/security").unwrap() {
        ActiveView::Security(view) => view.binding().poller_id(),
        _ => panic!("expected security view"),
    };
    let second = match router.navigate("/security").unwrap() {
        ActiveView::Security(view) => view.binding().poller_id(),
        _ => panic!("expected security view"),
    };

    assert!(first.is_some());
    assert_eq!(first, second);
}

#[tokio::test(start_paused = true)]
async fn test_leaving_view_discards_its_in_flight_fetch() {
    let device = ScriptedDevice::new();
    device.reply(
        "/status/latest.json",
        400,
        json!({"path": "/late.jpg", "ts": 77}),
    );
    let (ctx, _) = context(device.clone());
    let mut router = Router::new(ctx);
    let origin = Instant::now();

    let mut rx = match router.navigate("/security").unwrap() {
        ActiveView::Security(view) => view.subscribe(),
        _ => panic!("expected security view"),
    };

    // tick at 1000 is in flight until 1400
    advance_to(origin, 1100).await;
    router.navigate("/").unwrap();

    advance_to(origin, 2000).await;
    assert!(!rx.has_changed().unwrap_or(false));
    assert_eq!(rx.borrow().image_source, "/status/latest.jpg");
    assert!(rx.changed().await.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_is_active_tracks_current_route() {
    let device = ScriptedDevice::new();
    let (ctx, _) = context(device);
    let mut router = Router::new(ctx);

    assert!(!router.is_active("/"));

    router.navigate("/photos").unwrap();
    assert!(router.is_active("/photos"));
    assert!(!router.is_active("/security"));

    router.navigate("/unknown").unwrap();
    assert!(router.is_active("/"));
}

#[tokio::test(start_paused = true)]
async fn test_live_stream_starts_once_per_instance() {
    let device = ScriptedDevice::new();
    let (ctx, _) = context(device);
    let mut router = Router::new(ctx);

    if let ActiveView::LiveStream(view) = router.navigate("/live-stream").unwrap() {
        assert_eq!(view.state(), &StreamState::NotStarted);
        assert!(view.start_stream());
        assert!(!view.start_stream());
        assert_eq!(view.stream_url(), "http://admin@localhost:81/video.cgi");
    } else {
        panic!("expected live stream view");
    }

    router.navigate("/").unwrap();
    if let ActiveView::LiveStream(view) = router.navigate("/live-stream").unwrap() {
        assert_eq!(view.state(), &StreamState::NotStarted);
    } else {
        panic!("expected live stream view");
    }
}
