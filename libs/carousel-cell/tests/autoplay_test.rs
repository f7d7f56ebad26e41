use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use assert_matches::assert_matches;
use tokio::time::sleep;

use carousel_cell::*;

fn spawn_carousel() -> (CarouselHandle, Arc<AtomicUsize>) {
    let bookings = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&bookings);
    let handle = CarouselHandle::spawn(
        CarouselController::new(),
        CarouselTimings::default(),
        Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
    );
    (handle, bookings)
}

#[tokio::test(start_paused = true)]
async fn test_autoplay_advances_every_interval() {
    let (carousel, _) = spawn_carousel();

    sleep(Duration::from_millis(3999)).await;
    assert_eq!(carousel.state().current_index, 0);

    sleep(Duration::from_millis(2)).await;
    assert_eq!(carousel.state().current_index, 1);

    sleep(Duration::from_millis(4000)).await;
    assert_eq!(carousel.state().current_index, 2);

    sleep(Duration::from_millis(4000)).await;
    assert_eq!(carousel.state().current_index, 0);
}

#[tokio::test(start_paused = true)]
async fn test_manual_next_does_not_reset_autoplay_tick() {
    let (carousel, _) = spawn_carousel();

    sleep(Duration::from_millis(1000)).await;
    assert_eq!(carousel.next().await.unwrap().current_index, 1);

    sleep(Duration::from_millis(3001)).await;
    let state = carousel.state();
    assert_eq!(state.current_index, 2);
    assert!(state.autoplay_enabled);
}

#[tokio::test(start_paused = true)]
async fn test_jump_suspends_autoplay_for_cooldown() {
    let (carousel, _) = spawn_carousel();

    let state = carousel.jump_to(2).await.unwrap();
    assert!(!state.autoplay_enabled);

    // Well past the 4s tick: still suspended and parked on the chosen slide.
    sleep(Duration::from_millis(4999)).await;
    assert_eq!(carousel.state(), CarouselState { current_index: 2, autoplay_enabled: false });

    sleep(Duration::from_millis(2)).await;
    assert_eq!(carousel.state(), CarouselState { current_index: 2, autoplay_enabled: true });

    // First tick after resuming lands one full interval later.
    sleep(Duration::from_millis(3998)).await;
    assert_eq!(carousel.state().current_index, 2);
    sleep(Duration::from_millis(2)).await;
    assert_eq!(carousel.state().current_index, 0);
}

#[tokio::test(start_paused = true)]
async fn test_repeated_jumps_restart_cooldown() {
    let (carousel, _) = spawn_carousel();

    carousel.jump_to(1).await.unwrap();
    sleep(Duration::from_millis(3000)).await;
    carousel.jump_to(2).await.unwrap();

    // The first jump's cooldown would have ended at 5s.
    sleep(Duration::from_millis(3000)).await;
    assert!(!carousel.state().autoplay_enabled);

    sleep(Duration::from_millis(2001)).await;
    assert_eq!(carousel.state(), CarouselState { current_index: 2, autoplay_enabled: true });
}

#[tokio::test(start_paused = true)]
async fn test_body_click_invokes_booking_callback() {
    let (carousel, bookings) = spawn_carousel();

    assert_matches!(carousel.click(ClickTarget::Body).await, Ok(ClickOutcome::BookingRequested));
    assert_eq!(bookings.load(Ordering::SeqCst), 1);

    carousel.click(ClickTarget::NextControl).await.unwrap();
    carousel.click(ClickTarget::PreviousControl).await.unwrap();
    carousel.click(ClickTarget::Indicator(1)).await.unwrap();
    assert_eq!(bookings.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_indicator_click_suspends_autoplay() {
    let (carousel, _) = spawn_carousel();

    carousel.click(ClickTarget::Indicator(1)).await.unwrap();
    sleep(Duration::from_millis(4500)).await;
    assert_eq!(carousel.state(), CarouselState { current_index: 1, autoplay_enabled: false });
}

#[tokio::test(start_paused = true)]
async fn test_invalid_jump_leaves_autoplay_running() {
    let (carousel, _) = spawn_carousel();

    assert_matches!(carousel.jump_to(5).await, Err(CarouselError::IndexOutOfRange { .. }));
    sleep(Duration::from_millis(4001)).await;
    assert_eq!(carousel.state(), CarouselState { current_index: 1, autoplay_enabled: true });
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_stops_driver() {
    let (carousel, _) = spawn_carousel();
    let mut updates = carousel.subscribe();

    carousel.jump_to(1).await.unwrap();
    carousel.shutdown().await;

    sleep(Duration::from_millis(10_000)).await;
    assert_eq!(updates.borrow_and_update().current_index, 1);
    assert!(updates.changed().await.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_zero_timings_fall_back_to_defaults() {
    let carousel = CarouselHandle::spawn(
        CarouselController::new(),
        CarouselTimings { autoplay_interval: Duration::ZERO, resume_delay: Duration::ZERO },
        Arc::new(|| {}),
    );
    let mut updates = carousel.subscribe();
    updates.borrow_and_update();

    sleep(Duration::from_millis(50)).await;
    assert!(!updates.has_changed().unwrap());
    assert_eq!(carousel.state().current_index, 0);

    sleep(Duration::from_millis(3951)).await;
    assert_eq!(carousel.state().current_index, 1);

    carousel.jump_to(0).await.unwrap();
    sleep(Duration::from_millis(50)).await;
    assert!(!carousel.state().autoplay_enabled);
}
