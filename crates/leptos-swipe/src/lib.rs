//! Leptos Swipe Utilities
//!
//! Simple horizontal swipe detection for Leptos using touch events.
//! Uses a movement threshold to distinguish a swipe from a tap or a scroll.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Direction the finger travelled
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved towards the left edge
    Left,
    /// Finger moved towards the right edge
    Right,
}

/// Horizontal distance in pixels a touch must travel to count as a swipe
pub const SWIPE_THRESHOLD_PX: i32 = 100;

/// Swipe state signals
#[derive(Clone, Copy)]
pub struct SwipeSignals {
    /// Touch start position (None = no touch in progress)
    pub start_read: ReadSignal<Option<(i32, i32)>>,
    pub start_write: WriteSignal<Option<(i32, i32)>>,
}

pub fn create_swipe_signals() -> SwipeSignals {
    let (start_read, start_write) = signal(None::<(i32, i32)>);
    SwipeSignals {
        start_read,
        start_write,
    }
}

/// Classify a finished touch by its total displacement.
///
/// Only strictly-greater-than-threshold horizontal moves that dominate the
/// vertical move count; everything else is a tap or a scroll.
pub fn classify_swipe(dx: i32, dy: i32, threshold: i32) -> Option<SwipeDirection> {
    if dx.abs() <= threshold || dx.abs() <= dy.abs() {
        return None;
    }
    if dx < 0 {
        Some(SwipeDirection::Left)
    } else {
        Some(SwipeDirection::Right)
    }
}

fn first_changed_touch(ev: &web_sys::TouchEvent) -> Option<(i32, i32)> {
    ev.changed_touches()
        .item(0)
        .map(|touch| (touch.client_x(), touch.client_y()))
}

/// Bind global touchstart/touchend handlers for swipe detection
pub fn bind_global_swipe<F>(swipe: SwipeSignals, threshold: i32, on_swipe: F)
where
    F: Fn(SwipeDirection) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_touchstart =
        Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |ev: web_sys::TouchEvent| {
            swipe.start_write.set(first_changed_touch(&ev));
        });

    let on_touchend =
        Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |ev: web_sys::TouchEvent| {
            let start = swipe.start_read.get_untracked();
            swipe.start_write.set(None);

            let (Some((start_x, start_y)), Some((end_x, end_y))) = (start, first_changed_touch(&ev))
            else {
                return;
            };
            if let Some(direction) = classify_swipe(end_x - start_x, end_y - start_y, threshold) {
                on_swipe(direction);
            }
        });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let touchstart = on_touchstart.as_ref().unchecked_ref();
        let touchend = on_touchend.as_ref().unchecked_ref();
        let _ = doc.add_event_listener_with_callback("touchstart", touchstart);
        let _ = doc.add_event_listener_with_callback("touchend", touchend);
    }
    on_touchstart.forget();
    on_touchend.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_moves_are_not_swipes() {
        assert_eq!(classify_swipe(0, 0, SWIPE_THRESHOLD_PX), None);
        assert_eq!(classify_swipe(100, 0, SWIPE_THRESHOLD_PX), None);
        assert_eq!(classify_swipe(-100, 0, SWIPE_THRESHOLD_PX), None);
    }

    #[test]
    fn test_swipe_direction() {
        assert_eq!(classify_swipe(101, 0, SWIPE_THRESHOLD_PX), Some(SwipeDirection::Right));
        assert_eq!(classify_swipe(-150, 20, SWIPE_THRESHOLD_PX), Some(SwipeDirection::Left));
    }

    #[test]
    fn test_vertical_scroll_is_ignored() {
        assert_eq!(classify_swipe(120, 300, SWIPE_THRESHOLD_PX), None);
        assert_eq!(classify_swipe(-120, -120, SWIPE_THRESHOLD_PX), None);
    }
}
