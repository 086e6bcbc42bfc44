//! Delayed and repeating callbacks on the browser event loop.
//!
//! One-shot callbacks from [`after`] always fire; nothing cancels them.
//! Repeating callbacks from [`every`] stop with their component. Server
//! rendering never handles events, so outside `hydrate` callbacks are
//! dropped unscheduled.

use std::time::Duration;

/// Run `f` once after `delay` on the browser event loop.
pub fn after(delay: Duration, f: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        let ms = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(ms, f).forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (delay, f);
    }
}

/// Run `f` every `period` until the current reactive owner (the component
/// that called this) is cleaned up.
pub fn every(period: Duration, f: impl FnMut() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        let ms = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        // Dropping the interval cancels it; the owner drops it on cleanup.
        let _ = leptos::prelude::StoredValue::new_local(gloo_timers::callback::Interval::new(ms, f));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (period, f);
    }
}
