mod timers;
pub use self::timers::*;

// Monotonic clock used by the timers.   std::time::Instant
// panics on wasm32-unknown-unknown, so use web-time there.
cfg_if::cfg_if! {
    if #[cfg(target_family = "wasm")] {
        pub(crate) use web_time::Instant;
    } else {
        pub(crate) use std::time::Instant;
    }
}
