//! Repeating timer with explicit teardown.
//!
//! Browser `setInterval` handles leak when a component unmounts without
//! clearing them. [`Ticker`] makes the schedule an owned value: dropping the
//! handle (or calling [`Ticker::stop`]) cancels the next tick, and a callback
//! can end its own schedule by returning [`Tick::Stop`]. Components keep the
//! handle in local storage and clear it in `on_cleanup`.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

/// What the callback wants to happen after this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Stop,
}

/// Handle to a repeating browser-event-loop timer.
pub struct Ticker {
    cancelled: Rc<Cell<bool>>,
}

impl Ticker {
    /// Schedule `tick` every `period_ms` milliseconds until the callback
    /// returns [`Tick::Stop`] or the handle is stopped/dropped.
    pub fn start(period_ms: u32, mut tick: impl FnMut() -> Tick + 'static) -> Self {
        let cancelled = Rc::new(Cell::new(false));
        let flag = Rc::clone(&cancelled);

        spawn_local(async move {
            loop {
                TimeoutFuture::new(period_ms).await;
                if flag.get() {
                    break;
                }
                if tick() == Tick::Stop {
                    flag.set(true);
                    break;
                }
            }
        });

        Self { cancelled }
    }

    /// Cancel the schedule. Idempotent.
    pub fn stop(&self) {
        self.cancelled.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.cancelled.get()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

/// One count-up step: advance `current` toward `target` by one percent of the
/// target (at least 1), never overshooting.
pub fn count_up_step(current: u64, target: u64) -> u64 {
    if current >= target {
        return target;
    }
    let step = target.div_ceil(100).max(1);
    (current + step).min(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_up_reaches_target_in_at_most_hundred_steps() {
        let target = 10_000;
        let mut current = 0;
        let mut steps = 0;
        while current < target {
            current = count_up_step(current, target);
            steps += 1;
            assert!(steps <= 100, "count-up did not converge");
        }
        assert_eq!(current, target);
    }

    #[test]
    fn count_up_never_overshoots() {
        let mut current = 0;
        for _ in 0..500 {
            current = count_up_step(current, 1_300);
            assert!(current <= 1_300);
        }
        assert_eq!(current, 1_300);
    }

    #[test]
    fn count_up_handles_small_and_zero_targets() {
        assert_eq!(count_up_step(0, 0), 0);
        assert_eq!(count_up_step(0, 1), 1);
        assert_eq!(count_up_step(5, 3), 3);
    }
}
