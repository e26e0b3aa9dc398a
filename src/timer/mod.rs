//! Single-threaded periodic task scheduler.
//!
//! Warp, fade and obstacle-detection updates run at their own cadence
//! instead of the frame rate. The host advances the queue with wall or
//! simulated time and the rig dispatches whatever came due. Handles are
//! generation-checked, so cancelling a handle that already fired its last
//! time or was cancelled before is a no-op.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Cancel token for a scheduled timer.
    pub struct TimerHandle;
}

/// Upper bound on catch-up firings of one timer in a single advance.
const MAX_CATCH_UP: u32 = 256;

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerTask {
    /// Advance the warp sequence.
    Warp,
    /// Advance the fade overlay.
    Fade,
    /// Run the forward obstacle probe.
    ObstacleDetection,
}

#[derive(Debug, Clone, Copy)]
struct TimerEntry {
    task: TimerTask,
    period: f32,
    until_next: f32,
}

/// One firing produced by [`TimerQueue::advance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiredTimer {
    /// Timer that fired.
    pub handle: TimerHandle,
    /// Its task.
    pub task: TimerTask,
    /// Its period, which is also the time step the task should consume.
    pub period: f32,
    /// Offset into the advanced window at which it came due.
    pub at: f32,
}

/// Repeating timers keyed by [`TimerHandle`].
#[derive(Debug, Default)]
pub struct TimerQueue {
    timers: SlotMap<TimerHandle, TimerEntry>,
}

impl TimerQueue {
    /// Empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to fire every `period` seconds.
    ///
    /// Returns `None` (and schedules nothing) for a non-positive or
    /// non-finite period.
    pub fn schedule_repeating(
        &mut self,
        task: TimerTask,
        period: f32,
    ) -> Option<TimerHandle> {
        if !(period.is_finite() && period > 0.0) {
            log::warn!("refusing to schedule {task:?} with period {period}");
            return None;
        }
        Some(self.timers.insert(TimerEntry {
            task,
            period,
            until_next: period,
        }))
    }

    /// Stop a timer. Returns whether it was still scheduled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.timers.remove(handle).is_some()
    }

    /// Take the handle out of `slot` and cancel it. Empty slots are fine.
    pub fn cancel_slot(&mut self, slot: &mut Option<TimerHandle>) {
        if let Some(handle) = slot.take() {
            let _ = self.cancel(handle);
        }
    }

    /// Whether `handle` is still scheduled.
    #[must_use]
    pub fn is_active(&self, handle: TimerHandle) -> bool {
        self.timers.contains_key(handle)
    }

    /// Number of scheduled timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// Whether nothing is scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Advance every timer by `elapsed` seconds and return the firings in
    /// the order they came due.
    ///
    /// A timer that fell behind fires once per missed period, up to a
    /// fixed catch-up limit. Callers should check
    /// [`is_active`](Self::is_active) before running each firing, since an
    /// earlier firing in the same batch may cancel a later one.
    pub fn advance(&mut self, elapsed: f32) -> Vec<FiredTimer> {
        let mut fired = Vec::new();
        if elapsed <= 0.0 {
            return fired;
        }
        for (handle, entry) in &mut self.timers {
            entry.until_next -= elapsed;
            let mut count = 0;
            while entry.until_next <= 0.0 && count < MAX_CATCH_UP {
                fired.push(FiredTimer {
                    handle,
                    task: entry.task,
                    period: entry.period,
                    at: elapsed + entry.until_next,
                });
                entry.until_next += entry.period;
                count += 1;
            }
            if count == MAX_CATCH_UP {
                entry.until_next = entry.until_next.max(entry.period);
            }
        }
        fired.sort_by(|a, b| a.at.total_cmp(&b.at));
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_period() {
        let mut queue = TimerQueue::new();
        let handle = queue.schedule_repeating(TimerTask::Warp, 0.01).unwrap();
        assert!(queue.advance(0.005).is_empty());
        let fired = queue.advance(0.006);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].handle, handle);
        assert_eq!(fired[0].task, TimerTask::Warp);
    }

    #[test]
    fn catches_up_on_long_advance() {
        let mut queue = TimerQueue::new();
        let _ = queue.schedule_repeating(TimerTask::Fade, 0.01).unwrap();
        let fired = queue.advance(0.0505);
        assert_eq!(fired.len(), 5);
        assert!(fired.windows(2).all(|w| w[0].at <= w[1].at));
    }

    #[test]
    fn interleaves_timers_by_due_time() {
        let mut queue = TimerQueue::new();
        let _ = queue.schedule_repeating(TimerTask::Warp, 0.03).unwrap();
        let _ = queue.schedule_repeating(TimerTask::Fade, 0.02).unwrap();
        let tasks: Vec<_> =
            queue.advance(0.065).into_iter().map(|f| f.task).collect();
        assert_eq!(
            tasks,
            [
                TimerTask::Fade,
                TimerTask::Warp,
                TimerTask::Fade,
                TimerTask::Fade,
                TimerTask::Warp,
            ]
        );
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut queue = TimerQueue::new();
        let handle = queue.schedule_repeating(TimerTask::Fade, 0.01).unwrap();
        assert!(queue.cancel(handle));
        assert!(!queue.cancel(handle));
        assert!(!queue.is_active(handle));
        assert!(queue.advance(1.0).is_empty());

        let mut slot = Some(handle);
        queue.cancel_slot(&mut slot);
        queue.cancel_slot(&mut slot);
        assert!(slot.is_none());
    }

    #[test]
    fn stale_handle_does_not_cancel_reused_slot() {
        let mut queue = TimerQueue::new();
        let old = queue.schedule_repeating(TimerTask::Warp, 0.01).unwrap();
        assert!(queue.cancel(old));
        let new = queue.schedule_repeating(TimerTask::Warp, 0.01).unwrap();
        assert!(!queue.cancel(old));
        assert!(queue.is_active(new));
    }

    #[test]
    fn rejects_non_positive_period() {
        let mut queue = TimerQueue::new();
        assert!(queue.schedule_repeating(TimerTask::Warp, 0.0).is_none());
        assert!(queue.schedule_repeating(TimerTask::Warp, -1.0).is_none());
        assert!(queue.schedule_repeating(TimerTask::Warp, f32::NAN).is_none());
        assert!(queue.is_empty());
    }
}
