//! Fade overlay ramped by its own timer.

use crate::options::FadeOptions;
use crate::post::{BlendableId, MaterialInstance, PostProcessSettings};
use crate::timer::{TimerHandle, TimerQueue, TimerTask};

/// Scalar parameter the fade material reads.
pub const FADE_AMOUNT: &str = "FadeAmount";

/// Tracks the fade blendable and its update timer.
#[derive(Debug, Clone, Default)]
pub struct FadeSequence {
    blendable: Option<BlendableId>,
    duration: f32,
    timer: Option<TimerHandle>,
}

impl FadeSequence {
    /// Sequence with no overlay attached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the overlay is still ramping.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.timer.is_some()
    }

    /// Blendable currently used as the fade overlay.
    #[must_use]
    pub fn blendable(&self) -> Option<BlendableId> {
        self.blendable
    }

    /// Current `FadeAmount` of the overlay, if one is attached.
    #[must_use]
    pub fn amount(&self, post: &PostProcessSettings) -> Option<f32> {
        let id = self.blendable?;
        post.blendable(id)?.material.scalar(FADE_AMOUNT)
    }

    /// Attach a fresh overlay and start ramping it to full over `duration`
    /// seconds. Any earlier overlay is detached first.
    ///
    /// Returns `false` without touching anything when no fade material is
    /// configured. A non-positive duration sets the overlay to full at once.
    pub fn begin(
        &mut self,
        duration: f32,
        options: &FadeOptions,
        post: &mut PostProcessSettings,
        timers: &mut TimerQueue,
    ) -> bool {
        let Some(material) = options.material.as_deref() else {
            log::debug!("fade skipped: no fade material configured");
            return false;
        };
        self.clear(post, timers);

        let start = if duration > 0.0 { 0.0 } else { 1.0 };
        let instance =
            MaterialInstance::new(material).with_scalar(FADE_AMOUNT, start);
        self.blendable = Some(post.add_blendable(instance, 1.0));
        self.duration = duration;
        if duration > 0.0 {
            self.timer = timers
                .schedule_repeating(TimerTask::Fade, options.callback_period);
            if self.timer.is_none() {
                self.set_amount(post, 1.0);
            }
        }
        log::debug!("fade started over {duration}s");
        true
    }

    /// Raise the overlay by one timer period. Returns whether the fade is
    /// finished.
    pub fn step(
        &mut self,
        period: f32,
        post: Option<&mut PostProcessSettings>,
        timers: &mut TimerQueue,
    ) -> bool {
        let current = post
            .as_deref()
            .and_then(|post| self.amount(post));
        let (Some(post), Some(current)) = (post, current) else {
            timers.cancel_slot(&mut self.timer);
            return true;
        };
        let amount = if self.duration > 0.0 {
            (current + period / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        self.set_amount(post, amount);
        if amount >= 1.0 {
            timers.cancel_slot(&mut self.timer);
            log::debug!("fade finished");
            return true;
        }
        false
    }

    /// Detach the overlay and stop its timer.
    pub fn clear(
        &mut self,
        post: &mut PostProcessSettings,
        timers: &mut TimerQueue,
    ) {
        timers.cancel_slot(&mut self.timer);
        if let Some(id) = self.blendable.take() {
            let _ = post.remove_blendable(id);
        }
    }

    fn set_amount(&self, post: &mut PostProcessSettings, amount: f32) {
        if let Some(blendable) =
            self.blendable.and_then(|id| post.blendable_mut(id))
        {
            blendable.material.set_scalar(FADE_AMOUNT, amount);
        }
    }
}
