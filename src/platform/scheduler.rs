//! Frame scheduling
//!
//! The game asks for frames only while a run is live. Arming and cancelling
//! are both idempotent, so a host never ends up with two repeating callbacks
//! or a dangling one after a reset.

/// A cancelable repeating frame callback
pub trait FrameScheduler {
    /// Start delivering frames. No-op if already scheduled.
    fn schedule_next_frame(&mut self, now_ms: u64);
    /// Stop delivering frames. No-op if not scheduled.
    fn cancel_frame(&mut self);
    fn is_scheduled(&self) -> bool;
    /// Milliseconds since the previous frame if one is due at `now_ms`
    fn poll(&mut self, now_ms: u64) -> Option<u64>;
}

/// Fixed-delay timer polled by the host loop
#[derive(Debug, Clone)]
pub struct FrameTimer {
    interval_ms: u64,
    /// (time of last frame, time next frame is due) while armed
    armed: Option<(u64, u64)>,
}

impl FrameTimer {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            armed: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }
}

impl FrameScheduler for FrameTimer {
    fn schedule_next_frame(&mut self, now_ms: u64) {
        if self.armed.is_none() {
            self.armed = Some((now_ms, now_ms + self.interval_ms));
        }
    }

    fn cancel_frame(&mut self) {
        self.armed = None;
    }

    fn is_scheduled(&self) -> bool {
        self.armed.is_some()
    }

    /// Late polls coalesce into a single frame with a longer delta
    fn poll(&mut self, now_ms: u64) -> Option<u64> {
        let (last, due) = self.armed?;
        if now_ms < due {
            return None;
        }
        self.armed = Some((now_ms, now_ms + self.interval_ms));
        Some(now_ms - last)
    }
}
