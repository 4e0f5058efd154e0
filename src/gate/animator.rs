use super::easing::bounce_out;
use super::transform::Pose;

/// Identifies one scheduled return animation. A frame callback holding a
/// token that no longer matches the controller's current animation must not
/// write anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(pub(super) u64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    InFlight(Pose),
    Settled,
}

/// Eases a snapshot pose back to rest over a fixed duration.
#[derive(Debug, Clone)]
pub struct ReturnAnimation {
    from: Pose,
    started_at: f64,
    duration: f64,
    token: FrameToken,
}

impl ReturnAnimation {
    pub fn new(from: Pose, started_at: f64, duration: f64, token: FrameToken) -> Self {
        Self {
            from,
            started_at,
            duration,
            token,
        }
    }

    pub fn token(&self) -> FrameToken {
        self.token
    }

    /// Linear progress at `now`, in `[0, 1]`. A duration that is not a
    /// positive number counts as already complete.
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration.is_nan() || self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / self.duration).clamp(0.0, 1.0)
    }

    pub fn sample(&self, now: f64) -> Frame {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return Frame::Settled;
        }
        let eased = bounce_out(progress);
        Frame::InFlight(self.from.scaled(1.0 - eased))
    }
}
