/// Collapses bursts of scroll events into at most one reconciliation per animation frame.
///
/// The host calls [`FrameCoalescer::on_event`] from its scroll handler and requests an
/// animation frame when it returns `true`; the frame callback then calls
/// [`FrameCoalescer::on_frame`] and reconciles when that returns `true`. A frame that arrives
/// sooner than `min_interval_ms` after the last serviced one leaves the work pending, and the
/// host requests another frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameCoalescer {
    min_interval_ms: u64,
    pending: bool,
    last_frame_ms: Option<u64>,
    coalesced: u32,
}

impl FrameCoalescer {
    pub fn new(min_interval_ms: u64) -> Self {
        Self {
            min_interval_ms,
            ..Self::default()
        }
    }

    /// Records one event. Returns `true` if a frame must be requested.
    pub fn on_event(&mut self) -> bool {
        self.coalesced = self.coalesced.saturating_add(1);
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Returns `true` if the pending work should run in this frame.
    pub fn on_frame(&mut self, now_ms: u64) -> bool {
        if !self.pending {
            return false;
        }
        if let Some(last) = self.last_frame_ms {
            if now_ms.saturating_sub(last) < self.min_interval_ms {
                return false;
            }
        }
        self.complete(now_ms);
        true
    }

    /// Marks pending work as done by other means (e.g. an animation step that reconciled).
    pub fn complete(&mut self, now_ms: u64) {
        self.pending = false;
        self.coalesced = 0;
        self.last_frame_ms = Some(now_ms);
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Events folded into the pending frame so far.
    pub fn coalesced(&self) -> u32 {
        self.coalesced
    }

    pub fn min_interval_ms(&self) -> u64 {
        self.min_interval_ms
    }

    pub fn set_min_interval_ms(&mut self, min_interval_ms: u64) {
        self.min_interval_ms = min_interval_ms;
    }
}
