//! TickGate - run/pause state for the tick chain.
//!
//! The gate answers one question at the moment a scheduled callback
//! fires: is this tick still wanted? Stopping must win every race with
//! an already-queued timer, so each start hands out a fresh epoch and
//! `stop` invalidates it. A callback carrying a stale epoch is a no-op
//! even if the host delivers it after the fact.

pub(super) struct TickGate {
    running: bool,
    epoch: u64,
}

impl TickGate {
    pub(super) fn new() -> Self {
        Self {
            running: false,
            epoch: 0,
        }
    }

    pub(super) fn is_running(&self) -> bool {
        self.running
    }

    /// Switch to running and return the epoch ticks must carry.
    /// Returns `None` when already running; the existing chain keeps
    /// its epoch and no second chain may be armed.
    pub(super) fn start(&mut self) -> Option<u64> {
        if self.running {
            return None;
        }
        self.running = true;
        self.epoch += 1;
        Some(self.epoch)
    }

    /// Switch to stopped. Bumping the epoch here orphans every callback
    /// armed before this call, queued or in flight.
    pub(super) fn stop(&mut self) {
        self.running = false;
        self.epoch += 1;
    }

    /// Fire-time check: the gate is open only for the epoch handed out
    /// by the matching `start`.
    pub(super) fn may_fire(&self, epoch: u64) -> bool {
        self.running && self.epoch == epoch
    }
}
