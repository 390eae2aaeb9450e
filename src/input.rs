//! Frame input sampling: a held-direction set plus a bounded pointer-delta
//! queue.
//!
//! The embedding window layer owns the actual event listeners; it feeds this
//! state and flips `look_enabled` alongside its pointer-capture state.
//! Nothing here touches globals, and deltas pushed while look is disabled
//! are discarded at the door.

use std::collections::VecDeque;

use crate::constants::sim::POINTER_QUEUE_CAP;

/// Directions held down this frame. Opposite directions may both be held;
/// they cancel out during integration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldDirections {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldDirections {
    pub fn any(&self) -> bool {
        self.forward || self.back || self.left || self.right
    }
}

/// One pointer-look movement, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerDelta {
    pub dx: f32,
    pub dy: f32,
}

/// Input accumulated between ticks. The pointer queue is bounded; when full,
/// the oldest delta is dropped.
#[derive(Debug, Default)]
pub struct InputState {
    held: HeldDirections,
    pointer: VecDeque<PointerDelta>,
    look_enabled: bool,
    dropped: u64,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_held(&mut self, held: HeldDirections) {
        self.held = held;
    }

    pub fn held(&self) -> HeldDirections {
        self.held
    }

    /// Gate for pointer-look, driven by the caller's capture state.
    /// Disabling drops anything still queued.
    pub fn set_look_enabled(&mut self, enabled: bool) {
        self.look_enabled = enabled;
        if !enabled {
            self.pointer.clear();
        }
    }

    pub fn look_enabled(&self) -> bool {
        self.look_enabled
    }

    pub fn push_pointer_delta(&mut self, dx: f32, dy: f32) {
        if !self.look_enabled {
            return;
        }
        if self.pointer.len() == POINTER_QUEUE_CAP {
            self.pointer.pop_front();
            self.dropped += 1;
            if self.dropped.is_power_of_two() {
                log::warn!(
                    "pointer queue overflow: {} deltas dropped so far",
                    self.dropped
                );
            }
        }
        self.pointer.push_back(PointerDelta { dx, dy });
    }

    /// Hands out everything queued since the last tick, emptying the queue.
    pub fn drain_pointer_deltas(&mut self) -> impl Iterator<Item = PointerDelta> + '_ {
        self.pointer.drain(..)
    }

    /// Total deltas lost to queue overflow since creation.
    pub fn dropped_deltas(&self) -> u64 {
        self.dropped
    }
}
