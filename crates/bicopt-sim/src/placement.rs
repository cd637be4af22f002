//! Placement smoothing: rolling mean of recent surface-hit samples.
//!
//! Raw per-frame surface hits jitter; averaging the last few keeps the
//! reticle steady without visible lag.

use std::collections::VecDeque;

use bicopt_core::types::Vector3;

/// Rolling window of accepted placement candidates.
#[derive(Debug, Clone)]
pub struct PlacementSmoother {
    window: VecDeque<Vector3>,
    capacity: usize,
}

impl PlacementSmoother {
    /// `capacity` is clamped to at least one sample.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            window: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Feed this frame's candidate and return the smoothed position.
    ///
    /// `None` (no usable surface) leaves the window untouched. An empty
    /// window yields `default`.
    pub fn sample(&mut self, candidate: Option<Vector3>, default: Vector3) -> Vector3 {
        if let Some(position) = candidate {
            if self.window.len() == self.capacity {
                self.window.pop_front();
            }
            self.window.push_back(position);
        }
        self.mean().unwrap_or(default)
    }

    /// Componentwise mean of the window, if any samples are held.
    pub fn mean(&self) -> Option<Vector3> {
        if self.window.is_empty() {
            return None;
        }
        let sum: Vector3 = self.window.iter().copied().sum();
        Some(sum / self.window.len() as f32)
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Samples currently held, oldest first.
    pub fn samples(&self) -> impl Iterator<Item = &Vector3> {
        self.window.iter()
    }

    pub fn clear(&mut self) {
        self.window.clear();
    }
}
