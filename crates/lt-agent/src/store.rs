//! Per-agent RNG state.
//!
//! # Why not on `Agent`?
//!
//! `Agent` is a `Copy` value shared through immutable snapshots.  RNG state
//! is mutable and must not be shared, so it lives here, indexed by
//! `AgentId`, owned exclusively by the engine.  The draw phase then holds
//! `&Snapshot` and `&mut AgentRngs` at the same time without a conflict,
//! zipping the agent slice with `inner`.

use lt_core::{AgentId, AgentRng};

/// Per-agent deterministic RNG state.
///
/// `Send` but intentionally not shared: rayon's `par_iter_mut()` hands each
/// worker exclusive access to a disjoint set of agents' RNGs.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Seed `count` per-agent RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
