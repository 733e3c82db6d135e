//! Immutable, versioned views of the whole cast.
//!
//! # Publication model
//!
//! The engine never edits agents in place.  Each tick it copies the current
//! slice, applies the tick's changes to the copy, and publishes the result
//! with [`Snapshot::successor`].  Cloning a `Snapshot` is one `Arc` bump, so
//! a renderer can hold on to the frame it is drawing while the engine moves
//! on; the old frame stays valid until its last clone is dropped.

use std::ops::Deref;
use std::sync::Arc;

use lt_core::AgentId;

use crate::Agent;

#[derive(Clone, Debug)]
pub struct Snapshot {
    version: u64,
    agents: Arc<[Agent]>,
}

impl Snapshot {
    /// First snapshot of a run (version 0).
    pub fn new(agents: Vec<Agent>) -> Self {
        Self { version: 0, agents: agents.into() }
    }

    /// A snapshot with no agents, used before `start` and after `stop`.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Publish `agents` as the snapshot that follows `self`.
    pub fn successor(&self, agents: Vec<Agent>) -> Self {
        Self { version: self.version + 1, agents: agents.into() }
    }

    /// Incremented on every publication: once per tick for the animation
    /// advance and once more when a resolution pass runs.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    #[inline]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Look up an agent by id.
    ///
    /// Ids are assigned in slice order, so this is an index in the common
    /// case and falls back to a scan for hand-built snapshots.
    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        match self.agents.get(id.index()) {
            Some(agent) if agent.id == id => Some(agent),
            _ => self.agents.iter().find(|a| a.id == id),
        }
    }

    /// Copy of the agent slice, for building the next snapshot.
    pub fn to_vec(&self) -> Vec<Agent> {
        self.agents.to_vec()
    }

    /// `true` if both snapshots share the same allocation.
    pub fn ptr_eq(&self, other: &Snapshot) -> bool {
        Arc::ptr_eq(&self.agents, &other.agents)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl Deref for Snapshot {
    type Target = [Agent];

    fn deref(&self) -> &[Agent] {
        &self.agents
    }
}
