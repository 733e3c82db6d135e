//! Shape of an interaction between two facing agents.
//!
//! The engine reports these to observers when an agent initiates an
//! interaction.  No further consequence (scoring, removal) is attached.

use lt_core::AgentId;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InteractionKind {
    /// Both agents face each other with heads forward.
    MutualEmbrace,
    /// The partner faces the initiator but is looking away.
    UnilateralAttempt,
    #[default]
    None,
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionResult {
    pub kind: InteractionKind,
    /// Initiator first, then partner.  Empty for `InteractionKind::None`.
    pub agents: Vec<AgentId>,
}

impl InteractionResult {
    pub fn none() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.kind == InteractionKind::None
    }
}
