//! Per-agent results of a resolution pass.

use lt_agent::{AnimationState, InteractionResult};
use lt_behavior::Action;
use lt_core::AgentId;

/// What happened to one agent in one resolution pass.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionOutcome {
    pub agent: AgentId,

    /// The action the picker drew.
    pub action: Action,

    /// `false` when the action degraded to idle (refused move, interaction
    /// with nobody to interact with).  Turns and idle always apply.
    pub applied: bool,

    /// Animation state the agent was left in.
    pub animation_state: AnimationState,

    /// Set for `InitiateInteraction` only.
    pub interaction: Option<InteractionResult>,
}
