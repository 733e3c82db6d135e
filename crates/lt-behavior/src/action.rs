//! The actions an agent can be assigned in a resolution pass.

use std::fmt;

use lt_agent::AnimationState;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Action {
    /// Step one cell in the body's facing direction.  Refused unless the
    /// head is forward and the target cell is free.
    MoveForward,
    /// Body −90°.
    TurnBodyLeft,
    /// Body +90°.
    TurnBodyRight,
    /// Head −90°, saturating at −90°.
    TurnHeadLeft,
    /// Head +90°, saturating at +90°.
    TurnHeadRight,
    Idle,
    /// Only offered when the agent faces a neighbor that faces it back.
    InitiateInteraction,
}

impl Action {
    /// The fixed set drawn from in every pass.
    pub const BASELINE: [Action; 6] = [
        Action::MoveForward,
        Action::TurnBodyLeft,
        Action::TurnBodyRight,
        Action::TurnHeadLeft,
        Action::TurnHeadRight,
        Action::Idle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::MoveForward         => "move_forward",
            Action::TurnBodyLeft        => "turn_body_left",
            Action::TurnBodyRight       => "turn_body_right",
            Action::TurnHeadLeft        => "turn_head_left",
            Action::TurnHeadRight       => "turn_head_right",
            Action::Idle                => "idle",
            Action::InitiateInteraction => "initiate_interaction",
        }
    }

    /// Animation state the agent shows when this action succeeds.
    ///
    /// `InitiateInteraction` maps to the attempt animation; the engine
    /// upgrades it to an embrace when the interaction is mutual.
    pub fn animation_state(self) -> AnimationState {
        match self {
            Action::MoveForward                           => AnimationState::Walking,
            Action::TurnBodyLeft | Action::TurnBodyRight  => AnimationState::TurningBody,
            Action::TurnHeadLeft | Action::TurnHeadRight  => AnimationState::TurningHead,
            Action::Idle                                  => AnimationState::Idle,
            Action::InitiateInteraction                   => AnimationState::InteractingAttempt,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
