//! The default picker: a uniform draw over the baseline actions, with
//! interaction initiation mixed in when it is legal.

use lt_agent::Agent;
use lt_agent::predicates::can_initiate_interaction;
use lt_core::AgentRng;

use crate::{Action, ActionContext, ActionPicker, BehaviorError, BehaviorResult};

/// Draws each of [`Action::BASELINE`] with weight 1 and
/// [`Action::InitiateInteraction`] with `interaction_weight`, the latter only
/// when the agent can initiate against the pre-pass snapshot.
///
/// With `interaction_weight = 0` this is exactly the uniform six-way draw.
#[derive(Clone, Debug, PartialEq)]
pub struct UniformPicker {
    interaction_weight: f64,
}

impl UniformPicker {
    /// The plain six-way draw; interactions are never initiated.
    pub fn baseline() -> Self {
        Self { interaction_weight: 0.0 }
    }

    /// Fails if `interaction_weight` is negative or not finite.
    pub fn new(interaction_weight: f64) -> BehaviorResult<Self> {
        if !interaction_weight.is_finite() || interaction_weight < 0.0 {
            return Err(BehaviorError::Config(format!(
                "interaction weight must be finite and >= 0, got {interaction_weight}"
            )));
        }
        Ok(Self { interaction_weight })
    }

    pub fn interaction_weight(&self) -> f64 {
        self.interaction_weight
    }
}

impl Default for UniformPicker {
    fn default() -> Self {
        Self::baseline()
    }
}

impl ActionPicker for UniformPicker {
    fn pick(&self, agent: &Agent, ctx: &ActionContext<'_>, rng: &mut AgentRng) -> Action {
        let offer_interaction =
            self.interaction_weight > 0.0 && can_initiate_interaction(agent, ctx.snapshot);

        if !offer_interaction {
            return rng.choose(&Action::BASELINE).copied().unwrap_or(Action::Idle);
        }

        let mut weights = [1.0; Action::BASELINE.len() + 1];
        weights[Action::BASELINE.len()] = self.interaction_weight;
        match rng.choose_weighted(&weights) {
            Some(i) if i < Action::BASELINE.len() => Action::BASELINE[i],
            Some(_) => Action::InitiateInteraction,
            None => Action::Idle,
        }
    }
}
