//! A picker under which nobody ever does anything.

use lt_agent::Agent;
use lt_core::AgentRng;

use crate::{Action, ActionContext, ActionPicker};

/// An [`ActionPicker`] that always returns [`Action::Idle`].
///
/// Useful in tests that only care about the animation clock.
pub struct IdlePicker;

impl ActionPicker for IdlePicker {
    fn pick(&self, _agent: &Agent, _ctx: &ActionContext<'_>, _rng: &mut AgentRng) -> Action {
        Action::Idle
    }
}
