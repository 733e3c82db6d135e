//! The `ActionPicker` trait — the extension point for agent behavior.

use lt_agent::Agent;
use lt_core::AgentRng;

use crate::{Action, ActionContext};

/// Pluggable action selection.
///
/// Called once per settled agent per resolution pass.  All randomness must
/// come from `rng`, the agent's own stream, so a run is reproducible from
/// its seed regardless of evaluation order.
///
/// # Thread safety
///
/// With lt-sim's `parallel` feature the draw phase runs on rayon, so
/// implementations must be `Send + Sync`.  Per-agent state belongs in the
/// snapshot, not in the picker.
///
/// # Example
///
/// ```rust
/// use lt_agent::Agent;
/// use lt_behavior::{Action, ActionContext, ActionPicker};
/// use lt_core::AgentRng;
///
/// /// Everyone just keeps walking.
/// struct Marching;
///
/// impl ActionPicker for Marching {
///     fn pick(&self, _agent: &Agent, _ctx: &ActionContext<'_>, _rng: &mut AgentRng) -> Action {
///         Action::MoveForward
///     }
/// }
/// ```
pub trait ActionPicker: Send + Sync + 'static {
    fn pick(&self, agent: &Agent, ctx: &ActionContext<'_>, rng: &mut AgentRng) -> Action;
}

impl<P: ActionPicker + ?Sized> ActionPicker for Box<P> {
    fn pick(&self, agent: &Agent, ctx: &ActionContext<'_>, rng: &mut AgentRng) -> Action {
        (**self).pick(agent, ctx, rng)
    }
}
