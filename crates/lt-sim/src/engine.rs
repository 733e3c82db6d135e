//! The `Engine` struct: host controls, animation clock and resolution passes.

use std::time::Duration;

use lt_agent::predicates::{can_move_forward, forward_target, interaction_result, is_valid_layout};
use lt_agent::{Agent, AgentRngs, AnimationState, CastBuilder, CharacterKind, InteractionKind, Snapshot};
use lt_behavior::{Action, ActionContext, ActionPicker};
use lt_core::{AgentId, SimClock, SimConfig};
use tracing::{debug, info, trace};

use crate::builder::check_config;
use crate::{ActionOutcome, NoopObserver, SimError, SimObserver, SimResult, SimulationState};

#[cfg(feature = "fx-hash")]
type CellSet = rustc_hash::FxHashSet<usize>;
#[cfg(not(feature = "fx-hash"))]
type CellSet = std::collections::HashSet<usize>;

// ── Engine ────────────────────────────────────────────────────────────────────

/// The action-resolution engine.
///
/// Owns the run clock, the current [`Snapshot`], one RNG per agent and the
/// [`ActionPicker`].  Single-threaded and frame-driven: the host calls
/// [`tick`](Self::tick) once per display frame and every call completes
/// synchronously.  Each tick publishes whole new snapshots; readers holding
/// an older one keep a consistent view.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Engine<P: ActionPicker> {
    /// Run configuration.  Copied into the run when it starts, so changes
    /// take effect on the next `start`.
    pub config: SimConfig,

    /// Frame counter, accumulated time and pass schedule.
    pub clock: SimClock,

    pub(crate) state:    SimulationState,
    pub(crate) snapshot: Snapshot,
    pub(crate) rngs:     AgentRngs,
    pub(crate) picker:   P,
    pub(crate) cast:     Vec<CharacterKind>,

    // Settings captured from `config` by the last `start`.
    pub(crate) line_length:     usize,
    pub(crate) action_interval: Duration,
    pub(crate) animation_rate:  f32,
}

impl<P: ActionPicker> Engine<P> {
    // ── Host controls ─────────────────────────────────────────────────────

    /// Place a fresh cast on the line and enter `Running`.
    ///
    /// Calling `start` while running restarts the run from scratch.
    pub fn start(&mut self) -> SimResult<()> {
        check_config(&self.config, self.cast.len())?;
        let (snapshot, rngs) = CastBuilder::new(self.config.line_length, self.config.seed)
            .kinds(self.cast.clone())
            .build()?;
        self.begin(snapshot, rngs);
        Ok(())
    }

    /// Start from a caller-supplied layout instead of the built-in cast.
    ///
    /// `agents[i].id` must be `AgentId(i)`, and the layout must respect
    /// bounds and exclusivity for the configured line length.
    pub fn start_with(&mut self, agents: Vec<Agent>) -> SimResult<()> {
        check_config(&self.config, agents.len())?;
        if let Some((i, agent)) = agents
            .iter()
            .enumerate()
            .find(|(i, a)| a.id.index() != *i)
        {
            return Err(SimError::InvalidLayout(format!(
                "agent at index {i} has id {}",
                agent.id
            )));
        }
        if !is_valid_layout(&agents, self.config.line_length) {
            return Err(SimError::InvalidLayout(format!(
                "agents overlap or leave the {}-cell line",
                self.config.line_length
            )));
        }
        let rngs = AgentRngs::new(agents.len(), self.config.seed);
        self.begin(Snapshot::new(agents), rngs);
        Ok(())
    }

    fn begin(&mut self, snapshot: Snapshot, rngs: AgentRngs) {
        self.line_length = self.config.line_length;
        self.action_interval = self.config.action_interval();
        self.animation_rate = self.config.animation_rate;
        self.clock = self.config.make_clock();
        self.snapshot = snapshot;
        self.rngs = rngs;
        self.state = SimulationState::Running;
        info!(
            line_length = self.line_length,
            interval_ms = self.config.action_interval_ms,
            agents = self.snapshot.len(),
            "simulation started"
        );
    }

    /// Freeze the clock, keeping the cast.  No-op unless running.
    pub fn pause(&mut self) {
        if self.state == SimulationState::Running {
            self.state = SimulationState::Paused;
            debug!(tick = self.clock.current_tick.0, "simulation paused");
        }
    }

    /// Continue a paused run.  No-op unless paused.
    pub fn resume(&mut self) {
        if self.state == SimulationState::Paused {
            self.state = SimulationState::Running;
            debug!(tick = self.clock.current_tick.0, "simulation resumed");
        }
    }

    /// Discard the cast and return to `Configuration`.
    pub fn stop(&mut self) {
        self.discard();
        info!("simulation stopped");
    }

    /// Same transition as [`stop`](Self::stop); kept separate so hosts can
    /// wire the two controls independently.
    pub fn reset(&mut self) {
        self.discard();
        info!("simulation reset");
    }

    fn discard(&mut self) {
        self.state = SimulationState::Configuration;
        self.snapshot = Snapshot::empty();
        self.rngs = AgentRngs::new(0, 0);
        self.clock = self.config.make_clock();
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> SimulationState {
        self.state
    }

    /// The latest published snapshot.  Cheap: one `Arc` clone.
    #[inline]
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot.clone()
    }

    #[inline]
    pub fn agents(&self) -> &[Agent] {
        self.snapshot.agents()
    }

    #[inline]
    pub fn picker(&self) -> &P {
        &self.picker
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance one display frame of length `delta`.
    ///
    /// Returns `true` if a resolution pass ran.  Does nothing unless
    /// `Running`.
    pub fn tick(&mut self, delta: Duration) -> bool {
        self.tick_with(delta, &mut NoopObserver)
    }

    /// [`tick`](Self::tick) with observer callbacks.
    pub fn tick_with<O: SimObserver>(&mut self, delta: Duration, observer: &mut O) -> bool {
        if self.state != SimulationState::Running {
            return false;
        }

        self.clock.advance(delta);
        self.animate();

        let resolved = self.clock.resolution_due(self.action_interval);
        if resolved {
            self.resolve_pass(observer);
        }

        observer.on_tick_end(self.clock.current_tick, &self.snapshot);
        resolved
    }

    /// Run a resolution pass immediately, whatever the clock says.
    ///
    /// The pass counts as the latest one, so the next scheduled pass is a
    /// full interval away.  Returns the pass's outcomes; empty unless
    /// `Running`.
    pub fn resolve_now<O: SimObserver>(&mut self, observer: &mut O) -> Vec<ActionOutcome> {
        if self.state != SimulationState::Running {
            return Vec::new();
        }
        self.resolve_pass(observer)
    }

    /// Per-frame animation advance.  The only per-tick mutation outside a
    /// resolution pass.
    fn animate(&mut self) {
        let rate = self.animation_rate;
        let next = self
            .snapshot
            .iter()
            .map(|agent| Agent {
                animation_progress: (agent.animation_progress + rate).min(1.0),
                ..*agent
            })
            .collect();
        self.snapshot = self.snapshot.successor(next);
    }

    // ── Resolution pass ───────────────────────────────────────────────────

    fn resolve_pass<O: SimObserver>(&mut self, observer: &mut O) -> Vec<ActionOutcome> {
        let pass = self.clock.passes + 1;
        let line_length = self.line_length;
        let before = self.snapshot.clone();

        let drawn = {
            let ctx = ActionContext::new(pass, self.clock.current_tick, line_length, &before);
            draw_actions(&before, &ctx, &self.picker, &mut self.rngs)
        };

        let mut next = before.to_vec();
        let mut claimed = CellSet::default();
        let mut outcomes = Vec::with_capacity(drawn.len());
        for (id, action) in drawn {
            let outcome = apply_action(&mut next[id.index()], action, &before, line_length, &mut claimed);
            observer.on_action(pass, &outcome);
            outcomes.push(outcome);
        }

        self.snapshot = before.successor(next);
        self.clock.mark_resolved();

        debug!(
            pass,
            tick = self.clock.current_tick.0,
            assigned = outcomes.len(),
            moved = claimed.len(),
            "resolution pass"
        );
        observer.on_resolution(pass, &outcomes, &self.snapshot);
        outcomes
    }
}

// ── Draw phase ────────────────────────────────────────────────────────────────

/// Ask the picker for an action for every settled agent, in id order.
///
/// Pure with respect to the snapshot; only the agents' own RNGs advance.
/// Unsettled agents are skipped and do not consume randomness.
fn draw_actions<P: ActionPicker>(
    before: &Snapshot,
    ctx:    &ActionContext<'_>,
    picker: &P,
    rngs:   &mut AgentRngs,
) -> Vec<(AgentId, Action)> {
    #[cfg(not(feature = "parallel"))]
    {
        before
            .iter()
            .zip(rngs.inner.iter_mut())
            .filter(|(agent, _)| agent.is_settled())
            .map(|(agent, rng)| (agent.id, picker.pick(agent, ctx, rng)))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        before
            .agents()
            .par_iter()
            .zip(rngs.inner.par_iter_mut())
            .filter(|(agent, _)| agent.is_settled())
            .map(|(agent, rng)| (agent.id, picker.pick(agent, ctx, rng)))
            .collect()
    }
}

// ── Apply phase ───────────────────────────────────────────────────────────────

/// Apply `action` to `agent` (its copy in the next snapshot).
///
/// Legality is judged against `before`, the pre-pass snapshot.  `claimed`
/// holds the cells moved into earlier in this pass; a move into one of
/// them is refused.  A refused action leaves the agent idle.  Every
/// assignment resets animation progress to 0.
fn apply_action(
    agent:       &mut Agent,
    action:      Action,
    before:      &Snapshot,
    line_length: usize,
    claimed:     &mut CellSet,
) -> ActionOutcome {
    let mut applied = true;
    let mut interaction = None;
    let mut state = action.animation_state();

    match action {
        Action::MoveForward => {
            let target = forward_target(agent, line_length)
                .filter(|_| can_move_forward(agent, before, line_length));
            match target {
                Some(cell) if claimed.insert(cell) => agent.position = cell,
                _ => {
                    trace!(agent = %agent.id, position = agent.position, "move refused");
                    applied = false;
                }
            }
        }
        Action::TurnBodyLeft  => agent.body = agent.body.turned_left(),
        Action::TurnBodyRight => agent.body = agent.body.turned_right(),
        Action::TurnHeadLeft  => agent.head = agent.head.turned_left(),
        Action::TurnHeadRight => agent.head = agent.head.turned_right(),
        Action::Idle => {}
        Action::InitiateInteraction => {
            let result = interaction_result(agent, before);
            match result.kind {
                InteractionKind::MutualEmbrace => state = AnimationState::InteractingEmbrace,
                InteractionKind::UnilateralAttempt => {}
                InteractionKind::None => applied = false,
            }
            interaction = Some(result);
        }
    }

    agent.animation_state = if applied { state } else { AnimationState::Idle };
    agent.animation_progress = 0.0;

    ActionOutcome {
        agent: agent.id,
        action,
        applied,
        animation_state: agent.animation_state,
        interaction,
    }
}
