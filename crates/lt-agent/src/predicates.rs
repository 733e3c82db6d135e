//! Pure legality queries over a set of agents.
//!
//! Every function here is total: positions off the line, agents facing
//! across it, or empty slices simply answer "no" / `None`.  Nothing here
//! mutates, so the engine can evaluate all agents of a pass against the same
//! pre-pass snapshot.

use crate::{Agent, InteractionKind, InteractionResult};

/// The agents, if any, directly beside `agent`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Neighbors<'a> {
    /// Agent at `position - 1`.
    pub left: Option<&'a Agent>,
    /// Agent at `position + 1`.
    pub right: Option<&'a Agent>,
}

/// The agent occupying `position`, if any.
pub fn agent_at(agents: &[Agent], position: usize) -> Option<&Agent> {
    agents.iter().find(|a| a.position == position)
}

pub fn is_occupied(agents: &[Agent], position: usize) -> bool {
    agents.iter().any(|a| a.position == position)
}

pub fn neighbors<'a>(agents: &'a [Agent], agent: &Agent) -> Neighbors<'a> {
    let beside = |position: Option<usize>| {
        position
            .and_then(|p| agent_at(agents, p))
            .filter(|other| other.id != agent.id)
    };
    Neighbors {
        left:  beside(agent.position.checked_sub(1)),
        right: beside(agent.position.checked_add(1)),
    }
}

/// Cell one forward step would reach, or `None` if the body faces across
/// the line or the step leaves `[0, line_length)`.
pub fn forward_target(agent: &Agent, line_length: usize) -> Option<usize> {
    let step = agent.body.step()?;
    let target = agent.position.checked_add_signed(step)?;
    (target < line_length).then_some(target)
}

/// Body along the line, head forward, target in bounds and unoccupied.
pub fn can_move_forward(agent: &Agent, agents: &[Agent], line_length: usize) -> bool {
    if !agent.head.is_forward() {
        return false;
    }
    match forward_target(agent, line_length) {
        Some(target) => !is_occupied(agents, target),
        None => false,
    }
}

/// The adjacent agent whose body faces `agent`'s body, ignoring heads.
///
/// Right neighbor: `agent` faces 90° and the neighbor 270°.  Left neighbor:
/// `agent` faces 270° and the neighbor 90°.
pub fn interaction_partner<'a>(agent: &Agent, agents: &'a [Agent]) -> Option<&'a Agent> {
    use lt_core::BodyOrientation::{Deg90, Deg270};

    let near = neighbors(agents, agent);
    let facing_right = near
        .right
        .filter(|other| agent.body == Deg90 && other.body == Deg270);
    let facing_left = near
        .left
        .filter(|other| agent.body == Deg270 && other.body == Deg90);
    facing_right.or(facing_left)
}

/// Head forward and a facing neighbor exists.
pub fn can_initiate_interaction(agent: &Agent, agents: &[Agent]) -> bool {
    agent.head.is_forward() && interaction_partner(agent, agents).is_some()
}

/// What an interaction started by `agent` would amount to.
///
/// `MutualEmbrace` when the partner could initiate back (its head is also
/// forward), `UnilateralAttempt` when only `agent` can, `None` when `agent`
/// cannot initiate at all.
pub fn interaction_result(agent: &Agent, agents: &[Agent]) -> InteractionResult {
    if !agent.head.is_forward() {
        return InteractionResult::none();
    }
    match interaction_partner(agent, agents) {
        Some(partner) if can_initiate_interaction(partner, agents) => InteractionResult {
            kind:   InteractionKind::MutualEmbrace,
            agents: vec![agent.id, partner.id],
        },
        Some(partner) => InteractionResult {
            kind:   InteractionKind::UnilateralAttempt,
            agents: vec![agent.id, partner.id],
        },
        None => InteractionResult::none(),
    }
}

/// `true` when no two agents share a cell and all sit on the line.
pub fn is_valid_layout(agents: &[Agent], line_length: usize) -> bool {
    let mut seen = vec![false; line_length];
    for agent in agents {
        match seen.get_mut(agent.position) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}
