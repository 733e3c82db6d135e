//! Builder for the initial cast: `Snapshot` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use lt_agent::CastBuilder;
//!
//! let (snapshot, rngs) = CastBuilder::new(10, /*seed=*/ 42).build().unwrap();
//!
//! assert_eq!(snapshot.len(), 3);
//! assert_eq!(rngs.len(), 3);
//! assert!(snapshot.iter().all(|a| a.is_settled()));
//! ```

use lt_core::{AgentId, BodyOrientation, LtError, LtResult, SimRng};

use crate::{Agent, AgentRngs, CharacterKind, Snapshot};

/// Builds the cast that a run starts with.
///
/// Agents are spread evenly across the line, face a random body orientation
/// with the head forward, and start settled (`animation_progress = 1`) so
/// they are all eligible in the first resolution pass.
pub struct CastBuilder {
    line_length: usize,
    seed: u64,
    kinds: Vec<CharacterKind>,
}

impl CastBuilder {
    /// A builder for the default three-character cast.
    pub fn new(line_length: usize, seed: u64) -> Self {
        Self {
            line_length,
            seed,
            kinds: CharacterKind::ALL.to_vec(),
        }
    }

    /// Replace the cast.  Agent `i` gets `kinds[i]`.
    pub fn kinds(mut self, kinds: Vec<CharacterKind>) -> Self {
        self.kinds = kinds;
        self
    }

    /// Place the cast and seed one RNG per agent.
    ///
    /// Fails only when the line has fewer cells than the cast has members.
    pub fn build(self) -> LtResult<(Snapshot, AgentRngs)> {
        let positions = initial_positions(self.line_length, self.kinds.len()).ok_or_else(|| {
            LtError::Config(format!(
                "line of {} cells cannot seat {} agents",
                self.line_length,
                self.kinds.len()
            ))
        })?;

        let mut rng = SimRng::new(self.seed);
        let agents = self
            .kinds
            .iter()
            .zip(positions)
            .enumerate()
            .map(|(i, (&kind, position))| {
                let id = AgentId::try_from(i)
                    .map_err(|_| LtError::Config(format!("agent index {i} does not fit an AgentId")))?;
                let body = rng
                    .choose(&BodyOrientation::ALL)
                    .copied()
                    .unwrap_or_default();
                Ok(Agent::new(id, kind, position, body))
            })
            .collect::<LtResult<Vec<_>>>()?;

        let rngs = AgentRngs::new(agents.len(), self.seed);
        Ok((Snapshot::new(agents), rngs))
    }
}

/// Evenly spaced, distinct starting cells for `count` agents.
///
/// Agent `i` aims for `round((i + 1) * line_length / (count + 1))`, which for
/// three agents is a quarter, half and three quarters of the way along.
/// The target is clamped to the line; if it is already taken the agent
/// takes the nearest free cell above it, or failing that below it.
///
/// Returns `None` if `count > line_length`.
pub fn initial_positions(line_length: usize, count: usize) -> Option<Vec<usize>> {
    if count > line_length {
        return None;
    }
    let mut taken = vec![false; line_length];
    let mut positions = Vec::with_capacity(count);
    for i in 0..count {
        // round(x) for x = (i+1)·L/(count+1), in integers.
        let ideal = (2 * (i + 1) * line_length + (count + 1)) / (2 * (count + 1));
        let ideal = ideal.min(line_length - 1);
        let free = (ideal..line_length)
            .chain((0..ideal).rev())
            .find(|&p| !taken[p])?;
        taken[free] = true;
        positions.push(free);
    }
    Some(positions)
}
