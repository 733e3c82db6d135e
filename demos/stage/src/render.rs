//! Text renderer: one line of ASCII per resolution pass.

use lt_agent::{Agent, AnimationState, Snapshot};
use lt_core::stage::{DEFAULT_SPACING, lerp, line_offset};
use lt_core::{BodyOrientation, Tick};
use lt_sim::{ActionOutcome, SimObserver};

/// Prints the line after every resolution pass and tracks what the
/// renderer would tween toward between passes.
pub struct TextStage {
    line_length: usize,
    passes:      u64,
    moves:       usize,
    embraces:    usize,
    attempts:    usize,
    /// Renderer-space x per agent at the last drawn frame.
    pub xs:      Vec<f32>,
    /// x each agent was at when its current action was assigned.
    from:        Vec<f32>,
}

impl TextStage {
    pub fn new(line_length: usize) -> Self {
        Self {
            line_length,
            passes: 0,
            moves: 0,
            embraces: 0,
            attempts: 0,
            xs: Vec::new(),
            from: Vec::new(),
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{} passes, {} moves, {} embraces, {} attempts",
            self.passes, self.moves, self.embraces, self.attempts
        )
    }

    fn glyph(agent: &Agent) -> char {
        match agent.body {
            BodyOrientation::Deg90  => '>',
            BodyOrientation::Deg270 => '<',
            BodyOrientation::Deg0   => '^',
            BodyOrientation::Deg180 => 'v',
        }
    }

    fn draw(&self, snapshot: &Snapshot) -> String {
        let mut cells = vec!['.'; self.line_length];
        for agent in snapshot.iter() {
            if let Some(cell) = cells.get_mut(agent.position) {
                *cell = Self::glyph(agent);
            }
        }
        cells.into_iter().collect()
    }
}

impl SimObserver for TextStage {
    fn on_action(&mut self, _pass: u64, outcome: &ActionOutcome) {
        let i = outcome.agent.index();
        if let (Some(from), Some(&x)) = (self.from.get_mut(i), self.xs.get(i)) {
            *from = x;
        }
        if !outcome.applied {
            return;
        }
        match outcome.animation_state {
            AnimationState::Walking            => self.moves += 1,
            AnimationState::InteractingEmbrace => self.embraces += 1,
            AnimationState::InteractingAttempt => self.attempts += 1,
            _ => {}
        }
    }

    fn on_resolution(&mut self, pass: u64, outcomes: &[ActionOutcome], snapshot: &Snapshot) {
        self.passes = pass;
        let actions: Vec<String> = outcomes
            .iter()
            .map(|o| format!("{}:{}", o.agent, o.action))
            .collect();
        println!("#{pass:<4} [{}]  {}", self.draw(snapshot), actions.join(" "));
    }

    /// Tween each agent from where its action started toward its cell.
    fn on_tick_end(&mut self, _tick: Tick, snapshot: &Snapshot) {
        let line_length = self.line_length;
        let targets = snapshot
            .iter()
            .map(|agent| line_offset(agent.position, line_length, DEFAULT_SPACING));
        if self.xs.len() != snapshot.len() {
            self.xs = targets.collect();
            self.from = self.xs.clone();
            return;
        }
        for ((x, from), (agent, target)) in self
            .xs
            .iter_mut()
            .zip(&self.from)
            .zip(snapshot.iter().zip(targets))
        {
            *x = lerp(*from, target, agent.animation_progress);
        }
    }
}
