//! Fluent builder for constructing an [`Engine`].

use lt_agent::{AgentRngs, CharacterKind, Snapshot};
use lt_behavior::{ActionPicker, UniformPicker};
use lt_core::SimConfig;

use crate::{Engine, SimError, SimResult, SimulationState};

/// Fluent builder for [`Engine<P>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — line length, action interval, seed, animation rate, …
/// - `P: ActionPicker` — how settled agents choose their next action
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                              |
/// |---------------|--------------------------------------|
/// | `.cast(v)`    | `CharacterKind::ALL` (three agents)  |
///
/// The configuration is used as given.  Hosts that collect it from users
/// should call [`SimConfig::clamped`] first.
///
/// # Example
///
/// ```rust
/// use lt_behavior::IdlePicker;
/// use lt_core::SimConfig;
/// use lt_sim::{SimBuilder, SimulationState};
///
/// let engine = SimBuilder::new(SimConfig::default(), IdlePicker).build()?;
/// assert_eq!(engine.state(), SimulationState::Configuration);
/// # Ok::<(), lt_sim::SimError>(())
/// ```
pub struct SimBuilder<P: ActionPicker> {
    config: SimConfig,
    picker: P,
    cast:   Option<Vec<CharacterKind>>,
}

impl SimBuilder<UniformPicker> {
    /// Builder using the default picker, weighted by
    /// `config.interaction_weight`.
    pub fn uniform(config: SimConfig) -> SimResult<Self> {
        let picker = UniformPicker::new(config.interaction_weight)?;
        Ok(Self::new(config, picker))
    }
}

impl<P: ActionPicker> SimBuilder<P> {
    pub fn new(config: SimConfig, picker: P) -> Self {
        Self { config, picker, cast: None }
    }

    /// Replace the default three-character cast.
    pub fn cast(mut self, kinds: Vec<CharacterKind>) -> Self {
        self.cast = Some(kinds);
        self
    }

    /// Check the cast fits on the line and return an engine in the
    /// `Configuration` state.  Call [`Engine::start`] to place the cast.
    pub fn build(self) -> SimResult<Engine<P>> {
        let cast = self.cast.unwrap_or_else(|| CharacterKind::ALL.to_vec());
        check_config(&self.config, cast.len())?;

        Ok(Engine {
            clock:           self.config.make_clock(),
            line_length:     self.config.line_length,
            action_interval: self.config.action_interval(),
            animation_rate:  self.config.animation_rate,
            config:          self.config,
            state:           SimulationState::Configuration,
            snapshot:        Snapshot::empty(),
            rngs:            AgentRngs::new(0, 0),
            picker:          self.picker,
            cast,
        })
    }
}

/// Reject configurations the engine cannot run: a line shorter than the
/// cast, a zero action interval, or an animation rate outside `(0, 1]`.
///
/// Checked by [`SimBuilder::build`] and again by every `start`, since the
/// host may edit `Engine::config` between runs.
pub(crate) fn check_config(config: &SimConfig, agents: usize) -> SimResult<()> {
    if agents > config.line_length {
        return Err(SimError::LineTooShort { line_length: config.line_length, agents });
    }
    if config.action_interval_ms == 0 {
        return Err(SimError::Config("action interval must be positive".into()));
    }
    if !(config.animation_rate > 0.0 && config.animation_rate <= 1.0) {
        return Err(SimError::Config(format!(
            "animation rate must be in (0, 1], got {}",
            config.animation_rate
        )));
    }
    Ok(())
}
