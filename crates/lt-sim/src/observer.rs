//! Observer trait for renderers, progress reporting and data collection.

use lt_agent::Snapshot;
use lt_core::Tick;

use crate::ActionOutcome;

/// Callbacks invoked by [`Engine::tick_with`][crate::Engine::tick_with] and
/// [`Engine::resolve_now`][crate::Engine::resolve_now].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers only ever see published
/// snapshots; they cannot mutate agents.
///
/// # Example — move counter
///
/// ```rust
/// use lt_sim::{ActionOutcome, SimObserver};
///
/// #[derive(Default)]
/// struct MoveCounter { moves: usize }
///
/// impl SimObserver for MoveCounter {
///     fn on_action(&mut self, _pass: u64, outcome: &ActionOutcome) {
///         if outcome.applied && outcome.action == lt_behavior::Action::MoveForward {
///             self.moves += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once per agent per resolution pass, in ascending id order,
    /// right after that agent's action was applied.
    fn on_action(&mut self, _pass: u64, _outcome: &ActionOutcome) {}

    /// Called after a resolution pass has been published.
    fn on_resolution(&mut self, _pass: u64, _outcomes: &[ActionOutcome], _snapshot: &Snapshot) {}

    /// Called at the end of every tick that ran while `Running`.
    ///
    /// `snapshot` is the frame a renderer should draw.
    fn on_tick_end(&mut self, _tick: Tick, _snapshot: &Snapshot) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
