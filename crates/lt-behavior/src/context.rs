//! Read-only pass state passed to every picker call.

use lt_agent::Snapshot;
use lt_core::Tick;

/// The state every agent decides against during one resolution pass.
///
/// Built once per pass by lt-sim and shared immutably across all picker
/// calls, so no agent sees another agent's post-pass state while deciding.
pub struct ActionContext<'a> {
    /// 1-based number of the pass being resolved.
    pub pass: u64,

    /// Host frame on which the pass runs.
    pub tick: Tick,

    /// Number of cells on the line.
    pub line_length: usize,

    /// The pre-pass snapshot.
    pub snapshot: &'a Snapshot,
}

impl<'a> ActionContext<'a> {
    #[inline]
    pub fn new(pass: u64, tick: Tick, line_length: usize, snapshot: &'a Snapshot) -> Self {
        Self { pass, tick, line_length, snapshot }
    }
}
