//! Host-visible run state.

use std::fmt;

/// Where the host is in the run lifecycle.
///
/// ```text
///   Configuration ──start──▶ Running ◀──resume── Paused
///         ▲                     │  └────pause────▶ │
///         └──────stop/reset─────┴──────────────────┘
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SimulationState {
    /// No cast on stage; the host is collecting configuration.
    #[default]
    Configuration,
    Running,
    /// Cast kept, clock frozen; `tick` is a no-op.
    Paused,
}

impl fmt::Display for SimulationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SimulationState::Configuration => "configuration",
            SimulationState::Running       => "running",
            SimulationState::Paused        => "paused",
        })
    }
}
