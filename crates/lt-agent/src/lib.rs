//! `lt-agent` — the agent model of the line-theater engine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                     |
//! |-----------------|--------------------------------------------------------------|
//! | [`agent`]       | `Agent`, `CharacterKind`, `AnimationState`                   |
//! | [`snapshot`]    | `Snapshot` — immutable, versioned view of every agent        |
//! | [`predicates`]  | Pure legality queries (`can_move_forward`, …)                |
//! | [`interaction`] | `InteractionResult`, `InteractionKind`                       |
//! | [`store`]       | `AgentRngs` (per-agent RNG, kept apart from the snapshot)    |
//! | [`builder`]     | `CastBuilder` (initial population)                           |
//!
//! Nothing in this crate mutates a published snapshot.  The engine in
//! `lt-sim` copies the agent slice, edits the copy, and publishes it as the
//! next snapshot.

pub mod agent;
pub mod builder;
pub mod interaction;
pub mod predicates;
pub mod snapshot;
pub mod store;


pub use agent::{Agent, AnimationState, CharacterKind};
pub use builder::{CastBuilder, initial_positions};
pub use interaction::{InteractionKind, InteractionResult};
pub use predicates::Neighbors;
pub use snapshot::Snapshot;
pub use store::AgentRngs;
