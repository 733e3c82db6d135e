//! `lt-core` — foundational types for the line-theater agent engine.
//!
//! This crate is a dependency of every other `lt-*` crate.  It has no `lt-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`orientation`] | `BodyOrientation`, `HeadOrientation`                  |
//! | [`stage`]       | Renderer-side layout helpers (line offsets, radians)  |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`error`]       | `LtError`, `LtResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod orientation;
pub mod rng;
pub mod stage;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{LtError, LtResult};
pub use ids::AgentId;
pub use orientation::{BodyOrientation, HeadOrientation};
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, SimConfig, Tick};
