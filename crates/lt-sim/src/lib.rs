//! `lt-sim` — the action-resolution engine.
//!
//! # Tick loop
//!
//! ```text
//! host calls tick(delta) once per display frame:
//!   ① Clock     — advance the frame counter and accumulated time.
//!   ② Animate   — progress = min(1, progress + animation_rate) for every
//!                 agent; publish the result as a new snapshot.
//!   ③ If action_interval has elapsed since the last pass, resolve:
//!      a. Draw  — every settled agent asks the ActionPicker for an action,
//!                 against the snapshot from ② (parallel with `parallel`).
//!      b. Apply — in ascending id order, validate each action against that
//!                 same snapshot plus the cells claimed by earlier moves in
//!                 this pass, reset progress to 0, publish.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the draw phase on rayon's thread pool.            |
//! | `fx-hash`  | FxHash for the per-pass claimed-cell set.              |
//! | `serde`    | Serde derives on outcomes and run state.               |
//!
//! # Quick-start
//!
//! ```rust
//! use std::time::Duration;
//!
//! use lt_core::SimConfig;
//! use lt_sim::SimBuilder;
//!
//! let mut engine = SimBuilder::uniform(SimConfig::default())?.build()?;
//! engine.start()?;
//! for _ in 0..120 {
//!     engine.tick(Duration::from_millis(16));
//! }
//! let frame = engine.snapshot();
//! assert_eq!(frame.len(), 3);
//! # Ok::<(), lt_sim::SimError>(())
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod outcome;
pub mod state;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use engine::Engine;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use outcome::ActionOutcome;
pub use state::SimulationState;
