//! `lt-behavior` — how an eligible agent chooses its next action.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`action`]  | `Action` enum (the six baseline actions + `InitiateInteraction`) |
//! | [`context`] | `ActionContext<'a>` — read-only pass snapshot shared by all agents |
//! | [`picker`]  | `ActionPicker` trait                                            |
//! | [`uniform`] | `UniformPicker` — the default weighted-uniform draw             |
//! | [`idle`]    | `IdlePicker` — every agent always idles                         |
//! | [`error`]   | `BehaviorError`, `BehaviorResult<T>`                            |
//!
//! # Design notes
//!
//! A resolution pass in lt-sim has two phases:
//!
//! 1. **Draw phase**: for every settled agent, call `ActionPicker::pick`
//!    with the pre-pass snapshot and the agent's own RNG.  No mutation.
//!
//! 2. **Apply phase** (sequential, ascending id): validate each drawn
//!    action against the same snapshot, plus the cells already claimed by
//!    earlier moves in the pass, and write the result into the next
//!    snapshot.
//!
//! Pickers therefore only choose; legality is always re-checked by the
//! engine, so a picker may propose an illegal move.

pub mod action;
pub mod context;
pub mod error;
pub mod idle;
pub mod picker;
pub mod uniform;


pub use action::Action;
pub use context::ActionContext;
pub use error::{BehaviorError, BehaviorResult};
pub use idle::IdlePicker;
pub use picker::ActionPicker;
pub use uniform::UniformPicker;
