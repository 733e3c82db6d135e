//! The per-character record.

use std::fmt;

use lt_core::{AgentId, BodyOrientation, HeadOrientation};

// ── CharacterKind ─────────────────────────────────────────────────────────────

/// Archetype of a character.  A rendering hint only; the engine treats every
/// kind identically.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CharacterKind {
    YoungWoman,
    BoyGlasses,
    BoyAfro,
}

impl CharacterKind {
    /// The default cast, in id order.
    pub const ALL: [CharacterKind; 3] = [
        CharacterKind::YoungWoman,
        CharacterKind::BoyGlasses,
        CharacterKind::BoyAfro,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CharacterKind::YoungWoman => "young_woman",
            CharacterKind::BoyGlasses => "boy_glasses",
            CharacterKind::BoyAfro    => "boy_afro",
        }
    }

    /// Placeholder display color, as a CSS hex string.
    pub fn color(self) -> &'static str {
        match self {
            CharacterKind::YoungWoman => "#ff6b9d",
            CharacterKind::BoyGlasses => "#4ecdc4",
            CharacterKind::BoyAfro    => "#45b7d1",
        }
    }
}

impl fmt::Display for CharacterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── AnimationState ────────────────────────────────────────────────────────────

/// What the agent is currently animating.  Descriptive only; consumed by
/// renderers.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AnimationState {
    #[default]
    Idle,
    Walking,
    TurningBody,
    TurningHead,
    InteractingEmbrace,
    InteractingAttempt,
}

impl AnimationState {
    pub fn as_str(self) -> &'static str {
        match self {
            AnimationState::Idle               => "idle",
            AnimationState::Walking            => "walking",
            AnimationState::TurningBody        => "turning_body",
            AnimationState::TurningHead        => "turning_head",
            AnimationState::InteractingEmbrace => "interacting_embrace",
            AnimationState::InteractingAttempt => "interacting_attempt",
        }
    }
}

impl fmt::Display for AnimationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// One character on the line.
///
/// `Agent` is a small `Copy` value.  Snapshots hold them in an `Arc<[Agent]>`
/// and the engine builds the next snapshot from a copied `Vec<Agent>`, so no
/// reader ever sees a half-applied pass.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id: AgentId,
    pub kind: CharacterKind,

    /// Cell index in `[0, line_length)`.  Unique among agents.
    pub position: usize,

    pub body: BodyOrientation,

    /// Relative to `body`.
    pub head: HeadOrientation,

    pub animation_state: AnimationState,

    /// In `[0, 1]`.  1 means settled and eligible for a new action.
    pub animation_progress: f32,
}

impl Agent {
    /// A settled agent with its head forward.
    pub fn new(id: AgentId, kind: CharacterKind, position: usize, body: BodyOrientation) -> Self {
        Self {
            id,
            kind,
            position,
            body,
            head: HeadOrientation::Forward,
            animation_state: AnimationState::Idle,
            animation_progress: 1.0,
        }
    }

    /// `true` once the current animation has completed.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.animation_progress >= 1.0
    }

    #[inline]
    pub fn color(&self) -> &'static str {
        self.kind.color()
    }

    pub fn with_head(mut self, head: HeadOrientation) -> Self {
        self.head = head;
        self
    }

    pub fn with_progress(mut self, progress: f32) -> Self {
        self.animation_progress = progress;
        self
    }
}
