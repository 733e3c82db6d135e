//! Stage layout helpers for renderers.
//!
//! The engine only knows integer cells.  A renderer lays the line out along
//! one axis, centered on the origin, with a fixed spacing between cells.
//! These helpers keep every renderer agreeing on that mapping.

/// Distance between adjacent cells in renderer units.
pub const DEFAULT_SPACING: f32 = 0.8;

/// Offset of the first cell so the whole line is centered on the origin.
#[inline]
pub fn line_start(line_length: usize, spacing: f32) -> f32 {
    -(line_length.saturating_sub(1) as f32) * spacing / 2.0
}

/// Renderer-space offset of `position` along the line.
#[inline]
pub fn line_offset(position: usize, line_length: usize, spacing: f32) -> f32 {
    line_start(line_length, spacing) + position as f32 * spacing
}

/// Linear interpolation between two renderer values, `t` clamped to [0, 1].
///
/// Renderers use this with an agent's animation progress to tween between
/// the pre-action and post-action pose.
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t.clamp(0.0, 1.0)
}
