//! Frame layout for the sectioned progress bar.
//!
//! Everything here is a pure function of its arguments: the host hands in a
//! fresh [`GeometryConfig`] and a snapshot of section fractions on every pass
//! and receives a [`LayoutResult`] to assign to its views. Nothing is cached,
//! so calling a layout function twice with the same input is always safe
//! (animation ticks re-run it with interpolated input).

pub mod anchor;
pub mod engine;

pub use anchor::{anchor_to_superview, Alignment, AnchorSet, HorizontalAnchor, VerticalAnchor};
pub use engine::{corner_radius, layout, section_frame, track_corner_radius, track_frame};

use segbar_core::Rect;
use serde::{Deserialize, Serialize};

/// Edge style of the outer shape and the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    /// Pill shaped: fully rounded ends unless a radius is given.
    #[default]
    Round,
    /// Flat ends, inset on all four sides.
    Square,
    /// Flat ends, inset on top and bottom only so the track spans the full width.
    Butt,
}

/// Geometry snapshot supplied by the host for a single layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeometryConfig {
    /// Outer bounds of the whole bar.
    pub bounds: Rect,
    /// Distance between the outer bounds and the track.
    pub inset: f32,
    pub line_cap: LineCap,
    /// Requested outer corner radius; `0` picks the automatic radius.
    pub corner_radius: f32,
}

impl GeometryConfig {
    pub fn new(bounds: Rect) -> Self {
        Self { bounds, ..Self::default() }
    }

    #[must_use]
    pub fn with_inset(mut self, inset: f32) -> Self {
        self.inset = inset;
        self
    }

    #[must_use]
    pub fn with_line_cap(mut self, line_cap: LineCap) -> Self {
        self.line_cap = line_cap;
        self
    }

    #[must_use]
    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }
}

/// Output of one layout pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutResult {
    pub track_frame:         Rect,
    /// One frame per section, in index (left-to-right) order.
    pub section_frames:      Vec<Rect>,
    pub outer_corner_radius: f32,
    pub track_corner_radius: f32,
}

impl LayoutResult {
    /// Total width occupied by all sections.
    pub fn filled_width(&self) -> f32 {
        self.section_frames.iter().map(|f| f.width).sum()
    }

    /// Index of the section whose frame contains `point`, if any.
    pub fn section_at(&self, point: segbar_core::Point) -> Option<usize> {
        self.section_frames.iter().position(|f| f.contains(point))
    }
}
