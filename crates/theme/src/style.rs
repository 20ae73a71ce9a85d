use crate::colors::Color;
use serde::{Deserialize, Serialize};

/// Visual settings for the outer shape and the track behind the sections.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackStyle {
    pub background:   Color,
    pub track:        Color,
    pub border_color: Color,
    /// `0` = no border.
    pub border_width: f32,
}

/// Per-section visual settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionStyle {
    pub fill:         Color,
    pub border_color: Color,
    pub border_width: f32,
    pub label_color:  Color,
    pub font_size:    f32,
}

impl Default for SectionStyle {
    fn default() -> Self {
        Self {
            fill:         Color::PURPLE,
            border_color: Color::TRANSPARENT,
            border_width: 0.0,
            label_color:  Color::WHITE,
            font_size:    11.0,
        }
    }
}
