use segbar_core::{EdgeInsets, Rect};
use segbar_layout::{Alignment, GeometryConfig, LineCap};
use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `segbar.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SegbarConfig {
    /// Outer size of the bar.
    pub global: GlobalConfig,
    /// Track inset, cap style and corner radius.
    pub geometry: GeometrySettings,
    /// Fractional or step-based progress.
    pub progress: ProgressSettings,
    /// Sections in left-to-right order.
    pub sections: Vec<SectionConfig>,
    /// Theme / visual settings.
    pub theme: ThemeConfig,
}

impl Default for SegbarConfig {
    fn default() -> Self {
        Self {
            global:   GlobalConfig::default(),
            geometry: GeometrySettings::default(),
            progress: ProgressSettings::default(),
            sections: vec![SectionConfig::default(), SectionConfig::default()],
            theme:    ThemeConfig::default(),
        }
    }
}

/// Outer bar size in logical pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    pub width:  f32,
    pub height: f32,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            width:  320.0,
            height: 12.0,
        }
    }
}

impl GlobalConfig {
    /// Outer bounds anchored at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Geometry knobs; combined with the bounds into a [`GeometryConfig`] each pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometrySettings {
    pub inset: f32,
    pub line_cap: LineCap,
    /// `0` = automatic (pill for round caps).
    pub corner_radius: f32,
}

impl Default for GeometrySettings {
    fn default() -> Self {
        Self {
            inset:         0.0,
            line_cap:      LineCap::Round,
            corner_radius: 0.0,
        }
    }
}

impl GeometrySettings {
    pub fn to_geometry(&self, bounds: Rect) -> GeometryConfig {
        GeometryConfig::new(bounds)
            .with_inset(self.inset)
            .with_line_cap(self.line_cap)
            .with_corner_radius(self.corner_radius)
    }
}

/// How progress values are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProgressMode {
    /// Each section holds a fraction; capacity is `1.0`.
    #[default]
    Fractional,
    /// Each section holds whole steps out of `total_steps`.
    Steps,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressSettings {
    pub mode: ProgressMode,
    /// Capacity in `steps` mode; ignored for fractional progress.
    pub total_steps: i32,
}

impl Default for ProgressSettings {
    fn default() -> Self {
        Self {
            mode:        ProgressMode::Fractional,
            total_steps: 10,
        }
    }
}

/// Config block for a single section.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SectionConfig {
    /// Optional text drawn inside the section.
    pub label: Option<String>,
    pub label_alignment: Alignment,
    pub label_insets: EdgeInsets,
    /// Optional image name resolved by the host.
    pub image: Option<String>,
    pub image_alignment: Alignment,
    pub image_insets: EdgeInsets,
    /// Fill colour override (hex); falls back to the theme palette.
    pub color: Option<String>,
    /// Border colour override (hex).
    pub border_color: Option<String>,
    /// Border width override in logical pixels.
    pub border_width: Option<f32>,
    /// Initial share of the whole bar, `0.0 – 1.0`. Rounded down to whole
    /// steps in `steps` mode.
    pub progress: f32,
    /// Per-section step budget in `steps` mode.
    pub max_steps: Option<i32>,
}

/// Theme / styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Outer shape background colour (hex, e.g. `"#1e1e2e"`).
    pub background: String,
    /// Track (unfilled area) colour.
    pub track: String,
    /// Default section fill colours, cycled by section index.
    pub palette: Vec<String>,
    /// Label text colour.
    pub foreground: String,
    /// Label font size in points.
    pub font_size: f32,
    /// Outer border colour.
    pub border_color: String,
    /// Outer border width (pixels); `0` = no border.
    pub border_width: f32,
    /// Default section border width (pixels).
    pub section_border_width: f32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background:   "#1e1e2e".to_string(), // Catppuccin Mocha — base
            track:        "#313244".to_string(), // Catppuccin Mocha — surface0
            palette: vec![
                "#cba6f7".to_string(), // mauve
                "#89b4fa".to_string(), // blue
                "#a6e3a1".to_string(), // green
                "#f9e2af".to_string(), // yellow
            ],
            foreground:   "#cdd6f4".to_string(), // Catppuccin Mocha — text
            font_size:    11.0,
            border_color: "#45475a".to_string(), // Catppuccin Mocha — surface1
            border_width: 0.0,
            section_border_width: 0.0,
        }
    }
}
