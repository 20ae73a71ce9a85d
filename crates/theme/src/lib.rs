pub mod colors;
pub mod style;

pub use colors::Color;
pub use style::{SectionStyle, TrackStyle};

use segbar_config::{SectionConfig, ThemeConfig};

/// Compiled theme derived from [`ThemeConfig`].
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Calling [`Theme::from_config`] is infallible — invalid color strings fall
/// back to safe defaults.
#[derive(Debug, Clone)]
pub struct Theme {
    pub track:                TrackStyle,
    /// Default fills, cycled by section index.  Never empty.
    pub palette:              Vec<Color>,
    pub foreground:           Color,
    pub font_size:            f32,
    pub section_border_width: f32,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        let mut palette: Vec<Color> = cfg
            .palette
            .iter()
            .filter_map(|hex| {
                let color = Color::from_hex(hex);
                if color.is_none() {
                    tracing::warn!("Ignoring invalid palette color '{hex}'");
                }
                color
            })
            .collect();
        if palette.is_empty() {
            palette.push(Color::PURPLE);
        }

        Self {
            track: TrackStyle {
                background:   Color::from_hex(&cfg.background).unwrap_or(Color::DARK),
                track:        Color::from_hex(&cfg.track).unwrap_or(Color::SURFACE),
                border_color: Color::from_hex(&cfg.border_color).unwrap_or(Color::TRANSPARENT),
                border_width: cfg.border_width.max(0.0),
            },
            palette,
            foreground:           Color::from_hex(&cfg.foreground).unwrap_or(Color::WHITE),
            font_size:            cfg.font_size,
            section_border_width: cfg.section_border_width.max(0.0),
        }
    }

    /// Palette entry for `index`, wrapping around.  An emptied palette
    /// falls back to [`Color::PURPLE`].
    pub fn palette_color(&self, index: usize) -> Color {
        if self.palette.is_empty() {
            return Color::PURPLE;
        }
        self.palette[index % self.palette.len()]
    }

    /// Resolve a section's style: per-section overrides first, theme defaults second.
    pub fn section_style(&self, index: usize, section: &SectionConfig) -> SectionStyle {
        let parse = |hex: &Option<String>| hex.as_deref().and_then(Color::from_hex);

        SectionStyle {
            fill:         parse(&section.color).unwrap_or_else(|| self.palette_color(index)),
            border_color: parse(&section.border_color).unwrap_or(self.track.border_color),
            border_width: section.border_width.unwrap_or(self.section_border_width).max(0.0),
            label_color:  self.foreground,
            font_size:    self.font_size,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles_by_index() {
        let theme = Theme::default();
        let n = theme.palette.len();
        assert_eq!(theme.palette_color(0), theme.palette_color(n));
    }

    #[test]
    fn invalid_palette_falls_back() {
        let cfg = ThemeConfig {
            palette: vec!["nope".to_string()],
            ..ThemeConfig::default()
        };
        assert_eq!(Theme::from_config(&cfg).palette, vec![Color::PURPLE]);
    }

    #[test]
    fn emptied_palette_falls_back() {
        let mut theme = Theme::default();
        theme.palette.clear();
        let style = theme.section_style(0, &SectionConfig::default());
        assert_eq!(style.fill, Color::PURPLE);
        assert_eq!(theme.palette_color(7), Color::PURPLE);
    }

    #[test]
    fn section_overrides_win() {
        let theme = Theme::default();
        let section = SectionConfig {
            color: Some("#000000".to_string()),
            border_width: Some(2.0),
            ..SectionConfig::default()
        };
        let style = theme.section_style(3, &section);
        assert_eq!(style.fill, Color::from_hex("#000000").expect("hex"));
        assert_eq!(style.border_width, 2.0);
    }

    #[test]
    fn section_defaults_come_from_theme() {
        let theme = Theme::default();
        let style = theme.section_style(1, &SectionConfig::default());
        assert_eq!(style.fill, theme.palette_color(1));
        assert_eq!(style.label_color, theme.foreground);
    }
}
