use segbar_config::SectionConfig;
use segbar_core::{EdgeInsets, Rect, Size};
use segbar_layout::{anchor_to_superview, Alignment};
use segbar_theme::{SectionStyle, Theme};
use serde::{Deserialize, Serialize};

/// Text drawn inside a section.
///
/// `size` is the measured text size; measuring is the host's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionLabel {
    pub text:      String,
    pub size:      Size,
    pub alignment: Alignment,
    pub insets:    EdgeInsets,
}

/// Image drawn inside a section, referenced by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionImage {
    pub name:      String,
    pub size:      Size,
    pub alignment: Alignment,
    pub insets:    EdgeInsets,
}

/// Everything a bar needs to know about one section besides its progress.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Section {
    pub label: Option<SectionLabel>,
    pub image: Option<SectionImage>,
    pub style: SectionStyle,
}

impl Section {
    pub fn new(style: SectionStyle) -> Self {
        Self {
            label: None,
            image: None,
            style,
        }
    }

    #[must_use]
    pub fn with_label(mut self, text: impl Into<String>, size: Size, alignment: Alignment) -> Self {
        self.label = Some(SectionLabel {
            text: text.into(),
            size,
            alignment,
            insets: EdgeInsets::ZERO,
        });
        self
    }

    #[must_use]
    pub fn with_image(mut self, name: impl Into<String>, size: Size, alignment: Alignment) -> Self {
        self.image = Some(SectionImage {
            name: name.into(),
            size,
            alignment,
            insets: EdgeInsets::ZERO,
        });
        self
    }

    /// Build from a `[[sections]]` entry.
    ///
    /// Text is sized with a rough monospace estimate (0.6 em per char) and
    /// images are square at the font size; hosts with real measurement
    /// should build sections themselves.
    pub fn from_config(index: usize, cfg: &SectionConfig, theme: &Theme) -> Self {
        let style = theme.section_style(index, cfg);
        let em = style.font_size;

        let label = cfg.label.as_ref().map(|text| SectionLabel {
            size: Size::new(text.chars().count() as f32 * em * 0.6, em),
            text: text.clone(),
            alignment: cfg.label_alignment,
            insets: cfg.label_insets,
        });
        let image = cfg.image.as_ref().map(|name| SectionImage {
            name: name.clone(),
            size: Size::new(em, em),
            alignment: cfg.image_alignment,
            insets: cfg.image_insets,
        });

        Self { label, image, style }
    }

    /// Label frame inside `frame`; `None` without a label or for an empty section.
    pub fn label_frame(&self, frame: Rect) -> Option<Rect> {
        let label = self.label.as_ref()?;
        place(frame, label.alignment, label.insets, label.size)
    }

    /// Image frame inside `frame`; `None` without an image or for an empty section.
    pub fn image_frame(&self, frame: Rect) -> Option<Rect> {
        let image = self.image.as_ref()?;
        place(frame, image.alignment, image.insets, image.size)
    }
}

fn place(frame: Rect, alignment: Alignment, insets: EdgeInsets, size: Size) -> Option<Rect> {
    if frame.is_empty() {
        return None;
    }
    Some(anchor_to_superview(alignment, insets).resolve(frame, size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_section_hides_label() {
        let section = Section::default().with_label("50%", Size::new(20.0, 10.0), Alignment::Center);
        assert_eq!(section.label_frame(Rect::new(0.0, 0.0, 0.0, 10.0)), None);
    }

    #[test]
    fn label_is_centred_by_default() {
        let section = Section::default().with_label("50%", Size::new(20.0, 10.0), Alignment::Center);
        let frame = section.label_frame(Rect::new(10.0, 0.0, 100.0, 20.0));
        assert_eq!(frame, Some(Rect::new(50.0, 5.0, 20.0, 10.0)));
    }

    #[test]
    fn no_image_means_no_frame() {
        assert_eq!(Section::default().image_frame(Rect::new(0.0, 0.0, 10.0, 10.0)), None);
    }

    #[test]
    fn config_fields_carry_over() {
        let cfg = SectionConfig {
            label: Some("abc".to_string()),
            label_alignment: Alignment::Right,
            image: Some("tick".to_string()),
            ..SectionConfig::default()
        };
        let section = Section::from_config(0, &cfg, &Theme::default());
        let label = section.label.expect("label");
        assert_eq!(label.text, "abc");
        assert_eq!(label.alignment, Alignment::Right);
        assert_eq!(section.image.map(|i| i.name).as_deref(), Some("tick"));
    }
}
