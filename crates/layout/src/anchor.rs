//! Positioning of section labels and images inside a section frame.

use segbar_core::{EdgeInsets, Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Where content sits inside its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    #[default]
    Center,
}

/// Horizontal pin: distance from the leading/trailing edge, or centred.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HorizontalAnchor {
    Leading(f32),
    Center,
    Trailing(f32),
}

/// Vertical pin: distance from the top/bottom edge, or centred.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VerticalAnchor {
    Top(f32),
    Center,
    Bottom(f32),
}

/// One pin per axis, produced by [`anchor_to_superview`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorSet {
    pub horizontal: HorizontalAnchor,
    pub vertical:   VerticalAnchor,
}

/// Map an alignment and its insets to a pair of pins.
///
/// Only the insets facing the pinned edges are used; a centred axis ignores
/// both of its insets.
pub fn anchor_to_superview(alignment: Alignment, insets: EdgeInsets) -> AnchorSet {
    use HorizontalAnchor as H;
    use VerticalAnchor as V;

    let (horizontal, vertical) = match alignment {
        Alignment::Left        => (H::Leading(insets.left), V::Center),
        Alignment::TopLeft     => (H::Leading(insets.left), V::Top(insets.top)),
        Alignment::Top         => (H::Center, V::Top(insets.top)),
        Alignment::TopRight    => (H::Trailing(insets.right), V::Top(insets.top)),
        Alignment::Right       => (H::Trailing(insets.right), V::Center),
        Alignment::BottomRight => (H::Trailing(insets.right), V::Bottom(insets.bottom)),
        Alignment::Bottom      => (H::Center, V::Bottom(insets.bottom)),
        Alignment::BottomLeft  => (H::Leading(insets.left), V::Bottom(insets.bottom)),
        Alignment::Center      => (H::Center, V::Center),
    };

    AnchorSet { horizontal, vertical }
}

impl AnchorSet {
    /// Offset of `content`'s origin relative to the container's origin.
    pub fn offset(&self, container: Size, content: Size) -> Point {
        let x = match self.horizontal {
            HorizontalAnchor::Leading(d)  => d,
            HorizontalAnchor::Center      => (container.width - content.width) / 2.0,
            HorizontalAnchor::Trailing(d) => container.width - content.width - d,
        };
        let y = match self.vertical {
            VerticalAnchor::Top(d)    => d,
            VerticalAnchor::Center    => (container.height - content.height) / 2.0,
            VerticalAnchor::Bottom(d) => container.height - content.height - d,
        };
        Point::new(x, y)
    }

    /// Absolute frame for `content` placed inside `container`.
    pub fn resolve(&self, container: Rect, content: Size) -> Rect {
        let offset = self.offset(container.size(), content);
        Rect::new(
            container.x + offset.x,
            container.y + offset.y,
            content.width.max(0.0),
            content.height.max(0.0),
        )
    }
}
