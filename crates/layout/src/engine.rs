use crate::{GeometryConfig, LayoutResult, LineCap};
use segbar_core::{EdgeInsets, Rect};
use tracing::trace;

/// Frame of the track inside `outer`.
///
/// `Butt` keeps the track flush with the outer left/right edges and only
/// applies `inset` vertically; the other caps inset all four sides.
pub fn track_frame(outer: Rect, inset: f32, line_cap: LineCap) -> Rect {
    let inset = finite_or_zero(inset);
    let insets = match line_cap {
        LineCap::Butt => EdgeInsets::vertical(inset),
        LineCap::Round | LineCap::Square => EdgeInsets::uniform(inset),
    };
    outer.inset_by(insets)
}

/// Frame for section `index` given the frames already computed for the
/// sections before it.
///
/// The origin follows the *actual* widths in `frames[..index]` rather than
/// their target progress, so sections that have not caught up yet (mid
/// animation) still tile without gaps or overlap.
pub fn section_frame(track: Rect, index: usize, frames: &[Rect], progress: f32) -> Rect {
    let offset: f32 = frames.iter().take(index).map(|f| f.width).sum();
    let width = track.width.max(0.0) * unit_fraction(progress);

    Rect::new(track.x + offset, track.y, width, track.height.max(0.0))
}

/// Outer corner radius for the given cap style.
pub fn corner_radius(outer: Rect, line_cap: LineCap, requested: f32) -> f32 {
    match line_cap {
        LineCap::Round if requested != 0.0 && requested.is_finite() => requested,
        LineCap::Round => half_height(outer),
        LineCap::Square | LineCap::Butt => 0.0,
    }
}

/// Track corner radius, scaled so the inset track's curvature matches the
/// outer shape.
///
/// An explicit outer radius is multiplied by `track.height / outer.height`;
/// the automatic (pill) radius is simply half the track height.
pub fn track_corner_radius(outer: Rect, track: Rect, line_cap: LineCap, requested_outer: f32) -> f32 {
    match line_cap {
        LineCap::Round if requested_outer != 0.0 && requested_outer.is_finite() => {
            if outer.height > 0.0 {
                requested_outer * (track.height.max(0.0) / outer.height)
            } else {
                0.0
            }
        }
        LineCap::Round => half_height(track),
        LineCap::Square | LineCap::Butt => 0.0,
    }
}

/// Run a full pass: track, every section left to right, and both radii.
///
/// `fractions[i]` is section `i`'s share of the track width.
pub fn layout(config: &GeometryConfig, fractions: &[f32]) -> LayoutResult {
    let track = track_frame(config.bounds, config.inset, config.line_cap);

    let mut section_frames = Vec::with_capacity(fractions.len());
    for (index, &fraction) in fractions.iter().enumerate() {
        let frame = section_frame(track, index, &section_frames, fraction);
        section_frames.push(frame);
    }

    trace!(
        sections = section_frames.len(),
        track_width = track.width,
        "layout pass"
    );

    LayoutResult {
        track_frame: track,
        section_frames,
        outer_corner_radius: corner_radius(config.bounds, config.line_cap, config.corner_radius),
        track_corner_radius: track_corner_radius(
            config.bounds,
            track,
            config.line_cap,
            config.corner_radius,
        ),
    }
}

fn half_height(rect: Rect) -> f32 {
    if rect.height > 0.0 {
        rect.height / 2.0
    } else {
        0.0
    }
}

fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Clamp to `[0, 1]`; NaN and infinities collapse to a zero-width section.
fn unit_fraction(progress: f32) -> f32 {
    if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn butt_cap_insets_vertically_only() {
        let outer = Rect::new(0.0, 0.0, 200.0, 20.0);
        let track = track_frame(outer, 3.0, LineCap::Butt);
        assert_eq!(track, Rect::new(0.0, 3.0, 200.0, 14.0));
    }

    #[test]
    fn round_and_square_inset_all_sides() {
        let outer = Rect::new(0.0, 0.0, 200.0, 20.0);
        let expected = Rect::new(3.0, 3.0, 194.0, 14.0);
        assert_eq!(track_frame(outer, 3.0, LineCap::Round), expected);
        assert_eq!(track_frame(outer, 3.0, LineCap::Square), expected);
    }

    #[test]
    fn section_follows_preceding_frames() {
        let track = Rect::new(10.0, 20.0, 30.0, 40.0);
        let preceding = [Rect::new(10.0, 20.0, 12.0, 40.0)];
        let frame = section_frame(track, 1, &preceding, 0.2);
        assert!(approx(frame.x, 22.0));
        assert!(approx(frame.y, 20.0));
        assert!(approx(frame.width, 6.0));
        assert!(approx(frame.height, 40.0));
    }

    #[test]
    fn section_frame_ignores_frames_at_or_after_index() {
        let track = Rect::new(0.0, 0.0, 100.0, 10.0);
        let frames = [
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(10.0, 0.0, 50.0, 10.0),
        ];
        assert_eq!(section_frame(track, 1, &frames, 0.5).x, 10.0);
    }

    #[test]
    fn section_frame_is_idempotent() {
        let track = Rect::new(1.5, 2.5, 333.3, 17.0);
        let frames = [Rect::new(1.5, 2.5, 41.7, 17.0)];
        let a = section_frame(track, 1, &frames, 0.37);
        let b = section_frame(track, 1, &frames, 0.37);
        assert_eq!(a.x.to_bits(), b.x.to_bits());
        assert_eq!(a.width.to_bits(), b.width.to_bits());
    }

    #[test]
    fn invalid_progress_yields_zero_width() {
        let track = Rect::new(0.0, 0.0, 100.0, 10.0);
        assert_eq!(section_frame(track, 0, &[], f32::NAN).width, 0.0);
        assert_eq!(section_frame(track, 0, &[], -1.0).width, 0.0);
        assert_eq!(section_frame(track, 0, &[], 4.0).width, 100.0);
    }

    #[test]
    fn round_auto_radius_is_half_height() {
        let outer = Rect::new(0.0, 0.0, 300.0, 50.0);
        assert_eq!(corner_radius(outer, LineCap::Round, 0.0), 25.0);
        assert_eq!(corner_radius(outer, LineCap::Round, 8.0), 8.0);
    }

    #[test]
    fn flat_caps_have_no_radius() {
        let outer = Rect::new(0.0, 0.0, 300.0, 50.0);
        assert_eq!(corner_radius(outer, LineCap::Square, 8.0), 0.0);
        assert_eq!(corner_radius(outer, LineCap::Butt, 0.0), 0.0);
        assert_eq!(track_corner_radius(outer, outer, LineCap::Butt, 8.0), 0.0);
    }

    #[test]
    fn explicit_track_radius_scales_with_height() {
        let outer = Rect::new(0.0, 0.0, 300.0, 40.0);
        let track = track_frame(outer, 10.0, LineCap::Round);
        assert!(approx(track_corner_radius(outer, track, LineCap::Round, 8.0), 4.0));
    }

    #[test]
    fn auto_track_radius_is_half_track_height() {
        let outer = Rect::new(0.0, 0.0, 300.0, 40.0);
        let track = track_frame(outer, 5.0, LineCap::Round);
        assert_eq!(track_corner_radius(outer, track, LineCap::Round, 0.0), 15.0);
    }

    #[test]
    fn zero_height_geometry_never_produces_nan() {
        let outer = Rect::new(0.0, 0.0, 300.0, 0.0);
        let track = track_frame(outer, 5.0, LineCap::Round);
        assert_eq!(corner_radius(outer, LineCap::Round, 0.0), 0.0);
        assert_eq!(track_corner_radius(outer, track, LineCap::Round, 12.0), 0.0);
        assert_eq!(track_corner_radius(outer, track, LineCap::Round, 0.0), 0.0);
    }

    #[test]
    fn full_pass_tiles_left_to_right() {
        let config = GeometryConfig::new(Rect::new(0.0, 0.0, 100.0, 10.0))
            .with_line_cap(LineCap::Butt)
            .with_inset(1.0);
        let result = layout(&config, &[0.25, 0.5, 0.25]);

        assert_eq!(result.section_frames.len(), 3);
        assert_eq!(result.section_frames[1].x, 25.0);
        assert_eq!(result.section_frames[2].x, 75.0);
        assert_eq!(result.filled_width(), 100.0);
        assert_eq!(result.track_corner_radius, 0.0);
    }
}
