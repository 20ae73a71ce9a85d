use crate::{
    section::Section,
    source::{SectionDataSource, SectionDelegate},
};
use segbar_core::{event::Message, Point, Rect};
use segbar_layout::{layout, GeometryConfig, LayoutResult};
use segbar_progress::{ProgressAllocator, ProgressValue};
use segbar_theme::SectionStyle;
use serde::Serialize;
use tracing::debug;

/// A horizontal bar split into proportionally sized sections.
///
/// Composes a [`ProgressAllocator`] (numeric state) with the stateless
/// layout pass. The bar never paints: [`layout`](Self::layout) returns the
/// frames and styles the host assigns to its own views, and every mutation
/// returns the [`Message`] the host should react to.
pub struct SegmentedBar<V: ProgressValue> {
    allocator: ProgressAllocator<V>,
    sections:  Vec<Section>,
    delegate:  Option<Box<dyn SectionDelegate>>,
    /// Allocator revision at the last layout pass.
    laid_out:  Option<u64>,
}

impl SegmentedBar<f32> {
    /// Fractional bar: sections share a capacity of `1.0`.
    pub fn fractional() -> Self {
        Self::new(1.0)
    }
}

impl SegmentedBar<i32> {
    /// Step bar: sections share `total_steps` whole steps.
    pub fn stepped(total_steps: i32) -> Self {
        Self::new(total_steps)
    }
}

impl<V: ProgressValue> SegmentedBar<V> {
    pub fn new(capacity: V) -> Self {
        Self {
            allocator: ProgressAllocator::new(0, capacity),
            sections:  Vec::new(),
            delegate:  None,
            laid_out:  None,
        }
    }

    pub fn set_delegate(&mut self, delegate: Box<dyn SectionDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn clear_delegate(&mut self) -> Option<Box<dyn SectionDelegate>> {
        self.delegate.take()
    }

    /// Re-read every section from `source` and start over at zero progress.
    pub fn reload_data(&mut self, source: &dyn SectionDataSource) -> Message {
        let count = source.section_count();
        self.sections = (0..count).map(|i| source.section(i)).collect();
        let capacity = self.allocator.capacity();
        self.allocator.configure(count, capacity);

        debug!(sections = count, "segmented bar reloaded");
        Message::Reloaded(count)
    }

    /// Change the shared capacity.  Like a reload, this zeroes all progress.
    /// A negative capacity becomes zero.
    pub fn set_capacity(&mut self, capacity: V) {
        self.allocator.configure(self.sections.len(), capacity);
    }

    pub fn capacity(&self) -> V {
        self.allocator.capacity()
    }

    /// See [`ProgressAllocator::set_progress`].  Returns a message only
    /// when the stored value actually changed.
    pub fn set_progress(&mut self, section: usize, value: V) -> Option<Message> {
        let before = self.allocator.revision();
        self.allocator.set_progress(section, value);
        self.report_change(section, before)
    }

    pub fn advance(&mut self, section: usize, delta: V) -> Option<Message> {
        let before = self.allocator.revision();
        self.allocator.advance(section, delta);
        self.report_change(section, before)
    }

    /// Store `fraction` of the whole bar for `section` (steps round down).
    pub fn set_fraction(&mut self, section: usize, fraction: f32) -> Option<Message> {
        let before = self.allocator.revision();
        self.allocator.set_fraction(section, fraction);
        self.report_change(section, before)
    }

    pub fn set_section_limit(&mut self, section: usize, limit: Option<V>) -> Option<Message> {
        let before = self.allocator.revision();
        self.allocator.set_section_limit(section, limit);
        self.report_change(section, before)
    }

    pub fn progress(&self, section: usize) -> V {
        self.allocator.progress(section)
    }

    pub fn total_progress(&self) -> V {
        self.allocator.total_progress()
    }

    pub fn reset_progress(&mut self) -> Message {
        let touched: Vec<usize> = (0..self.allocator.section_count())
            .filter(|&i| self.allocator.progress(i) != V::ZERO)
            .collect();
        self.allocator.reset_progress();

        if let Some(delegate) = self.delegate.as_mut() {
            for i in touched {
                delegate.progress_changed(i, 0.0);
            }
        }
        Message::ProgressReset
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn allocator(&self) -> &ProgressAllocator<V> {
        &self.allocator
    }

    /// Whether progress changed since the last [`layout`](Self::layout).
    pub fn needs_layout(&self) -> bool {
        self.laid_out != Some(self.allocator.revision())
    }

    /// Compute every frame for `geometry` and remember the revision it reflects.
    pub fn layout(&mut self, geometry: &GeometryConfig) -> BarFrame {
        self.laid_out = Some(self.allocator.revision());
        self.frame(geometry)
    }

    /// Same as [`layout`](Self::layout) without marking the bar as laid out.
    pub fn frame(&self, geometry: &GeometryConfig) -> BarFrame {
        let fractions = self.allocator.fractions();
        let result = layout(geometry, &fractions);

        let sections = self
            .sections
            .iter()
            .zip(&result.section_frames)
            .zip(&fractions)
            .enumerate()
            .map(|(index, ((section, &frame), &fraction))| SectionFrame {
                index,
                frame,
                fraction,
                label_frame: section.label_frame(frame),
                image_frame: section.image_frame(frame),
                label: section.label.as_ref().map(|l| l.text.clone()),
                image: section.image.as_ref().map(|i| i.name.clone()),
                style: section.style,
            })
            .collect();

        BarFrame { layout: result, sections }
    }

    /// Hit-test `point` against the current frames and notify the delegate.
    pub fn select_at(&mut self, point: Point, geometry: &GeometryConfig) -> Option<Message> {
        let result = layout(geometry, &self.allocator.fractions());
        let index = result.section_at(point)?;

        debug!(section = index, "section selected");
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.section_selected(index);
        }
        Some(Message::SectionSelected(index))
    }

    fn report_change(&mut self, section: usize, before: u64) -> Option<Message> {
        if self.allocator.revision() == before {
            return None;
        }
        let fraction = self.allocator.fraction(section);
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.progress_changed(section, fraction);
        }
        Some(Message::ProgressChanged(section, fraction))
    }
}

impl<V: ProgressValue> std::fmt::Debug for SegmentedBar<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SegmentedBar")
            .field("allocator", &self.allocator)
            .field("sections", &self.sections.len())
            .field("delegate", &self.delegate.is_some())
            .finish()
    }
}

/// Everything the host needs to position one section's views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionFrame {
    pub index:       usize,
    pub frame:       Rect,
    /// Share of the track width.
    pub fraction:    f32,
    pub label:       Option<String>,
    pub label_frame: Option<Rect>,
    pub image:       Option<String>,
    pub image_frame: Option<Rect>,
    pub style:       SectionStyle,
}

/// Output of [`SegmentedBar::layout`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarFrame {
    pub layout:   LayoutResult,
    pub sections: Vec<SectionFrame>,
}
