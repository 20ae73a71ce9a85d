use crate::section::Section;

/// Supplies the sections a bar displays.  Required.
///
/// Read once per [`reload_data`](crate::SegmentedBar::reload_data); the bar
/// keeps its own copy of every section until the next reload.
pub trait SectionDataSource {
    /// Number of sections, left to right.
    fn section_count(&self) -> usize;

    /// Section at `index`, for every `index` in `0..section_count()`.
    fn section(&self, index: usize) -> Section;
}

/// Receives interaction notifications.  Optional; every method defaults to a no-op.
pub trait SectionDelegate {
    /// A point inside `index`'s frame was selected.
    fn section_selected(&mut self, _index: usize) {}

    /// `index`'s stored progress changed; `fraction` is its new share of capacity.
    fn progress_changed(&mut self, _index: usize, _fraction: f32) {}
}

impl SectionDataSource for [Section] {
    fn section_count(&self) -> usize {
        self.len()
    }

    fn section(&self, index: usize) -> Section {
        self.get(index).cloned().unwrap_or_default()
    }
}

impl SectionDataSource for Vec<Section> {
    fn section_count(&self) -> usize {
        self.as_slice().section_count()
    }

    fn section(&self, index: usize) -> Section {
        self.as_slice().section(index)
    }
}
