/// Notifications a segmented bar reports back to its host.
///
/// The bar never repaints anything itself; the host reacts to these by
/// re-running layout or forwarding the interaction to its own handlers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    // ── Data ──────────────────────────────────────────────────────────────────
    /// The data source was re-read; carries the new section count.
    Reloaded(usize),
    /// A section's stored progress changed (index, new fraction of capacity).
    ProgressChanged(usize, f32),
    /// Every section was set back to zero.
    ProgressReset,

    // ── Interaction ───────────────────────────────────────────────────────────
    /// A point inside this section's frame was selected.
    SectionSelected(usize),
}

impl Message {
    /// Whether the host must run a new layout pass after this message.
    #[must_use]
    pub fn needs_layout(&self) -> bool {
        !matches!(self, Self::SectionSelected(_))
    }
}
