pub mod bar;
pub mod section;
pub mod source;

pub use bar::{BarFrame, SectionFrame, SegmentedBar};
pub use section::{Section, SectionImage, SectionLabel};
pub use source::{SectionDataSource, SectionDelegate};
