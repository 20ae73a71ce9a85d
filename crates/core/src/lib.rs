pub mod error;
pub mod event;
pub mod geometry;

pub use error::{Result, SegbarError};
pub use event::Message;
pub use geometry::{EdgeInsets, Point, Rect, Size};
