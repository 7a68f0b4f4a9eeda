//! Segmentation of long annotated text into transport-legal chunks.
//!
//! All offsets and lengths are UTF-16 code units, the unit Telegram uses for
//! message entities. Two call patterns share one classifier:
//! - [`segment`] splits a complete `(text, annotations)` pair at once;
//! - [`MessageWriter`] accumulates labelled segments and flushes a chunk
//!   whenever the next write would overflow the length limit.

mod annotation;
mod boundary;
mod limits;
mod segmenter;
pub mod utf16;
mod writer;

pub use annotation::*;
pub use boundary::*;
pub use limits::*;
pub use segmenter::*;
pub use writer::*;
