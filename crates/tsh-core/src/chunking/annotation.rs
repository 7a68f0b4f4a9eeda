use crate::{errors::Error, Result};

/// Entity kind label for bold text.
pub const BOLD: &str = "bold";
/// Entity kind label for inline code.
pub const CODE: &str = "code";

/// A labelled span over a text, in UTF-16 code units.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Annotation {
    pub kind: String,
    pub offset: usize,
    pub length: usize,
}

impl Annotation {
    pub fn new(kind: impl Into<String>, offset: usize, length: usize) -> Self {
        Self {
            kind: kind.into(),
            offset,
            length,
        }
    }

    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    /// Whether the span shares at least one code unit with `[lo, hi)`.
    pub fn overlaps(&self, lo: usize, hi: usize) -> bool {
        self.offset < hi && self.end() > lo
    }

    /// Reject empty spans and spans running past the end of the text.
    pub fn validate(&self, text_len: usize) -> Result<()> {
        let in_bounds = self
            .offset
            .checked_add(self.length)
            .is_some_and(|end| end <= text_len);
        if self.length == 0 || !in_bounds {
            return Err(Error::InvalidAnnotation {
                kind: self.kind.clone(),
                offset: self.offset,
                length: self.length,
                text_len,
            });
        }
        Ok(())
    }
}
