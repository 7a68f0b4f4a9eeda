use crate::{errors::Error, Result};

/// Length and count limits for one run of chunks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LimitPolicy {
    max_chunk_length: usize,
    max_chunk_count: usize,
}

impl LimitPolicy {
    /// `max_chunk_length` is in UTF-16 code units and must fit a surrogate pair.
    pub fn new(max_chunk_length: usize, max_chunk_count: usize) -> Result<Self> {
        if max_chunk_length < 2 {
            return Err(Error::InvalidLimits(format!(
                "max chunk length must be at least 2 code units, got {max_chunk_length}"
            )));
        }
        if max_chunk_count == 0 {
            return Err(Error::InvalidLimits(
                "max chunk count must be positive".to_string(),
            ));
        }
        Ok(Self {
            max_chunk_length,
            max_chunk_count,
        })
    }

    pub fn max_chunk_length(&self) -> usize {
        self.max_chunk_length
    }

    pub fn max_chunk_count(&self) -> usize {
        self.max_chunk_count
    }

    /// Same count, length capped at `max_len` (e.g. a messenger's hard limit).
    pub fn capped(self, max_len: usize) -> Result<Self> {
        Self::new(self.max_chunk_length.min(max_len), self.max_chunk_count)
    }
}
