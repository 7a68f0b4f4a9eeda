use super::{boundary::clip, utf16, Annotation, Chunk, LimitPolicy, Segmented};

/// Incremental chunk builder for one outgoing reply.
///
/// Segments are appended with an optional entity kind. Whenever a segment
/// would push the buffer past `max_chunk_length`, the fitting prefix is kept,
/// the buffer is flushed as a chunk, and the remainder continues into a fresh
/// buffer. After `max_chunk_count` chunks, further text is discarded and the
/// writer reports itself as truncated.
///
/// A writer holds mutable state; give each reply its own instance.
#[derive(Debug)]
pub struct MessageWriter {
    limits: LimitPolicy,
    buffer: String,
    buffer_len: usize,
    pending: Vec<Annotation>,
    chunks: Vec<Chunk>,
    truncated: bool,
}

impl MessageWriter {
    pub fn new(limits: LimitPolicy) -> Self {
        Self {
            limits,
            buffer: String::new(),
            buffer_len: 0,
            pending: Vec::new(),
            chunks: Vec::new(),
            truncated: false,
        }
    }

    /// Append `text`, annotated with `kind` when given.
    pub fn write(&mut self, text: &str, kind: Option<&str>) {
        let max = self.limits.max_chunk_length();
        let mut rest = text;
        let mut rest_len = utf16::len(text);

        while !rest.is_empty() {
            if self.truncated {
                return;
            }

            let room = max - self.buffer_len;
            let (head, head_len, tail) = utf16::split_at(rest, room);

            if head_len > 0 {
                if let Some(kind) = kind {
                    // The span covers the whole remaining segment; the
                    // classifier trims it to what fits in this buffer.
                    let span = Annotation::new(kind, self.buffer_len, rest_len);
                    if let Some(clipped) = clip(&span, 0, self.buffer_len + head_len) {
                        self.pending.push(clipped);
                    }
                }
                self.buffer.push_str(head);
                self.buffer_len += head_len;
            }

            rest = tail;
            rest_len -= head_len;
            if !rest.is_empty() {
                self.flush();
            }
        }
    }

    /// Append `text` without an annotation.
    pub fn write_plain(&mut self, text: &str) {
        self.write(text, None);
    }

    /// Flush the remaining buffer and return every chunk built so far.
    ///
    /// Calling this again returns the same chunks.
    pub fn messages(&mut self) -> &[Chunk] {
        self.flush();
        &self.chunks
    }

    /// Whether text was discarded because of the chunk-count cap.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Flush and hand over the result.
    pub fn finish(mut self) -> Segmented {
        self.flush();
        Segmented {
            chunks: self.chunks,
            truncated: self.truncated,
        }
    }

    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }

        let text = std::mem::take(&mut self.buffer);
        let annotations = std::mem::take(&mut self.pending);
        self.buffer_len = 0;

        if self.chunks.len() >= self.limits.max_chunk_count() {
            if !self.truncated {
                tracing::debug!(
                    chunks = self.chunks.len(),
                    "chunk limit reached, discarding further output"
                );
            }
            self.truncated = true;
            return;
        }

        self.chunks.push(Chunk { text, annotations });
    }
}
