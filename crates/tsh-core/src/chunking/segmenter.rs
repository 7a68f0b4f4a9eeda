use super::{boundary::clip, utf16, Annotation, LimitPolicy};
use crate::Result;

/// One transport-legal message: text plus the annotations clipped to it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Chunk {
    pub text: String,
    pub annotations: Vec<Annotation>,
}

impl Chunk {
    /// Length of the text in UTF-16 code units.
    pub fn len_utf16(&self) -> usize {
        utf16::len(&self.text)
    }
}

/// Result of a segmentation run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Segmented {
    pub chunks: Vec<Chunk>,
    /// Text was dropped because the chunk-count cap was reached.
    pub truncated: bool,
}

/// Build the chunk for window `[lo, lo + len(text))`, keeping input order.
fn window_chunk<'a>(
    text: &str,
    lo: usize,
    hi: usize,
    annotations: impl IntoIterator<Item = &'a Annotation>,
) -> Chunk {
    Chunk {
        text: text.to_string(),
        annotations: annotations
            .into_iter()
            .filter_map(|a| clip(a, lo, hi))
            .collect(),
    }
}

/// Split a complete annotated text into chunks.
///
/// Windows are `max_chunk_length` code units wide (the last may be shorter;
/// a window also ends early rather than split a surrogate pair). Once
/// `max_chunk_count` chunks exist the remaining text is dropped and
/// `truncated` is set.
pub fn segment(text: &str, annotations: &[Annotation], limits: LimitPolicy) -> Result<Segmented> {
    let text_len = utf16::len(text);
    for a in annotations {
        a.validate(text_len)?;
    }

    let mut out = Segmented::default();
    let mut rest = text;
    let mut lo = 0usize;
    while !rest.is_empty() {
        if out.chunks.len() == limits.max_chunk_count() {
            out.truncated = true;
            tracing::debug!(
                chunks = out.chunks.len(),
                dropped_units = text_len - lo,
                "chunk limit reached, dropping remaining text"
            );
            break;
        }

        let (head, head_len, tail) = utf16::split_at(rest, limits.max_chunk_length());
        let hi = lo + head_len;
        out.chunks.push(window_chunk(head, lo, hi, annotations));

        lo = hi;
        rest = tail;
    }

    Ok(out)
}
