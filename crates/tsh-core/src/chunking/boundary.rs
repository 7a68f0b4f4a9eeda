use super::Annotation;

/// How an annotation relates to a chunk window `[lo, hi)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlap {
    /// Entirely inside the window.
    Inside,
    /// Starts inside, ends after `hi`.
    TailClipped,
    /// Starts before `lo`, ends inside.
    HeadClipped,
    /// Starts before `lo` and ends after `hi`.
    Spanning,
    /// Shares no code unit with the window.
    Disjoint,
}

/// Classify `a` against the window `[lo, hi)`.
pub fn classify(a: &Annotation, lo: usize, hi: usize) -> Overlap {
    let start = a.offset;
    let end = a.end();

    if start >= lo && start < hi {
        if end <= hi {
            Overlap::Inside
        } else {
            Overlap::TailClipped
        }
    } else if start < lo && end > lo {
        if end <= hi {
            Overlap::HeadClipped
        } else {
            Overlap::Spanning
        }
    } else {
        Overlap::Disjoint
    }
}

/// Clip `a` to the window `[lo, hi)` and re-base it to `lo`.
///
/// Returns `None` when the annotation contributes nothing to the window.
pub fn clip(a: &Annotation, lo: usize, hi: usize) -> Option<Annotation> {
    let (offset, length) = match classify(a, lo, hi) {
        Overlap::Inside => (a.offset - lo, a.length),
        Overlap::TailClipped => (a.offset - lo, a.length.min(hi - a.offset)),
        Overlap::HeadClipped => (0, a.end() - lo),
        Overlap::Spanning => (0, hi - lo),
        Overlap::Disjoint => return None,
    };
    Some(Annotation {
        kind: a.kind.clone(),
        offset,
        length,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunking::{BOLD, CODE};

    #[test]
    fn inside_keeps_length() {
        let a = Annotation::new(BOLD, 110, 20);
        assert_eq!(classify(&a, 100, 200), Overlap::Inside);
        assert_eq!(clip(&a, 100, 200), Some(Annotation::new(BOLD, 10, 20)));

        // Touching both edges is still inside.
        let full = Annotation::new(BOLD, 100, 100);
        assert_eq!(clip(&full, 100, 200), Some(Annotation::new(BOLD, 0, 100)));
    }

    #[test]
    fn tail_is_clipped_at_right_edge() {
        let a = Annotation::new(CODE, 1000, 4000);
        assert_eq!(classify(&a, 0, 4096), Overlap::TailClipped);
        assert_eq!(clip(&a, 0, 4096), Some(Annotation::new(CODE, 1000, 3096)));
    }

    #[test]
    fn head_is_clipped_at_left_edge() {
        let a = Annotation::new(CODE, 1000, 4000);
        assert_eq!(classify(&a, 4096, 8192), Overlap::HeadClipped);
        assert_eq!(clip(&a, 4096, 8192), Some(Annotation::new(CODE, 0, 904)));
    }

    #[test]
    fn spanning_covers_whole_window() {
        let a = Annotation::new(BOLD, 5, 100);
        assert_eq!(classify(&a, 10, 20), Overlap::Spanning);
        assert_eq!(clip(&a, 10, 20), Some(Annotation::new(BOLD, 0, 10)));
    }

    #[test]
    fn disjoint_contributes_nothing() {
        // Ends exactly at `lo`.
        assert_eq!(clip(&Annotation::new(BOLD, 0, 10), 10, 20), None);
        // Starts exactly at `hi`.
        assert_eq!(clip(&Annotation::new(BOLD, 20, 5), 10, 20), None);
        assert_eq!(classify(&Annotation::new(BOLD, 50, 5), 10, 20), Overlap::Disjoint);
    }

    #[test]
    fn clipped_pieces_add_up_to_original_length() {
        let a = Annotation::new(CODE, 3, 25);
        let windows = [(0, 8), (8, 16), (16, 24), (24, 32)];
        let total: usize = windows
            .iter()
            .filter_map(|&(lo, hi)| clip(&a, lo, hi))
            .map(|c| c.length)
            .sum();
        assert_eq!(total, 25);
    }
}
