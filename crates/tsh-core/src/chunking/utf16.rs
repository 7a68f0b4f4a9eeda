//! UTF-16 code unit arithmetic over UTF-8 strings.

/// Length of `s` in UTF-16 code units.
pub fn len(s: &str) -> usize {
    s.chars().map(char::len_utf16).sum()
}

/// Split `s` after at most `max_units` UTF-16 code units.
///
/// The split never falls inside a character: if the limit lands between the
/// two halves of a surrogate pair, the whole pair goes to the tail. Returns
/// the head, its length in code units, and the tail.
pub fn split_at(s: &str, max_units: usize) -> (&str, usize, &str) {
    let mut units = 0usize;
    for (idx, ch) in s.char_indices() {
        let w = ch.len_utf16();
        if units + w > max_units {
            return (&s[..idx], units, &s[idx..]);
        }
        units += w;
    }
    (s, units, "")
}
