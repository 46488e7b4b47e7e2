use rustc_hash::FxHashMap;

/// Advance amounts for one pattern, derived from the pattern alone.
///
/// `advance` follows the bad-character heuristic:
/// - every character among the first `len - 1` maps to `len - i - 1` for its
///   rightmost index `i`
/// - the final character maps to `len` if it appears nowhere earlier, and to
///   `0` if it does
/// - characters absent from the pattern fall back to `len - 1` (or `len` for
///   a single-character pattern)
///
/// The zero entry is kept as-is. The engine never applies a raw advance; it
/// clamps it with [`ShiftTable::safe_bound`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftTable {
    len: usize,
    advance: FxHashMap<char, usize>,
    rightmost: FxHashMap<char, usize>,
}

impl ShiftTable {
    pub fn build(pattern: &[char]) -> Self {
        let len = pattern.len();
        let mut advance = FxHashMap::default();
        let mut rightmost = FxHashMap::default();

        for (i, &ch) in pattern.iter().enumerate() {
            rightmost.insert(ch, i);
        }

        let Some((&last, head)) = pattern.split_last() else {
            return ShiftTable { len, advance, rightmost };
        };

        for (i, &ch) in head.iter().enumerate() {
            advance.insert(ch, len - i - 1);
        }

        if advance.contains_key(&last) {
            advance.insert(last, 0);
        } else {
            advance.insert(last, len);
        }

        ShiftTable { len, advance, rightmost }
    }

    pub fn pattern_len(&self) -> usize {
        self.len
    }

    /// Raw table value for `ch`. May be zero; always within `0..=len`.
    pub fn advance_for(&self, ch: char) -> usize {
        self.advance
            .get(&ch)
            .copied()
            .unwrap_or_else(|| self.default_advance())
    }

    /// Advance used for characters that are not in the pattern.
    pub fn default_advance(&self) -> usize {
        if self.len > 1 {
            self.len - 1
        } else {
            self.len
        }
    }

    /// Largest advance that cannot step over a valid alignment, given that
    /// `ch` mismatched at pattern index `mismatch_at`. Always at least 1.
    pub fn safe_bound(&self, ch: char, mismatch_at: usize) -> usize {
        match self.rightmost.get(&ch) {
            Some(&pos) if pos < mismatch_at => mismatch_at - pos,
            Some(_) => 1,
            None => mismatch_at + 1,
        }
    }

    /// Table entries sorted by character.
    pub fn entries(&self) -> Vec<(char, usize)> {
        let mut entries: Vec<(char, usize)> = self.advance.iter().map(|(&c, &a)| (c, a)).collect();
        entries.sort_unstable_by_key(|&(c, _)| c);
        entries
    }

    pub fn is_empty(&self) -> bool {
        self.advance.is_empty()
    }
}

/// Build the table for `pattern` and look up `mismatched` in it.
pub fn advance_for(pattern: &[char], mismatched: char) -> usize {
    ShiftTable::build(pattern).advance_for(mismatched)
}
