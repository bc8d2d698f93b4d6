//! Line indexing for TextBuffer
//! Tracks logical offsets of line starts

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Logical offsets of the start of each line
    /// Always contains at least [0]
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Create a new LineIndex starting with a single empty line
    #[must_use]
    pub fn new() -> Self {
        Self {
            line_starts: vec![0],
        }
    }

    /// Build an index over `chars`; every `\n` starts a new line
    #[must_use]
    pub fn from_chars(chars: &[char]) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            chars
                .iter()
                .enumerate()
                .filter(|&(_, &c)| c == '\n')
                .map(|(i, _)| i + 1),
        );
        Self { line_starts }
    }

    /// Total number of lines
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get logical start of a line (0-indexed)
    #[must_use]
    pub fn get_start(&self, line_idx: usize) -> Option<usize> {
        self.line_starts.get(line_idx).copied()
    }

    /// Get logical end of a line (exclusive, position of the newline or end of buffer)
    /// Needs total_len to handle the last line correctly
    #[must_use]
    pub fn get_end(&self, line_idx: usize, total_len: usize) -> Option<usize> {
        if line_idx >= self.line_starts.len() {
            return None;
        }
        if line_idx + 1 < self.line_starts.len() {
            Some(self.line_starts[line_idx + 1].saturating_sub(1))
        } else {
            Some(total_len)
        }
    }

    /// Get line number for a logical position (binary search)
    #[must_use]
    pub fn get_line_at(&self, pos: usize) -> usize {
        match self.line_starts.binary_search(&pos) {
            Ok(idx) => idx,
            Err(idx) => idx.saturating_sub(1),
        }
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(text: &str) -> LineIndex {
        let chars: Vec<char> = text.chars().collect();
        LineIndex::from_chars(&chars)
    }

    #[test]
    fn test_empty() {
        let idx = LineIndex::new();
        assert_eq!(idx.line_count(), 1);
        assert_eq!(idx.get_start(0), Some(0));
        assert_eq!(index(""), idx);
    }

    #[test]
    fn test_multiple_newlines() {
        let idx = index("a\nb\nc\n");
        assert_eq!(idx.line_count(), 4);
        assert_eq!(idx.get_start(1), Some(2));
        assert_eq!(idx.get_start(3), Some(6));
        assert_eq!(idx.get_start(4), None);
    }

    #[test]
    fn test_get_end() {
        let idx = index("Line 1\nLine 2");
        assert_eq!(idx.get_end(0, 13), Some(6));
        assert_eq!(idx.get_end(1, 13), Some(13));
        assert_eq!(idx.get_end(2, 13), None);
    }

    #[test]
    fn test_get_line_at() {
        let idx = index("a\nbb\nccc");
        assert_eq!(idx.get_line_at(0), 0);
        assert_eq!(idx.get_line_at(1), 0);
        assert_eq!(idx.get_line_at(2), 1);
        assert_eq!(idx.get_line_at(4), 1);
        assert_eq!(idx.get_line_at(5), 2);
        assert_eq!(idx.get_line_at(100), 2);
    }

    #[test]
    fn test_multibyte_counts_code_points() {
        let idx = index("héllo\nwörld");
        assert_eq!(idx.get_start(1), Some(6));
    }
}
