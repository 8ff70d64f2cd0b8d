#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

/// Maps byte offsets to zero-based line/character positions.
#[derive(Debug, Clone)]
pub struct SourceLocator<'a> {
    source: &'a [u8],
    line_starts: Vec<usize>,
}

impl<'a> SourceLocator<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        let mut line_starts = vec![0];
        for (i, &ch) in source.iter().enumerate() {
            // `\r\n` ends a line at the `\n`; a lone `\r` ends it by itself
            if ch == b'\n' || (ch == b'\r' && source.get(i + 1) != Some(&b'\n')) {
                line_starts.push(i + 1);
            }
        }
        SourceLocator {
            source,
            line_starts,
        }
    }

    pub fn position_general<F>(&self, index: usize, counter: F) -> Position
    where
        F: FnOnce(&[u8]) -> u32,
    {
        let index = index.min(self.source.len());
        let line = self.line_starts.partition_point(|&start| start <= index) - 1;
        let character = counter(&self.source[self.line_starts[line]..index]);
        Position {
            line: line as u32,
            character,
        }
    }

    pub fn position_utf8(&self, index: usize) -> Position {
        self.position_general(index, |line| line.len() as u32)
    }

    pub fn position_utf16(&self, index: usize) -> Position {
        use bstr::ByteSlice;

        self.position_general(index, |line| {
            line.chars().map(|ch| ch.len_utf16() as u32).sum()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(line: u32, character: u32) -> Position {
        Position { line, character }
    }

    #[test]
    fn test_line_endings() {
        let source = b"let a = 1;\nlet b = 2;\r\nreturn b;\rx";
        let locator = SourceLocator::new(source);
        assert_eq!(locator.position_utf8(0), pos(0, 0));
        assert_eq!(locator.position_utf8(4), pos(0, 4));
        assert_eq!(locator.position_utf8(10), pos(0, 10));
        assert_eq!(locator.position_utf8(11), pos(1, 0));
        assert_eq!(locator.position_utf8(21), pos(1, 10));
        assert_eq!(locator.position_utf8(23), pos(2, 0));
        assert_eq!(locator.position_utf8(33), pos(3, 0));
        assert_eq!(locator.position_utf8(100), pos(3, 1));
    }

    #[test]
    fn test_utf16() {
        let source = "let いろは = 𝑥;".as_bytes();
        let locator = SourceLocator::new(source);
        let eq = source.iter().position(|&ch| ch == b'=').unwrap();
        let semi = source.iter().position(|&ch| ch == b';').unwrap();
        assert_eq!(locator.position_utf8(eq), pos(0, 14));
        assert_eq!(locator.position_utf16(eq), pos(0, 8));
        assert_eq!(locator.position_utf16(semi), pos(0, 12));
    }
}
