//! Conversions between byte offsets and editor positions.
//!
//! Editors address text by zero-based line and UTF-16 code unit column, while
//! syntax trees and highlights use byte offsets into the UTF-8 source.

use glint_api::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TextPosition {
    pub line: u32,
    /// Column in UTF-16 code units.
    pub character: u32,
}

impl TextPosition {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextRange {
    pub start: TextPosition,
    pub end: TextPosition,
}

/// Source text together with the byte offset of every line start.
///
/// `\n`, `\r\n` and a lone `\r` all terminate a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    text: String,
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let bytes = text.as_bytes();
        let mut line_starts = vec![0];
        for (i, &b) in bytes.iter().enumerate() {
            match b {
                b'\n' => line_starts.push(i + 1),
                b'\r' if bytes.get(i + 1) != Some(&b'\n') => line_starts.push(i + 1),
                _ => {}
            }
        }
        Self { text, line_starts }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset of `position`. Columns past the end of a line clamp to the
    /// line end, lines past the end of the text clamp to the text length.
    pub fn offset_at(&self, position: TextPosition) -> usize {
        let line = position.line as usize;
        let Some(&start) = self.line_starts.get(line) else {
            return self.text.len();
        };
        let end = self.line_content_end(line);

        let mut utf16 = 0;
        let mut offset = start;
        for c in self.text[start..end].chars() {
            if utf16 >= position.character as usize {
                break;
            }
            utf16 += c.len_utf16();
            offset += c.len_utf8();
        }
        offset
    }

    /// Editor position of a byte offset. Offsets past the end clamp to the end
    /// of the text; offsets inside a multi-byte character snap to its start.
    pub fn position_at(&self, offset: usize) -> TextPosition {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let start = self.line_starts[line];
        let character = self.text[start..offset].encode_utf16().count();
        TextPosition::new(line as u32, character as u32)
    }

    pub fn range_of(&self, span: Span) -> TextRange {
        TextRange {
            start: self.position_at(span.start),
            end: self.position_at(span.end),
        }
    }

    fn line_content_end(&self, line: usize) -> usize {
        let start = self.line_starts[line];
        let mut end = self
            .line_starts
            .get(line + 1)
            .copied()
            .unwrap_or(self.text.len());
        let bytes = self.text.as_bytes();
        if end > start && bytes[end - 1] == b'\n' {
            end -= 1;
        }
        if end > start && bytes[end - 1] == b'\r' {
            end -= 1;
        }
        end
    }
}
