use super::syntax::Span;
use serde::{Deserialize, Serialize};

/// Whether an occurrence reads or writes its symbol.
///
/// The discriminants follow the protocol's `DocumentHighlightKind`; `Text` (1)
/// is never produced.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum HighlightKind {
    Read = 2,
    Write = 3,
}

impl HighlightKind {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// One occurrence of the target symbol.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Highlight {
    pub range: Span,
    pub kind: HighlightKind,
}

impl Highlight {
    pub fn new(range: Span, kind: HighlightKind) -> Self {
        Self { range, kind }
    }
}
