use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt;

/// Namespace a variable-like name lives in.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Global,
    Instance,
    Class,
    Constant,
    Local,
}

/// Symbolic identity of an occurrence: two nodes denote the same symbol when
/// both kind and name are equal, wherever they appear.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub name: SmolStr,
}

impl Symbol {
    pub fn new(kind: SymbolKind, name: impl Into<SmolStr>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            SymbolKind::Global => "global",
            SymbolKind::Instance => "instance variable",
            SymbolKind::Class => "class variable",
            SymbolKind::Constant => "constant",
            SymbolKind::Local => "local",
        };
        write!(f, "{} `{}`", kind, self.name)
    }
}
