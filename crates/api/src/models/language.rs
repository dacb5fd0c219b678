use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Programming language types
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(Cow<'static, str>);

impl Language {
    pub const RUBY: Language = Language(Cow::Borrowed("ruby"));
    pub const UNKNOWN: Language = Language(Cow::Borrowed("unknown"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Map a file extension to a Language.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "rb" | "rake" | "gemspec" | "ru" | "rbw" => Self::RUBY,
            _ => Self::UNKNOWN,
        }
    }

    /// Map an LSP `languageId` to a Language.
    pub fn from_language_id(id: &str) -> Self {
        match id {
            "ruby" => Self::RUBY,
            _ => Self::UNKNOWN,
        }
    }

    /// Detect a language from a path or URI, looking at the extension and at
    /// well-known extensionless Ruby file names.
    pub fn from_path(path: &str) -> Self {
        let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
        match file_name {
            "Gemfile" | "Rakefile" | "Guardfile" | "Vagrantfile" => return Self::RUBY,
            _ => {}
        }
        match file_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => Self::from_extension(ext),
            _ => Self::UNKNOWN,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_ruby_from_paths() {
        assert_eq!(Language::from_path("/src/app/models/user.rb"), Language::RUBY);
        assert_eq!(Language::from_path("file:///work/Rakefile"), Language::RUBY);
        assert_eq!(Language::from_path("lib/tasks/db.RAKE"), Language::RUBY);
        assert_eq!(Language::from_path("README.md"), Language::UNKNOWN);
        assert_eq!(Language::from_path(".rb"), Language::UNKNOWN);
    }

    #[test]
    fn detects_ruby_from_language_id() {
        assert_eq!(Language::from_language_id("ruby"), Language::RUBY);
        assert_eq!(Language::from_language_id("python"), Language::UNKNOWN);
    }
}
