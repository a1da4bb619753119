use super::LockParser;
use regex::Regex;
use requirements_hook_core::{Category, DependencyEntry, LockDocument, ParseError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// `[name]` or `[[name]]`, name made of lowercase letters and dots
static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\[\[[a-z.]+\]\]|\[[a-z.]+\])$").expect("header regex is valid")
});

/// Parser for poetry.lock files
pub struct PoetryLock {
    lock_file: PathBuf,
    lenient_headers: bool,
}

/// One bracketed section of the lock file and the lines that follow it
struct Section<'a> {
    name: &'a str,
    /// 1-indexed line number of the header
    line: usize,
    body: Vec<&'a str>,
}

impl PoetryLock {
    pub fn new(lock_file: impl Into<PathBuf>) -> Self {
        Self {
            lock_file: lock_file.into(),
            lenient_headers: false,
        }
    }

    /// Absorb malformed header lines into the preceding section instead of failing
    pub fn with_lenient_headers(mut self, lenient: bool) -> Self {
        self.lenient_headers = lenient;
        self
    }

    /// Split lock text into sections; text before the first header is dropped
    fn split_sections<'a>(&self, content: &'a str) -> Result<Vec<Section<'a>>> {
        let mut sections: Vec<Section<'a>> = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            // Headers may carry a trailing comment; body lines are kept whole
            let trimmed = line.split_once('#').map_or(line, |(head, _)| head).trim();

            if trimmed.starts_with('[') {
                if HEADER_REGEX.is_match(trimmed) {
                    sections.push(Section {
                        name: trimmed.trim_matches(['[', ']']),
                        line: idx + 1,
                        body: Vec::new(),
                    });
                    continue;
                }

                if !self.lenient_headers {
                    return Err(ParseError::MalformedHeader {
                        line: idx + 1,
                        header: line.trim().to_string(),
                    }
                    .into());
                }
            }

            if let Some(section) = sections.last_mut() {
                section.body.push(line);
            }
        }

        Ok(sections)
    }

    /// Parse `key = value` lines; values lose all whitespace and surrounding quotes
    fn parse_fields<'a>(body: &[&'a str]) -> HashMap<&'a str, String> {
        let mut fields = HashMap::new();

        for line in body {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };

            let key = key.trim();
            if key.is_empty() {
                continue;
            }

            let value: String = value.chars().filter(|c| !c.is_whitespace()).collect();
            let value = value.trim_matches(['"', '\'']);
            fields.insert(key, value.to_string());
        }

        fields
    }
}

impl LockParser for PoetryLock {
    fn lock_file(&self) -> &Path {
        &self.lock_file
    }

    fn parse_str(&self, content: &str, categories: &[Category]) -> Result<LockDocument> {
        let wanted: Vec<Category> = categories.iter().map(Category::canonical).collect();
        let mut entries = Vec::new();

        for section in self.split_sections(content)? {
            // Only [[package]] blocks describe installable packages
            if section.name != "package" {
                continue;
            }

            let fields = Self::parse_fields(&section.body);
            let Some(category) = fields.get("category") else {
                continue;
            };
            if !wanted.iter().any(|c| c.as_str() == category.as_str()) {
                continue;
            }

            let name = fields.get("name").ok_or(ParseError::MissingField {
                field: "name",
                line: section.line,
            })?;
            let version = fields.get("version").ok_or(ParseError::MissingField {
                field: "version",
                line: section.line,
            })?;

            entries.push(DependencyEntry::pinned(
                name.as_str(),
                version,
                category.as_str(),
            ));
        }

        Ok(LockDocument::new(entries))
    }
}
