//! Line-oriented SCAT text block
//!
//! Matching is plain string equality against the whole line. Statement text
//! is data, never a pattern, so metacharacters and a leading `"- "` inside a
//! statement cannot widen or shift a match.
//!
//! Host text may arrive with CRLF endings. Lines keep their `'\r'` so the
//! text round-trips unchanged, and a single trailing `'\r'` is ignored when
//! a line is compared against a bullet.

use serde::{Deserialize, Serialize};

/// Marker that opens every engine-owned line
pub const BULLET_PREFIX: &str = "- ";

/// Bullet form of a statement: `"- " + statement`
#[inline]
#[must_use]
pub fn bullet(statement: &str) -> String {
    let mut line = String::with_capacity(BULLET_PREFIX.len() + statement.len());
    line.push_str(BULLET_PREFIX);
    line.push_str(statement);
    line
}

/// Line content without a trailing carriage return
fn content(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

/// Append the bullet line for `statement` unless that line exists
#[must_use]
pub fn append_bullet_line(lines: &[String], statement: &str) -> Vec<String> {
    let target = bullet(statement);
    let mut next = lines.to_vec();
    if !lines.iter().any(|line| content(line) == target) {
        next.push(target);
    }
    next
}

/// Remove the bullet line for `statement`
///
/// Only a line equal to the bullet form, apart from a trailing `'\r'`,
/// matches. If several do, the last one goes, which is the one
/// [`append_bullet_line`] would have added.
/// All other lines keep their content and order.
#[must_use]
pub fn remove_bullet_line(lines: &[String], statement: &str) -> Vec<String> {
    let target = bullet(statement);
    let mut next = lines.to_vec();
    if let Some(idx) = lines.iter().rposition(|line| content(line) == target) {
        next.remove(idx);
    }
    next
}

/// One SCAT column as ordered lines (no embedded newlines)
///
/// Serialized as the host's multi-line string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ScatBlock {
    lines: Vec<String>,
}

impl ScatBlock {
    /// Empty block
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Block from explicit lines
    #[inline]
    #[must_use]
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Split host text on `'\n'`; empty text is zero lines
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        if text.is_empty() {
            return Self::new();
        }
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    /// Join lines back into host text (exact inverse of [`Self::from_text`])
    #[inline]
    #[must_use]
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Lines in order
    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Check if block has no lines
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Check if the exact bullet line for `statement` is present
    #[must_use]
    pub fn contains_bullet(&self, statement: &str) -> bool {
        let target = bullet(statement);
        self.lines.iter().any(|line| content(line) == target)
    }

    /// Number of lines exactly equal to the bullet form of `statement`
    #[must_use]
    pub fn count_bullet(&self, statement: &str) -> usize {
        let target = bullet(statement);
        self.lines.iter().filter(|line| content(line) == target).count()
    }

    /// Statements of every line that carries the bullet prefix
    pub fn bullet_statements(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .filter_map(|line| content(line).strip_prefix(BULLET_PREFIX))
    }

    /// New block with the bullet line appended (idempotent)
    #[inline]
    #[must_use]
    pub fn append_bullet_line(&self, statement: &str) -> Self {
        Self {
            lines: append_bullet_line(&self.lines, statement),
        }
    }

    /// New block with the bullet line removed
    #[inline]
    #[must_use]
    pub fn remove_bullet_line(&self, statement: &str) -> Self {
        Self {
            lines: remove_bullet_line(&self.lines, statement),
        }
    }
}

impl From<String> for ScatBlock {
    fn from(text: String) -> Self {
        Self::from_text(&text)
    }
}

impl From<ScatBlock> for String {
    fn from(block: ScatBlock) -> Self {
        block.to_text()
    }
}

impl From<Vec<String>> for ScatBlock {
    fn from(lines: Vec<String>) -> Self {
        Self::from_lines(lines)
    }
}
