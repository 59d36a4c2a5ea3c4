use std::collections::HashSet;

use regex::Regex;

use crate::domain::model::SetElement;
use crate::utils::error::{InvalidSetError, Result};

// Accepted element character class: letters, digits, whitespace, '.', '-', '_'.
const ELEMENT_PATTERN: &str = r"^[a-zA-Z0-9\s._-]+$";

/// Converts free-form delimited text into validated, ordered element
/// sequences. Stateless apart from the compiled element pattern; instances
/// may be shared or re-created freely.
pub struct SetParser {
    element_pattern: Regex,
}

impl SetParser {
    pub fn new() -> Self {
        Self {
            element_pattern: Regex::new(ELEMENT_PATTERN).expect("element pattern is a valid regex"),
        }
    }

    /// Parse a comma-separated string into set elements.
    ///
    /// Accepts plain (`1, 2, 3`) and set-notation (`{1, 2, 3}`) input. Empty
    /// tokens from stray commas are skipped. Duplicates are preserved in
    /// order and multiplicity; mathematical set semantics are deliberately
    /// not enforced here. Use [`SetParser::has_duplicates`] to surface an
    /// advisory.
    pub fn parse_set(&self, input: &str, set_name: &str) -> Result<Vec<SetElement>> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(InvalidSetError::EmptyInput {
                set_name: set_name.to_string(),
            });
        }

        let cleaned = strip_set_notation(trimmed);

        let mut elements = Vec::new();
        for token in cleaned.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }

            if !self.element_pattern.is_match(token) {
                return Err(InvalidSetError::InvalidElement {
                    token: token.to_string(),
                    set_name: set_name.to_string(),
                });
            }

            elements.push(SetElement::new(token, set_name));
        }

        if elements.is_empty() {
            return Err(InvalidSetError::NoValidElements {
                set_name: set_name.to_string(),
            });
        }

        tracing::debug!("Parsed {} elements for set {}", elements.len(), set_name);
        Ok(elements)
    }

    /// Build elements from a pre-split sequence, trimming and dropping blank
    /// entries. Unlike [`SetParser::parse_set`] this path does not enforce
    /// the element character class; it is the documented permissive
    /// convenience route and may return an empty sequence when every entry
    /// is blank.
    pub fn parse_from_array<S: AsRef<str>>(
        &self,
        elements: &[S],
        set_name: &str,
    ) -> Result<Vec<SetElement>> {
        if elements.is_empty() {
            return Err(InvalidSetError::EmptyArray {
                set_name: set_name.to_string(),
            });
        }

        Ok(elements
            .iter()
            .map(|element| element.as_ref().trim())
            .filter(|element| !element.is_empty())
            .map(|element| SetElement::new(element, set_name))
            .collect())
    }

    /// One element per integer in `[start, end]` inclusive.
    pub fn parse_range(&self, start: i64, end: i64, set_name: &str) -> Result<Vec<SetElement>> {
        if start > end {
            return Err(InvalidSetError::InvalidRange {
                set_name: set_name.to_string(),
                start,
                end,
            });
        }

        Ok((start..=end)
            .map(|value| SetElement::new(&value.to_string(), set_name))
            .collect())
    }

    /// First-occurrence-unique by value, order preserved.
    pub fn remove_duplicates(&self, elements: &[SetElement]) -> Vec<SetElement> {
        let mut seen = HashSet::new();
        elements
            .iter()
            .filter(|element| seen.insert(element.value().to_string()))
            .cloned()
            .collect()
    }

    /// Queryable advisory fact; the display layer decides whether to warn.
    pub fn has_duplicates(&self, elements: &[SetElement]) -> bool {
        let mut seen = HashSet::new();
        elements.iter().any(|element| !seen.insert(element.value()))
    }

    /// Render `{ v1, v2, ... }`, or the empty-set symbol.
    pub fn format_set(&self, elements: &[SetElement]) -> String {
        if elements.is_empty() {
            return "∅".to_string();
        }

        let content = elements
            .iter()
            .map(SetElement::value)
            .collect::<Vec<_>>()
            .join(", ");

        format!("{{ {} }}", content)
    }
}

impl Default for SetParser {
    fn default() -> Self {
        Self::new()
    }
}

// Strips '{' and '}' independently, only at the respective boundary.
fn strip_set_notation(input: &str) -> &str {
    let mut result = input;
    if let Some(rest) = result.strip_prefix('{') {
        result = rest;
    }
    if let Some(rest) = result.strip_suffix('}') {
        result = rest;
    }
    result.trim()
}
