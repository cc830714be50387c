//! Lexical exception rules
//!
//! Manages the external exceptions resource: an ordered list of
//! whitespace-separated (pattern, replacement) pairs, one per non-comment
//! line. Embedded lists are parsed once per process and cached.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use regex::Regex;

use crate::config::ExceptionLevel;
use crate::error::{CoreError, Result};

/// Basic rules shipped with the crate (`-uir`/`-uar` verb families).
const EMBEDDED_BASIC: &str = include_str!("../rules/exceptions.lst");

/// Extended vacillating-hiatus rules, applied after the basic set.
const EMBEDDED_EXTENDED: &str = include_str!("../rules/exceptions-extended.lst");

static BASIC: OnceLock<Arc<ExceptionList>> = OnceLock::new();
static EXTENDED: OnceLock<Arc<ExceptionList>> = OnceLock::new();

/// One compiled rewrite rule.
#[derive(Debug, Clone)]
pub struct ExceptionRule {
    pattern: Regex,
    replacement: String,
}

impl ExceptionRule {
    /// The pattern text as written in the resource.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// The replacement text, which may contain `$n` group references and
    /// the forced-boundary marker.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

/// An ordered list of exception rules.
///
/// Application is order-sensitive: each substitution feeds the next rule,
/// and only the first match per rule is rewritten.
#[derive(Debug, Clone, Default)]
pub struct ExceptionList {
    rules: Vec<ExceptionRule>,
}

impl ExceptionList {
    /// Parse the resource text format.
    ///
    /// Lines starting with `#` and blank lines are skipped. Every other
    /// line must split into exactly a pattern and a replacement; a pattern
    /// that fails to compile fails the whole load.
    pub fn parse(text: &str) -> Result<Self> {
        let mut rules = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split_whitespace();
            let (pattern, replacement) = match (fields.next(), fields.next()) {
                (Some(p), Some(r)) => (p, r),
                _ => {
                    return Err(CoreError::IncompleteExceptionRule {
                        line: idx + 1,
                        text: line.to_string(),
                    })
                }
            };
            let compiled =
                Regex::new(pattern).map_err(|source| CoreError::InvalidExceptionRule {
                    line: idx + 1,
                    pattern: pattern.to_string(),
                    source,
                })?;
            rules.push(ExceptionRule {
                pattern: compiled,
                replacement: replacement.to_string(),
            });
        }
        Ok(Self { rules })
    }

    /// Load rules from a file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text =
            std::fs::read_to_string(path).map_err(|source| CoreError::ResourceUnavailable {
                path: path.display().to_string(),
                source,
            })?;
        Self::parse(&text)
    }

    /// The embedded rule list for a level, parsed once and shared.
    pub fn embedded(level: ExceptionLevel) -> Result<Arc<Self>> {
        match level {
            ExceptionLevel::None => Ok(Arc::new(Self::default())),
            ExceptionLevel::Basic => {
                if let Some(list) = BASIC.get() {
                    return Ok(list.clone());
                }
                let list = Arc::new(Self::parse(EMBEDDED_BASIC)?);
                Ok(BASIC.get_or_init(|| list).clone())
            }
            ExceptionLevel::Extended => {
                if let Some(list) = EXTENDED.get() {
                    return Ok(list.clone());
                }
                let mut list = Self::parse(EMBEDDED_BASIC)?;
                list.rules.extend(Self::parse(EMBEDDED_EXTENDED)?.rules);
                let list = Arc::new(list);
                Ok(EXTENDED.get_or_init(|| list).clone())
            }
        }
    }

    /// Apply every rule in order, feeding each result into the next.
    pub fn apply(&self, word: &str) -> String {
        let mut current = word.to_string();
        for rule in &self.rules {
            current = rule
                .pattern
                .replace(&current, rule.replacement.as_str())
                .into_owned();
        }
        current
    }

    /// The rules, in application order.
    pub fn rules(&self) -> &[ExceptionRule] {
        &self.rules
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the list has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
