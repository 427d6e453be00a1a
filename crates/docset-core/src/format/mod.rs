//! # Format Module
//!
//! Turns a set of category names into a prose enumeration suitable for
//! documentation text:
//!
//! ```text
//! 'actinide', 'alkali metal', 'alkaline earth metal', 'antibaryon',
//!      'antilepton', ... and 'uncharged'.
//! ```
//!
//! Names are sorted (ordinal, case-sensitive), quoted, joined with `, `,
//! the last one prefixed with `and ` and terminated with a period. The
//! result is greedily wrapped and the lines re-joined with a newline plus
//! a run of tabs so it lines up inside an indented docstring.
//!
//! ## Example
//!
//! ```rust
//! use docset_core::format::CategorySetFormatter;
//!
//! let formatter = CategorySetFormatter::new(["beta", "alpha"], 2).unwrap();
//! assert_eq!(formatter.formatted(), "'alpha', and 'beta'.");
//! ```

pub mod wrap;

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DocsetError, Result};

pub use wrap::{join_indented, wrap};

/// Column limit used when nothing else is configured.
pub const DEFAULT_WIDTH: usize = 72;

/// Number of tabs that follow each line break by default.
pub const DEFAULT_INDENTATION: usize = 5;

/// Upper bound on the tabs after a line break.
pub const MAX_INDENTATION: usize = 64;

// ============================================================================
// Options
// ============================================================================

/// How each category name is quoted in the enumeration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    /// `'name'`
    #[default]
    Plain,
    /// ``` ``'name'`` ```, a reStructuredText inline literal
    Rst,
}

impl QuoteStyle {
    pub fn quote(&self, name: &str) -> String {
        match self {
            Self::Plain => format!("'{}'", name),
            Self::Rst => format!("``'{}'``", name),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Rst => "rst",
        }
    }
}

impl fmt::Display for QuoteStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuoteStyle {
    type Err = DocsetError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "rst" => Ok(Self::Rst),
            _ => Err(DocsetError::InvalidConfigValue {
                key: "format.quote".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Validated formatting parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub width: usize,
    pub indentation: usize,
    pub quote: QuoteStyle,
}

impl FormatOptions {
    /// Build options from signed values as they arrive from callers or config.
    pub fn new(width: i64, indentation: i64) -> Result<Self> {
        Ok(Self {
            width: validate_width(width)?,
            indentation: validate_indentation(indentation)?,
            quote: QuoteStyle::default(),
        })
    }

    pub fn with_quote(mut self, quote: QuoteStyle) -> Self {
        self.quote = quote;
        self
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            indentation: DEFAULT_INDENTATION,
            quote: QuoteStyle::default(),
        }
    }
}

pub(crate) fn validate_width(width: i64) -> Result<usize> {
    if width < 1 {
        return Err(DocsetError::InvalidWidth { value: width });
    }
    usize::try_from(width).map_err(|_| DocsetError::InvalidWidth { value: width })
}

pub(crate) fn validate_indentation(indentation: i64) -> Result<usize> {
    let tabs = usize::try_from(indentation).map_err(|_| DocsetError::NegativeIndentation {
        value: indentation,
    })?;
    if tabs > MAX_INDENTATION {
        return Err(DocsetError::IndentationTooLarge {
            value: indentation,
            max: MAX_INDENTATION,
        });
    }
    Ok(tabs)
}

// ============================================================================
// CategorySetFormatter
// ============================================================================

/// A category set rendered as wrapped, indented prose.
///
/// The output is computed once in the constructor; the formatter is
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySetFormatter {
    sorted: Vec<String>,
    raw: String,
    lines: Vec<String>,
    formatted: String,
    options: FormatOptions,
}

impl CategorySetFormatter {
    /// Format `categories` at the default width with `indentation` tabs
    /// after every line break.
    pub fn new<I, S>(categories: I, indentation: i64) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let options = FormatOptions {
            indentation: validate_indentation(indentation)?,
            ..FormatOptions::default()
        };
        Self::with_options(categories, &options)
    }

    pub fn with_options<I, S>(categories: I, options: &FormatOptions) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: BTreeSet<String> = categories
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();
        if set.is_empty() {
            return Err(DocsetError::EmptyCategories);
        }
        if options.width == 0 {
            return Err(DocsetError::InvalidWidth { value: 0 });
        }
        if options.indentation > MAX_INDENTATION {
            return Err(DocsetError::IndentationTooLarge {
                value: i64::try_from(options.indentation).unwrap_or(i64::MAX),
                max: MAX_INDENTATION,
            });
        }

        let sorted: Vec<String> = set.into_iter().collect();
        let raw = enumerate(&sorted, options.quote);
        let lines = wrap(&raw, options.width);
        let formatted = join_indented(&lines, options.indentation);

        debug!(
            categories = sorted.len(),
            width = options.width,
            indentation = options.indentation,
            lines = lines.len(),
            "formatted category set"
        );

        Ok(Self {
            sorted,
            raw,
            lines,
            formatted,
            options: *options,
        })
    }

    /// The final wrapped and indented text.
    pub fn formatted(&self) -> &str {
        &self.formatted
    }

    /// Wrapped lines before the indentation separator is applied.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The unwrapped enumeration.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Category names in enumeration order.
    pub fn sorted(&self) -> &[String] {
        &self.sorted
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    pub fn into_string(self) -> String {
        self.formatted
    }
}

impl fmt::Display for CategorySetFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}

/// Shorthand for `CategorySetFormatter::new(..)?.into_string()`.
pub fn format_categories<I, S>(categories: I, indentation: i64) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(CategorySetFormatter::new(categories, indentation)?.into_string())
}

/// `'a', 'b', and 'c'.` with a lone element rendered as `and 'a'.`
fn enumerate(sorted: &[String], quote: QuoteStyle) -> String {
    let mut raw = String::new();
    let last = sorted.len().saturating_sub(1);
    for (i, name) in sorted.iter().enumerate() {
        if i == last {
            raw.push_str("and ");
            raw.push_str(&quote.quote(name));
            raw.push('.');
        } else {
            raw.push_str(&quote.quote(name));
            raw.push_str(", ");
        }
    }
    raw
}
