//! Documentation templates with `{name}` placeholders.
//!
//! Syntax follows the usual brace convention: `{name}` is substituted,
//! `{{` and `}}` produce literal braces. Placeholder names are ASCII
//! letters, digits and underscores.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::category::{CategoryStore, VALID_SET};
use crate::error::{DocsetError, Result};
use crate::format::{CategorySetFormatter, FormatOptions};

/// Builtin particle documentation, with a `{valid_categories}` placeholder.
pub const PARTICLE_DOC_TEMPLATE: &str = include_str!("../templates/particle_doc.txt");

/// Placeholder used by [`PARTICLE_DOC_TEMPLATE`].
pub const PARTICLE_DOC_PLACEHOLDER: &str = "valid_categories";

/// Tabs before the placeholder line of [`PARTICLE_DOC_TEMPLATE`].
pub const PARTICLE_DOC_INDENTATION: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(source: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            match c {
                '{' if matches!(chars.peek(), Some((_, '{'))) => {
                    chars.next();
                    literal.push('{');
                }
                '}' if matches!(chars.peek(), Some((_, '}'))) => {
                    chars.next();
                    literal.push('}');
                }
                '}' => {
                    return Err(syntax(offset, "single '}' encountered"));
                }
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((_, ch)) if ch.is_ascii_alphanumeric() || ch == '_' => {
                                name.push(ch);
                            }
                            Some((at, ch)) => {
                                return Err(syntax(
                                    at,
                                    &format!("invalid character '{}' in placeholder name", ch),
                                ));
                            }
                            None => return Err(syntax(offset, "unclosed placeholder")),
                        }
                    }
                    if name.is_empty() {
                        return Err(syntax(offset, "empty placeholder"));
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(name));
                }
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Placeholder names in order of first use.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Placeholder(name) = segment {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    pub fn render(&self, bindings: &HashMap<String, String>) -> Result<String> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    let value = bindings.get(name).ok_or_else(|| DocsetError::MissingBinding {
                        name: name.clone(),
                    })?;
                    trace!(placeholder = %name, bytes = value.len(), "substituted");
                    out.push_str(value);
                }
            }
        }
        debug!(
            segments = self.segments.len(),
            bytes = out.len(),
            "rendered template"
        );
        Ok(out)
    }
}

/// Parse a `PLACEHOLDER=SET` binding.
pub fn parse_binding(spec: &str) -> Result<(String, String)> {
    let invalid = || DocsetError::InvalidBinding {
        spec: spec.to_string(),
    };
    let (placeholder, set) = spec.split_once('=').ok_or_else(invalid)?;
    let (placeholder, set) = (placeholder.trim(), set.trim());
    if placeholder.is_empty() || set.is_empty() {
        return Err(invalid());
    }
    Ok((placeholder.to_string(), set.to_string()))
}

/// Bind every placeholder of `template` to a formatted category set.
///
/// Explicit `(placeholder, set)` pairs win. Otherwise a placeholder binds to
/// the set of the same name, with `_` read as `-` and a trailing
/// `_categories` ignored, so `{valid_categories}` finds `valid`.
pub fn bind_sets(
    template: &Template,
    store: &CategoryStore,
    explicit: &[(String, String)],
    options: &FormatOptions,
) -> Result<HashMap<String, String>> {
    let mut bindings = HashMap::new();
    for placeholder in template.placeholders() {
        let set_name = match explicit.iter().find(|(p, _)| p == placeholder) {
            Some((_, set)) => set.clone(),
            None => implicit_set_name(placeholder, store).ok_or_else(|| {
                DocsetError::MissingBinding {
                    name: placeholder.to_string(),
                }
            })?,
        };
        let set = store.require(&set_name)?;
        debug!(placeholder, set = %set_name, "binding placeholder");
        let formatted = CategorySetFormatter::with_options(&set.members, options)?;
        bindings.insert(placeholder.to_string(), formatted.into_string());
    }
    Ok(bindings)
}

fn implicit_set_name(placeholder: &str, store: &CategoryStore) -> Option<String> {
    let stem = placeholder
        .strip_suffix("_categories")
        .filter(|s| !s.is_empty());
    [Some(placeholder), stem]
        .into_iter()
        .flatten()
        .flat_map(|name| [name.to_string(), name.replace('_', "-")])
        .find(|name| store.get(name).is_some())
}

fn syntax(offset: usize, message: &str) -> DocsetError {
    DocsetError::TemplateSyntax {
        offset,
        message: message.to_string(),
    }
}

/// Render [`PARTICLE_DOC_TEMPLATE`] with the store's `valid` set.
pub fn render_particle_doc(store: &CategoryStore, options: &FormatOptions) -> Result<String> {
    let template = Template::parse(PARTICLE_DOC_TEMPLATE)?;
    let explicit = [(PARTICLE_DOC_PLACEHOLDER.to_string(), VALID_SET.to_string())];
    let bindings = bind_sets(&template, store, &explicit, options)?;
    template.render(&bindings)
}
