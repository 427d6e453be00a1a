pub mod category;
pub mod config;
pub mod error;
pub mod format;
pub mod template;

pub use config::{Config, FormatConfig};
pub use error::{DocsetError, Result};
pub use format::{
    format_categories, join_indented, wrap, CategorySetFormatter, FormatOptions, QuoteStyle,
    DEFAULT_INDENTATION, DEFAULT_WIDTH, MAX_INDENTATION,
};
pub use template::{
    bind_sets, parse_binding, render_particle_doc, Template, PARTICLE_DOC_INDENTATION,
    PARTICLE_DOC_PLACEHOLDER, PARTICLE_DOC_TEMPLATE,
};

// Category catalog
pub use category::{
    BuiltinSet, CategorySetDef, CategoryStore, SetConfigEntry, SetsConfig, BUILTIN_SETS,
    VALID_SET,
};
