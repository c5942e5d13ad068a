// crates/vaglio/src/options.rs

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::{PrepError, PrepResult};

/// Configuration for one preprocessor instance. Deserializable so a hosting
/// pipeline can load it straight from its own JSON/TOML config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Initial variable mapping, seeded into the environment once at
    /// construction (not re-seeded per file). Values must be JSON scalars.
    pub values: BTreeMap<String, JsonValue>,

    /// Which ordinary (non-directive) comments survive into the output.
    pub comments: CommentPolicy,

    /// Per-extension comment syntax overrides, e.g. `html` mapped to
    /// `CommentSyntax::markup()`. Unlisted extensions use the script syntax.
    pub extensions: BTreeMap<String, CommentSyntax>,

    /// Path prefix stripped from file ids when seeding `__FILE`.
    pub root: String,
}

/// Retention policy for ordinary comment lines in active spans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentPolicy {
    /// Keep every comment line (the default).
    #[default]
    All,
    /// Blank every comment line.
    None,
    /// Keep only comments matching one of the selectors.
    Some(Vec<CommentSelector>),
}

/// One retention selector: a literal prefix tag (`"@license"`, `"!"`) or a
/// regex pattern matched against the comment's inner text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentSelector {
    Tag(String),
    Pattern(String),
}

/// One comment delimiter pair. `close` is `None` for line comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentMarker {
    pub open: String,
    #[serde(default)]
    pub close: Option<String>,
}

/// The comment delimiters used to recognize directive lines in one family
/// of file extensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentSyntax {
    pub markers: Vec<CommentMarker>,
}

impl CommentSyntax {
    /// Script-style comments: `//...` and single-line `/*...*/`.
    pub fn script() -> Self {
        CommentSyntax {
            markers: vec![
                CommentMarker {
                    open: "//".into(),
                    close: None,
                },
                CommentMarker {
                    open: "/*".into(),
                    close: Some("*/".into()),
                },
            ],
        }
    }

    /// Markup-style comments: `<!--...-->`.
    pub fn markup() -> Self {
        CommentSyntax {
            markers: vec![CommentMarker {
                open: "<!--".into(),
                close: Some("-->".into()),
            }],
        }
    }
}

lazy_static! {
    /// Default descriptor shared by every extension without an override.
    pub(crate) static ref SCRIPT_SYNTAX: CommentSyntax = CommentSyntax::script();
}

/// The compiled form of [`CommentPolicy`]: selectors validated, patterns
/// built once per instance.
#[derive(Debug)]
pub(crate) enum Retention {
    All,
    None,
    Selectors {
        tags: Vec<String>,
        patterns: Vec<Regex>,
    },
}

impl Retention {
    pub(crate) fn compile(policy: &CommentPolicy) -> PrepResult<Self> {
        match policy {
            CommentPolicy::All => Ok(Retention::All),
            CommentPolicy::None => Ok(Retention::None),
            CommentPolicy::Some(selectors) => {
                let mut tags = Vec::new();
                let mut patterns = Vec::new();
                for selector in selectors {
                    match selector {
                        CommentSelector::Tag(tag) => {
                            if tag.is_empty() {
                                return Err(PrepError::config("empty comment tag selector"));
                            }
                            tags.push(tag.clone());
                        }
                        CommentSelector::Pattern(pattern) => {
                            let re = Regex::new(pattern).map_err(|e| {
                                PrepError::config(format!(
                                    "bad comment pattern `{pattern}`: {e}"
                                ))
                            })?;
                            patterns.push(re);
                        }
                    }
                }
                Ok(Retention::Selectors { tags, patterns })
            }
        }
    }

    /// Decides whether a comment with the given inner text is kept.
    pub(crate) fn retains(&self, text: &str) -> bool {
        match self {
            Retention::All => true,
            Retention::None => false,
            Retention::Selectors { tags, patterns } => {
                tags.iter().any(|tag| text.starts_with(tag.as_str()))
                    || patterns.iter().any(|re| re.is_match(text))
            }
        }
    }
}
