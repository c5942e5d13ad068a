// crates/vaglio/src/scanner.rs

use vaglio_expr::is_valid_name;

use crate::error::{PrepError, PrepResult};
use crate::options::CommentSyntax;

/// A parsed directive. `#if`/`#elif` carry expression text, `#set` carries
/// a name plus an optional right-hand side, `#error` carries message text.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    If { expr: String },
    Elif { expr: String },
    Else,
    Endif,
    Ifset { name: String },
    Ifnset { name: String },
    Set { name: String, expr: Option<String> },
    Unset { name: String },
    Error { message: String },
}

/// Classification of one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Line<'a> {
    /// Ordinary code, subject to the active/inactive filter and substitution.
    Code,
    /// A full-line comment that is not a directive; `text` is the content
    /// between the delimiters, trimmed.
    Comment { text: &'a str },
    Directive(Directive),
}

/// Decides what one line is under the given comment syntax. A directive
/// line is a comment-delimited line whose content starts with `#` followed
/// by a recognized keyword; surrounding whitespace inside the delimiters is
/// irrelevant. A `#`-line with an unrecognized keyword is an ordinary
/// comment, but a recognized keyword with malformed arguments is an error.
pub fn classify<'a>(
    raw: &'a str,
    syntax: &CommentSyntax,
    file: &str,
    line: usize,
) -> PrepResult<Line<'a>> {
    let trimmed = raw.trim();
    for marker in &syntax.markers {
        let Some(inner) = trimmed.strip_prefix(marker.open.as_str()) else {
            continue;
        };
        let inner = match &marker.close {
            // A block-comment opener only makes a comment line when the
            // close delimiter ends the same line.
            Some(close) => match inner.strip_suffix(close.as_str()) {
                Some(content) => content,
                None => continue,
            },
            None => inner,
        };
        let content = inner.trim();
        let Some(rest) = content.strip_prefix('#') else {
            return Ok(Line::Comment { text: content });
        };
        let (keyword, arg) = split_keyword(rest);
        return match parse_directive(keyword, arg, file, line)? {
            Some(directive) => Ok(Line::Directive(directive)),
            None => Ok(Line::Comment { text: content }),
        };
    }
    Ok(Line::Code)
}

fn split_keyword(rest: &str) -> (&str, &str) {
    let end = rest
        .find(|c: char| !c.is_ascii_lowercase())
        .unwrap_or(rest.len());
    let (keyword, arg) = rest.split_at(end);
    (keyword, arg.trim())
}

fn parse_directive(
    keyword: &str,
    arg: &str,
    file: &str,
    line: usize,
) -> PrepResult<Option<Directive>> {
    let directive = match keyword {
        "if" => Directive::If {
            expr: require_expr(arg, "if", file, line)?,
        },
        "elif" => Directive::Elif {
            expr: require_expr(arg, "elif", file, line)?,
        },
        "else" => {
            require_empty(arg, "else", file, line)?;
            Directive::Else
        }
        "endif" => {
            require_empty(arg, "endif", file, line)?;
            Directive::Endif
        }
        "ifset" => Directive::Ifset {
            name: require_name(arg, "ifset", file, line)?,
        },
        "ifnset" => Directive::Ifnset {
            name: require_name(arg, "ifnset", file, line)?,
        },
        "set" => {
            let (name, expr) = split_set_arg(arg, file, line)?;
            Directive::Set { name, expr }
        }
        "unset" => Directive::Unset {
            name: require_name(arg, "unset", file, line)?,
        },
        "error" => Directive::Error {
            message: arg.to_string(),
        },
        _ => return Ok(None),
    };
    Ok(Some(directive))
}

fn require_expr(arg: &str, keyword: &str, file: &str, line: usize) -> PrepResult<String> {
    if arg.is_empty() {
        return Err(PrepError::directive(
            file,
            line,
            format!("`#{keyword}` needs an expression"),
        ));
    }
    Ok(arg.to_string())
}

fn require_empty(arg: &str, keyword: &str, file: &str, line: usize) -> PrepResult<()> {
    if !arg.is_empty() {
        return Err(PrepError::directive(
            file,
            line,
            format!("`#{keyword}` takes no argument"),
        ));
    }
    Ok(())
}

fn require_name(arg: &str, keyword: &str, file: &str, line: usize) -> PrepResult<String> {
    let mut parts = arg.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(name), None) if is_valid_name(name) => Ok(name.to_string()),
        _ => Err(PrepError::directive(
            file,
            line,
            format!("`#{keyword}` needs one `__`-prefixed variable name, got `{arg}`"),
        )),
    }
}

/// `#set __NAME expr`, with an optional `=` between name and expression.
/// A missing expression sets the name to `undefined`, which still marks it
/// present for `#ifset`.
fn split_set_arg(arg: &str, file: &str, line: usize) -> PrepResult<(String, Option<String>)> {
    let end = arg
        .find(|c: char| c.is_whitespace() || c == '=')
        .unwrap_or(arg.len());
    let (name, rest) = arg.split_at(end);
    if !is_valid_name(name) {
        return Err(PrepError::directive(
            file,
            line,
            format!("`#set` needs a `__`-prefixed variable name, got `{name}`"),
        ));
    }
    let rest = rest.trim_start();
    let rest = rest.strip_prefix('=').map_or(rest, str::trim_start);
    let expr = if rest.is_empty() {
        None
    } else {
        Some(rest.to_string())
    };
    Ok((name.to_string(), expr))
}
