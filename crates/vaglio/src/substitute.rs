// crates/vaglio/src/substitute.rs

use vaglio_expr::VarEnv;

use crate::assemble::Splice;

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Replaces every standalone occurrence of a known variable name in `line`
/// with the literal rendering of its current value. Purely textual, token
/// boundary aware, and never introduces a line break.
pub fn substitute(line: &str, env: &VarEnv) -> (String, Vec<Splice>) {
    let mut out = String::with_capacity(line.len());
    let mut splices = Vec::new();
    let mut pos = 0;

    while pos < line.len() {
        let c = match line[pos..].chars().next() {
            Some(c) => c,
            None => break,
        };
        if !is_ident_start(c) {
            out.push(c);
            pos += c.len_utf8();
            continue;
        }
        let start = pos;
        while pos < line.len() {
            let c = match line[pos..].chars().next() {
                Some(c) => c,
                None => break,
            };
            if is_ident_continue(c) {
                pos += c.len_utf8();
            } else {
                break;
            }
        }
        let token = &line[start..pos];
        if env.has(token) {
            let rendered = env.get(token).render();
            splices.push(Splice {
                column: start as u32,
                removed: token.len() as u32,
                inserted: rendered.len() as u32,
            });
            out.push_str(&rendered);
        } else {
            out.push_str(token);
        }
    }

    (out, splices)
}
