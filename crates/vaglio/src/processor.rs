// crates/vaglio/src/processor.rs

use std::collections::BTreeMap;
use std::path::Path;

use log::{debug, trace};
use vaglio_expr::{Value, VarEnv, evaluate_str, is_valid_name};

use crate::assemble::{Assembler, Transform};
use crate::blocks::FrameStack;
use crate::error::{PrepError, PrepResult};
use crate::options::{CommentSyntax, Options, Retention, SCRIPT_SYNTAX};
use crate::scanner::{Directive, Line, classify};
use crate::substitute::substitute;

/// One preprocessor instance. The variable environment it owns spans every
/// file the instance transforms: `#set`/`#unset` effects from one file are
/// visible to the files processed after it. Callers invoking transforms
/// concurrently must serialize them; the instance does no locking.
pub struct Preprocessor {
    env: VarEnv,
    retention: Retention,
    extensions: BTreeMap<String, CommentSyntax>,
    root: String,
}

impl Preprocessor {
    pub fn new(options: Options) -> PrepResult<Self> {
        let mut env = VarEnv::new();
        for (name, json) in &options.values {
            if name == "__FILE" {
                return Err(PrepError::config(
                    "`__FILE` is seeded per file and cannot be configured",
                ));
            }
            if !is_valid_name(name) {
                return Err(PrepError::config(format!(
                    "invalid variable name `{name}` (expected a `__`-prefixed identifier)"
                )));
            }
            let Some(value) = Value::from_json(json) else {
                return Err(PrepError::config(format!(
                    "value of `{name}` must be a boolean, number, string or null"
                )));
            };
            env.set(name, value);
        }
        Ok(Preprocessor {
            env,
            retention: Retention::compile(&options.comments)?,
            extensions: options.extensions,
            root: options.root,
        })
    }

    /// Read access to the environment, for host pipelines that want to
    /// inspect `#set` effects between files.
    pub fn env(&self) -> &VarEnv {
        &self.env
    }

    /// Transforms one complete file. Synchronous and single-pass: scan,
    /// evaluate, assemble. The output has exactly one line per input line.
    pub fn transform(&mut self, source: &str, file_id: &str) -> PrepResult<Transform> {
        let file = self.relative_file(file_id);
        self.env.set("__FILE", Value::Str(file.clone()));
        let syntax = self.syntax_for(file_id).clone();

        debug!("preprocessing {file}");

        let mut frames = FrameStack::new();
        let mut asm = Assembler::new();

        for (idx, raw) in source.split('\n').enumerate() {
            let line_no = idx + 1;
            match classify(raw, &syntax, &file, line_no)? {
                Line::Directive(directive) => {
                    trace!("{file}:{line_no}: {directive:?}");
                    self.apply_directive(&mut frames, directive, &file, line_no)?;
                    asm.blank();
                }
                Line::Comment { text } => {
                    if frames.is_active() && self.retention.retains(text) {
                        asm.copied(raw);
                    } else {
                        asm.blank();
                    }
                }
                Line::Code => {
                    if frames.is_active() {
                        let (replaced, splices) = substitute(raw, &self.env);
                        if splices.is_empty() {
                            asm.copied(raw);
                        } else {
                            asm.edited(&replaced, splices);
                        }
                    } else {
                        asm.blank();
                    }
                }
            }
        }

        frames.finish(&file)?;
        Ok(asm.finish())
    }

    fn apply_directive(
        &mut self,
        frames: &mut FrameStack,
        directive: Directive,
        file: &str,
        line: usize,
    ) -> PrepResult<()> {
        match directive {
            Directive::If { expr } => {
                let env = &self.env;
                frames.open(line, || truthy(&expr, env, file, line))
            }
            Directive::Elif { expr } => {
                let env = &self.env;
                frames.elif(file, line, || truthy(&expr, env, file, line))
            }
            Directive::Else => frames.else_branch(file, line),
            Directive::Endif => frames.close(file, line),
            Directive::Ifset { name } => {
                let present = self.env.has(&name);
                frames.open(line, || Ok(present))
            }
            Directive::Ifnset { name } => {
                let present = self.env.has(&name);
                frames.open(line, || Ok(!present))
            }
            Directive::Set { name, expr } => {
                if !frames.is_active() {
                    return Ok(());
                }
                if name == "__FILE" {
                    return Err(PrepError::directive(
                        file,
                        line,
                        "`__FILE` is built in and cannot be set",
                    ));
                }
                let value = match expr {
                    Some(text) => evaluate_str(&text, &self.env)
                        .map_err(|e| PrepError::from_expr(e, file, line))?,
                    None => Value::Undefined,
                };
                self.env.set(&name, value);
                Ok(())
            }
            Directive::Unset { name } => {
                if !frames.is_active() {
                    return Ok(());
                }
                if name == "__FILE" {
                    return Err(PrepError::directive(
                        file,
                        line,
                        "`__FILE` is built in and cannot be unset",
                    ));
                }
                self.env.unset(&name);
                Ok(())
            }
            Directive::Error { message } => {
                if frames.is_active() {
                    return Err(PrepError::User {
                        file: file.to_string(),
                        line,
                        message,
                    });
                }
                Ok(())
            }
        }
    }

    fn syntax_for(&self, file_id: &str) -> &CommentSyntax {
        Path::new(file_id)
            .extension()
            .and_then(|e| e.to_str())
            .and_then(|e| self.extensions.get(e))
            .unwrap_or(&SCRIPT_SYNTAX)
    }

    /// `__FILE` is the file id relative to the configured root.
    fn relative_file(&self, file_id: &str) -> String {
        if self.root.is_empty() {
            return file_id.to_string();
        }
        match file_id.strip_prefix(&self.root) {
            Some(rest) => rest.trim_start_matches(['/', '\\']).to_string(),
            None => file_id.to_string(),
        }
    }
}

fn truthy(expr: &str, env: &VarEnv, file: &str, line: usize) -> PrepResult<bool> {
    evaluate_str(expr, env)
        .map(|v| v.is_truthy())
        .map_err(|e| PrepError::from_expr(e, file, line))
}
