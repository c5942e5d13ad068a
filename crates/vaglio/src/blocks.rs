// crates/vaglio/src/blocks.rs

use crate::error::{PrepError, PrepResult};

/// One open `#if`/`#ifset`/`#ifnset` construct.
#[derive(Debug)]
struct Frame {
    opened_at: usize,
    /// Some branch of this frame has already matched, so later `#elif`/
    /// `#else` branches are forced inactive.
    matched: bool,
    else_seen: bool,
    /// Whether every enclosing frame was active when this one opened.
    parent_active: bool,
    /// Whether the currently selected branch of this frame is active.
    active: bool,
}

/// The nested-block state machine. Directives arrive in source order; the
/// stack decides which spans are active and enforces balance.
#[derive(Debug, Default)]
pub struct FrameStack {
    frames: Vec<Frame>,
}

impl FrameStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// True when the current span is active: no open frame, or the top
    /// frame (which already accounts for its ancestors) is active.
    pub fn is_active(&self) -> bool {
        self.frames.last().is_none_or(|f| f.active)
    }

    /// Opens a frame. `cond` is evaluated only when every enclosing frame
    /// is active, so expressions inside dead code never run.
    pub fn open(
        &mut self,
        line: usize,
        cond: impl FnOnce() -> PrepResult<bool>,
    ) -> PrepResult<()> {
        let parent_active = self.is_active();
        let matched = if parent_active { cond()? } else { false };
        self.frames.push(Frame {
            opened_at: line,
            matched,
            else_seen: false,
            parent_active,
            active: parent_active && matched,
        });
        Ok(())
    }

    /// `#elif`: first matching branch wins; evaluated only when no prior
    /// branch matched and the ancestors are active.
    pub fn elif(
        &mut self,
        file: &str,
        line: usize,
        cond: impl FnOnce() -> PrepResult<bool>,
    ) -> PrepResult<()> {
        let Some(frame) = self.frames.last_mut() else {
            return Err(unbalanced(file, line, "elif"));
        };
        if frame.else_seen {
            return Err(PrepError::directive(file, line, "`#elif` after `#else`"));
        }
        if !frame.parent_active || frame.matched {
            frame.active = false;
            return Ok(());
        }
        let matched = cond()?;
        frame.matched = matched;
        frame.active = matched;
        Ok(())
    }

    pub fn else_branch(&mut self, file: &str, line: usize) -> PrepResult<()> {
        let Some(frame) = self.frames.last_mut() else {
            return Err(unbalanced(file, line, "else"));
        };
        if frame.else_seen {
            return Err(PrepError::directive(file, line, "duplicate `#else`"));
        }
        frame.else_seen = true;
        frame.active = frame.parent_active && !frame.matched;
        frame.matched = true;
        Ok(())
    }

    pub fn close(&mut self, file: &str, line: usize) -> PrepResult<()> {
        if self.frames.pop().is_none() {
            return Err(unbalanced(file, line, "endif"));
        }
        Ok(())
    }

    /// End-of-input check; reports the innermost block left open.
    pub fn finish(&self, file: &str) -> PrepResult<()> {
        match self.frames.last() {
            Some(frame) => Err(PrepError::UnclosedBlock {
                file: file.to_string(),
                line: frame.opened_at,
            }),
            None => Ok(()),
        }
    }
}

fn unbalanced(file: &str, line: usize, directive: &str) -> PrepError {
    PrepError::UnbalancedBlock {
        file: file.to_string(),
        line,
        directive: directive.to_string(),
    }
}
