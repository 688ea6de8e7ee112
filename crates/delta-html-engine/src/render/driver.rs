use super::block::BlockAssembler;
use super::markup;
use super::stack::TagStack;
use crate::error::RenderError;
use crate::formats::{Registry, Resolved};
use crate::ops::Operation;
use crate::options::{RenderOptions, UnterminatedTail};

/// Written in place of the body of an empty block, so a blank line stays visible.
pub const EMPTY_BLOCK: &str = "<br>";

/// One step of consuming a text payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'p> {
    /// Append this text to the current block.
    Inline(&'p str),
    /// A `"\n"`: the current block ends here.
    Flush,
}

/// Splits a payload on its newlines. Text before each newline is followed by
/// a flush; a trailing empty segment is not a block and yields nothing.
pub fn steps(payload: &str) -> Vec<Step<'_>> {
    let mut out = Vec::new();
    let mut segments = payload.split('\n').peekable();
    while let Some(segment) = segments.next() {
        if !segment.is_empty() {
            out.push(Step::Inline(segment));
        }
        if segments.peek().is_some() {
            out.push(Step::Flush);
        }
    }
    out
}

/// Renders decoded operations to HTML.
pub fn render_operations(
    ops: &[Operation],
    registry: &Registry<'_>,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let mut renderer = Renderer::new(registry, options);
    let lone = matches!(ops, [only] if only.payload == "\n");
    for (index, op) in ops.iter().enumerate() {
        renderer.push(index, op, lone)?;
    }
    renderer.finish(ops.len())
}

/// Per-render state: the output, the current block's inline content, and the
/// open inline tags and containers. Nothing survives between renders.
pub struct Renderer<'r> {
    registry: &'r Registry<'r>,
    options: &'r RenderOptions,
    out: String,
    inline: String,
    stack: TagStack,
    blocks: BlockAssembler,
}

impl<'r> Renderer<'r> {
    pub fn new(registry: &'r Registry<'r>, options: &'r RenderOptions) -> Self {
        Self {
            registry,
            options,
            out: String::new(),
            inline: String::new(),
            stack: TagStack::new(),
            blocks: BlockAssembler::new(),
        }
    }

    /// Consumes one operation. `lone` marks a document made of a single
    /// `"\n"`, whose empty block renders without the `<br>` marker.
    pub fn push(&mut self, index: usize, op: &Operation, lone: bool) -> Result<(), RenderError> {
        let resolved = self.resolve(index, op)?;
        let inline: Vec<Resolved> = resolved.iter().filter(|r| r.is_inline()).cloned().collect();

        if let Some(writer) = resolved.iter().find_map(|r| r.formatter.as_writer()) {
            self.stack.reconcile(op, &inline, &mut self.inline);
            writer.write(&mut self.inline);
            return Ok(());
        }

        for step in steps(&op.payload) {
            match step {
                Step::Inline(text) => {
                    self.stack.reconcile(op, &inline, &mut self.inline);
                    markup::write_text(&mut self.inline, text, self.options.escape_text);
                }
                Step::Flush => self.flush_block(op, &resolved, lone),
            }
        }
        Ok(())
    }

    /// Ends the render, handling content left after the last block boundary.
    pub fn finish(mut self, count: usize) -> Result<String, RenderError> {
        if !self.inline.is_empty() || !self.stack.is_empty() {
            match self.options.unterminated_tail {
                UnterminatedTail::Flush => {
                    log::debug!("flushing unterminated tail as a final block");
                    let terminator = Operation::text("\n");
                    let resolved = self.resolve(count, &terminator)?;
                    self.flush_block(&terminator, &resolved, false);
                }
                UnterminatedTail::Drop => {
                    log::debug!("dropping {} bytes of unterminated tail", self.inline.len());
                    self.stack.close_all(&mut self.inline);
                    self.inline.clear();
                }
            }
        }
        self.blocks.finish(&mut self.out);
        Ok(self.out)
    }

    fn resolve(&self, index: usize, op: &Operation) -> Result<Vec<Resolved>, RenderError> {
        self.registry
            .resolve_operation(op)
            .ok_or_else(|| RenderError::MissingFormatter {
                index,
                kind: op.kind.clone(),
                partial: self.out.clone(),
            })
    }

    fn flush_block(&mut self, op: &Operation, resolved: &[Resolved], lone: bool) {
        self.stack.close_all(&mut self.inline);
        let body = if self.inline.is_empty() && !lone {
            EMPTY_BLOCK
        } else {
            self.inline.as_str()
        };
        self.blocks.flush(op, resolved, body, &mut self.out);
        self.inline.clear();
    }
}
