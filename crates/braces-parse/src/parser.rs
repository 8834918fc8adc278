use braces_errors::Error;
use braces_syntax::SyntaxKind::{self, *};
use braces_syntax::{ParseFlags, Tree};
use braces_tokenizer::Tokenizer;
use text_size::TextRange;
use tracing::{debug, trace};

use crate::pool::{PendingId, Pool};
use crate::range;

/// An open `{` on the block stack.
#[derive(Debug, Clone, Copy)]
struct Block {
    /// Stack index of the `BRACE_OPEN` node.
    base: usize,
    /// Number of accepted `..` separators. Complemented once the block can
    /// no longer be a range.
    ranges: i32,
    delims: u32,
}

/// Reusable brace-pattern parser.
///
/// Tokens are shifted onto a working stack and reduced when a block closes.
/// Anything that does not resolve to an alternation or a range is folded
/// back into literal text. Working nodes live in a pool that survives
/// between calls to [`Parser::parse`].
#[derive(Debug, Default)]
pub struct Parser {
    flags: ParseFlags,
    pool: Pool,
    stack: Vec<PendingId>,
    blocks: Vec<Block>,
    scratch: Vec<u8>,
}

impl Parser {
    pub fn new(flags: ParseFlags) -> Self {
        Self { flags, ..Self::default() }
    }

    pub fn parse(&mut self, input: impl AsRef<[u8]>) -> Result<Tree, Error> {
        let input = input.as_ref();
        self.stack.clear();
        self.blocks.clear();
        self.pool.recycle();

        let mut tokenizer = Tokenizer::new(input, self.flags)?;
        // Stack index of the quote node that has not been closed yet.
        let mut quote = None;

        loop {
            let token = tokenizer.next_token()?;
            let text = source(input, token.range);

            match token.kind {
                LITERAL => self.literal(text),
                ESCAPE => self.push(ESCAPE, text),
                QUOTE => {
                    self.push(QUOTE, text);
                    quote = tokenizer.open_quote().map(|_| self.stack.len() - 1);
                }
                BRACE_OPEN => {
                    self.blocks.push(Block { base: self.stack.len(), ranges: 0, delims: 0 });
                    self.push(BRACE_OPEN, text);
                }
                BRACE_DELIMITER => self.delimiter(text),
                BRACE_RANGE => self.range_separator(text),
                BRACE_CLOSE => self.close(text),
                EOF => break,
                kind => unreachable!("tokenizer produced {kind:?}"),
            }
        }

        if let Some(index) = quote {
            let id = self.stack[index];
            self.pool[id].kind = LITERAL;
            trace!(index, "unterminated quote demoted to literal text");
        }

        let unclosed = self.blocks.first().map(|block| block.base);
        if let Some(offset) = quote.into_iter().chain(unclosed).min() {
            trace!(blocks = self.blocks.len(), "unclosed blocks rolled back to literal text");
            self.literalize(offset, true);
        }
        self.blocks.clear();

        self.concat(0);
        debug_assert_eq!(self.stack.len(), 1);
        let root = self.stack[0];
        self.stack.clear();

        let tree = self.pool.finish(root);
        debug!(len = input.len(), nodes = tree.len(), "parsed pattern");
        Ok(tree)
    }

    fn push(&mut self, kind: SyntaxKind, text: &[u8]) {
        let id = self.pool.alloc(kind);
        self.pool[id].value.extend_from_slice(text);
        self.stack.push(id);
    }

    /// Appends to the literal on top of the stack, or pushes a new one.
    fn literal(&mut self, text: &[u8]) {
        match self.stack.last() {
            Some(&top) if self.pool[top].kind == LITERAL => {
                self.pool[top].value.extend_from_slice(text);
            }
            _ => self.push(LITERAL, text),
        }
    }

    fn delimiter(&mut self, text: &[u8]) {
        let Some(block) = self.blocks.last_mut() else {
            return self.literal(text);
        };

        block.delims += 1;
        let demote = block.ranges < -1 || block.ranges > 0;
        if demote {
            block.ranges = 0;
        }
        let base = block.base;

        if demote {
            trace!(base, "range separators demoted to literal text");
            self.literalize(base + 1, false);
        }

        self.concat_segment();
        self.push(BRACE_DELIMITER, text);
    }

    fn range_separator(&mut self, text: &[u8]) {
        let Some(block) = self.blocks.last_mut() else {
            return self.literal(text);
        };

        if block.delims > 0 || block.ranges < 0 || block.ranges >= 2 {
            return self.literal(text);
        }

        let items = self.stack.len() - block.base;
        if items != 2 && items != 4 {
            block.ranges = !block.ranges;
            return self.literal(text);
        }

        block.ranges += 1;
        self.push(BRACE_RANGE, text);
    }

    fn close(&mut self, text: &[u8]) {
        let Some(block) = self.blocks.pop() else {
            return self.literal(text);
        };

        if block.delims > 0 {
            self.concat_segment();
            self.alternate(block.base);
            return;
        }

        if block.ranges > 0 && self.range(block.base) {
            return;
        }

        trace!(base = block.base, "brace block rolled back to literal text");
        self.literalize(block.base, true);
        self.literal(text);
    }

    /// Reduces the nodes pushed since the last pseudo node.
    fn concat_segment(&mut self) {
        let pool = &self.pool;
        let offset = self
            .stack
            .iter()
            .rposition(|&id| pool[id].kind.is_pseudo())
            .map_or(0, |index| index + 1);
        self.concat(offset);
    }

    fn concat(&mut self, offset: usize) {
        match self.stack.len() - offset {
            0 => return self.push(EMPTY, b""),
            1 => return,
            _ => {}
        }
        self.reduce(CONCAT, offset);
    }

    fn alternate(&mut self, base: usize) {
        self.reduce(ALTERNATE, base);
    }

    /// Replaces `stack[offset..]` with a single `kind` list node. Pseudo
    /// nodes are dropped and nested lists of the same kind are spliced in.
    fn reduce(&mut self, kind: SyntaxKind, offset: usize) {
        let id = self.pool.alloc(kind);
        let mut children = std::mem::take(&mut self.pool[id].children);

        for item in self.stack.drain(offset..) {
            let item_kind = self.pool[item].kind;
            if item_kind.is_pseudo() {
                self.pool.release(item);
            } else if item_kind == kind {
                children.append(&mut self.pool[item].children);
                self.pool.release(item);
            } else {
                children.push(item);
            }
        }

        self.pool[id].children = children;
        self.stack.push(id);
    }

    /// Merges every run of literal and pseudo nodes in `stack[offset..]`
    /// into one literal. With `backward`, a literal right below `offset`
    /// joins the first run.
    fn literalize(&mut self, offset: usize, backward: bool) {
        let mut offset = offset;
        if backward && offset > 0 && self.pool[self.stack[offset - 1]].kind == LITERAL {
            offset -= 1;
        }

        let mut first: Option<PendingId> = None;
        let mut write = offset;
        for read in offset..self.stack.len() {
            let item = self.stack[read];
            let kind = self.pool[item].kind;

            if kind == LITERAL || kind.is_pseudo() {
                if first.is_some() {
                    self.scratch.extend_from_slice(&self.pool[item].value);
                    self.pool.release(item);
                    continue;
                }
                first = Some(item);
                self.scratch.clear();
                self.pool[item].kind = LITERAL;
            } else if let Some(run) = first.take() {
                self.pool[run].value.extend_from_slice(&self.scratch);
            }

            self.stack[write] = item;
            write += 1;
        }

        if let Some(run) = first {
            self.pool[run].value.extend_from_slice(&self.scratch);
        }
        self.stack.truncate(write);
    }

    /// Tries to reduce the block at `base` into a range node.
    fn range(&mut self, base: usize) -> bool {
        let nodes = &self.stack[base..];
        let step = match nodes.len() {
            4 => 0,
            6 => {
                let (separator, step) = (&self.pool[nodes[4]], &self.pool[nodes[5]]);
                if separator.kind != BRACE_RANGE || step.kind != LITERAL {
                    return false;
                }
                match range::parse_int(&step.value) {
                    Some(step) => step,
                    None => return false,
                }
            }
            _ => return false,
        };

        if self.pool[nodes[2]].kind != BRACE_RANGE {
            return false;
        }

        let (Some(start), Some(end)) = (self.endpoint(nodes[1]), self.endpoint(nodes[3])) else {
            return false;
        };

        let Some((kind, data)) = range::build(start, end, step, self.flags) else {
            return false;
        };

        for item in self.stack.drain(base..) {
            self.pool.release(item);
        }

        let id = self.pool.alloc(kind);
        self.pool[id].range = data;
        self.stack.push(id);
        true
    }

    fn endpoint(&self, id: PendingId) -> Option<&[u8]> {
        let node = &self.pool[id];
        match node.kind {
            LITERAL => Some(node.value.as_slice()),
            ESCAPE => node.value.get(1..),
            _ => None,
        }
    }
}

fn source(input: &[u8], range: TextRange) -> &[u8] {
    &input[usize::from(range.start())..usize::from(range.end())]
}
