use std::collections::BTreeSet;

/// Inline formatting. The order is the nesting order used when serializing:
/// bold wraps italic wraps strike wraps code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mark {
    Bold,
    Italic,
    Strike,
    Code,
}

impl Mark {
    pub fn tag(self) -> &'static str {
        match self {
            Mark::Bold => "strong",
            Mark::Italic => "em",
            Mark::Strike => "s",
            Mark::Code => "code",
        }
    }

    /// Canonical tags plus the aliases pasted content tends to use.
    pub fn from_tag(tag: &str) -> Option<Mark> {
        match tag {
            "strong" | "b" => Some(Mark::Bold),
            "em" | "i" => Some(Mark::Italic),
            "s" | "strike" | "del" => Some(Mark::Strike),
            "code" => Some(Mark::Code),
            _ => None,
        }
    }
}

pub type Marks = BTreeSet<Mark>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text { text: String, marks: Marks },
    HardBreak,
}

impl Inline {
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text {
            text: text.into(),
            marks: Marks::new(),
        }
    }

    pub fn marked(text: impl Into<String>, marks: &[Mark]) -> Self {
        Inline::Text {
            text: text.into(),
            marks: marks.iter().copied().collect(),
        }
    }

    /// Length in cursor positions; a hard break is one position.
    pub fn len(&self) -> usize {
        match self {
            Inline::Text { text, .. } => text.chars().count(),
            Inline::HardBreak => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Ordered,
}

impl ListKind {
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Bullet => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Vec<Inline>),
    Heading { level: u8, content: Vec<Inline> },
    /// Each item is a sequence of blocks starting with a paragraph.
    List { kind: ListKind, items: Vec<Vec<Block>> },
    Blockquote(Vec<Block>),
    HorizontalRule,
}

impl Block {
    pub fn is_textblock(&self) -> bool {
        matches!(self, Block::Paragraph(_) | Block::Heading { .. })
    }

    pub fn inlines(&self) -> Option<&Vec<Inline>> {
        match self {
            Block::Paragraph(content) | Block::Heading { content, .. } => Some(content),
            _ => None,
        }
    }

    pub fn inlines_mut(&mut self) -> Option<&mut Vec<Inline>> {
        match self {
            Block::Paragraph(content) | Block::Heading { content, .. } => Some(content),
            _ => None,
        }
    }
}

/// Rich-text document. Always kept normalized: adjacent text runs with equal
/// marks are merged, empty runs dropped, and there is at least one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            blocks: vec![Block::Paragraph(Vec::new())],
        }
    }
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        let mut doc = Self { blocks };
        doc.normalize();
        doc
    }

    pub fn normalize(&mut self) {
        normalize_blocks(&mut self.blocks);
        if self.blocks.is_empty() {
            self.blocks.push(Block::Paragraph(Vec::new()));
        }
    }

    /// No visible text and no rule. `<p></p>` and `<p> </p>` are empty.
    pub fn is_empty(&self) -> bool {
        !blocks_have_content(&self.blocks)
    }

    /// Paragraphs and headings, depth first.
    pub fn textblock_count(&self) -> usize {
        count_textblocks(&self.blocks)
    }

    pub fn textblock(&self, index: usize) -> Option<&Block> {
        let path = self.locate(index)?;
        let (&last, prefix) = path.split_last()?;
        container(&self.blocks, prefix)?.get(last)
    }

    /// Path to the `index`-th textblock: block indices, with an extra item
    /// index after every list.
    pub fn locate(&self, index: usize) -> Option<Vec<usize>> {
        let mut remaining = index;
        let mut path = Vec::new();
        locate_in(&self.blocks, &mut remaining, &mut path).then_some(path)
    }

    pub fn container_mut(&mut self, prefix: &[usize]) -> Option<&mut Vec<Block>> {
        container_mut(&mut self.blocks, prefix)
    }

    pub fn container(&self, prefix: &[usize]) -> Option<&Vec<Block>> {
        container(&self.blocks, prefix)
    }
}

pub fn normalize_inlines(inlines: &mut Vec<Inline>) {
    let mut merged: Vec<Inline> = Vec::with_capacity(inlines.len());

    for inline in inlines.drain(..) {
        match inline {
            Inline::Text { ref text, .. } if text.is_empty() => {}
            Inline::Text { text, marks } => match merged.last_mut() {
                Some(Inline::Text {
                    text: prev,
                    marks: prev_marks,
                }) if *prev_marks == marks => prev.push_str(&text),
                _ => merged.push(Inline::Text { text, marks }),
            },
            Inline::HardBreak => merged.push(Inline::HardBreak),
        }
    }

    *inlines = merged;
}

fn normalize_blocks(blocks: &mut Vec<Block>) {
    for block in blocks.iter_mut() {
        match block {
            Block::Paragraph(content) => normalize_inlines(content),
            Block::Heading { level, content } => {
                *level = (*level).clamp(1, 6);
                normalize_inlines(content);
            }
            Block::List { items, .. } => {
                for item in items.iter_mut() {
                    normalize_blocks(item);
                    if !item.first().is_some_and(|b| matches!(b, Block::Paragraph(_))) {
                        item.insert(0, Block::Paragraph(Vec::new()));
                    }
                }
            }
            Block::Blockquote(children) => {
                normalize_blocks(children);
                if children.is_empty() {
                    children.push(Block::Paragraph(Vec::new()));
                }
            }
            Block::HorizontalRule => {}
        }
    }

    blocks.retain(|b| !matches!(b, Block::List { items, .. } if items.is_empty()));
}

fn blocks_have_content(blocks: &[Block]) -> bool {
    blocks.iter().any(|block| match block {
        Block::Paragraph(content) | Block::Heading { content, .. } => content
            .iter()
            .any(|i| matches!(i, Inline::Text { text, .. } if !text.trim().is_empty())),
        Block::List { items, .. } => items.iter().any(|item| blocks_have_content(item)),
        Block::Blockquote(children) => blocks_have_content(children),
        Block::HorizontalRule => true,
    })
}

fn count_textblocks(blocks: &[Block]) -> usize {
    blocks
        .iter()
        .map(|block| match block {
            Block::Paragraph(_) | Block::Heading { .. } => 1,
            Block::List { items, .. } => items.iter().map(|item| count_textblocks(item)).sum(),
            Block::Blockquote(children) => count_textblocks(children),
            Block::HorizontalRule => 0,
        })
        .sum()
}

fn locate_in(blocks: &[Block], remaining: &mut usize, path: &mut Vec<usize>) -> bool {
    for (i, block) in blocks.iter().enumerate() {
        path.push(i);
        match block {
            Block::Paragraph(_) | Block::Heading { .. } => {
                if *remaining == 0 {
                    return true;
                }
                *remaining -= 1;
            }
            Block::Blockquote(children) => {
                if locate_in(children, remaining, path) {
                    return true;
                }
            }
            Block::List { items, .. } => {
                for (j, item) in items.iter().enumerate() {
                    path.push(j);
                    if locate_in(item, remaining, path) {
                        return true;
                    }
                    path.pop();
                }
            }
            Block::HorizontalRule => {}
        }
        path.pop();
    }
    false
}

fn container<'a>(blocks: &'a Vec<Block>, prefix: &[usize]) -> Option<&'a Vec<Block>> {
    let Some((&i, rest)) = prefix.split_first() else {
        return Some(blocks);
    };

    match blocks.get(i)? {
        Block::Blockquote(children) => container(children, rest),
        Block::List { items, .. } => {
            let (&j, rest) = rest.split_first()?;
            container(items.get(j)?, rest)
        }
        _ => None,
    }
}

fn container_mut<'a>(blocks: &'a mut Vec<Block>, prefix: &[usize]) -> Option<&'a mut Vec<Block>> {
    let Some((&i, rest)) = prefix.split_first() else {
        return Some(blocks);
    };

    match blocks.get_mut(i)? {
        Block::Blockquote(children) => container_mut(children, rest),
        Block::List { items, .. } => {
            let (&j, rest) = rest.split_first()?;
            container_mut(items.get_mut(j)?, rest)
        }
        _ => None,
    }
}
