use std::fmt;

use tracing::debug;

use crate::modules::editor::document::{
    normalize_inlines, Block, Document, Inline, ListKind, Mark, Marks,
};
use crate::modules::editor::html;

/// Cursor or range inside one paragraph or heading. `block` counts
/// textblocks depth first; `from`/`to` are character offsets where a hard
/// break counts as one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub block: usize,
    pub from: usize,
    pub to: usize,
}

impl Selection {
    pub fn cursor(block: usize, offset: usize) -> Self {
        Self {
            block,
            from: offset,
            to: offset,
        }
    }

    pub fn range(block: usize, from: usize, to: usize) -> Self {
        Self {
            block,
            from: from.min(to),
            to: from.max(to),
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.from == self.to
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    InsertText(String),
    ToggleMark(Mark),
    ToggleList(ListKind),
    SetParagraph,
    SetHeading(u8),
    /// Enter: splits the current block at the cursor.
    InsertParagraph,
    InsertHardBreak,
    InsertHorizontalRule,
}

type ChangeListener = Box<dyn FnMut(&str) + Send>;

/// Two-way binding between a rich-text document and the HTML string a form
/// stores.
///
/// The document is the source of truth while editing. Every command that
/// changes the serialized HTML reports it to the listener exactly once.
/// Values pushed in from outside go through [`RichTextEditor::set_content`],
/// which ignores the editor's own output so a listener that writes back
/// into the form cannot cause a loop.
pub struct RichTextEditor {
    doc: Document,
    html: String,
    last_external: Option<String>,
    selection: Selection,
    stored_marks: Option<Marks>,
    listener: Option<ChangeListener>,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for RichTextEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RichTextEditor")
            .field("html", &self.html)
            .field("selection", &self.selection)
            .finish()
    }
}

impl RichTextEditor {
    pub fn new(initial_html: &str) -> Self {
        let doc = html::parse(initial_html);
        let html = html::serialize(&doc);
        Self {
            doc,
            html,
            last_external: Some(initial_html.to_string()),
            selection: Selection::default(),
            stored_marks: None,
            listener: None,
        }
    }

    pub fn with_listener(initial_html: &str, listener: impl FnMut(&str) + Send + 'static) -> Self {
        let mut editor = Self::new(initial_html);
        editor.on_change(listener);
        editor
    }

    pub fn on_change(&mut self, listener: impl FnMut(&str) + Send + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn is_empty(&self) -> bool {
        self.doc.is_empty()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Moves the selection, clamped to the document.
    pub fn select(&mut self, selection: Selection) {
        let count = self.doc.textblock_count();
        let block = selection.block.min(count.saturating_sub(1));
        let len = self.textblock_len(block);
        self.selection = Selection::range(block, selection.from.min(len), selection.to.min(len));
        self.stored_marks = None;
    }

    /// Keeps the selection inside the document after normalization moved
    /// blocks around. Stored marks survive.
    fn clamp_selection(&mut self) {
        let stored = self.stored_marks.take();
        self.select(self.selection);
        self.stored_marks = stored;
    }

    pub fn set_cursor(&mut self, block: usize, offset: usize) {
        self.select(Selection::cursor(block, offset));
    }

    /// Replaces the document with `html` unless it is the editor's current
    /// output or the value already applied last time. Emits nothing.
    /// Returns whether the document was replaced.
    pub fn set_content(&mut self, html: &str) -> bool {
        if html == self.html || self.last_external.as_deref() == Some(html) {
            return false;
        }

        debug!("Editor content replaced from outside");
        self.doc = html::parse(html);
        self.html = html::serialize(&self.doc);
        self.last_external = Some(html.to_string());
        self.selection = Selection::default();
        self.stored_marks = None;
        true
    }

    /// Whether `mark` applies at the cursor, or to all text in the range.
    pub fn is_active(&self, mark: Mark) -> bool {
        if self.selection.is_collapsed() {
            if let Some(stored) = &self.stored_marks {
                return stored.contains(&mark);
            }
            return self.marks_at_cursor().contains(&mark);
        }

        let cells = self.current_cells();
        let mut texts = cells
            .get(self.selection.from..self.selection.to)
            .unwrap_or_default()
            .iter()
            .filter_map(Cell::marks)
            .peekable();
        texts.peek().is_some() && texts.all(|m| m.contains(&mark))
    }

    /// Applies `command`. Returns whether the HTML changed.
    pub fn apply(&mut self, command: EditorCommand) -> bool {
        match command {
            EditorCommand::InsertText(text) => self.insert_text(&text),
            EditorCommand::ToggleMark(mark) => self.toggle_mark(mark),
            EditorCommand::ToggleList(kind) => self.toggle_list(kind),
            EditorCommand::SetParagraph => self.set_block_type(None),
            EditorCommand::SetHeading(level) => self.set_block_type(Some(level.clamp(1, 6))),
            EditorCommand::InsertParagraph => self.split_block(),
            EditorCommand::InsertHardBreak => self.replace_selection(vec![Cell::Break]),
            EditorCommand::InsertHorizontalRule => self.insert_rule(),
        }

        self.doc.normalize();
        self.clamp_selection();
        self.sync()
    }

    fn sync(&mut self) -> bool {
        let html = html::serialize(&self.doc);
        if html == self.html {
            return false;
        }

        self.html = html;
        if let Some(listener) = self.listener.as_mut() {
            listener(&self.html);
        }
        true
    }

    // ──────────────────────────────────────────────────────────
    // Inline edits
    // ──────────────────────────────────────────────────────────

    fn insert_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }

        let marks = self
            .stored_marks
            .clone()
            .unwrap_or_else(|| self.marks_at_cursor());
        let cells = text.chars().map(|c| Cell::Char(c, marks.clone())).collect();
        self.replace_selection(cells);
    }

    fn replace_selection(&mut self, insert: Vec<Cell>) {
        let Selection { block, from, to } = self.selection;
        let inserted = insert.len();

        self.edit_cells(|cells| {
            let to = to.min(cells.len());
            cells.splice(from.min(to)..to, insert);
        });
        self.selection = Selection::cursor(block, from + inserted);
    }

    fn toggle_mark(&mut self, mark: Mark) {
        if self.selection.is_collapsed() {
            let mut marks = self
                .stored_marks
                .clone()
                .unwrap_or_else(|| self.marks_at_cursor());
            if !marks.remove(&mark) {
                marks.insert(mark);
            }
            self.stored_marks = Some(marks);
            return;
        }

        let remove = self.is_active(mark);
        let Selection { from, to, .. } = self.selection;
        self.edit_cells(|cells| {
            let to = to.min(cells.len());
            for cell in &mut cells[from.min(to)..to] {
                if let Cell::Char(_, marks) = cell {
                    if remove {
                        marks.remove(&mark);
                    } else {
                        marks.insert(mark);
                    }
                }
            }
        });
    }

    fn marks_at_cursor(&self) -> Marks {
        let cells = self.current_cells();
        let at = self.selection.from;

        let before = at.checked_sub(1).and_then(|i| cells.get(i));
        before
            .or_else(|| cells.get(at))
            .and_then(Cell::marks)
            .cloned()
            .unwrap_or_default()
    }

    fn current_cells(&self) -> Vec<Cell> {
        self.doc
            .textblock(self.selection.block)
            .and_then(Block::inlines)
            .map(|inlines| explode(inlines))
            .unwrap_or_default()
    }

    fn textblock_len(&self, block: usize) -> usize {
        self.doc
            .textblock(block)
            .and_then(Block::inlines)
            .map(|inlines| inlines.iter().map(Inline::len).sum())
            .unwrap_or(0)
    }

    fn edit_cells(&mut self, edit: impl FnOnce(&mut Vec<Cell>)) {
        let Some((container, index)) = self.current_container() else {
            return;
        };
        let Some(inlines) = self
            .doc
            .container_mut(&container)
            .and_then(|blocks| blocks.get_mut(index))
            .and_then(Block::inlines_mut)
        else {
            return;
        };

        let mut cells = explode(inlines);
        edit(&mut cells);
        *inlines = implode(cells);
    }

    /// Path of the container holding the selected textblock, and its index
    /// there.
    fn current_container(&self) -> Option<(Vec<usize>, usize)> {
        let mut path = self.doc.locate(self.selection.block)?;
        let index = path.pop()?;
        Some((path, index))
    }

    // ──────────────────────────────────────────────────────────
    // Block edits
    // ──────────────────────────────────────────────────────────

    fn set_block_type(&mut self, level: Option<u8>) {
        let Some((container, index)) = self.current_container() else {
            return;
        };
        // list items always open with a paragraph
        if level.is_some() && self.list_item_of(&container).is_some() {
            return;
        }
        let Some(block) = self
            .doc
            .container_mut(&container)
            .and_then(|blocks| blocks.get_mut(index))
        else {
            return;
        };

        let content = block.inlines().cloned().unwrap_or_default();
        *block = match level {
            Some(level) => Block::Heading { level, content },
            None => Block::Paragraph(content),
        };
    }

    fn split_block(&mut self) {
        let Selection { block, from, to } = self.selection;
        let Some((container, index)) = self.current_container() else {
            return;
        };
        let in_list_item = self.list_item_of(&container).is_some();
        let Some(blocks) = self.doc.container_mut(&container) else {
            return;
        };
        let Some(current) = blocks.get_mut(index) else {
            return;
        };
        let Some(inlines) = current.inlines_mut() else {
            return;
        };

        let mut cells = explode(inlines);
        let at_end = to >= cells.len();
        let tail = cells.split_off(to.min(cells.len()));
        cells.truncate(from);
        *inlines = implode(cells);

        let tail = implode(tail);
        let next = match current {
            Block::Heading { level, .. } if !at_end => Block::Heading {
                level: *level,
                content: tail,
            },
            _ => Block::Paragraph(tail),
        };

        if in_list_item {
            // Enter inside a list item starts a new item with the rest
            let rest: Vec<Block> = blocks.drain(index + 1..).collect();
            let mut item = vec![next];
            item.extend(rest);
            self.insert_list_item_after(&container, item);
        } else {
            blocks.insert(index + 1, next);
        }

        self.selection = Selection::cursor(block + 1, 0);
    }

    fn insert_rule(&mut self) {
        let Some((container, index)) = self.current_container() else {
            return;
        };
        let Some(blocks) = self.doc.container_mut(&container) else {
            return;
        };

        blocks.insert(index + 1, Block::HorizontalRule);
        if index + 2 == blocks.len() {
            blocks.push(Block::Paragraph(Vec::new()));
            self.selection = Selection::cursor(self.selection.block + 1, 0);
        }
    }

    fn toggle_list(&mut self, kind: ListKind) {
        let Some((container, index)) = self.current_container() else {
            return;
        };

        if let Some((list_path, item)) = self.list_item_of(&container) {
            let Some((&list_index, outer)) = list_path.split_last() else {
                return;
            };
            let Some(siblings) = self.doc.container_mut(outer) else {
                return;
            };

            let same_kind = matches!(
                siblings.get(list_index),
                Some(Block::List { kind: current, .. }) if *current == kind
            );

            if same_kind {
                lift_item(siblings, list_index, item);
            } else if let Some(Block::List { kind: current, .. }) = siblings.get_mut(list_index) {
                *current = kind;
            }
            return;
        }

        let Some(blocks) = self.doc.container_mut(&container) else {
            return;
        };
        if index < blocks.len() {
            let block = match blocks.remove(index) {
                Block::Heading { content, .. } => Block::Paragraph(content),
                other => other,
            };
            blocks.insert(
                index,
                Block::List {
                    kind,
                    items: vec![vec![block]],
                },
            );
        }
    }

    /// When `container` is a list item, the path of its list and the item
    /// index.
    fn list_item_of(&self, container: &[usize]) -> Option<(Vec<usize>, usize)> {
        let (&item, list_path) = container.split_last()?;
        let (&list_index, outer) = list_path.split_last()?;
        match self.doc.container(outer)?.get(list_index)? {
            Block::List { .. } => Some((list_path.to_vec(), item)),
            _ => None,
        }
    }

    fn insert_list_item_after(&mut self, container: &[usize], item: Vec<Block>) {
        let Some((list_path, index)) = self.list_item_of(container) else {
            return;
        };
        let Some((&list_index, outer)) = list_path.split_last() else {
            return;
        };
        if let Some(Block::List { items, .. }) = self
            .doc
            .container_mut(outer)
            .and_then(|blocks| blocks.get_mut(list_index))
        {
            items.insert(index + 1, item);
        }
    }
}

/// Replaces the list at `list_index` with the items before `item`, the
/// item's own blocks, and the items after it.
fn lift_item(siblings: &mut Vec<Block>, list_index: usize, item: usize) {
    let Block::List { kind, mut items } = siblings.remove(list_index) else {
        return;
    };

    let after: Vec<Vec<Block>> = items.split_off((item + 1).min(items.len()));
    let lifted = items.pop().unwrap_or_default();

    let mut replacement = Vec::new();
    if !items.is_empty() {
        replacement.push(Block::List { kind, items });
    }
    replacement.extend(lifted);
    if !after.is_empty() {
        replacement.push(Block::List { kind, items: after });
    }

    for (offset, block) in replacement.into_iter().enumerate() {
        siblings.insert(list_index + offset, block);
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Cell {
    Char(char, Marks),
    Break,
}

impl Cell {
    fn marks(&self) -> Option<&Marks> {
        match self {
            Cell::Char(_, marks) => Some(marks),
            Cell::Break => None,
        }
    }
}

fn explode(inlines: &[Inline]) -> Vec<Cell> {
    inlines
        .iter()
        .flat_map(|inline| match inline {
            Inline::Text { text, marks } => text
                .chars()
                .map(|c| Cell::Char(c, marks.clone()))
                .collect::<Vec<_>>(),
            Inline::HardBreak => vec![Cell::Break],
        })
        .collect()
}

fn implode(cells: Vec<Cell>) -> Vec<Inline> {
    let mut inlines: Vec<Inline> = cells
        .into_iter()
        .map(|cell| match cell {
            Cell::Char(c, marks) => Inline::Text {
                text: c.to_string(),
                marks,
            },
            Cell::Break => Inline::HardBreak,
        })
        .collect();
    normalize_inlines(&mut inlines);
    inlines
}
