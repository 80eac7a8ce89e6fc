//! HTML codec for [`Document`].
//!
//! Serialization is canonical: one tag per construct, marks nested in
//! [`Mark`] order with shared marks kept open across adjacent runs. The
//! parser is lenient and accepts whatever a browser editor or a paste might
//! produce, keeping the text of anything it does not understand.

use crate::modules::editor::document::{Block, Document, Inline, ListKind, Mark, Marks};

// ──────────────────────────────────────────────────────────
// Serialize
// ──────────────────────────────────────────────────────────

pub fn serialize(doc: &Document) -> String {
    let mut out = String::new();
    write_blocks(&mut out, &doc.blocks);
    out
}

fn write_blocks(out: &mut String, blocks: &[Block]) {
    for block in blocks {
        match block {
            Block::Paragraph(content) => {
                out.push_str("<p>");
                write_inlines(out, content);
                out.push_str("</p>");
            }
            Block::Heading { level, content } => {
                out.push_str(&format!("<h{}>", level));
                write_inlines(out, content);
                out.push_str(&format!("</h{}>", level));
            }
            Block::List { kind, items } => {
                out.push_str(&format!("<{}>", kind.tag()));
                for item in items {
                    out.push_str("<li>");
                    write_blocks(out, item);
                    out.push_str("</li>");
                }
                out.push_str(&format!("</{}>", kind.tag()));
            }
            Block::Blockquote(children) => {
                out.push_str("<blockquote>");
                write_blocks(out, children);
                out.push_str("</blockquote>");
            }
            Block::HorizontalRule => out.push_str("<hr>"),
        }
    }
}

fn write_inlines(out: &mut String, inlines: &[Inline]) {
    let mut open: Vec<Mark> = Vec::new();

    for inline in inlines {
        let wanted: Vec<Mark> = match inline {
            Inline::Text { marks, .. } => marks.iter().copied().collect(),
            Inline::HardBreak => Vec::new(),
        };

        let keep = open
            .iter()
            .zip(&wanted)
            .take_while(|(a, b)| a == b)
            .count();

        while open.len() > keep {
            if let Some(mark) = open.pop() {
                out.push_str(&format!("</{}>", mark.tag()));
            }
        }
        for mark in &wanted[keep..] {
            out.push_str(&format!("<{}>", mark.tag()));
            open.push(*mark);
        }

        match inline {
            Inline::Text { text, .. } => escape_into(out, text),
            Inline::HardBreak => out.push_str("<br>"),
        }
    }

    while let Some(mark) = open.pop() {
        out.push_str(&format!("</{}>", mark.tag()));
    }
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            c => out.push(c),
        }
    }
}

// ──────────────────────────────────────────────────────────
// Parse
// ──────────────────────────────────────────────────────────

pub fn parse(html: &str) -> Document {
    let tree = build_tree(tokenize(html));
    let mut builder = BlockBuilder::default();
    builder.push_nodes(&tree);
    Document::new(builder.finish())
}

#[derive(Debug, PartialEq)]
enum Token {
    Start { name: String, self_closing: bool },
    End(String),
    Text(String),
}

#[derive(Debug)]
enum Node {
    Element { name: String, children: Vec<Node> },
    Text(String),
}

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

fn tokenize(html: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = html;

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix("<!--") {
            rest = after.find("-->").map(|end| &after[end + 3..]).unwrap_or("");
            continue;
        }

        if rest.starts_with("<!") || rest.starts_with("<?") {
            rest = rest.find('>').map(|end| &rest[end + 1..]).unwrap_or("");
            continue;
        }

        if let Some(after) = rest.strip_prefix("</") {
            if after.starts_with(|c: char| c.is_ascii_alphabetic()) {
                let end = tag_end(after);
                tokens.push(Token::End(tag_name(&after[..end])));
                rest = after.get(end + 1..).unwrap_or("");
                continue;
            }
        }

        if let Some(after) = rest.strip_prefix('<') {
            if after.starts_with(|c: char| c.is_ascii_alphabetic()) {
                let end = tag_end(after);
                let inner = &after[..end];
                let name = tag_name(inner);
                let self_closing = inner.trim_end().ends_with('/');
                rest = after.get(end + 1..).unwrap_or("");

                if RAW_TEXT_ELEMENTS.contains(&name.as_str()) && !self_closing {
                    // drop the element's raw content entirely
                    let close = format!("</{}", name);
                    rest = rest
                        .to_ascii_lowercase()
                        .find(&close)
                        .and_then(|at| rest[at..].find('>').map(|gt| &rest[at + gt + 1..]))
                        .unwrap_or("");
                    continue;
                }

                tokens.push(Token::Start { name, self_closing });
                continue;
            }
        }

        // text runs to the next '<'; a '<' that opens nothing is literal
        let skip = rest.chars().next().map(char::len_utf8).unwrap_or(1);
        let end = rest[skip..].find('<').map(|i| i + skip).unwrap_or(rest.len());
        let text = decode_entities(&rest[..end]);
        match tokens.last_mut() {
            Some(Token::Text(prev)) => prev.push_str(&text),
            _ => tokens.push(Token::Text(text)),
        }
        rest = &rest[end..];
    }

    tokens
}

/// Byte offset of the `>` closing a tag, ignoring any inside quoted
/// attribute values.
fn tag_end(s: &str) -> usize {
    let mut quote: Option<char> = None;
    for (i, c) in s.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == '>' => return i,
            None => {}
        }
    }
    s.len()
}

fn tag_name(inner: &str) -> String {
    inner
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect::<String>()
        .to_ascii_lowercase()
}

fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let candidate = &rest[amp..];

        let decoded = candidate
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| decode_entity(&candidate[1..semi]).map(|c| (c, semi)));

        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &candidate[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &candidate[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let code = name.strip_prefix('#')?;
            let value = match code.strip_prefix('x').or_else(|| code.strip_prefix('X')) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse::<u32>().ok()?,
            };
            char::from_u32(value)
        }
    }
}

fn build_tree(tokens: Vec<Token>) -> Vec<Node> {
    // the root frame has an empty name, which no end tag can match
    let mut stack: Vec<(String, Vec<Node>)> = vec![(String::new(), Vec::new())];

    for token in tokens {
        match token {
            Token::Text(text) => {
                if let Some((_, children)) = stack.last_mut() {
                    children.push(Node::Text(text));
                }
            }
            Token::Start { name, self_closing } => {
                if self_closing || VOID_ELEMENTS.contains(&name.as_str()) {
                    if let Some((_, children)) = stack.last_mut() {
                        children.push(Node::Element {
                            name,
                            children: Vec::new(),
                        });
                    }
                } else {
                    stack.push((name, Vec::new()));
                }
            }
            Token::End(name) => {
                if let Some(pos) = stack.iter().rposition(|(open, _)| *open == name) {
                    while stack.len() > pos.max(1) {
                        close_top(&mut stack);
                    }
                }
            }
        }
    }

    while stack.len() > 1 {
        close_top(&mut stack);
    }

    stack.pop().map(|(_, children)| children).unwrap_or_default()
}

fn close_top(stack: &mut Vec<(String, Vec<Node>)>) {
    if let Some((name, children)) = stack.pop() {
        if let Some((_, parent)) = stack.last_mut() {
            parent.push(Node::Element { name, children });
        }
    }
}

fn heading_level(name: &str) -> Option<u8> {
    match name {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

fn is_inline_element(name: &str) -> bool {
    Mark::from_tag(name).is_some()
        || matches!(
            name,
            "br" | "span" | "a" | "u" | "sub" | "sup" | "small" | "mark" | "abbr" | "label"
        )
}

/// Collects blocks; loose inline content between blocks becomes a paragraph.
#[derive(Default)]
struct BlockBuilder {
    blocks: Vec<Block>,
    pending: Vec<Inline>,
}

impl BlockBuilder {
    fn push_nodes(&mut self, nodes: &[Node]) {
        for node in nodes {
            match node {
                Node::Text(text) => self.pending.push(Inline::text(text.clone())),
                Node::Element { name, children } => self.push_element(name, children),
            }
        }
    }

    fn push_element(&mut self, name: &str, children: &[Node]) {
        if let Some(level) = heading_level(name) {
            self.flush();
            self.blocks.push(Block::Heading {
                level,
                content: inlines_from(children, &Marks::new()),
            });
            return;
        }

        match name {
            "p" => {
                self.flush();
                self.blocks
                    .push(Block::Paragraph(inlines_from(children, &Marks::new())));
            }
            "ul" | "ol" => {
                self.flush();
                let kind = if name == "ol" {
                    ListKind::Ordered
                } else {
                    ListKind::Bullet
                };
                self.blocks.push(Block::List {
                    kind,
                    items: list_items(children),
                });
            }
            "blockquote" => {
                self.flush();
                self.blocks.push(Block::Blockquote(blocks_from(children)));
            }
            "hr" => {
                self.flush();
                self.blocks.push(Block::HorizontalRule);
            }
            "li" => {
                self.flush();
                self.blocks.extend(blocks_from(children));
            }
            "br" => self.pending.push(Inline::HardBreak),
            n if is_inline_element(n) => {
                let marks = element_marks(name, &Marks::new());
                self.pending.extend(inlines_from(children, &marks));
            }
            // div, section, body and anything unknown: keep the content
            _ => self.push_nodes(children),
        }
    }

    fn flush(&mut self) {
        let mut pending = std::mem::take(&mut self.pending);

        let is_blank =
            |i: &Inline| matches!(i, Inline::Text { text, .. } if text.trim().is_empty());
        while pending.first().is_some_and(is_blank) {
            pending.remove(0);
        }
        while pending.last().is_some_and(is_blank) {
            pending.pop();
        }

        if !pending.is_empty() {
            self.blocks.push(Block::Paragraph(pending));
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush();
        self.blocks
    }
}

fn element_marks(name: &str, inherited: &Marks) -> Marks {
    let mut marks = inherited.clone();
    if let Some(mark) = Mark::from_tag(name) {
        marks.insert(mark);
    }
    marks
}

fn blocks_from(nodes: &[Node]) -> Vec<Block> {
    let mut builder = BlockBuilder::default();
    builder.push_nodes(nodes);
    builder.finish()
}

fn list_items(nodes: &[Node]) -> Vec<Vec<Block>> {
    let mut items = Vec::new();

    for node in nodes {
        match node {
            Node::Element { name, children } if name == "li" => items.push(blocks_from(children)),
            Node::Text(text) if text.trim().is_empty() => {}
            other => {
                let blocks = blocks_from(std::slice::from_ref(other));
                if !blocks.is_empty() {
                    items.push(blocks);
                }
            }
        }
    }

    items
}

/// Inline content; block tags met here are flattened to their text.
fn inlines_from(nodes: &[Node], marks: &Marks) -> Vec<Inline> {
    let mut inlines = Vec::new();

    for node in nodes {
        match node {
            Node::Text(text) => inlines.push(Inline::Text {
                text: text.clone(),
                marks: marks.clone(),
            }),
            Node::Element { name, .. } if name == "br" => inlines.push(Inline::HardBreak),
            Node::Element { name, children } => {
                inlines.extend(inlines_from(children, &element_marks(name, marks)));
            }
        }
    }

    inlines
}
