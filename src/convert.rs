use std::collections::HashSet;

use tracing::{debug, trace, warn};

use crate::config::{ConvertOptions, ExtractionScope, HeadingStyle};
use crate::dom::{Document, NodeId};
use crate::error::Result;
use crate::substitute::Substituter;

const HEADINGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];
const BLOCKS: [&str; 9] = ["p", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol"];

/// LaTeX command name for a heading of the given level (1..=6).
pub fn heading_command(level: usize, style: HeadingStyle) -> String {
    if level <= 1 {
        return "chapter".to_string();
    }
    match style {
        HeadingStyle::Literal => "section".repeat(level - 1),
        HeadingStyle::Standard => match level {
            2 => "section",
            3 => "subsection",
            4 => "subsubsection",
            5 => "paragraph",
            _ => "subparagraph",
        }
        .to_string(),
    }
}

#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
    substituter: Substituter,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        let substituter = Substituter::new(options.table, options.strategy);
        Converter {
            options,
            substituter,
        }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    pub fn convert(&self, html: &str) -> Result<String> {
        let mut doc = Document::parse(html)?;
        self.rewrite(&mut doc);
        Ok(self.extract(&doc))
    }

    /// Replace the content of every heading, bold, italic, list and link
    /// element with its LaTeX equivalent. Order matters: later steps see
    /// the strings written by earlier ones.
    pub fn rewrite(&self, doc: &mut Document) {
        self.rewrite_headings(doc);
        wrap_each(doc, &["b", "strong"], "textbf");
        wrap_each(doc, &["i", "em"], "textit");
        rewrite_lists(doc, "ul", "itemize");
        rewrite_lists(doc, "ol", "enumerate");
        rewrite_links(doc);
    }

    fn rewrite_headings(&self, doc: &mut Document) {
        for (i, &tag) in HEADINGS.iter().enumerate() {
            let command = heading_command(i + 1, self.options.headings);
            let found = doc.find_all(doc.root(), &[tag]);
            debug!(tag, count = found.len(), "rewriting headings");
            for id in found {
                let text = doc.text(id);
                doc.set_string(id, format!("\\{command}{{{text}}}"));
            }
        }
    }

    /// Substituted text of each paragraph-level node, joined in document order.
    pub fn extract(&self, doc: &Document) -> String {
        let nodes = match self.options.scope {
            ExtractionScope::Blocks => doc.find_outermost(doc.root(), &BLOCKS),
            ExtractionScope::Paragraphs => doc.find_all(doc.root(), &["p"]),
        };
        if nodes.is_empty() {
            warn!(scope = ?self.options.scope, "document has no paragraph-level content");
        }
        debug!(count = nodes.len(), "extracting paragraphs");

        let mut absorbed: HashSet<NodeId> = HashSet::new();
        let mut paragraphs: Vec<String> = Vec::with_capacity(nodes.len());
        for id in nodes {
            if absorbed.contains(&id) {
                continue;
            }
            let mut text = doc.text(id);
            if doc.tag_name(id) == Some("p") {
                for &sibling in displaced_run(doc, id) {
                    text.push_str(&doc.text(sibling));
                    absorbed.insert(sibling);
                }
            }
            paragraphs.push(self.substituter.apply(&text));
        }
        paragraphs.join(&self.options.separator)
    }
}

/// Content the tree builder pushed out of paragraph `p`.
///
/// A block start tag (`ul`, `div`, `h2`, ...) implicitly closes an open `p`,
/// and the paragraph's own `</p>` then has nothing to close, so it becomes a
/// new empty `p`. Everything between the two belongs to the paragraph as
/// written. Returns the run including the empty `p`, or nothing when the
/// next `p` sibling has content or there is none.
fn displaced_run(doc: &Document, p: NodeId) -> &[NodeId] {
    let siblings = doc.following_siblings(p);
    for (i, &sibling) in siblings.iter().enumerate() {
        if doc.tag_name(sibling) == Some("p") {
            if doc.children(sibling).is_empty() {
                trace!(absorbed = i + 1, "rejoining split paragraph");
                return &siblings[..=i];
            }
            break;
        }
    }
    &[]
}

fn wrap_each(doc: &mut Document, tags: &[&str], command: &str) {
    let found = doc.find_all(doc.root(), tags);
    debug!(command, count = found.len(), "wrapping inline elements");
    for id in found {
        let text = doc.text(id);
        doc.set_string(id, format!("\\{command}{{{text}}}"));
    }
}

fn list_items(doc: &Document, list: NodeId) -> Vec<String> {
    doc.children(list)
        .iter()
        .filter(|&&c| doc.tag_name(c) == Some("li"))
        .map(|&li| format!("\\item {}", doc.text(li)))
        .collect()
}

fn rewrite_lists(doc: &mut Document, tag: &str, environment: &str) {
    let found = doc.find_all(doc.root(), &[tag]);
    debug!(tag, count = found.len(), "rewriting lists");
    for id in found {
        let items = list_items(doc, id);
        trace!(tag, items = items.len(), "list");
        doc.set_string(
            id,
            format!(
                "\\begin{{{environment}}}\n{}\n\\end{{{environment}}}",
                items.join("\n")
            ),
        );
    }
}

fn rewrite_links(doc: &mut Document) {
    let found: Vec<(NodeId, String)> = doc
        .find_all(doc.root(), &["a"])
        .into_iter()
        .filter_map(|id| doc.attr(id, "href").map(|href| (id, href.to_string())))
        .collect();
    debug!(count = found.len(), "rewriting links");
    for (id, href) in found {
        let text = doc.text(id);
        doc.set_string(id, format!("\\href{{{href}}}{{{text}}}"));
    }
}

/// Convert HTML with the default options.
pub fn convert(html: &str) -> Result<String> {
    Converter::default().convert(html)
}

pub fn convert_with(html: &str, options: &ConvertOptions) -> Result<String> {
    Converter::new(options.clone()).convert(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Strategy, TableKind};

    #[test]
    fn heading_and_paragraph_scenario() {
        let out = convert("<h1>Title</h1><p>It\u{2019}s a café.</p>").unwrap();
        assert_eq!(out, r"\chapter{Title}It's a caf\'e.");
    }

    #[test]
    fn paragraph_scope_drops_headings() {
        let options = ConvertOptions {
            scope: ExtractionScope::Paragraphs,
            ..Default::default()
        };
        let out = convert_with("<h1>Title</h1><p>It\u{2019}s a café.</p>", &options).unwrap();
        assert_eq!(out, r"It's a caf\'e.");
    }

    #[test]
    fn unordered_list_without_paragraphs() {
        let out = convert("<ul><li>One</li><li>Two</li></ul>").unwrap();
        assert_eq!(out, "\\begin{itemize}\n\\item One\n\\item Two\n\\end{itemize}");
    }

    #[test]
    fn ordered_list_uses_enumerate() {
        let out = convert("<ol>\n  <li>First</li>\n  <li>Second</li>\n</ol>").unwrap();
        assert_eq!(
            out,
            "\\begin{enumerate}\n\\item First\n\\item Second\n\\end{enumerate}"
        );
    }

    #[test]
    fn empty_list_keeps_environment() {
        let out = convert("<ul></ul>").unwrap();
        assert_eq!(out, "\\begin{itemize}\n\n\\end{itemize}");
    }

    #[test]
    fn link_inside_paragraph() {
        let out = convert(r#"<p>See <a href="http://x.test">link</a>.</p>"#).unwrap();
        assert_eq!(out, r"See \href{http://x.test}{link}.");
    }

    #[test]
    fn anchor_without_href_is_left_alone() {
        let out = convert(r#"<p><a name="top">top</a></p>"#).unwrap();
        assert_eq!(out, "top");
    }

    #[test]
    fn empty_href_still_counts() {
        let out = convert(r#"<p><a href="">x</a></p>"#).unwrap();
        assert_eq!(out, r"\href{}{x}");
    }

    #[test]
    fn bold_and_italic() {
        let out = convert("<p><b>a</b> <strong>b</strong> <i>c</i> <em>d</em></p>").unwrap();
        assert_eq!(out, r"\textbf{a} \textbf{b} \textit{c} \textit{d}");
    }

    #[test]
    fn bold_is_baked_in_before_italic_wraps_it() {
        let out = convert("<p><i>x <b>y</b></i></p>").unwrap();
        assert_eq!(out, r"\textit{x \textbf{y}}");
    }

    #[test]
    fn heading_flattens_nested_bold() {
        let out = convert("<h2>A <b>B</b></h2>").unwrap();
        assert_eq!(out, r"\section{A B}");
    }

    #[test]
    fn bold_inside_list_item_is_kept() {
        let out = convert("<ul><li><b>One</b></li></ul>").unwrap();
        assert_eq!(out, "\\begin{itemize}\n\\item \\textbf{One}\n\\end{itemize}");
    }

    #[test]
    fn links_inside_lists_are_flattened() {
        // Lists are rewritten before links, so the anchor is already detached.
        let out = convert("<ul><li>see <a href=\"u\">two</a></li></ul>").unwrap();
        assert_eq!(out, "\\begin{itemize}\n\\item see two\n\\end{itemize}");
    }

    #[test]
    fn only_direct_list_items_become_items() {
        let out = convert("<ul><li>a<ol><li>b</li></ol></li></ul>").unwrap();
        assert_eq!(out, "\\begin{itemize}\n\\item ab\n\\end{itemize}");
    }

    #[test]
    fn empty_tags_produce_empty_commands() {
        let out = convert("<p><b></b><i></i></p><h3></h3>").unwrap();
        assert_eq!(out, r"\textbf{}\textit{}\sectionsection{}");
    }

    #[test]
    fn literal_heading_names() {
        let names: Vec<String> = (1..=6)
            .map(|l| heading_command(l, HeadingStyle::Literal))
            .collect();
        assert_eq!(
            names,
            vec![
                "chapter",
                "section",
                "sectionsection",
                "sectionsectionsection",
                "sectionsectionsectionsection",
                "sectionsectionsectionsectionsection",
            ]
        );
    }

    #[test]
    fn standard_heading_names() {
        let options = ConvertOptions {
            headings: HeadingStyle::Standard,
            ..Default::default()
        };
        let out = convert_with("<h1>a</h1><h3>b</h3><h6>c</h6>", &options).unwrap();
        assert_eq!(out, r"\chapter{a}\subsection{b}\subparagraph{c}");
    }

    #[test]
    fn content_outside_paragraphs_is_dropped() {
        let out = convert("<div>loose <span>text</span></div><p>kept <span>here</span></p>").unwrap();
        assert_eq!(out, "kept here");
    }

    #[test]
    fn separator_joins_paragraphs() {
        let options = ConvertOptions {
            separator: "\n\n".to_string(),
            ..Default::default()
        };
        let out = convert_with("<p>one</p><p>two</p>", &options).unwrap();
        assert_eq!(out, "one\n\ntwo");
        assert_eq!(convert("<p>one</p><p>two</p>").unwrap(), "onetwo");
    }

    #[test]
    fn compact_table_leaves_other_accents() {
        let options = ConvertOptions {
            table: TableKind::Compact,
            strategy: Strategy::LongestMatch,
            ..Default::default()
        };
        let out = convert_with("<p>à é</p>", &options).unwrap();
        assert_eq!(out, r"\`a é");
    }

    #[test]
    fn no_paragraphs_gives_empty_output() {
        assert_eq!(convert("<div>nothing</div>").unwrap(), "");
        assert_eq!(convert("").unwrap(), "");
    }

    #[test]
    fn text_after_list_stays_in_paragraph() {
        let out = convert("<p>Intro<ul><li>x</li></ul>after</p>").unwrap();
        assert_eq!(out, "Intro\\begin{itemize}\n\\item x\n\\end{itemize}after");
    }

    #[test]
    fn div_inside_paragraph_is_rejoined() {
        assert_eq!(convert("<p>a<div>b</div>c</p>").unwrap(), "abc");

        let options = ConvertOptions {
            scope: ExtractionScope::Paragraphs,
            ..Default::default()
        };
        assert_eq!(convert_with("<p>a<div>b</div>c</p>", &options).unwrap(), "abc");
    }

    #[test]
    fn rejoined_paragraph_keeps_its_neighbours_separate() {
        let options = ConvertOptions {
            separator: "|".to_string(),
            ..Default::default()
        };
        let out = convert_with("<p>one</p><p>a<h2>T</h2>b</p><p>two</p>", &options).unwrap();
        assert_eq!(out, "one|a\\section{T}b|two");
    }

    #[test]
    fn unclosed_paragraph_before_list_loses_trailing_text() {
        // Without the stray `</p>` there is no marker for where the paragraph ended.
        let out = convert("<p>Intro<ul><li>x</li></ul>after").unwrap();
        assert_eq!(out, "Intro\\begin{itemize}\n\\item x\n\\end{itemize}");
    }
}
