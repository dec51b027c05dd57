use clap::ValueEnum;

/// Which substitution table to apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TableKind {
    #[default]
    Full,
    Compact,
}

/// How the table is applied to a string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// One whole-string replace pass per table entry, in table order.
    #[default]
    Sequential,
    /// Single left-to-right scan taking the longest pattern at each position.
    LongestMatch,
}

/// Command names used for h2..h6.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum HeadingStyle {
    /// `section` repeated `level - 1` times (`sectionsection` for h3).
    #[default]
    Literal,
    /// `section`, `subsection`, `subsubsection`, `paragraph`, `subparagraph`.
    Standard,
}

/// Which elements count as paragraph-level nodes during extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExtractionScope {
    /// Outermost `p`, `h1`..`h6`, `ul` and `ol` elements.
    #[default]
    Blocks,
    /// Every `p` element, nested ones included.
    Paragraphs,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub table: TableKind,
    pub strategy: Strategy,
    pub headings: HeadingStyle,
    pub scope: ExtractionScope,
    /// Inserted between extracted paragraphs. Empty by default.
    pub separator: String,
}
