//! Unicode to LaTeX substitution tables.
//!
//! Entries are applied in slice order, so every ligature (two adjacent
//! quote marks) must come before the single quote marks it is made of.

use crate::config::TableKind;

/// Authoritative table.
pub static FULL: &[(&str, &str)] = &[
    // punctuation and ligatures
    ("\u{2026}", r"\ldots"),
    ("\u{201C}\u{2018}", r"``\hspace{0pt}`"),
    ("\u{2019}\u{201D}", r"'\hspace{0pt}''"),
    ("\u{2018}\u{201C}", r"`\hspace{0pt}``"),
    ("\u{201D}\u{2019}", r"''\hspace{0pt}'"),
    ("\u{201C}", "``"),
    ("\u{201D}", "''"),
    ("\u{2018}", "`"),
    ("\u{2019}", "'"),
    ("\u{2013}", "--"),
    ("\u{2014}", "---"),
    ("ç", r"\c{c}"),
    ("Ç", r"\c{C}"),
    ("ñ", r"\~n"),
    ("Ñ", r"\~N"),
    ("œ", r"\oe "),
    ("Œ", r"\OE "),
    // A
    ("à", r"\`a"),
    ("À", r"\`A"),
    ("á", r"\'a"),
    ("Á", r"\'A"),
    ("â", r"\^a"),
    ("Â", r"\^A"),
    ("ä", r#"\"a"#),
    ("Ä", r#"\"A"#),
    ("ã", r"\~a"),
    ("Ã", r"\~A"),
    ("å", r"\r a"),
    ("Å", r"\r A"),
    ("ā", r"\=a"),
    ("Ā", r"\=A"),
    ("ă", r"\u a"),
    ("Ă", r"\u A"),
    ("ą", r"\k a"),
    ("Ą", r"\k A"),
    // E
    ("è", r"\`e"),
    ("È", r"\`E"),
    ("é", r"\'e"),
    ("É", r"\'E"),
    ("ê", r"\^e"),
    ("Ê", r"\^E"),
    ("ë", r#"\"e"#),
    ("Ë", r#"\"E"#),
    ("ē", r"\=e"),
    ("Ē", r"\=E"),
    ("ĕ", r"\u e"),
    ("Ĕ", r"\u E"),
    ("ė", r"\.e"),
    ("Ė", r"\.E"),
    ("ę", r"\k e"),
    ("Ę", r"\k E"),
    // I
    ("ì", r"\`i"),
    ("Ì", r"\`I"),
    ("í", r"\'i"),
    ("Í", r"\'I"),
    ("î", r"\^i"),
    ("Î", r"\^I"),
    ("ï", r#"\"i"#),
    ("Ï", r#"\"I"#),
    ("ī", r"\=i"),
    ("Ī", r"\=I"),
    ("ĭ", r"\u i"),
    ("Ĭ", r"\u I"),
    ("į", r"\k i"),
    ("Į", r"\k I"),
    ("ı", r"{\i}"),
    // O
    ("ò", r"\`o"),
    ("Ò", r"\`O"),
    ("ó", r"\'o"),
    ("Ó", r"\'O"),
    ("ô", r"\^o"),
    ("Ô", r"\^O"),
    ("ö", r#"\"o"#),
    ("Ö", r#"\"O"#),
    ("õ", r"\~o"),
    ("Õ", r"\~O"),
    ("ō", r"\=o"),
    ("Ō", r"\=O"),
    ("ŏ", r"\u o"),
    ("Ŏ", r"\u O"),
    ("ő", r"\H o"),
    ("Ő", r"\H O"),
    // U
    ("ù", r"\`u"),
    ("Ù", r"\`U"),
    ("ú", r"\'u"),
    ("Ú", r"\'U"),
    ("û", r"\^u"),
    ("Û", r"\^U"),
    ("ü", r#"\"u"#),
    ("Ü", r#"\"U"#),
    ("ū", r"\=u"),
    ("Ū", r"\=U"),
    ("ŭ", r"\u u"),
    ("Ŭ", r"\u U"),
    ("ů", r"\r u"),
    ("Ů", r"\r U"),
    ("ű", r"\H u"),
    ("Ű", r"\H U"),
    ("ų", r"\k u"),
    ("Ų", r"\k U"),
    // Y
    ("ý", r"\'y"),
    ("Ý", r"\'Y"),
    ("ÿ", r#"\"y"#),
    ("Ÿ", r#"\"Y"#),
    ("ȳ", r"\=y"),
    ("Ȳ", r"\=Y"),
];

/// Smaller table: quotes, dashes, a handful of consonants and the A vowels.
pub static COMPACT: &[(&str, &str)] = &[
    ("\u{2026}", r"\ldots"),
    ("\u{201C}\u{2018}", r"``\hspace{0pt}`"),
    ("\u{2019}\u{201D}", r"'\hspace{0pt}''"),
    ("\u{201C}", "``"),
    ("\u{201D}", "''"),
    ("\u{2018}", "`"),
    ("\u{2019}", "'"),
    ("\u{2013}", "--"),
    ("\u{2014}", "---"),
    ("ç", r"\c{c}"),
    ("Ç", r"\c{C}"),
    ("ñ", r"\~n"),
    ("Ñ", r"\~N"),
    ("œ", r"\oe "),
    ("Œ", r"\OE "),
    ("à", r"\`a"),
    ("À", r"\`A"),
    ("á", r"\'a"),
    ("Á", r"\'A"),
    ("â", r"\^a"),
    ("Â", r"\^A"),
    ("ä", r#"\"a"#),
    ("Ä", r#"\"A"#),
    ("ã", r"\~a"),
    ("Ã", r"\~A"),
    ("å", r"\r a"),
    ("Å", r"\r A"),
    ("ā", r"\=a"),
    ("Ā", r"\=A"),
];

pub fn entries(kind: TableKind) -> &'static [(&'static str, &'static str)] {
    match kind {
        TableKind::Full => FULL,
        TableKind::Compact => COMPACT,
    }
}
