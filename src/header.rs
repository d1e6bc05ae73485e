//! Header comment rewriting.
//!
//! Templates usually open with a comment such as `# Everforest theme for
//! starship`. After substitution that line is rewritten to name the variant
//! it was generated for, e.g. `# Everforest dark-medium theme for starship`.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Tool name extraction rules, tried in order. The first one that yields a
    /// usable name wins. Tool names are ASCII word characters only.
    static ref TOOL_NAME_PATTERNS: Vec<Regex> = vec![
        // "... for <tool>" up to a comment closer or end of line
        Regex::new(r"(?i)for\s+([[:word:]\s-]+?)(?:\s*(?:#|\*/|-->|--|$))").unwrap(),
        // "Everforest ... theme ... for <tool>"
        Regex::new(r"(?i)Everforest.*theme.*for\s+([[:word:]\s-]+?)(?:\s*(?:#|\*/|-->|--|$))").unwrap(),
        // "Everforest <word>"
        Regex::new(r"(?i)Everforest\s+([[:word:]-]+)").unwrap(),
    ];
}

/// Captures that describe the header itself rather than a tool
const STOP_WORDS: &[&str] = &["theme", "css", "variables", "utility", "classes", "and"];

/// Comment syntax of a header line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `<!-- ... -->`
    Markup,
    /// `/* ... */`
    Block,
    /// `-- ...`
    Dash,
    /// `# ...`
    Hash,
    /// `// ...`
    Slash,
    /// `; ...`
    Semicolon,
}

impl CommentStyle {
    /// Classify a trimmed line as a header-capable comment.
    ///
    /// A `--` line only counts when it is `-- ` followed by text without a
    /// colon. Anything starting with `--` that contains `:` is treated as a
    /// property assignment such as `--everforest-bg: #2d353b;`.
    pub fn detect(line: &str) -> Option<Self> {
        let is_dash_comment = line.starts_with("-- ") && !line.contains(':');
        let is_other_comment = line.starts_with('#')
            || line.starts_with("//")
            || line.starts_with("<!--")
            || line.starts_with("/*")
            || line.starts_with(';');
        let is_property = line.starts_with("--") && line.contains(':');

        if !(is_dash_comment || is_other_comment) || is_property {
            return None;
        }

        let style = if line.starts_with("<!--") {
            CommentStyle::Markup
        } else if line.starts_with("/*") {
            CommentStyle::Block
        } else if line.starts_with("--") {
            CommentStyle::Dash
        } else if line.starts_with('#') {
            CommentStyle::Hash
        } else if line.starts_with("//") {
            CommentStyle::Slash
        } else {
            CommentStyle::Semicolon
        };

        Some(style)
    }

    pub fn opener(self) -> &'static str {
        match self {
            CommentStyle::Markup => "<!--",
            CommentStyle::Block => "/*",
            CommentStyle::Dash => "--",
            CommentStyle::Hash => "#",
            CommentStyle::Slash => "//",
            CommentStyle::Semicolon => ";",
        }
    }

    pub fn closer(self) -> Option<&'static str> {
        match self {
            CommentStyle::Markup => Some("-->"),
            CommentStyle::Block => Some("*/"),
            _ => None,
        }
    }
}

/// Rewrite the first Everforest header comment to name the variant.
///
/// Only the first comment line mentioning "everforest" (case-insensitive) is
/// touched. Content without such a line is returned unchanged.
pub fn annotate_header(content: &str, mode: &str, contrast: &str) -> String {
    let mut lines: Vec<String> = content.split('\n').map(str::to_string).collect();

    for line in lines.iter_mut() {
        let trimmed = line.trim();
        let Some(style) = CommentStyle::detect(trimmed) else {
            continue;
        };
        if !trimmed.to_lowercase().contains("everforest") {
            continue;
        }

        let mut header = format!("{} Everforest {}-{} theme", style.opener(), mode, contrast);
        if let Some(tool) = extract_tool_name(trimmed) {
            header.push_str(" for ");
            header.push_str(&tool);
        }
        if let Some(closer) = style.closer() {
            header.push(' ');
            header.push_str(closer);
        }
        if line.ends_with('\r') {
            header.push('\r');
        }

        *line = header;
        break;
    }

    lines.join("\n")
}

/// Pull a tool name out of a header comment, if one can be found
pub fn extract_tool_name(line: &str) -> Option<String> {
    for pattern in TOOL_NAME_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(line)
            && let Some(capture) = caps.get(1)
        {
            let name = capture.as_str().trim();
            let lower = name.to_lowercase();
            if !name.is_empty()
                && lower != "everforest"
                && !STOP_WORDS.contains(&lower.as_str())
            {
                return Some(name.to_string());
            }
        }
    }

    None
}
