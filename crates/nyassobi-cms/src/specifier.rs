//! Component specifier grammar
//!
//! A specifier names a widget and optionally carries arguments:
//!
//! | Syntax        | Example                    |
//! |---------------|----------------------------|
//! | parentheses   | `Button(a, b, 1)`          |
//! | query         | `Button?size=l&tone=warm`  |
//! | pipe          | `Button\|primary`          |
//! | colon         | `Button:primary`           |
//! | none          | `Button`                   |
//!
//! Rules are tried in that order; the first match wins.

/// Argument syntax detected in a specifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecifierSyntax {
    Parentheses,
    Query,
    Pipe,
    Colon,
    None,
}

/// Parsed placeholder specifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSpecifier {
    /// Widget name (empty means "no specifier")
    pub base_name: String,
    /// Trimmed argument text, `None` when absent or blank
    pub raw_args: Option<String>,
    pub syntax: SpecifierSyntax,
}

impl ComponentSpecifier {
    /// Parse a specifier string. Never fails.
    pub fn parse(specifier: &str) -> Self {
        let trimmed = specifier.trim();
        if trimmed.is_empty() {
            return Self::bare("");
        }

        if trimmed.ends_with(')') {
            if let Some(open) = trimmed.find('(') {
                return Self::split(trimmed, open, trimmed.len() - 1, SpecifierSyntax::Parentheses);
            }
        }

        if let Some(index) = trimmed.find('?') {
            return Self::split(trimmed, index, trimmed.len(), SpecifierSyntax::Query);
        }

        if let Some(index) = trimmed.find('|') {
            return Self::split(trimmed, index, trimmed.len(), SpecifierSyntax::Pipe);
        }

        if let Some(index) = find_colon(trimmed) {
            return Self::split(trimmed, index, trimmed.len(), SpecifierSyntax::Colon);
        }

        Self::bare(trimmed)
    }

    /// True when no widget name was given
    pub fn is_empty(&self) -> bool {
        self.base_name.is_empty()
    }

    fn bare(name: &str) -> Self {
        Self {
            base_name: name.to_string(),
            raw_args: None,
            syntax: SpecifierSyntax::None,
        }
    }

    /// `separator` is a single-byte delimiter; args run up to `args_end`
    fn split(trimmed: &str, separator: usize, args_end: usize, syntax: SpecifierSyntax) -> Self {
        let base_name = trimmed[..separator].trim().to_string();
        let raw_args = trimmed[separator + 1..args_end].trim();

        Self {
            base_name,
            raw_args: (!raw_args.is_empty()).then(|| raw_args.to_string()),
            syntax,
        }
    }
}

/// First `:` that does not start a `://` scheme separator
fn find_colon(s: &str) -> Option<usize> {
    s.match_indices(':')
        .map(|(i, _)| i)
        .find(|&i| !s[i..].starts_with("://"))
}
