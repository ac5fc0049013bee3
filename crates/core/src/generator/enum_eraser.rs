use regex::Regex;
use std::borrow::Cow;

/// Rewrites locally declared enum names to `uint`, since interfaces carry no enum semantics.
#[derive(Debug, Clone, Default)]
pub struct EnumEraser {
    names: Vec<String>,
    pattern: Option<Regex>,
}

impl EnumEraser {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let pattern = if names.is_empty() {
            None
        } else {
            let alternatives: Vec<String> = names.iter().map(|n| regex::escape(n)).collect();
            Regex::new(&format!(r"(^|[^.\w])(?:{})\b", alternatives.join("|"))).ok()
        };
        Self { names, pattern }
    }

    pub fn is_enum(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Replaces whole-word occurrences of any enum name in `text`. Members of a
    /// qualified name (`Market.Status`) are left alone.
    pub fn erase<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match &self.pattern {
            Some(pattern) => pattern.replace_all(text, "${1}uint"),
            None => Cow::Borrowed(text),
        }
    }
}
