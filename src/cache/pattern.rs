//! Glob-style key patterns.
//!
//! `*` matches any run of characters (including none), `?` matches exactly
//! one character. Everything else is literal and the whole key must match.

use std::fmt;

use regex::Regex;

#[derive(Debug, Clone)]
pub struct KeyPattern {
    glob: String,
    regex: Regex,
}

impl KeyPattern {
    /// Compile a glob into a matcher
    pub fn parse(glob: &str) -> Result<Self, regex::Error> {
        let mut expr = String::with_capacity(glob.len() * 2 + 6);
        expr.push_str("(?s)^");

        let mut buf = [0u8; 4];
        for ch in glob.chars() {
            match ch {
                '*' => expr.push_str(".*"),
                '?' => expr.push('.'),
                other => expr.push_str(&regex::escape(other.encode_utf8(&mut buf))),
            }
        }
        expr.push('$');

        Ok(Self {
            glob: glob.to_string(),
            regex: Regex::new(&expr)?,
        })
    }

    pub fn matches(&self, key: &str) -> bool {
        self.regex.is_match(key)
    }
}

impl fmt::Display for KeyPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.glob)
    }
}
