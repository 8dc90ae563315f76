//! [`RegExp`] - shared handle to a compiled regular expression.
//!
//! Patterns are compiled with the `regex` crate, so the accepted syntax is
//! that crate's. The flags `i`, `m` and `s` map onto its inline flags; the
//! remaining flags (`d`, `g`, `u`, `y`) are recorded but do not change
//! matching.

use std::fmt;
use std::rc::Rc;

use regex::Regex;

use crate::ValueError;

/// Accepted flags, in canonical order.
const FLAGS: &str = "dgimsuy";

struct RegExpData {
    source: String,
    flags: String,
    matcher: Regex,
}

/// A reference-counted regular expression.
#[derive(Clone)]
pub struct RegExp(Rc<RegExpData>);

impl RegExp {
    /// Compiles `source` with `flags`.
    ///
    /// Flags are reordered canonically, so `/a/mi` and `/a/im` have the
    /// same string form. The stored source escapes bare `/` and line
    /// terminators, so `a/b` and `a\/b` have the same string form too.
    pub fn new(source: &str, flags: &str) -> Result<Self, ValueError> {
        let flags = canonical_flags(flags)?;
        let inline: String = flags.chars().filter(|c| "ims".contains(*c)).collect();
        let pattern = if inline.is_empty() {
            source.to_string()
        } else {
            format!("(?{inline}){source}")
        };
        let matcher =
            Regex::new(&pattern).map_err(|e| ValueError::InvalidRegExpPattern(e.to_string()))?;
        let source = if source.is_empty() {
            "(?:)".to_string()
        } else {
            escape_source(source)
        };
        Ok(Self(Rc::new(RegExpData {
            source,
            flags,
            matcher,
        })))
    }

    pub fn source(&self) -> &str {
        &self.0.source
    }

    pub fn flags(&self) -> &str {
        &self.0.flags
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.0.matcher.is_match(text)
    }

    /// A new regular expression with the same source and flags.
    pub fn duplicate(&self) -> Self {
        Self(Rc::new(RegExpData {
            source: self.0.source.clone(),
            flags: self.0.flags.clone(),
            matcher: self.0.matcher.clone(),
        }))
    }

    pub fn ptr_eq(&self, other: &RegExp) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }
}

/// Escapes `/` outside character classes and line terminators, leaving
/// sequences that are already escaped alone.
fn escape_source(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut escaped = false;
    let mut in_class = false;
    for c in source.chars() {
        let line_escape = match c {
            '\n' => Some("n"),
            '\r' => Some("r"),
            '\u{2028}' => Some("u2028"),
            '\u{2029}' => Some("u2029"),
            _ => None,
        };
        if let Some(name) = line_escape {
            if !escaped {
                out.push('\\');
            }
            out.push_str(name);
            escaped = false;
            continue;
        }
        if escaped {
            out.push(c);
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '[' => in_class = true,
            ']' => in_class = false,
            '/' if !in_class => out.push('\\'),
            _ => {}
        }
        out.push(c);
    }
    out
}

fn canonical_flags(flags: &str) -> Result<String, ValueError> {
    let mut seen = [false; FLAGS.len()];
    for c in flags.chars() {
        match FLAGS.find(c) {
            Some(i) if !seen[i] => seen[i] = true,
            _ => return Err(ValueError::InvalidRegExpFlags(flags.to_string())),
        }
    }
    Ok(FLAGS
        .chars()
        .zip(seen)
        .filter_map(|(c, on)| on.then_some(c))
        .collect())
}

impl fmt::Display for RegExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.0.source, self.0.flags)
    }
}

impl fmt::Debug for RegExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegExp({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_form_uses_canonical_flags() {
        let re = RegExp::new("a+b", "mig").unwrap();
        assert_eq!(re.to_string(), "/a+b/gim");
        assert_eq!(re.flags(), "gim");
        assert_eq!(re.source(), "a+b");
    }

    #[test]
    fn slashes_and_line_terminators_are_escaped() {
        assert_eq!(RegExp::new("a/b", "").unwrap().to_string(), "/a\\/b/");
        assert_eq!(RegExp::new("a\\/b", "").unwrap().to_string(), "/a\\/b/");
        assert_eq!(RegExp::new("[/]", "").unwrap().source(), "[/]");
        assert_eq!(RegExp::new("a\nb", "").unwrap().source(), "a\\nb");
        assert_eq!(RegExp::new("\\\\/", "").unwrap().source(), "\\\\\\/");
        assert!(RegExp::new("a/b", "").unwrap().is_match("a/b"));
    }

    #[test]
    fn empty_source() {
        assert_eq!(RegExp::new("", "").unwrap().to_string(), "/(?:)/");
    }

    #[test]
    fn rejects_unknown_or_repeated_flags() {
        assert_eq!(
            RegExp::new("a", "x").err(),
            Some(ValueError::InvalidRegExpFlags("x".into()))
        );
        assert_eq!(
            RegExp::new("a", "gg").err(),
            Some(ValueError::InvalidRegExpFlags("gg".into()))
        );
    }

    #[test]
    fn rejects_bad_pattern() {
        assert!(matches!(
            RegExp::new("(", ""),
            Err(ValueError::InvalidRegExpPattern(_))
        ));
    }

    #[test]
    fn inline_flags_affect_matching() {
        assert!(!RegExp::new("^abc$", "").unwrap().is_match("ABC"));
        assert!(RegExp::new("^abc$", "i").unwrap().is_match("ABC"));
        assert!(RegExp::new("^b$", "m").unwrap().is_match("a\nb"));
    }

    #[test]
    fn duplicate_is_a_new_allocation() {
        let re = RegExp::new("x", "g").unwrap();
        let copy = re.duplicate();
        assert!(!re.ptr_eq(&copy));
        assert_eq!(re.to_string(), copy.to_string());
        assert!(re.ptr_eq(&re.clone()));
    }
}
