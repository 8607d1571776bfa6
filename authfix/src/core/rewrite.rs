//! Text substitution primitive shared by every fix.

use anyhow::{Context, Result};
use regex::RegexBuilder;

/// A hard-coded pattern/replacement pair applied to a whole file buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rewrite {
    /// Regex substitution over all non-overlapping matches.
    ///
    /// `.` matches newlines, so a pattern may span arbitrary intervening text.
    /// The replacement may reference capture groups as `${1}`.
    Regex {
        pattern: &'static str,
        replacement: &'static str,
    },
    /// Verbatim substring replacement of every occurrence.
    Literal {
        needle: &'static str,
        replacement: &'static str,
    },
}

/// Result of applying a [`Rewrite`] to a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    pub content: String,
    /// Number of matches replaced. Zero means the content is unchanged.
    pub matches: usize,
}

impl Rewrite {
    /// Apply the rewrite to `input`.
    ///
    /// Finding nothing is not an error: the input is returned unchanged with
    /// `matches == 0`.
    pub fn apply(&self, input: &str) -> Result<Rewritten> {
        match *self {
            Rewrite::Regex {
                pattern,
                replacement,
            } => {
                let re = RegexBuilder::new(pattern)
                    .dot_matches_new_line(true)
                    .build()
                    .with_context(|| format!("compile pattern {pattern:?}"))?;
                let matches = re.find_iter(input).count();
                if matches == 0 {
                    return Ok(unchanged(input));
                }
                Ok(Rewritten {
                    content: re.replace_all(input, replacement).into_owned(),
                    matches,
                })
            }
            Rewrite::Literal {
                needle,
                replacement,
            } => {
                let matches = input.matches(needle).count();
                if matches == 0 {
                    return Ok(unchanged(input));
                }
                Ok(Rewritten {
                    content: input.replace(needle, replacement),
                    matches,
                })
            }
        }
    }
}

fn unchanged(input: &str) -> Rewritten {
    Rewritten {
        content: input.to_string(),
        matches: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_replaces_every_occurrence() {
        let rewrite = Rewrite::Literal {
            needle: "a || b",
            replacement: "a",
        };
        let out = rewrite.apply("x(a || b); y(a || b);").expect("apply");
        assert_eq!(out.content, "x(a); y(a);");
        assert_eq!(out.matches, 2);
    }

    #[test]
    fn literal_without_match_is_noop() {
        let rewrite = Rewrite::Literal {
            needle: "missing",
            replacement: "found",
        };
        let out = rewrite.apply("nothing here\n").expect("apply");
        assert_eq!(out.content, "nothing here\n");
        assert_eq!(out.matches, 0);
    }

    #[test]
    fn regex_dot_spans_newlines_and_expands_groups() {
        let rewrite = Rewrite::Regex {
            pattern: r"(start).*?(end)",
            replacement: "${2}-${1}",
        };
        let out = rewrite.apply("start\nmiddle\nend tail").expect("apply");
        assert_eq!(out.content, "end-start tail");
        assert_eq!(out.matches, 1);
    }

    #[test]
    fn regex_replaces_all_non_overlapping_matches() {
        let rewrite = Rewrite::Regex {
            pattern: r"<.*?>",
            replacement: "[]",
        };
        let out = rewrite.apply("<a> and <b>").expect("apply");
        assert_eq!(out.content, "[] and []");
        assert_eq!(out.matches, 2);
    }

    #[test]
    fn regex_without_match_is_noop() {
        let rewrite = Rewrite::Regex {
            pattern: r"absent",
            replacement: "present",
        };
        let out = rewrite.apply("body").expect("apply");
        assert_eq!(out, unchanged("body"));
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let rewrite = Rewrite::Regex {
            pattern: r"(unclosed",
            replacement: "",
        };
        let err = rewrite.apply("anything").expect_err("invalid regex");
        assert!(format!("{err:#}").contains("compile pattern"));
    }
}
