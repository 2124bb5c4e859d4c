use crate::regex::ast::{ClassKind, GroupType, Token};

// Capture slots indexed by group number; slot 0 stays unused. Slices borrow
// from the text being matched.
type Captures<'t> = Vec<Option<&'t [u8]>>;

/// Half-open byte span of a match within the searched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub start: usize,
    pub end: usize,
}

/// A scanned pattern plus its capture-slot count. Immutable once built, so a
/// single instance can serve any number of concurrent `matches` calls.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    tokens: Vec<Token>,
    group_count: usize,
}

impl CompiledPattern {
    pub(crate) fn new(tokens: Vec<Token>, group_count: usize) -> Self {
        Self {
            tokens,
            group_count,
        }
    }

    pub fn is_anchored(&self) -> bool {
        matches!(self.tokens.first(), Some(Token::StartAnchor))
    }

    pub fn matches(&self, text: &[u8]) -> bool {
        self.search(text).is_some()
    }

    /// Leftmost match span: first viable start offset, first end position.
    pub fn find(&self, text: &[u8]) -> Option<Match> {
        self.search(text).map(|(m, _)| m)
    }

    /// Captured substrings of the first accepted match, indexed by group
    /// number (slot 0 unused). For diagnostics and tests.
    pub fn captures<'t>(&self, text: &'t [u8]) -> Option<Vec<Option<&'t [u8]>>> {
        self.search(text).map(|(_, caps)| caps)
    }

    fn search<'t>(&self, text: &'t [u8]) -> Option<(Match, Captures<'t>)> {
        let mut caps: Captures<'t> = vec![None; self.group_count + 1];

        if self.is_anchored() {
            let ends = match_here(text, &self.tokens[1..], &mut caps);
            return ends.first().map(|&end| (Match { start: 0, end }, caps));
        }

        for start in 0..text.len() {
            caps.fill(None);
            let ends = match_here(&text[start..], &self.tokens, &mut caps);
            if let Some(&end) = ends.first() {
                return Some((
                    Match {
                        start,
                        end: start + end,
                    },
                    caps,
                ));
            }
        }
        None
    }
}

// Single-byte membership test. Tokens that consume more than one byte (or
// none) are not member-testable and never match here, which also decides what
// `+` can quantify.
fn matches_byte(token: &Token, b: u8) -> bool {
    match token {
        Token::Wildcard => true,
        Token::Literal(l) => b == *l,
        Token::ClassEscape(ClassKind::Digit) => b.is_ascii_digit(),
        Token::ClassEscape(ClassKind::Word) => b.is_ascii_alphanumeric() || b == b'_',
        Token::BracketGroup(members, GroupType::Positive) => members.contains(&b),
        Token::BracketGroup(members, GroupType::Negative) => !members.contains(&b),
        _ => false,
    }
}

// Matches `tokens` against the start of `text`, returning every offset at
// which the whole sequence is consumed (empty = no match). Runs unmemoized
// backtracking: pathological patterns can take exponential time.
//
// Capture discipline: a call that returns no end positions leaves `caps`
// exactly as it found it; a call that succeeds leaves `caps` as written along
// its first accepted path. Speculative branches run against cloned snapshots
// so an abandoned branch can never leak captures into a backreference.
fn match_here<'t>(text: &'t [u8], tokens: &[Token], caps: &mut Captures<'t>) -> Vec<usize> {
    let mut i = 0;

    for (pi, token) in tokens.iter().enumerate() {
        let rest = &tokens[pi + 1..];

        if i >= text.len() {
            // only the end anchor can still succeed on exhausted input
            return if *token == Token::EndAnchor {
                vec![i]
            } else {
                Vec::new()
            };
        }

        match token {
            Token::Literal(_) | Token::ClassEscape(_) | Token::BracketGroup(..) => {
                if !matches_byte(token, text[i]) {
                    return Vec::new();
                }
                i += 1;
            }

            Token::Wildcard => i += 1,

            // input remains, so the anchor is unsatisfiable
            Token::EndAnchor => return Vec::new(),

            // a sub-pattern anchor holds only at the start of its slice
            Token::StartAnchor => {
                if i > 0 {
                    return Vec::new();
                }
            }

            Token::Backreference(index) => {
                let Some(captured) = caps.get(*index).copied().flatten() else {
                    return Vec::new();
                };
                if !text[i..].starts_with(captured) {
                    return Vec::new();
                }
                i += captured.len();
            }

            Token::OneOrMore(preceding) => {
                let saved = caps.clone();
                let mut committed: Option<Captures<'t>> = None;
                let mut ends = Vec::new();
                let mut j = i;
                // every repeat count k >= 1 is a candidate, not just the
                // longest run
                while j < text.len() && matches_byte(preceding, text[j]) {
                    j += 1;
                    *caps = saved.clone();
                    let tails = match_here(&text[j..], rest, caps);
                    if !tails.is_empty() && committed.is_none() {
                        committed = Some(caps.clone());
                    }
                    ends.extend(tails.into_iter().map(|e| j + e));
                }
                *caps = committed.unwrap_or(saved);
                return ends;
            }

            Token::ZeroOrOne(quantified) => {
                // zero occurrences win outright when the rest already fits
                let skipped = match_here(&text[i..], rest, caps);
                if !skipped.is_empty() {
                    return skipped.into_iter().map(|e| i + e).collect();
                }
                if text[i] == *quantified {
                    let taken = match_here(&text[i + 1..], rest, caps);
                    if !taken.is_empty() {
                        return taken.into_iter().map(|e| i + 1 + e).collect();
                    }
                }
                return Vec::new();
            }

            Token::Alternation(branches, index) => {
                let tail = &text[i..];
                let saved = caps.clone();
                let mut committed: Option<Captures<'t>> = None;
                let mut ends = Vec::new();
                for branch in branches {
                    *caps = saved.clone();
                    let inner = match_here(tail, branch, caps);
                    let branch_caps = caps.clone();
                    for &inner_end in &inner {
                        *caps = branch_caps.clone();
                        caps[*index] = Some(&tail[..inner_end]);
                        let tails = match_here(&tail[inner_end..], rest, caps);
                        if !tails.is_empty() && committed.is_none() {
                            committed = Some(caps.clone());
                        }
                        ends.extend(tails.into_iter().map(|e| i + inner_end + e));
                    }
                }
                *caps = committed.unwrap_or(saved);
                return ends;
            }

            Token::Group(elements, index) => {
                let tail = &text[i..];
                let saved = caps.clone();
                let mut committed: Option<Captures<'t>> = None;
                let mut ends = Vec::new();
                let inner = match_here(tail, elements, caps);
                let inner_caps = caps.clone();
                for &inner_end in &inner {
                    *caps = inner_caps.clone();
                    caps[*index] = Some(&tail[..inner_end]);
                    let tails = match_here(&tail[inner_end..], rest, caps);
                    if !tails.is_empty() && committed.is_none() {
                        committed = Some(caps.clone());
                    }
                    ends.extend(tails.into_iter().map(|e| i + inner_end + e));
                }
                *caps = committed.unwrap_or(saved);
                return ends;
            }
        }
    }

    // every token consumed: the cursor is an end position
    vec![i]
}
