use thiserror::Error;

use crate::regex::ast::{ClassKind, GroupType, Token};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    #[error("unterminated group: no closing ')' for '(' at byte {0}")]
    UnterminatedGroup(usize),
    #[error("unterminated bracket expression: no closing ']' for '[' at byte {0}")]
    UnterminatedBracket(usize),
}

// Single left-to-right pass over the pattern bytes. `group_counter` is shared
// across recursive calls so group indices stay in textual order.
pub(crate) fn parse_pattern(
    pattern: &str,
    group_counter: &mut usize,
) -> Result<Vec<Token>, ScanError> {
    let bytes = pattern.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    // ^ is an anchor only in the very first position
    if bytes.first() == Some(&b'^') {
        tokens.push(Token::StartAnchor);
        i = 1;
    }

    while i < bytes.len() {
        let c = bytes[i];
        let next = bytes.get(i + 1).copied();

        // $ is an anchor only in final position and ends the scan
        if c == b'$' && i == bytes.len() - 1 {
            tokens.push(Token::EndAnchor);
            break;
        }

        if c == b'+' {
            match tokens.pop() {
                Some(prev) => tokens.push(Token::OneOrMore(Box::new(prev))),
                None => tokens.push(Token::Literal(b'+')),
            }
            i += 1;
            continue;
        }

        if c == b'\\' && next.is_some() && next != Some(b'\\') {
            match next.unwrap() {
                d @ b'0'..=b'9' => tokens.push(Token::Backreference((d - b'0') as usize)),
                b'd' => tokens.push(Token::ClassEscape(ClassKind::Digit)),
                b'w' => tokens.push(Token::ClassEscape(ClassKind::Word)),
                escaped => tokens.push(Token::Literal(escaped)),
            }
            i += 2;
            continue;
        }

        if next == Some(b'?') {
            tokens.push(Token::ZeroOrOne(c));
            i += 2;
            continue;
        }

        if c == b'.' {
            tokens.push(Token::Wildcard);
            i += 1;
            continue;
        }

        if c == b'(' {
            // close at the first ')'; bracket nesting is not recognized
            let close = bytes[i..]
                .iter()
                .position(|&b| b == b')')
                .ok_or(ScanError::UnterminatedGroup(i))?;
            *group_counter += 1;
            let index = *group_counter;
            let body = &pattern[i + 1..i + close];

            let parts: Vec<&str> = body.split('|').collect();
            if parts.len() > 1 {
                let mut branches = Vec::with_capacity(parts.len());
                for part in parts {
                    branches.push(parse_pattern(part, group_counter)?);
                }
                tokens.push(Token::Alternation(branches, index));
            } else {
                tokens.push(Token::Group(parse_pattern(body, group_counter)?, index));
            }
            i += close + 1;
            continue;
        }

        if c == b'[' {
            let close = bytes[i..]
                .iter()
                .position(|&b| b == b']')
                .ok_or(ScanError::UnterminatedBracket(i))?;
            let mut members = bytes[i + 1..i + close].to_vec();
            let group_type = if members.first() == Some(&b'^') {
                members.remove(0);
                GroupType::Negative
            } else {
                GroupType::Positive
            };
            tokens.push(Token::BracketGroup(members, group_type));
            i += close + 1;
            continue;
        }

        tokens.push(Token::Literal(c));
        i += 1;
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(pattern: &str) -> Vec<Token> {
        let mut groups = 0;
        parse_pattern(pattern, &mut groups).unwrap()
    }

    #[test]
    fn scans_literals_and_wildcard() {
        assert_eq!(
            scan("a.c"),
            vec![Token::Literal(b'a'), Token::Wildcard, Token::Literal(b'c')]
        );
    }

    #[test]
    fn anchors_only_at_the_edges() {
        assert_eq!(
            scan("^ab$"),
            vec![
                Token::StartAnchor,
                Token::Literal(b'a'),
                Token::Literal(b'b'),
                Token::EndAnchor,
            ]
        );
        // ^ and $ elsewhere are plain literals
        assert_eq!(
            scan("a^b"),
            vec![Token::Literal(b'a'), Token::Literal(b'^'), Token::Literal(b'b')]
        );
        assert_eq!(
            scan("a$b"),
            vec![Token::Literal(b'a'), Token::Literal(b'$'), Token::Literal(b'b')]
        );
    }

    #[test]
    fn plus_wraps_the_preceding_token() {
        assert_eq!(
            scan(r"\d+"),
            vec![Token::OneOrMore(Box::new(Token::ClassEscape(ClassKind::Digit)))]
        );
        assert_eq!(
            scan("[ab]+"),
            vec![Token::OneOrMore(Box::new(Token::BracketGroup(
                vec![b'a', b'b'],
                GroupType::Positive,
            )))]
        );
        // nothing to wrap: degrade to a literal
        assert_eq!(scan("+a"), vec![Token::Literal(b'+'), Token::Literal(b'a')]);
    }

    #[test]
    fn question_mark_consumes_the_preceding_literal() {
        assert_eq!(
            scan("ab?c"),
            vec![Token::Literal(b'a'), Token::ZeroOrOne(b'b'), Token::Literal(b'c')]
        );
    }

    #[test]
    fn escapes_split_into_classes_backrefs_and_literals() {
        assert_eq!(
            scan(r"\w\d\1\q"),
            vec![
                Token::ClassEscape(ClassKind::Word),
                Token::ClassEscape(ClassKind::Digit),
                Token::Backreference(1),
                Token::Literal(b'q'),
            ]
        );
        // escaped metacharacter is the bare literal
        assert_eq!(scan(r"\?"), vec![Token::Literal(b'?')]);
        // \\ falls through to two backslash literals
        assert_eq!(scan(r"\\"), vec![Token::Literal(b'\\'), Token::Literal(b'\\')]);
    }

    #[test]
    fn groups_and_alternations_take_indices_in_textual_order() {
        let mut groups = 0;
        let tokens = parse_pattern("(a)(b|c|d)(e)", &mut groups).unwrap();
        assert_eq!(groups, 3);
        assert_eq!(
            tokens,
            vec![
                Token::Group(vec![Token::Literal(b'a')], 1),
                Token::Alternation(
                    vec![
                        vec![Token::Literal(b'b')],
                        vec![Token::Literal(b'c')],
                        vec![Token::Literal(b'd')],
                    ],
                    2,
                ),
                Token::Group(vec![Token::Literal(b'e')], 3),
            ]
        );
    }

    #[test]
    fn bracket_groups_keep_members_verbatim() {
        // no range expansion: a-z is three members
        assert_eq!(
            scan("[a-z]"),
            vec![Token::BracketGroup(vec![b'a', b'-', b'z'], GroupType::Positive)]
        );
        assert_eq!(
            scan("[^ab]"),
            vec![Token::BracketGroup(vec![b'a', b'b'], GroupType::Negative)]
        );
    }

    #[test]
    fn unterminated_openers_are_errors() {
        let mut groups = 0;
        assert_eq!(
            parse_pattern("(ab", &mut groups),
            Err(ScanError::UnterminatedGroup(0))
        );
        assert_eq!(
            parse_pattern("x[ab", &mut groups),
            Err(ScanError::UnterminatedBracket(1))
        );
    }
}
