#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    Digit, // \d
    Word,  // \w
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupType {
    Positive, // [abc]
    Negative, // [^abc]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Literal(u8),
    ClassEscape(ClassKind),
    BracketGroup(Vec<u8>, GroupType),
    Wildcard,
    StartAnchor,                         // ^, only recognized as the first token
    EndAnchor,                           // $, only recognized as the last token
    OneOrMore(Box<Token>),               // +, owns the token it quantifies
    ZeroOrOne(u8),                       // c?, bare literal only
    Alternation(Vec<Vec<Token>>, usize), // (a|b|c) with its group index
    Group(Vec<Token>, usize),            // (abc) with its group index
    Backreference(usize),                // \1, \2, ...
}
