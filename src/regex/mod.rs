pub mod ast;
pub mod matcher;
pub mod parser;

pub use ast::Token;
pub use matcher::{CompiledPattern, Match};
pub use parser::ScanError;

/// Scans a pattern once into an immutable token sequence ready for matching.
pub fn compile(pattern: &str) -> Result<CompiledPattern, ScanError> {
    let mut group_counter = 0;
    let tokens = parser::parse_pattern(pattern, &mut group_counter)?;
    Ok(CompiledPattern::new(tokens, group_counter))
}
