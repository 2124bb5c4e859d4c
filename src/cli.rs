use std::io;
use std::io::IsTerminal;

use anyhow::{Result, bail};

#[derive(Debug, Clone)]
pub enum ColorWhen {
    Always,
    Never,
    Auto,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub pattern: String,
    pub use_o: bool,
    pub recursive: bool,
    pub color: ColorWhen,
    pub paths: Vec<String>,
}

pub fn parse_args(args: Vec<String>) -> Result<Config> {
    let use_o = args.iter().any(|a| a == "-o");
    let recursive = args.iter().any(|a| a == "-r");

    let color = if args.iter().any(|a| a == "--color=always") {
        ColorWhen::Always
    } else if args.iter().any(|a| a == "--color=auto") {
        ColorWhen::Auto
    } else {
        // default grep-ish behavior: never unless asked
        ColorWhen::Never
    };

    let Some(flag_idx) = args.iter().position(|a| a == "-E") else {
        bail!("usage: mygrep [-o] [-r] [--color=WHEN] -E <pattern> [path ...]");
    };
    let Some(pattern) = args.get(flag_idx + 1).cloned() else {
        bail!("missing pattern after -E");
    };

    let paths = args[flag_idx + 2..].to_vec();

    Ok(Config {
        pattern,
        use_o,
        recursive,
        color,
        paths,
    })
}

pub fn resolve_use_color(color: &ColorWhen) -> bool {
    match color {
        ColorWhen::Always => true,
        ColorWhen::Never => false,
        ColorWhen::Auto => io::stdout().is_terminal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_flags_pattern_and_paths() {
        let cfg = parse_args(args(&["mygrep", "-o", "-E", "a+b", "x.txt", "y.txt"])).unwrap();
        assert!(cfg.use_o);
        assert!(!cfg.recursive);
        assert_eq!(cfg.pattern, "a+b");
        assert_eq!(cfg.paths, vec!["x.txt".to_string(), "y.txt".to_string()]);
    }

    #[test]
    fn missing_pattern_flag_is_a_usage_error() {
        assert!(parse_args(args(&["mygrep", "a+b"])).is_err());
        assert!(parse_args(args(&["mygrep", "-E"])).is_err());
    }
}
