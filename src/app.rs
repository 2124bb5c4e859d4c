use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use bytes::Bytes;

use crate::cli::{Config, resolve_use_color};
use crate::fs_walk::collect_files;
use crate::regex::compile;
use crate::search::process_input;

pub fn run(cfg: Config) -> Result<i32> {
    let use_color = resolve_use_color(&cfg.color);

    let pattern = compile(&cfg.pattern)
        .with_context(|| format!("invalid pattern {:?}", cfg.pattern))?;

    let mut global_matched = false;

    if cfg.paths.is_empty() {
        let mut buffer = Vec::new();
        io::stdin()
            .read_to_end(&mut buffer)
            .context("read standard input")?;
        let content = Bytes::from(buffer);
        process_input(
            &content,
            &pattern,
            None,
            cfg.use_o,
            use_color,
            &mut global_matched,
            false,
        );
        return Ok(if global_matched { 0 } else { 1 });
    }

    // expand input paths to concrete files
    let mut files = Vec::new();
    for p in &cfg.paths {
        files.extend(collect_files(Path::new(p), cfg.recursive));
    }

    // recursive always shows the filename prefix, otherwise only with
    // multiple files
    let show_filename = cfg.recursive || files.len() > 1;

    for path in files {
        // unreadable files are skipped, not fatal
        let Ok(content) = fs::read(&path) else {
            continue;
        };
        let content = Bytes::from(content);
        let name = path.to_string_lossy();
        process_input(
            &content,
            &pattern,
            Some(name.as_ref()),
            cfg.use_o,
            use_color,
            &mut global_matched,
            show_filename,
        );
    }

    Ok(if global_matched { 0 } else { 1 })
}
