use std::fs;
use std::path::{Path, PathBuf};

pub fn collect_files(root: &Path, recursive: bool) -> Vec<PathBuf> {
    let mut out = Vec::new();

    if root.is_file() {
        out.push(root.to_path_buf());
    } else if recursive && root.is_dir() {
        let mut pending = vec![root.to_path_buf()];
        while let Some(dir) = pending.pop() {
            let Ok(entries) = fs::read_dir(&dir) else {
                continue;
            };
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.is_file() {
                    out.push(path);
                }
            }
        }
        // read_dir order is platform-dependent; keep output stable
        out.sort();
    }

    out
}
