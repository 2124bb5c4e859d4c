use std::env;
use std::process;

mod app;
mod cli;
mod fs_walk;
mod output;
mod regex;
mod search;

// Usage: echo <input_text> | mygrep -E <pattern>
// Exit codes: 0 = match found, 1 = no match, 2 = usage/pattern/I/O error.
fn main() {
    let args: Vec<String> = env::args().collect();
    match cli::parse_args(args).and_then(app::run) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("mygrep: {err:#}");
            process::exit(2);
        }
    }
}
