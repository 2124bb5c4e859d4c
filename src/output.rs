const COLOR_START: &str = "\x1b[01;31m";
const COLOR_RESET: &str = "\x1b[m";

pub fn maybe_colorize(s: &[u8], use_color: bool) -> String {
    let text = String::from_utf8_lossy(s);
    if use_color {
        format!("{COLOR_START}{text}{COLOR_RESET}")
    } else {
        text.into_owned()
    }
}
