use crate::output::maybe_colorize;
use crate::regex::CompiledPattern;

pub fn process_input(
    content: &[u8],
    pattern: &CompiledPattern,
    filename: Option<&str>,
    use_o: bool,
    use_color: bool,
    global_matched: &mut bool,
    show_filename: bool,
) {
    let prefix = if show_filename {
        filename.map(|f| format!("{f}:")).unwrap_or_default()
    } else {
        String::new()
    };

    let content = content.strip_suffix(b"\n").unwrap_or(content);

    for raw_line in content.split(|&b| b == b'\n') {
        let line = raw_line.strip_suffix(b"\r").unwrap_or(raw_line);

        let mut line_buffer = String::new();
        let mut line_has_match = false;
        let mut last_match_end = 0;
        let mut offset = 0;

        loop {
            let Some(found) = pattern.find(&line[offset..]) else {
                break;
            };
            *global_matched = true;
            line_has_match = true;

            let (start, end) = (offset + found.start, offset + found.end);
            let match_text = maybe_colorize(&line[start..end], use_color);

            if use_o {
                println!("{prefix}{match_text}");
            } else {
                line_buffer.push_str(&String::from_utf8_lossy(&line[last_match_end..start]));
                line_buffer.push_str(&match_text);
                last_match_end = end;
            }

            if pattern.is_anchored() {
                break;
            }

            // an empty match still has to advance, or we loop forever
            let next = if end > start { end } else { end + 1 };
            if next > line.len() {
                break;
            }
            offset = next;
        }

        if !use_o && line_has_match {
            line_buffer.push_str(&String::from_utf8_lossy(&line[last_match_end..]));
            println!("{prefix}{line_buffer}");
        }
    }
}
