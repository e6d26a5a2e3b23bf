use regex::Regex;
use std::io::Write;
use std::sync::OnceLock;

pub mod config;

#[macro_export]
macro_rules! println_pad {
    ($($arg:tt)*) => {{
        let __s = format!($($arg)*);
        for __line in __s.lines() {
            println!("    {}", __line);
        }
    }};
}

fn ansi_escape() -> &'static Regex {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    ANSI.get_or_init(|| Regex::new("\x1b\\[[0-9;]*m").expect("valid ANSI escape pattern"))
}

/// Number of characters a terminal shows for `s`, ignoring color codes.
pub fn visible_len(s: &str) -> usize {
    ansi_escape().replace_all(s, "").chars().count()
}

/// Renders the provided lines inside an ASCII box
pub fn ansi_boxed_lines(lines: &[String]) -> Vec<String> {
    let width = lines.iter().map(|s| visible_len(s)).max().unwrap_or(0);

    let border = "-".repeat(width + 4);
    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(border.clone());
    for line in lines {
        let pad = width - visible_len(line);
        out.push(format!("| {}{} |", line, " ".repeat(pad)));
    }
    out.push(border);
    out
}

/// Prints the provided lines inside an ASCII box
pub fn print_ansi_boxed_lines(lines: &[String]) {
    for line in ansi_boxed_lines(lines) {
        println_pad!("{}", line);
    }
}

/// Clears the terminal and moves the cursor home.
pub fn clear_screen() {
    print!("\x1b[2J\x1b[H");
    // Cosmetic only; a failed flush leaves the old screen visible.
    std::io::stdout().flush().ok();
}
