use owo_colors::OwoColorize;

#[derive(Clone, Copy, Debug)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn prefix(self) -> &'static str {
        match self {
            Level::Info => "ℹ️ ",
            Level::Success => "✅ ",
            Level::Warning => "⚠️ ",
            Level::Error => "❌ ",
        }
    }
}

pub fn info(msg: impl AsRef<str>) {
    notice(Level::Info, msg.as_ref());
}

pub fn success(msg: impl AsRef<str>) {
    notice(Level::Success, msg.as_ref());
}

pub fn warning(msg: impl AsRef<str>) {
    notice(Level::Warning, msg.as_ref());
}

pub fn error(msg: impl AsRef<str>) {
    notice(Level::Error, msg.as_ref());
}

fn notice(level: Level, msg: &str) {
    // Colors only when stdout is a TTY; the emoji prefix is always on.
    let color = atty::is(atty::Stream::Stdout);
    println!("{}", render(level, msg, color));
}

fn render(level: Level, msg: &str, color: bool) -> String {
    let line = format!("{}{}", level.prefix(), msg);
    if !color {
        return line;
    }
    match level {
        Level::Info => line,
        Level::Success => line.green().to_string(),
        Level::Warning => line.yellow().to_string(),
        Level::Error => line.red().to_string(),
    }
}

/// Right-aligned key/value block used by `show`-style output.
pub fn print_kv_block(pairs: &[(&str, String)]) {
    for line in kv_lines(pairs) {
        println!("{line}");
    }
}

fn kv_lines(pairs: &[(&str, String)]) -> Vec<String> {
    let key_w = pairs
        .iter()
        .map(|(k, _)| k.chars().count())
        .max()
        .unwrap_or(0);

    pairs
        .iter()
        .map(|(k, v)| format!("{:>key_w$}: {}", k, v, key_w = key_w))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_render_keeps_prefix_and_message() {
        assert_eq!(render(Level::Warning, "no route", false), "⚠️ no route");
        assert_eq!(render(Level::Info, "ready", false), "ℹ️ ready");
    }

    #[test]
    fn colored_render_still_contains_the_message() {
        for level in [Level::Success, Level::Warning, Level::Error] {
            let line = render(level, "saved route.csv", true);
            assert!(line.contains("saved route.csv"));
            assert!(line.contains(level.prefix().trim_end()));
        }
    }

    #[test]
    fn kv_block_right_aligns_keys() {
        let lines = kv_lines(&[
            ("Distance", "10.00 km".to_string()),
            ("Time", "0h 30m".to_string()),
        ]);
        assert_eq!(lines[0], "Distance: 10.00 km");
        assert_eq!(lines[1], "    Time: 0h 30m");
    }
}
