use printlog::sink::{Color, colorize};
use printlog::{Category, Entry, Level, TerminalSink};

fn entry(level: Level) -> Entry<'static> {
    Entry {
        level,
        category: Category::Ui,
        line: "🎨 UI tapped",
    }
}

#[test]
fn from_hex_parses_valid_colors() {
    assert_eq!(Color::from_hex("#ff00aa"), Some(Color::new(255, 0, 170)));
    assert_eq!(Color::from_hex("01a2ff"), Some(Color::new(1, 162, 255)));
}

#[test]
fn from_hex_rejects_malformed() {
    assert_eq!(Color::from_hex("#fff"), None);
    assert_eq!(Color::from_hex("zz00aa"), None);
}

#[test]
fn colorize_wraps_with_reset() {
    assert_eq!(
        colorize("hi", Color::new(1, 2, 3)),
        "\x1b[38;2;1;2;3mhi\x1b[0m"
    );
}

#[test]
fn plain_render_is_the_line_itself() {
    let sink = TerminalSink::new().colors(false);
    assert_eq!(sink.render(&entry(Level::Error)), "🎨 UI tapped");
}

#[test]
fn colored_render_uses_level_override() {
    let sink = TerminalSink::new().level_color(Level::Warning, Color::new(9, 8, 7));
    assert_eq!(
        sink.render(&entry(Level::Warning)),
        "\x1b[38;2;9;8;7m🎨 UI tapped\x1b[0m"
    );
}
