//! ANSI color helpers for terminal output.
use ansi_term::Colour;

/// Net hours color:
/// \<0 → red (exit before entry)
/// 0 → grey
/// \>0 → green
pub fn colorize_net_hours(hours: f64, text: &str) -> String {
    if hours < 0.0 {
        Colour::Red.paint(text).to_string()
    } else if hours == 0.0 {
        Colour::Fixed(8).paint(text).to_string()
    } else {
        Colour::Green.paint(text).to_string()
    }
}

pub fn colorize_badge(text: &str) -> String {
    Colour::Cyan.bold().paint(text).to_string()
}
