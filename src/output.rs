//! User-facing console messages.
//! Status lines go to stderr with a colored tag when stderr is a TTY, so that
//! stdout carries only command results (JSON or text) for scripting.

use owo_colors::OwoColorize;

#[derive(Clone, Copy)]
enum Tone {
    Info,
    Warn,
    Error,
    Ok,
}

impl Tone {
    fn tag(self) -> &'static str {
        match self {
            Tone::Info => "info:",
            Tone::Warn => "warn:",
            Tone::Error => "error:",
            Tone::Ok => "ok:",
        }
    }
}

fn emit(tone: Tone, msg: &str) {
    if !atty::is(atty::Stream::Stderr) {
        eprintln!("{} {}", tone.tag(), msg);
        return;
    }
    let tag = tone.tag();
    match tone {
        Tone::Info => eprintln!("{} {}", tag.cyan().bold(), msg),
        Tone::Warn => eprintln!("{} {}", tag.yellow().bold(), msg),
        Tone::Error => eprintln!("{} {}", tag.red().bold(), msg),
        Tone::Ok => eprintln!("{} {}", tag.green().bold(), msg),
    }
}

pub fn print_info(msg: &str) {
    emit(Tone::Info, msg);
}

pub fn print_warn(msg: &str) {
    emit(Tone::Warn, msg);
}

pub fn print_error(msg: &str) {
    emit(Tone::Error, msg);
}

pub fn print_success(msg: &str) {
    emit(Tone::Ok, msg);
}

/// Print a plain result line to stdout (no prefix, no color).
pub fn print_user(msg: &str) {
    println!("{}", msg);
}
