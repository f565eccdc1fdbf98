//! CLI command messaging
//!
//! Consistent tagged output for the one-shot commands (predict, stats,
//! history and the config commands).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Warn,
    Error,
    Success,
}

impl Tone {
    fn tag(self) -> &'static str {
        match self {
            Tone::Info => "INFO",
            Tone::Warn => "WARN",
            Tone::Error => "ERROR",
            Tone::Success => "SUCCESS",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Tone::Info => "\x1b[1;33m",
            Tone::Warn => "\x1b[1;91m",
            Tone::Error => "\x1b[1;31m",
            Tone::Success => "\x1b[1;32m",
        }
    }
}

/// Builds one tagged line: `[TAG] title`, followed by a tab and the details
/// when there are any.
pub fn format_message(tone: Tone, title: &str, details: &str) -> String {
    let mut line = format!("{}[{}]\x1b[0m {}", tone.color(), tone.tag(), title);
    if !details.is_empty() {
        line.push_str("\t ");
        line.push_str(details);
    }
    line
}

pub fn print_message(tone: Tone, title: &str, details: &str) {
    match tone {
        Tone::Error | Tone::Warn => eprintln!("{}", format_message(tone, title, details)),
        Tone::Info | Tone::Success => println!("{}", format_message(tone, title, details)),
    }
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message($crate::cli_messages::Tone::Info, $title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message($crate::cli_messages::Tone::Warn, $title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_message($crate::cli_messages::Tone::Error, $title, "")
    };
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message($crate::cli_messages::Tone::Error, $title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message($crate::cli_messages::Tone::Success, $title, &format!($($details)*))
    };
}
