//! Session start and exit messages

// ANSI Color Codes for session messages
pub const COLOR_INFO: &str = "\x1b[1;36m"; // Bold Cyan
pub const COLOR_SUCCESS: &str = "\x1b[1;32m"; // Bold Green
pub const COLOR_RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMessage {
    Info(String),
    Success(String),
}

impl SessionMessage {
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    pub fn success(msg: impl Into<String>) -> Self {
        Self::Success(msg.into())
    }

    pub fn render(&self) -> String {
        match self {
            Self::Info(msg) => format!("{}[INFO]{} {}", COLOR_INFO, COLOR_RESET, msg),
            Self::Success(msg) => format!("{}[SUCCESS]{} {}", COLOR_SUCCESS, COLOR_RESET, msg),
        }
    }

    pub fn print(&self) {
        println!("{}", self.render());
    }
}

pub fn starting_message(mode: &str, api_url: &str) -> SessionMessage {
    SessionMessage::info(format!("Starting {} mode against {}", mode, api_url))
}

pub fn print_session_starting(mode: &str, api_url: &str) {
    starting_message(mode, api_url).print();
}

pub fn print_session_shutdown() {
    SessionMessage::info("Stopping statistics refresh...").print();
}

pub fn print_session_exit_success() {
    SessionMessage::success("FraudWatch exited successfully").print();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_message_names_mode_and_server() {
        assert_eq!(
            starting_message("headless", "http://127.0.0.1:5000").render(),
            "\x1b[1;36m[INFO]\x1b[0m Starting headless mode against http://127.0.0.1:5000"
        );
    }
}
