//! Per-chat login / command state machine.

/// Where a chat is in the login / command dialogue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChatState {
    #[default]
    Initial,
    AwaitingPassword,
    AwaitingCommand,
}

/// Canned replies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    SpecifyPassword,
    InvalidPassword,
    LoggedIn,
    LoggedOut,
    NotLoggedIn,
    SpecifyCommand,
    UnknownCommand,
}

impl Notice {
    pub fn text(self) -> &'static str {
        match self {
            Notice::SpecifyPassword => "Specify password",
            Notice::InvalidPassword => "Invalid password",
            Notice::LoggedIn => "Logged in",
            Notice::LoggedOut => "Logged out",
            Notice::NotLoggedIn => "Not logged in",
            Notice::SpecifyCommand => "Specify command",
            Notice::UnknownCommand => "Unknown command",
        }
    }
}

/// What the bot should do in response to one message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reaction {
    /// Plain reply.
    Reply(Notice),
    /// Reply that asks for a direct answer.
    Prompt(Notice),
    /// Run the script and reply with its output.
    Execute(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Login,
    Logout,
    Shell,
}

/// Session of one chat.
#[derive(Clone, Debug, Default)]
pub struct ChatSession {
    pub state: ChatState,
    pub logged_in: bool,
}

impl ChatSession {
    /// Advance the dialogue with one incoming text.
    pub fn handle(&mut self, text: &str, password: &str) -> Reaction {
        let command = parse_command(text);

        if command == Some(Command::Login) {
            self.state = ChatState::AwaitingPassword;
            return Reaction::Prompt(Notice::SpecifyPassword);
        }

        if self.state == ChatState::AwaitingPassword {
            // Back to initial whatever the outcome, so a typo can't trap the chat.
            self.state = ChatState::Initial;
            if text != password {
                return Reaction::Reply(Notice::InvalidPassword);
            }
            self.logged_in = true;
            return Reaction::Reply(Notice::LoggedIn);
        }

        if command == Some(Command::Logout) {
            if !self.logged_in {
                return Reaction::Reply(Notice::NotLoggedIn);
            }
            self.logged_in = false;
            return Reaction::Reply(Notice::LoggedOut);
        }

        if command == Some(Command::Shell) {
            if !self.logged_in {
                return Reaction::Reply(Notice::NotLoggedIn);
            }
            self.state = ChatState::AwaitingCommand;
            return Reaction::Prompt(Notice::SpecifyCommand);
        }

        if self.state == ChatState::AwaitingCommand {
            self.state = ChatState::Initial;
            if !self.logged_in {
                return Reaction::Reply(Notice::NotLoggedIn);
            }
            return Reaction::Execute(text.to_string());
        }

        if !self.logged_in {
            return Reaction::Reply(Notice::NotLoggedIn);
        }
        Reaction::Reply(Notice::UnknownCommand)
    }
}

fn parse_command(text: &str) -> Option<Command> {
    let t = text.trim();
    let name = t.strip_prefix('/')?;
    // Telegram may send `/cmd@botname`; arguments are not accepted.
    let name = name.split('@').next().unwrap_or("");
    match name.to_lowercase().as_str() {
        "login" => Some(Command::Login),
        "logout" => Some(Command::Logout),
        "shell" => Some(Command::Shell),
        _ => None,
    }
}
