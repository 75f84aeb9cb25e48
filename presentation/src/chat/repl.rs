//! REPL (Read-Eval-Print Loop) for interactive chat

use super::document::read_document;
use colored::Colorize;
use docqa_application::{ChatController, QaBackend, SubmitOutcome};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// A slash command typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Quit,
    Help,
    Session,
    /// `/upload <path>`; `None` when no path was given
    Upload(Option<PathBuf>),
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };
        match name {
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/session" => ReplCommand::Session,
            "/upload" | "/u" => {
                let path = (!rest.is_empty()).then(|| PathBuf::from(rest));
                ReplCommand::Upload(path)
            }
            _ => ReplCommand::Unknown(name.to_string()),
        }
    }
}

/// Interactive chat REPL
pub struct ChatRepl<B: QaBackend + 'static> {
    controller: Arc<ChatController<B>>,
    backend_url: Option<String>,
    history_file: Option<PathBuf>,
}

impl<B: QaBackend + 'static> ChatRepl<B> {
    pub fn new(controller: Arc<ChatController<B>>) -> Self {
        Self {
            controller,
            backend_url: None,
            history_file: dirs::data_dir().map(|p| p.join("docqa").join("history.txt")),
        }
    }

    /// Backend location shown in the welcome banner
    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = Some(url.into());
        self
    }

    /// Override where input history is kept
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.history_file = path;
        }
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline("docqa> ") {
                Ok(line) => {
                    let line = line.trim();

                    // Empty input does nothing
                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    if line.starts_with('/') {
                        if self.handle_command(ReplCommand::parse(line)).await {
                            break;
                        }
                        continue;
                    }

                    let outcome = self.controller.submit_question(line).await;
                    debug!("Question outcome: {:?}", outcome);
                    println!();
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_file {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "╭─────────────────────────────────────────────╮".cyan());
        println!("{}", "│           docqa - Document Q&A Chat         │".cyan());
        println!("{}", "╰─────────────────────────────────────────────╯".cyan());
        println!();
        if let Some(url) = &self.backend_url {
            println!("{} {}", "Backend:".bold(), url);
        }
        println!("{} {}", "Locale:".bold(), self.controller.behavior().locale);
        self.print_session();
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /upload <path>   - Upload a document and start a session");
        println!("  /session         - Show the current session");
        println!("  /help, /h, /?    - Show this help");
        println!("  /quit, /exit, /q - Exit chat");
        println!();
    }

    fn print_session(&self) {
        match self.controller.session_id() {
            Some(id) => println!("{} {}", "Session:".bold(), id),
            None => println!("{} {}", "Session:".bold(), "none (upload a document first)".dimmed()),
        }
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => {
                println!();
                Self::print_help();
            }
            ReplCommand::Session => self.print_session(),
            ReplCommand::Upload(None) => {
                println!("Usage: /upload <path>");
            }
            ReplCommand::Upload(Some(path)) => match read_document(&path).await {
                Ok(file) => {
                    if let SubmitOutcome::Uploaded(id) =
                        self.controller.submit_upload(Some(file)).await
                    {
                        debug!("Now scoped to session {}", id);
                    }
                    println!();
                }
                Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
            },
            ReplCommand::Unknown(name) => {
                println!("Unknown command: {}", name);
                println!("Type /help for available commands");
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quit_aliases() {
        for cmd in ["/quit", "/exit", "/q", "  /q  "] {
            assert_eq!(ReplCommand::parse(cmd), ReplCommand::Quit);
        }
    }

    #[test]
    fn test_parse_upload_with_path() {
        assert_eq!(
            ReplCommand::parse("/upload  docs/manual v2.pdf "),
            ReplCommand::Upload(Some(PathBuf::from("docs/manual v2.pdf")))
        );
        assert_eq!(ReplCommand::parse("/upload"), ReplCommand::Upload(None));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            ReplCommand::parse("/frobnicate now"),
            ReplCommand::Unknown("/frobnicate".to_string())
        );
        assert_eq!(ReplCommand::parse("/session"), ReplCommand::Session);
    }
}
