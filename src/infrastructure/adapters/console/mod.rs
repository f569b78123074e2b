//! Console front end: reads commands from stdin, prints state changes

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::watch;

use crate::application::errors::PipelineError;
use crate::application::messaging::{Dispatcher, Input, InputParser};
use crate::domain::entities::AppState;

/// Console adapter for local use
pub struct ConsoleAdapter {
    parser: InputParser,
    dispatcher: Dispatcher,
}

impl ConsoleAdapter {
    pub fn new(parser: InputParser, dispatcher: Dispatcher) -> Self {
        Self { parser, dispatcher }
    }

    /// Dispatch whatever `line` asks for. Returns false when the user quits.
    pub fn handle_line(&self, line: &str) -> bool {
        match self.parser.parse(line) {
            Input::Commands(commands) => {
                for command in commands {
                    self.dispatcher.dispatch(command);
                }
            }
            Input::Help => println!("{}", self.parser.help()),
            Input::Unknown(name) => println!("Unknown command: {}", name),
            Input::Empty => {}
            Input::Quit => return false,
        }
        true
    }

    /// Read lines until EOF or quit
    pub async fn run<R>(&self, input: R) -> Result<(), PipelineError>
    where
        R: AsyncBufRead + Unpin,
    {
        tracing::info!("Console ready, type {}help for commands", self.parser.prefix());
        let mut lines = input.lines();

        while let Some(line) = lines.next_line().await? {
            if !self.handle_line(&line) {
                break;
            }
        }

        Ok(())
    }
}

/// Turns successive states into printable lines
#[derive(Debug, Default)]
pub struct ConsoleRenderer {
    shown_messages: usize,
    pseudo: Option<String>,
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines describing what changed since the last call
    pub fn render(&mut self, state: &AppState) -> Vec<String> {
        let mut lines = Vec::new();

        if state.settings.pseudo != self.pseudo {
            if let Some(pseudo) = &state.settings.pseudo {
                lines.push(format!("[connected as {}]", pseudo));
            }
            self.pseudo = state.settings.pseudo.clone();
        }

        for message in state.chat.messages.iter().skip(self.shown_messages) {
            lines.push(format!("<{}> {}", message.author, message.text));
        }
        self.shown_messages = state.chat.messages.len();

        lines
    }

    /// Print changes until the store goes away
    pub async fn run(mut self, mut changes: watch::Receiver<AppState>) {
        while changes.changed().await.is_ok() {
            let state = changes.borrow_and_update().clone();
            for line in self.render(&state) {
                println!("{}", line);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::messaging::Store;
    use crate::domain::entities::Message;

    #[test]
    fn test_handle_line_queues_commands() {
        let mut store = Store::builder().build();
        let console = ConsoleAdapter::new(InputParser::default(), store.dispatcher());

        assert!(console.handle_line("/email a@b.com"));
        assert!(console.handle_line("/password secret"));
        assert!(console.handle_line("/nope"));
        assert!(!console.handle_line("/quit"));

        assert_eq!(store.drain_queued(), 2);
        let state = store.get_state();
        assert_eq!(state.settings.email, "a@b.com");
        assert_eq!(state.settings.password, "secret");
    }

    #[tokio::test]
    async fn test_run_stops_at_quit() {
        let mut store = Store::builder().build();
        let console = ConsoleAdapter::new(InputParser::default(), store.dispatcher());

        let input: &[u8] = b"/email a@b.com\n/quit\n/email ignored@b.com\n";
        console.run(input).await.unwrap();

        store.drain_queued();
        assert_eq!(store.get_state().settings.email, "a@b.com");
    }

    #[test]
    fn test_renderer_shows_only_new_things() {
        let mut renderer = ConsoleRenderer::new();
        let mut state = AppState::default();
        assert!(renderer.render(&state).is_empty());

        state.settings.pseudo = Some("alice".into());
        state.chat.messages.push(Message::new("hi", "bob"));
        assert_eq!(renderer.render(&state), vec!["[connected as alice]", "<bob> hi"]);

        state.chat.messages.push(Message::new("yo", "alice"));
        assert_eq!(renderer.render(&state), vec!["<alice> yo"]);
        assert!(renderer.render(&state).is_empty());

        // Unrelated field changes print nothing
        state.settings.password = "secret".into();
        state.chat.input = "draft".into();
        assert!(renderer.render(&state).is_empty());
    }
}
