use colored::Colorize;
use std::io::{self, Write};

use hookchat_chat::{Alignment, ChatView, ViewItem};

const DEFAULT_WIDTH: usize = 80;

/// Paints [`ChatView`]s onto an append-only terminal.
///
/// Only rows that were not printed before are emitted, so the newest
/// content always ends up at the bottom of the scrollback.
#[derive(Debug)]
pub struct TerminalRenderer {
    width: usize,
    header_shown: bool,
    placeholder_shown: bool,
    printed_messages: usize,
    pending_shown: bool,
    last_banner: Option<String>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

impl TerminalRenderer {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            header_shown: false,
            placeholder_shown: false,
            printed_messages: 0,
            pending_shown: false,
            last_banner: None,
        }
    }

    pub fn paint(&mut self, view: &ChatView) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.paint_to(view, &mut out)?;
        out.flush()
    }

    pub fn paint_to<W: Write>(&mut self, view: &ChatView, out: &mut W) -> io::Result<()> {
        if !self.header_shown {
            writeln!(out, "{}", format!("🤖 {}", view.title).bright_cyan().bold())?;
            writeln!(out, "{}", view.subtitle.bright_black())?;
            writeln!(out, "{}", "─".repeat(self.width).bright_black())?;
            self.header_shown = true;
        }

        let mut seen_messages = 0;
        let mut pending_visible = false;
        for item in &view.items {
            match item {
                ViewItem::Placeholder { heading, hint } => {
                    if !self.placeholder_shown {
                        writeln!(out)?;
                        writeln!(out, "{}", center(heading, self.width).bold())?;
                        writeln!(out, "{}", center(hint, self.width).bright_black())?;
                        writeln!(out)?;
                        self.placeholder_shown = true;
                    }
                }
                ViewItem::Message { align, content, time } => {
                    seen_messages += 1;
                    if seen_messages > self.printed_messages {
                        self.write_message(out, *align, content, time)?;
                        self.printed_messages = seen_messages;
                    }
                }
                ViewItem::Pending { text } => {
                    pending_visible = true;
                    if !self.pending_shown {
                        writeln!(out, "{}", format!("⏳ {}", text).bright_black().italic())?;
                    }
                }
            }
        }
        self.pending_shown = pending_visible;

        if view.error_banner != self.last_banner {
            if let Some(banner) = &view.error_banner {
                writeln!(out, "{} {}", banner.red(), "✕ /dismiss".bright_black())?;
            }
            self.last_banner = view.error_banner.clone();
        }

        Ok(())
    }

    fn write_message<W: Write>(&self, out: &mut W, align: Alignment, content: &str, time: &str) -> io::Result<()> {
        match align {
            Alignment::Left => {
                for line in wrap(content, self.width) {
                    writeln!(out, "{}", line.white())?;
                }
                writeln!(out, "{}", time.bright_black())?;
            }
            Alignment::Right => {
                for line in wrap(content, self.width) {
                    writeln!(out, "{}", right(&line, self.width).bright_blue())?;
                }
                writeln!(out, "{}", right(time, self.width).blue())?;
            }
        }
        Ok(())
    }
}

/// Placeholder to show above the prompt while the input box is open and empty
pub fn input_hint(view: &ChatView) -> Option<&str> {
    (view.input_enabled && view.input.is_empty()).then_some(view.input_placeholder.as_str())
}

/// Greedy word wrap; words longer than `width` are split
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for raw in text.lines() {
        let mut current = String::new();
        let mut current_len = 0;
        for word in raw.split_whitespace() {
            let chars: Vec<char> = word.chars().collect();
            for piece in chars.chunks(width) {
                if current_len > 0 && current_len + 1 + piece.len() > width {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                if current_len > 0 {
                    current.push(' ');
                    current_len += 1;
                }
                current.extend(piece);
                current_len += piece.len();
            }
        }
        lines.push(current);
    }
    lines
}

fn right(text: &str, width: usize) -> String {
    format!("{:>width$}", text, width = width)
}

fn center(text: &str, width: usize) -> String {
    format!("{:^width$}", text, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookchat_chat::ConversationState;
    use hookchat_types::FetchError;
    use serde_json::json;

    fn paint(renderer: &mut TerminalRenderer, state: &ConversationState) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        renderer
            .paint_to(&ChatView::build(state, ""), &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_first_paint_shows_header_and_placeholder() {
        let mut renderer = TerminalRenderer::new(40);
        let output = paint(&mut renderer, &ConversationState::new());

        assert!(output.contains("Chatbot Assistant v1.1"));
        assert!(output.contains("Always here to help"));
        assert!(output.contains("Welcome to the Chatbot!"));
    }

    #[test]
    fn test_only_new_messages_are_printed() {
        let mut renderer = TerminalRenderer::new(40);
        let mut state = ConversationState::new();
        paint(&mut renderer, &state);

        state.submit("question").unwrap();
        let sending = paint(&mut renderer, &state);
        assert!(sending.contains("question"));
        assert!(sending.contains("Thinking..."));
        assert!(!sending.contains("Chatbot Assistant"));

        state.complete(Ok(json!({ "message": "answer" })));
        let replied = paint(&mut renderer, &state);
        assert!(replied.contains("answer"));
        assert!(!replied.contains("question"));
        assert!(!replied.contains("Thinking..."));
    }

    #[test]
    fn test_user_messages_right_aligned() {
        let mut renderer = TerminalRenderer::new(20);
        let mut state = ConversationState::new();
        state.submit("hey").unwrap();

        let output = paint(&mut renderer, &state);
        assert!(output.lines().any(|line| line == format!("{:>20}", "hey")));
    }

    #[test]
    fn test_long_user_line_wrapped_within_width() {
        let mut renderer = TerminalRenderer::new(20);
        let mut state = ConversationState::new();
        let text = "the quick brown fox jumps over the lazy dog twice";
        state.submit(text).unwrap();

        let output = paint(&mut renderer, &state);
        let rows: Vec<&str> = output
            .lines()
            .skip_while(|line| !line.contains("the quick"))
            .take_while(|line| !line.contains("Thinking..."))
            .collect();

        assert!(rows.len() > 2);
        assert!(rows.iter().all(|line| line.chars().count() == 20));
        let words: Vec<&str> = rows.iter().flat_map(|line| line.split_whitespace()).collect();
        assert!(words.join(" ").starts_with(text));
    }

    #[test]
    fn test_wrap_splits_overlong_words() {
        assert_eq!(wrap("abcdefgh ij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap("one\n\ntwo", 10), vec!["one", "", "two"]);
    }

    #[test]
    fn test_input_hint_only_while_input_open_and_empty() {
        let mut state = ConversationState::new();
        assert_eq!(
            input_hint(&ChatView::build(&state, "")),
            Some("Type your message...")
        );
        assert_eq!(input_hint(&ChatView::build(&state, "draft")), None);

        state.submit("hello").unwrap();
        assert_eq!(input_hint(&ChatView::build(&state, "")), None);
    }

    #[test]
    fn test_banner_printed_once_per_error() {
        let mut renderer = TerminalRenderer::new(40);
        let mut state = ConversationState::new();
        state.submit("question").unwrap();
        state.complete(Err(FetchError::Http { status: 500, body: "server error".into() }));

        let first = paint(&mut renderer, &state);
        assert!(first.contains("Error: HTTP error! status: 500 - server error"));

        let second = paint(&mut renderer, &state);
        assert!(!second.contains("Error:"));
    }
}
