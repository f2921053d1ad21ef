//! The prompt loop: gate, dispatch, render, transcript.

use std::io::{self, BufRead, Write};

use console::style;
use griddle_dispatch::{to_json, Dispatcher, Reply};
use griddle_render::{render_reply, TextStyle};
use tracing::debug;

use crate::auth::SessionGate;
use crate::cli::OutputMode;
use crate::history::Transcript;

/// Reply to any command typed before the gate opens.
pub const LOGIN_REQUIRED: &str = "Please log in first. Type 'login' to authenticate.";

/// One console session: the gate, the dispatcher behind it, and the
/// transcript of everything shown.
///
/// `login` and `logout` belong to the shell, not the command registry -
/// the dispatcher is unreachable until the gate opens, so registering them
/// as commands would gate them behind themselves. `exit` and `quit`
/// likewise end the loop without ever reaching the engine.
pub struct Console {
    dispatcher: Dispatcher,
    gate: SessionGate,
    transcript: Transcript,
    output: OutputMode,
}

impl Console {
    /// Wires a console around a dispatcher. `output` is resolved once,
    /// here: `Auto` never survives into the session.
    pub fn new(dispatcher: Dispatcher, output: OutputMode) -> Self {
        Self {
            dispatcher,
            gate: SessionGate::new(),
            transcript: Transcript::new(),
            output: output.resolve(),
        }
    }

    /// Everything displayed so far, oldest first.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Feeds one input line through the gate and the dispatcher.
    ///
    /// Returns the rendered entry appended to the transcript, or `None`
    /// for blank lines, which the shell swallows.
    pub fn feed(&mut self, line: &str) -> Option<String> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let entry = match line {
            "login" | "logout" => {
                if self.gate.toggle() {
                    debug!("gate opened");
                    "Logged in.".to_string()
                } else {
                    debug!("gate closed");
                    "Logged out.".to_string()
                }
            }
            _ if !self.gate.is_authenticated() => LOGIN_REQUIRED.to_string(),
            _ => {
                debug!(command = line, "dispatching");
                let reply = self.dispatcher.process(line);
                self.render(&reply)
            }
        };

        self.transcript.push(entry.clone());
        Some(entry)
    }

    fn render(&self, reply: &Reply) -> String {
        match self.output {
            OutputMode::Json => to_json(reply)
                .unwrap_or_else(|err| format!("reply serialization failed: {}", err)),
            OutputMode::Term => render_reply(reply, TextStyle::Styled),
            OutputMode::Auto | OutputMode::Text => render_reply(reply, TextStyle::Plain),
        }
    }

    /// Runs the interactive loop until EOF or an exit word.
    ///
    /// The prompt is only printed when stdin is attended; piped input
    /// produces clean output with no prompt interleaving.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> io::Result<()> {
        let attended = atty::is(atty::Stream::Stdin);
        let mut line = String::new();
        loop {
            if attended {
                write!(out, "{}", self.prompt())?;
                out.flush()?;
            }
            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            if is_exit(&line) {
                break;
            }
            if let Some(entry) = self.feed(&line) {
                writeln!(out, "{}", entry)?;
            }
        }
        Ok(())
    }

    /// Runs scripted lines (the `-c` surface) against the same session,
    /// stopping early at an exit word.
    pub fn run_script<W: Write>(&mut self, lines: &[String], mut out: W) -> io::Result<()> {
        for line in lines {
            if is_exit(line) {
                break;
            }
            if let Some(entry) = self.feed(line) {
                writeln!(out, "{}", entry)?;
            }
        }
        Ok(())
    }

    fn prompt(&self) -> String {
        match self.output {
            OutputMode::Term => style("griddle> ").cyan().to_string(),
            _ => "griddle> ".to_string(),
        }
    }
}

fn is_exit(line: &str) -> bool {
    matches!(line.trim(), "exit" | "quit")
}
