//! The command loop behind interactive mode, `--eval` and `--script`.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use mstgraph_foundation::{Error, ErrorKind, Result};

use crate::command::{Command, Outcome};
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// Reads commands, runs them against a [`Session`], prints the results.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// Where command lines come from.
    editor: E,

    /// Loaded snapshots, current region and engine.
    session: Session,

    /// Print the version line before the first prompt.
    show_banner: bool,
}

impl Repl<RustylineEditor> {
    /// Creates a REPL reading from the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up.
    pub fn new(session: Session) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a REPL reading from `editor`.
    pub fn with_editor(editor: E, session: Session) -> Self {
        Self {
            editor,
            session,
            show_banner: true,
        }
    }

    /// Skips the version line, for sessions that already printed output.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// The session commands run against.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable access to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            Self::print_banner();
        }

        loop {
            let prompt = format!("mstgraph[{}]> ", self.session.region());
            let line = match self.editor.read_line(&prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };
            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);

            match self.eval(&line) {
                Ok(Some(Outcome::Quit)) => break,
                Ok(Some(Outcome::Output(text))) => println!("{text}"),
                Ok(None) => {}
                Err(e) => Self::print_error(&e),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Parses and runs one line.
    ///
    /// Returns `None` for blank lines and comments.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is not a valid command or the
    /// command fails.
    pub fn eval(&mut self, line: &str) -> Result<Option<Outcome>> {
        match Command::parse(line)? {
            Some(command) => command.execute(&mut self.session).map(Some),
            None => Ok(None),
        }
    }

    /// Runs every line of a command file, stopping at the first error or
    /// at `quit`. Returns the printed output.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a command fails.
    pub fn eval_file(&mut self, path: &Path) -> Result<Vec<String>> {
        let source = fs::read_to_string(path).map_err(|e| {
            Error::new(ErrorKind::Io(format!(
                "failed to read {}: {e}",
                path.display()
            )))
        })?;
        self.eval_lines(source.lines())
    }

    /// Runs lines in order, stopping at the first error or at `quit`.
    ///
    /// # Errors
    ///
    /// Returns the first command error.
    pub fn eval_lines<'l>(
        &mut self,
        lines: impl IntoIterator<Item = &'l str>,
    ) -> Result<Vec<String>> {
        let mut output = Vec::new();
        for line in lines {
            match self.eval(line)? {
                Some(Outcome::Output(text)) => output.push(text),
                Some(Outcome::Quit) => break,
                None => {}
            }
        }
        Ok(output)
    }

    fn print_error(error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
        if let Some(context) = error.context.as_ref().filter(|c| !c.path.is_empty()) {
            let path: Vec<String> = context.path.iter().map(ToString::to_string).collect();
            eprintln!("\x1b[2m  at {}\x1b[0m", path.join(" > "));
        }
    }

    fn print_banner() {
        println!("\x1b[1;36mmstgraph\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!("Type `help` for commands. Use Ctrl+D to exit.\n");
        let _ = io::stdout().flush();
    }
}
