//! Line input for the REPL.
//!
//! The REPL reads through [`LineEditor`]; [`RustylineEditor`] is the
//! terminal implementation, and tests drive the REPL with scripted input.

use std::borrow::Cow;

use mstgraph_foundation::{Error, ErrorKind, Result};
use rustyline::completion::{Completer, FilenameCompleter, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator};

use crate::command::COMMAND_WORDS;

/// What one prompt produced.
#[derive(Debug)]
pub enum ReadResult {
    /// A command line.
    Line(String),
    /// Ctrl+C; the REPL discards the line and prompts again.
    Interrupted,
    /// Ctrl+D or end of piped input; the REPL exits.
    Eof,
}

/// A source of command lines.
pub trait LineEditor {
    /// Prompts for and reads one line.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Records a line that was run.
    fn add_history(&mut self, line: &str);
}

/// Completion, history hints and prompt colouring for [`RustylineEditor`].
#[derive(Helper, Completer, Hinter, Validator)]
struct MstHelper {
    #[rustyline(Completer)]
    completer: MstCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Highlighter for MstHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        false
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completes command words, then kind, region and depth names, and
/// file paths after `load`.
struct MstCompleter {
    file_completer: FilenameCompleter,
}

impl MstCompleter {
    fn new() -> Self {
        Self {
            file_completer: FilenameCompleter::new(),
        }
    }

    fn candidates(first: Option<&str>, position: usize) -> Vec<String> {
        use mstgraph_engine::ReverseDepth;
        use mstgraph_foundation::{EntityKind, Region};

        let names: Vec<&str> = match (first, position) {
            (None, _) => COMMAND_WORDS.to_vec(),
            (Some("show" | "reverse"), 1) => EntityKind::ALL.iter().map(|k| k.name()).collect(),
            (Some("reverse"), 3) => ReverseDepth::ALL.iter().map(|d| d.name()).collect(),
            (Some("load" | "reload" | "use"), 1) => {
                Region::ALL.iter().map(|r| r.code()).collect()
            }
            _ => Vec::new(),
        };
        names.into_iter().map(String::from).collect()
    }
}

impl Completer for MstCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = line[..pos].rfind(char::is_whitespace).map_or(0, |i| i + 1);
        let word = &line[start..pos];
        let before: Vec<&str> = line[..start].split_whitespace().collect();

        if before.first() == Some(&"load") && before.len() == 2 {
            return self.file_completer.complete(line, pos, ctx);
        }

        let candidates = Self::candidates(before.first().copied(), before.len())
            .into_iter()
            .filter(|c| c.to_ascii_lowercase().starts_with(&word.to_ascii_lowercase()))
            .map(|c| Pair {
                display: c.clone(),
                replacement: c,
            })
            .collect();

        Ok((start, candidates))
    }
}

/// Terminal input with history, hints and completion.
pub struct RustylineEditor {
    editor: Editor<MstHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates an editor on the current terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?
            .build();

        let helper = MstHelper {
            completer: MstCompleter::new(),
            hinter: HistoryHinter::new(),
        };

        let mut editor = Editor::with_config(config)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::new(ErrorKind::Io(e.to_string()))),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}
