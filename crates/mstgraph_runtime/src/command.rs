//! REPL and batch commands.
//!
//! One command per line, whitespace-separated. Lines starting with `#`
//! are comments.

use std::fmt::Write as _;
use std::path::PathBuf;

use mstgraph_datavals::FuncType;
use mstgraph_engine::ReverseDepth;
use mstgraph_foundation::{EntityKind, Error, ErrorKind, RecordId, Region, Result};
use serde::Serialize;

use crate::session::Session;

/// Command words, for completion.
pub const COMMAND_WORDS: [&str; 10] = [
    "load", "reload", "use", "show", "reverse", "decode", "warnings", "stats", "help", "quit",
];

/// A parsed command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `load <region> <path>`
    Load {
        /// Region to publish under.
        region: Region,
        /// Dataset file.
        path: PathBuf,
    },
    /// `reload [region]`
    Reload(Option<Region>),
    /// `use <region>`
    Use(Region),
    /// `show <kind> <id> [depth]`
    Show {
        /// Entity kind.
        kind: EntityKind,
        /// Entity ID.
        id: RecordId,
        /// Forward depth bound.
        depth: Option<usize>,
    },
    /// `reverse <kind> <id> [depth]`
    Reverse {
        /// Entity kind.
        kind: EntityKind,
        /// Entity ID.
        id: RecordId,
        /// Reverse depth.
        depth: Option<ReverseDepth>,
    },
    /// `decode <funcType|-> <datavals>`
    Decode {
        /// Function type context, `-` for none. Numeric codes with no
        /// known type also mean none.
        func_type: Option<FuncType>,
        /// The DataVals string.
        raw: String,
    },
    /// `warnings`
    Warnings,
    /// `stats`
    Stats,
    /// `help`
    Help,
    /// `quit`
    Quit,
}

/// What running a command produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Text to print.
    Output(String),
    /// The session should end.
    Quit,
}

fn usage(text: &str) -> Error {
    Error::invalid_argument(format!("usage: {text}"))
}

fn parse_id(word: &str) -> Result<RecordId> {
    word.parse()
        .map_err(|_| Error::invalid_argument(format!("invalid id: {word}")))
}

/// `-` is no context. An unknown numeric code falls back to the default
/// schema, the same as a record carrying that code. Unknown names fail.
fn parse_func_type(word: &str) -> Result<Option<FuncType>> {
    if word == "-" {
        return Ok(None);
    }
    match word.parse::<i32>() {
        Ok(code) => Ok(FuncType::from_code(code)),
        Err(_) => word.parse().map(Some),
    }
}

impl Command {
    /// Parses one line. Blank lines and comments yield `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the command word is unknown or its arguments
    /// are malformed.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match (word.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("load", [region, path]) => Self::Load {
                region: region.parse()?,
                path: PathBuf::from(path),
            },
            ("load", _) => return Err(usage("load <region> <path>")),
            ("reload", []) => Self::Reload(None),
            ("reload", [region]) => Self::Reload(Some(region.parse()?)),
            ("reload", _) => return Err(usage("reload [region]")),
            ("use", [region]) => Self::Use(region.parse()?),
            ("use", _) => return Err(usage("use <region>")),
            ("show", [kind, id, rest @ ..]) if rest.len() <= 1 => Self::Show {
                kind: kind.parse()?,
                id: parse_id(id)?,
                depth: rest
                    .first()
                    .map(|d| {
                        d.parse()
                            .map_err(|_| Error::invalid_argument(format!("invalid depth: {d}")))
                    })
                    .transpose()?,
            },
            ("show", _) => return Err(usage("show <kind> <id> [depth]")),
            ("reverse", [kind, id, rest @ ..]) if rest.len() <= 1 => Self::Reverse {
                kind: kind.parse()?,
                id: parse_id(id)?,
                depth: rest.first().map(|d| d.parse()).transpose()?,
            },
            ("reverse", _) => return Err(usage("reverse <kind> <id> [depth]")),
            ("decode", [func_type, raw @ ..]) if !raw.is_empty() => Self::Decode {
                func_type: parse_func_type(func_type)?,
                raw: raw.concat(),
            },
            ("decode", _) => return Err(usage("decode <funcType|-> <datavals>")),
            ("warnings", []) => Self::Warnings,
            ("stats", []) => Self::Stats,
            ("help" | "?", []) => Self::Help,
            ("quit" | "exit", []) => Self::Quit,
            (other, _) => {
                return Err(Error::invalid_argument(format!(
                    "unknown command: {other} (try `help`)"
                )));
            }
        };
        Ok(Some(command))
    }

    /// Runs the command against a session.
    ///
    /// # Errors
    ///
    /// Returns whatever error the underlying operation returns.
    pub fn execute(self, session: &mut Session) -> Result<Outcome> {
        let output = match self {
            Self::Load { region, path } => {
                let snapshot = session.load(region, &path)?;
                format!(
                    "loaded {region} from {}: {} entities, {} warnings",
                    path.display(),
                    snapshot.store().len(),
                    snapshot.report().len()
                )
            }
            Self::Reload(region) => {
                let snapshot = session.reload(region)?;
                format!(
                    "reloaded {}: {} entities, {} warnings",
                    snapshot.region(),
                    snapshot.store().len(),
                    snapshot.report().len()
                )
            }
            Self::Use(region) => {
                session.use_region(region)?;
                format!("using {region}")
            }
            Self::Show { kind, id, depth } => to_json(&session.show(kind, id, depth)?)?,
            Self::Reverse { kind, id, depth } => to_json(&session.reverse(kind, id, depth)?)?,
            Self::Decode { func_type, raw } => to_json(&session.decode(&raw, func_type)?)?,
            Self::Warnings => warnings(session)?,
            Self::Stats => stats(session)?,
            Self::Help => HELP.to_string(),
            Self::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Output(output))
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}

fn warnings(session: &Session) -> Result<String> {
    let snapshot = session.snapshot()?;
    let report = snapshot.report();
    if report.is_empty() {
        return Ok(format!("{}: no warnings", snapshot.region()));
    }
    let (dangling, duplicate, orphan) = report.counts();
    let mut out = format!(
        "{}: {} warnings ({dangling} dangling, {duplicate} duplicate, {orphan} orphan)",
        snapshot.region(),
        report.len()
    );
    for warning in report.warnings() {
        let _ = write!(out, "\n  {warning}");
    }
    Ok(out)
}

fn stats(session: &Session) -> Result<String> {
    let stats = session.snapshot()?.stats();
    let mut out = format!("{} ({})", stats.region, stats.label);
    for (kind, count) in &stats.entities {
        if *count > 0 {
            let _ = write!(out, "\n  {:<10} {count:>8}", kind.name());
        }
    }
    out.push_str("\nedges");
    for edge in &stats.edges {
        if edge.entries > 0 {
            let _ = write!(
                out,
                "\n  {:<26} {:>8} keys {:>8} entries",
                edge.edge.name(),
                edge.keys,
                edge.entries
            );
        }
    }
    let _ = write!(out, "\nwarnings: {}", stats.warnings);
    Ok(out)
}

const HELP: &str = "\
commands:
  load <region> <path>          load a JSON or MessagePack dataset
  reload [region]               reload a region from its last path
  use <region>                  switch to a loaded region
  show <kind> <id> [depth]      forward-expand an entity
  reverse <kind> <id> [depth]   list entities that use an entity
                                (depth: none, function, skillNp, servant)
  decode <funcType|-> <vals>    decode a DataVals string
  warnings                      list load-time consistency warnings
  stats                         entity and edge counts
  help                          this text
  quit                          exit

kinds: buff function skill np servant mc cc item war spot quest aiact aisvt aifield
regions: JP NA CN KR TW";
