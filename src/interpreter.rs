//! Interpreter that drives a [`Robot`] from textual commands.
//!
//! The entry point is [`CommandInterpreter`]. Configure it with an
//! [`InterpreterConfig`], register keyword-to-command mappings via
//! [`CommandInterpreter::set_keyword`] or
//! [`CommandInterpreter::populate_standard_keywords`], then feed it lines with
//! [`CommandInterpreter::run`].
//!
//! Recognised commands, one per line:
//!
//! | Keyword  | Arguments | Effect                         |
//! |----------|-----------|--------------------------------|
//! | `PLACE`  | `X,Y,F`   | put the robot on the table     |
//! | `MOVE`   |           | step forward, ignored at edges |
//! | `LEFT`   |           | quarter turn anticlockwise     |
//! | `RIGHT`  |           | quarter turn clockwise         |
//! | `REPORT` |           | print `X,Y,F`                  |

use crate::config::InterpreterConfig;
use crate::heading::Direction;
use crate::robot::{Robot, RobotError};
use log::warn;
use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Why a single line could not be carried out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("{command} expects arguments X,Y,F, got `{arguments}`")]
    MalformedArguments { command: String, arguments: String },
    #[error("{command} takes no arguments, got `{arguments}`")]
    UnexpectedArguments { command: String, arguments: String },
    #[error(transparent)]
    Robot(#[from] RobotError),
}

/// Errors that end a [`CommandInterpreter::run`].
#[derive(Debug, Error)]
pub enum InterpreterError {
    #[error("i/o error while running commands")]
    Io(#[from] io::Error),
    #[error("halted at line {line}: {source}")]
    Halted { line: usize, source: CommandError },
}

/// The command a keyword is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Place,
    Move,
    Left,
    Right,
    Report,
}

/// A parsed command line.
///
/// Place arguments stay textual so the robot applies its own validation order
/// (coordinates before orientation).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Place {
        x: String,
        y: String,
        facing: String,
    },
    Move,
    Left,
    Right,
    Report,
}

/// Counters for a finished run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Commands that completed, including edge-blocked moves.
    pub executed: usize,
    /// Commands skipped because they were invalid.
    pub rejected: usize,
    /// Every report produced, in order.
    pub reports: Vec<String>,
}

/// Parses command lines and dispatches them to a robot.
pub struct CommandInterpreter {
    keywords: HashMap<String, CommandKind>,
    config: InterpreterConfig,
}

impl CommandInterpreter {
    /// Creates an interpreter with no keywords registered.
    pub fn new(config: InterpreterConfig) -> Self {
        Self {
            keywords: HashMap::new(),
            config,
        }
    }

    /// Creates an interpreter with the standard keywords registered.
    pub fn standard(config: InterpreterConfig) -> Self {
        let mut interpreter = Self::new(config);
        interpreter.populate_standard_keywords();
        interpreter
    }

    /// Binds `keyword` (matched case-insensitively) to `kind`.
    ///
    /// Rebinding an existing keyword replaces the old mapping.
    pub fn set_keyword(&mut self, keyword: &str, kind: CommandKind) {
        self.keywords.insert(keyword.to_ascii_uppercase(), kind);
    }

    /// Registers `PLACE`, `MOVE`, `LEFT`, `RIGHT` and `REPORT`.
    pub fn populate_standard_keywords(&mut self) {
        let mappings = [
            ("PLACE", CommandKind::Place),
            ("MOVE", CommandKind::Move),
            ("LEFT", CommandKind::Left),
            ("RIGHT", CommandKind::Right),
            ("REPORT", CommandKind::Report),
        ];

        for (keyword, kind) in mappings {
            self.set_keyword(keyword, kind);
        }
    }

    /// Parses one line. Blank lines yield `Ok(None)`.
    ///
    /// # Errors
    /// Returns a [`CommandError`] for unknown keywords or bad argument lists.
    pub fn parse(&self, line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (keyword, arguments) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };
        let command_name = keyword.to_ascii_uppercase();
        let kind = *self
            .keywords
            .get(&command_name)
            .ok_or_else(|| CommandError::UnknownCommand(keyword.to_string()))?;

        if kind == CommandKind::Place {
            let mut parts = arguments.split(',').map(str::trim);
            return match (parts.next(), parts.next(), parts.next(), parts.next()) {
                (Some(x), Some(y), Some(facing), None) => Ok(Some(Command::Place {
                    x: x.to_string(),
                    y: y.to_string(),
                    facing: facing.to_string(),
                })),
                _ => Err(CommandError::MalformedArguments {
                    command: command_name,
                    arguments: arguments.to_string(),
                }),
            };
        }

        if !arguments.is_empty() {
            return Err(CommandError::UnexpectedArguments {
                command: command_name,
                arguments: arguments.to_string(),
            });
        }

        Ok(Some(match kind {
            CommandKind::Move => Command::Move,
            CommandKind::Left => Command::Left,
            CommandKind::Right => Command::Right,
            CommandKind::Report => Command::Report,
            CommandKind::Place => unreachable!(),
        }))
    }

    /// Applies `command` to `robot`. Returns the report text for `REPORT`.
    ///
    /// # Errors
    /// Propagates the robot's [`RobotError`] unchanged.
    pub fn execute(
        &self,
        robot: &mut Robot<'_>,
        command: &Command,
    ) -> Result<Option<String>, RobotError> {
        match command {
            Command::Place { x, y, facing } => robot.place_from_str(x, y, facing).map(|()| None),
            Command::Move => robot.move_forward().map(|_| None),
            Command::Left => robot.rotate(Direction::Left).map(|()| None),
            Command::Right => robot.rotate(Direction::Right).map(|()| None),
            Command::Report => robot.report().map(Some),
        }
    }

    /// Runs every line of `input` against `robot`, writing each report to
    /// `output` on its own line.
    ///
    /// Rejected commands are logged and skipped, unless
    /// [`InterpreterConfig::halt_on_error`] is set.
    ///
    /// # Errors
    /// - [`InterpreterError::Io`] if reading `input` or writing `output` fails.
    /// - [`InterpreterError::Halted`] on the first rejected command when halting is enabled.
    pub fn run<R: BufRead, W: Write>(
        &self,
        robot: &mut Robot<'_>,
        input: R,
        mut output: W,
    ) -> Result<RunSummary, InterpreterError> {
        let mut summary = RunSummary::default();

        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;

            let command = match self.parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    self.reject(line_number, err, &mut summary)?;
                    continue;
                }
            };

            match self.execute(robot, &command) {
                Ok(Some(report)) => {
                    writeln!(output, "{report}")?;
                    summary.reports.push(report);
                    summary.executed += 1;
                }
                Ok(None) => summary.executed += 1,
                Err(err) => self.reject(line_number, err.into(), &mut summary)?,
            }
        }

        output.flush()?;
        Ok(summary)
    }

    /// Runs a multi-line script, discarding printed output.
    ///
    /// Reports are still collected in the returned [`RunSummary`].
    ///
    /// # Errors
    /// See [`run`](Self::run).
    pub fn run_script(
        &self,
        robot: &mut Robot<'_>,
        script: &str,
    ) -> Result<RunSummary, InterpreterError> {
        self.run(robot, script.as_bytes(), io::sink())
    }

    fn reject(
        &self,
        line: usize,
        err: CommandError,
        summary: &mut RunSummary,
    ) -> Result<(), InterpreterError> {
        if self.config.halt_on_error {
            return Err(InterpreterError::Halted { line, source: err });
        }
        warn!("event=command_rejected line={line} reason=\"{err}\"");
        summary.rejected += 1;
        Ok(())
    }
}
