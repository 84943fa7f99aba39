//! The line-oriented collaborators the game talks to. The game never touches
//! stdin/stdout directly, so tests can swap in `ScriptedInput` and
//! `RecordingOutput`.

use std::collections::VecDeque;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("Input closed before the game finished")]
    InputClosed,
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Yields one line of operator input per call, without its line terminator.
/// Blocks until the line is available.
pub trait InputProvider {
    fn read_line(&mut self) -> Result<String, IoError>;
}

pub trait OutputProvider {
    /// Write `text` with no trailing newline.
    fn write(&mut self, text: &str) -> Result<(), IoError>;

    fn write_line(&mut self, text: &str) -> Result<(), IoError> {
        self.write(text)?;
        self.write("\n")
    }
}

/// Reads lines from any buffered reader; end of input is `IoError::InputClosed`.
#[derive(Debug)]
pub struct ConsoleInput<R> {
    reader: R,
}

impl<R: BufRead> ConsoleInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl ConsoleInput<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(io::stdin()))
    }
}

impl<R: BufRead> InputProvider for ConsoleInput<R> {
    fn read_line(&mut self) -> Result<String, IoError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(IoError::InputClosed);
        }
        let len = line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
        line.truncate(len);
        Ok(line)
    }
}

/// Writes to any writer, flushing after every call so prompts show up before
/// the game blocks on input.
#[derive(Debug)]
pub struct ConsoleOutput<W> {
    writer: W,
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl ConsoleOutput<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputProvider for ConsoleOutput<W> {
    fn write(&mut self, text: &str) -> Result<(), IoError> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Replays a fixed list of lines, then reports `InputClosed`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputProvider for ScriptedInput {
    fn read_line(&mut self) -> Result<String, IoError> {
        self.lines.pop_front().ok_or(IoError::InputClosed)
    }
}

/// Captures everything written to it.
#[derive(Debug, Clone, Default)]
pub struct RecordingOutput {
    buffer: String,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &'_ str {
        &self.buffer
    }

    pub fn lines(&self) -> Vec<&'_ str> {
        self.buffer.lines().collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.buffer.contains(needle)
    }

    /// How many times `needle` has been written.
    pub fn count(&self, needle: &str) -> usize {
        self.buffer.matches(needle).count()
    }
}

impl OutputProvider for RecordingOutput {
    fn write(&mut self, text: &str) -> Result<(), IoError> {
        self.buffer.push_str(text);
        Ok(())
    }
}
