//! # Log Reconstruction Module / 日志重建模块
//!
//! The per-test raw log is a plain text stream whose messages freely span
//! multiple lines with no explicit delimiter between them. This module
//! reconstructs the original sequence of discrete messages: a line either
//! opens a new message (a header line) or belongs to the body of the one
//! currently open (a continuation line).
//!
//! 每个测试的原始日志是纯文本流，其中的消息可以自由跨越多行，
//! 消息之间没有显式分隔符。此模块重建原始的离散消息序列：
//! 每一行要么开启一条新消息（头部行），要么属于当前打开消息的
//! 正文（续行）。

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::Lines;

/// A header line starts with a level letter, a comma, a bracketed timestamp
/// blob, then a colon introducing the message body. Anything between the
/// closing bracket and the colon (e.g. a spelled-out severity) is tolerated.
static HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([DIWE]), \[([^\]]*)\][^:]*:\s?(.*)$").expect("header pattern"));

/// Placeholder used when the bracketed blob carries no `T`-separated clock
/// portion. Degraded output, not an error.
pub const TIME_UNKNOWN: &str = "??:??:??.??????";

/// Severity of a reconstructed log message.
/// 重建日志消息的严重级别。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl MessageLevel {
    /// The single-letter code used on the wire.
    pub fn letter(self) -> char {
        match self {
            MessageLevel::Debug => 'D',
            MessageLevel::Info => 'I',
            MessageLevel::Warn => 'W',
            MessageLevel::Error => 'E',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'D' => Some(MessageLevel::Debug),
            'I' => Some(MessageLevel::Info),
            'W' => Some(MessageLevel::Warn),
            'E' => Some(MessageLevel::Error),
            _ => None,
        }
    }
}

impl fmt::Display for MessageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MessageLevel::Debug => "DEBUG",
            MessageLevel::Info => "INFO",
            MessageLevel::Warn => "WARN",
            MessageLevel::Error => "ERROR",
        };
        write!(f, "{name}")
    }
}

/// One structured log entry reconstructed from the raw stream.
/// Immutable once yielded by the stream.
///
/// 从原始流中重建的一条结构化日志条目。一旦产出即不可变。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Severity parsed from the header's level letter.
    pub level: MessageLevel,
    /// Trimmed sub-second clock portion of the header timestamp
    /// (`HH:MM:SS.ssssss`), not a full date.
    pub time: String,
    /// Accumulated body including continuation lines, newline-joined.
    pub text: String,
}

/// Scans a raw log and yields its messages lazily.
///
/// The returned stream is finite and not restartable; reconstructing again
/// requires a fresh call. A continuation line that arrives while no message
/// is open poisons the stream: one `Err` is yielded and iteration ends.
pub fn messages(raw: &str) -> MessageStream<'_> {
    MessageStream {
        lines: raw.lines(),
        line_no: 0,
        open: None,
        poisoned: false,
    }
}

/// Lazy iterator over the messages of one raw log. See [`messages`].
pub struct MessageStream<'a> {
    lines: Lines<'a>,
    line_no: usize,
    open: Option<Message>,
    poisoned: bool,
}

impl Iterator for MessageStream<'_> {
    type Item = Result<Message>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.poisoned {
            return None;
        }

        for line in self.lines.by_ref() {
            self.line_no += 1;
            match parse_header(line) {
                Some(opened) => {
                    // A new header completes whatever was open before it.
                    if let Some(done) = self.open.replace(opened) {
                        return Some(Ok(done));
                    }
                }
                None => match self.open.as_mut() {
                    Some(message) => {
                        message.text.push_str(line);
                        message.text.push('\n');
                    }
                    None => {
                        // There is no message to attach this line to; message
                        // boundaries are never guessed from content alone.
                        self.poisoned = true;
                        return Some(Err(anyhow::anyhow!(
                            "malformed log stream: line {} is a continuation line but no message is open: {:?}",
                            self.line_no,
                            line
                        )));
                    }
                },
            }
        }

        // End of input: emit the message still open, if any.
        self.open.take().map(Ok)
    }
}

fn parse_header(line: &str) -> Option<Message> {
    let caps = HEADER_RE.captures(line)?;
    let level = MessageLevel::from_letter(caps[1].chars().next()?)?;
    let time = extract_time(&caps[2]);
    let mut text = caps[3].to_string();
    text.push('\n');
    Some(Message { level, time, text })
}

/// Takes the clock portion out of the bracketed timestamp blob: the substring
/// after the first `T` up to the next whitespace.
fn extract_time(blob: &str) -> String {
    match blob.split_once('T') {
        Some((_, rest)) => rest
            .split_whitespace()
            .next()
            .unwrap_or(TIME_UNKNOWN)
            .to_string(),
        None => TIME_UNKNOWN.to_string(),
    }
}
