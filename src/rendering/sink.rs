//! Output transports for the typewriter stream.
//!
//! Sinks receive one grapheme cluster at a time. [`ERASE`] is a logical
//! backspace; each sink decides how to show it.

use crossterm::{
    cursor::{MoveToColumn, MoveToPreviousLine},
    queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};
use std::io::{self, Write};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Logical backspace control character
pub const ERASE: char = '\u{8}';

/// Columns assumed when the terminal size cannot be queried
const FALLBACK_WIDTH: usize = 80;

pub trait OutputSink {
    /// Emit one grapheme cluster, or one erase action if it is [`ERASE`]
    fn write_grapheme(&mut self, grapheme: &str) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// The cursor was moved to the start of a fresh line by someone else
    /// (the terminal echoing an input line).
    fn start_line(&mut self) {}
}

fn is_erase(grapheme: &str) -> bool {
    let mut chars = grapheme.chars();
    chars.next() == Some(ERASE) && chars.next().is_none()
}

fn is_newline(grapheme: &str) -> bool {
    grapheme == "\n" || grapheme == "\r\n"
}

/// Terminal sink: an erase clears the previous column and leaves the cursor
/// there, stepping back onto the previous row across a soft wrap.
pub struct TerminalSink<W: Write> {
    out: W,
    width: usize,
    column: usize,
}

impl TerminalSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        let width = terminal::size()
            .map(|(columns, _)| columns as usize)
            .unwrap_or(FALLBACK_WIDTH);
        Self::with_width(out, width)
    }

    pub fn with_width(out: W, width: usize) -> Self {
        Self {
            out,
            width: width.max(1),
            column: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn advance(&mut self, grapheme: &str) {
        if is_newline(grapheme) {
            self.column = 0;
            return;
        }
        let width = grapheme.width();
        if self.column + width > self.width {
            self.column = 0;
        }
        self.column += width;
    }

    fn erase_column(&mut self) -> io::Result<()> {
        if self.column == 0 {
            queue!(self.out, MoveToPreviousLine(1))?;
            self.column = self.width;
        }
        self.column -= 1;
        queue!(
            self.out,
            MoveToColumn(self.column as u16),
            Clear(ClearType::UntilNewLine)
        )
    }
}

impl<W: Write> OutputSink for TerminalSink<W> {
    fn write_grapheme(&mut self, grapheme: &str) -> io::Result<()> {
        if is_erase(grapheme) {
            self.erase_column()?;
        } else {
            queue!(self.out, Print(grapheme))?;
            self.advance(grapheme);
        }
        // typed output must show up immediately
        self.out.flush()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn start_line(&mut self) {
        self.column = 0;
    }
}

/// Records everything written and keeps the resulting visible text.
///
/// Each erase action removes one column, so a double-width grapheme takes
/// two erases to disappear, as on a terminal.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    screen: String,
    written: usize,
    erased: usize,
    // columns of an already-removed wide grapheme still owed to erases
    erase_credit: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visible text after applying every erase
    pub fn screen(&self) -> &str {
        &self.screen
    }

    /// Graphemes written, erases excluded
    pub fn written(&self) -> usize {
        self.written
    }

    /// Erase actions received
    pub fn erased(&self) -> usize {
        self.erased
    }

    fn erase_column(&mut self) {
        if self.erase_credit > 0 {
            self.erase_credit -= 1;
            return;
        }
        while let Some((index, grapheme)) = self.screen.grapheme_indices(true).next_back() {
            let width = grapheme.width();
            self.screen.truncate(index);
            if width > 0 {
                self.erase_credit = width - 1;
                return;
            }
        }
    }
}

impl OutputSink for MemorySink {
    fn write_grapheme(&mut self, grapheme: &str) -> io::Result<()> {
        if is_erase(grapheme) {
            self.erased += 1;
            self.erase_column();
        } else {
            self.written += 1;
            self.erase_credit = 0;
            self.screen.push_str(grapheme);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_erase_removes_whole_grapheme() {
        let mut sink = MemorySink::new();
        sink.write_grapheme("a").unwrap();
        sink.write_grapheme("b\u{0301}\u{0335}\u{0316}").unwrap();
        sink.write_grapheme(&ERASE.to_string()).unwrap();
        assert_eq!(sink.screen(), "a");
        assert_eq!(sink.written(), 2);
        assert_eq!(sink.erased(), 1);
    }

    #[test]
    fn test_memory_sink_erase_on_empty() {
        let mut sink = MemorySink::new();
        sink.write_grapheme(&ERASE.to_string()).unwrap();
        assert_eq!(sink.screen(), "");
    }

    #[test]
    fn test_memory_sink_erases_by_column() {
        let mut sink = MemorySink::new();
        for g in ["a", "日", "本"] {
            sink.write_grapheme(g).unwrap();
        }
        let erase = ERASE.to_string();
        sink.write_grapheme(&erase).unwrap();
        assert_eq!(sink.screen(), "a日");
        sink.write_grapheme(&erase).unwrap();
        assert_eq!(sink.screen(), "a日");
        sink.write_grapheme(&erase).unwrap();
        assert_eq!(sink.screen(), "a");
        sink.write_grapheme(&erase).unwrap();
        sink.write_grapheme(&erase).unwrap();
        assert_eq!(sink.screen(), "");
    }

    #[test]
    fn test_terminal_sink_prints_text() {
        let mut sink = TerminalSink::with_width(Vec::new(), 80);
        sink.write_grapheme("h").unwrap();
        sink.write_grapheme("i").unwrap();
        assert_eq!(sink.into_inner(), b"hi".to_vec());
    }

    #[test]
    fn test_terminal_sink_erase_emits_escape() {
        let mut sink = TerminalSink::with_width(Vec::new(), 80);
        sink.write_grapheme("x").unwrap();
        sink.write_grapheme(&ERASE.to_string()).unwrap();
        let bytes = sink.into_inner();
        assert_eq!(bytes, b"x\x1b[1G\x1b[K".to_vec());
    }

    #[test]
    fn test_terminal_sink_erase_crosses_soft_wrap() {
        let mut sink = TerminalSink::with_width(Vec::new(), 4);
        for g in ["a", "b", "c", "d", "e"] {
            sink.write_grapheme(g).unwrap();
        }
        let erase = ERASE.to_string();
        sink.write_grapheme(&erase).unwrap();
        sink.write_grapheme(&erase).unwrap();
        let bytes = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(bytes, "abcde\x1b[1G\x1b[K\x1b[1F\x1b[4G\x1b[K");
    }

    #[test]
    fn test_terminal_sink_start_line_resets_column() {
        let mut sink = TerminalSink::with_width(Vec::new(), 80);
        sink.write_grapheme(">").unwrap();
        sink.start_line();
        sink.write_grapheme("y").unwrap();
        sink.write_grapheme(&ERASE.to_string()).unwrap();
        let bytes = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(bytes, ">y\x1b[1G\x1b[K");
    }
}
