//! Typewriter renderer: `type_text` and `erase` over an [`OutputSink`].
//!
//! No text history is kept. Callers that want to erase something later use
//! the column count returned by [`StreamRenderer::type_text`].

use super::sink::{OutputSink, ERASE};
use std::io;
use std::time::Duration;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub struct StreamRenderer<S: OutputSink> {
    sink: S,
    erase_delay: Duration,
}

impl<S: OutputSink> StreamRenderer<S> {
    pub fn new(sink: S, erase_delay: Duration) -> Self {
        Self { sink, erase_delay }
    }

    /// Types `text` one grapheme cluster at a time with `delay` after each.
    ///
    /// Returns the number of terminal columns emitted, the amount a later
    /// [`erase`](Self::erase) needs to remove it.
    pub async fn type_text(&mut self, text: &str, delay: Duration) -> io::Result<usize> {
        for grapheme in text.graphemes(true) {
            self.sink.write_grapheme(grapheme)?;
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }
        self.sink.flush()?;
        Ok(text.width())
    }

    /// Emits `count` erase actions at the fixed erase delay
    pub async fn erase(&mut self, count: usize) -> io::Result<()> {
        if count == 0 {
            return Ok(());
        }
        let erasure: String = std::iter::repeat(ERASE).take(count).collect();
        self.type_text(&erasure, self.erase_delay).await?;
        Ok(())
    }

    /// Waits without emitting anything
    pub async fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }

    /// Tells the sink the cursor is at the start of a fresh line
    pub fn start_line(&mut self) {
        self.sink.start_line();
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
