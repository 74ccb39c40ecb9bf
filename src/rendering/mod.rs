pub mod sink;
pub mod stream;

pub use sink::{MemorySink, OutputSink, TerminalSink, ERASE};
pub use stream::StreamRenderer;
