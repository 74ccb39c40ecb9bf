//! Line-driven session loop: read a line, turn it into an event, let the
//! app handle it, repeat until quit or end of input.

use super::app::App;
use super::event::AppEvent;
use super::mode::AppMode;
use crate::engine::{AntonymResolver, Classifier};
use crate::rendering::{OutputSink, StreamRenderer};
use crate::repl::{command_to_app_event, parse_repl_input};
use std::io;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

pub const PROMPT: &str = "> ";

pub async fn run_session<R, C, A, S>(
    app: &mut App<C, A>,
    mut input: R,
    renderer: &mut StreamRenderer<S>,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    C: Classifier,
    A: AntonymResolver,
    S: OutputSink,
{
    let mut line = Vec::new();
    let mut rendered = 0usize;

    while app.mode != AppMode::Quit {
        renderer.type_text(PROMPT, Duration::ZERO).await?;

        line.clear();
        let read = input.read_until(b'\n', &mut line).await?;
        // the terminal echoed the line and its newline
        renderer.start_line();

        let event = if read == 0 {
            debug!("input closed");
            renderer.type_text("\n", Duration::ZERO).await?;
            AppEvent::Quit
        } else {
            match std::str::from_utf8(&line) {
                Ok(text) => command_to_app_event(parse_repl_input(text)),
                Err(e) => {
                    warn!(error = %e, "skipping input line");
                    renderer
                        .type_text("! input line is not valid UTF-8\n", Duration::ZERO)
                        .await?;
                    AppEvent::Ignore
                }
            }
        };

        rendered += app.handle_event(event, renderer).await?.len();
    }

    info!(sentences = rendered, "session finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::{Config, MutationConfig, TypingConfig};
    use crate::engine::{LexiconClassifier, NoAntonyms, Pipeline};
    use crate::input::EchoSource;
    use crate::rendering::MemorySink;

    fn app() -> App<LexiconClassifier, NoAntonyms> {
        let config = Config {
            typing: TypingConfig::instant(),
            mutation: MutationConfig {
                negation_step: 0.0,
                glitch_probability: 0.0,
                noun_swap_probability: 0.0,
            },
            seed: Some(3),
            ..Config::default()
        };
        App::new(
            Box::new(EchoSource),
            Pipeline::new(LexiconClassifier, NoAntonyms, &config),
        )
    }

    #[tokio::test]
    async fn test_session_stops_at_quit() {
        let mut app = app();
        let mut r = StreamRenderer::new(MemorySink::new(), Duration::ZERO);
        let input: &[u8] = b"The sky is blue.\n:q\nNever rendered\n";

        run_session(&mut app, input, &mut r).await.unwrap();

        assert_eq!(r.sink().screen(), "> The sky is blue. \n\n> ");
        assert_eq!(app.mode, AppMode::Quit);
    }

    #[tokio::test]
    async fn test_session_skips_invalid_utf8_line() {
        let mut app = app();
        let mut r = StreamRenderer::new(MemorySink::new(), Duration::ZERO);
        let input: &[u8] = b"caf\xe9 is open\nThe sky is blue.\n";

        run_session(&mut app, input, &mut r).await.unwrap();

        assert_eq!(
            r.sink().screen(),
            "> ! input line is not valid UTF-8\n> The sky is blue. \n\n> \n"
        );
        assert_eq!(app.mode, AppMode::Quit);
    }

    #[tokio::test]
    async fn test_session_ends_at_eof() {
        let mut app = app();
        let mut r = StreamRenderer::new(MemorySink::new(), Duration::ZERO);
        let input: &[u8] = b"\n   \nDreams fade";

        run_session(&mut app, input, &mut r).await.unwrap();

        assert_eq!(r.sink().screen(), "> > > Dreams fade \n\n> \n");
        assert_eq!(app.mode, AppMode::Quit);
    }
}
