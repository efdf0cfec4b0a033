//! Line-driven session: one file path per line, one ranking per path.
//! A bad file prints its error and the session carries on.

use std::io::{BufRead, Write};

use edurank_common::{EduRankConfig, EduRankError, Result};
use tracing::warn;

use crate::commands::rank_to_string;
use crate::pipeline::Input;

const PROMPT: &str = "table file (or 'quit')> ";

pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    config: &EduRankConfig,
    show_input: bool,
) -> Result<()> {
    let mut buf = Vec::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                let err = EduRankError::Parse(format!("input line is not valid UTF-8: {e}"));
                warn!("{err}");
                writeln!(output, "{}", err.user_message())?;
                continue;
            }
        };

        match line.trim() {
            "" => {}
            "quit" | "exit" => break,
            path => {
                let source = Input::Path(path.into());
                match rank_to_string(&source, config, show_input) {
                    Ok(rendered) => write!(output, "{rendered}")?,
                    Err(e) => {
                        warn!("Could not rank {}: {}", source, e);
                        writeln!(output, "{}", e.user_message())?;
                    }
                }
            }
        }
    }

    writeln!(output)?;
    Ok(())
}
