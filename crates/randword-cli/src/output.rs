use std::io::Write;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct WordsPayload<'a> {
    words: &'a [String],
    count: usize,
}

pub fn render<W: Write>(
    out: &mut W,
    words: &[String],
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Lines => {
            for word in words {
                writeln!(out, "{word}")?;
            }
        }
        OutputFormat::Json => {
            let payload = WordsPayload {
                words,
                count: words.len(),
            };
            let rendered = if pretty {
                serde_json::to_string_pretty(&payload)?
            } else {
                serde_json::to_string(&payload)?
            };
            writeln!(out, "{rendered}")?;
        }
    }

    Ok(())
}
