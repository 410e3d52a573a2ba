//! Transcript files
//!
//! Plain text, one three-symbol command per line. Blank lines and
//! surrounding whitespace are ignored when reading.

use std::io::{BufRead, Write};

use crate::command::StepCommand;
use crate::error::TranscriptError;

/// Render commands as a transcript string
pub fn render_transcript<I>(commands: I) -> String
where
    I: IntoIterator<Item = StepCommand>,
{
    let mut out = String::new();
    for cmd in commands {
        out.push_str(&cmd.to_string());
        out.push('\n');
    }
    out
}

/// Stream commands to a writer, returning how many were written
pub fn write_transcript<W, I>(writer: &mut W, commands: I) -> Result<usize, TranscriptError>
where
    W: Write,
    I: IntoIterator<Item = StepCommand>,
{
    let mut count = 0;
    for cmd in commands {
        writeln!(writer, "{cmd}")?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

/// Parse a transcript held in memory
pub fn parse_transcript(text: &str) -> Result<Vec<StepCommand>, TranscriptError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| StepCommand::parse_line(line.trim(), idx + 1))
        .collect()
}

/// Read a transcript from any buffered reader
pub fn read_transcript<R: BufRead>(reader: R) -> Result<Vec<StepCommand>, TranscriptError> {
    let mut commands = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        commands.push(StepCommand::parse_line(line, idx + 1)?);
    }
    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Direction::*;

    #[test]
    fn test_render_one_token_per_line() {
        let text = render_transcript([
            StepCommand::new(Lengthen, Shorten),
            StepCommand::new(Hold, Lengthen),
        ]);
        assert_eq!(text, "+-+\n.++\n");
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let commands = parse_transcript("++.\n\n  -.+  \n").unwrap();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[1], StepCommand::new(Shorten, Hold));
    }

    #[test]
    fn test_parse_reports_line_number() {
        let err = parse_transcript("+++\n...\n+?+\n").unwrap_err();
        match err {
            TranscriptError::InvalidSymbol {
                line_number,
                symbol,
            } => {
                assert_eq!(line_number, 3);
                assert_eq!(symbol, '?');
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_write_then_read() {
        let commands = vec![
            StepCommand::new(Lengthen, Lengthen),
            StepCommand::with_pen(Hold, Hold, Shorten),
        ];
        let mut buf = Vec::new();
        let written = write_transcript(&mut buf, commands.iter().copied()).unwrap();
        assert_eq!(written, 2);
        assert_eq!(read_transcript(buf.as_slice()).unwrap(), commands);
    }
}
