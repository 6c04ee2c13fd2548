//! Line-oriented coordinate input.

use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tracing::debug;

/// Reads a coordinate in [0, 3) from `reader`, re-prompting on `writer`
/// until one is supplied.
///
/// Lines containing '-' (negative numbers) and values of 3 or more are
/// rejected silently, matching the game's retry-forever contract with
/// the input collaborator.
///
/// # Errors
///
/// Fails only on I/O errors or end of input.
pub fn read_coordinate(label: &str, reader: &mut impl BufRead, writer: &mut impl Write) -> Result<u8> {
    loop {
        write!(writer, "{label}> ").context("writing prompt")?;
        writer.flush().context("flushing prompt")?;

        let mut line = String::new();
        let n = reader.read_line(&mut line).context("reading coordinate")?;
        if n == 0 {
            bail!("input closed before a {label} coordinate was supplied");
        }
        if line.contains('-') {
            debug!(label, "rejected negative coordinate");
            continue;
        }
        match line.trim().parse::<u8>() {
            Ok(value) if value < 3 => return Ok(value),
            _ => {
                debug!(label, input = line.trim(), "rejected coordinate");
                continue;
            }
        }
    }
}
