//! Interactive loop: prompt, read a line, execute, print the outcome

use std::io::{BufRead, Write};

use tracing::debug;

use crate::{
    error::Result,
    sql::engine::{Engine, Session},
};

pub const BANNER: &str = "Enter commands to manage tables (or 'exit' to quit):";
pub const PROMPT: &str = "> ";

/// Runs the loop until `exit` or end of input
///
/// Command failures are printed and the loop continues. Lines that are not
/// valid UTF-8 are decoded lossily. Only failures to read input or write
/// output end it with an error.
pub fn run<E, R, W>(session: &mut Session<E>, mut input: R, mut output: W) -> Result<()>
where
    E: Engine + 'static,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", BANNER)?;
    let mut buf = Vec::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        // Invalid UTF-8 is replaced, not fatal
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim();
        if line.eq_ignore_ascii_case("exit") {
            break;
        }

        match session.execute(line) {
            Ok(result) => {
                let text = result.to_string();
                if !text.is_empty() {
                    writeln!(output, "{}", text)?;
                }
            }
            Err(err) => {
                debug!(command = line, error = %err, "command failed");
                writeln!(output, "{}", err)?;
            }
        }
    }
    Ok(())
}
