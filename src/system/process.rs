//! Subprocess output capture
//!
//! Runs a command line through the shell and captures its standard output,
//! reading the pipe in fixed-size chunks and accumulating them into a
//! [`StrBuilder`] until the child closes the stream.

use crate::error::{Result, VeckitError};
use crate::string::StrBuilder;
use std::io::Read;
use std::process::{Command, Stdio};

/// Bytes read from the child's stdout pipe per chunk
const CHUNK_SIZE: usize = 4096;

/// Run `command` via `sh -c` and return everything it writes to stdout
///
/// Standard error is left attached to the parent. The child's exit status is
/// awaited and logged but does not fail the call; whatever output was
/// captured is returned either way. Spawn and pipe-read failures surface as
/// [`VeckitError::Io`].
///
/// # Examples
///
/// ```no_run
/// use veckit::capture_stdout;
///
/// let listing = capture_stdout("ls -a")?;
/// # Ok::<(), veckit::VeckitError>(())
/// ```
pub fn capture_stdout(command: &str) -> Result<String> {
    log::debug!("spawning shell command: {}", command);

    let mut child = Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdout(Stdio::piped())
        .spawn()?;

    let mut stdout = child
        .stdout
        .take()
        .ok_or_else(|| VeckitError::invalid_data("child stdout pipe missing"))?;

    let mut out = StrBuilder::new();
    let mut pending: Vec<u8> = Vec::new();
    let mut chunk = [0u8; CHUNK_SIZE];

    loop {
        let n = stdout.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        pending.extend_from_slice(&chunk[..n]);

        // a chunk boundary may split a multibyte character; decode the valid
        // prefix and carry the tail into the next chunk
        let valid = match std::str::from_utf8(&pending) {
            Ok(_) => pending.len(),
            Err(e) if e.error_len().is_none() => e.valid_up_to(),
            Err(_) => {
                return Err(VeckitError::invalid_data(
                    "command output is not valid UTF-8",
                ))
            }
        };
        out.push_str(std::str::from_utf8(&pending[..valid]).unwrap())?;
        pending.drain(..valid);
    }

    if !pending.is_empty() {
        return Err(VeckitError::invalid_data(
            "command output ends mid-character",
        ));
    }

    let status = child.wait()?;
    if !status.success() {
        log::debug!("shell command exited with {}", status);
    }

    Ok(out.into_string())
}
