use std::io::{self, Write};
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Write all of `output`, treating a reader that went away as a normal end
pub fn write_output(writer: &mut impl Write, output: &str) -> io::Result<()> {
    let written = writer
        .write_all(output.as_bytes())
        .and_then(|()| writer.flush());
    match written {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("output closed early");
            Ok(())
        }
        other => other,
    }
}

/// Print output on stdout
pub fn print_output(output: &str) -> io::Result<()> {
    write_output(&mut io::stdout().lock(), output)
}

/// Print output through a pager command (e.g. `less -RF`)
///
/// Falls back to printing directly when the command is blank or cannot be spawned.
pub fn print_with_pager(output: &str, pager_command: &str) -> anyhow::Result<()> {
    let parts: Vec<&str> = pager_command.split_whitespace().collect();
    let Some((program, args)) = parts.split_first() else {
        print_output(output)?;
        return Ok(());
    };

    let mut child = match Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            warn!(pager = %program, error = %e, "pager not available");
            eprintln!(
                "Warning: Pager '{}' not found: {}. Printing directly.",
                program, e
            );
            print_output(output)?;
            return Ok(());
        }
    };

    // quitting the pager before the end closes its stdin
    if let Some(mut stdin) = child.stdin.take() {
        write_output(&mut stdin, output)?;
    }

    child.wait()?;
    Ok(())
}
