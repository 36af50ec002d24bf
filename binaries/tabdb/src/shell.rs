use {
    crate::{ReadInputSnafu, Result, WriteOutputSnafu},
    executor::Session,
    snafu::prelude::*,
    std::io::{BufRead, Write},
    tracing::debug,
};

const EXIT_COMMANDS: [&str; 2] = [".exit", ".quit"];

/// Reads commands line by line. A command may span several lines and ends
/// with the line whose last non-blank character is `;`.
pub(crate) fn run(
    mut session: Session,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<()> {
    let mut command = String::new();

    for line in input.lines() {
        let line = line.context(ReadInputSnafu)?;

        if command.is_empty() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if EXIT_COMMANDS.contains(&trimmed) {
                debug!("leaving shell");
                return Ok(());
            }
        } else {
            command.push('\n');
        }
        command.push_str(&line);

        if command.trim_end().ends_with(';') {
            respond(&mut session, &command, &mut output)?;
            command.clear();
        }
    }

    // an unterminated command is still answered, with a syntax error
    if !command.trim().is_empty() {
        respond(&mut session, &command, &mut output)?;
    }

    Ok(())
}

fn respond(session: &mut Session, command: &str, output: &mut impl Write) -> Result<()> {
    writeln!(output, "{}", session.execute(command)).context(WriteOutputSnafu)?;
    output.flush().context(WriteOutputSnafu)
}
