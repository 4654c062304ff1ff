use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::LaunchError;

/// A process that was started and left running. Its exit status is never observed.
#[derive(Debug)]
pub struct Launched {
    pub program: String,
    pub pid: u32,
}

/// Spawn `command` and return as soon as the OS accepts it.
///
/// Only the spawn itself can fail. The child is detached from our stdin/stdout and is
/// not waited on.
pub fn launch(mut command: Command) -> Result<Launched, LaunchError> {
    let program = command.get_program().to_string_lossy().into_owned();
    debug!(program = %program, args = ?command.get_args().collect::<Vec<_>>(), "spawning");

    let child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .spawn()
        .map_err(|source| LaunchError::Spawn {
            program: program.clone(),
            source,
        })?;

    let launched = Launched {
        program,
        pid: child.id(),
    };
    info!(program = %launched.program, pid = launched.pid, "launched");

    Ok(launched)
}
