//! Audio cue played when the clock switches phase

use std::{
    io::Write,
    process::Stdio,
    sync::{Arc, Mutex},
};
use clap::ValueEnum;
use tokio::process::{Child, Command};
use tracing::{debug, info};

/// Identifier of the cue the clock plays on a phase flip
pub const BEEP_ID: &str = "beep";

/// A playable sound owned by the host and lent to the clock
pub trait AudioCue: Send + Sync {
    /// Identifier of the resource
    fn id(&self) -> &str;

    /// Start playing from the current position
    fn play(&self) -> Result<(), String>;

    /// Stop playback, keeping the current position
    fn pause(&self) -> Result<(), String>;

    /// Move the playback position, in seconds
    fn set_current_time(&self, seconds: f64) -> Result<(), String>;
}

/// Kind of cue selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CueKind {
    /// Ring the terminal bell
    Bell,
    /// Run an external player command
    Command,
    /// Only log the cue
    Silent,
}

/// Rings the ASCII bell on stdout
#[derive(Debug, Default)]
pub struct TerminalBell;

impl AudioCue for TerminalBell {
    fn id(&self) -> &str {
        BEEP_ID
    }

    fn play(&self) -> Result<(), String> {
        let mut stdout = std::io::stdout();
        stdout
            .write_all(b"\x07")
            .and_then(|_| stdout.flush())
            .map_err(|e| format!("Failed to ring terminal bell: {}", e))
    }

    fn pause(&self) -> Result<(), String> {
        Ok(())
    }

    fn set_current_time(&self, _seconds: f64) -> Result<(), String> {
        Ok(())
    }
}

/// Logs instead of making a sound
#[derive(Debug, Default)]
pub struct SilentCue;

impl AudioCue for SilentCue {
    fn id(&self) -> &str {
        BEEP_ID
    }

    fn play(&self) -> Result<(), String> {
        info!("Cue {} played", BEEP_ID);
        Ok(())
    }

    fn pause(&self) -> Result<(), String> {
        debug!("Cue {} paused", BEEP_ID);
        Ok(())
    }

    fn set_current_time(&self, seconds: f64) -> Result<(), String> {
        debug!("Cue {} position set to {}s", BEEP_ID, seconds);
        Ok(())
    }
}

/// Plays a sound through an external program, e.g. `paplay beep.wav`.
///
/// Each play spawns the program afresh, so the position is always the start
/// of the sound. Pausing kills the running child.
#[derive(Debug)]
pub struct CommandCue {
    program: String,
    args: Vec<String>,
    child: Mutex<Option<Child>>,
}

impl CommandCue {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            child: Mutex::new(None),
        }
    }

    /// Build from a whitespace separated command line
    pub fn from_command_line(command_line: &str) -> Result<Self, String> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| "Cue command is empty".to_string())?;
        Ok(Self::new(program, parts.collect()))
    }

    fn stop_child(&self) -> Result<(), String> {
        let mut child = self.child.lock()
            .map_err(|e| format!("Failed to lock cue process: {}", e))?;

        if let Some(mut running) = child.take() {
            // already exited is fine
            if let Err(e) = running.start_kill() {
                debug!("Cue process was not running: {}", e);
            }
        }
        Ok(())
    }
}

impl AudioCue for CommandCue {
    fn id(&self) -> &str {
        BEEP_ID
    }

    fn play(&self) -> Result<(), String> {
        self.stop_child()?;

        debug!("Spawning cue command: {} {:?}", self.program, self.args);
        let spawned = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| format!("Failed to execute {}: {}", self.program, e))?;

        let mut child = self.child.lock()
            .map_err(|e| format!("Failed to lock cue process: {}", e))?;
        *child = Some(spawned);
        Ok(())
    }

    fn pause(&self) -> Result<(), String> {
        self.stop_child()
    }

    fn set_current_time(&self, _seconds: f64) -> Result<(), String> {
        // the next play respawns from the top
        Ok(())
    }
}

/// Build the cue selected on the command line
pub fn build_cue(kind: CueKind, command_line: Option<&str>) -> Result<Arc<dyn AudioCue>, String> {
    match kind {
        CueKind::Bell => Ok(Arc::new(TerminalBell)),
        CueKind::Silent => Ok(Arc::new(SilentCue)),
        CueKind::Command => {
            let command_line = command_line
                .ok_or_else(|| "--cue command requires --cue-command".to_string())?;
            Ok(Arc::new(CommandCue::from_command_line(command_line)?))
        }
    }
}
