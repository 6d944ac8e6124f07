use std::process::Command;

const HOSTSTATS_EXE_PATH: &str = env!("CARGO_BIN_EXE_hoststats");

/// Returns the [`Command`] of a binary invocation of hoststats.
pub fn hoststats_command(args: &[&str]) -> Command {
    let mut cmd = Command::new(HOSTSTATS_EXE_PATH);
    cmd.args(args);

    cmd
}
