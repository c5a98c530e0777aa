//! Pins Python dependencies with pip-compile, keeping the Windows lock file
//! separate from the Linux one.
//!
//! When built for Windows the wrapper inserts
//! `--output-file requirements.win.txt` ahead of the forwarded arguments;
//! everywhere else it is a transparent pass-through. Exits with the child's
//! exit status.

use std::env;
use std::process::Command;

fn main() {
    let mut command = Command::new("pip-compile");
    if cfg!(windows) {
        command.args(["--output-file", "requirements.win.txt"]);
    }
    command.args(env::args_os().skip(1));

    match command.status() {
        Ok(status) => std::process::exit(status.code().unwrap_or(1)),
        Err(err) => {
            eprintln!("Error: failed to run pip-compile: {}", err);
            std::process::exit(1);
        }
    }
}
