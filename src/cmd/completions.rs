//! Completions command implementation
//!
//! Handles the `broker-roi completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Generate a shell completion script for `cmd` into `out`
///
/// Users can redirect the output to their shell's completion directory.
///
/// ```bash
/// # Bash
/// broker-roi completions bash > /etc/bash_completion.d/broker-roi
///
/// # Zsh
/// broker-roi completions zsh > ~/.zfunc/_broker-roi
///
/// # Fish
/// broker-roi completions fish > ~/.config/fish/completions/broker-roi.fish
/// ```
pub fn write_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    let bin_name = cmd.get_name().to_string();
    generate(shell, cmd, bin_name, out);
}

/// Generate shell completion scripts on stdout
pub fn cmd_completions(shell: Shell, cmd: &mut Command) {
    write_completions(shell, cmd, &mut std::io::stdout());
}
