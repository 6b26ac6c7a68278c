//! The building process.
//!
//! Shell completions for `dynfib` are generated and placed in
//! `[target_dir]/completions/`.

#![allow(clippy::missing_docs_in_private_items)]

use std::env;
use std::fs;
use std::path::Path;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::generate_to;
use clap_complete::shells::Bash;
use clap_complete::shells::Fish;
use clap_complete::shells::PowerShell;
use clap_complete::shells::Zsh;

include!("src/dynfib/cli/def.rs");

fn main() -> Result<()> {
    println!("cargo::rerun-if-changed=src/dynfib/cli/def.rs");

    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    // OUT_DIR is target/<profile>/build/<crate>-<hash>/out
    let target_dir = match Path::new(&outdir).ancestors().nth(3) {
        None => return Ok(()),
        Some(dir) => dir.to_path_buf(),
    };

    let completions = target_dir.join("completions/");
    let _ = fs::create_dir_all(&completions);

    let mut completions_command = Cli::command();

    generate_to(Bash, &mut completions_command, "dynfib", &completions)?;
    generate_to(Fish, &mut completions_command, "dynfib", &completions)?;
    generate_to(PowerShell, &mut completions_command, "dynfib", &completions)?;
    generate_to(Zsh, &mut completions_command, "dynfib", &completions)?;

    Ok(())
}
