use clap::CommandFactory;
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Shares the argument definitions with the binary
include!("src/cli.rs");

const BIN_NAME: &str = "scrubpng";

fn main() -> Result<(), Error> {
    println!("cargo:rerun-if-changed=src/cli.rs");

    let Some(outdir) = env::var_os("OUT_DIR") else {
        return Ok(());
    };

    let mut cmd = Cli::command();

    #[cfg(unix)]
    {
        generate_to(Bash, &mut cmd, BIN_NAME, &outdir)?;
        generate_to(Fish, &mut cmd, BIN_NAME, &outdir)?;
        generate_to(Zsh, &mut cmd, BIN_NAME, &outdir)?;
    }

    generate_to(PowerShell, &mut cmd, BIN_NAME, &outdir)?;

    Ok(())
}
