// rfcval/src/commands/sample.rs
//! Sample command implementation: emit structurally valid identifiers.

use std::io::{self, Write};

use anyhow::Result;
use log::info;

use rfcval_core::{sample, PersonType};

use crate::cli::SampleCommand;

/// Runs the `sample` command.
pub fn run(cmd: &SampleCommand) -> Result<i32> {
    let tipo: PersonType = cmd.tipo.into();
    info!("Emitting {} sample value(s) for {:?}.", cmd.count, tipo);

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    for _ in 0..cmd.count {
        writeln!(writer, "{}", sample(tipo))?;
    }
    Ok(0)
}
