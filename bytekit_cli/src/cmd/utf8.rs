use anyhow::{Context, Result};
use bytekit_core::codec::utf8;

use crate::helpers::read_input;

pub fn run_utf8(cmd: crate::Utf8Cmd) -> Result<()> {
    match cmd {
        crate::Utf8Cmd::Check { input } => {
            let data = read_input(input.as_deref())?;
            let text = utf8::decode(&data).context("input is not well-formed utf-8")?;
            tracing::info!(
                "{} bytes, {} characters",
                data.len(),
                text.chars().count()
            );
            println!("ok");
        }
    }
    Ok(())
}
