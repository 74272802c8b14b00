use anyhow::{Context, Result};
use bytekit_core::codec::base64;
use std::io::Write;

use crate::helpers::{read_input, read_text_input};

pub fn run_base64(cmd: crate::Base64Cmd) -> Result<()> {
    match cmd {
        crate::Base64Cmd::Encode { input } => {
            let data = read_input(input.as_deref())?;
            println!("{}", base64::encode(&data));
        }
        crate::Base64Cmd::Decode { input } => {
            let text = read_text_input(input.as_deref())?;
            let bytes = base64::decode(&text).context("failed to decode base64 input")?;
            // Decoded output is raw bytes, not text; bypass println.
            std::io::stdout()
                .write_all(&bytes)
                .context("failed to write stdout")?;
        }
    }
    Ok(())
}
