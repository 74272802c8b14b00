use anyhow::{Context, Result};
use bytekit_core::json;

use crate::helpers::read_text_input;

pub fn run_json(cmd: crate::JsonCmd) -> Result<()> {
    match cmd {
        crate::JsonCmd::Canon { input } => {
            let text = read_text_input(input.as_deref())?;
            let value = json::deserialize(&text).context("failed to parse json input")?;
            println!("{}", json::serialize(&value)?);
        }
    }
    Ok(())
}
