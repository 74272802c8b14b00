use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Read the whole input, from a file when one was given, stdin otherwise.
pub fn read_input(input: Option<&Path>) -> Result<Vec<u8>> {
    let data = match input {
        Some(path) => std::fs::read(path)
            .with_context(|| format!("failed to read \"{}\"", path.display()))?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    tracing::debug!("read {} input bytes", data.len());
    Ok(data)
}

/// Read the input as text. The input must itself be valid UTF-8; a
/// trailing newline from shell pipelines is stripped.
pub fn read_text_input(input: Option<&Path>) -> Result<String> {
    let data = read_input(input)?;
    let text = bytekit_core::codec::utf8::decode(&data).context("input is not valid utf-8")?;
    Ok(text.trim_end_matches(['\r', '\n']).to_owned())
}
