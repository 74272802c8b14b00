use anyhow::Result;
use bytekit_core::{Md5, Sha1};
use std::path::PathBuf;

use crate::helpers::read_input;

pub fn run_md5(input: Option<PathBuf>) -> Result<()> {
    let data = read_input(input.as_deref())?;
    println!("{}", Md5::new(&data));
    Ok(())
}

pub fn run_sha1(input: Option<PathBuf>) -> Result<()> {
    let data = read_input(input.as_deref())?;
    println!("{}", Sha1::new(&data));
    Ok(())
}
