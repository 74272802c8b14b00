use anyhow::Result;

mod base64;
mod digest;
mod json;
mod utf8;

pub use base64::run_base64;
pub use digest::{run_md5, run_sha1};
pub use json::run_json;
pub use utf8::run_utf8;

pub fn run_command(cmd: crate::Commands) -> Result<()> {
    match cmd {
        crate::Commands::Md5 { input } => run_md5(input),
        crate::Commands::Sha1 { input } => run_sha1(input),
        crate::Commands::Base64 { cmd } => run_base64(cmd),
        crate::Commands::Utf8 { cmd } => run_utf8(cmd),
        crate::Commands::Json { cmd } => run_json(cmd),
    }
}
