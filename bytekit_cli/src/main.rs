use clap::{Parser, Subcommand};
use clap_verbosity_flag::InfoLevel;
use std::path::PathBuf;

mod cmd;
mod helpers;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    verbosity: clap_verbosity_flag::Verbosity<InfoLevel>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the MD5 digest of a file (or stdin) as lowercase hex
    Md5 {
        /// Input file; reads stdin when omitted
        input: Option<PathBuf>,
    },
    /// Compute the SHA-1 digest of a file (or stdin) as lowercase hex
    Sha1 {
        /// Input file; reads stdin when omitted
        input: Option<PathBuf>,
    },
    /// Base64 transforms (RFC 4648, standard alphabet, padded)
    Base64 {
        #[command(subcommand)]
        cmd: Base64Cmd,
    },
    /// UTF-8 validation
    Utf8 {
        #[command(subcommand)]
        cmd: Utf8Cmd,
    },
    /// Canonical JSON tools
    Json {
        #[command(subcommand)]
        cmd: JsonCmd,
    },
}

#[derive(Subcommand)]
enum Base64Cmd {
    /// Encode raw bytes as Base64 text on stdout
    Encode {
        /// Input file; reads stdin when omitted
        input: Option<PathBuf>,
    },
    /// Decode Base64 text back into raw bytes on stdout
    Decode {
        /// Input file; reads stdin when omitted
        input: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum Utf8Cmd {
    /// Check that the input is well-formed UTF-8, reporting the byte
    /// offset of the first malformed sequence otherwise
    Check {
        /// Input file; reads stdin when omitted
        input: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum JsonCmd {
    /// Parse JSON text and print its canonical serialization
    Canon {
        /// Input file; reads stdin when omitted
        input: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity)
        .init();

    cmd::run_command(cli.cmd)
}
