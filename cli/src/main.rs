//! Command line front end: encrypts text or decrypts hex ciphertext with DES
//! or AES-128 in ECB mode.

mod commands;
mod error;

use clap::{Parser, Subcommand};
use commands::Options;
use error::CliResult;

#[derive(Parser)]
#[command(name = "blockcipher")]
#[command(about = "Educational DES and AES-128 block cipher")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt UTF-8 text and print the ciphertext as hex
    Encode {
        #[command(flatten)]
        options: Options,

        text: String,
    },

    /// Decrypt hex ciphertext and print the plaintext
    Decode {
        #[command(flatten)]
        options: Options,

        ciphertext: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(command: Commands) -> CliResult<String> {
    match command {
        Commands::Encode { options, text } => commands::encode(&options, &text),
        Commands::Decode {
            options,
            ciphertext,
        } => commands::decode(&options, &ciphertext),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
