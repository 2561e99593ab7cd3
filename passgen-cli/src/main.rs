#![deny(missing_docs)]
//! A command-line interface for generating XKCD-style passphrases.

use clap::{Arg, ArgAction, Parser};
use log::{error, info, warn};
use passgen_core::{GenerationRequest, SecureRandom, generate_password};
use std::path::PathBuf;
use wordlists::Catalogs;

mod output;
mod wordlists;

#[derive(Parser)]
#[command(
    name = "passgen",
    author,
    version,
    about,
    long_about = None,
    disable_version_flag = true
)]
#[command(arg(
    Arg::new("version")
        .short('v')
        .long("version")
        .action(ArgAction::Version)
        .help("Show version information")
))]
#[command(after_help = concat!(
    "EXAMPLES:\n  \n",
    "# Four random words joined by dashes\n",
    "passgen\n\n",
    "# Three capitalized words, exactly 20 characters, plus a digit and a symbol\n",
    "passgen -w 3 -l 20 -c -n -y\n\n",
    "# Use your own word list and copy the result to the clipboard\n",
    "passgen --words-file ./my_words.txt -b",
))]
struct Cli {
    /// Number of words in the password
    #[arg(short = 'w', long = "words", default_value_t = 4)]
    words: usize,

    /// Separator between words
    #[arg(short, long, default_value = "-", allow_hyphen_values = true)]
    separator: String,

    /// Total length of the words and separators, excluding any digit or symbol (0 for any length)
    #[arg(short, long, default_value_t = 0)]
    length: usize,

    /// Capitalize the first letter of each word
    #[arg(short, long)]
    capitalize: bool,

    /// Add a random number at the end
    #[arg(short, long)]
    number: bool,

    /// Add a non-word symbol at the end
    #[arg(short = 'y', long)]
    symbol: bool,

    /// Copy the password to the clipboard
    #[arg(short = 'b', long)]
    clipboard: bool,

    /// Number of passwords to generate
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// Print each password as a JSON object
    #[arg(long)]
    json: bool,

    /// Newline-separated file replacing the built-in word list
    #[arg(long, value_name = "PATH")]
    words_file: Option<PathBuf>,

    /// Newline-separated file replacing the built-in list of one and two letter words
    #[arg(long, value_name = "PATH")]
    short_words_file: Option<PathBuf>,
}

impl Cli {
    fn request(&self) -> GenerationRequest {
        GenerationRequest {
            word_count: self.words,
            separator: self.separator.clone(),
            target_length: self.length,
            capitalize: self.capitalize,
            append_digit: self.number,
            append_symbol: self.symbol,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let catalogs = Catalogs::load(cli.words_file.as_deref(), cli.short_words_file.as_deref())
        .unwrap_or_else(|e| {
            error!("Error loading words: {e}");
            std::process::exit(1);
        });

    let request = cli.request();
    let mut rng = SecureRandom;
    let mut passwords = Vec::new();
    for _ in 0..cli.count {
        match generate_password(&request, &catalogs.general, &catalogs.short, &mut rng) {
            Ok(password) => passwords.push(password),
            Err(e) => {
                error!("Error generating password: {e}");
                std::process::exit(1);
            }
        }
    }
    info!("Generated {} password(s).", passwords.len());

    for password in &passwords {
        match output::render(password, &request, cli.json) {
            Ok(line) => println!("{line}"),
            Err(e) => {
                error!("Failed to format password: {e}");
                std::process::exit(1);
            }
        }
    }

    if cli.clipboard {
        match output::copy_to_clipboard(&passwords.join("\n")) {
            Ok(()) => eprintln!("Password copied to clipboard!"),
            Err(e) => warn!("Error copying to clipboard: {e}"),
        }
    }
}
