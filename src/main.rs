use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

use password_generator::clipboard::{Clipboard, SystemClipboard};
use password_generator::logging;
use password_generator::options::{
    DEFAULT_LENGTH, DEFAULT_MINIMUM_DIGITS, DEFAULT_MINIMUM_SPECIAL_CHARACTERS,
};
use password_generator::prompts::hash_password::NOT_IMPLEMENTED_MESSAGE;
use password_generator::prompts::Services;
use password_generator::terminal::ConsoleTerminal;
use password_generator::{generate, AppError, PasswordOptions, PromptRunner};

#[derive(Parser)]
#[command(name = "pwgen")]
#[command(author = "Password Generator Contributors")]
#[command(version)]
#[command(about = "Password Generator - Generate and/or hash passwords", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, help = "Enable verbose logging", global = true)]
    verbose: bool,

    #[arg(
        long,
        value_name = "PATH",
        help = "Write log records to this file",
        global = true
    )]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Open the interactive menu (default)")]
    Menu,

    #[command(about = "Generate a password without prompts")]
    Generate(GenerateArgs),

    #[command(about = "Hash a password")]
    Hash,
}

#[derive(Args)]
struct GenerateArgs {
    #[arg(short, long, default_value_t = DEFAULT_LENGTH, help = "Length of the password (5-128)")]
    length: usize,

    #[arg(long, help = "Leave out uppercase letters")]
    no_uppercase: bool,

    #[arg(long, help = "Leave out lowercase letters")]
    no_lowercase: bool,

    #[arg(long, default_value_t = DEFAULT_MINIMUM_DIGITS, help = "Minimum number of digits")]
    min_digits: usize,

    #[arg(
        long,
        default_value_t = DEFAULT_MINIMUM_SPECIAL_CHARACTERS,
        help = "Minimum number of special characters"
    )]
    min_special: usize,

    #[arg(long, help = "Avoid ambiguous characters (l, I, O, 0, 1)")]
    avoid_ambiguous: bool,

    #[arg(short, long, help = "Copy the password to the clipboard")]
    copy: bool,

    #[arg(long, help = "Print the password and options as JSON")]
    json: bool,
}

impl GenerateArgs {
    fn options(&self) -> PasswordOptions {
        PasswordOptions {
            length: self.length,
            include_uppercase: !self.no_uppercase,
            include_lowercase: !self.no_lowercase,
            minimum_digits: self.min_digits,
            minimum_special_characters: self.min_special,
            avoid_ambiguous_characters: self.avoid_ambiguous,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match logging::init_logging(cli.verbose, cli.log_file.as_deref()) {
        Ok(path) if cli.verbose => {
            eprintln!("{} Logging to {}", "ℹ".blue(), path.display());
        }
        Ok(_) => {}
        Err(e) => eprintln!("{} {:#}", "⚠".yellow(), e),
    }

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => run_menu(),
        Commands::Generate(args) => run_generate(&args),
        Commands::Hash => {
            println!("{}", NOT_IMPLEMENTED_MESSAGE.yellow());
            Ok(())
        }
    }
}

fn run_menu() -> Result<()> {
    let mut runner = PromptRunner::new(ConsoleTerminal::new(), Services::system());
    runner.run()?;
    Ok(())
}

fn run_generate(args: &GenerateArgs) -> Result<()> {
    let options = args.options();

    let password = match generate(&options) {
        Ok(password) => password,
        Err(e) => {
            logging::log_generation_failure("cli", &e);
            return Err(AppError::from(e).into());
        }
    };
    logging::log_password_generated("cli", &options);

    if args.json {
        let output = serde_json::json!({
            "password": password,
            "options": options,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{password}");
    }

    if args.copy {
        match SystemClipboard::default().set_text(&password) {
            Ok(()) => {
                logging::log_clipboard_result(true, None);
                eprintln!("{} Password copied to clipboard", "✓".green());
            }
            Err(e) => {
                logging::log_clipboard_result(false, Some(&e));
                eprint!("{e}");
            }
        }
    }

    Ok(())
}
