use clap::{Parser, Subcommand};
use photoveil::cli::{decrypt_files, format_report, show_info, show_name, DecryptCommandOptions};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

/// Version info from build.rs
const VERSION: &str = env!("PHOTOVEIL_VERSION");
const BUILD: &str = env!("PHOTOVEIL_BUILD");
const PROFILE: &str = env!("PHOTOVEIL_PROFILE");
const GIT_HASH: &str = env!("PHOTOVEIL_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "photoveil")]
#[command(author, about = "Recover images from ENC_ containers and steganographic filenames", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Decrypt a batch of container files
    #[command(alias = "d")]
    Decrypt {
        /// Password (the default one is applied when omitted)
        #[arg(short, long, default_value = "")]
        password: String,

        /// Treat unmarked inputs as legacy containers instead of plaintext
        #[arg(long)]
        legacy: bool,

        /// Directory for recovered files
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Milliseconds to wait between successive output writes
        #[arg(long, default_value = "0")]
        pace_ms: u64,

        /// Print the batch result as JSON instead of the text report
        #[arg(long)]
        json: bool,

        /// Container files to decrypt
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Inspect a container file's header
    #[command(alias = "i")]
    Info {
        /// File to inspect
        file: PathBuf,
    },

    /// Decode the hidden metadata in a filename
    #[command(alias = "n")]
    Name {
        /// Password (the default one is applied when omitted)
        #[arg(short, long, default_value = "")]
        password: String,

        /// Filename to decode (the name itself, no file is read)
        filename: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("photoveil {}", get_version());
        return ExitCode::SUCCESS;
    }

    // Require a command if not showing version
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            Cli::command().print_help().unwrap();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Decrypt {
            password,
            legacy,
            out_dir,
            pace_ms,
            json,
            files,
        } => {
            let options = DecryptCommandOptions {
                password,
                legacy_mode: legacy,
                out_dir,
                pace: Duration::from_millis(pace_ms),
            };

            match decrypt_files(&files, &options) {
                Ok(batch) => {
                    if json {
                        match serde_json::to_string_pretty(&batch) {
                            Ok(text) => {
                                println!("{}", text);
                                Ok(())
                            }
                            Err(e) => Err(e.into()),
                        }
                    } else {
                        print!("{}", format_report(&batch));
                        Ok(())
                    }
                }
                Err(e) => Err(e),
            }
        }

        Commands::Info { file } => match show_info(&file) {
            Ok(info) => {
                print!("{}", info);
                Ok(())
            }
            Err(e) => Err(e),
        },

        Commands::Name { password, filename } => match show_name(&filename, &password) {
            Ok(text) => {
                print!("{}", text);
                Ok(())
            }
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
