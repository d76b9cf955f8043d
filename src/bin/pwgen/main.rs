use std::path::PathBuf;
use std::process;

use clap::Parser;

mod config;
mod editor;
mod generate;
mod session;
mod table;

#[derive(Parser)]
#[command(about = "Generate random passwords from selectable character classes.")]
enum Args {
    /// Generate one or more passwords and print them.
    Generate {
        #[command(flatten)]
        config: ConfigArg,
        /// Password length.
        #[arg(short, long)]
        length: Option<usize>,
        /// Character class to draw from; repeat to select several. Replaces the configured
        /// selection.
        #[arg(short = 'c', long = "class", value_enum)]
        classes: Vec<ClassArg>,
        /// How many passwords to generate.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// Print each generated record as a line of JSON.
        #[arg(long)]
        json: bool,
        /// Print the recent passwords table afterwards.
        #[arg(long)]
        history: bool,
    },
    /// Start an interactive session: change the options and passwords are regenerated as you go.
    Session {
        #[command(flatten)]
        config: ConfigArg,
    },
    /// Print the default options in effect, as YAML.
    Defaults {
        #[command(flatten)]
        config: ConfigArg,
    },
}

#[derive(clap::Args)]
struct ConfigArg {
    /// Path to the configuration file.
    #[arg(long = "config", env = "PWGEN_CONFIG")]
    path: Option<PathBuf>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ClassArg {
    #[value(alias = "lower")]
    Lowercase,
    #[value(alias = "upper")]
    Uppercase,
    #[value(alias = "digits")]
    Numbers,
    Symbols,
}

impl From<ClassArg> for pwgen::CharacterClass {
    fn from(arg: ClassArg) -> pwgen::CharacterClass {
        match arg {
            ClassArg::Lowercase => pwgen::CharacterClass::Lowercase,
            ClassArg::Uppercase => pwgen::CharacterClass::Uppercase,
            ClassArg::Numbers => pwgen::CharacterClass::Numbers,
            ClassArg::Symbols => pwgen::CharacterClass::Symbols,
        }
    }
}

fn run() -> Result<(), ProgError> {
    let args = Args::parse();

    match args {
        Args::Generate {
            config,
            length,
            classes,
            count,
            json,
            history,
        } => {
            let config = config::Config::load(config.path)?;
            let options = generate::effective_options(
                config.defaults,
                length,
                classes.into_iter().map(Into::into),
            );
            let output = generate::Output { json, history };
            generate::generate(options, count, output, std::io::stdout().lock())?;
        }
        Args::Session { config } => {
            let config = config::Config::load(config.path)?;
            session::run_session(config.defaults)?;
        }
        Args::Defaults { config } => {
            let config = config::Config::load(config.path)?;
            config::print_defaults(&config)?;
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => (),
        Err(ProgError::Other(err)) => {
            eprintln!("Error: {err:?}");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("Invalid password options: {0}.")]
    InvalidOptions(#[source] pwgen::OptionsError),
    #[error("The configuration file {0:?} does not exist.")]
    ConfigNotFound(PathBuf),
    #[error("Failed to parse the configuration file {0:?}: {1}")]
    ConfigInvalid(PathBuf, #[source] serde_yaml::Error),
    #[error("Editing cancelled; keeping the previous options.")]
    EditingCancelled,
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}

impl From<pwgen::OptionsError> for ProgError {
    fn from(err: pwgen::OptionsError) -> ProgError {
        ProgError::InvalidOptions(err)
    }
}
