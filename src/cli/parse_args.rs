use std::{fmt::Display, str::FromStr};

use hat_draw::{
    config::{Config, ConfigOption},
    structures::{pool::Pool, target::Target},
    types::err::ErrorKind,
};

/// The pool of the illustrative experiment.
const DEFAULT_POOL: &str = "red=5 green=2 blue=4";

/// The target of the illustrative experiment.
const DEFAULT_TARGET: &str = "red=2 green=1";

/// A collection of configuration options relevant only to the CLI.
pub struct CliConfig {
    /// The pool to draw from.
    pub pool: Pool,

    /// The target samples are measured against.
    pub target: Target,

    /// Whether a seed was given, rather than drawn.
    pub seeded: bool,
}

pub enum CliError {
    /// An argument which is not an option of the CLI.
    Unrecognised(String),

    /// A missing or invalid value, with a note on what is valid.
    Value(String),

    /// A pool or target which could not be built.
    Library(ErrorKind),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            CliError::Unrecognised(arg) => write!(f, "Unrecognised argument: {arg}"),
            CliError::Value(note) => write!(f, "{note}"),
            CliError::Library(e) => write!(f, "{e}"),
        }
    }
}

impl From<ErrorKind> for CliError {
    fn from(e: ErrorKind) -> Self {
        CliError::Library(e)
    }
}

/// Sets the value of an option from a request, if the request parses to a value within the bounds of the option.
fn set_option<T>(option: &mut ConfigOption<T>, request: Option<&str>) -> Result<(), CliError>
where
    T: FromStr + Clone + PartialOrd + Display,
{
    let (min, max) = option.min_max();

    if let Some(value) = request.and_then(|request| request.parse::<T>().ok()) {
        if option.set(value).is_ok() {
            println!("c {} set to: {}", option.name, option.value);
            return Ok(());
        }
    }

    Err(CliError::Value(format!(
        "{} requires a value between {min} and {max}",
        option.name
    )))
}

/// Parse CLI arguments to a [Config] struct and a [CliConfig] struct.
///
/// Arguments take the form `--option=value`.
/// Any option not given takes the value of the illustrative experiment.
pub(super) fn parse_args(args: &[String]) -> Result<(Config, CliConfig), CliError> {
    let mut cfg = Config::default();
    let mut cli_options = CliConfig {
        pool: DEFAULT_POOL.parse()?,
        target: DEFAULT_TARGET.parse()?,
        seeded: false,
    };

    for arg in args.iter().skip(1) {
        let (option, request) = match arg.split_once('=') {
            Some((option, request)) => (option, Some(request)),
            None => (arg.as_str(), None),
        };

        match option {
            "--pool" => match request {
                Some(request) => cli_options.pool = request.parse()?,
                None => return Err(CliError::Value("pool requires label=count pairs".to_string())),
            },

            "--target" => match request {
                Some(request) => cli_options.target = request.parse()?,
                None => {
                    return Err(CliError::Value(
                        "target requires label=count pairs".to_string(),
                    ))
                }
            },

            "--draw_size" => set_option(&mut cfg.draw_size, request)?,

            "--trials" => set_option(&mut cfg.trials, request)?,

            "--seed" => {
                set_option(&mut cfg.seed, request)?;
                cli_options.seeded = true;
            }

            _ => return Err(CliError::Unrecognised(arg.clone())),
        }
    }

    Ok((cfg, cli_options))
}
