use std::path::PathBuf;

use clap::ValueHint;
use objweld::{FacePolicy, ParseOptions};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum LogFormat {
    Compact,
    Full,
    Pretty,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Compact => f.write_str("compact"),
            LogFormat::Full => f.write_str("full"),
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

/// Merge duplicate vertices of a triangulated OBJ mesh.
#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Logging output filters; comma-separated
    #[arg(
        short,
        long,
        default_value = "warn,objweld=info",
        env = "OBJWELD_LOG_FILTER"
    )]
    pub log_filter: String,
    /// Logging output format
    #[arg(long, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
    /// Keep the first three indices of faces with more than three, instead of failing
    #[arg(long)]
    pub truncate_faces: bool,
    /// Output mesh file; stdout if omitted
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
    /// Input mesh file; stdin if omitted or `-`
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,
}

impl Cli {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            faces: if self.truncate_faces {
                FacePolicy::Truncate
            } else {
                FacePolicy::Strict
            },
        }
    }

    /// The input path, or `None` to read stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }
}

/// Set up log output on stderr, leaving stdout for the mesh
pub(crate) fn initialize_tracing(log_filter: &str, log_format: LogFormat) {
    let tsub = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(log_filter);

    match log_format {
        LogFormat::Compact => tsub.compact().init(),
        LogFormat::Full => tsub.init(),
        LogFormat::Pretty => tsub.pretty().init(),
        LogFormat::Json => tsub.json().init(),
    }
}
