use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::process::ExitCode;

use clap::Parser;
use objweld::{parse_reader, Welded};
use tracing::{error, info};

mod cli;

use cli::Cli;

fn run(cli: &Cli) -> objweld::Result<()> {
    let options = cli.parse_options();

    let mesh = match cli.input_path() {
        Some(path) => {
            info!(path = %path.display(), "reading mesh");
            parse_reader(BufReader::new(File::open(path)?), &options)?
        }
        None => {
            info!("reading mesh from stdin");
            parse_reader(io::stdin().lock(), &options)?
        }
    };

    let welded = Welded::new(mesh);

    // nothing reaches the destination unless the whole mesh was written
    let mut out = Vec::new();
    welded.write_to(&mut out)?;
    match &cli.output {
        Some(path) => fs::write(path, &out)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&out)?;
            stdout.flush()?;
        }
    }

    let stats = welded.stats;
    info!(
        input_vertices = stats.input_vertices,
        output_vertices = stats.output_vertices,
        merged = stats.merged(),
        triangles = stats.triangles,
        "welded mesh"
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::initialize_tracing(&cli.log_filter, cli.log_format);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
