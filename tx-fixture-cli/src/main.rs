use std::error::Error;
use std::path::PathBuf;

use clap::{ArgEnum, Parser};
use log::info;

use tx_fixture::generator::{
    Generator, GeneratorConfig, StdoutProgress, DEFAULT_OUTPUT_PATH, DEFAULT_PROGRESS_INTERVAL,
    DEFAULT_ROW_COUNT,
};
use tx_fixture::row::ClientScheme;

#[derive(ArgEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum SchemeArg {
    /// Client id is the row index modulo 65536
    Modulo,
    /// Client ids alternate 16/17, matching the historical fixture
    Legacy,
}

impl From<SchemeArg> for ClientScheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Modulo => ClientScheme::Modulo,
            SchemeArg::Legacy => ClientScheme::Legacy,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Where the CSV is written. Its parent directory must already exist
    #[clap(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Total number of deposit rows to emit
    #[clap(long, default_value_t = DEFAULT_ROW_COUNT)]
    rows: u32,

    /// How client ids are derived from the row index
    #[clap(long, arg_enum, default_value = "modulo")]
    client_scheme: SchemeArg,
}

impl From<Cli> for GeneratorConfig {
    fn from(cli: Cli) -> Self {
        GeneratorConfig {
            output_path: cli.output,
            row_count: cli.rows,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            client_scheme: cli.client_scheme.into(),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let generator = Generator::new(GeneratorConfig::from(cli));
    let summary = generator.run(&mut StdoutProgress)?;
    info!("Done: {} rows in {}", summary.rows_written, summary.path.display());

    Ok(())
}
