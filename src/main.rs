use clap::{Parser, Subcommand};
use roster_grid::config::{self, RosterConfig};
use roster_grid::photo::MatchMode;
use roster_grid::{convert, export, import, listing, output};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Flags shared by every command that reads a roster.
#[derive(clap::Args, Clone)]
struct InputArgs {
    /// Roster workbook (.xlsx, .xlsm, .xls, .ods)
    input: PathBuf,

    /// Directory holding the photo files to match against
    #[arg(long)]
    photos: PathBuf,

    /// Worksheet to read (default: first sheet)
    #[arg(long)]
    sheet: Option<String>,

    /// Photo path prefix written into the CSV (default: the --photos path)
    #[arg(long)]
    base_path: Option<String>,

    /// Photo for people without one (default: <base-path>/SILHOUETTE.png)
    #[arg(long)]
    silhouette: Option<String>,

    /// Photo when no file matched (default: <base-path>/NOT_FOUND.png)
    #[arg(long)]
    not_found: Option<String>,

    /// Name matching: "pattern" or "literal"
    #[arg(long)]
    match_mode: Option<MatchMode>,
}

#[derive(Parser)]
#[command(name = "roster-grid")]
#[command(about = "Convert a people directory spreadsheet into a paginated CSV data source")]
#[command(long_about = "\
Convert a people directory spreadsheet into a paginated CSV data source

Each CSV row is one printed page with two category titles and 45
name/photo frames (3 rows x 15). Small categories share a page when
their rows fit; large ones span several pages.

Spreadsheet layout (defaults, see 'roster-grid gen-config'):

  rows 1-4   preamble, ignored
  row 5      header, ignored
  row 6+     A=id  B=country  C=name  D=agent code  E=category  F=photo (Y)

Photo resolution (first available wins):
  Name:        first file whose letters contain the person's letters
               (J_Smith_COT.png matches \"J. Smith\")
  Agent code:  first file whose name contains the agent code
  Otherwise:   the not-found placeholder

People without a photo (F is not \"Y\") always get the silhouette.")]
#[command(version)]
struct Cli {
    /// Config file
    #[arg(long, default_value = config::CONFIG_FILE_NAME, global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a roster into a CSV data source
    Convert {
        #[command(flatten)]
        args: InputArgs,

        /// CSV file to write
        #[arg(long, short, default_value = "data-source.csv")]
        output: PathBuf,
    },
    /// Show the page plan and photo matches without writing anything
    Plan {
        #[command(flatten)]
        args: InputArgs,

        /// Print the plan as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Print a stock roster-grid.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            args,
            output: csv_path,
        } => {
            let config = effective_config(&cli.config, &args)?;
            let conversion = run(&args, &config)?;
            export::write_csv(&csv_path, &conversion.table)?;
            output::print_conversion_output(&conversion, Some(&csv_path));
        }
        Command::Plan { args, json } => {
            let config = effective_config(&cli.config, &args)?;
            let conversion = run(&args, &config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&conversion)?);
            } else {
                output::print_conversion_output(&conversion, None);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the config file and apply command-line overrides on top.
fn effective_config(path: &Path, args: &InputArgs) -> Result<RosterConfig, config::ConfigError> {
    let mut config = config::load_config(path)?;
    if let Some(sheet) = &args.sheet {
        config.input.sheet = sheet.clone();
    }
    if let Some(base) = &args.base_path {
        config.photos.base_path = base.clone();
    } else if config.photos.base_path.is_empty() {
        config.photos.base_path = args.photos.to_string_lossy().into_owned();
    }
    if let Some(silhouette) = &args.silhouette {
        config.photos.silhouette_path = Some(silhouette.clone());
    }
    if let Some(not_found) = &args.not_found {
        config.photos.not_found_path = Some(not_found.clone());
    }
    if let Some(mode) = args.match_mode {
        config.photos.match_mode = mode;
    }
    Ok(config)
}

/// Read the workbook and photo directory, then run the pure conversion.
fn run(
    args: &InputArgs,
    config: &RosterConfig,
) -> Result<convert::Conversion, Box<dyn std::error::Error>> {
    info!(input = %args.input.display(), "reading roster");
    let rows = import::read_rows(&args.input, &config.input.sheet)?;
    info!(photos = %args.photos.display(), "listing photos");
    let entries = listing::list_directory(&args.photos)?;
    info!(rows = rows.len(), photos = entries.len(), "converting");
    Ok(convert::convert(&rows, &entries, config))
}
