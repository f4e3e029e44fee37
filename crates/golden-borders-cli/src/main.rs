use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use golden_borders::{
    AreaFactor, FactorBase, InputKind, MatLayout, MatOptions, RectSize, Unit, compute_layout,
    load_batch, parse_dim, parse_dim_pair, render_report, run_batch, write_batch,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "golden-borders",
    about = "Compute mat and window sizes so prints look good",
    version
)]
struct Cli {
    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute borders for a single print or mat
    ///
    /// The mat area is factor^exp times the window area. The top, left and
    /// right borders are equal; the bottom border is bigger so the print
    /// does not look like it sinks into the mat.
    Compute {
        /// Print size (or mat size with --mat), e.g. 9x6in or 300:200
        #[arg(required_unless_present = "config")]
        size: Option<String>,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Load options from a JSON file instead of SIZE and flags
        #[arg(long, conflicts_with = "size")]
        config: Option<PathBuf>,

        /// Save the resolved options to a JSON file
        #[arg(long)]
        save_config: Option<PathBuf>,

        /// Print the layout as JSON (millimeters)
        #[arg(long)]
        json: bool,
    },

    /// Compute borders for every row of a CSV file (columns: name, size)
    Batch {
        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV file
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,
    },
}

#[derive(Args)]
struct LayoutArgs {
    /// Default unit, also used for output
    #[arg(long, default_value = "mm", value_enum)]
    units: UnitArg,

    /// The size is the mat's, compute window and print
    #[arg(long)]
    mat: bool,

    /// Paper of the print, assumed centered on it
    #[arg(long, default_value = "0x0")]
    paper: String,

    /// Overlap of the mat's window over the print (pair or single)
    #[arg(long, default_value = "0")]
    overlap: String,

    /// Area factor: phi, gold, golden, golden-ratio or a number
    #[arg(long, default_value = "golden")]
    factor: String,

    /// Exponent for the factor (1.5 for the Golden Ratio unless given)
    #[arg(long)]
    exp: Option<f64>,

    /// Use a fixed border of this size and compute only the bottom
    #[arg(long)]
    border: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitArg {
    Mm,
    Cm,
    Dm,
    M,
    In,
    Ft,
}

impl From<UnitArg> for Unit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Mm => Self::Mm,
            UnitArg::Cm => Self::Cm,
            UnitArg::Dm => Self::Dm,
            UnitArg::M => Self::M,
            UnitArg::In => Self::In,
            UnitArg::Ft => Self::Ft,
        }
    }
}

impl LayoutArgs {
    fn unit(&self) -> Unit {
        self.units.into()
    }

    fn to_options(&self, size: RectSize) -> Result<MatOptions> {
        let unit = self.unit();

        let base: FactorBase = self.factor.parse()?;
        let factor = AreaFactor {
            base,
            exponent: self.exp,
        };

        let fixed_border = self
            .border
            .as_deref()
            .map(|border| parse_dim(border, unit))
            .transpose()?;

        Ok(MatOptions {
            size,
            kind: if self.mat {
                InputKind::Mat
            } else {
                InputKind::Print
            },
            overlap: parse_dim_pair(&self.overlap, unit).context("Invalid --overlap")?,
            paper: parse_dim_pair(&self.paper, unit).context("Invalid --paper")?,
            factor,
            fixed_border,
        })
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn report_diagnostics(layout: &MatLayout) {
    if let Some(diagnostic) = layout.diagnostic() {
        log::warn!("{}", diagnostic);
        for alternative in &layout.alternatives {
            log::info!(
                "  unused solution: border {:.3} mm, bottom {:.3} mm",
                alternative.side,
                alternative.bottom
            );
        }
        for root in &layout.rejected {
            log::info!("  rejected root: border {:.3} mm", root);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Compute {
            size,
            layout,
            config,
            save_config,
            json,
        } => {
            let options = match (config, size) {
                (Some(path), _) => MatOptions::load(&path)
                    .await
                    .with_context(|| format!("Failed to load {}", path.display()))?,
                (None, Some(size)) => {
                    let size = parse_dim_pair(&size, layout.unit())?;
                    layout.to_options(size)?
                }
                (None, None) => anyhow::bail!("Either SIZE or --config is required"),
            };

            if let Some(path) = save_config {
                options.save(&path).await?;
                log::info!("Saved options to {}", path.display());
            }

            let mat_layout = compute_layout(&options)?;
            report_diagnostics(&mat_layout);

            if json {
                println!("{}", serde_json::to_string_pretty(&mat_layout)?);
            } else {
                print!("{}", render_report(&mat_layout, layout.unit()));
            }
        }

        Commands::Batch {
            input,
            output,
            layout,
        } => {
            let jobs = load_batch(&input).await?;
            let base = layout.to_options(RectSize::default())?;
            let outcomes = run_batch(&jobs, &base, layout.unit());

            let mut failed = 0;
            for outcome in &outcomes {
                match &outcome.result {
                    Ok(mat_layout) => report_diagnostics(mat_layout),
                    Err(err) => {
                        failed += 1;
                        log::warn!("{}: {}", outcome.name, err);
                    }
                }
            }

            let written = write_batch(&outcomes, &output).await?;
            println!(
                "Computed {} mats ({} failed) → {}",
                written,
                failed,
                output.display()
            );
        }
    }

    Ok(())
}
