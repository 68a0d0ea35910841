use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use ringcal::calendar::DateInput;
use ringcal::config::{AlignmentMethod, DEFAULT_SCALE};
use ringcal::errors::RenderError;
use ringcal::{CalendarConfig, CalendarDocument, PageOrientation};
use tracing_subscriber::EnvFilter;

/// Generate a printable two-ring Gregorian/Hijri circular calendar.
#[derive(Parser)]
#[command(name = "ringcal", version, about)]
struct Cli {
    /// Gregorian target date (YYYY-MM-DD). Defaults to today.
    #[arg(long, conflicts_with = "hijri")]
    date: Option<String>,

    /// Hijri target date (YYYY-MM-DD, interpreted as AH).
    #[arg(long)]
    hijri: Option<String>,

    /// Print scale; also picks how many strips fit on a sheet.
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    scale: f64,

    /// Directory the SVG sheets are written to.
    #[arg(short, long, default_value = "out")]
    out_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = Orientation::Portrait)]
    orientation: Orientation,

    /// Skip calendar conversion and use lunar-mean arithmetic.
    #[arg(long)]
    heuristic: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Orientation {
    Portrait,
    Landscape,
}

impl From<Orientation> for PageOrientation {
    fn from(o: Orientation) -> Self {
        match o {
            Orientation::Portrait => PageOrientation::Portrait,
            Orientation::Landscape => PageOrientation::Landscape,
        }
    }
}

/// `RUST_LOG` overrides the `-v` count.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ringcal={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn write_sheets(document: &CalendarDocument, out_dir: &Path) -> Result<(), RenderError> {
    let io_error = |path: &Path| {
        let path = path.display().to_string();
        move |source| RenderError::Io { path, source }
    };

    std::fs::create_dir_all(out_dir).map_err(io_error(out_dir))?;
    for (name, svg) in document.render()? {
        let path = out_dir.join(name);
        std::fs::write(&path, svg).map_err(io_error(&path))?;
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = CalendarConfig {
        target: DateInput::from_flags(cli.date.as_deref(), cli.hijri.as_deref())?,
        scale: cli.scale,
        orientation: cli.orientation.into(),
        alignment: if cli.heuristic {
            AlignmentMethod::Heuristic
        } else {
            AlignmentMethod::Conversion
        },
        ..Default::default()
    };

    let document = ringcal::generate(&config)?;
    println!("{}", document.alignment);
    write_sheets(&document, &cli.out_dir)?;
    Ok(())
}
