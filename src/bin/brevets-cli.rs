#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use brevets::{
    acp::{close_time, open_time, Rounding, TimeOptions},
    io,
    model::{Brevet, BrevetDistance, Control, ControlWindow},
    schedule::build_schedule,
};
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Calcul des heures de contrôle des brevets ACP
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Arrondi des minutes : nearest | truncate
    #[arg(long, global = true, default_value = "nearest")]
    rounding: Rounding,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Csv,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Heure d'ouverture d'un contrôle
    Open {
        #[arg(long, allow_negative_numbers = true)]
        km: f64,
        /// 200, 300, 400, 600 ou 1000
        #[arg(long)]
        brevet: BrevetDistance,
        /// RFC3339 (ou `YYYY-MM-DD HH:MM` en UTC)
        #[arg(long)]
        start: String,
    },

    /// Heure de fermeture d'un contrôle
    Close {
        #[arg(long, allow_negative_numbers = true)]
        km: f64,
        #[arg(long)]
        brevet: BrevetDistance,
        #[arg(long)]
        start: String,
    },

    /// Tableau complet des contrôles
    Schedule {
        #[arg(long)]
        brevet: BrevetDistance,
        #[arg(long)]
        start: String,
        /// liste "0,60,120,..."
        #[arg(long, conflicts_with = "csv")]
        controls: Option<String>,
        /// CSV `distance_km[,name]`
        #[arg(long)]
        csv: Option<String>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Vérifier qu'un passage est dans la fenêtre du contrôle
    Check {
        #[arg(long, allow_negative_numbers = true)]
        km: f64,
        #[arg(long)]
        brevet: BrevetDistance,
        #[arg(long)]
        start: String,
        /// Heure de passage (RFC3339)
        #[arg(long)]
        at: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let opts = TimeOptions {
        rounding: cli.rounding,
    };

    let code = match cli.cmd {
        Commands::Open { km, brevet, start } => {
            let start = io::parse_start(&start)?;
            println!("{}", open_time(km, brevet, &start, opts)?.to_rfc3339());
            0
        }
        Commands::Close { km, brevet, start } => {
            let start = io::parse_start(&start)?;
            println!("{}", close_time(km, brevet, &start, opts)?.to_rfc3339());
            0
        }
        Commands::Schedule {
            brevet,
            start,
            controls,
            csv,
            format,
        } => {
            let brevet = Brevet::new(brevet, io::parse_start(&start)?);
            let controls: Vec<Control> = match (controls, csv) {
                (Some(list), _) => io::parse_controls_list(&list)?,
                (None, Some(path)) => io::import_controls_csv(path)?,
                (None, None) => bail!("either --controls or --csv is required"),
            };
            let schedule = build_schedule(&brevet, &controls, opts)?;
            match format {
                Format::Text => println!("{}", schedule.render_text()),
                Format::Csv => io::write_schedule_csv(std::io::stdout().lock(), &schedule)?,
                Format::Json => println!("{}", io::schedule_to_json(&schedule)?),
            }
            0
        }
        Commands::Check {
            km,
            brevet,
            start,
            at,
        } => {
            let start = io::parse_start(&start)?;
            let at = io::parse_start(&at)?;
            let window = ControlWindow {
                control: Control::new(km),
                open: open_time(km, brevet, &start, opts)?,
                close: close_time(km, brevet, &start, opts)?,
            };
            if window.accepts(at) {
                println!(
                    "OK: arrival within {} → {}",
                    window.open.to_rfc3339(),
                    window.close.to_rfc3339()
                );
                0
            } else {
                eprintln!(
                    "OUTSIDE: control open {} → {}",
                    window.open.to_rfc3339(),
                    window.close.to_rfc3339()
                );
                // Code 2 = passage hors délai
                2
            }
        }
    };

    std::process::exit(code);
}
