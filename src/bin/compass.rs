use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use compass_switch::actor;
use compass_switch::actor::broadcast::SwitcherEvent;
use compass_switch::actor::switcher::Switcher;
use compass_switch::common::config::Config;
use compass_switch::model::{AppMapping, Direction, MappingStore, classify};
use compass_switch::replay;
use compass_switch::sys::launcher::{AppLauncher, DryRun, Workspace};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_tree::HierarchicalLayer;

#[derive(Parser)]
#[command(version, about = "Switch applications by dragging toward a compass direction")]
struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the direction a pointer displacement resolves to.
    Classify {
        #[arg(allow_negative_numbers = true)]
        dx: f64,
        #[arg(allow_negative_numbers = true)]
        dy: f64,
    },
    /// List every direction with its angle and pinned application.
    Directions,
    /// Inspect or edit the direction mappings.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Feed a recorded input script through the switcher.
    Replay {
        /// Script file, or `-` for stdin.
        script: String,
        /// Log launches instead of performing them.
        #[arg(long)]
        dry_run: bool,
        /// Print events as JSON lines.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the config file location.
    Path,
    /// Print the effective config.
    Show,
    /// Pin an application to a direction.
    Set {
        direction: Direction,
        bundle_id: String,
        name: String,
    },
    /// Remove the application pinned to a direction.
    Unset { direction: Direction },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    install_tracing();

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };

    match cli.command {
        Command::Classify { dx, dy } => {
            if !dx.is_finite() || !dy.is_finite() {
                bail!("displacement must be finite, got ({dx}, {dy})");
            }
            println!("{}", classify(dx, dy));
        }
        Command::Directions => {
            let config = load_config(&config_path)?;
            for direction in Direction::ALL {
                let app = config
                    .lookup(direction)
                    .map(|app| format!("{} ({})", app.name, app.bundle_id))
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<3} {:>5.1}  {:<11} {}",
                    direction.abbreviation(),
                    direction.angle(),
                    direction,
                    app
                );
            }
        }
        Command::Config(command) => run_config_command(command, &config_path)?,
        Command::Replay { script, dry_run, json } => {
            let config = load_config(&config_path)?;
            run_replay(config, &script, dry_run, json)?;
        }
    }
    Ok(())
}

fn install_tracing() {
    let filter = EnvFilter::try_from_env("COMPASS_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            HierarchicalLayer::default()
                .with_writer(io::stderr)
                .with_indent_lines(true)
                .with_targets(true),
        )
        .init();
}

fn load_config(path: &Path) -> anyhow::Result<Config> {
    Config::read_or_default(path).with_context(|| format!("loading {}", path.display()))
}

fn run_config_command(command: ConfigCommand, path: &Path) -> anyhow::Result<()> {
    match command {
        ConfigCommand::Path => println!("{}", path.display()),
        ConfigCommand::Show => print!("{}", load_config(path)?.to_toml()?),
        ConfigCommand::Set { direction, bundle_id, name } => {
            let mut config = load_config(path)?;
            if let Some(previous) = config.assign(direction, AppMapping::new(bundle_id, name)) {
                info!(%direction, previous = %previous.bundle_id, "replacing pinned application");
            }
            config.save(path)?;
        }
        ConfigCommand::Unset { direction } => {
            let mut config = load_config(path)?;
            if config.mappings.unassign(direction).is_none() {
                warn!(%direction, "nothing pinned to direction");
                return Ok(());
            }
            config.save(path)?;
        }
    }
    Ok(())
}

fn run_replay(config: Config, script: &str, dry_run: bool, json: bool) -> anyhow::Result<()> {
    let events = if script == "-" {
        replay::parse_script(io::stdin().lock())
    } else {
        let file = File::open(script).with_context(|| format!("opening {script}"))?;
        replay::parse_script(BufReader::new(file))
    }
    .context("parsing replay script")?;

    let launcher: Box<dyn AppLauncher> = if dry_run {
        Box::new(DryRun)
    } else {
        Box::new(Workspace::new())
    };

    let (tx, rx) = actor::channel();
    let (events_tx, mut events_rx) = actor::channel();
    let switcher = Switcher::new(config, rx, launcher).with_broadcast(events_tx);
    for event in events {
        tx.send(event);
    }
    drop(tx);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .context("starting runtime")?;
    runtime.block_on(switcher.run());

    let mut stdout = io::stdout().lock();
    while let Ok((_, event)) = events_rx.try_recv() {
        if json {
            serde_json::to_writer(&mut stdout, &event)?;
            writeln!(stdout)?;
        } else {
            writeln!(stdout, "{}", describe(&event))?;
        }
    }
    Ok(())
}

fn describe(event: &SwitcherEvent) -> String {
    match event {
        SwitcherEvent::Resolved { direction, app: Some(app) } => {
            format!("{direction} -> {} ({})", app.name, app.bundle_id)
        }
        SwitcherEvent::Resolved { direction, app: None } => format!("{direction} -> (unassigned)"),
        SwitcherEvent::Ignored { direction, distance } => {
            format!("{direction} ignored: drag of {distance:.1} is too short")
        }
        SwitcherEvent::Cancelled => "cancelled".to_string(),
        SwitcherEvent::LaunchFailed { direction, bundle_id, error } => {
            format!("{direction}: could not launch {bundle_id}: {error}")
        }
        SwitcherEvent::OverlayChanged { screens } => {
            let visible = screens.iter().filter(|s| s.visible).count();
            let selection = screens
                .iter()
                .find_map(|s| s.selection)
                .map_or_else(|| "none".to_string(), |d| d.to_string());
            format!("overlay: visible on {visible}/{} screens, selection {selection}", screens.len())
        }
    }
}
