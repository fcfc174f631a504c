//! Application configuration from CLI arguments

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use super::config_file::ConfigFile;
use crate::core::{BookmarkStore, FileStorage};
use crate::integrate::{IconService, Launcher, OutputFormat};

/// What the process was asked to do
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Interactive dashboard (default)
    Dashboard,
    /// Print the collection to stdout
    List { format: OutputFormat },
    /// Add one bookmark from a URL
    Add { url: String },
    /// Remove one bookmark by id
    Remove { id: String },
    /// Write a JSON backup
    Export { target: ExportTarget },
    /// Replace the collection with a JSON backup
    Import { path: PathBuf },
    /// Print usage
    Help,
    /// Print version
    Version,
}

/// Destination of `--export`
#[derive(Debug, Clone, PartialEq)]
pub enum ExportTarget {
    /// `bookmarks-backup-YYYY-MM-DD.json` in the current directory
    DefaultFile,
    /// `-`
    Stdout,
    File(PathBuf),
}

/// Application configuration from CLI args and config file
pub struct Config {
    pub command: Command,
    /// Directory holding the bookmark collection and the log file
    pub data_dir: PathBuf,
    /// Enable mouse support (from config file, `--no-mouse` overrides)
    pub mouse_enabled: bool,
    /// Show URLs under tile titles (from config file)
    pub show_urls: bool,
    /// Tile size in cells (from config file)
    pub tile_size: (u16, u16),
    /// Favicon URL builder (from config file)
    pub icons: IconService,
    /// Opener for bookmarks (from config file)
    pub launcher: Launcher,
}

impl Config {
    pub fn from_args() -> anyhow::Result<Self> {
        Self::parse(env::args().skip(1))
    }

    /// Parse arguments (without the program name)
    pub fn parse(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut args = args.into_iter().peekable();
        let mut command: Option<Command> = None;
        let mut format: Option<OutputFormat> = None;
        let mut data_dir: Option<PathBuf> = None;
        let mut config_path: Option<PathBuf> = None;
        let mut mouse_override: Option<bool> = None;

        let mut set_command = |next: Command, flag: &str| -> anyhow::Result<()> {
            if command.is_some() {
                anyhow::bail!("{} cannot be combined with another command", flag);
            }
            command = Some(next);
            Ok(())
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--list" | "-l" => set_command(
                    Command::List {
                        format: OutputFormat::default(),
                    },
                    &arg,
                )?,
                "--json" => format = Some(OutputFormat::Json),
                "--format" | "-f" => {
                    if let Some(fmt) = args.next() {
                        format = Some(OutputFormat::from_str(&fmt).map_err(|_| {
                            anyhow::anyhow!(
                                "Invalid format '{}'. Valid formats: lines, urls, json",
                                fmt
                            )
                        })?);
                    } else {
                        anyhow::bail!("--format requires a value (lines, urls, or json)");
                    }
                }
                "--add" | "-a" => match args.next() {
                    Some(url) => set_command(Command::Add { url }, &arg)?,
                    None => anyhow::bail!("--add requires a URL"),
                },
                "--remove" | "-r" => match args.next() {
                    Some(id) => set_command(Command::Remove { id }, &arg)?,
                    None => anyhow::bail!("--remove requires a bookmark id"),
                },
                "--export" | "-e" => {
                    // Optional destination: next arg unless it is another flag
                    let target = match args.next_if(|next| next == "-" || !next.starts_with('-'))
                    {
                        Some(dest) if dest == "-" => ExportTarget::Stdout,
                        Some(dest) => ExportTarget::File(PathBuf::from(dest)),
                        None => ExportTarget::DefaultFile,
                    };
                    set_command(Command::Export { target }, &arg)?;
                }
                "--import" | "-i" => match args.next() {
                    Some(path) => set_command(
                        Command::Import {
                            path: PathBuf::from(path),
                        },
                        &arg,
                    )?,
                    None => anyhow::bail!("--import requires a file path"),
                },
                "--data-dir" => match args.next() {
                    Some(dir) => data_dir = Some(PathBuf::from(dir)),
                    None => anyhow::bail!("--data-dir requires a directory"),
                },
                "--config" => match args.next() {
                    Some(path) => config_path = Some(PathBuf::from(path)),
                    None => anyhow::bail!("--config requires a file path"),
                },
                "--no-mouse" => mouse_override = Some(false),
                "--mouse" => mouse_override = Some(true),
                "--help" | "-h" => set_command(Command::Help, &arg)?,
                "--version" | "-V" => set_command(Command::Version, &arg)?,
                unknown => {
                    anyhow::bail!(
                        "Unknown option: {}. Use --help for usage information.",
                        unknown
                    );
                }
            }
        }

        let mut command = command.unwrap_or(Command::Dashboard);
        if let Some(fmt) = format {
            match &mut command {
                Command::List { format } => *format = fmt,
                _ => anyhow::bail!("--json and --format only apply to --list"),
            }
        }

        let config_file = match config_path {
            Some(path) => ConfigFile::load_from(&path)
                .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", path.display(), e))?,
            None => ConfigFile::load(),
        };

        // CLI arguments take precedence over config file
        let data_dir = data_dir
            .or(config_file.general.data_dir)
            .unwrap_or_else(FileStorage::default_dir);
        let launcher = config_file
            .general
            .open_command
            .map(Launcher::new)
            .unwrap_or_default();

        Ok(Self {
            command,
            data_dir,
            mouse_enabled: mouse_override.unwrap_or(config_file.general.mouse_enabled),
            show_urls: config_file.ui.show_urls,
            tile_size: config_file.ui.tile_size(),
            icons: config_file.icons.service(),
            launcher,
        })
    }

    /// Log file for the interactive dashboard
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("bookdash.log")
    }

    /// Open the bookmark collection stored in the data directory
    pub fn open_store(&self) -> BookmarkStore {
        BookmarkStore::load(FileStorage::new(&self.data_dir))
    }
}

pub fn print_help() {
    println!(
        r#"bkd - bookdash: A bookmark dashboard for the terminal

USAGE:
    bkd [OPTIONS]

COMMANDS (non-interactive):
    -l, --list          Print bookmarks (id, title, url) to stdout
    --json              With --list: print the JSON backup format
    -f, --format FMT    With --list: lines, urls, json
    -a, --add URL       Add a bookmark for URL
    -r, --remove ID     Remove the bookmark with ID
    -e, --export [FILE] Write a JSON backup (default: bookmarks-backup-DATE.json, - for stdout)
    -i, --import FILE   Replace all bookmarks with a JSON backup

OPTIONS:
    --data-dir DIR      Directory holding the bookmarks (default: ~/.local/share/bookdash)
    --config FILE       Use FILE instead of ~/.config/bookdash/config.toml
    --no-mouse          Disable drag and drop
    -h, --help          Show this help message
    -V, --version       Show version

CONFIG FILE:
    ~/.config/bookdash/config.toml

ENVIRONMENT:
    RUST_LOG            Log filter (default: warn); the dashboard logs to DATA_DIR/bookdash.log

KEYBINDINGS:
    h/l/←/→     Move focus
    j/k/↑/↓     Move focus one row
    g/G         First / last tile
    a           Add bookmark
    Enter/o     Open bookmark
    y           Copy URL to clipboard
    d/Del       Remove bookmark
    </>         Move bookmark left / right (also Shift+←/→)
    e           Export backup
    i           Import backup (with confirmation)
    ?           About / help
    q/Esc       Quit

MOUSE:
    Drag a tile onto another to reorder, drop it on the trash zone to remove.
    Double-click a tile to open it.

EXIT CODES:
    0           Success
    2           Error (runtime error)
    3           Invalid arguments or rejected input
"#
    );
}
