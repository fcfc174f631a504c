//! bookdash - A personal bookmark dashboard for the terminal

use std::fs::{self, OpenOptions};
use std::io::stdout;
use std::path::Path;
use std::process::ExitCode;

use crossterm::{
    cursor,
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use env_logger::{Env, Target};
use ratatui::prelude::*;

use bookdash::app::{print_help, run_app, Command, Config, ExportTarget};
use bookdash::core::BookmarkId;
use bookdash::error::BookdashError;
use bookdash::integrate::{
    default_export_path, exit_code, export_json, export_to_file, form, import_from_file,
    output_bookmarks, OutputFormat,
};

fn main() -> ExitCode {
    // Parse config first to return INVALID exit code for argument errors
    let config = match Config::from_args() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(exit_code::INVALID as u8);
        }
    };

    init_logging(&config);

    // Handle non-interactive modes first
    match config.command.clone() {
        Command::Help => {
            print_help();
            return ExitCode::from(exit_code::SUCCESS as u8);
        }
        Command::Version => {
            println!("bkd {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::from(exit_code::SUCCESS as u8);
        }
        Command::List { format } => return run_list_mode(&config, format),
        Command::Add { url } => return run_add_mode(&config, &url),
        Command::Remove { id } => return run_remove_mode(&config, &id),
        Command::Export { target } => return run_export_mode(&config, &target),
        Command::Import { path } => return run_import_mode(&config, &path),
        Command::Dashboard => {}
    }

    match run_with_config(config) {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code::ERROR as u8)
        }
    }
}

/// Set up env_logger (`RUST_LOG` overrides the default `warn` level)
///
/// The dashboard owns the terminal, so its log goes to a file in the data
/// directory. Command modes log to stderr.
fn init_logging(config: &Config) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    builder.format_timestamp_millis();

    if config.command == Command::Dashboard {
        let log_path = config.log_path();
        let file = fs::create_dir_all(&config.data_dir).and_then(|_| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)
        });
        match file {
            Ok(file) => {
                builder.target(Target::Pipe(Box::new(file)));
            }
            Err(_) => {
                builder.filter_level(log::LevelFilter::Off);
            }
        }
    }

    let _ = builder.try_init();
}

/// Exit code for a failed operation: bad input vs. everything else
fn failure(e: &BookdashError) -> ExitCode {
    eprintln!("Error: {}", e);
    if e.is_validation() {
        ExitCode::from(exit_code::INVALID as u8)
    } else {
        ExitCode::from(exit_code::ERROR as u8)
    }
}

/// Print the collection (non-interactive)
fn run_list_mode(config: &Config, format: OutputFormat) -> ExitCode {
    let store = config.open_store();
    match output_bookmarks(store.bookmarks(), format) {
        Ok(_) => ExitCode::from(exit_code::SUCCESS as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code::ERROR as u8)
        }
    }
}

/// Add one bookmark (non-interactive)
fn run_add_mode(config: &Config, url: &str) -> ExitCode {
    let mut store = config.open_store();
    match form::submit(&mut store, &config.icons, url) {
        Ok(outcome) => {
            println!("{}", outcome.message());
            ExitCode::from(exit_code::SUCCESS as u8)
        }
        Err(e) => failure(&e),
    }
}

/// Remove one bookmark by id (non-interactive)
fn run_remove_mode(config: &Config, id: &str) -> ExitCode {
    let mut store = config.open_store();
    let id = BookmarkId::new(id);
    let Some(title) = store.get(&id).map(|b| b.title.clone()) else {
        eprintln!("Error: No bookmark with id {}", id.as_str());
        return ExitCode::from(exit_code::INVALID as u8);
    };
    store.remove(&id);
    println!("Removed {}", title);
    ExitCode::from(exit_code::SUCCESS as u8)
}

/// Write a JSON backup (non-interactive)
fn run_export_mode(config: &Config, target: &ExportTarget) -> ExitCode {
    let store = config.open_store();
    let path = match target {
        ExportTarget::Stdout => {
            return match export_json(&store) {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::from(exit_code::SUCCESS as u8)
                }
                Err(e) => failure(&e),
            };
        }
        ExportTarget::DefaultFile => default_export_path(Path::new(".")),
        ExportTarget::File(path) => path.clone(),
    };

    match export_to_file(&store, &path) {
        Ok(count) => {
            println!("Exported {} bookmark(s) to {}", count, path.display());
            ExitCode::from(exit_code::SUCCESS as u8)
        }
        Err(e) => failure(&e),
    }
}

/// Replace the collection with a JSON backup (non-interactive)
fn run_import_mode(config: &Config, path: &Path) -> ExitCode {
    let mut store = config.open_store();
    match import_from_file(&mut store, path, config.icons.default_icon_url()) {
        Ok(count) => {
            println!("Successfully imported {} bookmarks!", count);
            ExitCode::from(exit_code::SUCCESS as u8)
        }
        Err(e) => failure(&e),
    }
}

fn run_with_config(config: Config) -> anyhow::Result<i32> {
    let mouse_enabled = config.mouse_enabled;

    // Initialize terminal
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    if mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, config);

    // Restore terminal
    terminal::disable_raw_mode()?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste,
        cursor::Show
    )?;

    result.map(|app_result| app_result.exit_code)
}
