use folio::adapters::{EnvAppearance, FileStore, SessionStore};
use folio::app::{run_app, App};
use folio::cli::{parse_args, run_cli_command};
use folio::engine::ThemePreferenceStore;
use folio::startup::{init_logging, Config};
use folio::terminal::{setup_panic_hook, TerminalManager};

use color_eyre::Result;
use crossterm::event::EventStream;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Handle command-line flags before touching the terminal
    let command = parse_args(std::env::args());
    if let Some(result) = run_cli_command(command, &config) {
        return result;
    }

    color_eyre::install()?;
    let log_path = init_logging(&config);

    // Restore the terminal even if something panics mid-frame
    setup_panic_hook();

    // Single-threaded runtime: the app state is not Send
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let theme = build_theme_store(&config);

    let mut term_manager = TerminalManager::new()?;
    let size = term_manager.size()?;
    let mut app = App::new(config, theme, (size.width, size.height))?;
    tracing::info!(
        width = size.width,
        height = size.height,
        log = ?log_path,
        "TUI started"
    );

    let result = runtime.block_on(run_app(
        term_manager.terminal(),
        &mut app,
        EventStream::new(),
    ));

    drop(app);
    term_manager.restore();
    result
}

/// Theme store over the preferences file, or memory when there is no home
/// directory to write to.
fn build_theme_store(config: &Config) -> ThemePreferenceStore {
    match config.preferences_path() {
        Some(path) => ThemePreferenceStore::new(FileStore::at(path), EnvAppearance::new()),
        None => {
            tracing::warn!("No data directory; theme choice will not be saved");
            ThemePreferenceStore::new(SessionStore::new(), EnvAppearance::new())
        }
    }
}
