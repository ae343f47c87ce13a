use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use clap::Parser;

use pupusa_order::app::infrastructure::logging::init_logging;
use pupusa_order::app::{AppSettings, AppState, Catalog, Flow};
use pupusa_order::ui::commands::parse_command;
use pupusa_order::ui::render::render;
use pupusa_order::ui::theme::{PLAIN, palette_for};

#[derive(Debug, Parser)]
#[command(
    name = "pupusa-order",
    version,
    about = "Take a party's pupusa order, one person at a time"
)]
struct Args {
    /// Settings file to use instead of the platform config directory
    #[arg(long, value_name = "SETTINGS_JSON")]
    config: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    init_logging();

    let config_path = args.config.unwrap_or_else(AppSettings::get_config_path);

    let settings = AppSettings::load_from(&config_path);
    tracing::info!(
        theme = ?settings.theme,
        "Starting with settings from {}",
        config_path.display()
    );
    let mut app = AppState::new(settings, Catalog::default(), Some(config_path));

    let colored = io::stdout().is_terminal();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        let palette = if colored { palette_for(app.theme()) } else { PLAIN };
        let _ = write!(stdout, "\n{}> ", render(&app, &palette));
        let _ = stdout.flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                tracing::warn!("Failed to read input: {}", e);
                break;
            }
            None => break,
        };

        let msg = match parse_command(&line, app.view, &app.catalog) {
            Ok(msg) => msg,
            Err(e) => {
                let _ = writeln!(stdout, "{}", palette.error(&e));
                continue;
            }
        };

        match app.handle(msg) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => {
                let _ = writeln!(stdout, "{}", palette.error(&e.to_string()));
            }
        }
    }
}
