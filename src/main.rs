use clap::Parser;
use tasklist::cli::commands::Cli;
use tasklist::io::config_io::resolve_config;
use tasklist::logging::init_file_logging;

fn main() {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file
        && let Err(e) = init_file_logging(path)
    {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    let mut config = match resolve_config(cli.config.as_deref(), &cwd) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    cli.apply_overrides(&mut config);

    if let Err(e) = tasklist::tui::run(&config) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
