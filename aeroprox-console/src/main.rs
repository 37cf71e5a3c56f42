use clap::Parser;

use aeroprox_console::cli::Cli;

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .format_timestamp(None)
        .init();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    aeroprox_console::run(&cli, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
