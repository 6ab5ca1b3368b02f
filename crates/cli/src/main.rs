pub mod cli;
mod logging;

use clap::Parser;

use cli::*;

fn main() -> anyhow::Result<()> {
    logging::init_logging();
    let cli = Cli::parse();

    let report = run(&cli)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report));
    }

    Ok(())
}
