use anyhow::Result;
use atelier_tui::{app::App, config::Config};
use clap::{crate_version, App as ClapApp, Arg};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = ClapApp::new("atelier-tui")
        .version(crate_version!())
        .about("A terminal rendition of the Rosagna Hernandez atelier site")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Sets a custom configuration directory")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    App::start(config).await?;
    Ok(())
}
