use clap::Parser;
use square_monster::appdata::AppData;
use square_monster::game::LevelSource;
use square_monster::launch::{self, CrusadeCli};
use square_monster::platform::{GameContainer, GameKind, Launch};
use square_monster::settings::Settings;
use square_monster::GameError;
use std::path::PathBuf;

const ASSET_DIR: &str = "assets";

fn run(cli: CrusadeCli) -> Result<(), GameError> {
    let appdata = AppData::crusade_of_ages(cli.config);
    appdata.ensure_layout()?;
    let settings = Settings::load(appdata.options_file())?;

    let session = launch::connect(&cli.host, cli.port)?;
    let asset_root = PathBuf::from(ASSET_DIR);

    let mut container = GameContainer::new(Launch {
        kind: GameKind::CrusadeOfAges,
        settings,
        appdata,
        levels: LevelSource::built_in(&asset_root),
        asset_root,
        session: Some(session),
    })?;
    container.run()
}

fn main() {
    launch::init_logging();
    let cli = CrusadeCli::parse();

    if let Err(e) = run(cli) {
        // refused servers end the launch quietly
        if let Some(addr) = launch::refused_addr(&e) {
            println!("Connection refused: {}", addr);
            return;
        }
        log::error!("{}", e);
        println!("{}", e);
        std::process::exit(1);
    }
}
