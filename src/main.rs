use clap::Parser;
use square_monster::appdata::AppData;
use square_monster::game::LevelSource;
use square_monster::launch::{self, SquareMonsterCli};
use square_monster::platform::{GameContainer, GameKind, Launch};
use square_monster::settings::Settings;
use square_monster::GameError;
use std::path::PathBuf;

/// Bundled levels and sounds, relative to the working directory
const ASSET_DIR: &str = "assets";

fn run(cli: SquareMonsterCli) -> Result<(), GameError> {
    let appdata = AppData::square_monster(cli.config);
    appdata.ensure_layout()?;
    let settings = Settings::load(appdata.options_file())?;

    let asset_root = PathBuf::from(ASSET_DIR);
    let levels = match cli.level {
        Some(path) => {
            println!("Map tester: {}", path.display());
            LevelSource::map_test(path)
        }
        None => LevelSource::built_in(&asset_root),
    };

    println!("\n=== Controls ===");
    println!("- Arrows / A D: move, Space / W / Up: jump");
    println!("- Escape: pause, F12: screenshot");
    println!("- Editor: 1-9 pick a tile, 0 the spawn, click to paint, arrows scroll");

    let mut container = GameContainer::new(Launch {
        kind: GameKind::SquareMonster,
        settings,
        appdata,
        asset_root,
        levels,
        session: None,
    })?;
    container.run()
}

fn main() {
    launch::init_logging();
    let cli = SquareMonsterCli::parse();

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        println!("{}", e);
        std::process::exit(1);
    }
}
