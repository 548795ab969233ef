//! Command lines, logging setup and the Crusade of Ages server handshake

use crate::error::GameError;
use clap::{ArgAction, Parser};
use std::io;
use std::net::TcpStream;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 5338;

#[derive(Parser, Debug)]
#[command(name = "square-monster")]
#[command(about = "Square Monster, a tile platformer with a level editor")]
pub struct SquareMonsterCli {
    /// Level image to play in map-tester mode
    pub level: Option<PathBuf>,

    /// Save-data directory (defaults to the platform data dir)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,
}

/// `-h` is the host here, so help only answers to `--help`
#[derive(Parser, Debug)]
#[command(name = "crusade-of-ages", disable_help_flag = true)]
#[command(about = "Crusade of Ages client")]
pub struct CrusadeCli {
    /// Save-data directory
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Game server host
    #[arg(short = 'h', long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Game server port
    #[arg(short = 'p', long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

/// Terminal logging, Debug in debug builds and Info otherwise
pub fn init_logging() {
    use simplelog::*;

    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let logger = TermLogger::new(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto);
    let _ = CombinedLogger::init(vec![logger]);
}

/// Open the session socket; blocks until connected or refused
pub fn connect(host: &str, port: u16) -> Result<TcpStream, GameError> {
    let addr = format!("{}:{}", host, port);
    let stream = TcpStream::connect((host, port)).map_err(|source| GameError::Connection {
        addr: addr.clone(),
        source,
    })?;
    log::info!("Connected to {}", addr);
    Ok(stream)
}

/// The server address, when the server actively turned the connection down
pub fn refused_addr(err: &GameError) -> Option<&str> {
    match err {
        GameError::Connection { addr, source } if source.kind() == io::ErrorKind::ConnectionRefused => Some(addr.as_str()),
        _ => None,
    }
}
