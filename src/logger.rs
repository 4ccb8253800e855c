use anyhow::Result;
use log::Level;
use simple_logger::init_with_level;

pub const DEFAULT_LEVEL: Level = Level::Info;

pub fn init(level: Level) -> Result<()> {
    init_with_level(level)?;
    log::debug!("logger initialized at {}", level);

    Ok(())
}
