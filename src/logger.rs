use anyhow::Result;
use anyhow::anyhow;
use ftail::Ftail;
use log::LevelFilter;
use log::info;
use std::env;
use std::fs;

const LOGS_DIR: &str = ".logs";
const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Console gets warnings only; the full run log goes to
/// ~/.logs/clippings/clippings.log.
pub fn init_logger() -> Result<()> {
    let home_folder = match env::home_dir() {
        Some(h) => h,
        None => return Err(anyhow!("Could not determine $HOME")),
    };

    let logs_path = home_folder.join(LOGS_DIR).join(PKG_NAME);
    let logs_file = logs_path.join(format!("{}.log", PKG_NAME));

    // Idempotent, so it's fine to run every time
    fs::create_dir_all(&logs_path)
        .map_err(|e| anyhow!("Could not create logs dir at {:#?}: {}", &logs_path, e))?;

    match Ftail::new()
        .console(LevelFilter::Warn)
        .single_file(&logs_file, true, LevelFilter::Info)
        .init()
    {
        Ok(_) => {
            info!("Logger initialized.");
            Ok(())
        }
        Err(e) => Err(anyhow!("Could not initialize logger: {}", e)),
    }
}
