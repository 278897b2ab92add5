use dotenv::dotenv;
use log::{error, info};
use std::env;
use std::error;
use std::io;

use sandesh_webs::cli;
use sandesh_webs::config::ConfigManager;
use sandesh_webs::logger;

const CONFIG_ENV: &str = "SANDESH_WEBS_CONFIG";

fn main() {
    dotenv().ok(); // 加载 .env 文件
    logger::init_logger();

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn load_config() -> Result<ConfigManager, Box<dyn error::Error>> {
    match env::var(CONFIG_ENV) {
        Ok(path) => {
            info!("Loading configuration from {}", path);
            Ok(ConfigManager::load_from_file(&path)?)
        }
        Err(_) => Ok(ConfigManager::new()),
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn error::Error>> {
    let manager = load_config()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli::run(args, manager.get_config(), io::stdin().lock(), &mut out)?;
    Ok(())
}
