use clap::Parser;
use smartec_validations::utils::logger;
use smartec_validations::{CliConfig, ValidationConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入配置 (未指定時使用預設值)
    let config = match &cli.config {
        Some(path) => match ValidationConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path.display(), e);
                std::process::exit(2);
            }
        },
        None => ValidationConfig::default(),
    };

    // 初始化日誌
    if config.logging.json {
        logger::init_json_logger(&config.logging.level);
    } else {
        logger::init_cli_logger(cli.verbose, &config.logging.level);
    }
    tracing::debug!("CLI args: {:?}", cli);

    let outcome = cli.command.run(&config);

    if cli.json {
        println!("{}", serde_json::to_string(&outcome)?);
    } else {
        match &outcome.value {
            Some(value) => println!("{}", value),
            None => eprintln!("❌ invalid input"),
        }
    }

    if !outcome.valid {
        std::process::exit(1);
    }

    Ok(())
}
