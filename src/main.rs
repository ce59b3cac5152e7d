use clap::Parser;
use fleet_yaml_converter::utils::{logger, validation::Validate};
use fleet_yaml_converter::{CliConfig, ConvertEngine, LocalStorage, OsqueryPipeline};

fn main() {
    // clap 參數錯誤預設以狀態碼 2 結束，這裡統一為 1
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) => {
            let _ = e.print();
            let code = if e.use_stderr() { 1 } else { 0 };
            std::process::exit(code);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting osquery2fleet");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // 創建存儲和管道
    let storage = LocalStorage::new();
    let pipeline = OsqueryPipeline::new(storage, config);

    // 創建轉換引擎並運行
    let engine = ConvertEngine::new(pipeline);

    match engine.run() {
        Ok(summary) => {
            tracing::info!("✅ Conversion completed successfully!");
            if let Some(path) = &summary.output {
                println!(
                    "✅ Converted {} queries to FleetDM format. Saved to {}.",
                    summary.count, path
                );
            }
        }
        Err(e) => {
            tracing::error!("❌ Conversion failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
