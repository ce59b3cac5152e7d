use clap::Parser;
use fleet_yaml_converter::domain::ports::ConfigProvider;
use fleet_yaml_converter::utils::validation::{validate_path, Validate};
use fleet_yaml_converter::utils::{error::Result, logger};
use fleet_yaml_converter::{ConvertEngine, LocalStorage, SqlPipeline};

#[derive(Debug, Clone, Parser)]
#[command(name = "sql2fleet")]
#[command(about = "Extract SQL statements from a file and wrap them in FleetDM YAML")]
struct Args {
    /// Path to the SQL source file
    input: String,

    /// Path for the generated FleetDM YAML file
    output: String,

    #[arg(short, long, help = "Enable verbose output")]
    verbose: bool,
}

impl ConfigProvider for Args {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }
}

impl Validate for Args {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("output", &self.output)?;
        Ok(())
    }
}

fn main() {
    // clap 參數錯誤預設以狀態碼 2 結束，這裡統一為 1
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            let code = if e.use_stderr() { 1 } else { 0 };
            std::process::exit(code);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting sql2fleet");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    // 驗證配置
    if let Err(e) = args.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // 創建存儲和管道
    let storage = LocalStorage::new();
    let pipeline = SqlPipeline::new(storage, args);

    // 創建轉換引擎並運行
    let engine = ConvertEngine::new(pipeline);

    match engine.run() {
        Ok(summary) => match &summary.output {
            Some(path) => {
                tracing::info!("✅ Conversion completed successfully!");
                println!(
                    "✅ Converted {} queries to FleetDM format. Saved to {}.",
                    summary.count, path
                );
            }
            None => {
                println!("No valid queries found in the SQL file.");
            }
        },
        Err(e) => {
            tracing::error!("❌ Conversion failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
