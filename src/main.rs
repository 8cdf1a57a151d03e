use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use log::{info, warn};
use photo_copy::component::PhotoImporter;
use photo_copy::component::photo_importer::{ImportOptions, ImportSummary};
use photo_copy::config::{default_config_path, load_config};
use photo_copy::init;
use photo_copy::tools::MountTable;
use std::path::PathBuf;
use std::process::ExitCode;

/// 從相機記憶卡複製照片
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 目標資料夾名稱
    name: String,

    /// 記憶卡的磁碟標籤
    #[arg(long, default_value = "EOS_DIGITAL")]
    label: String,

    /// 使用者名稱（預設為目前使用者）
    #[arg(long, env = "USER")]
    user: String,

    /// 略過複製後的檢查
    #[arg(long)]
    no_verify: bool,

    /// 設定檔路徑（預設為 ~/.config/photo_copy/config.json）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 目標資料夾的上層目錄（預設為 ~/Photos）
    #[arg(long)]
    dest_root: Option<PathBuf>,

    /// 顯示更詳細的日誌
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init::init(args.verbose);

    let result = run(args, &MountTable::from_system());
    ExitCode::from(exit_status(&result))
}

fn run(args: Args, mount_table: &MountTable) -> Result<ImportSummary> {
    let config_path = args.config.unwrap_or_else(default_config_path);
    let config = load_config(&config_path)?;

    let destination_root = match args.dest_root {
        Some(root) => root,
        None => dirs::home_dir()
            .map(|home| home.join("Photos"))
            .context("無法取得使用者家目錄，請以 --dest-root 指定目標位置")?,
    };

    let options = ImportOptions {
        name: args.name,
        label: args.label,
        user: args.user,
        destination_root,
        verify: !args.no_verify,
    };

    let importer = PhotoImporter::new(config, options);
    Ok(importer.run(mount_table)?)
}

/// 致命錯誤回傳 1；檢查未通過只記錄警告，仍回傳 0
fn exit_status(result: &Result<ImportSummary>) -> u8 {
    match result {
        Ok(summary) => {
            if summary.verification.is_some_and(|report| !report.passed()) {
                warn!("複製結果檢查未通過: {}", summary.destination.display());
            }
            println!("\n{}", style("完成！").green().bold());
            info!("Program exited normally");
            0
        }
        Err(e) => {
            warn!("Program error: {e}");
            eprintln!("{} {}", style("錯誤:").red().bold(), e);
            1
        }
    }
}
