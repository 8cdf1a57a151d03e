use super::copy_engine::{CopyReport, copy_with_progress};
use super::date_deriver::get_earliest_photo_date;
use super::destination_builder::{build_destination, setup_destination};
use super::mount_resolver::find_mount_point;
use super::source_discovery::find_photo_directories;
use super::verifier::{VerificationReport, verify_copy};
use crate::config::Config;
use crate::error::ImportResult;
use crate::tools::{ExtensionFilter, MountTable};
use console::style;
use log::info;
use std::path::PathBuf;

/// 單次匯入的執行參數（來自命令列）
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// 目標資料夾名稱的自訂部分
    pub name: String,
    pub label: String,
    pub user: String,
    /// 目標資料夾的上層目錄
    pub destination_root: PathBuf,
    pub verify: bool,
}

#[derive(Debug, Clone)]
pub struct ImportSummary {
    pub destination: PathBuf,
    pub copy_report: CopyReport,
    pub verification: Option<VerificationReport>,
}

/// 從記憶卡匯入照片的元件
pub struct PhotoImporter {
    config: Config,
    options: ImportOptions,
}

impl PhotoImporter {
    pub const fn new(config: Config, options: ImportOptions) -> Self {
        Self { config, options }
    }

    pub fn run(&self, mount_table: &MountTable) -> ImportResult<ImportSummary> {
        let filter = ExtensionFilter::new(&self.config.photo_extensions);

        let mount_point = find_mount_point(
            &self.config,
            &self.options.label,
            &self.options.user,
            mount_table,
        )?;
        println!("找到記憶卡: {}", style(mount_point.display()).cyan());

        let photo_dirs = find_photo_directories(&mount_point, &self.config.source_patterns)?;
        println!("找到 {} 個照片資料夾", style(photo_dirs.len()).cyan());

        let date = get_earliest_photo_date(&photo_dirs, &filter)?;
        println!("最早的照片日期: {}", style(&date).cyan());

        let destination = build_destination(
            &self.config,
            &self.options.destination_root,
            &date,
            &self.options.name,
        )?;
        println!("照片將複製到: {}", style(destination.display()).cyan());

        setup_destination(&destination, &self.config.subfolders)?;

        let copy_report = copy_with_progress(&photo_dirs, &destination, &filter);
        self.print_copy_result(&copy_report);

        let verification = (copy_report.completed() && self.options.verify).then(|| {
            let report = verify_copy(&photo_dirs, &destination, &filter);
            self.print_verification(&report);
            report
        });

        info!(
            "匯入完成 - 目標: {}, 複製: {}, 失敗: {}",
            destination.display(),
            copy_report.copied_count(),
            copy_report.failures().count()
        );

        Ok(ImportSummary {
            destination,
            copy_report,
            verification,
        })
    }

    fn print_copy_result(&self, report: &CopyReport) {
        if !report.completed() {
            println!("{}", style("沒有可複製的檔案！").yellow());
            return;
        }

        println!();
        println!("{}", style("=== 複製結果 ===").cyan().bold());
        println!("  成功: {} 個", style(report.copied_count()).green());

        let failures: Vec<_> = report.failures().collect();
        if !failures.is_empty() {
            println!("  失敗: {} 個", style(failures.len()).red());
            for (source, reason) in failures {
                println!("    {} {}: {reason}", style("•").dim(), source.display());
            }
        }
    }

    fn print_verification(&self, report: &VerificationReport) {
        println!();
        println!("{}", style("=== 複製結果檢查 ===").cyan().bold());
        println!(
            "  檔案數量 - 來源: {}, 目標: {}",
            report.source.count, report.destination.count
        );
        println!(
            "  總大小 - 來源: {:.2} MB, 目標: {:.2} MB",
            report.source.total_megabytes(),
            report.destination.total_megabytes()
        );

        if !report.count_matches() {
            println!(
                "{}",
                style(format!(
                    "警告: 檔案數量不一致 ({} vs {})",
                    report.source.count, report.destination.count
                ))
                .yellow()
            );
        }

        if !report.size_matches() {
            println!(
                "{}",
                style(format!(
                    "警告: 總大小不一致 ({} vs {} bytes)",
                    report.source.total_bytes, report.destination.total_bytes
                ))
                .yellow()
            );
        }

        if report.passed() {
            println!("{}", style("✓ 所有檔案皆已複製，檢查通過").green());
        }
    }
}
