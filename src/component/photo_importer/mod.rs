//! 記憶卡照片匯入元件
//!
//! 找到記憶卡掛載點，依最早照片日期建立目標資料夾，複製照片後檢查數量與大小

mod copy_engine;
mod date_deriver;
mod destination_builder;
mod main;
mod mount_resolver;
mod source_discovery;
mod verifier;

pub use copy_engine::{CopyOutcome, CopyReport, copy_with_progress};
pub use date_deriver::get_earliest_photo_date;
pub use destination_builder::{build_destination, setup_destination};
pub use main::{ImportOptions, ImportSummary, PhotoImporter};
pub use mount_resolver::find_mount_point;
pub use source_discovery::find_photo_directories;
pub use verifier::{VerificationReport, verify_copy};
