mod extension_filter;
mod file_copier;
mod file_scanner;
mod mount_table;
mod path_validator;
mod template;

pub use extension_filter::ExtensionFilter;
pub use file_copier::copy_preserving_metadata;
pub use file_scanner::{FileInventory, PhotoFile, scan_photo_files};
pub use mount_table::MountTable;
pub use path_validator::ensure_directory_exists;
pub use template::render_template;
