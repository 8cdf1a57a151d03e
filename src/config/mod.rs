pub mod load;
pub mod save;
pub mod types;

pub use load::load_config;
pub use save::{default_config_path, save_config};
pub use types::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, Config};
