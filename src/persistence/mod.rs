pub mod config;
pub mod files;
pub mod storage;

pub use config::{init_config, load_config, AppConfig};
pub use files::{
    atomic_write, config_file, ensure_data_dir, get_data_dir, init_local_data_dir, log_file,
};
pub use storage::{FileStorage, MemoryStorage, Storage};
