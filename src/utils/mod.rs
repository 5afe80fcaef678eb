// Shared utils: constants, i18n catalog and storage helpers

pub mod constants;
pub mod i18n;
pub mod storage;

pub use constants::*;
pub use i18n::{replace_params, Catalog, Locale};
pub use storage::{load_from_storage, remove_from_storage, save_to_storage, KeyValueStorage, MemoryStorage, SharedStorage};
