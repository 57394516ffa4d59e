mod manager;
mod persistence;

pub use manager::MenuStore;
pub use persistence::{import_csv, load_menu, save_menu};
