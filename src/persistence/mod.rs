pub mod files;
pub mod settings;
pub mod state;

pub use files::{
    atomic_write, ensure_durpad_dir, get_durpad_dir, init_local_durpad, read_file, settings_file,
    state_file,
};
pub use settings::{load_settings, save_settings, Settings};
pub use state::{load_state, save_state, SavedState};
