use std::path::PathBuf;

use crate::loader::SharedLoadState;

#[derive(Clone)]
pub struct AppState {
    pub data: SharedLoadState,
    pub top_size: usize,
    pub static_dir: Option<PathBuf>,
    pub cors_origin: String,
}
