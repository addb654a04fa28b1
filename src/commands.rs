//! The CLI commands.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::store::ItemKind;

pub mod delete;
pub mod init;
pub mod list;
pub mod load;
pub mod render;
pub mod save;
pub mod serve;

/// The working file a kind of item round-trips through when saving
/// and loading.
pub(crate) fn working_file(config: &Config, base: &Path, kind: ItemKind) -> PathBuf {
    match kind {
        ItemKind::Template => config.files.template_path(base),
        ItemKind::Data => config.files.data_path(base),
    }
}
