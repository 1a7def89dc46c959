use std::path::PathBuf;

/// Results of file dialogs, which run off the UI thread.
pub enum DialogResult {
    Open { path: PathBuf },
    SaveSnapshot { path: PathBuf },
}
