//! Filesystem-based output of the generated source

use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::core::error::Result;

/// Write `content` to `path`, creating parent directories, or to stdout when no path is given
pub async fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    let Some(path) = path else {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(content.as_bytes()).await?;
        if !content.ends_with('\n') {
            stdout.write_all(b"\n").await?;
        }
        stdout.flush().await?;
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    let mut file = fs::File::create(path).await?;
    file.write_all(content.as_bytes()).await?;
    file.flush().await?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote generated code");
    Ok(())
}
