//! Paths command handler.
//!
//! Displays the resolved data directory and backend for diagnostics.

use fueltrack_db::StorageBackend;

use crate::bootstrap::CliContext;

/// Execute the paths command.
///
/// Prints `key = value` lines for the data root, how it was chosen, and the
/// location the active backend reads from.
pub fn execute(ctx: &CliContext) {
    for (key, value) in lines(ctx) {
        println!("{key} = {value}");
    }
}

fn lines(ctx: &CliContext) -> Vec<(&'static str, String)> {
    let root = &ctx.data_root;
    let storage = match ctx.backend {
        StorageBackend::Sqlite => root.database_path(),
        StorageBackend::Json => root.snapshot_dir(),
    };
    vec![
        ("data_dir", root.path.display().to_string()),
        ("data_dir_source", root.source.as_str().to_string()),
        ("backend", ctx.backend.to_string()),
        ("storage", storage.display().to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::json_context;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_lines_point_at_snapshot_dir() {
        let temp = tempdir().unwrap();
        let ctx = json_context(temp.path()).await;

        let lines = lines(&ctx);
        assert_eq!(lines[2], ("backend", "json".to_string()));
        assert_eq!(
            lines[3].1,
            temp.path().join("snapshots").display().to_string()
        );
    }
}
