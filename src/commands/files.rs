//! `codedoc files` command: dry-run listing of the files a generate run
//! would document.

use std::path::Path;

use crate::config::FilterConfig;
use crate::context::ServiceContext;
use crate::filter::PathFilter;
use crate::walk;

/// Execute the `files` command against the given context.
///
/// # Errors
///
/// Returns an error string if the directory walk fails.
pub fn run_with_context(ctx: &ServiceContext, root: &Path) -> Result<(), String> {
    let filter = PathFilter::new(FilterConfig::default());
    let entries = walk::collect_source_files(ctx, root, &filter)?;

    if entries.is_empty() {
        println!("no source files matched the filter");
    } else {
        for entry in &entries {
            println!("{}", entry.display_path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn files_command_runs_against_a_cassette() {
        let dir = std::env::temp_dir().join("codedoc_files_cmd_test");
        std::fs::create_dir_all(&dir).unwrap();
        let cassette = Cassette {
            name: "files".into(),
            recorded_at: Utc::now(),
            interactions: vec![
                Interaction {
                    seq: 0,
                    port: "fs".into(),
                    method: "list_dir".into(),
                    input: json!({"path": "/p"}),
                    output: json!({"ok": ["app"]}),
                },
                Interaction {
                    seq: 1,
                    port: "fs".into(),
                    method: "is_dir".into(),
                    input: json!({"path": "/p/app"}),
                    output: json!(true),
                },
                Interaction {
                    seq: 2,
                    port: "fs".into(),
                    method: "list_dir".into(),
                    input: json!({"path": "/p/app"}),
                    output: json!({"ok": ["a.py"]}),
                },
                Interaction {
                    seq: 3,
                    port: "fs".into(),
                    method: "is_dir".into(),
                    input: json!({"path": "/p/app/a.py"}),
                    output: json!(false),
                },
            ],
        };
        let path = dir.join("files.cassette.yaml");
        std::fs::write(&path, serde_yaml::to_string(&cassette).unwrap()).unwrap();

        let ctx = ServiceContext::replaying(&path).unwrap();
        assert!(run_with_context(&ctx, Path::new("/p")).is_ok());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
