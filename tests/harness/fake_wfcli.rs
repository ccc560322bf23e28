use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// How the fake CLI reacts to `status`.
#[derive(Debug, Clone, Copy)]
pub(crate) enum ClusterBehavior {
    /// Healthy by default; the port-1337 endpoint is refused.
    Healthy,
    /// Every `status` call fails.
    Down,
    /// Exits 0 regardless of the endpoint.
    IgnoresUrl,
    /// Never returns.
    Hangs,
}

/// Shell script installed as `wfcli` that logs its argv and exits per behavior.
pub(crate) struct FakeWfcli {
    pub(crate) path: PathBuf,
    pub(crate) log_file: PathBuf,
}

impl FakeWfcli {
    pub(crate) fn install(bin_dir: &Path, log_dir: &Path, behavior: ClusterBehavior) -> Self {
        let log_file = log_dir.join("wfcli.log");
        let path = bin_dir.join("wfcli");

        let status = match behavior {
            ClusterBehavior::Healthy => {
                r#"case "$URL" in
    *:1337*) echo "dial tcp $URL: connection refused" >&2; exit 1 ;;
    *) echo "cluster healthy"; exit 0 ;;
esac"#
            }
            ClusterBehavior::Down => r#"echo "cluster unavailable" >&2; exit 1"#,
            ClusterBehavior::IgnoresUrl => r#"echo "cluster healthy"; exit 0"#,
            ClusterBehavior::Hangs => "exec sleep 30",
        };

        let script_content = format!(
            r#"#!/bin/sh
echo "$@" >> "{}"

URL="${{FISSION_URL:-}}"
while [ $# -gt 0 ]; do
    case "$1" in
        --url|-u) URL="$2"; shift 2 ;;
        *) break ;;
    esac
done

case "$1" in
    status)
        {}
        ;;
    version)
        echo "wfcli 0.0.0-test"
        exit 0
        ;;
    *)
        echo "unknown command: $1" >&2
        exit 3
        ;;
esac
"#,
            log_file.to_string_lossy(),
            status
        );

        fs::write(&path, script_content).expect("Failed to write wfcli script");

        let mut perms = fs::metadata(&path).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("Failed to set permissions");

        Self { path, log_file }
    }

    /// One line per invocation, holding the arguments after the program name.
    pub(crate) fn invocations(&self) -> Vec<String> {
        fs::read_to_string(&self.log_file)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}
