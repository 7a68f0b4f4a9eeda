//! Bash adapter for the shell port.
//!
//! The script is written to the shell's stdin; stderr is merged into stdout
//! so the captured output keeps the interleaving the user would see.

use std::{path::PathBuf, process::Stdio};

use async_trait::async_trait;

use tokio::{io::AsyncWriteExt, process::Command};

use tsh_core::{
    errors::Error,
    shell::{ShellOutput, ShellPort},
    Result,
};

/// Prepended to every script so both streams share one pipe.
const MERGE_STDERR: &str = "exec 2>&1\n";

#[derive(Clone, Debug)]
pub struct BashShell {
    bash_path: PathBuf,
}

impl BashShell {
    pub fn new(bash_path: impl Into<PathBuf>) -> Self {
        Self {
            bash_path: bash_path.into(),
        }
    }
}

#[async_trait]
impl ShellPort for BashShell {
    async fn execute(&self, script: &str) -> Result<ShellOutput> {
        tracing::debug!(bash = %self.bash_path.display(), "running script");

        let mut child = Command::new(&self.bash_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                Error::External(format!(
                    "failed to execute command: cannot start {}: {e}",
                    self.bash_path.display()
                ))
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| Error::External("bash stdin was not captured".to_string()))?;
        let input = format!("{MERGE_STDERR}{script}\n");
        // The shell may exit before reading everything; that's its answer, not ours.
        if let Err(e) = stdin.write_all(input.as_bytes()).await {
            tracing::debug!(error = %e, "bash closed stdin early");
        }
        drop(stdin);

        let out = child.wait_with_output().await?;
        let output = String::from_utf8_lossy(&out.stdout).into_owned();
        let error = if out.status.success() {
            None
        } else {
            Some(format!("failed to execute command: {}", out.status))
        };

        Ok(ShellOutput { output, error })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn shell() -> BashShell {
        BashShell::new("/bin/bash")
    }

    #[tokio::test]
    async fn captures_stdout() {
        let out = shell().execute("echo hello").await.unwrap();
        assert_eq!(out.output, "hello\n");
        assert_eq!(out.error, None);
    }

    #[tokio::test]
    async fn merges_stderr_in_order() {
        let out = shell()
            .execute("echo one; echo two 1>&2; echo three")
            .await
            .unwrap();
        assert_eq!(out.output, "one\ntwo\nthree\n");
    }

    #[tokio::test]
    async fn runs_multiline_scripts() {
        let out = shell().execute("x=4\necho $((x * 2))").await.unwrap();
        assert_eq!(out.output, "8\n");
    }

    #[tokio::test]
    async fn non_zero_exit_is_an_error_with_output() {
        let out = shell().execute("echo partial; exit 3").await.unwrap();
        assert_eq!(out.output, "partial\n");
        let err = out.error.expect("exit status reported");
        assert!(err.starts_with("failed to execute command"), "{err}");
        assert!(err.contains('3'), "{err}");
    }

    #[tokio::test]
    async fn missing_binary_fails() {
        let err = BashShell::new("/nonexistent/bash")
            .execute("true")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::External(_)));
    }
}
