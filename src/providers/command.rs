use async_trait::async_trait;
use thiserror::Error;

/// A command exited non-zero (or could not be started at all).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{stderr}")]
pub struct CommandFailure {
    pub stderr: String,
}

#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` to completion and return its trimmed stdout.
    async fn run(&self, program: &str, args: &[String]) -> Result<String, CommandFailure>;
}

/// Spawns the command as a child process and waits for it.
pub struct TokioCommandRunner;

#[async_trait]
impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<String, CommandFailure> {
        let output = tokio::process::Command::new(program)
            .args(args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| CommandFailure {
                stderr: format!("failed to run {program}: {e}"),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(CommandFailure { stderr });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(strs: &[&str]) -> Vec<String> {
        strs.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn returns_trimmed_stdout() {
        let out = TokioCommandRunner
            .run("sh", &args(&["-c", "printf '  {\"a\": 1}\\n\\n'"]))
            .await
            .unwrap();
        assert_eq!(out, "{\"a\": 1}");
    }

    #[tokio::test]
    async fn non_zero_exit_carries_trimmed_stderr() {
        let err = TokioCommandRunner
            .run(
                "sh",
                &args(&["-c", "echo ignored; echo ' TF401232: work item does not exist ' >&2; exit 1"]),
            )
            .await
            .unwrap_err();
        assert_eq!(err.stderr, "TF401232: work item does not exist");
    }

    #[tokio::test]
    async fn missing_program_is_a_failure() {
        let err = TokioCommandRunner
            .run("definitely-not-a-real-program-xyz", &[])
            .await
            .unwrap_err();
        assert!(err.stderr.contains("definitely-not-a-real-program-xyz"));
    }
}
