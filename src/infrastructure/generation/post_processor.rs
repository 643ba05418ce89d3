//! Formatter post-processor

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

use crate::generation::{GenerationError, PostProcessor};
use crate::infrastructure::shell::CommandExecutor;

/// Runs an external formatter on the written output file
///
/// The command is split on whitespace into a program and its arguments; the
/// output path is appended as the last argument.
pub struct FormatterPostProcessor {
    executor: Arc<dyn CommandExecutor>,
    command: String,
}

impl FormatterPostProcessor {
    pub fn new(executor: Arc<dyn CommandExecutor>, command: impl Into<String>) -> Self {
        Self {
            executor,
            command: command.into(),
        }
    }
}

#[async_trait]
impl PostProcessor for FormatterPostProcessor {
    async fn process(&self, path: &Path) -> Result<(), GenerationError> {
        let mut parts = self.command.split_whitespace();
        let program = parts.next().ok_or_else(|| {
            GenerationError::InvalidConfiguration("Formatter command is empty".to_string())
        })?;
        let mut args: Vec<String> = parts.map(str::to_string).collect();
        args.push(path.to_string_lossy().to_string());

        let working_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        tracing::info!(command = %self.command, path = %path.display(), "Running formatter");
        let result = self.executor.execute(program, &args, working_dir).await?;

        if result.is_success() {
            if !result.stdout.trim().is_empty() {
                tracing::debug!(command = %self.command, stdout = %result.stdout.trim(), "Formatter output");
            }
            Ok(())
        } else {
            Err(GenerationError::PostProcessingError(format!(
                "'{}' exited with code {}: {}",
                self.command,
                result.exit_code,
                result.stderr.trim()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::shell::MockCommandExecutor;

    #[tokio::test]
    async fn test_formatter_success() {
        let executor = MockCommandExecutor::new().with_result("mix format out/bodh_iot.ex", 0, "", "");
        let processor = FormatterPostProcessor::new(Arc::new(executor), "mix format");

        let result = processor.process(Path::new("out/bodh_iot.ex")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_formatter_failure() {
        let executor =
            MockCommandExecutor::new().with_result("mix format bodh_iot.ex", 1, "", "mix: not found");
        let processor = FormatterPostProcessor::new(Arc::new(executor), "mix format");

        match processor.process(Path::new("bodh_iot.ex")).await {
            Err(GenerationError::PostProcessingError(msg)) => {
                assert!(msg.contains("exited with code 1"));
                assert!(msg.contains("mix: not found"));
            }
            other => panic!("Expected PostProcessingError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_formatter_empty_command() {
        let processor = FormatterPostProcessor::new(Arc::new(MockCommandExecutor::new()), "   ");

        let result = processor.process(Path::new("bodh_iot.ex")).await;
        assert!(matches!(result, Err(GenerationError::InvalidConfiguration(_))));
    }
}
