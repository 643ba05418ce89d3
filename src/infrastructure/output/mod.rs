//! Output service implementations

pub mod filesystem_output;

pub use filesystem_output::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::OutputService;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_filesystem_output_write_document() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_service = FileSystemOutputService::new();
        let path = temp_dir.path().join("lib/bodh_iot.ex");

        output_service
            .write_document(&path, "defmodule Bodh.Iot do\nend\n")
            .await
            .unwrap();

        let content = std::fs::read_to_string(&path).expect("Failed to read output");
        assert_eq!(content, "defmodule Bodh.Iot do\nend\n");
    }

    #[tokio::test]
    async fn test_filesystem_output_overwrites() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_service = FileSystemOutputService::new();
        let path = temp_dir.path().join("bodh_iot.ex");

        output_service.write_document(&path, "first").await.unwrap();
        output_service.write_document(&path, "second").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }

    #[tokio::test]
    async fn test_filesystem_output_ensure_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_service = FileSystemOutputService::new();
        let nested_path = temp_dir.path().join("deeply/nested/directory");

        output_service.ensure_directory(&nested_path).await.unwrap();

        assert!(nested_path.is_dir());
    }
}
