use std::path::Path;

use anyhow::Context;
use bytes::Bytes;
use time::OffsetDateTime;

/// Write an uploaded file into `dir` under `<millis>-<original filename>`
/// and return the generated filename. The original name is reduced to its
/// final path component so a crafted filename cannot escape the directory.
pub async fn store_photo(dir: &Path, original_name: &str, body: Bytes) -> anyhow::Result<String> {
    let base = Path::new(original_name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload");

    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    let filename = format!("{millis}-{base}");

    let path = dir.join(&filename);
    tokio::fs::write(&path, &body)
        .await
        .with_context(|| format!("write upload {}", path.display()))?;

    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stores_bytes_under_timestamped_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        let body = Bytes::from_static(b"\x89PNG\r\n\x1a\nrest");

        let filename = store_photo(dir.path(), "portrait.png", body.clone())
            .await
            .expect("store photo");

        let (prefix, rest) = filename.split_once('-').expect("timestamp prefix");
        assert!(prefix.parse::<i128>().is_ok(), "prefix not numeric: {prefix}");
        assert_eq!(rest, "portrait.png");

        let stored = std::fs::read(dir.path().join(&filename)).expect("read back");
        assert_eq!(stored, body.as_ref());
    }

    #[tokio::test]
    async fn strips_path_components_from_original_name() {
        let dir = tempfile::tempdir().expect("tempdir");

        let filename = store_photo(dir.path(), "../../etc/passwd", Bytes::from_static(b"x"))
            .await
            .expect("store photo");

        assert!(filename.ends_with("-passwd"));
        assert!(!filename.contains('/'));
        assert!(dir.path().join(&filename).is_file());
    }

    #[tokio::test]
    async fn empty_original_name_falls_back() {
        let dir = tempfile::tempdir().expect("tempdir");

        let filename = store_photo(dir.path(), "", Bytes::from_static(b"x"))
            .await
            .expect("store photo");

        assert!(filename.ends_with("-upload"));
    }

    #[tokio::test]
    async fn unwritable_dir_is_an_error() {
        let err = store_photo(
            Path::new("/definitely/not/a/dir"),
            "a.png",
            Bytes::from_static(b"x"),
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("write upload"));
    }
}
