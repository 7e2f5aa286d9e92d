//! 目录树的递归复制

use std::fs;
use std::io;
use std::path::Path;

use tracing::trace;
use walkdir::WalkDir;

/// 将 src 目录树完整复制到 dst，返回复制的文件数量
///
/// 保持相对结构不变；普通文件通过 `fs::copy` 复制（保留权限位），
/// 符号链接不跟随。遇到第一个错误立即停止，已复制的内容保留。
/// 调用方保证 dst 为空或不存在，因此不存在覆盖问题。
pub fn copy_dir_all(src: &Path, dst: &Path) -> io::Result<u64> {
    let mut copied = 0u64;

    for entry in WalkDir::new(src).follow_links(false) {
        let entry = entry?;
        let relative = match entry.path().strip_prefix(src) {
            Ok(relative) => relative,
            Err(_) => continue,
        };
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            trace!(file = %relative.display(), "复制文件");
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn copies_nested_tree() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("region")).unwrap();
        fs::write(src.join("level.dat"), b"level").unwrap();
        fs::write(src.join("region").join("r.0.0.mca"), b"region").unwrap();
        fs::create_dir(src.join("empty")).unwrap();

        let dst = dir.path().join("dst");
        let copied = copy_dir_all(&src, &dst).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(fs::read(dst.join("level.dat")).unwrap(), b"level");
        assert_eq!(
            fs::read(dst.join("region").join("r.0.0.mca")).unwrap(),
            b"region"
        );
        assert!(dst.join("empty").is_dir());
    }

    #[test]
    fn counts_only_files() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("a").join("b")).unwrap();
        fs::write(src.join("a").join("b").join("data"), b"x").unwrap();

        let copied = copy_dir_all(&src, &dir.path().join("dst")).unwrap();
        assert_eq!(copied, 1);
    }

    #[test]
    fn missing_source_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = copy_dir_all(&dir.path().join("nope"), &dir.path().join("dst"));
        assert!(result.is_err());
    }
}
