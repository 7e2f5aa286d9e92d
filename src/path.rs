//! 路径解析与规范化

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{MergeError, Result};

/// 将用户输入的路径解析为规范化的绝对路径
///
/// `~` 与 `~/` 开头的输入展开为用户主目录；相对路径以当前工作目录
/// 为基准。仅做词法规范化，不访问文件系统，也不解析符号链接。
pub fn resolve_path(input: &str) -> Result<PathBuf> {
    if input.is_empty() {
        return Err(MergeError::EmptyPath);
    }

    let expanded = expand_home(input)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        env::current_dir()
            .map_err(MergeError::CurrentDir)?
            .join(expanded)
    };

    Ok(clean(&absolute))
}

/// 展开开头的主目录标记
///
/// 只处理恰好为 `~` 或以 `~/` 开头的输入，其余形式（如 `~user`）
/// 原样返回，不需要主目录。
fn expand_home(input: &str) -> Result<PathBuf> {
    if input == "~" {
        return dirs::home_dir().ok_or(MergeError::HomeDir);
    }
    if let Some(rest) = strip_home_prefix(input) {
        let home = dirs::home_dir().ok_or(MergeError::HomeDir)?;
        return Ok(home.join(rest));
    }
    Ok(PathBuf::from(input))
}

/// 返回 `~/`（Windows 上也接受 `~\`）之后的剩余部分
fn strip_home_prefix(input: &str) -> Option<&str> {
    if let Some(rest) = input.strip_prefix("~/") {
        return Some(rest);
    }
    if cfg!(windows) {
        if let Some(rest) = input.strip_prefix("~\\") {
            return Some(rest);
        }
    }
    None
}

/// 词法规范化：移除 `.`、解析 `..`、折叠多余分隔符
fn clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last_is_normal =
                    matches!(cleaned.components().next_back(), Some(Component::Normal(_)));
                let at_root = matches!(
                    cleaned.components().next_back(),
                    Some(Component::RootDir | Component::Prefix(_))
                );
                if last_is_normal {
                    cleaned.pop();
                } else if !at_root {
                    // 相对路径开头的 `..` 无法消去，保留
                    cleaned.push(Component::ParentDir);
                }
            }
            other => cleaned.push(other),
        }
    }
    if cleaned.as_os_str().is_empty() {
        cleaned.push(Component::CurDir);
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(resolve_path(""), Err(MergeError::EmptyPath)));
    }

    #[test]
    fn tilde_expands_to_home() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(resolve_path("~").unwrap(), clean(&home));
    }

    #[test]
    fn tilde_slash_joins_home() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(resolve_path("~/saves").unwrap(), clean(&home.join("saves")));
    }

    #[test]
    fn tilde_user_passes_through_unchanged() {
        let cwd = env::current_dir().unwrap();
        assert_eq!(resolve_path("~other").unwrap(), cwd.join("~other"));
    }

    #[test]
    fn relative_path_resolves_against_cwd() {
        let cwd = env::current_dir().unwrap();
        assert_eq!(resolve_path("a/../b").unwrap(), cwd.join("b"));
    }

    #[test]
    fn absolute_path_is_cleaned() {
        assert_eq!(
            resolve_path("/tmp//saves/./world/..").unwrap(),
            PathBuf::from("/tmp/saves")
        );
    }

    #[test]
    fn parent_of_root_is_root() {
        assert_eq!(resolve_path("/..").unwrap(), PathBuf::from("/"));
    }

    #[test]
    fn clean_keeps_leading_parent_for_relative_input() {
        assert_eq!(clean(Path::new("../a")), PathBuf::from("../a"));
        assert_eq!(clean(Path::new("a/..")), PathBuf::from("."));
    }
}
