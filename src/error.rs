//! 错误类型定义

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::discover::Dimension;

/// 合并流程中可能出现的错误
#[derive(Debug, Error)]
pub enum MergeError {
    /// 输入路径为空
    #[error("路径不能为空")]
    EmptyPath,

    /// 展开 `~` 时无法确定用户主目录
    #[error("无法确定用户主目录")]
    HomeDir,

    /// 无法获取当前工作目录
    #[error("无法获取当前工作目录: {0}")]
    CurrentDir(#[source] io::Error),

    /// 基础目录不可读
    #[error("无法读取目录 {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 同一维度出现多个候选目录
    #[error("找到多个名为 `{name}` 的目录，无法确定要合并哪一个")]
    AmbiguousWorld { name: String },

    /// 未找到主世界目录
    #[error("未找到主世界目录 (寻找 `{name}`)")]
    WorldNotFound { name: String },

    /// 未找到下界目录
    #[error("未找到下界目录 (寻找 `{name}`)")]
    NetherNotFound { name: String },

    /// 未找到末地目录
    #[error("未找到末地目录 (寻找 `{name}`)")]
    EndNotFound { name: String },

    /// 输出目录已存在
    #[error("输出目录已存在: {}，请先移除后重试", .path.display())]
    OutputExists { path: PathBuf },

    /// 无法创建输出目录
    #[error("无法创建输出目录 {}: {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 维度数据复制失败
    #[error("复制{dimension}数据失败 ({}): {source}", .path.display())]
    Copy {
        dimension: Dimension,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// 本 crate 的 Result 别名
pub type Result<T> = std::result::Result<T, MergeError>;
