//! 世界合并的编排流程

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::copy::copy_dir_all;
use crate::discover::{discover_worlds, Dimension};
use crate::error::{MergeError, Result};
use crate::path::resolve_path;

/// Paper 下界数据在维度目录内的子目录名
const NETHER_DATA_DIR: &str = "DIM-1";
/// Paper 末地数据在维度目录内的子目录名
const END_DATA_DIR: &str = "DIM1";
/// 合并结果中需要移除的 Paper 专属配置文件
const PAPER_WORLD_FILE: &str = "paper-world.yml";

/// 一次合并运行的全部输入，在启动时构造完成
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// 包含被拆分世界目录的基础目录；None、`.`、`./` 表示当前目录
    pub path: Option<String>,
    /// 世界目录名前缀
    pub prefix: String,
}

/// 合并成功后的结果汇总
#[derive(Debug)]
pub struct MergeReport {
    /// 合并产物所在目录
    pub output_dir: PathBuf,
    /// 主世界复制的文件数
    pub world_files: u64,
    /// 下界复制的文件数
    pub nether_files: u64,
    /// 末地复制的文件数
    pub end_files: u64,
}

impl MergeReport {
    /// 三个维度合计复制的文件数
    pub fn total_files(&self) -> u64 {
        self.world_files + self.nether_files + self.end_files
    }
}

/// 将拆分的三个维度目录合并为单个原版布局的世界
///
/// 流程严格按序执行：解析基础目录、发现维度目录、校验、创建
/// `vanilla_<prefix>` 输出目录、复制三个维度、移除 paper-world.yml。
/// 除最后的清理步骤外，任何一步失败都会终止整个流程；已产生的
/// 部分输出不会回滚，由调用方根据错误决定是否删除重试。
pub fn merge_world(options: &MergeOptions) -> Result<MergeReport> {
    let base_dir = resolve_base_dir(options.path.as_deref())?;

    info!(
        path = %base_dir.display(),
        prefix = %options.prefix,
        "开始搜索世界目录"
    );

    let discovered = discover_worlds(&base_dir, &options.prefix)?;
    let worlds = discovered.validate(&base_dir, &options.prefix)?;

    info!(
        world = %worlds.world.display(),
        nether = %worlds.nether.display(),
        the_end = %worlds.end.display(),
        "已找到全部维度目录"
    );

    let output_dir = base_dir.join(format!("vanilla_{}", options.prefix));
    create_output_dir(&output_dir)?;

    info!(
        from = %worlds.world.display(),
        to = %output_dir.display(),
        "复制主世界数据"
    );
    let world_files = copy_dir_all(&worlds.world, &output_dir).map_err(|source| {
        MergeError::Copy {
            dimension: Dimension::Overworld,
            path: worlds.world.clone(),
            source,
        }
    })?;

    let nether_src = worlds.nether.join(NETHER_DATA_DIR);
    let nether_dst = output_dir.join(NETHER_DATA_DIR);
    info!(
        from = %nether_src.display(),
        to = %nether_dst.display(),
        "复制下界数据"
    );
    let nether_files = copy_dir_all(&nether_src, &nether_dst).map_err(|source| {
        MergeError::Copy {
            dimension: Dimension::Nether,
            path: nether_src.clone(),
            source,
        }
    })?;

    let end_src = worlds.end.join(END_DATA_DIR);
    let end_dst = output_dir.join(END_DATA_DIR);
    info!(
        from = %end_src.display(),
        to = %end_dst.display(),
        "复制末地数据"
    );
    let end_files = copy_dir_all(&end_src, &end_dst).map_err(|source| MergeError::Copy {
        dimension: Dimension::End,
        path: end_src.clone(),
        source,
    })?;

    remove_paper_world_file(&output_dir);

    Ok(MergeReport {
        output_dir,
        world_files,
        nether_files,
        end_files,
    })
}

/// 解析基础目录：未指定、`.`、`./` 使用当前工作目录
fn resolve_base_dir(input: Option<&str>) -> Result<PathBuf> {
    match input {
        None | Some(".") | Some("./") => env::current_dir().map_err(MergeError::CurrentDir),
        Some(path) => resolve_path(path),
    }
}

/// 创建输出目录；目录已存在视为致命错误，绝不合并进已有内容
fn create_output_dir(path: &Path) -> Result<()> {
    info!(dir = %path.display(), "创建原版世界输出目录");
    fs::create_dir(path).map_err(|source| {
        if source.kind() == io::ErrorKind::AlreadyExists {
            MergeError::OutputExists {
                path: path.to_path_buf(),
            }
        } else {
            MergeError::CreateOutput {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// 移除合并结果根目录下的 paper-world.yml；失败只记录警告
fn remove_paper_world_file(output_dir: &Path) {
    let path = output_dir.join(PAPER_WORLD_FILE);
    debug!(file = %path.display(), "移除 Paper 专属配置文件");
    if let Err(e) = fs::remove_file(&path) {
        warn!(file = %path.display(), "未能移除 {}: {}", PAPER_WORLD_FILE, e);
    }
}
