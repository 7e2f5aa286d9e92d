//! 维度目录的发现与校验

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{MergeError, Result};

/// Minecraft 的三个维度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// 主世界
    Overworld,
    /// 下界
    Nether,
    /// 末地
    End,
}

impl Dimension {
    /// Paper 为该维度生成的顶层目录名
    pub fn dir_name(self, prefix: &str) -> String {
        match self {
            Dimension::Overworld => prefix.to_string(),
            Dimension::Nether => format!("{}_nether", prefix),
            Dimension::End => format!("{}_the_end", prefix),
        }
    }

    /// 日志字段中使用的稳定标识
    pub const fn as_str(self) -> &'static str {
        match self {
            Dimension::Overworld => "overworld",
            Dimension::Nether => "nether",
            Dimension::End => "the_end",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Overworld => "主世界",
            Dimension::Nether => "下界",
            Dimension::End => "末地",
        };
        f.write_str(name)
    }
}

/// 发现阶段按维度收集到的候选目录名
///
/// 每个维度的列表顺序与目录遍历顺序一致。校验要求每个列表恰好
/// 一个元素：多于一个是配置错误，为空则是维度缺失。
#[derive(Debug, Default)]
pub struct DiscoveredWorlds {
    pub world: Vec<String>,
    pub nether: Vec<String>,
    pub end: Vec<String>,
}

/// 校验通过后的三个维度目录完整路径，构造后不再变化
#[derive(Debug)]
pub struct WorldPaths {
    pub world: PathBuf,
    pub nether: PathBuf,
    pub end: PathBuf,
}

/// 在 base 下按目录名精确匹配三个维度目录
///
/// 只考虑目录本身：普通文件与符号链接一律跳过。匹配区分大小写，
/// 必须与计算出的维度目录名完全相等。
pub fn discover_worlds(base: &Path, prefix: &str) -> Result<DiscoveredWorlds> {
    let world_name = Dimension::Overworld.dir_name(prefix);
    let nether_name = Dimension::Nether.dir_name(prefix);
    let end_name = Dimension::End.dir_name(prefix);

    let entries = fs::read_dir(base).map_err(|source| MergeError::ReadDir {
        path: base.to_path_buf(),
        source,
    })?;

    let mut discovered = DiscoveredWorlds::default();

    for entry in entries {
        let entry = entry.map_err(|source| MergeError::ReadDir {
            path: base.to_path_buf(),
            source,
        })?;
        let file_type = entry.file_type().map_err(|source| MergeError::ReadDir {
            path: entry.path(),
            source,
        })?;
        let name = entry.file_name();
        // 维度目录名总是 UTF-8，非 UTF-8 条目不可能匹配
        let name = match name.to_str() {
            Some(name) => name,
            None => continue,
        };
        if !file_type.is_dir() {
            debug!(entry = name, "跳过非目录条目");
            continue;
        }
        if name == world_name {
            discovered.world.push(name.to_string());
        } else if name == nether_name {
            discovered.nether.push(name.to_string());
        } else if name == end_name {
            discovered.end.push(name.to_string());
        } else {
            debug!(entry = name, "目录名不匹配任何维度");
        }
    }

    Ok(discovered)
}

impl DiscoveredWorlds {
    /// 按固定顺序校验发现结果，产出三个维度的完整路径
    ///
    /// 先检查任一维度是否出现重复候选，再依次检查主世界、下界、
    /// 末地是否缺失；第一条被违反的规则决定返回的错误。
    pub fn validate(self, base: &Path, prefix: &str) -> Result<WorldPaths> {
        for (dimension, candidates) in [
            (Dimension::Overworld, &self.world),
            (Dimension::Nether, &self.nether),
            (Dimension::End, &self.end),
        ] {
            if candidates.len() > 1 {
                return Err(MergeError::AmbiguousWorld {
                    name: dimension.dir_name(prefix),
                });
            }
        }

        let world = self
            .world
            .into_iter()
            .next()
            .ok_or_else(|| MergeError::WorldNotFound {
                name: Dimension::Overworld.dir_name(prefix),
            })?;
        let nether = self
            .nether
            .into_iter()
            .next()
            .ok_or_else(|| MergeError::NetherNotFound {
                name: Dimension::Nether.dir_name(prefix),
            })?;
        let end = self
            .end
            .into_iter()
            .next()
            .ok_or_else(|| MergeError::EndNotFound {
                name: Dimension::End.dir_name(prefix),
            })?;

        Ok(WorldPaths {
            world: base.join(world),
            nether: base.join(nether),
            end: base.join(end),
        })
    }
}
