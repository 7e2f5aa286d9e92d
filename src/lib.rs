//! Minecraft 世界维度合并工具
//!
//! Paper 服务端把一个世界拆成三个顶层目录（主世界、下界、末地），
//! 原版加载器无法直接使用。本库按命名约定找到这三个目录，校验后
//! 合并为原版布局的单个世界目录，原始目录保持不变。

pub mod copy;
pub mod discover;
pub mod error;
pub mod merge;
pub mod path;

pub use copy::copy_dir_all;
pub use discover::{discover_worlds, Dimension, DiscoveredWorlds, WorldPaths};
pub use error::{MergeError, Result};
pub use merge::{merge_world, MergeOptions, MergeReport};
pub use path::resolve_path;
