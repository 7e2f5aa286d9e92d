//! Minecraft 世界维度合并工具

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info, warn};

use mcmerge::{merge_world, MergeOptions};

/// 把被 Paper 拆分的 Minecraft 世界重新合并为单个原版世界
#[derive(Parser)]
#[command(name = "mcmerge", version, about)]
struct Cli {
    /// 包含被拆分世界目录的路径（默认为当前目录）
    path: Option<String>,

    /// 世界目录名前缀
    #[arg(short, long, default_value = "world")]
    prefix: String,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let max_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_target(false)
        .without_time()
        .with_max_level(max_level)
        .compact()
        .init();

    debug!(version = env!("CARGO_PKG_VERSION"), "运行 mcmerge");

    let options = MergeOptions {
        path: cli.path,
        prefix: cli.prefix,
    };

    let report = merge_world(&options)?;

    info!(
        output = %report.output_dir.display(),
        files = report.total_files(),
        "世界合并完成"
    );
    warn!("在确认合并后的世界包含全部三个维度的数据之前，请勿删除原始的 Paper 世界目录");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_arguments() {
        let cli = Cli::try_parse_from(["mcmerge"]).unwrap();
        assert!(cli.path.is_none());
        assert_eq!(cli.prefix, "world");
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_path_and_short_flags() {
        let cli = Cli::try_parse_from(["mcmerge", "server-files", "-p", "smp", "-v"]).unwrap();
        assert_eq!(cli.path.as_deref(), Some("server-files"));
        assert_eq!(cli.prefix, "smp");
        assert!(cli.verbose);
    }

    #[test]
    fn parse_long_flags() {
        let cli = Cli::try_parse_from(["mcmerge", "--prefix", "smp", "--verbose"]).unwrap();
        assert_eq!(cli.prefix, "smp");
        assert!(cli.verbose);
    }

    #[test]
    fn reject_second_positional() {
        assert!(Cli::try_parse_from(["mcmerge", "a", "b"]).is_err());
    }
}
