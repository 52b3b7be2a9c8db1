//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `rename`: 按清单批量重命名/移动
//! - `copy`: 按清单批量复制
//!
//! 全局参数 `--verbose`, `--separator`, `--encoding` 可放在子命令前后。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: copy, rename

pub mod copy;
pub mod rename;

use crate::manifest::ManifestEncoding;

use clap::{Parser, Subcommand};

/// batch-rename - 按清单批量处理文件
#[derive(Parser, Debug)]
#[command(name = "batch-rename")]
#[command(version)]
#[command(about = "offers batch utility for files", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print the files looked for and the files that are missing
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Manifest field separator (a single ASCII character)
    #[arg(
        short,
        long,
        global = true,
        alias = "seperator",
        default_value = ";",
        value_parser = parse_separator
    )]
    pub separator: u8,

    /// Manifest text encoding
    #[arg(short, long, global = true, value_enum, default_value_t = ManifestEncoding::Latin1)]
    pub encoding: ManifestEncoding,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rename (move) files in batch
    #[command(
        long_about = "Reads a manifest with the header 'Ur-Pfad+Ur-Datei;Zielpfad+Zieldatei' and renames every listed file.\nMissing target directories are created. Files that could not be renamed are listed at the end.",
        after_help = "Example: batch-rename rename some.csv"
    )]
    Rename(rename::RenameArgs),

    /// Copy a batch of files to new locations
    #[command(
        long_about = "Reads a manifest with the columns 'Ur-Pfad+Ur-Datei' and 'Zielpfad' and copies every listed file into its target directory.",
        after_help = "Example: batch-rename copy some.csv"
    )]
    Copy(copy::CopyArgs),
}

/// 解析分隔符: 必须恰好是一个 ASCII 字符
pub fn parse_separator(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!(
            "separator must be a single ASCII character, got {:?}",
            s
        )),
    }
}
