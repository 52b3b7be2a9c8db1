//! # copy 子命令 CLI 定义
//!
//! 按清单批量复制文件到目标目录
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/copy.rs`

use clap::Args;
use std::path::PathBuf;

/// copy 子命令参数
#[derive(Args, Debug)]
pub struct CopyArgs {
    /// Path to the manifest file
    pub manifest: PathBuf,

    /// Just create the target directories, DO NOT copy
    #[arg(short, long, default_value_t = false)]
    pub no_copy: bool,
}
