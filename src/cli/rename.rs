//! # rename 子命令 CLI 定义
//!
//! 按清单批量重命名/移动文件
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/rename.rs`

use clap::Args;
use std::path::PathBuf;

/// rename 子命令参数
#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Path to the manifest file
    pub manifest: PathBuf,
}
