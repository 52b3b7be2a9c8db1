//! # rename 命令实现
//!
//! 按清单将文件重命名/移动到 `Zielpfad+Zieldatei`。
//!
//! ## 依赖关系
//! - 使用 `cli/rename.rs` 定义的参数
//! - 使用 `batch::RenameAction`, `manifest::RenameRow`

use super::{execute_batch, BatchConfig};
use crate::batch::RenameAction;
use crate::cli::rename::RenameArgs;
use crate::error::Result;
use crate::manifest::RenameRow;
use crate::utils::output;
use crate::utils::prompt::LineConfirm;

/// 执行 rename 命令
pub fn execute(args: RenameArgs, config: &BatchConfig) -> Result<()> {
    output::print_header("Batch Rename");
    output::print_info(&format!(
        "Reading '{}' ({}, separator {:?})",
        args.manifest.display(),
        config.encoding,
        config.separator as char
    ));

    execute_batch::<RenameRow, _, _>(
        &args.manifest,
        &RenameAction::new(),
        config,
        LineConfirm::stdin(),
    )?;

    Ok(())
}
