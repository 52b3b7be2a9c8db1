//! # copy 命令实现
//!
//! 按清单将文件复制到 `Zielpfad` 目录，文件名保持不变。
//! `--no-copy` 时只创建目标目录。
//!
//! ## 依赖关系
//! - 使用 `cli/copy.rs` 定义的参数
//! - 使用 `batch::CopyAction`, `manifest::CopyRow`

use super::{execute_batch, BatchConfig};
use crate::batch::CopyAction;
use crate::cli::copy::CopyArgs;
use crate::error::Result;
use crate::manifest::CopyRow;
use crate::utils::output;
use crate::utils::prompt::LineConfirm;

/// 执行 copy 命令
pub fn execute(args: CopyArgs, config: &BatchConfig) -> Result<()> {
    output::print_header("Batch Copy");
    output::print_info(&format!(
        "Reading '{}' ({}, separator {:?})",
        args.manifest.display(),
        config.encoding,
        config.separator as char
    ));

    if args.no_copy {
        output::print_info("--no-copy: only target directories will be created");
    }

    execute_batch::<CopyRow, _, _>(
        &args.manifest,
        &CopyAction::new(args.no_copy),
        config,
        LineConfirm::stdin(),
    )?;

    Ok(())
}
