//! # batch-rename - 按清单批量复制/重命名文件
//!
//! 读取表格导出的分隔符文本清单（源路径 → 目标路径），
//! 检查源文件、确认后逐条执行，最后汇总报告失败项。
//!
//! ## 子命令
//! - `rename` - 批量重命名/移动
//! - `copy`   - 批量复制（`--no-copy` 只创建目录）
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── manifest/ (清单读取)
//!   │     └── batch/    (批量执行流程)
//!   ├── utils/      (输出、进度、确认提示)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod manifest;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    // clap 默认以 2 退出，这里统一为 1；--help/--version 仍为 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("error running command: {}", e));
        std::process::exit(1);
    }
}
