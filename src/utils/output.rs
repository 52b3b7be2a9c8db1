//! # 美化输出工具
//!
//! 提供统一的终端输出样式和错误报告表格。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `utils/progress.rs` 使用
//! - 使用 `colored`, `tabled` crate

use crate::error::BatchRenameError;

use colored::Colorize;
use std::path::PathBuf;
use tabled::{Table, Tabled};

/// 错误报告行
#[derive(Debug, Clone, Tabled)]
struct FailureRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Error")]
    error: String,
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}

/// 打印缩进的路径列表
pub fn print_path_list<'a>(paths: impl IntoIterator<Item = &'a std::path::Path>) {
    for path in paths {
        println!("\t{}", path.display());
    }
}

/// 将失败项渲染为表格
pub fn failure_table(failures: &[(PathBuf, BatchRenameError)]) -> String {
    let rows: Vec<FailureRow> = failures
        .iter()
        .map(|(path, err)| FailureRow {
            file: path.display().to_string(),
            error: err.to_string(),
        })
        .collect();

    Table::new(&rows).to_string()
}
