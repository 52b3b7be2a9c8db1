//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。copy 与 rename 共用 `execute_batch`：
//! 读取清单 → 检查源文件 → 确认 → 执行 → 输出错误报告。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `manifest/`, `batch/`, `utils/`
//! - 子模块: copy, rename

pub mod copy;
pub mod rename;

use crate::batch::{Action, BatchReport, BatchRunner, Confirm, Discovery, Outcome};
use crate::cli::{Cli, Commands};
use crate::error::Result;
use crate::manifest::{ManifestEncoding, ManifestReader, ManifestRow};
use crate::utils::output;
use crate::utils::progress::ConsoleObserver;

use std::path::Path;

/// 运行配置（由命令行参数构建）
#[derive(Debug, Clone, Copy)]
pub struct BatchConfig {
    /// 清单分隔符
    pub separator: u8,
    /// 清单编码
    pub encoding: ManifestEncoding,
    /// 输出文件列表
    pub verbose: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            separator: b';',
            encoding: ManifestEncoding::Latin1,
            verbose: false,
        }
    }
}

impl From<&Cli> for BatchConfig {
    fn from(cli: &Cli) -> Self {
        BatchConfig {
            separator: cli.separator,
            encoding: cli.encoding,
            verbose: cli.verbose,
        }
    }
}

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    let config = BatchConfig::from(&cli);

    match cli.command {
        Commands::Rename(args) => rename::execute(args, &config),
        Commands::Copy(args) => copy::execute(args, &config),
    }
}

/// 按清单执行一次批量操作
///
/// 只有清单无法打开时返回错误；解析错误只打印警告，用已读到的记录继续。
pub fn execute_batch<R, A, C>(
    manifest: &Path,
    action: &A,
    config: &BatchConfig,
    confirm: C,
) -> Result<BatchReport>
where
    R: ManifestRow,
    A: Action,
    C: Confirm,
{
    let reader = ManifestReader::new(config.separator, config.encoding);
    let load = reader.load::<R>(manifest)?;

    if let Some(err) = &load.error {
        output::print_warning(&err.to_string());
        output::print_warning(&format!(
            "continuing with {} record(s) read before the error",
            load.records.len()
        ));
    }

    let mut runner = BatchRunner::new(confirm, ConsoleObserver::new(config.verbose));
    let report = runner.run(action, load.records);

    match &report {
        BatchReport::NothingToDo(discovery) => {
            hint_missing(discovery, config.verbose);
            output::print_info("nothing to do");
        }
        BatchReport::Aborted(discovery) => {
            output::print_warning("aborting");
            output::print_info(&format!(
                "{} file(s) left untouched",
                discovery.found.len()
            ));
        }
        BatchReport::Completed { discovery, outcome } => {
            if outcome.has_failures() {
                output::print_separator();
                output::print_warning(&format!("{} errors:", action.verb()));
                println!("{}", output::failure_table(&outcome.failures));
            }
            hint_missing(discovery, config.verbose);
            output::print_info(&summary_line(discovery, outcome));
            output::print_done("done");
        }
    }

    Ok(report)
}

/// 运行汇总行
fn summary_line(discovery: &Discovery, outcome: &Outcome) -> String {
    format!(
        "{} succeeded, {} failed, {} missing",
        outcome.success,
        outcome.failed,
        discovery.missing.len()
    )
}

/// 非 verbose 模式下提示缺失文件数量（verbose 模式已逐条列出）
fn hint_missing(discovery: &Discovery, verbose: bool) {
    if !verbose && !discovery.missing.is_empty() {
        output::print_warning(&format!(
            "{} source file(s) missing, rerun with --verbose to list them",
            discovery.missing.len()
        ));
    }
}
