//! # 执行结果汇总
//!
//! 记录每条已执行记录的成功/失败，失败项按原始顺序保存。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 构建
//! - 被 `commands/` 和 `utils/progress.rs` 读取

use crate::error::{BatchRenameError, Result};

use std::path::{Path, PathBuf};

/// 批量执行结果
///
/// 没有出现在 `failures` 中的已执行记录即为成功。
#[derive(Debug, Default)]
pub struct Outcome {
    /// 成功数量
    pub success: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情 (源文件路径, 错误)
    pub failures: Vec<(PathBuf, BatchRenameError)>,
}

impl Outcome {
    /// 合并单条记录的执行结果
    pub fn merge(&mut self, source: &Path, result: Result<()>) {
        match result {
            Ok(()) => self.success += 1,
            Err(e) => {
                self.failed += 1;
                self.failures.push((source.to_path_buf(), e));
            }
        }
    }

    /// 最近一次记录的失败
    pub fn last_failure(&self) -> Option<&BatchRenameError> {
        self.failures.last().map(|(_, e)| e)
    }

    /// 已处理数量
    pub fn total(&self) -> usize {
        self.success + self.failed
    }

    /// 查找某个源文件的第一个错误
    #[cfg(test)]
    pub fn error_for(&self, source: &Path) -> Option<&BatchRenameError> {
        self.failures
            .iter()
            .find(|(path, _)| path == source)
            .map(|(_, e)| e)
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
