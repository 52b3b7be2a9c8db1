//! # 批量操作定义
//!
//! 一个 `Action` 由前置检查、执行函数和动词组成，`BatchRunner`
//! 对所有操作使用同一套流程。
//!
//! ## 操作
//! - `CopyAction`: 创建目标目录，将源文件流式复制到 `目标目录/源文件名`
//! - `RenameAction`: 创建目标路径的上级目录，原子重命名
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 和 `commands/` 使用
//! - 使用 `manifest::ManifestRecord`

use crate::error::{BatchRenameError, Result};
use crate::manifest::ManifestRecord;

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// 批量操作
pub trait Action {
    /// 动词（copy / rename）
    fn verb(&self) -> &'static str;

    /// 进行时形式，用于提示语（copying / renaming）
    fn gerund(&self) -> &'static str;

    /// 前置检查：源文件在检查时刻存在
    fn precondition(&self, record: &ManifestRecord) -> Result<()> {
        fs::metadata(&record.source)
            .map(|_| ())
            .map_err(|e| BatchRenameError::SourceMissing {
                path: record.source.display().to_string(),
                source: e,
            })
    }

    /// 对单条记录执行操作
    fn apply(&self, record: &ManifestRecord) -> Result<()>;
}

/// 创建目录（含上级目录），空路径视为错误
fn create_dir(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(BatchRenameError::DirectoryCreate {
            path: path.display().to_string(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "empty destination"),
        });
    }
    fs::create_dir_all(path).map_err(|e| BatchRenameError::DirectoryCreate {
        path: path.display().to_string(),
        source: e,
    })
}

// ─────────────────────────────────────────────────────────────
// Copy
// ─────────────────────────────────────────────────────────────

/// 复制操作，`destination` 为目标目录
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyAction {
    /// 只创建目录，不复制内容
    no_copy: bool,
}

impl CopyAction {
    pub fn new(no_copy: bool) -> Self {
        Self { no_copy }
    }

    /// 目标文件路径: `目标目录/源文件名`
    pub fn target_file(record: &ManifestRecord) -> Option<PathBuf> {
        record
            .source
            .file_name()
            .map(|name| record.destination.join(name))
    }

    fn transfer_error(record: &ManifestRecord, to: &Path, source: io::Error) -> BatchRenameError {
        BatchRenameError::Transfer {
            verb: "copy",
            from: record.source.display().to_string(),
            to: to.display().to_string(),
            source,
        }
    }
}

/// 两个路径是否指向同一个文件（任一路径不存在时为 false）
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

impl Action for CopyAction {
    fn verb(&self) -> &'static str {
        "copy"
    }

    fn gerund(&self) -> &'static str {
        "copying"
    }

    fn apply(&self, record: &ManifestRecord) -> Result<()> {
        create_dir(&record.destination)?;

        if self.no_copy {
            return Ok(());
        }

        let target = Self::target_file(record).ok_or_else(|| {
            Self::transfer_error(
                record,
                &record.destination,
                io::Error::new(io::ErrorKind::InvalidInput, "source has no file name"),
            )
        })?;

        // File::create 会先截断目标，目标即源文件时必须在此拒绝
        if same_file(&record.source, &target) {
            return Err(Self::transfer_error(
                record,
                &target,
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "source and destination are the same file",
                ),
            ));
        }

        let mut src =
            File::open(&record.source).map_err(|e| Self::transfer_error(record, &target, e))?;
        let mut dst = File::create(&target).map_err(|e| Self::transfer_error(record, &target, e))?;
        io::copy(&mut src, &mut dst).map_err(|e| Self::transfer_error(record, &target, e))?;

        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
// Rename
// ─────────────────────────────────────────────────────────────

/// 重命名操作，`destination` 为目标完整路径
///
/// 只使用 `fs::rename`；跨文件系统时直接报错，不退化为复制+删除。
#[derive(Debug, Clone, Copy, Default)]
pub struct RenameAction;

impl RenameAction {
    pub fn new() -> Self {
        Self
    }
}

impl Action for RenameAction {
    fn verb(&self) -> &'static str {
        "rename"
    }

    fn gerund(&self) -> &'static str {
        "renaming"
    }

    fn apply(&self, record: &ManifestRecord) -> Result<()> {
        let transfer_error = |source: io::Error| BatchRenameError::Transfer {
            verb: "rename",
            from: record.source.display().to_string(),
            to: record.destination.display().to_string(),
            source,
        };

        if record.destination.as_os_str().is_empty() {
            return Err(transfer_error(io::Error::new(
                io::ErrorKind::InvalidInput,
                "empty destination",
            )));
        }

        if let Some(parent) = record
            .destination
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
        {
            create_dir(parent)?;
        }

        fs::rename(&record.source, &record.destination).map_err(transfer_error)
    }
}
