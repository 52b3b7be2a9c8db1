//! # 统一错误处理模块
//!
//! 定义 batch-rename 的所有错误类型，使用 `thiserror` 派生。
//!
//! 清单读取失败是致命错误；单条记录的错误只记录在 `Outcome` 中，
//! 不会中断批处理。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// batch-rename 统一错误类型
#[derive(Error, Debug)]
pub enum BatchRenameError {
    // ─────────────────────────────────────────────────────────────
    // 清单错误
    // ─────────────────────────────────────────────────────────────
    #[error("could not open manifest {path}: {source}")]
    ManifestRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("error reading manifest {path:?}: {reason}")]
    ManifestParse { path: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 单条记录错误
    // ─────────────────────────────────────────────────────────────
    #[error("source not found: {path}: {source}")]
    SourceMissing {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not create directory {path}: {source}")]
    DirectoryCreate {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not {verb} {from} -> {to}: {source}")]
    Transfer {
        verb: &'static str,
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, BatchRenameError>;
