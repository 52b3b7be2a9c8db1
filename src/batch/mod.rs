//! # 批量处理模块
//!
//! copy 与 rename 共用的批量执行流程。
//!
//! ## 功能
//! - 源文件存在性检查
//! - 执行前确认
//! - 逐条执行与错误收集
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 子模块: action, outcome, runner

pub mod action;
pub mod outcome;
pub mod runner;

pub use action::{Action, CopyAction, RenameAction};
pub use outcome::Outcome;
pub use runner::{BatchObserver, BatchReport, BatchRunner, Confirm, Discovery};
