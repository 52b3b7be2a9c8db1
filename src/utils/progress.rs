//! # 进度显示
//!
//! 封装 `indicatif` 提供统一的进度条样式，并实现终端版的 `BatchObserver`。
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 使用
//! - 使用 `indicatif` crate, `utils/output.rs`

use super::output;
use crate::batch::{BatchObserver, Discovery, Outcome};
use crate::error::BatchRenameError;
use crate::manifest::ManifestRecord;

use indicatif::{ProgressBar, ProgressStyle};

/// 创建标准进度条
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{prefix} {pos}/{len} [{bar:40.cyan/blue}] {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-"),
    );
    pb.set_prefix(message.to_string());
    pb
}

/// 创建计数器（只显示已计数量）
pub fn create_counter(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template("{msg}: {pos}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb.set_message(message.to_string());
    pb
}

/// 终端进度观察者
pub struct ConsoleObserver {
    /// 是否输出文件列表
    verbose: bool,
    /// 当前进度条
    bar: Option<ProgressBar>,
}

impl ConsoleObserver {
    pub fn new(verbose: bool) -> Self {
        Self { verbose, bar: None }
    }

    fn finish(&mut self) {
        if let Some(pb) = self.bar.take() {
            pb.finish_and_clear();
        }
    }
}

impl BatchObserver for ConsoleObserver {
    fn discovery_started(&mut self, verb: &str, records: &[ManifestRecord]) {
        if self.verbose {
            output::print_info("looking for these files:");
            output::print_path_list(records.iter().map(|r| r.source.as_path()));
        }
        self.bar = Some(create_counter(
            records.len() as u64,
            &format!("counting files to {}", verb),
        ));
    }

    fn record_checked(&mut self, _checked: usize, found: usize) {
        if let Some(pb) = &self.bar {
            pb.set_position(found as u64);
        }
    }

    fn discovery_finished(&mut self, discovery: &Discovery) {
        self.finish();
        output::print_info(&format!(
            "found {}/{} files",
            discovery.found.len(),
            discovery.total()
        ));

        if self.verbose && !discovery.missing.is_empty() {
            output::print_warning("missing files:");
            for (_, err) in &discovery.missing {
                println!("\t{}", err);
            }
        }
    }

    fn execution_started(&mut self, gerund: &str, total: usize) {
        self.bar = Some(create_progress_bar(total as u64, gerund));
    }

    fn record_applied(
        &mut self,
        record: &ManifestRecord,
        error: Option<&BatchRenameError>,
        outcome: &Outcome,
    ) {
        let Some(pb) = &self.bar else {
            return;
        };

        if self.verbose {
            if let Some(err) = error {
                pb.suspend(|| output::print_warning(&err.to_string()));
            }
        }

        pb.set_message(format!(
            "(errors: {}): {}",
            outcome.failed,
            record.source.display()
        ));
        pb.set_position(outcome.total() as u64);
    }

    fn execution_finished(&mut self, _outcome: &Outcome) {
        self.finish();
    }
}
