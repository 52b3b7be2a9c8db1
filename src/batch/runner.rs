//! # 批量执行器
//!
//! 对清单记录按顺序执行同一套流程：
//! 1. 检查源文件是否存在（不修改文件系统）
//! 2. 没有可处理的文件时直接返回
//! 3. 请求确认
//! 4. 逐条执行操作，单条失败不影响后续记录
//!
//! 执行器本身不写终端：确认通过 `Confirm` 注入，进度通过 `BatchObserver` 回调。
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `batch/action.rs`, `batch/outcome.rs`

use super::action::Action;
use super::outcome::Outcome;
use crate::error::BatchRenameError;
use crate::manifest::ManifestRecord;

/// 确认能力，返回 `true` 才会开始执行
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, question: &str) -> bool {
        self(question)
    }
}

/// 进度观察者，所有回调默认为空
pub trait BatchObserver {
    /// 开始检查源文件
    fn discovery_started(&mut self, _verb: &str, _records: &[ManifestRecord]) {}

    /// 已检查 `checked` 条，其中 `found` 条存在
    fn record_checked(&mut self, _checked: usize, _found: usize) {}

    /// 检查完成
    fn discovery_finished(&mut self, _discovery: &Discovery) {}

    /// 开始执行，`gerund` 为操作的进行时形式
    fn execution_started(&mut self, _gerund: &str, _total: usize) {}

    /// 单条记录执行完毕，`error` 为本条记录的错误
    fn record_applied(
        &mut self,
        _record: &ManifestRecord,
        _error: Option<&BatchRenameError>,
        _outcome: &Outcome,
    ) {
    }

    /// 全部执行完毕
    fn execution_finished(&mut self, _outcome: &Outcome) {}
}

impl<O: BatchObserver + ?Sized> BatchObserver for &mut O {
    fn discovery_started(&mut self, verb: &str, records: &[ManifestRecord]) {
        (**self).discovery_started(verb, records)
    }

    fn record_checked(&mut self, checked: usize, found: usize) {
        (**self).record_checked(checked, found)
    }

    fn discovery_finished(&mut self, discovery: &Discovery) {
        (**self).discovery_finished(discovery)
    }

    fn execution_started(&mut self, gerund: &str, total: usize) {
        (**self).execution_started(gerund, total)
    }

    fn record_applied(
        &mut self,
        record: &ManifestRecord,
        error: Option<&BatchRenameError>,
        outcome: &Outcome,
    ) {
        (**self).record_applied(record, error, outcome)
    }

    fn execution_finished(&mut self, outcome: &Outcome) {
        (**self).execution_finished(outcome)
    }
}

/// 源文件检查结果，两部分均保持清单顺序
#[derive(Debug, Default)]
pub struct Discovery {
    /// 源文件存在的记录
    pub found: Vec<ManifestRecord>,
    /// 源文件不存在的记录及原因
    pub missing: Vec<(ManifestRecord, BatchRenameError)>,
}

impl Discovery {
    /// 记录总数
    pub fn total(&self) -> usize {
        self.found.len() + self.missing.len()
    }
}

/// 一次运行的最终结果
#[derive(Debug)]
pub enum BatchReport {
    /// 没有找到任何源文件，未请求确认
    NothingToDo(Discovery),
    /// 未获确认，没有修改文件系统
    Aborted(Discovery),
    /// 已执行
    Completed {
        discovery: Discovery,
        outcome: Outcome,
    },
}

/// 批量执行器
pub struct BatchRunner<C, O> {
    /// 确认能力
    confirm: C,
    /// 进度观察者
    observer: O,
}

impl<C: Confirm, O: BatchObserver> BatchRunner<C, O> {
    /// 创建新的批量执行器
    pub fn new(confirm: C, observer: O) -> Self {
        Self { confirm, observer }
    }

    /// 执行完整流程
    pub fn run<A: Action>(&mut self, action: &A, records: Vec<ManifestRecord>) -> BatchReport {
        let discovery = self.discover(action, records);

        if discovery.found.is_empty() {
            return BatchReport::NothingToDo(discovery);
        }

        let question = format!("start {} ? (y|N): ", action.gerund());
        if !self.confirm.confirm(&question) {
            return BatchReport::Aborted(discovery);
        }

        let outcome = self.execute(action, &discovery.found);
        BatchReport::Completed { discovery, outcome }
    }

    /// 检查所有记录的前置条件，划分为存在/缺失两部分
    pub fn discover<A: Action>(&mut self, action: &A, records: Vec<ManifestRecord>) -> Discovery {
        self.observer.discovery_started(action.verb(), &records);

        let mut discovery = Discovery::default();
        for (i, record) in records.into_iter().enumerate() {
            match action.precondition(&record) {
                Ok(()) => discovery.found.push(record),
                Err(e) => discovery.missing.push((record, e)),
            }
            self.observer.record_checked(i + 1, discovery.found.len());
        }

        self.observer.discovery_finished(&discovery);
        discovery
    }

    /// 按顺序执行操作并收集错误
    pub fn execute<A: Action>(&mut self, action: &A, records: &[ManifestRecord]) -> Outcome {
        self.observer.execution_started(action.gerund(), records.len());

        let mut outcome = Outcome::default();
        for record in records {
            let result = action.apply(record);
            let failed = result.is_err();
            outcome.merge(&record.source, result);

            let error = if failed { outcome.last_failure() } else { None };
            self.observer.record_applied(record, error, &outcome);
        }

        self.observer.execution_finished(&outcome);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::action::{CopyAction, RenameAction};
    use crate::error::Result;
    use std::cell::RefCell;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// 不做任何事的观察者
    struct NoopObserver;

    impl BatchObserver for NoopObserver {}

    fn fake_error(record: &ManifestRecord) -> BatchRenameError {
        BatchRenameError::SourceMissing {
            path: record.source.display().to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        }
    }

    /// 记录所有回调的观察者
    #[derive(Default)]
    struct Recorder {
        checked: Vec<(usize, usize)>,
        applied: Vec<(PathBuf, usize)>,
        errors: Vec<Option<String>>,
        started: Option<(String, usize)>,
        finished: bool,
    }

    impl BatchObserver for Recorder {
        fn record_checked(&mut self, checked: usize, found: usize) {
            self.checked.push((checked, found));
        }

        fn execution_started(&mut self, gerund: &str, total: usize) {
            self.started = Some((gerund.to_string(), total));
        }

        fn record_applied(
            &mut self,
            record: &ManifestRecord,
            error: Option<&BatchRenameError>,
            outcome: &Outcome,
        ) {
            self.applied.push((record.source.clone(), outcome.failed));
            self.errors.push(error.map(|e| e.to_string()));
        }

        fn execution_finished(&mut self, _outcome: &Outcome) {
            self.finished = true;
        }
    }

    /// 记录调用顺序的假操作，源路径包含 "fail" 时失败
    struct FakeAction {
        applied: RefCell<Vec<PathBuf>>,
    }

    impl FakeAction {
        fn new() -> Self {
            Self {
                applied: RefCell::new(Vec::new()),
            }
        }
    }

    impl Action for FakeAction {
        fn verb(&self) -> &'static str {
            "fake"
        }

        fn gerund(&self) -> &'static str {
            "faking"
        }

        fn precondition(&self, record: &ManifestRecord) -> Result<()> {
            if record.source.starts_with("/missing") {
                Err(fake_error(record))
            } else {
                Ok(())
            }
        }

        fn apply(&self, record: &ManifestRecord) -> Result<()> {
            self.applied.borrow_mut().push(record.source.clone());
            if record.source.to_string_lossy().contains("fail") {
                Err(fake_error(record))
            } else {
                Ok(())
            }
        }
    }

    fn records(sources: &[&str]) -> Vec<ManifestRecord> {
        sources
            .iter()
            .map(|s| ManifestRecord::new(*s, "/dest"))
            .collect()
    }

    fn sandbox_file(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_discovery_partition_is_stable() {
        let input = records(&["/a", "/missing/b", "/c", "/missing/d", "/e"]);
        let action = FakeAction::new();
        let mut runner = BatchRunner::new(|_: &str| false, NoopObserver);

        let first = runner.discover(&action, input.clone());
        let second = runner.discover(&action, input);

        assert_eq!(first.found.len(), 3);
        assert_eq!(first.missing.len(), 2);
        assert_eq!(first.total(), 5);
        assert_eq!(first.found, second.found);
        let missing: Vec<_> = first.missing.iter().map(|(r, _)| r.source.clone()).collect();
        assert_eq!(
            missing,
            vec![PathBuf::from("/missing/b"), PathBuf::from("/missing/d")]
        );
    }

    #[test]
    fn test_discovery_reports_running_count() {
        let action = FakeAction::new();
        let mut recorder = Recorder::default();
        let mut runner = BatchRunner::new(|_: &str| false, &mut recorder);

        runner.discover(&action, records(&["/a", "/missing/b", "/c"]));
        drop(runner);

        assert_eq!(recorder.checked, vec![(1, 1), (2, 1), (3, 2)]);
    }

    #[test]
    fn test_nothing_to_do_skips_prompt() {
        let action = FakeAction::new();
        let mut asked = 0;
        let mut runner = BatchRunner::new(
            |_: &str| {
                asked += 1;
                true
            },
            NoopObserver,
        );

        let report = runner.run(&action, records(&["/missing/a", "/missing/b"]));
        drop(runner);

        assert!(matches!(report, BatchReport::NothingToDo(_)));
        assert_eq!(asked, 0);
        assert!(action.applied.borrow().is_empty());
    }

    #[test]
    fn test_empty_manifest_is_nothing_to_do() {
        let action = FakeAction::new();
        let mut runner = BatchRunner::new(|_: &str| true, NoopObserver);

        let report = runner.run(&action, Vec::new());
        assert!(matches!(report, BatchReport::NothingToDo(d) if d.total() == 0));
    }

    #[test]
    fn test_declined_confirmation_applies_nothing() {
        let action = FakeAction::new();
        let mut question = String::new();
        let mut runner = BatchRunner::new(
            |q: &str| {
                question = q.to_string();
                false
            },
            NoopObserver,
        );

        let report = runner.run(&action, records(&["/a", "/b"]));
        drop(runner);

        assert!(matches!(report, BatchReport::Aborted(_)));
        assert_eq!(question, "start faking ? (y|N): ");
        assert!(action.applied.borrow().is_empty());
    }

    #[test]
    fn test_failure_does_not_stop_batch() {
        let action = FakeAction::new();
        let mut recorder = Recorder::default();
        let mut runner = BatchRunner::new(|_: &str| true, &mut recorder);

        let report = runner.run(&action, records(&["/a", "/fail/b", "/missing/x", "/c"]));
        drop(runner);

        let outcome = match report {
            BatchReport::Completed { outcome, .. } => outcome,
            other => panic!("unexpected report: {:?}", other),
        };
        assert_eq!(
            *action.applied.borrow(),
            vec![
                PathBuf::from("/a"),
                PathBuf::from("/fail/b"),
                PathBuf::from("/c")
            ]
        );
        assert_eq!(outcome.success, 2);
        assert_eq!(outcome.failed, 1);
        assert!(outcome.error_for(Path::new("/fail/b")).is_some());
        assert!(outcome.error_for(Path::new("/a")).is_none());

        assert_eq!(recorder.started, Some(("faking".to_string(), 3)));
        let errors_after_each: Vec<usize> = recorder.applied.iter().map(|(_, n)| *n).collect();
        assert_eq!(errors_after_each, vec![0, 1, 1]);
        assert_eq!(
            recorder.errors.iter().map(Option::is_some).collect::<Vec<_>>(),
            vec![false, true, false]
        );
        assert!(recorder.finished);
    }

    #[test]
    fn test_duplicate_source_reports_each_result() {
        let dir = TempDir::new().unwrap();
        let src = sandbox_file(&dir, "in/a.txt", b"hi");
        let blocker = sandbox_file(&dir, "blocker", b"");
        let input = vec![
            ManifestRecord::new(&src, blocker.join("sub")),
            ManifestRecord::new(&src, dir.path().join("out")),
        ];

        let mut recorder = Recorder::default();
        let mut runner = BatchRunner::new(|_: &str| true, &mut recorder);
        let report = runner.run(&CopyAction::new(false), input);
        drop(runner);

        assert!(matches!(
            report,
            BatchReport::Completed { ref outcome, .. } if outcome.success == 1 && outcome.failed == 1
        ));
        assert_eq!(recorder.started, Some(("copying".to_string(), 2)));
        assert_eq!(recorder.errors.len(), 2);
        assert!(recorder.errors[0]
            .as_deref()
            .is_some_and(|e| e.contains("could not create directory")));
        assert_eq!(recorder.errors[1], None);
        assert_eq!(fs::read(dir.path().join("out/a.txt")).unwrap(), b"hi");
    }

    #[test]
    fn test_rename_batch_end_to_end() {
        let dir = TempDir::new().unwrap();
        let src = sandbox_file(&dir, "in/a.txt", b"hi");
        let dest = dir.path().join("out/a.txt");
        let input = vec![ManifestRecord::new(&src, &dest)];

        let mut runner = BatchRunner::new(|_: &str| true, NoopObserver);
        let report = runner.run(&RenameAction::new(), input);

        match report {
            BatchReport::Completed { discovery, outcome } => {
                assert_eq!(discovery.found.len(), 1);
                assert!(!outcome.has_failures());
            }
            other => panic!("unexpected report: {:?}", other),
        }
        assert!(!src.exists());
        assert_eq!(fs::read(&dest).unwrap(), b"hi");
    }

    #[test]
    fn test_copy_batch_isolates_directory_failure() {
        let dir = TempDir::new().unwrap();
        let one = sandbox_file(&dir, "in/1.txt", b"one");
        let two = sandbox_file(&dir, "in/2.txt", b"two");
        let three = sandbox_file(&dir, "in/3.txt", b"three");
        let blocker = sandbox_file(&dir, "blocker", b"");

        let input = vec![
            ManifestRecord::new(&one, dir.path().join("out/a")),
            ManifestRecord::new(&two, blocker.join("sub")),
            ManifestRecord::new(&three, dir.path().join("out/c")),
        ];

        let mut runner = BatchRunner::new(|_: &str| true, NoopObserver);
        let outcome = match runner.run(&CopyAction::new(false), input) {
            BatchReport::Completed { outcome, .. } => outcome,
            other => panic!("unexpected report: {:?}", other),
        };

        assert_eq!(outcome.success, 2);
        assert_eq!(outcome.failures.len(), 1);
        assert!(matches!(
            outcome.error_for(&two),
            Some(BatchRenameError::DirectoryCreate { .. })
        ));
        assert_eq!(fs::read(dir.path().join("out/a/1.txt")).unwrap(), b"one");
        assert_eq!(fs::read(dir.path().join("out/c/3.txt")).unwrap(), b"three");
    }

    #[test]
    fn test_copy_no_copy_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let one = sandbox_file(&dir, "in/1.txt", b"one");
        let two = sandbox_file(&dir, "in/2.txt", b"two");
        let input = vec![
            ManifestRecord::new(&one, dir.path().join("out/a")),
            ManifestRecord::new(&two, dir.path().join("out/b/c")),
        ];

        let mut runner = BatchRunner::new(|_: &str| true, NoopObserver);
        runner.run(&CopyAction::new(true), input);

        assert!(dir.path().join("out/a").is_dir());
        assert!(dir.path().join("out/b/c").is_dir());
        assert!(!dir.path().join("out/a/1.txt").exists());
        assert!(!dir.path().join("out/b/c/2.txt").exists());
    }

    #[test]
    fn test_source_removed_after_discovery() {
        let dir = TempDir::new().unwrap();
        let src = sandbox_file(&dir, "in/a.txt", b"hi");
        let input = vec![ManifestRecord::new(&src, dir.path().join("out/a.txt"))];
        let action = RenameAction::new();

        let mut runner = BatchRunner::new(
            |_: &str| {
                fs::remove_file(&src).unwrap();
                true
            },
            NoopObserver,
        );
        let report = runner.run(&action, input);
        drop(runner);

        match report {
            BatchReport::Completed { outcome, .. } => {
                assert!(matches!(
                    outcome.error_for(&src),
                    Some(BatchRenameError::Transfer { .. })
                ));
            }
            other => panic!("unexpected report: {:?}", other),
        }
    }
}
