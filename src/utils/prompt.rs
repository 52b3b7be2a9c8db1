//! # 确认提示
//!
//! 从输入流读取一行回答，只有 `y` 视为确认。
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 使用
//! - 实现 `batch::Confirm`

use crate::batch::Confirm;

use std::io::{self, BufRead, Write};

/// 是否为肯定回答（去掉首尾空白后严格等于 `y`）
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim() == "y"
}

/// 基于行输入的确认
pub struct LineConfirm<R, W> {
    input: R,
    output: W,
}

impl LineConfirm<io::StdinLock<'static>, io::Stdout> {
    /// 从标准输入读取，提示写到标准输出
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for LineConfirm<R, W> {
    fn confirm(&mut self, question: &str) -> bool {
        if write!(self.output, "{}", question)
            .and_then(|_| self.output.flush())
            .is_err()
        {
            return false;
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(0) | Err(_) => {
                // 输入结束时补一个换行，避免后续输出接在提示后面
                let _ = writeln!(self.output);
                false
            }
            Ok(_) => is_affirmative(&answer),
        }
    }
}
