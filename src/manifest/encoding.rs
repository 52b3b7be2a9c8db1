//! # 清单字符编码
//!
//! 将清单原始字节转码为 UTF-8。表格软件导出的清单默认为 Latin-1。
//!
//! ## 依赖关系
//! - 被 `manifest/mod.rs` 使用
//! - 使用 `encoding_rs` 进行转码

use clap::ValueEnum;
use std::borrow::Cow;

/// 清单文件编码
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ManifestEncoding {
    /// ISO-8859-1, every byte maps to the code point of the same value
    #[default]
    Latin1,
    /// UTF-8, a leading BOM is ignored
    Utf8,
    /// Windows-1252
    Windows1252,
}

impl std::fmt::Display for ManifestEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestEncoding::Latin1 => write!(f, "ISO-8859-1"),
            ManifestEncoding::Utf8 => write!(f, "UTF-8"),
            ManifestEncoding::Windows1252 => write!(f, "windows-1252"),
        }
    }
}

impl ManifestEncoding {
    /// 解码为 UTF-8 文本（从不失败，非法序列替换为 U+FFFD）
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Cow<'a, str> {
        match self {
            ManifestEncoding::Latin1 => encoding_rs::mem::decode_latin1(bytes),
            ManifestEncoding::Utf8 => encoding_rs::UTF_8.decode_with_bom_removal(bytes).0,
            ManifestEncoding::Windows1252 => {
                encoding_rs::WINDOWS_1252
                    .decode_without_bom_handling(bytes)
                    .0
            }
        }
    }
}
