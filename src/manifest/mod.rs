//! # 清单读取模块
//!
//! 读取分隔符文本清单（带表头），生成按文件顺序排列的 `ManifestRecord` 序列。
//!
//! ## 清单格式
//! - 表头行必须包含 `Ur-Pfad+Ur-Datei`（源文件完整路径）
//! - copy: `Zielpfad`（目标目录）
//! - rename: `Zielpfad+Zieldatei`（目标完整路径）
//!
//! ## 错误策略
//! - 文件无法打开: 返回 `ManifestRead`，由调用方终止
//! - 表头缺列或某行解析失败: 保留已读取的记录，并附带 `ManifestParse` 错误
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `csv` + `serde` 反序列化，`encoding_rs` 转码

pub mod encoding;

pub use encoding::ManifestEncoding;

use crate::error::{BatchRenameError, Result};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// 源文件路径列名
pub const SOURCE_COLUMN: &str = "Ur-Pfad+Ur-Datei";
/// 目标目录列名（copy）
pub const TARGET_DIR_COLUMN: &str = "Zielpfad";
/// 目标完整路径列名（rename）
pub const TARGET_PATH_COLUMN: &str = "Zielpfad+Zieldatei";

/// 清单中的一条记录
///
/// `destination` 的含义取决于操作：copy 为目标目录，rename 为目标完整路径。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestRecord {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl ManifestRecord {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        ManifestRecord {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// 可从清单行反序列化的行类型
pub trait ManifestRow: DeserializeOwned {
    /// 表头中必须存在的列
    const COLUMNS: &'static [&'static str];

    fn into_record(self) -> ManifestRecord;
}

/// copy 清单行
#[derive(Debug, Deserialize)]
pub struct CopyRow {
    #[serde(rename = "Ur-Pfad+Ur-Datei")]
    pub source: String,
    #[serde(rename = "Zielpfad")]
    pub target_dir: String,
}

impl ManifestRow for CopyRow {
    const COLUMNS: &'static [&'static str] = &[SOURCE_COLUMN, TARGET_DIR_COLUMN];

    fn into_record(self) -> ManifestRecord {
        ManifestRecord::new(self.source, self.target_dir)
    }
}

/// rename 清单行
#[derive(Debug, Deserialize)]
pub struct RenameRow {
    #[serde(rename = "Ur-Pfad+Ur-Datei")]
    pub source: String,
    #[serde(rename = "Zielpfad+Zieldatei")]
    pub target_path: String,
}

impl ManifestRow for RenameRow {
    const COLUMNS: &'static [&'static str] = &[SOURCE_COLUMN, TARGET_PATH_COLUMN];

    fn into_record(self) -> ManifestRecord {
        ManifestRecord::new(self.source, self.target_path)
    }
}

/// 清单读取结果
///
/// `error` 不为空时，`records` 只包含出错之前成功解析的行（可能为空）。
#[derive(Debug, Default)]
pub struct ManifestLoad {
    pub records: Vec<ManifestRecord>,
    pub error: Option<BatchRenameError>,
}

/// 清单读取器
pub struct ManifestReader {
    separator: u8,
    encoding: ManifestEncoding,
}

impl ManifestReader {
    /// 创建清单读取器
    pub fn new(separator: u8, encoding: ManifestEncoding) -> Self {
        Self {
            separator,
            encoding,
        }
    }

    /// 读取并解析清单文件
    pub fn load<R: ManifestRow>(&self, path: &Path) -> Result<ManifestLoad> {
        let bytes = fs::read(path).map_err(|e| BatchRenameError::ManifestRead {
            path: path.display().to_string(),
            source: e,
        })?;

        Ok(self.parse::<R>(&bytes, &path.display().to_string()))
    }

    /// 解析清单内容，`name` 仅用于错误信息
    pub fn parse<R: ManifestRow>(&self, bytes: &[u8], name: &str) -> ManifestLoad {
        let text = self.encoding.decode(bytes);
        let parse_error = |reason: String| BatchRenameError::ManifestParse {
            path: name.to_string(),
            reason,
        };

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.separator)
            .has_headers(true)
            .from_reader(text.as_bytes());

        let headers = match reader.headers() {
            Ok(h) => h.clone(),
            Err(e) => {
                return ManifestLoad {
                    records: Vec::new(),
                    error: Some(parse_error(e.to_string())),
                }
            }
        };

        let missing: Vec<&str> = R::COLUMNS
            .iter()
            .copied()
            .filter(|col| !headers.iter().any(|h| h == *col))
            .collect();
        if !missing.is_empty() {
            return ManifestLoad {
                records: Vec::new(),
                error: Some(parse_error(format!(
                    "missing column(s) {}",
                    missing.join(", ")
                ))),
            };
        }

        let mut load = ManifestLoad::default();
        for row in reader.deserialize::<R>() {
            match row {
                Ok(row) => load.records.push(row.into_record()),
                Err(e) => {
                    load.error = Some(parse_error(e.to_string()));
                    break;
                }
            }
        }

        load
    }
}
