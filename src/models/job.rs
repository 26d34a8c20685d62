//! # 转换作业数据模型
//!
//! 一个作业即一对 (源路径, 目标路径)，每个目录条目派生一次，只执行一次。
//!
//! ## 依赖关系
//! - 被 `batch/`, `codec/`, `commands/convert.rs` 使用
//! - 使用 `error.rs` 中的 `Stage`

use crate::cli::convert::RasterFormat;
use crate::error::Stage;

use serde::Serialize;
use std::path::{Path, PathBuf};

/// 单个转换作业
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    /// 源文件路径
    pub source: PathBuf,
    /// 目标文件路径
    pub destination: PathBuf,
}

impl ConversionJob {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        ConversionJob {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// 由源文件派生作业：目标位于 `output_dir`，文件名替换扩展名
    pub fn for_source(source: &Path, output_dir: &Path, target: RasterFormat) -> Self {
        let mut name = source
            .file_stem()
            .map(|s| s.to_os_string())
            .unwrap_or_else(|| "image".into());
        name.push(".");
        name.push(target.extension());

        ConversionJob::new(source, output_dir.join(name))
    }
}

/// 作业状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    /// 转换成功
    Converted,
    /// 跳过（目标已存在）
    Skipped,
    /// 转换失败（`stage` 为 `None` 表示非单文件阶段的错误）
    Failed {
        stage: Option<Stage>,
        reason: String,
    },
}

/// 单个作业的执行结果
#[derive(Debug, Clone)]
pub struct JobOutcome {
    pub job: ConversionJob,
    pub status: JobStatus,
}

/// CSV 报告中的一行
#[derive(Debug, Serialize)]
pub struct JobRecord {
    pub source: String,
    pub destination: String,
    pub status: &'static str,
    pub stage: String,
    pub error: String,
}

impl From<&JobOutcome> for JobRecord {
    fn from(outcome: &JobOutcome) -> Self {
        let (status, stage, error) = match &outcome.status {
            JobStatus::Converted => ("converted", String::new(), String::new()),
            JobStatus::Skipped => ("skipped", String::new(), String::new()),
            JobStatus::Failed { stage, reason } => (
                "failed",
                stage.map(|s| s.to_string()).unwrap_or_default(),
                reason.clone(),
            ),
        };

        JobRecord {
            source: outcome.job.source.display().to_string(),
            destination: outcome.job.destination.display().to_string(),
            status,
            stage,
            error,
        }
    }
}
