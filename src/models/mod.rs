//! # 数据模型模块
//!
//! 定义转换作业与作业结果数据模型。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 使用
//! - 子模块: job

pub mod job;

pub use job::{ConversionJob, JobOutcome, JobRecord, JobStatus};
