//! # 批量处理模块
//!
//! 提供目录枚举、串行/并行扇出与结果汇总。
//!
//! ## 功能
//! - 非递归列出输入目录条目（跳过子目录）
//! - 串行或基于 rayon 线程池的并行执行，`collect` 作为完成屏障
//! - 进度反馈与统计
//! - CSV 作业报告
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod report;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchResult, BatchRunner};
