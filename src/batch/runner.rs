//! # 批量执行器
//!
//! 串行或并行执行转换作业。
//!
//! ## 功能
//! - 串行模式：按列表顺序逐个执行
//! - 并行模式：所有作业立即提交到 rayon 线程池，`collect` 阻塞直到全部完成
//! - 进度条显示（仅并行模式）
//! - 结果汇总
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::Result;
use crate::models::{ConversionJob, JobOutcome, JobStatus};
use crate::utils::progress;

use indicatif::ProgressBar;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub failed: usize,
    /// 所有作业结果（按列表顺序）
    pub outcomes: Vec<JobOutcome>,
}

impl BatchResult {
    /// 合并单个作业结果
    pub fn merge(&mut self, outcome: JobOutcome) {
        match outcome.status {
            JobStatus::Converted => self.success += 1,
            JobStatus::Skipped => self.skipped += 1,
            JobStatus::Failed { .. } => self.failed += 1,
        }
        self.outcomes.push(outcome);
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.skipped + self.failed
    }

    /// 失败的作业
    pub fn failures(&self) -> impl Iterator<Item = &JobOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, JobStatus::Failed { .. }))
    }
}

/// 执行模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Sequential,
    Parallel { workers: usize },
}

/// 批量执行器
pub struct BatchRunner {
    mode: Mode,
}

impl BatchRunner {
    /// 串行执行器
    pub fn sequential() -> Self {
        Self {
            mode: Mode::Sequential,
        }
    }

    /// 并行执行器（`jobs == 0` 时每个 CPU 核心一个工作线程）
    pub fn parallel(jobs: usize) -> Self {
        let workers = if jobs == 0 { num_cpus::get() } else { jobs };
        Self {
            mode: Mode::Parallel { workers },
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// 执行作业列表
    ///
    /// `processor` 负责单个作业并自行输出日志；传入的进度条在串行模式下是隐藏的，
    /// 打印时应通过 `ProgressBar::suspend` 包裹。
    pub fn run<F>(&self, jobs: Vec<ConversionJob>, processor: F) -> Result<BatchResult>
    where
        F: Fn(&ConversionJob, &ProgressBar) -> JobStatus + Sync + Send,
    {
        let outcomes = match self.mode {
            Mode::Sequential => {
                let pb = ProgressBar::hidden();
                jobs.into_iter()
                    .map(|job| {
                        let status = processor(&job, &pb);
                        JobOutcome { job, status }
                    })
                    .collect::<Vec<_>>()
            }
            Mode::Parallel { workers } => self.run_parallel(jobs, workers, &processor)?,
        };

        let mut batch_result = BatchResult::default();
        for outcome in outcomes {
            batch_result.merge(outcome);
        }

        Ok(batch_result)
    }

    fn run_parallel<F>(
        &self,
        jobs: Vec<ConversionJob>,
        workers: usize,
        processor: &F,
    ) -> Result<Vec<JobOutcome>>
    where
        F: Fn(&ConversionJob, &ProgressBar) -> JobStatus + Sync + Send,
    {
        let pb = progress::create_progress_bar(jobs.len() as u64, "Converting");
        let failed_count = AtomicUsize::new(0);

        // 配置 rayon 线程池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()?;

        let outcomes: Vec<JobOutcome> = pool.install(|| {
            jobs.into_par_iter()
                .map(|job| {
                    let status = processor(&job, &pb);

                    if matches!(status, JobStatus::Failed { .. }) {
                        let failed = failed_count.fetch_add(1, Ordering::Relaxed) + 1;
                        pb.set_message(format!("Converting ({} failed)", failed));
                    }

                    pb.inc(1);
                    JobOutcome { job, status }
                })
                .collect()
        });

        pb.finish_and_clear();
        Ok(outcomes)
    }
}
