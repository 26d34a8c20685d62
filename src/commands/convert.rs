//! # convert 命令实现
//!
//! 批量转换栅格图像格式。
//!
//! ## 功能
//! - 列出输入目录的直接子条目（跳过子目录）
//! - 每个条目派生一个作业：目标文件名替换扩展名，目标冲突的作业不执行
//! - 串行或并行执行，单个作业失败只影响该作业
//! - 汇总统计、失败表格与可选 CSV 报告
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `batch/`, `codec/`, `models/`
//! - 使用 `utils/output.rs`

use crate::batch::runner::Mode;
use crate::batch::{report, BatchResult, BatchRunner, FileCollector};
use crate::cli::convert::ConvertArgs;
use crate::codec;
use crate::error::{ConvertError, Result, Stage};
use crate::models::{ConversionJob, JobOutcome, JobStatus};
use crate::utils::output;

use indicatif::ProgressBar;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tabled::{Table, Tabled};

/// 失败表格行
#[derive(Debug, Clone, Tabled)]
struct FailureRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Stage")]
    stage: String,
    #[tabled(rename = "Reason")]
    reason: String,
}

/// 执行 convert 命令
pub fn execute(args: ConvertArgs) -> Result<()> {
    if args.create_output {
        fs::create_dir_all(&args.output).map_err(|e| ConvertError::FileWriteError {
            path: args.output.display().to_string(),
            source: e,
        })?;
    }

    // 收集输入文件
    let files = FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)
        .collect()?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No files matched '{}' under {}",
            args.pattern,
            args.input.display()
        ));
    }

    let jobs: Vec<ConversionJob> = files
        .iter()
        .map(|path| ConversionJob::for_source(path, &args.output, args.to))
        .collect();

    // 不同源文件可能派生出同一目标（如 a.png 与 a.PNG），后出现者不执行
    let (jobs, conflicts) = claim_destinations(jobs);
    for conflict in &conflicts {
        if let JobStatus::Failed { reason, .. } = &conflict.status {
            output::print_error(&format!(
                "Error {} {}: {}",
                Stage::Creating,
                conflict.job.destination.display(),
                reason
            ));
        }
    }

    let runner = if args.parallel {
        BatchRunner::parallel(args.jobs)
    } else {
        BatchRunner::sequential()
    };

    let mode = match runner.mode() {
        Mode::Sequential => "sequentially".to_string(),
        Mode::Parallel { workers } => format!("with {} workers", workers),
    };
    output::print_info(&format!(
        "Converting {} file(s) from {} to {} {}",
        jobs.len(),
        args.from,
        args.to,
        mode
    ));

    let mut result = runner.run(jobs, |job, pb| process_job(&args, job, pb))?;
    for conflict in conflicts {
        result.merge(conflict);
    }

    print_summary(&result);

    if let Some(ref report_path) = args.report {
        report::write_report(&result.outcomes, report_path)?;
        output::print_info(&format!("Report saved to '{}'", report_path.display()));
    }

    if args.fail_on_error && result.failed > 0 {
        return Err(ConvertError::JobsFailed {
            count: result.failed,
        });
    }

    Ok(())
}

/// 保证作业的目标路径互不相同
///
/// 按列表顺序，第一个派生出某目标路径的作业保留，其余作业直接标记为失败。
fn claim_destinations(jobs: Vec<ConversionJob>) -> (Vec<ConversionJob>, Vec<JobOutcome>) {
    let mut owners: HashMap<PathBuf, PathBuf> = HashMap::new();
    let mut kept = Vec::with_capacity(jobs.len());
    let mut conflicts = Vec::new();

    for job in jobs {
        match owners.get(&job.destination) {
            Some(owner) => {
                let reason = format!("destination already used by {}", owner.display());
                conflicts.push(JobOutcome {
                    job,
                    status: JobStatus::Failed {
                        stage: Some(Stage::Creating),
                        reason,
                    },
                });
            }
            None => {
                owners.insert(job.destination.clone(), job.source.clone());
                kept.push(job);
            }
        }
    }

    (kept, conflicts)
}

/// 执行单个作业并输出日志
fn process_job(args: &ConvertArgs, job: &ConversionJob, pb: &ProgressBar) -> JobStatus {
    if args.skip_existing && job.destination.exists() {
        pb.suspend(|| output::print_skip(&job.destination));
        return JobStatus::Skipped;
    }

    pb.suspend(|| output::print_converting(&job.source, &job.destination));

    match codec::convert_file(job, args.from, args.to) {
        Ok(()) => {
            pb.suspend(|| output::print_converted(&job.source, &job.destination));
            JobStatus::Converted
        }
        Err(e) => {
            pb.suspend(|| output::print_error(&e.to_string()));
            JobStatus::Failed {
                stage: e.stage(),
                reason: e.reason(),
            }
        }
    }
}

/// 打印汇总信息
fn print_summary(result: &BatchResult) {
    output::print_done(&format!(
        "Done: {} file(s), {} succeeded, {} skipped, {} failed",
        result.total(),
        result.success,
        result.skipped,
        result.failed
    ));

    if result.failed == 0 {
        return;
    }

    let rows: Vec<FailureRow> = result
        .failures()
        .filter_map(|o| match &o.status {
            JobStatus::Failed { stage, reason } => Some(FailureRow {
                file: o.job.source.display().to_string(),
                stage: stage.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string()),
                reason: reason.clone(),
            }),
            _ => None,
        })
        .collect();

    println!("{}", Table::new(rows));
}
