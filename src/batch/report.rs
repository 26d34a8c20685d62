//! # 作业报告导出
//!
//! 将每个作业的结果按列表顺序写入 CSV。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `csv`, `serde`

use crate::error::{ConvertError, Result};
use crate::models::{JobOutcome, JobRecord};

use std::path::Path;

/// 导出作业报告
///
/// 列: `source,destination,status,stage,error`
pub fn write_report(outcomes: &[JobOutcome], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for outcome in outcomes {
        wtr.serialize(JobRecord::from(outcome))?;
    }

    wtr.flush().map_err(|e| ConvertError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
