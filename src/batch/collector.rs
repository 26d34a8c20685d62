//! # 文件收集器
//!
//! 列出输入目录的直接子条目，作为待转换的源文件列表。
//!
//! ## 功能
//! - 非递归，按文件名排序
//! - 子目录静默跳过，其余条目一律作为源文件（不按扩展名过滤）
//! - 可选 glob 模式过滤文件名
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `walkdir` 遍历目录, `glob` 匹配文件名

use crate::error::{ConvertError, Result};

use std::fs;
use std::path::PathBuf;
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入目录
    input: PathBuf,
    /// 文件名匹配模式
    pattern: String,
}

impl FileCollector {
    /// 创建新的文件收集器（默认匹配所有条目）
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            pattern: "*".to_string(),
        }
    }

    /// 设置文件名匹配模式
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        let pattern = pattern.trim();
        if !pattern.is_empty() {
            self.pattern = pattern.to_string();
        }
        self
    }

    /// 收集所有非目录条目
    ///
    /// 目录不存在、不是目录或无法读取时返回错误，调用方应视为致命错误。
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        let glob_pattern = glob::Pattern::new(&self.pattern).map_err(|e| {
            ConvertError::InvalidArgument(format!("Invalid pattern '{}': {}", self.pattern, e))
        })?;

        // 跟随符号链接检查，输入必须是目录
        let metadata = fs::metadata(&self.input).map_err(|e| ConvertError::DirectoryOpenError {
            path: self.input.display().to_string(),
            source: e,
        })?;
        if !metadata.is_dir() {
            return Err(ConvertError::NotADirectory {
                path: self.input.display().to_string(),
            });
        }

        let walker = WalkDir::new(&self.input)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| ConvertError::DirectoryReadError { source: e })?;

            if entry.file_type().is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if glob_pattern.matches(&name) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}
