//! # 统一错误处理模块
//!
//! 定义 rastconv 的所有错误类型，使用 `thiserror` 派生。
//!
//! 单文件转换错误按阶段（Opening / Decoding / Creating / Encoding）区分，
//! 显示格式固定为 `Error <Stage> <path>: <err>`。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use std::fmt;
use thiserror::Error;

/// 单文件转换的失败阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// 打开源文件
    Opening,
    /// 解码源图像
    Decoding,
    /// 创建目标文件
    Creating,
    /// 编码目标图像
    Encoding,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Opening => write!(f, "Opening"),
            Stage::Decoding => write!(f, "Decoding"),
            Stage::Creating => write!(f, "Creating"),
            Stage::Encoding => write!(f, "Encoding"),
        }
    }
}

/// rastconv 统一错误类型
#[derive(Error, Debug)]
pub enum ConvertError {
    // ─────────────────────────────────────────────────────────────
    // 单文件转换错误
    // ─────────────────────────────────────────────────────────────
    #[error("Error Opening {path}: {source}")]
    OpenError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error Decoding {path}: {source}")]
    DecodeError {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Error Creating {path}: {source}")]
    CreateError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error Encoding {path}: {source}")]
    EncodeError {
        path: String,
        #[source]
        source: image::ImageError,
    },

    // ─────────────────────────────────────────────────────────────
    // 启动阶段错误（致命）
    // ─────────────────────────────────────────────────────────────
    #[error("Could not read directory: {path}: {source}")]
    DirectoryOpenError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not read directory: {path}: not a directory")]
    NotADirectory { path: String },

    #[error("Could not read directory: {source}")]
    DirectoryReadError {
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{count} conversion(s) failed")]
    JobsFailed { count: usize },
}

impl ConvertError {
    /// 单文件转换错误所处的阶段；启动错误返回 `None`
    pub fn stage(&self) -> Option<Stage> {
        match self {
            ConvertError::OpenError { .. } => Some(Stage::Opening),
            ConvertError::DecodeError { .. } => Some(Stage::Decoding),
            ConvertError::CreateError { .. } => Some(Stage::Creating),
            ConvertError::EncodeError { .. } => Some(Stage::Encoding),
            _ => None,
        }
    }

    /// 底层原因（不含阶段与路径前缀）
    pub fn reason(&self) -> String {
        match self {
            ConvertError::OpenError { source, .. } | ConvertError::CreateError { source, .. } => {
                source.to_string()
            }
            ConvertError::DecodeError { source, .. } | ConvertError::EncodeError { source, .. } => {
                source.to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_error_display() {
        let err = ConvertError::OpenError {
            path: "in/a.png".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "Error Opening in/a.png: no such file");
        assert_eq!(err.stage(), Some(Stage::Opening));
        assert_eq!(err.reason(), "no such file");
    }

    #[test]
    fn test_not_a_directory_display() {
        let err = ConvertError::NotADirectory {
            path: "in/a.png".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Could not read directory: in/a.png: not a directory"
        );
        assert_eq!(err.stage(), None);
    }

    #[test]
    fn test_directory_read_error_names_path_once() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("gone");
        let source = walkdir::WalkDir::new(&missing)
            .into_iter()
            .next()
            .unwrap()
            .unwrap_err();

        let msg = ConvertError::DirectoryReadError { source }.to_string();
        assert!(msg.starts_with("Could not read directory: "));
        assert_eq!(msg.matches(&*missing.display().to_string()).count(), 1);
    }

    #[test]
    fn test_startup_error_has_no_stage() {
        let err = ConvertError::InvalidArgument("bad".to_string());
        assert_eq!(err.stage(), None);
        assert_eq!(err.reason(), "Invalid argument: bad");
    }
}
