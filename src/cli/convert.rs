//! # 转换参数 CLI 定义
//!
//! 批量转换栅格图像格式 (默认 .png -> .jpg)
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use clap::{Args, ValueEnum};
use image::ImageFormat;
use std::path::PathBuf;

/// 支持的栅格格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum RasterFormat {
    /// Portable Network Graphics
    Png,
    /// JPEG (alpha channel is dropped)
    #[value(alias = "jpg")]
    Jpeg,
    /// Windows bitmap
    Bmp,
    /// Graphics Interchange Format (first frame)
    Gif,
    /// Tagged Image File Format
    #[value(alias = "tif")]
    Tiff,
    /// WebP (lossless encoding)
    Webp,
}

impl RasterFormat {
    /// 输出文件扩展名
    pub fn extension(&self) -> &'static str {
        match self {
            RasterFormat::Png => "png",
            RasterFormat::Jpeg => "jpg",
            RasterFormat::Bmp => "bmp",
            RasterFormat::Gif => "gif",
            RasterFormat::Tiff => "tiff",
            RasterFormat::Webp => "webp",
        }
    }

    /// 对应的 `image` crate 格式
    pub fn image_format(&self) -> ImageFormat {
        match self {
            RasterFormat::Png => ImageFormat::Png,
            RasterFormat::Jpeg => ImageFormat::Jpeg,
            RasterFormat::Bmp => ImageFormat::Bmp,
            RasterFormat::Gif => ImageFormat::Gif,
            RasterFormat::Tiff => ImageFormat::Tiff,
            RasterFormat::Webp => ImageFormat::WebP,
        }
    }

    /// 编码器是否接受 alpha 通道
    pub fn supports_alpha(&self) -> bool {
        !matches!(self, RasterFormat::Jpeg)
    }

    /// 编码器是否接受 16 位通道
    pub fn supports_16bit(&self) -> bool {
        matches!(self, RasterFormat::Png | RasterFormat::Tiff)
    }
}

impl std::fmt::Display for RasterFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RasterFormat::Png => write!(f, "png"),
            RasterFormat::Jpeg => write!(f, "jpeg"),
            RasterFormat::Bmp => write!(f, "bmp"),
            RasterFormat::Gif => write!(f, "gif"),
            RasterFormat::Tiff => write!(f, "tiff"),
            RasterFormat::Webp => write!(f, "webp"),
        }
    }
}

/// 转换参数
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input directory containing source images
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output directory for converted images
    #[arg(short, long)]
    pub output: PathBuf,

    /// Convert files in parallel
    #[arg(short, long, default_value_t = false)]
    pub parallel: bool,

    /// Source image format
    #[arg(short, long, value_enum, default_value_t = RasterFormat::Png)]
    pub from: RasterFormat,

    /// Destination image format
    #[arg(short, long, value_enum, default_value_t = RasterFormat::Jpeg)]
    pub to: RasterFormat,

    /// Number of parallel workers (0 = one per CPU core)
    #[arg(short, long, env = "RASTCONV_JOBS", default_value_t = 0)]
    pub jobs: usize,

    /// Glob pattern for input file names
    #[arg(long, default_value = "*")]
    pub pattern: String,

    /// Create the output directory if it does not exist
    #[arg(long, default_value_t = false)]
    pub create_output: bool,

    /// Skip files whose destination already exists
    #[arg(long, default_value_t = false)]
    pub skip_existing: bool,

    /// Write a per-file CSV report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Exit with a non-zero status if any conversion failed
    #[arg(long, default_value_t = false)]
    pub fail_on_error: bool,
}
