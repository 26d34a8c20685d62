//! # 编解码模块
//!
//! 单文件转换：打开源文件 → 按源格式解码 → 创建目标文件 → 按目标格式编码。
//!
//! ## 功能
//! - 每个阶段的失败映射为带阶段信息的 `ConvertError`
//! - 先解码再创建目标文件，解码失败不会留下目标文件
//! - 编码失败不回滚，部分写入的目标文件保留在磁盘上
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `models/job.rs`, `cli/convert.rs`
//! - 使用 `image` crate

use crate::cli::convert::RasterFormat;
use crate::error::{ConvertError, Result};
use crate::models::ConversionJob;

use image::{DynamicImage, ImageError};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// 转换单个作业
pub fn convert_file(job: &ConversionJob, from: RasterFormat, to: RasterFormat) -> Result<()> {
    let image = decode(&job.source, from)?;
    encode(&image, &job.destination, to)
}

/// 按指定格式解码源文件
pub fn decode(path: &Path, format: RasterFormat) -> Result<DynamicImage> {
    let file = File::open(path).map_err(|e| ConvertError::OpenError {
        path: path.display().to_string(),
        source: e,
    })?;

    image::load(BufReader::new(file), format.image_format()).map_err(|e| {
        ConvertError::DecodeError {
            path: path.display().to_string(),
            source: e,
        }
    })
}

/// 按指定格式编码并写入目标文件（已存在则截断）
pub fn encode(image: &DynamicImage, path: &Path, format: RasterFormat) -> Result<()> {
    let file = File::create(path).map_err(|e| ConvertError::CreateError {
        path: path.display().to_string(),
        source: e,
    })?;

    let encode_err = |e: ImageError| ConvertError::EncodeError {
        path: path.display().to_string(),
        source: e,
    };

    let mut writer = BufWriter::new(file);
    normalize_for(image, format)
        .write_to(&mut writer, format.image_format())
        .map_err(encode_err)?;
    writer
        .flush()
        .map_err(|e| encode_err(ImageError::IoError(e)))?;

    Ok(())
}

/// 将像素数据转换为目标编码器接受的颜色类型
fn normalize_for(image: &DynamicImage, format: RasterFormat) -> DynamicImage {
    let has_alpha = image.color().has_alpha();

    if !format.supports_alpha() {
        return DynamicImage::ImageRgb8(image.to_rgb8());
    }

    // GIF 编码器只接受 RGBA8
    if format == RasterFormat::Gif {
        return DynamicImage::ImageRgba8(image.to_rgba8());
    }

    if format.supports_16bit() {
        return image.clone();
    }

    if has_alpha {
        DynamicImage::ImageRgba8(image.to_rgba8())
    } else {
        DynamicImage::ImageRgb8(image.to_rgb8())
    }
}
