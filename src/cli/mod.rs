//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 命令结构
//! 无子命令：`rastconv -i <input> -o <output> [-p] [选项]`
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: convert

pub mod convert;

use clap::Parser;

/// rastconv - 批量栅格图像格式转换
#[derive(Parser, Debug)]
#[command(name = "rastconv")]
#[command(version)]
#[command(about = "Batch-convert raster images from one format to another", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub convert: convert::ConvertArgs,
}
