//! # 美化输出工具
//!
//! 提供统一的终端输出样式。所有状态与错误行都写到标准输出。
//!
//! ## 依赖关系
//! - 被 `main.rs` 与 `commands/` 模块使用
//! - 使用 `colored` crate

use colored::Colorize;
use std::path::Path;

/// 打印错误消息
pub fn print_error(msg: &str) {
    println!("{}", msg.red().bold());
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 作业开始: `Converting <src> to <dst>`
pub fn print_converting(src: &Path, dst: &Path) {
    println!("Converting {} to {}", src.display(), dst.display());
}

/// 作业成功: `Converted <src> to <dst>`
pub fn print_converted(src: &Path, dst: &Path) {
    println!(
        "{}",
        format!("Converted {} to {}", src.display(), dst.display()).green()
    );
}

/// 作业跳过
pub fn print_skip(dst: &Path) {
    println!("{}", format!("Skipped {} (already exists)", dst.display()).dimmed());
}
