//! # rastconv - 批量栅格图像格式转换
//!
//! 将输入目录中的图像逐个解码并以另一种格式重新编码到输出目录，
//! 可选并行执行。
//!
//! ## 用法
//! ```text
//! rastconv -i <inputDir> -o <outputDir> [-p] [-h|--help]
//! ```
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/    (目录枚举、扇出、报告)
//!   │     ├── codec/    (单文件解码/编码)
//!   │     └── models/   (作业数据模型)
//!   ├── utils/      (输出与进度条)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod codec;
mod commands;
mod error;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    // 参数缺失时退出码为 1，-h/--help 退出码为 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            e.print().ok();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
