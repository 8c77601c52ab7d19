//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// 基于 LSB (最低有效位) 的文本隐写工具，并可计算隐写前后图像的 MSE 与 PSNR。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "基于 LSB (最低有效位) 的文本隐写工具：在无损格式图像 (如 PNG, BMP) 中隐藏或恢复文本，并计算隐写造成的失真 (MSE / PSNR)。"
)]
pub struct Cli {
    /// 输出调试日志。
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：hide (隐藏)、recover (恢复) 和 metrics (失真指标)。
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 在无损格式图像中隐藏文本文件内容。
    Hide(HideArgs),

    /// 从经过隐写的图像中恢复隐藏的文本。
    Recover(RecoverArgs),

    /// 计算原始图像与隐写图像之间的 MSE 和 PSNR。
    Metrics(MetricsArgs),
}

/// 'hide' 命令所需的参数。
#[derive(Args, Debug)]
pub struct HideArgs {
    /// 用于隐写的载体图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的文本内容的文件路径 (UTF-8 或 Latin-1 编码，字符码点必须在 0-255 之间)。
    #[arg(short, long)]
    pub text: PathBuf,

    /// 结果图像的输出路径，必须是无损格式。默认为输入目录下的 `doctored_<文件名>.png`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}

/// 'recover' 命令所需的参数。
#[derive(Args, Debug)]
pub struct RecoverArgs {
    /// 已隐藏文本数据的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 恢复出的文本的保存路径。默认为输入目录下的 `recovered_<文件名>.txt`。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}

/// 'metrics' 命令所需的参数。
#[derive(Args, Debug)]
pub struct MetricsArgs {
    /// 原始载体图像路径。
    #[arg(short, long)]
    pub cover: PathBuf,

    /// 隐写后的图像路径。
    #[arg(short, long)]
    pub stego: PathBuf,
}
