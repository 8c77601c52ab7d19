//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`recover` 和 `metrics` 子命令的高级业务逻辑。
//! 本模块负责图像与文本文件的读写、通过 [`Session`] 调用核心算法以及向用户报告结果。

use crate::cli::{HideArgs, MetricsArgs, RecoverArgs};
use crate::constants::{HIDDEN_IMAGE_PREFIX, LOSSLESS_EXTENSIONS, RECOVERED_TEXT_PREFIX};
use crate::metrics::Metrics;
use crate::pixels::PixelBuffer;
use crate::session::Session;
use anyhow::{Context, Result};
use colored::Colorize;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取载体图像和文本文件、检查输出路径、在图像中隐藏文本，
/// 最后以无损格式写入目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入的图像，或无法读取文本文件。
/// * 输出路径不是无损格式，或目标文件已存在且未指定 `--force`。
/// * 文本为空、包含无法用 8 位表示的字符，或图像空间不足。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let dest = args
        .dest
        .unwrap_or_else(|| default_output_path(&args.image, HIDDEN_IMAGE_PREFIX, "png"));

    ensure_lossless(&dest)?;
    ensure_writable(&dest, args.force)?;

    let mut session = Session::new();
    session.load_cover(load_buffer(&args.image)?);

    let text = fs::read(&args.text).map(decode_text).with_context(|| {
        format!(
            "Unable to read text file: {}",
            args.text.to_string_lossy().red().bold()
        )
    })?;

    let stego = session.embed(&text).with_context(|| {
        format!(
            "Failed to hide the text in {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    stego.to_rgb_image().save(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像、恢复隐藏的文本，并将其写入目标文本文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `RecoverArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入的图像。
/// * 目标文件已存在且未指定 `--force`。
/// * 图像中没有隐藏的文本，或恢复出的位数不完整。
/// * 无法写入到目标文本文件。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let dest = args
        .text
        .unwrap_or_else(|| default_output_path(&args.image, RECOVERED_TEXT_PREFIX, "txt"));

    ensure_writable(&dest, args.force)?;

    let mut session = Session::new();
    session.load_stego(load_buffer(&args.image)?);

    let text = session.extract().with_context(|| {
        format!(
            "Failed to recover text from '{}'. \nThe image may not contain a hidden message or is corrupted.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    fs::write(&dest, text).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully recovered and saved: {}",
        dest.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'Metrics' 命令的执行逻辑。
///
/// 读取原始图像与隐写图像，计算并打印 MSE 和 PSNR。
///
/// # Errors
///
/// 无法读取任一图像，或两幅图像尺寸不同时返回错误。
pub fn handle_metrics(args: MetricsArgs) -> Result<Metrics> {
    let mut session = Session::new();
    session.load_cover(load_buffer(&args.cover)?);
    session.load_stego(load_buffer(&args.stego)?);

    let metrics = session.measure().with_context(|| {
        format!(
            "Unable to compare {} with {}",
            args.cover.to_string_lossy().red().bold(),
            args.stego.to_string_lossy().red().bold()
        )
    })?;

    println!("MSE: {}", format!("{:.5}", metrics.mse).green().bold());
    println!("PSNR: {}", format!("{:.2} dB", metrics.psnr).green().bold());

    Ok(metrics)
}

/// 解码图像文件并转换为 `PixelBuffer`，透明通道会被丢弃。
fn load_buffer(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path).with_context(|| {
        format!(
            "Unable to read image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?
    .to_rgb8();
    debug!(
        "Loaded {} ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(PixelBuffer::from_rgb_image(&img))
}

/// 按 UTF-8 解码文本文件；不是合法 UTF-8 时，逐字节按 Latin-1 映射为字符。
fn decode_text(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes)
        .unwrap_or_else(|err| err.into_bytes().into_iter().map(char::from).collect())
}

/// 在输入文件所在目录下生成 `<prefix><stem>.<extension>`。
fn default_output_path(input: &Path, prefix: &str, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    input.with_file_name(format!("{prefix}{stem}.{extension}"))
}

/// 有损编码会破坏最低位中的数据，输出只允许无损格式。
fn ensure_lossless(path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    anyhow::ensure!(
        LOSSLESS_EXTENSIONS.contains(&extension.as_str()),
        "Output image must use a lossless format ({}), got: {}",
        LOSSLESS_EXTENSIONS.join(", ").green(),
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_sit_next_to_input() {
        let input = Path::new("/tmp/pictures/cat.jpeg");
        assert_eq!(
            default_output_path(input, HIDDEN_IMAGE_PREFIX, "png"),
            PathBuf::from("/tmp/pictures/doctored_cat.png")
        );
        assert_eq!(
            default_output_path(input, RECOVERED_TEXT_PREFIX, "txt"),
            PathBuf::from("/tmp/pictures/recovered_cat.txt")
        );
    }

    #[test]
    fn text_falls_back_to_latin1() {
        assert_eq!(decode_text("café".as_bytes().to_vec()), "café");
        assert_eq!(decode_text(b"caf\xE9 \xFF".to_vec()), "café ÿ");
    }

    #[test]
    fn only_lossless_extensions_are_accepted() {
        assert!(ensure_lossless(Path::new("out.PNG")).is_ok());
        assert!(ensure_lossless(Path::new("out.bmp")).is_ok());
        assert!(ensure_lossless(Path::new("out.jpg")).is_err());
        assert!(ensure_lossless(Path::new("out")).is_err());
    }
}
