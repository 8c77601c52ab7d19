//! # 隐写核心模块
//!
//! 在像素通道的最低有效位中写入和读取位序列。遍历顺序固定为行、列、通道 0→1→2。

use crate::bits::{ends_with_terminator, pack, unpack};
use crate::constants::TERMINATOR;
use crate::error::{Result, StegoError};
use crate::pixels::PixelBuffer;
use log::debug;

/// 将文本隐藏到载体的副本中并返回副本，`carrier` 本身不会被修改。
///
/// # Errors
///
/// * [`StegoError::InvalidCharacter`] - 文本包含码点大于 255 的字符。
/// * [`StegoError::CapacityExceeded`] - 文本位数加结束标记超过载体容量。
pub fn embed(carrier: &PixelBuffer, text: &str) -> Result<PixelBuffer> {
    let mut stego = carrier.clone();
    embed_in_place(&mut stego, text)?;
    Ok(stego)
}

/// 直接在 `carrier` 上隐藏文本。
///
/// 所有检查都在写入前完成：返回错误时缓冲区保持原样。
/// 只修改前 `len(bits)` 个通道值的最低位，其余数据不变。
pub fn embed_in_place(carrier: &mut PixelBuffer, text: &str) -> Result<()> {
    let bits = pack(text)?;
    let available = carrier.capacity();

    if bits.len() > available {
        return Err(StegoError::CapacityExceeded {
            required: bits.len(),
            available,
        });
    }

    debug!(
        "Embedding {} bits into {}x{} carrier ({} bits available)",
        bits.len(),
        carrier.height(),
        carrier.width(),
        available
    );

    carrier
        .as_raw_mut()
        .iter_mut()
        .zip(&bits)
        .for_each(|(byte, &bit)| *byte = (*byte & 0xFE) | bit);

    Ok(())
}

/// 从隐写图像中恢复文本。
///
/// 按与 [`embed`] 相同的顺序逐个读取最低位，第一次出现结束标记时立即停止，
/// 不会继续扫描后面的数据。
///
/// # Errors
///
/// * [`StegoError::MessageNotFound`] - 扫描完整个缓冲区也没有出现结束标记。
/// * [`StegoError::MalformedBitLength`] - 结束标记之前的位数不是 8 的倍数。
pub fn extract(stego: &PixelBuffer) -> Result<String> {
    let mut bits = Vec::new();

    for &byte in stego.as_raw() {
        bits.push(byte & 1);

        if ends_with_terminator(&bits) {
            bits.truncate(bits.len() - TERMINATOR.len());
            debug!("Terminator found after {} payload bits", bits.len());
            return unpack(&bits);
        }
    }

    debug!("Scanned {} bits without finding the terminator", bits.len());
    Err(StegoError::MessageNotFound)
}
