//! # 位序列模块
//!
//! 文本与位序列之间的转换。每个位用一个取值为 0 或 1 的 `u8` 表示。

use crate::constants::{BITS_PER_CHAR, MAX_CODE_POINT, TERMINATOR};
use crate::error::{Result, StegoError};

/// 将文本转换为位序列：每个字符的码点按 8 位、高位在前输出，最后追加结束标记。
///
/// # Errors
///
/// 任一字符码点大于 255 时返回 [`StegoError::InvalidCharacter`]。
pub fn pack(text: &str) -> Result<Vec<u8>> {
    let mut bits = Vec::with_capacity(text.chars().count() * BITS_PER_CHAR + TERMINATOR.len());

    for (index, character) in text.chars().enumerate() {
        let code = character as u32;
        if code > MAX_CODE_POINT {
            return Err(StegoError::InvalidCharacter { character, index });
        }
        bits.extend((0..BITS_PER_CHAR).rev().map(|shift| ((code >> shift) & 1) as u8));
    }

    bits.extend_from_slice(&TERMINATOR);
    Ok(bits)
}

/// 将已去掉结束标记的位序列还原为文本，每 8 位对应一个码点 (Latin-1)。
///
/// # Errors
///
/// 位数不是 8 的倍数时返回 [`StegoError::MalformedBitLength`]。
pub fn unpack(bits: &[u8]) -> Result<String> {
    if bits.len() % BITS_PER_CHAR != 0 {
        return Err(StegoError::MalformedBitLength(bits.len()));
    }

    Ok(bits
        .chunks_exact(BITS_PER_CHAR)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | (bit & 1)))
        .map(char::from)
        .collect())
}

/// 位序列是否以结束标记结尾。
pub fn ends_with_terminator(bits: &[u8]) -> bool {
    bits.ends_with(&TERMINATOR)
}
