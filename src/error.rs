//! # 错误类型模块
//!
//! 核心编解码与指标计算可能产生的全部错误。所有错误都是可恢复的，
//! 由调用方 (例如 `handler`) 决定如何展示给用户。

use thiserror::Error;

/// 核心操作的结果类型。
pub type Result<T> = std::result::Result<T, StegoError>;

/// 隐写与指标计算中可能出现的错误。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// 调用操作前没有提供所需的图像缓冲区或文本。
    #[error("Missing input: {0}")]
    MissingInput(&'static str),

    /// 消息位数 (含结束标记) 超出载体容量。
    #[error("Not enough space in the image to hide the text. Required: {required} bits, Available: {available} bits")]
    CapacityExceeded { required: usize, available: usize },

    /// 字符码点超出 0..=255，无法用 8 位表示。
    #[error("Character {character:?} at index {index} cannot be encoded in 8 bits")]
    InvalidCharacter { character: char, index: usize },

    /// 去掉结束标记后的位数不是 8 的倍数。
    #[error("Recovered bit count {0} is not a multiple of 8")]
    MalformedBitLength(usize),

    /// 扫描完整个缓冲区也没有遇到结束标记。
    #[error("No hidden text found in the image")]
    MessageNotFound,

    /// 两个缓冲区形状不同，无法比较。
    #[error("Image dimensions differ: {left:?} vs {right:?}")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// 原始数据长度与给定的宽高不符。
    #[error("Pixel data of length {len} does not match {height}x{width}x3")]
    InvalidDimensions {
        height: usize,
        width: usize,
        len: usize,
    },
}
