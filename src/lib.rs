//! # lsb_steg 库
//!
//! 本库包含 LSB 文本隐写的核心逻辑：文本与位序列的转换、最低位的写入与读取，
//! 以及 MSE / PSNR 失真指标的计算。命令行与文件读写位于 `cli` 和 `handler` 模块。

// 声明库包含的所有模块。

pub mod bits;
pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod metrics;
pub mod pixels;
pub mod session;
pub mod steganography;

pub use error::{Result, StegoError};
pub use metrics::{Metrics, mse, psnr};
pub use pixels::PixelBuffer;
pub use steganography::{embed, embed_in_place, extract};
