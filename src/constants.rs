/// 消息结束标记 `1111111111111110`。
/// 属于隐写格式的一部分，不可配置；修改它会导致无法读取旧的隐写图像。
pub const TERMINATOR: [u8; 16] = [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0];

/// 每个字符占用的位数 (码点按 8 位、高位在前写入)。
pub const BITS_PER_CHAR: usize = 8;

/// 可以隐藏的最大字符码点。
pub const MAX_CODE_POINT: u32 = 0xFF;

/// 每个像素的通道数。
pub const CHANNELS: usize = 3;

/// 计算 PSNR 时默认使用的像素峰值。
pub const DEFAULT_MAX_PIXEL: f64 = 255.0;

/// 两幅图像完全相同 (MSE 为 0) 时返回的 PSNR 值。
pub const IDENTICAL_PSNR: f64 = 100.0;

/// 允许作为隐写输出的无损格式扩展名。
pub const LOSSLESS_EXTENSIONS: [&str; 6] = ["png", "bmp", "tif", "tiff", "qoi", "webp"];

/// 未指定输出路径时，隐写图像文件名的前缀。
pub const HIDDEN_IMAGE_PREFIX: &str = "doctored_";

/// 未指定输出路径时，恢复文本文件名的前缀。
pub const RECOVERED_TEXT_PREFIX: &str = "recovered_";
