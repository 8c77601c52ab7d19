//! # 像素缓冲区模块
//!
//! `PixelBuffer` 是核心算法操作的数据：`height × width × 3` 的 `u8` 稠密数组，
//! 按行优先、列次之、通道最后的顺序连续存储。这个遍历顺序就是隐写格式本身，
//! 编码与解码必须一致。

use crate::constants::CHANNELS;
use crate::error::{Result, StegoError};
use image::{Rgb, RgbImage};

/// 三通道、每通道 8 位的像素缓冲区。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    height: usize,
    width: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// 创建一个全零的缓冲区。
    pub fn new(height: usize, width: usize) -> Self {
        Self::filled(height, width, 0)
    }

    /// 创建一个所有通道值都为 `value` 的缓冲区。
    ///
    /// # Panics
    ///
    /// `height * width * 3` 超出 `usize` 时与 `Vec` 一样因容量溢出而 panic。
    pub fn filled(height: usize, width: usize, value: u8) -> Self {
        let len = channel_len(height, width).unwrap_or(usize::MAX);
        Self {
            height,
            width,
            data: vec![value; len],
        }
    }

    /// 由原始通道数据构造缓冲区。
    ///
    /// # Errors
    ///
    /// 如果 `data.len()` 不等于 `height * width * 3`，返回 [`StegoError::InvalidDimensions`]。
    pub fn from_raw(height: usize, width: usize, data: Vec<u8>) -> Result<Self> {
        if channel_len(height, width) != Some(data.len()) {
            return Err(StegoError::InvalidDimensions {
                height,
                width,
                len: data.len(),
            });
        }
        Ok(Self {
            height,
            width,
            data,
        })
    }

    /// 从 `image` 的 RGB 图像转换。
    ///
    /// 缓冲区内的通道顺序为 B,G,R，与 OpenCV 读取图像时的顺序一致，
    /// 因此能读写由旧工具生成的隐写图像。
    pub fn from_rgb_image(img: &RgbImage) -> Self {
        let data = img
            .pixels()
            .flat_map(|&Rgb([r, g, b])| [b, g, r])
            .collect();
        Self {
            height: img.height() as usize,
            width: img.width() as usize,
            data,
        }
    }

    /// 转换回 RGB 图像，供外部保存。
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            let offset = (y as usize * self.width + x as usize) * CHANNELS;
            let px = &self.data[offset..offset + CHANNELS];
            Rgb([px[2], px[1], px[0]])
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// `(height, width)`，通道数固定为 3。
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// 可隐藏的最大位数：`height * width * 3`。
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// 读取 `(row, col, channel)` 处的值，越界时返回 `None`。
    pub fn get(&self, row: usize, col: usize, channel: usize) -> Option<u8> {
        if row >= self.height || col >= self.width || channel >= CHANNELS {
            return None;
        }
        self.data
            .get((row * self.width + col) * CHANNELS + channel)
            .copied()
    }

    /// 按遍历顺序排列的全部通道值。
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

/// `height * width * 3`，溢出时返回 `None`。
fn channel_len(height: usize, width: usize) -> Option<usize> {
    height.checked_mul(width)?.checked_mul(CHANNELS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_image_is_stored_as_bgr() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([10, 20, 30]));
        img.put_pixel(1, 0, Rgb([40, 50, 60]));

        let buffer = PixelBuffer::from_rgb_image(&img);
        assert_eq!(buffer.shape(), (1, 2));
        assert_eq!(buffer.as_raw(), &[30, 20, 10, 60, 50, 40]);
        assert_eq!(buffer.get(0, 1, 2), Some(40));
        assert_eq!(buffer.get(1, 0, 0), None);
        assert_eq!(buffer.to_rgb_image(), img);
    }

    #[test]
    fn from_raw_rejects_wrong_length() {
        let err = PixelBuffer::from_raw(2, 2, vec![0; 11]).unwrap_err();
        assert_eq!(
            err,
            StegoError::InvalidDimensions {
                height: 2,
                width: 2,
                len: 11
            }
        );
        assert_eq!(PixelBuffer::from_raw(2, 2, vec![0; 12]).unwrap().capacity(), 12);
    }

    #[test]
    fn from_raw_rejects_overflowing_shape() {
        let err = PixelBuffer::from_raw(1usize << 63, 2, vec![]).unwrap_err();
        assert_eq!(
            err,
            StegoError::InvalidDimensions {
                height: 1usize << 63,
                width: 2,
                len: 0
            }
        );
        assert!(PixelBuffer::from_raw(usize::MAX, usize::MAX, vec![0; 3]).is_err());
    }
}
