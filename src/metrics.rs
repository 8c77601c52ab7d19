//! # 失真指标模块
//!
//! 计算两幅同尺寸图像之间的 MSE 与 PSNR。

use crate::constants::{DEFAULT_MAX_PIXEL, IDENTICAL_PSNR};
use crate::error::{Result, StegoError};
use crate::pixels::PixelBuffer;

/// 一对失真指标。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub mse: f64,
    pub psnr: f64,
}

impl Metrics {
    /// 计算 `cover` 与 `stego` 之间的 MSE，并以默认峰值 255 求出 PSNR。
    pub fn between(cover: &PixelBuffer, stego: &PixelBuffer) -> Result<Self> {
        let mse = mse(cover, stego)?;
        Ok(Self {
            mse,
            psnr: psnr(mse, DEFAULT_MAX_PIXEL),
        })
    }
}

/// 所有通道差值平方之和除以 `height * width`。
///
/// 除数不包含通道数，这与旧工具输出的数值保持一致，并非逐元素平均。
///
/// # Errors
///
/// 两个缓冲区形状不同时返回 [`StegoError::DimensionMismatch`]。
pub fn mse(a: &PixelBuffer, b: &PixelBuffer) -> Result<f64> {
    if a.shape() != b.shape() {
        return Err(StegoError::DimensionMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }

    let sum: f64 = a
        .as_raw()
        .iter()
        .zip(b.as_raw())
        .map(|(&x, &y)| {
            let diff = f64::from(x) - f64::from(y);
            diff * diff
        })
        .sum();

    Ok(sum / (a.height() * a.width()) as f64)
}

/// `20 * log10(max_pixel / sqrt(mse))`；`mse` 为 0 时返回 100。
pub fn psnr(mse: f64, max_pixel: f64) -> f64 {
    if mse == 0.0 {
        return IDENTICAL_PSNR;
    }
    20.0 * (max_pixel / mse.sqrt()).log10()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mse_divides_by_pixels_not_channels() {
        let a = PixelBuffer::new(2, 2);
        let b = PixelBuffer::filled(2, 2, 1);
        // 12 个通道各差 1，除以 4 个像素
        assert_eq!(mse(&a, &b).unwrap(), 3.0);
    }

    #[test]
    fn psnr_values() {
        assert_eq!(psnr(0.0, DEFAULT_MAX_PIXEL), 100.0);
        assert!((psnr(1.0, DEFAULT_MAX_PIXEL) - 48.130803608679).abs() < 1e-9);
        assert!((psnr(255.0 * 255.0, DEFAULT_MAX_PIXEL)).abs() < 1e-12);
    }

    #[test]
    fn mse_rejects_mismatched_shapes() {
        let err = mse(&PixelBuffer::new(2, 3), &PixelBuffer::new(3, 2)).unwrap_err();
        assert_eq!(
            err,
            StegoError::DimensionMismatch {
                left: (2, 3),
                right: (3, 2)
            }
        );
    }
}
