//! # 会话模块
//!
//! 保存当前加载的载体图像、隐写图像以及最近一次操作的结果，
//! 由调用方持有并在各个核心函数之间传递，库内部没有任何全局状态。

use crate::error::{Result, StegoError};
use crate::metrics::Metrics;
use crate::pixels::PixelBuffer;
use crate::steganography::{embed, extract};
use log::info;

/// 最近一次成功操作的结果。
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// 已隐藏指定数量的字符。
    Embedded { chars: usize },
    /// 恢复出的文本。
    Recovered(String),
    /// 计算出的失真指标。
    Measured(Metrics),
}

#[derive(Debug, Default)]
pub struct Session {
    cover: Option<PixelBuffer>,
    stego: Option<PixelBuffer>,
    last: Option<Outcome>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_cover(&mut self, cover: PixelBuffer) {
        self.cover = Some(cover);
    }

    pub fn load_stego(&mut self, stego: PixelBuffer) {
        self.stego = Some(stego);
    }

    pub fn cover(&self) -> Option<&PixelBuffer> {
        self.cover.as_ref()
    }

    pub fn stego(&self) -> Option<&PixelBuffer> {
        self.stego.as_ref()
    }

    pub fn last(&self) -> Option<&Outcome> {
        self.last.as_ref()
    }

    /// 将文本隐藏到载体中，结果成为当前的隐写图像。载体保持不变。
    ///
    /// # Errors
    ///
    /// 未加载载体或文本为空时返回 [`StegoError::MissingInput`]，
    /// 其余错误来自 [`embed`]。
    pub fn embed(&mut self, text: &str) -> Result<&PixelBuffer> {
        let cover = self
            .cover
            .as_ref()
            .ok_or(StegoError::MissingInput("cover image"))?;
        if text.is_empty() {
            return Err(StegoError::MissingInput("text to embed"));
        }

        let stego = embed(cover, text)?;
        let chars = text.chars().count();
        info!("Embedded {chars} characters");

        self.last = Some(Outcome::Embedded { chars });
        Ok(&*self.stego.insert(stego))
    }

    /// 从当前的隐写图像中恢复文本。
    pub fn extract(&mut self) -> Result<String> {
        let stego = self
            .stego
            .as_ref()
            .ok_or(StegoError::MissingInput("steganographed image"))?;

        let text = extract(stego)?;
        info!("Recovered {} characters", text.chars().count());

        self.last = Some(Outcome::Recovered(text.clone()));
        Ok(text)
    }

    /// 计算载体与隐写图像之间的失真指标。
    pub fn measure(&mut self) -> Result<Metrics> {
        let (Some(cover), Some(stego)) = (&self.cover, &self.stego) else {
            return Err(StegoError::MissingInput("cover and steganographed images"));
        };

        let metrics = Metrics::between(cover, stego)?;
        info!("MSE {:.5}, PSNR {:.2} dB", metrics.mse, metrics.psnr);

        self.last = Some(Outcome::Measured(metrics));
        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operations_require_inputs() {
        let mut session = Session::new();
        assert_eq!(
            session.embed("hi").unwrap_err(),
            StegoError::MissingInput("cover image")
        );
        assert!(matches!(
            session.extract(),
            Err(StegoError::MissingInput(_))
        ));
        assert!(matches!(
            session.measure(),
            Err(StegoError::MissingInput(_))
        ));

        session.load_cover(PixelBuffer::new(4, 4));
        assert_eq!(
            session.embed("").unwrap_err(),
            StegoError::MissingInput("text to embed")
        );
        assert!(session.last().is_none());
    }

    #[test]
    fn embed_then_extract_then_measure() {
        let mut session = Session::new();
        session.load_cover(PixelBuffer::filled(8, 8, 200));

        session.embed("hello").unwrap();
        assert_eq!(session.last(), Some(&Outcome::Embedded { chars: 5 }));
        assert_eq!(session.cover(), Some(&PixelBuffer::filled(8, 8, 200)));

        assert_ne!(session.stego(), session.cover());
        assert_eq!(session.extract().unwrap(), "hello");

        let metrics = session.measure().unwrap();
        assert!(metrics.mse > 0.0);
        assert_eq!(session.last(), Some(&Outcome::Measured(metrics)));
    }
}
