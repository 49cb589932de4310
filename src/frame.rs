use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to decode image bytes")]
    Malformed(#[from] image::ImageError),
    #[error("decoded image has zero dimensions")]
    Empty,
}

/// A decoded frame: dimensions plus tightly-packed RGBA8 pixels.
///
/// Frames are exclusively owned by whichever slot holds them; handing a
/// frame to the history ring moves it, there is no sharing.
#[derive(Debug, Clone)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Frame {
    /// Decode raw fetched bytes into a frame, guessing the format.
    ///
    /// A successfully decoded frame always has non-zero dimensions;
    /// malformed input is reported as a `DecodeError` and never produces
    /// a partial frame.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let image = image::load_from_memory(bytes)?;
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        if width == 0 || height == 0 {
            return Err(DecodeError::Empty);
        }
        Ok(Self {
            width,
            height,
            pixels: rgba.into_raw(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA8 pixel data, `width * height * 4` bytes, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}
