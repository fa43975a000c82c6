pub const SCREEN_WIDTH: usize = 160;
pub const SCREEN_HEIGHT: usize = 144;
pub const BYTES_PER_PIXEL: usize = 4;

pub const FRAME_BUFFER_LEN: usize = SCREEN_WIDTH * SCREEN_HEIGHT * BYTES_PER_PIXEL;

/// RGBA8 video output, row-major and top-to-bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer(Vec<u8>);

impl FrameBuffer {
    /// Alternating red/green pixels, shown until a PPU writes real frames.
    #[must_use]
    pub fn test_pattern() -> Self {
        let mut pixels = vec![0; FRAME_BUFFER_LEN];

        for (i, pixel) in pixels.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
            let color = if i % 2 == 0 {
                [255, 0, 0, 255]
            } else {
                [0, 255, 0, 255]
            };
            pixel.copy_from_slice(&color);
        }

        Self(pixels)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[cfg(test)]
    fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let start = (y * SCREEN_WIDTH + x) * BYTES_PER_PIXEL;
        let mut pixel = [0; 4];
        pixel.copy_from_slice(&self.0[start..start + BYTES_PER_PIXEL]);
        pixel
    }
}
