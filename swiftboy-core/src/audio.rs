/// Capacity of the audio staging buffer, in interleaved stereo samples.
pub const AUDIO_BUFFER_CAPACITY: usize = 2048;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioBuffer {
    samples: Vec<i16>,
    len: usize,
}

impl AudioBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            samples: vec![0; AUDIO_BUFFER_CAPACITY],
            len: 0,
        }
    }

    /// Return the full backing buffer along with the number of valid samples at its start.
    #[must_use]
    pub fn samples(&self) -> (&[i16], usize) {
        (&self.samples, self.len)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append a stereo sample pair. Returns false if the buffer is full.
    pub fn push_frame(&mut self, left: i16, right: i16) -> bool {
        if self.len + 2 > AUDIO_BUFFER_CAPACITY {
            return false;
        }

        self.samples[self.len] = left;
        self.samples[self.len + 1] = right;
        self.len += 2;

        true
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl Default for AudioBuffer {
    fn default() -> Self {
        Self::new()
    }
}
