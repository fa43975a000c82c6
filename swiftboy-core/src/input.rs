use std::str::FromStr;
use thiserror::Error;

/// Game Boy buttons. The bit layout is a host convention; nothing in the emulation core maps
/// it onto the JOYP register yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Right,
    Left,
    Up,
    Down,
    A,
    B,
    Select,
    Start,
}

impl Button {
    pub const ALL: [Self; 8] = [
        Self::Right,
        Self::Left,
        Self::Up,
        Self::Down,
        Self::A,
        Self::B,
        Self::Select,
        Self::Start,
    ];

    #[must_use]
    pub fn bit(self) -> u8 {
        match self {
            Self::Right => 0x01,
            Self::Left => 0x02,
            Self::Up => 0x04,
            Self::Down => 0x08,
            Self::A => 0x10,
            Self::B => 0x20,
            Self::Select => 0x40,
            Self::Start => 0x80,
        }
    }

    #[must_use]
    pub fn mask<I>(buttons: I) -> u8
    where
        I: IntoIterator<Item = Self>,
    {
        buttons.into_iter().fold(0, |mask, button| mask | button.bit())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid button name: {name}")]
pub struct ParseButtonError {
    name: String,
}

impl FromStr for Button {
    type Err = ParseButtonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let button = match s.trim().to_ascii_lowercase().as_str() {
            "right" => Self::Right,
            "left" => Self::Left,
            "up" => Self::Up,
            "down" => Self::Down,
            "a" => Self::A,
            "b" => Self::B,
            "select" => Self::Select,
            "start" => Self::Start,
            _ => return Err(ParseButtonError { name: s.into() }),
        };

        Ok(button)
    }
}

/// Most recently set button state. Each update overwrites the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputLatch(u8);

impl InputLatch {
    pub fn set(&mut self, mask: u8) {
        self.0 = mask;
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn is_pressed(self, button: Button) -> bool {
        self.0 & button.bit() != 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }
}
