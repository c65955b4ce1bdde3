use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BrickType {
    Up,
    Down,
}

impl BrickType {
    /// +1 for `Up`, -1 for `Down`.
    pub fn direction(self) -> i8 {
        match self {
            BrickType::Up => 1,
            BrickType::Down => -1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BrickType::Up => "UP",
            BrickType::Down => "DOWN",
        }
    }
}

/// One completed brick. `price` is the grid level the brick closed on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub timestamp_ms: u64,
    pub price: f64,
    #[serde(rename = "type")]
    pub brick_type: BrickType,
    pub volume: f64,
    pub brick_size: f64,
}

impl Brick {
    pub fn is_up(&self) -> bool {
        self.brick_type == BrickType::Up
    }

    pub fn direction(&self) -> i8 {
        self.brick_type.direction()
    }
}
