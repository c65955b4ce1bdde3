pub mod brick;
pub mod candle;
pub mod tick;

pub use brick::{Brick, BrickType};
pub use candle::{Candle, CandleBuilder};
pub use tick::Tick;
