pub mod rolling;

pub use rolling::RollingWindow;
