pub mod touch;

pub use touch::SwipeState;
