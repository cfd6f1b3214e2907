//! Panda Snake: a grid snake game for the browser.

pub mod components;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod input;
pub mod model;
pub mod session;
pub mod state;
pub mod storage;
pub mod util;
