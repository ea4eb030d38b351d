pub mod clock;
pub mod components;
pub mod config;
pub mod export;
pub mod icons;
pub mod list_utils;
pub mod loader;
pub mod modal;
pub mod storage;
