//! 核心模块 - 配置
//!
//! - [`Config`] - 管理端配置

pub mod config;

pub use config::{Config, DEFAULT_MAX_UPLOAD_BYTES};
