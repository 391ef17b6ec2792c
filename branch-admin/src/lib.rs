//! Branch Admin - 餐厅分店目录管理端
//!
//! # 架构概述
//!
//! 单一 JSON 文档保存全部分店、菜单和相册，整体写入一个存储槽。
//!
//! - **管理** (`admin`): 分店 / 菜单 / 相册 CRUD，导入导出
//! - **存储** (`storage`): redb 或内存存储槽
//! - **会话** (`session`): 登录 / 演示模式门控
//! - **确认** (`confirm`): 破坏性操作前询问
//!
//! # 模块结构
//!
//! ```text
//! branch-admin/src/
//! ├── core/          # 配置
//! ├── admin/         # BranchAdmin 及其操作
//! ├── storage/       # 存储槽
//! ├── utils/         # 日志、校验
//! ├── persistence.rs # 文档加载 / 保存
//! ├── session.rs     # 会话状态
//! ├── confirm.rs     # 确认能力
//! └── notice.rs      # 操作提示
//! ```

pub mod admin;
pub mod confirm;
pub mod core;
pub mod notice;
pub mod persistence;
pub mod session;
pub mod storage;
pub mod utils;

// Re-export 公共类型
pub use admin::{
    BranchAdmin, BranchListRow, ExportArtifact, GalleryThumb, MenuRow, UploadFile, UploadReport,
    UploadSkip, UploadSource,
};
pub use confirm::{ActionOutcome, AutoConfirm, Confirm};
pub use core::Config;
pub use notice::{Notice, NoticeLevel};
pub use persistence::{LoadSource, PersistenceGate};
pub use session::SessionState;
pub use storage::{MemorySlots, RedbSlots, SlotStorage, StorageError};

pub use shared::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// dotenv + 配置 + 日志
pub fn setup_environment() -> Config {
    let config = Config::load();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}
