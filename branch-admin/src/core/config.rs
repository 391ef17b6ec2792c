use std::path::PathBuf;

/// Default per-file gallery upload limit
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 2_000_000;

/// 管理端配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (slot 数据库、导出文件) |
/// | STORE_KEY | bb_admin_data | 持久化 slot 的键 |
/// | MAX_UPLOAD_BYTES | 2000000 | 单个图片上传上限 |
/// | ADMIN_PASSWORD | admin123 | 登录密码 |
/// | EXPORT_FILE_NAME | bagara-admin-data.json | 导出文件名 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (未设置) | 日志目录，设置后写入滚动文件 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/srv/bagara STORE_KEY=bb_admin_data cargo test
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录
    pub work_dir: PathBuf,
    /// Slot key the whole document is stored under
    pub store_key: String,
    /// Uploads strictly larger than this are skipped
    pub max_upload_bytes: u64,
    pub admin_password: String,
    pub export_file_name: String,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR")
                .unwrap_or_else(|_| "./data".into())
                .into(),
            store_key: std::env::var("STORE_KEY").unwrap_or_else(|_| "bb_admin_data".into()),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            admin_password: std::env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| "admin123".into()),
            export_file_name: std::env::var("EXPORT_FILE_NAME")
                .unwrap_or_else(|_| "bagara-admin-data.json".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Read `.env` (if present), then the process environment
    pub fn load() -> Self {
        dotenv::dotenv().ok();
        Self::from_env()
    }

    /// 使用自定义工作目录覆盖配置
    ///
    /// 常用于测试场景
    pub fn with_work_dir(work_dir: impl Into<PathBuf>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config
    }

    /// redb file holding the persisted slot
    pub fn database_path(&self) -> PathBuf {
        self.work_dir.join("admin.redb")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
