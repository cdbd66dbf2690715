// ==========================================
// 楼盘装修选材系统 - 运行配置
// ==========================================
// 职责: CLI 参数解析与默认数据库路径
// ==========================================

use anyhow::{bail, Result};
use std::path::PathBuf;

/// 获取默认数据库路径
///
/// 优先使用系统数据目录（如 ~/.local/share/selection-catalog/catalog.db）,
/// 取不到时回退当前目录
pub fn get_default_db_path() -> String {
    let mut dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    dir.push("selection-catalog");

    // 目录不存在则创建;失败时回退当前目录
    if std::fs::create_dir_all(&dir).is_err() {
        return "catalog.db".to_string();
    }

    dir.push("catalog.db");
    dir.to_string_lossy().to_string()
}

// ==========================================
// AppConfig - CLI 运行参数
// ==========================================
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub tenant_id: String,
    pub file_path: String,
    pub db_path: String,
}

impl AppConfig {
    /// 从命令行参数解析
    ///
    /// 用法: catalog-import <tenant_id> <csv_file> [db_path]
    pub fn from_args<I: Iterator<Item = String>>(mut args: I) -> Result<Self> {
        // 跳过程序名
        let program = args.next().unwrap_or_else(|| "catalog-import".to_string());

        let (tenant_id, file_path) = match (args.next(), args.next()) {
            (Some(tenant), Some(file)) => (tenant, file),
            _ => bail!("用法: {} <tenant_id> <csv_file> [db_path]", program),
        };

        let db_path = args.next().unwrap_or_else(get_default_db_path);

        Ok(Self {
            tenant_id,
            file_path,
            db_path,
        })
    }
}
