// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的数据库初始化、CSV 构造等功能
// ==========================================

use catalog_import::db::open_sqlite_connection;
use catalog_import::repository::CatalogRepositoryImpl;
use std::error::Error;
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

/// 标准表头（与导出模板一致）
pub const FULL_HEADER: &str =
    "Category,Component,Description,Model Number,Manufacturer,Finish,Color,Image URL";

/// 创建临时测试数据库与 Repository
///
/// # 返回
/// - NamedTempFile: 临时数据库文件（需要保持存活）
/// - String: 数据库文件路径
/// - CatalogRepositoryImpl: 已初始化 schema 的仓储
pub fn create_test_repo() -> Result<(NamedTempFile, String, CatalogRepositoryImpl), Box<dyn Error>>
{
    catalog_import::logging::init_test();

    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file.path().to_str().unwrap().to_string();

    // 统一 PRAGMA 的连接交由 from_connection 初始化 schema
    let conn = open_sqlite_connection(&db_path)?;
    let repo = CatalogRepositoryImpl::from_connection(Arc::new(Mutex::new(conn)))?;

    Ok((temp_file, db_path, repo))
}

/// 由表头与数据行拼出 CSV 全文
pub fn make_csv(rows: &[&str]) -> String {
    let mut lines = vec![FULL_HEADER.to_string()];
    lines.extend(rows.iter().map(|r| r.to_string()));
    lines.join("\n")
}

/// 统计表行数（独立连接,避免与仓储连接互扰）
pub fn count_rows(db_path: &str, table: &str) -> i64 {
    let conn = open_sqlite_connection(db_path).expect("打开统计连接失败");
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
        row.get(0)
    })
    .expect("统计行数失败")
}
