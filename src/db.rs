// ==========================================
// 楼盘装修选材系统 - SQLite 连接初始化
// ==========================================
// 目标:
// - 统一所有 Connection::open 的 PRAGMA 行为,避免"部分模块外键开启/部分不开启"
// - 统一 busy_timeout,减少并发写入时的偶发 busy 错误
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// 默认 busy_timeout（毫秒）
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// 配置 SQLite 连接的统一 PRAGMA
///
/// 说明:
/// - foreign_keys 需要"每个连接"单独开启
/// - busy_timeout 需要"每个连接"单独配置
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// 打开 SQLite 连接并应用统一配置
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// 初始化目录 schema（幂等）
///
/// 名称唯一性决策: 同级名称以 COLLATE NOCASE 唯一索引兜底 ——
/// 两次并发导入竞争创建同名分类时,后到者收到 UNIQUE 冲突,
/// 由导入引擎记为该行的行级错误（引擎内不重试）
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id          TEXT PRIMARY KEY,
            tenant_id   TEXT NOT NULL,
            name        TEXT NOT NULL,
            sort_order  INTEGER NOT NULL DEFAULT 0,
            is_default  INTEGER NOT NULL DEFAULT 0,
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );
        CREATE UNIQUE INDEX IF NOT EXISTS idx_categories_tenant_name
            ON categories(tenant_id, name COLLATE NOCASE);

        CREATE TABLE IF NOT EXISTS components (
            id          TEXT PRIMARY KEY,
            tenant_id   TEXT NOT NULL,
            category_id TEXT NOT NULL REFERENCES categories(id),
            name        TEXT NOT NULL,
            sort_order  INTEGER NOT NULL DEFAULT 0,
            is_default  INTEGER NOT NULL DEFAULT 0,
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );
        CREATE UNIQUE INDEX IF NOT EXISTS idx_components_category_name
            ON components(category_id, name COLLATE NOCASE);

        CREATE TABLE IF NOT EXISTS catalog_items (
            id           TEXT PRIMARY KEY,
            tenant_id    TEXT NOT NULL,
            category_id  TEXT NOT NULL REFERENCES categories(id),
            component_id TEXT NOT NULL REFERENCES components(id),
            description  TEXT,
            model_number TEXT,
            manufacturer TEXT,
            finish       TEXT,
            color        TEXT,
            image_url    TEXT,
            created_at   TEXT NOT NULL,
            updated_at   TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_catalog_items_match_key
            ON catalog_items(tenant_id, category_id, component_id, model_number);
        "#,
    )
}
