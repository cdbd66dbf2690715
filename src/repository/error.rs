// ==========================================
// 楼盘装修选材系统 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: Display 文案为英文 —— 行级错误会原样进入导入结果,
//       由英文界面直接展示
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== 数据库错误 =====
    #[error("record not found: {entity} '{key}'")]
    NotFound { entity: String, key: String },

    #[error("database lock failed: {0}")]
    LockError(String),

    #[error("database query failed: {0}")]
    DatabaseQueryError(String),

    #[error("unique constraint violation: {0}")]
    UniqueConstraintViolation(String),

    #[error("foreign key violation: {0}")]
    ForeignKeyViolation(String),
}

// 实现 From<rusqlite::Error>
// 约束类错误单独归类: 并发导入竞争建同名分类时,唯一索引冲突
// 会以 UniqueConstraintViolation 形态冒泡为该行的行级错误
impl From<rusqlite::Error> for RepositoryError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(_, Some(msg)) if msg.contains("UNIQUE") => {
                RepositoryError::UniqueConstraintViolation(msg.clone())
            }
            rusqlite::Error::SqliteFailure(_, Some(msg)) if msg.contains("FOREIGN KEY") => {
                RepositoryError::ForeignKeyViolation(msg.clone())
            }
            _ => RepositoryError::DatabaseQueryError(err.to_string()),
        }
    }
}

/// Result 类型别名
pub type RepoResult<T> = Result<T, RepositoryError>;
