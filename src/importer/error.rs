// ==========================================
// 楼盘装修选材系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 分级: MissingColumn 为结构性错误,导入整体中止;
//       其余均在行粒度被捕获,转为结果数据而非异常
// ==========================================

use crate::repository::RepositoryError;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 结构性错误（致命,零行处理）=====
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    // ===== 行级校验错误 =====
    #[error("Category and Component are required")]
    MissingCategoryComponent,

    // ===== 解析/持久化错误（行级,信息原样透传）=====
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
