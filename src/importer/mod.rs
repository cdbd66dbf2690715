// ==========================================
// 楼盘装修选材系统 - 导入层
// ==========================================
// 职责: CSV 目录导出 → 租户参照数据对账
// 流程: 分词 → 表头校验 → 参照解析 → 条目 upsert → 结果聚合
// ==========================================

// 模块声明
pub mod catalog_importer;
pub mod error;
pub mod header;
pub mod resolver;
pub mod tokenizer;
pub mod upsert;

// 重导出核心类型
pub use catalog_importer::CatalogImporter;
pub use error::ImportError;
pub use header::{HeaderMap, REQUIRED_COLUMNS};
pub use resolver::ReferenceResolver;
pub use tokenizer::tokenize_line;
pub use upsert::{CatalogUpserter, UpsertOutcome};
