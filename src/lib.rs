// ==========================================
// 楼盘装修选材系统 - 产品目录导入引擎
// ==========================================
// 技术栈: Rust + SQLite
// 系统定位: 租户级产品目录批量导入（幂等、行级容错）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 导入层 - CSV 解析与对账
pub mod importer;

// 配置层 - 运行参数
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    CatalogItem, CatalogItemFields, Category, Component, ImportReport, ImportRow, RowError,
};

// 仓储接口
pub use repository::{CatalogRepository, CatalogRepositoryImpl, RepositoryError};

// 导入引擎
pub use importer::{CatalogImporter, ImportError};

/// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
