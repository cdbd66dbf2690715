// ==========================================
// 楼盘装修选材系统 - 数据仓储层
// ==========================================
// 职责: 定义并实现数据访问接口（不包含业务逻辑）
// 红线: Repository 不含业务规则,只做数据 CRUD
// ==========================================

pub mod catalog_repo;
pub mod catalog_repo_impl;
pub mod error;

pub use catalog_repo::CatalogRepository;
pub use catalog_repo_impl::CatalogRepositoryImpl;
pub use error::RepositoryError;
