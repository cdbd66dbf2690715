// ==========================================
// 楼盘装修选材系统 - 领域层
// ==========================================
// 职责: 实体定义与传输类型,不含业务逻辑
// ==========================================

pub mod catalog;

pub use catalog::{
    CatalogItem, CatalogItemFields, Category, Component, ImportReport, ImportRow, RowError,
};
