// ==========================================
// 制鞋订单跟踪系统 - 配置层
// ==========================================
// 职责: 静态配置值(工序目录/航线表), 构建一次注入使用
// ==========================================

pub mod catalog;

pub use catalog::{LeadTimeOverrides, ProcessCatalog, RouteLeadTimeTable};
