// ==========================================
// 制鞋订单跟踪系统 - 核心库
// ==========================================
// 系统定位: 工序排期与延误分析引擎
// 职责: 目标日级联计算 / 锚点重算 / 延误与到货风险分析
// 边界: 持久化 / 鉴权 / 文件上传 / 界面渲染均为外部协作方,
//       本库只消费和产出内存中的订单数据
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 工序目录与航线表
pub mod config;

// 引擎层 - 业务规则
pub mod engine;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{DelayVerdict, OrderStatus, ProcessCategory};

// 领域实体
pub use domain::{Order, ProcessDefinition, ProcessInstance};

// 配置
pub use config::{LeadTimeOverrides, ProcessCatalog, RouteLeadTimeTable};

// 引擎
pub use engine::{
    ArrivalEstimate, DelayClassifier, DelayMetric, DelayedProcess, ExpectedArrivalProjector,
    OrderStatusAggregator, OrderStatusSummary, Schedule, ScheduleCalculator, ScheduleError,
    ScheduleRecalculator, ScheduleResult,
};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "制鞋订单跟踪系统";

// ==========================================
// 预编译检查
// ==========================================
