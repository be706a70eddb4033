// ==========================================
// 制鞋订单跟踪系统 - 领域层
// ==========================================
// 职责: 纯值对象, 不含排期规则
// ==========================================

pub mod order;
pub mod process;
pub mod types;

pub use order::Order;
pub use process::{ProcessDefinition, ProcessInstance};
pub use types::{DelayVerdict, OrderStatus, ProcessCategory};
