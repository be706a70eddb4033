// ==========================================
// 制鞋订单跟踪系统 - 引擎层
// ==========================================
// 职责: 排期计算 / 重算 / 延误分析的纯业务规则
// 红线: 引擎不做持久化, 输入输出都是内存值对象,
//       落库由调用方经仓储协作方完成
// ==========================================

pub mod arrival;
pub mod delay;
pub mod error;
pub mod recalc;
pub mod schedule;
pub mod status;

// 重导出核心引擎
pub use arrival::{ArrivalEstimate, ExpectedArrivalProjector};
pub use delay::{DelayClassifier, DelayMetric};
pub use error::{ScheduleError, ScheduleResult};
pub use recalc::ScheduleRecalculator;
pub use schedule::{Schedule, ScheduleCalculator};
pub use status::{DelayedProcess, OrderStatusAggregator, OrderStatusSummary};
