// ==========================================
// 制鞋订单跟踪系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 中止类错误不得留下半改状态, 调用方持有的链保持原样
// ==========================================

use thiserror::Error;

/// 排期引擎错误类型
#[derive(Error, Debug)]
pub enum ScheduleError {
    // ===== 日期输入错误 (中止计算) =====
    #[error("无效的日期输入: {0}")]
    InvalidDateInput(String),

    // ===== 锚点越界 (中止计算) =====
    #[error("重算锚点越界: index={index}, chain_len={len}")]
    AnchorOutOfRange { index: usize, len: usize },

    // ===== 配置缺陷 (中止计算, 不得静默按0处理) =====
    #[error("工序缺少提前期配置: process_key={process_key}")]
    UnknownLeadTimeKey { process_key: String },

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ScheduleResult<T> = Result<T, ScheduleError>;
