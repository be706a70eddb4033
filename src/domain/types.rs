// ==========================================
// 制鞋订单跟踪系统 - 领域类型定义
// ==========================================
// 工序分类 / 延误判定 / 订单状态
// 红线: 链内顺序由工序目录定义,运行期不得重排
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 工序分类 (Process Category)
// ==========================================
// 生产链在前,船运链在后,级联顺序不可颠倒
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessCategory {
    Production, // 生产工序
    Shipping,   // 船运工序
}

impl fmt::Display for ProcessCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessCategory::Production => write!(f, "PRODUCTION"),
            ProcessCategory::Shipping => write!(f, "SHIPPING"),
        }
    }
}

// ==========================================
// 延误判定 (Delay Verdict)
// ==========================================
// 符号约定: actual - target, 正数 = 延误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DelayVerdict {
    None,   // 目标或实绩缺失,无法判定
    Ahead,  // 提前
    OnTime, // 按期
    Late,   // 延误
}

impl fmt::Display for DelayVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DelayVerdict::None => write!(f, "NONE"),
            DelayVerdict::Ahead => write!(f, "AHEAD"),
            DelayVerdict::OnTime => write!(f, "ON_TIME"),
            DelayVerdict::Late => write!(f, "LATE"),
        }
    }
}

// ==========================================
// 订单状态 (Order Status)
// ==========================================
// 两维组合: 是否到港 x 是否存在延误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    ProducingOnTime,  // 生产中-正常
    ProducingDelayed, // 生产中-延误
    ReceivedOnTime,   // 已到港-正常
    ReceivedDelayed,  // 已到港-延误
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl OrderStatus {
    /// 转换为导出/展示用的字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::ProducingOnTime => "PRODUCING_ON_TIME",
            OrderStatus::ProducingDelayed => "PRODUCING_DELAYED",
            OrderStatus::ReceivedOnTime => "RECEIVED_ON_TIME",
            OrderStatus::ReceivedDelayed => "RECEIVED_DELAYED",
        }
    }

    /// 由到港/延误两个维度组合出状态
    pub fn from_flags(is_received: bool, has_delay: bool) -> Self {
        match (is_received, has_delay) {
            (false, false) => OrderStatus::ProducingOnTime,
            (false, true) => OrderStatus::ProducingDelayed,
            (true, false) => OrderStatus::ReceivedOnTime,
            (true, true) => OrderStatus::ReceivedDelayed,
        }
    }
}
