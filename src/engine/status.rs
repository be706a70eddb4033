// ==========================================
// 制鞋订单跟踪系统 - 订单状态汇总引擎
// ==========================================
// 职责: 全链延误汇总 + 四态订单状态分类
// 红线: 只累加正向延误 (提前不抵消延误) - 最坏情况风险口径
// 红线: 所有判定必须输出可解释的 reason
// ==========================================

use crate::domain::order::Order;
use crate::domain::types::OrderStatus;
use crate::engine::delay::DelayClassifier;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::instrument;

// ==========================================
// DelayedProcess - 延误工序明细
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelayedProcess {
    pub process_key: String,          // 工序键
    pub delay_days: i64,              // 延误天数 (正数)
    pub delay_reason: Option<String>, // 实绩录入的延误原因
}

// ==========================================
// OrderStatusSummary - 订单状态汇总
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusSummary {
    pub total_delay_days: i64,                // 延误天数合计 (仅正向)
    pub has_delay: bool,                      // 是否存在任一延误
    pub status: OrderStatus,                  // 四态订单状态
    pub delayed_processes: Vec<DelayedProcess>, // 延误工序明细 (可解释性)
}

impl OrderStatusSummary {
    /// 渲染为 JSON 格式的判定原因, 供审计与前端展示
    pub fn reason_json(&self) -> String {
        json!({
            "status": self.status.as_str(),
            "total_delay_days": self.total_delay_days,
            "has_delay": self.has_delay,
            "delayed": self.delayed_processes.iter().map(|p| json!({
                "process_key": p.process_key,
                "delay_days": p.delay_days,
                "delay_reason": p.delay_reason,
            })).collect::<Vec<_>>(),
        })
        .to_string()
    }
}

// ==========================================
// OrderStatusAggregator - 订单状态汇总引擎
// ==========================================
pub struct OrderStatusAggregator {
    classifier: DelayClassifier,
}

impl OrderStatusAggregator {
    pub fn new() -> Self {
        Self {
            classifier: DelayClassifier::new(),
        }
    }

    /// 汇总订单延误并分类状态
    ///
    /// # 算法
    /// - 到港判定: 船运链末工序 (到港工序) 已有实绩
    /// - 延误口径: 目标日与实绩都在的工序逐个判定, 只累加正向天数
    ///   (提前完工不抵消延误 - 最坏情况风险口径, 不是净额口径)
    /// - 状态 = 到港维度 x 延误维度 的四态组合
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    pub fn aggregate(&self, order: &Order) -> OrderStatusSummary {
        let is_received = order
            .arrival_instance()
            .map_or(false, |p| p.actual_date.is_some());

        let mut total_delay_days = 0i64;
        let mut delayed_processes = Vec::new();

        for process in order.all_processes() {
            let metric = self.classifier.classify(process.target_date, process.actual_date);
            if let Some(days) = metric.days {
                if days > 0 {
                    total_delay_days += days;
                    delayed_processes.push(DelayedProcess {
                        process_key: process.process_key.clone(),
                        delay_days: days,
                        delay_reason: process.delay_reason.clone(),
                    });
                }
            }
        }

        let has_delay = !delayed_processes.is_empty();

        OrderStatusSummary {
            total_delay_days,
            has_delay,
            status: OrderStatus::from_flags(is_received, has_delay),
            delayed_processes,
        }
    }
}

impl Default for OrderStatusAggregator {
    fn default() -> Self {
        Self::new()
    }
}
