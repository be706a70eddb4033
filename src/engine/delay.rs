// ==========================================
// 制鞋订单跟踪系统 - 延误判定引擎
// ==========================================
// 职责: 目标日 vs 实际日 -> 带符号天数差 + 三态判定
// 红线: 符号约定全局唯一 (actual - target, 正数 = 延误),
//       表格单元 / 订单级延误 / 延误原因汇总共用本函数
// ==========================================

use crate::domain::types::DelayVerdict;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// DelayMetric - 延误度量
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayMetric {
    pub days: Option<i64>,      // 带符号天数差, 任一日期缺失为 None
    pub verdict: DelayVerdict,  // 三态判定
}

// ==========================================
// DelayClassifier - 延误判定引擎
// ==========================================
// 纯函数, 无状态, 无副作用
pub struct DelayClassifier;

impl DelayClassifier {
    pub fn new() -> Self {
        Self
    }

    /// 判定单工序延误
    ///
    /// # 返回
    /// - 任一日期缺失: `{ days: None, verdict: None }`
    /// - 否则 `days = actual - target` (天); 正数延误 / 负数提前 / 零按期
    pub fn classify(
        &self,
        target_date: Option<NaiveDate>,
        actual_date: Option<NaiveDate>,
    ) -> DelayMetric {
        let (Some(target), Some(actual)) = (target_date, actual_date) else {
            return DelayMetric {
                days: None,
                verdict: DelayVerdict::None,
            };
        };

        let days = (actual - target).num_days();
        let verdict = if days > 0 {
            DelayVerdict::Late
        } else if days < 0 {
            DelayVerdict::Ahead
        } else {
            DelayVerdict::OnTime
        };

        DelayMetric {
            days: Some(days),
            verdict,
        }
    }
}

impl Default for DelayClassifier {
    fn default() -> Self {
        Self::new()
    }
}
