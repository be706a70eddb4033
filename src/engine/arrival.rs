// ==========================================
// 制鞋订单跟踪系统 - 预计到货推算引擎
// ==========================================
// 职责: 部分完工的订单向前投影, 推算最终到货日
// 投影顺序: 生产链在前, 船运链在后 (结构不变量)
// 规则: 已有目标日的工序以目标日为准 (排期结果权威),
//       无目标日的工序按自身提前期累加
// ==========================================

use crate::domain::order::Order;
use crate::domain::process::ProcessInstance;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::instrument;

// ==========================================
// ArrivalEstimate - 预计到货结果
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrivalEstimate {
    pub date: Option<NaiveDate>, // 预计/实际最终到货日
    pub is_estimated: bool,      // true = 尚有未完工工序, 属预估值
}

// ==========================================
// ExpectedArrivalProjector - 预计到货推算引擎
// ==========================================
pub struct ExpectedArrivalProjector;

impl ExpectedArrivalProjector {
    pub fn new() -> Self {
        Self
    }

    /// 推算订单最终到货日
    ///
    /// # 算法
    /// 1. 生产链 + 船运链串成一条投影链
    /// 2. 从尾部向前找最后一个有实绩的工序, 其实绩日作为游标
    ///    (全无实绩时以下单日期起步, 下单日期也缺失则游标为空)
    /// 3. 自该工序之后逐工序向前推进: 有目标日取目标日, 否则游标 + 提前期
    ///
    /// # 边界
    /// - 零工序订单: `{ date: 下单日期, is_estimated: false }`
    /// - 游标为空且工序无目标日: 到货日保持为空
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    pub fn project_arrival(&self, order: &Order) -> ArrivalEstimate {
        let chain: Vec<&ProcessInstance> = order.all_processes().collect();

        if chain.is_empty() {
            return ArrivalEstimate {
                date: order.order_date,
                is_estimated: false,
            };
        }

        let last_completed = chain.iter().rposition(|p| p.actual_date.is_some());

        let mut cursor = match last_completed {
            Some(idx) => chain[idx].actual_date,
            None => order.order_date,
        };

        let resume_from = last_completed.map_or(0, |idx| idx + 1);
        for process in &chain[resume_from..] {
            cursor = match process.target_date {
                Some(target) => Some(target),
                None => cursor
                    .and_then(|c| c.checked_add_signed(Duration::days(process.lead_time_days))),
            };
        }

        ArrivalEstimate {
            date: cursor,
            is_estimated: last_completed.map_or(true, |idx| idx < chain.len() - 1),
        }
    }
}

impl Default for ExpectedArrivalProjector {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::ProcessCategory;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn instance(key: &str, category: ProcessCategory, lead: i64) -> ProcessInstance {
        ProcessInstance {
            process_key: key.to_string(),
            category,
            target_date: None,
            actual_date: None,
            lead_time_days: lead,
            route: None,
            evidence_reference: None,
            delay_reason: None,
        }
    }

    fn empty_order() -> Order {
        Order {
            id: "ORD-T01".to_string(),
            order_date: Some(d(2025, 1, 1)),
            supplier_id: "SUP-001".to_string(),
            route: None,
            production_chain: vec![],
            shipping_chain: vec![],
            required_delivery_date: None,
        }
    }

    #[test]
    fn test_scenario_1_projection_fallback_by_lead_time() {
        // 场景1: 无目标日无实绩 -> 从下单日期按提前期推算
        let mut order = empty_order();
        order.production_chain = vec![instance("material", ProcessCategory::Production, 7)];

        let estimate = ExpectedArrivalProjector::new().project_arrival(&order);

        assert_eq!(estimate.date, Some(d(2025, 1, 8)), "2025-01-01 + 7天");
        assert!(estimate.is_estimated, "尚未完工, 属预估值");
    }

    #[test]
    fn test_scenario_2_target_date_is_authoritative() {
        // 场景2: 有目标日的工序以目标日为准, 不按提前期重推
        let mut order = empty_order();
        let mut p1 = instance("material", ProcessCategory::Production, 7);
        p1.target_date = Some(d(2025, 1, 20)); // 与提前期推算不一致, 以此为准
        let mut p2 = instance("assembly", ProcessCategory::Production, 5);
        p2.target_date = None;
        order.production_chain = vec![p1, p2];

        let estimate = ExpectedArrivalProjector::new().project_arrival(&order);

        assert_eq!(estimate.date, Some(d(2025, 1, 25)), "目标日 2025-01-20 + 5天");
        assert!(estimate.is_estimated);
    }

    #[test]
    fn test_scenario_3_resume_from_last_completed() {
        // 场景3: 部分完工 -> 从最后完工工序的实绩日向前投影
        let mut order = empty_order();
        let mut p1 = instance("material", ProcessCategory::Production, 7);
        p1.target_date = Some(d(2025, 1, 8));
        p1.actual_date = Some(d(2025, 1, 12)); // 晚了4天
        let mut p2 = instance("assembly", ProcessCategory::Production, 5);
        p2.target_date = None; // 无目标日, 按实绩游标 + 提前期
        let mut s1 = instance("port_arrival", ProcessCategory::Shipping, 3);
        s1.target_date = None;
        order.production_chain = vec![p1, p2];
        order.shipping_chain = vec![s1];

        let estimate = ExpectedArrivalProjector::new().project_arrival(&order);

        // 2025-01-12 + 5 + 3
        assert_eq!(estimate.date, Some(d(2025, 1, 20)), "应从实绩日向前累加");
        assert!(estimate.is_estimated);
    }

    #[test]
    fn test_scenario_4_all_completed_is_not_estimated() {
        // 场景4: 全部完工 -> 取末工序实绩日, 非预估
        let mut order = empty_order();
        let mut p1 = instance("material", ProcessCategory::Production, 7);
        p1.actual_date = Some(d(2025, 1, 8));
        let mut s1 = instance("port_arrival", ProcessCategory::Shipping, 3);
        s1.actual_date = Some(d(2025, 1, 15));
        order.production_chain = vec![p1];
        order.shipping_chain = vec![s1];

        let estimate = ExpectedArrivalProjector::new().project_arrival(&order);

        assert_eq!(estimate.date, Some(d(2025, 1, 15)), "全完工取末工序实绩日");
        assert!(!estimate.is_estimated, "全部完工不是预估值");
    }

    #[test]
    fn test_scenario_5_zero_processes() {
        // 场景5: 零工序订单 -> 返回下单日期, 非预估
        let order = empty_order();

        let estimate = ExpectedArrivalProjector::new().project_arrival(&order);

        assert_eq!(estimate.date, Some(d(2025, 1, 1)));
        assert!(!estimate.is_estimated);
    }

    #[test]
    fn test_scenario_6_no_dates_at_all() {
        // 场景6: 下单日期也缺失且无目标日 -> 到货日为空
        let mut order = empty_order();
        order.order_date = None;
        order.production_chain = vec![instance("material", ProcessCategory::Production, 7)];

        let estimate = ExpectedArrivalProjector::new().project_arrival(&order);

        assert_eq!(estimate.date, None, "无任何锚点时到货日为空");
        assert!(estimate.is_estimated);
    }
}
