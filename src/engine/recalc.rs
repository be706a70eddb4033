// ==========================================
// 制鞋订单跟踪系统 - 排期重算引擎
// ==========================================
// 职责: 锚点变更后重算下游目标日 (下单日期变更 / 链中手工改期 / 航线变更)
// 红线: 实绩字段 (actual_date/evidence_reference/delay_reason) 不得被重算覆盖
// 红线: 锚点之前的目标日不动, 仅锚点之后级联重算
// 红线: 输入无效时整链保持原样, 不产生半改状态
// ==========================================

use crate::config::{LeadTimeOverrides, ProcessCatalog, RouteLeadTimeTable};
use crate::domain::order::Order;
use crate::domain::process::ProcessInstance;
use crate::domain::types::ProcessCategory;
use crate::engine::error::{ScheduleError, ScheduleResult};
use crate::engine::schedule::{advance_date, Schedule, ScheduleCalculator};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::instrument;

// ==========================================
// ScheduleRecalculator - 排期重算引擎
// ==========================================
pub struct ScheduleRecalculator {
    catalog: Arc<ProcessCatalog>,
    calculator: ScheduleCalculator,
}

impl ScheduleRecalculator {
    pub fn new(catalog: Arc<ProcessCatalog>, route_table: Arc<RouteLeadTimeTable>) -> Self {
        let calculator = ScheduleCalculator::new(catalog.clone(), route_table);
        Self { catalog, calculator }
    }

    // ==========================================
    // 场景1: 下单日期变更 (整链再生成, 实绩按键带回)
    // ==========================================

    /// 下单日期变更后重建整条排期
    ///
    /// # 参数
    /// - `order`: 现有订单 (只读, 提供实绩字段来源)
    /// - `new_order_date`: 新下单日期
    /// - `overrides`: 供应商提前期覆盖表
    /// - `route`: 航线 (调用方已完成订单级/供应商级解析)
    ///
    /// # 返回
    /// - `Ok(Schedule)`: 全新排期, 实绩字段按工序键从旧链带回
    /// - `Err`: 计算中止, 调用方持有的订单保持原样
    #[instrument(skip(self, order, overrides), fields(order_id = %order.id))]
    pub fn recalculate_for_order_date(
        &self,
        order: &Order,
        new_order_date: NaiveDate,
        overrides: Option<&LeadTimeOverrides>,
        route: Option<&str>,
    ) -> ScheduleResult<Schedule> {
        let mut schedule = self
            .calculator
            .compute_schedule(Some(new_order_date), overrides, route)?;

        carry_actuals_by_key(&mut schedule.production, &order.production_chain);
        carry_actuals_by_key(&mut schedule.shipping, &order.shipping_chain);

        tracing::debug!(
            order_id = %order.id,
            new_order_date = %new_order_date,
            "下单日期变更, 整链已重建"
        );

        Ok(schedule)
    }

    // ==========================================
    // 场景2: 链中手工改期 (锚点原样落值, 之后级联)
    // ==========================================

    /// 单链锚点重算: 锚点工序目标日改为指定值, 其后逐级 prev + lead 推进
    ///
    /// 锚点之前的实例不动; 实绩字段全程保留
    pub fn recalculate_from_anchor(
        &self,
        existing_chain: &[ProcessInstance],
        anchor_index: usize,
        new_anchor_date: NaiveDate,
    ) -> ScheduleResult<Vec<ProcessInstance>> {
        if anchor_index >= existing_chain.len() {
            return Err(ScheduleError::AnchorOutOfRange {
                index: anchor_index,
                len: existing_chain.len(),
            });
        }

        let mut chain = existing_chain.to_vec();
        chain[anchor_index].target_date = Some(new_anchor_date);
        cascade_forward(&mut chain, anchor_index)?;

        Ok(chain)
    }

    /// 订单级手工改期: 生产链被改动时, 船运链以新的生产链末工序目标日重新锚定
    ///
    /// # 返回
    /// - `Ok(Schedule)`: 两条链的重算结果, 由调用方整体落回订单
    /// - `Err`: 订单保持原样
    #[instrument(skip(self, order), fields(order_id = %order.id, category = %category))]
    pub fn apply_target_date_edit(
        &self,
        order: &Order,
        category: ProcessCategory,
        anchor_index: usize,
        new_anchor_date: NaiveDate,
    ) -> ScheduleResult<Schedule> {
        match category {
            ProcessCategory::Production => {
                let production =
                    self.recalculate_from_anchor(&order.production_chain, anchor_index, new_anchor_date)?;

                let mut shipping = order.shipping_chain.to_vec();
                if !shipping.is_empty() {
                    let anchor = production.last().and_then(|p| p.target_date);
                    reanchor_chain(&mut shipping, anchor)?;
                }

                Ok(Schedule { production, shipping })
            }
            ProcessCategory::Shipping => {
                let shipping =
                    self.recalculate_from_anchor(&order.shipping_chain, anchor_index, new_anchor_date)?;

                Ok(Schedule {
                    production: order.production_chain.to_vec(),
                    shipping,
                })
            }
        }
    }

    // ==========================================
    // 场景3: 航线变更 (仅 uses_route 工序重解析, 之后级联)
    // ==========================================

    /// 航线变更后重算船运链
    ///
    /// 仅 uses_route 工序按新航线重解析提前期 (未登记航线回退通用值);
    /// 自首个受影响工序起向后级联, 更早的目标日不动
    #[instrument(skip(self, order, overrides), fields(order_id = %order.id, route = new_route.unwrap_or("-")))]
    pub fn recalculate_for_route(
        &self,
        order: &Order,
        new_route: Option<&str>,
        overrides: Option<&LeadTimeOverrides>,
    ) -> ScheduleResult<Vec<ProcessInstance>> {
        let mut chain = order.shipping_chain.to_vec();
        let mut first_affected: Option<usize> = None;

        // 按键匹配目录定义, 不依赖位置
        for def in self.catalog.shipping().iter().filter(|d| d.uses_route) {
            let Some(idx) = chain.iter().position(|p| p.process_key == def.key) else {
                continue;
            };

            let lead_time_days = self.calculator.resolve_lead_time(def, overrides, new_route)?;
            chain[idx].lead_time_days = lead_time_days;
            chain[idx].route = new_route.map(str::to_string);

            first_affected = Some(first_affected.map_or(idx, |f: usize| f.min(idx)));
        }

        if let Some(start) = first_affected {
            // 锚点 = 受影响工序的前一目标日; 链首工序则锚到生产链末尾
            let anchor = if start == 0 {
                order
                    .production_chain
                    .last()
                    .and_then(|p| p.target_date)
                    .or(order.order_date)
            } else {
                chain[start - 1].target_date
            };

            chain[start].target_date = match anchor {
                Some(date) => Some(advance_date(date, chain[start].lead_time_days)?),
                None => None,
            };
            cascade_forward(&mut chain, start)?;
        }

        Ok(chain)
    }
}

// ==========================================
// 链工具
// ==========================================

/// 自锚点之后逐工序级联: target[i] = target[i-1] + lead[i]
///
/// 前序目标日缺失时后续目标日同样置空
fn cascade_forward(chain: &mut [ProcessInstance], from: usize) -> ScheduleResult<()> {
    for i in from + 1..chain.len() {
        chain[i].target_date = match chain[i - 1].target_date {
            Some(prev) => Some(advance_date(prev, chain[i].lead_time_days)?),
            None => None,
        };
    }
    Ok(())
}

/// 整链重新锚定: 链首目标日 = 锚点 + 链首提前期, 其后级联
fn reanchor_chain(chain: &mut [ProcessInstance], anchor: Option<NaiveDate>) -> ScheduleResult<()> {
    if chain.is_empty() {
        return Ok(());
    }

    chain[0].target_date = match anchor {
        Some(date) => Some(advance_date(date, chain[0].lead_time_days)?),
        None => None,
    };
    cascade_forward(chain, 0)
}

/// 实绩字段按工序键带回 (键匹配, 不依赖位置)
fn carry_actuals_by_key(new_chain: &mut [ProcessInstance], old_chain: &[ProcessInstance]) {
    for instance in new_chain.iter_mut() {
        if let Some(old) = old_chain.iter().find(|p| p.process_key == instance.process_key) {
            instance.carry_actuals_from(old);
        }
    }
}
