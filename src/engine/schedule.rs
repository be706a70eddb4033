// ==========================================
// 制鞋订单跟踪系统 - 排期计算引擎
// ==========================================
// 职责: 由下单日期 + 提前期级联推算全链目标完成日
// 输入: 下单日期 + 供应商提前期覆盖表 + 航线
// 输出: 生产链与船运链的全新工序实例
// 红线: 生产链末工序即船运链锚点, 游标不重置
// 红线: 不修改任何输入, 始终返回新构建的实例
// ==========================================

use crate::config::{LeadTimeOverrides, ProcessCatalog, RouteLeadTimeTable};
use crate::domain::process::{ProcessDefinition, ProcessInstance};
use crate::engine::error::{ScheduleError, ScheduleResult};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;

// ==========================================
// Schedule - 排期计算结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub production: Vec<ProcessInstance>, // 生产工序链 (目录顺序)
    pub shipping: Vec<ProcessInstance>,   // 船运工序链 (目录顺序)
}

// ==========================================
// ScheduleCalculator - 排期计算引擎
// ==========================================
pub struct ScheduleCalculator {
    catalog: Arc<ProcessCatalog>,
    route_table: Arc<RouteLeadTimeTable>,
}

impl ScheduleCalculator {
    pub fn new(catalog: Arc<ProcessCatalog>, route_table: Arc<RouteLeadTimeTable>) -> Self {
        Self { catalog, route_table }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算全链排期
    ///
    /// # 参数
    /// - `order_date`: 下单日期; 缺失时所有目标日为空, 不报错, 由调用方自行校验
    /// - `overrides`: 供应商提前期覆盖表 (工序键 -> 天数), 缺失的键回退默认值
    /// - `route`: 航线; 仅对 uses_route 工序生效, 且优先于覆盖表/默认值
    ///
    /// # 返回
    /// - `Ok(Schedule)`: 生产链 + 船运链, 游标贯穿两链不重置
    /// - `Err(UnknownLeadTimeKey)`: 某工序既无覆盖也无默认提前期 (配置缺陷)
    #[instrument(skip(self, overrides), fields(route = route.unwrap_or("-")))]
    pub fn compute_schedule(
        &self,
        order_date: Option<NaiveDate>,
        overrides: Option<&LeadTimeOverrides>,
        route: Option<&str>,
    ) -> ScheduleResult<Schedule> {
        let mut cursor = order_date;
        let production = self.build_chain(self.catalog.production(), &mut cursor, overrides, route)?;
        let shipping = self.build_chain(self.catalog.shipping(), &mut cursor, overrides, route)?;
        Ok(Schedule { production, shipping })
    }

    /// 解析单个工序的提前期
    ///
    /// 优先级: 航线表 (仅 uses_route 工序) > 覆盖表 > 目录默认值
    /// 航线未登记时回退到通用提前期并告警, 不中止计算
    pub(crate) fn resolve_lead_time(
        &self,
        def: &ProcessDefinition,
        overrides: Option<&LeadTimeOverrides>,
        route: Option<&str>,
    ) -> ScheduleResult<i64> {
        if def.uses_route {
            if let Some(route) = route {
                match self.route_table.lead_time_days(route) {
                    Some(days) => return validate_lead_time(&def.key, days),
                    None => {
                        tracing::warn!(
                            process_key = %def.key,
                            route = %route,
                            "航线未登记, 回退到通用提前期"
                        );
                    }
                }
            }
        }

        let days = overrides
            .and_then(|map| map.get(&def.key).copied())
            .or(def.default_lead_time_days)
            .ok_or_else(|| ScheduleError::UnknownLeadTimeKey {
                process_key: def.key.clone(),
            })?;

        validate_lead_time(&def.key, days)
    }

    fn build_chain(
        &self,
        defs: &[ProcessDefinition],
        cursor: &mut Option<NaiveDate>,
        overrides: Option<&LeadTimeOverrides>,
        route: Option<&str>,
    ) -> ScheduleResult<Vec<ProcessInstance>> {
        let mut chain = Vec::with_capacity(defs.len());

        for def in defs {
            let lead_time_days = self.resolve_lead_time(def, overrides, route)?;

            *cursor = match *cursor {
                Some(date) => Some(advance_date(date, lead_time_days)?),
                None => None,
            };

            chain.push(ProcessInstance {
                process_key: def.key.clone(),
                category: def.category,
                target_date: *cursor,
                actual_date: None,
                lead_time_days,
                route: if def.uses_route {
                    route.map(str::to_string)
                } else {
                    None
                },
                evidence_reference: None,
                delay_reason: None,
            });
        }

        Ok(chain)
    }
}

// ==========================================
// 日期工具
// ==========================================

/// 日期前进指定天数, 溢出报 InvalidDateInput
pub(crate) fn advance_date(date: NaiveDate, days: i64) -> ScheduleResult<NaiveDate> {
    date.checked_add_signed(Duration::days(days))
        .ok_or_else(|| ScheduleError::InvalidDateInput(format!("日期溢出: {} + {}天", date, days)))
}

/// 提前期必须非负
fn validate_lead_time(process_key: &str, days: i64) -> ScheduleResult<i64> {
    if days < 0 {
        return Err(ScheduleError::InvalidDateInput(format!(
            "工序提前期为负: process_key={}, days={}",
            process_key, days
        )));
    }
    Ok(days)
}
