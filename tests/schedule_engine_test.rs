// ==========================================
// 排期引擎集成测试
// ==========================================
// 测试范围:
// 1. 端到端排期场景 (航线优先于默认值)
// 2. 计算幂等性
// 3. 下单日期变更后的实绩保留
// 4. 改期 -> 延误分析的全链路
// ==========================================

use chrono::NaiveDate;
use shoe_order_tracking::domain::types::ProcessCategory;
use shoe_order_tracking::{
    logging, LeadTimeOverrides, Order, ProcessCatalog, ProcessDefinition, RouteLeadTimeTable,
    ScheduleCalculator, ScheduleRecalculator,
};
use std::collections::HashMap;
use std::sync::Arc;

// ==========================================
// 辅助函数
// ==========================================

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// 精简目录: 生产 材料/裁断组装/工厂出货, 船运 装柜/到港(按航线)
fn compact_catalog() -> ProcessCatalog {
    ProcessCatalog::new(
        vec![
            ProcessDefinition::new("material", "材料采购", ProcessCategory::Production, 7),
            ProcessDefinition::new("assembly", "裁断组装", ProcessCategory::Production, 20),
            ProcessDefinition::new("factory_shipment", "工厂出货", ProcessCategory::Production, 3),
        ],
        vec![
            ProcessDefinition::new("loading", "装柜", ProcessCategory::Shipping, 2),
            ProcessDefinition::new("port_arrival", "到港", ProcessCategory::Shipping, 2).with_route(),
        ],
    )
}

fn route_table() -> RouteLeadTimeTable {
    RouteLeadTimeTable::from_entries(vec![("A-B", 5)])
}

fn build_order(calc: &ScheduleCalculator, order_date: NaiveDate, route: Option<&str>) -> Order {
    let schedule = calc
        .compute_schedule(Some(order_date), None, route)
        .expect("计算排期失败");

    Order {
        id: "ORD-E2E-001".to_string(),
        order_date: Some(order_date),
        supplier_id: "SUP-001".to_string(),
        route: route.map(str::to_string),
        production_chain: schedule.production,
        shipping_chain: schedule.shipping,
        required_delivery_date: None,
    }
}

// ==========================================
// 端到端场景
// ==========================================

#[test]
fn test_e2e_route_override_beats_default() {
    // 下单 2025-03-01, 提前期 {material:7, assembly:20, factory_shipment:3},
    // 航线 A-B 表值5天只作用于到港工序, 其默认2天被忽略
    logging::init_test();

    let calc = ScheduleCalculator::new(Arc::new(compact_catalog()), Arc::new(route_table()));

    let mut overrides: LeadTimeOverrides = HashMap::new();
    overrides.insert("material".to_string(), 7);
    overrides.insert("assembly".to_string(), 20);
    overrides.insert("factory_shipment".to_string(), 3);

    let schedule = calc
        .compute_schedule(Some(d(2025, 3, 1)), Some(&overrides), Some("A-B"))
        .expect("计算排期失败");

    // 生产链: 03-01 + 7 + 20 + 3 = 03-31
    assert_eq!(schedule.production[2].target_date, Some(d(2025, 3, 31)), "工厂出货目标日");
    // 装柜: + 2 = 04-02
    assert_eq!(schedule.shipping[0].target_date, Some(d(2025, 4, 2)), "装柜目标日");
    // 到港: + 5 (航线值, 非默认2) = 04-07
    assert_eq!(schedule.shipping[1].lead_time_days, 5, "航线提前期应生效");
    assert_eq!(schedule.shipping[1].target_date, Some(d(2025, 4, 7)), "到港目标日按航线计算");
}

#[test]
fn test_compute_schedule_is_idempotent() {
    // 相同输入两次计算结果逐位一致 (无隐藏的当前时间依赖)
    let calc = ScheduleCalculator::new(Arc::new(compact_catalog()), Arc::new(route_table()));

    let first = calc
        .compute_schedule(Some(d(2025, 3, 1)), None, Some("A-B"))
        .expect("计算排期失败");
    let second = calc
        .compute_schedule(Some(d(2025, 3, 1)), None, Some("A-B"))
        .expect("计算排期失败");

    assert_eq!(first.production, second.production, "生产链应逐位一致");
    assert_eq!(first.shipping, second.shipping, "船运链应逐位一致");
}

#[test]
fn test_order_date_change_preserves_operator_fields_bitwise() {
    // 下单日期变更后, 每个键上的实绩三字段逐位保持
    let catalog = Arc::new(compact_catalog());
    let table = Arc::new(route_table());
    let calc = ScheduleCalculator::new(catalog.clone(), table.clone());
    let recalc = ScheduleRecalculator::new(catalog, table);

    let mut order = build_order(&calc, d(2025, 3, 1), Some("A-B"));
    order.production_chain[0].actual_date = Some(d(2025, 3, 9));
    order.production_chain[0].evidence_reference = Some("IMG-2001".to_string());
    order.production_chain[1].actual_date = Some(d(2025, 4, 1));
    order.production_chain[1].delay_reason = Some("鞋面材料补单".to_string());

    let schedule = recalc
        .recalculate_for_order_date(&order, d(2025, 3, 15), None, Some("A-B"))
        .expect("重算失败");

    for old in &order.production_chain {
        let new = schedule
            .production
            .iter()
            .find(|p| p.process_key == old.process_key)
            .expect("重算后工序键应一一对应");
        assert_eq!(new.actual_date, old.actual_date, "实绩日期逐位保持: {}", old.process_key);
        assert_eq!(
            new.evidence_reference, old.evidence_reference,
            "凭证引用逐位保持: {}",
            old.process_key
        );
        assert_eq!(new.delay_reason, old.delay_reason, "延误原因逐位保持: {}", old.process_key);
    }

    // 目标日确已按新锚点移动
    assert_eq!(schedule.production[0].target_date, Some(d(2025, 3, 22)));
}

#[test]
fn test_manual_edit_then_route_change_compose() {
    // 链中改期与航线变更先后作用, 互不破坏上游日期
    let catalog = Arc::new(compact_catalog());
    let table = Arc::new(route_table());
    let calc = ScheduleCalculator::new(catalog.clone(), table.clone());
    let recalc = ScheduleRecalculator::new(catalog, table);

    let mut order = build_order(&calc, d(2025, 3, 1), None);

    // 手工把"裁断组装"(index 1) 改到 04-10 -> 工厂出货 04-13, 装柜 04-15, 到港 04-17
    let schedule = recalc
        .apply_target_date_edit(&order, ProcessCategory::Production, 1, d(2025, 4, 10))
        .expect("改期失败");
    order.production_chain = schedule.production;
    order.shipping_chain = schedule.shipping;

    assert_eq!(order.production_chain[0].target_date, Some(d(2025, 3, 8)), "上游不动");
    assert_eq!(order.production_chain[2].target_date, Some(d(2025, 4, 13)));
    assert_eq!(order.shipping_chain[1].target_date, Some(d(2025, 4, 17)));

    // 再切换航线 A-B: 到港 = 装柜 04-15 + 5 = 04-20, 装柜不动
    order.shipping_chain = recalc
        .recalculate_for_route(&order, Some("A-B"), None)
        .expect("航线重算失败");
    order.route = Some("A-B".to_string());

    assert_eq!(order.shipping_chain[0].target_date, Some(d(2025, 4, 15)), "装柜不动");
    assert_eq!(order.shipping_chain[1].lead_time_days, 5);
    assert_eq!(order.shipping_chain[1].target_date, Some(d(2025, 4, 20)), "到港按新航线");
}
