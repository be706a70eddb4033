// ==========================================
// 制鞋订单跟踪系统 - 工序目录与航线提前期表
// ==========================================
// 定位: 进程启动时构建一次的不可变配置值, 经 Arc 注入引擎
// 红线: 目录内顺序即级联顺序, 运行期不得重排
// 红线: 不做隐藏单例, 测试可替换备用目录
// ==========================================

use crate::domain::process::ProcessDefinition;
use crate::domain::types::ProcessCategory;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 供应商提前期覆盖表: 工序键 -> 天数
///
/// 缺失的键回退到工序定义的默认提前期
pub type LeadTimeOverrides = HashMap<String, i64>;

// ==========================================
// ProcessCatalog - 工序目录
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessCatalog {
    production: Vec<ProcessDefinition>, // 生产工序 (有序)
    shipping: Vec<ProcessDefinition>,   // 船运工序 (有序)
}

impl ProcessCatalog {
    /// 由调用方提供的工序定义构建目录
    ///
    /// 传入顺序即级联顺序, 构建后不再排序
    pub fn new(production: Vec<ProcessDefinition>, shipping: Vec<ProcessDefinition>) -> Self {
        Self { production, shipping }
    }

    /// 内置的制鞋标准工序目录
    ///
    /// 生产: 材料采购 -> 来料检验 -> 裁断组装 -> 工厂出货
    /// 船运: 装柜 -> 到港 (到港按航线取运输提前期)
    pub fn standard() -> Self {
        Self::new(
            vec![
                ProcessDefinition::new("material", "材料采购", ProcessCategory::Production, 7),
                ProcessDefinition::new(
                    "incoming_inspection",
                    "来料检验",
                    ProcessCategory::Production,
                    2,
                ),
                ProcessDefinition::new("assembly", "裁断组装", ProcessCategory::Production, 20),
                ProcessDefinition::new(
                    "factory_shipment",
                    "工厂出货",
                    ProcessCategory::Production,
                    3,
                ),
            ],
            vec![
                ProcessDefinition::new("loading", "装柜", ProcessCategory::Shipping, 2),
                ProcessDefinition::new("port_arrival", "到港", ProcessCategory::Shipping, 2)
                    .with_route(),
            ],
        )
    }

    /// 生产工序定义 (目录顺序)
    pub fn production(&self) -> &[ProcessDefinition] {
        &self.production
    }

    /// 船运工序定义 (目录顺序)
    pub fn shipping(&self) -> &[ProcessDefinition] {
        &self.shipping
    }

    /// 目录内工序总数
    pub fn len(&self) -> usize {
        self.production.len() + self.shipping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.production.is_empty() && self.shipping.is_empty()
    }
}

// ==========================================
// RouteLeadTimeTable - 航线提前期表
// ==========================================
// 键: 起运港-目的港 (如 "Xiamen-LongBeach")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteLeadTimeTable {
    routes: HashMap<String, i64>,
}

impl RouteLeadTimeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 由 (航线, 天数) 列表构建
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        Self {
            routes: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// 查询航线运输提前期, 未登记的航线返回 None
    ///
    /// 航线是建议性优化: 查不到不算错误, 由调用方回退到通用提前期
    pub fn lead_time_days(&self, route: &str) -> Option<i64> {
        self.routes.get(route).copied()
    }

    pub fn contains(&self, route: &str) -> bool {
        self.routes.contains_key(route)
    }
}
