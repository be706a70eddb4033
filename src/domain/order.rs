// ==========================================
// 制鞋订单跟踪系统 - 订单领域模型
// ==========================================
// 不变量: production_chain / shipping_chain 各含目录中
//         每个工序键恰好一个实例, 且按目录顺序排列
// 红线: 链的生成/重建只经由排期引擎, 订单自身不做日期推算
// ==========================================

use crate::domain::process::ProcessInstance;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Order - 生产订单
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,                                // 订单ID
    pub order_date: Option<NaiveDate>,             // 下单日期 (缺失时目标日全部为空)
    pub supplier_id: String,                       // 供应商ID
    pub route: Option<String>,                     // 航线 (订单级指定, 调用方负责解析)
    pub production_chain: Vec<ProcessInstance>,    // 生产工序链 (目录顺序)
    pub shipping_chain: Vec<ProcessInstance>,      // 船运工序链 (目录顺序)
    pub required_delivery_date: Option<NaiveDate>, // 要求交付日
}

impl Order {
    /// 按投影顺序遍历全部工序: 生产链在前, 船运链在后
    pub fn all_processes(&self) -> impl Iterator<Item = &ProcessInstance> {
        self.production_chain.iter().chain(self.shipping_chain.iter())
    }

    /// 到港工序实例 (船运链最后一道工序)
    pub fn arrival_instance(&self) -> Option<&ProcessInstance> {
        self.shipping_chain.last()
    }

    /// 按键查找工序实例 (键匹配, 不依赖位置)
    pub fn find_process(&self, process_key: &str) -> Option<&ProcessInstance> {
        self.all_processes().find(|p| p.process_key == process_key)
    }
}
