// ==========================================
// 制鞋订单跟踪系统 - 工序领域模型
// ==========================================
// 工序定义来自工序目录(静态配置), 工序实例挂在订单下
// 红线: actual_date / evidence_reference / delay_reason
//       由实绩录入流程写入, 排期重算不得覆盖
// ==========================================

use crate::domain::types::ProcessCategory;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// ProcessDefinition - 工序定义 (目录数据, 不可变)
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessDefinition {
    pub key: String,                          // 工序键 (类别内唯一)
    pub display_name: String,                 // 显示名称
    pub category: ProcessCategory,            // 工序分类
    pub default_lead_time_days: Option<i64>,  // 默认提前期(天), 缺失视为配置缺陷
    pub uses_route: bool,                     // 是否按航线取运输提前期
}

impl ProcessDefinition {
    pub fn new(
        key: &str,
        display_name: &str,
        category: ProcessCategory,
        default_lead_time_days: i64,
    ) -> Self {
        Self {
            key: key.to_string(),
            display_name: display_name.to_string(),
            category,
            default_lead_time_days: Some(default_lead_time_days),
            uses_route: false,
        }
    }

    /// 标记为按航线取运输提前期的船运工序
    pub fn with_route(mut self) -> Self {
        self.uses_route = true;
        self
    }
}

// ==========================================
// ProcessInstance - 工序实例 (每订单每工序一条)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessInstance {
    pub process_key: String,                // 工序键
    pub category: ProcessCategory,          // 工序分类
    pub target_date: Option<NaiveDate>,     // 目标完成日 (级联计算得出)
    pub actual_date: Option<NaiveDate>,     // 实际完成日 (实绩录入)
    pub lead_time_days: i64,                // 已解析的提前期(天)
    pub route: Option<String>,              // 航线 (仅 uses_route 工序)
    pub evidence_reference: Option<String>, // 实绩凭证引用 (实绩录入)
    pub delay_reason: Option<String>,       // 延误原因 (实绩录入)
}

impl ProcessInstance {
    /// 判断是否已录入实绩
    pub fn is_completed(&self) -> bool {
        self.actual_date.is_some()
    }

    /// 从另一实例复制实绩字段 (按键匹配后调用)
    ///
    /// 排期重算只重建目标日, 实绩字段必须原样带回
    pub fn carry_actuals_from(&mut self, other: &ProcessInstance) {
        self.actual_date = other.actual_date;
        self.evidence_reference = other.evidence_reference.clone();
        self.delay_reason = other.delay_reason.clone();
    }
}
