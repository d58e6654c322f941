//! # HTML Submission Check
//!
//! 自动评分检查：验证提交目录中的 HTML 文件是否满足最小结构约定
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有解析器和解析树，只暴露能力
//! - `DocumentParser` - 解析能力（严格 / 宽松）
//! - `SubmissionDocument` - 标签名、子元素、父元素、文本、选择器查询
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 每个模块一种能力
//! - `scanner` - 列出候选文件
//! - `document_loader` - 读取并解析
//! - `checks` - 结构检查 2–9
//! - `reporter` - 文本 / JSON 报告
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 两阶段流程
//! - `gate` - 准入：数量检查、读取、解析
//! - `ValidationFlow` - 准入通过后执行全部结构检查
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/app` - 配置 → 流程 → 报告
//!
//! ## 模块结构
//!
//! - `config` - 配置（默认值 + 环境变量）
//! - `error` - 错误类型
//! - `infrastructure` - 解析器适配和节点接口
//! - `models` - 检查结果、报告、消息模板及其加载
//! - `services` - 目录扫描、读取、结构检查、报告渲染
//! - `workflow` - 准入和检查流程
//! - `orchestrator` - 应用入口
//! - `utils` - 日志

pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::{Config, ReportFormat};
pub use error::{Result, ValidatorError};
pub use infrastructure::{DocumentParser, LenientParser, StrictParser, SubmissionDocument};
pub use models::{CheckId, CheckResult, Messages, ValidationReport, Violation};
pub use orchestrator::App;
pub use utils::logging;
pub use workflow::{GateOutcome, ValidationFlow};
