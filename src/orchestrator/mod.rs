//! 编排层（Orchestration Layer）
//!
//! 只做调度：配置 → 流程 → 报告。
//!
//! ```text
//! orchestrator::App
//!     ↓
//! workflow::ValidationFlow (准入 → 结构检查)
//!     ↓
//! services (扫描 / 加载 / 检查 / 报告)
//!     ↓
//! infrastructure (解析器与文档)
//! ```

pub mod app;

pub use app::App;
