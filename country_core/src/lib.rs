//! `country_core`：国家列表的纯逻辑层，不做任何 I/O。
//!
//! 设计目标：
//! - **核心可复用**：任何 UI（下拉框/自动补全/CLI）都能通过 `Session` 复用同一套逻辑
//! - **分层清晰**：engine -> builder（白名单/置顶/排序） -> filter（查询/相关度） -> 输出 `Vec<ListItem>`
//! - **可替换**：数据集（`Dataset`）与排序规则（`Collator`）都是 trait
pub mod builder;
pub mod collation;
pub mod context;
pub mod dataset;
pub mod engine;
pub mod event;
pub mod filter;
pub mod model;
pub mod options;
pub mod session;

pub use collation::{CodepointCollator, Collator};
pub use dataset::Dataset;
pub use engine::Engine;
pub use event::ListEvent;
pub use model::{CountryRecord, ListItem, ListState, Selection, display_text};
pub use options::{ListOptions, SortBy};
pub use session::Session;
