use std::{io, sync::Once};

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// 安装日志订阅者（可重复调用）。
///
/// 级别取自 `COUNTRY_LIST_LOG`，例如 `COUNTRY_LIST_LOG=country_core=debug`；
/// 未设置或无效时为 `warn`。输出到 stderr，不干扰列表输出。
pub fn init() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("COUNTRY_LIST_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}
