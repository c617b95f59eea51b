//! Logging Setup
//!
//! ログレベルはエントリポイントで一度だけ決める

use log::LevelFilter;

/// `--verbose` に対応するログレベル
pub fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// env_logger を初期化する（`RUST_LOG` が設定されていればそちらを優先）
#[cfg_attr(coverage_nightly, coverage(off))]
pub fn init_logger(verbose: bool) {
    let default_filter = log_level(verbose).to_string().to_lowercase();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
