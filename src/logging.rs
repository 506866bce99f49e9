//! 診断ログ（tracing）の初期化
//!
//! 進捗表示は標準出力に直接書き、こちらは調査用の詳細ログのみ扱う。
//! `RUST_LOG` が設定されていればそれを優先する。

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // テスト等で二重に初期化された場合は無視
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init();
}
