/// ログ基盤モジュール
///
/// Lambda環境向けの構造化ログ設定を提供する。
/// tracingクレートを使用し、JSON形式での出力をサポートする。
use std::sync::Once;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::logging_config::{LogFormat, LoggingConfig, DEFAULT_LOG_FILTER};

/// ログサブスクライバー初期化用の同期プリミティブ
static INIT: Once = Once::new();

/// 環境変数の設定でログサブスクライバーを初期化する
///
/// この関数は複数回呼び出しても安全で、最初の呼び出しのみ初期化を実行する。
///
/// # 使用例
/// ```ignore
/// use hello_world::infrastructure::init_logging;
///
/// init_logging();
/// tracing::info!("Lambda function started");
/// ```
pub fn init_logging() {
    init_logging_with(&LoggingConfig::from_env());
}

/// 指定した設定でログサブスクライバーを初期化する
///
/// フィルタ文字列が不正な場合はデフォルト（info）にフォールバックする。
pub fn init_logging_with(config: &LoggingConfig) {
    INIT.call_once(|| {
        let env_filter = build_env_filter(&config.filter);

        // 既に別のサブスクライバーが設定済みの場合は何もしない
        let _ = match config.format {
            LogFormat::Json => {
                // JSON形式のログレイヤー（Lambda/CloudWatch向け）
                let json_layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .flatten_event(true)
                    .with_current_span(false);

                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(json_layer)
                    .try_init()
            }
            LogFormat::Text => {
                let fmt_layer = tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .compact();

                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt_layer)
                    .try_init()
            }
        };
    });
}

/// フィルタディレクティブからEnvFilterを構築
fn build_env_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// テスト用のログサブスクライバーを初期化する（人間が読みやすい形式）
///
/// # 注意
/// この関数はテスト専用であり、本番環境では`init_logging`を使用すること。
#[cfg(test)]
pub fn init_test_logging() {
    static TEST_INIT: Once = Once::new();

    TEST_INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_target(true)
            .compact();

        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init();
    });
}
