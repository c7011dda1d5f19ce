// ログ出力設定
//
// 環境変数からログのフィルタと出力形式を読み込む。

/// フィルタ未指定時のデフォルトディレクティブ
pub const DEFAULT_LOG_FILTER: &str = "info";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// CloudWatch向けのJSON形式
    #[default]
    Json,
    /// ローカル実行向けの人間が読みやすい形式
    Text,
}

impl LogFormat {
    /// 文字列から出力形式を判定（未知の値はJSON扱い）
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" | "compact" => LogFormat::Text,
            _ => LogFormat::Json,
        }
    }
}

/// ログ設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// EnvFilterディレクティブ (RUST_LOG環境変数)
    pub filter: String,
    /// 出力形式 (LOG_FORMAT環境変数)
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// 環境変数から設定を読み込み
    ///
    /// - RUST_LOG: EnvFilterディレクティブ（デフォルト: info）
    /// - LOG_FORMAT: `json` または `text`（デフォルト: json）
    pub fn from_env() -> Self {
        let filter = std::env::var("RUST_LOG")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let format = std::env::var("LOG_FORMAT")
            .map(|v| LogFormat::parse(&v))
            .unwrap_or_default();

        Self { filter, format }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // 注: Rust 2024エディションでset_var/remove_varはunsafe
    unsafe fn set_env(key: &str, value: &str) {
        unsafe { std::env::set_var(key, value) };
    }

    unsafe fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key) };
    }

    unsafe fn cleanup_env() {
        unsafe {
            remove_env("RUST_LOG");
            remove_env("LOG_FORMAT");
        }
    }

    #[test]
    #[serial(logging_env)]
    fn test_from_env_defaults() {
        unsafe {
            cleanup_env();
        }

        let config = LoggingConfig::from_env();

        assert_eq!(config, LoggingConfig::default());
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    #[serial(logging_env)]
    fn test_from_env_reads_values() {
        unsafe {
            cleanup_env();
            set_env("RUST_LOG", "hello_world=debug,lambda_runtime=warn");
            set_env("LOG_FORMAT", "text");
        }

        let config = LoggingConfig::from_env();

        assert_eq!(config.filter, "hello_world=debug,lambda_runtime=warn");
        assert_eq!(config.format, LogFormat::Text);

        unsafe {
            cleanup_env();
        }
    }

    /// 空文字のRUST_LOGはデフォルト扱い
    #[test]
    #[serial(logging_env)]
    fn test_from_env_blank_filter_falls_back() {
        unsafe {
            cleanup_env();
            set_env("RUST_LOG", "   ");
        }

        let config = LoggingConfig::from_env();

        assert_eq!(config.filter, DEFAULT_LOG_FILTER);

        unsafe {
            cleanup_env();
        }
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("TEXT"), LogFormat::Text);
        assert_eq!(LogFormat::parse(" pretty "), LogFormat::Text);
        assert_eq!(LogFormat::parse("compact"), LogFormat::Text);
        assert_eq!(LogFormat::parse("yaml"), LogFormat::Json);
        assert_eq!(LogFormat::parse(""), LogFormat::Json);
    }
}
