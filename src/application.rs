// アプリケーション層モジュール
pub mod echo_handler;

// 再エクスポート
pub use echo_handler::{EchoHandler, EchoHandlerError};
