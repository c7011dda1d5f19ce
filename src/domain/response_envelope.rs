/// Lambdaレスポンスのドメインモデル
///
/// API Gatewayプロキシ互換の`statusCode`/`body`形式を表現する。
use serde::Serialize;

/// レスポンスボディに含める固定メッセージ
pub const HELLO_MESSAGE: &str = "Hello, world!";

/// 常に返却するHTTPステータスコード
pub const STATUS_OK: u16 = 200;

/// レスポンスボディ
///
/// 固定メッセージと入力イベントをそのまま保持する。
/// フィールド順は`message`、`input`の順でシリアライズされる。
#[derive(Debug, Serialize)]
pub struct EchoBody<'a, E: ?Sized> {
    pub message: &'static str,
    pub input: &'a E,
}

impl<'a, E: ?Sized> EchoBody<'a, E> {
    /// 入力イベントを借用してボディを作成
    pub fn new(input: &'a E) -> Self {
        Self {
            message: HELLO_MESSAGE,
            input,
        }
    }
}

/// Lambdaレスポンスエンベロープ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    /// HTTPステータスコード（常に200）
    pub status_code: u16,
    /// JSONテキストにシリアライズ済みのボディ
    pub body: String,
}

impl ResponseEnvelope {
    /// 200 OKのエンベロープを作成
    pub fn ok(body: String) -> Self {
        Self {
            status_code: STATUS_OK,
            body,
        }
    }
}
