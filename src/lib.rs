use lambda_runtime::{Context, Error, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

// Domain layer modules
pub mod domain;

// Application layer modules
pub mod application;

// Infrastructure layer modules
pub mod infrastructure;

use application::EchoHandler;
use domain::ResponseEnvelope;

/// Lambda関数のメインハンドラー
///
/// # 処理フロー
/// 1. LambdaEventをペイロードとコンテキストに分解
/// 2. EchoHandlerでレスポンスエンベロープを生成
/// 3. シリアライズ失敗時はログ出力後、そのままランタイムへ返却
pub async fn handler(event: LambdaEvent<Value>) -> Result<ResponseEnvelope, Error> {
    let (payload, context) = event.into_parts();

    debug!(request_id = %context.request_id, "イベント受信");

    // Valueは常にシリアライズ可能なため、ここでErrになることはない
    respond(&payload, &context)
}

/// イベントをエコーし、失敗時はエラーログを出してランタイム向けエラーに変換する
pub fn respond<E>(event: &E, context: &Context) -> Result<ResponseEnvelope, Error>
where
    E: Serialize + ?Sized,
{
    match EchoHandler::new().handle(event, context) {
        Ok(envelope) => Ok(envelope),
        Err(err) => {
            error!(request_id = %context.request_id, error = %err, "レスポンス生成に失敗");
            Err(err.into())
        }
    }
}
