/// エコーハンドラー
///
/// 入力イベントを固定メッセージと共にJSONボディへ詰め、
/// ステータス200のレスポンスエンベロープとして返す。
use lambda_runtime::Context;
use serde::Serialize;
use thiserror::Error;

use crate::domain::{EchoBody, ResponseEnvelope};

/// エコーハンドラーのエラー型
#[derive(Debug, Error)]
pub enum EchoHandlerError {
    /// 入力イベントをJSONテキストに変換できない
    #[error("入力イベントのシリアライズに失敗: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 入力イベントをエコーするハンドラー
///
/// 状態を持たないため、呼び出し間で共有しても問題ない。
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoHandler;

impl EchoHandler {
    /// 新しいハンドラーを作成
    pub fn new() -> Self {
        Self
    }

    /// イベントを処理してレスポンスエンベロープを生成
    ///
    /// # 引数
    /// * `event` - 任意の入力イベント
    /// * `_context` - Lambda実行コンテキスト（参照しない）
    ///
    /// # 戻り値
    /// * 成功時は`{"message": "Hello, world!", "input": event}`をボディに持つエンベロープ
    /// * `event`がJSONにシリアライズできない場合は`EchoHandlerError::Serialization`
    pub fn handle<E>(&self, event: &E, _context: &Context) -> Result<ResponseEnvelope, EchoHandlerError>
    where
        E: Serialize + ?Sized,
    {
        let body = serde_json::to_string(&EchoBody::new(event))?;
        Ok(ResponseEnvelope::ok(body))
    }
}
