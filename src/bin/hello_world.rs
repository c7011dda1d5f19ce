/// Hello World Lambdaエントリポイント
///
/// 受信したイベントを固定メッセージと共にそのまま返却する。
use hello_world::handler;
use hello_world::infrastructure::init_logging;
use lambda_runtime::{service_fn, Error};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("Hello World Lambda関数を初期化");

    // Lambda関数を初期化して実行
    let func = service_fn(handler);
    lambda_runtime::run(func).await?;
    Ok(())
}
