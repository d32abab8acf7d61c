use std::{error::Error, net::SocketAddr, time::Duration};

use axum_server::{tls_rustls::RustlsConfig, Handle};
use clientele::{infrastructure, ClienteleConfig};
use clientele_web::{router, AppState};
use tracing::{error, info, Level};

#[tokio::main]
async fn main() {
    match ClienteleConfig::load() {
        Ok(config) => {
            tracing_subscriber::fmt()
                .with_max_level(Level::from(&config.logger.level))
                .init();
            if let Err(error) = serve(&config).await {
                error!("アプリケーションエラー: {}", error);
            }
        }
        Err(error) => {
            tracing_subscriber::fmt::init();
            error!("アプリケーションエラー: {}", error)
        }
    }
}

async fn serve(config: &ClienteleConfig) -> Result<(), Box<dyn Error>> {
    let repository = infrastructure::connect(config)?;
    info!("ストレージ: {:?}", config.storage.backend);
    let app = router(AppState::new(repository));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let handle = Handle::new();
    tokio::spawn(shutdown_signal(handle.clone()));

    match &config.server.tls {
        Some(tls) => {
            let rustls = RustlsConfig::from_pem_file(&tls.cert, &tls.key).await?;
            info!("HTTPSで待ち受けを開始します: {}", addr);
            axum_server::bind_rustls(addr, rustls)
                .handle(handle)
                .serve(app.into_make_service())
                .await?;
        }
        None => {
            info!("HTTPで待ち受けを開始します: {}", addr);
            axum_server::bind(addr)
                .handle(handle)
                .serve(app.into_make_service())
                .await?;
        }
    }
    info!("サーバーを停止しました");
    Ok(())
}

async fn shutdown_signal(handle: Handle) {
    if let Err(error) = tokio::signal::ctrl_c().await {
        error!("シグナル待機エラー: {}", error);
        return;
    }
    info!("シャットダウンを開始します");
    handle.graceful_shutdown(Some(Duration::from_secs(10)));
}
