use hyper::{server::conn::http1, service};
use hyper_util::rt::TokioIo;
use std::{
    convert::Infallible,
    env,
    net::{Ipv4Addr, SocketAddr},
};
use tokio::{net::TcpListener, runtime::Runtime};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Parse environment variables
    let port = env::var("PORT")?.parse()?;
    let channel_access_token = env::var("CHANNEL_ACCESS_TOKEN")?;
    let openai_api_key = env::var("OPENAI_API_KEY")?;

    let app = api::App::new(api::Config { channel_access_token, openai_api_key });

    // Run the server
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let runtime = Runtime::new()?;
    runtime.block_on(async {
        let listener = TcpListener::bind(addr).await?;
        log::info!("Listening on {addr}.");

        let mut stop = core::pin::pin!(tokio::signal::ctrl_c());
        loop {
            let stream = tokio::select! {
                accepted = listener.accept() => accepted?.0,
                stopped = &mut stop => {
                    stopped?;
                    break;
                }
            };

            let outer = app.clone();
            tokio::spawn(async move {
                let service = service::service_fn(move |req| {
                    let inner = outer.clone();
                    async move { Ok::<_, Infallible>(inner.respond(req).await) }
                });
                if let Err(err) = http1::Builder::new().serve_connection(TokioIo::new(stream), service).await {
                    log::error!("Cannot serve connection: {err}.");
                }
            });
        }

        log::info!("Shutting down.");
        anyhow::Ok(())
    })
}
