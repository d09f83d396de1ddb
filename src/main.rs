use rpc_sum_server::config::ServerConfig;
use rpc_sum_server::logging;
use rpc_sum_server::server::RpcServer;

#[tokio::main]
async fn main() {
    logging::init();

    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("rpc-sum-server: configuration error: {e}");
            std::process::exit(1);
        }
    };

    let server = RpcServer::new(config);
    if let Err(e) = server.run().await {
        eprintln!("rpc-sum-server: fatal error: {e}");
        std::process::exit(1);
    }
}
