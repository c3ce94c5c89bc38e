use dnsrpc_domain::config::ServerConfig;
use dnsrpc_infrastructure::dns::DnsServerHandler;
use hickory_server::ServerFuture;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tracing::{error, info};

pub async fn start_dns_server(
    server_config: &ServerConfig,
    handler: DnsServerHandler,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = server_config.listen_address().parse()?;

    let udp_socket = UdpSocket::bind(socket_addr).await?;
    let tcp_listener = TcpListener::bind(socket_addr).await?;

    let mut server = ServerFuture::new(handler);
    server.register_socket(udp_socket);
    server.register_listener(
        tcp_listener,
        Duration::from_secs(server_config.tcp_timeout_secs),
    );

    info!(bind_address = %socket_addr, "DNS server ready");

    tokio::select! {
        result = server.block_until_done() => {
            if let Err(e) = result {
                error!(error = %e, "DNS server error");
                return Err(e.into());
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
            server.shutdown_gracefully().await?;
        }
    }

    Ok(())
}
