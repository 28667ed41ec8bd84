//! Listener Config

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Args;

/// Port the catalog API listens on unless told otherwise.
pub const DEFAULT_PORT: u16 = 8080;

/// Where the catalog API accepts connections.
#[derive(Debug, Args)]
pub struct ListenConfig {
    /// Interface address to bind, all interfaces by default
    #[arg(
        short = 'H',
        long,
        env = "SERVER_HOST",
        default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED)
    )]
    pub host: IpAddr,

    /// TCP port to bind
    #[arg(short, long, env = "SERVER_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl ListenConfig {
    /// Address handed to the TCP listener.
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
