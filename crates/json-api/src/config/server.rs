//! Server Config

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Args;

/// Server runtime network settings.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Server host address
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Server port
    #[arg(short, long, env = "SERVER_PORT", default_value_t = 8698)]
    pub port: u16,
}

impl ServerRuntimeConfig {
    /// Get the socket address for binding.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        SocketAddr::new(self.host, self.port).to_string()
    }
}
