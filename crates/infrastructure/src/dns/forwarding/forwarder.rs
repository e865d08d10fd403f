//! UDP fallthrough to a single upstream server (RFC 1035 §4.2.1).

use async_trait::async_trait;
use ipecho_application::ports::UpstreamForwarder;
use ipecho_domain::DomainError;
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

pub struct UdpForwarder {
    server_addr: SocketAddr,
    timeout: Duration,
}

impl UdpForwarder {
    pub fn new(server_addr: SocketAddr, timeout: Duration) -> Self {
        Self {
            server_addr,
            timeout,
        }
    }

    fn io_error(&self, e: io::Error) -> DomainError {
        if e.kind() == io::ErrorKind::ConnectionRefused {
            DomainError::TransportConnectionRefused {
                server: self.server_addr.to_string(),
            }
        } else {
            DomainError::IoError(format!("{}: {}", self.server_addr, e))
        }
    }

    fn timeout_error(&self) -> DomainError {
        DomainError::TransportTimeout {
            server: self.server_addr.to_string(),
        }
    }
}

#[async_trait]
impl UpstreamForwarder for UdpForwarder {
    async fn forward(&self, query: &[u8]) -> Result<Vec<u8>, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if self.server_addr.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| self.io_error(e))?;
        socket
            .connect(self.server_addr)
            .await
            .map_err(|e| self.io_error(e))?;

        let bytes_sent = tokio::time::timeout(self.timeout, socket.send(query))
            .await
            .map_err(|_| self.timeout_error())?
            .map_err(|e| self.io_error(e))?;

        debug!(server = %self.server_addr, bytes_sent, "Query forwarded upstream");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        let bytes_received = tokio::time::timeout(self.timeout, socket.recv(&mut recv_buf))
            .await
            .map_err(|_| {
                warn!(server = %self.server_addr, "Upstream did not answer in time");
                self.timeout_error()
            })?
            .map_err(|e| self.io_error(e))?;

        recv_buf.truncate(bytes_received);

        debug!(server = %self.server_addr, bytes_received, "Upstream response received");

        Ok(recv_buf)
    }

    fn upstream(&self) -> String {
        self.server_addr.to_string()
    }
}
