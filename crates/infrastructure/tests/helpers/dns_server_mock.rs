use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// Upstream stand-in: answers every query with one A record
/// (93.184.216.34, TTL 60) for the first question.
pub struct MockDnsServer {
    addr: SocketAddr,
    received: Arc<AtomicUsize>,
    last_query: Arc<Mutex<Option<Vec<u8>>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start() -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let received = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&received);
        let last_query = Arc::new(Mutex::new(None));
        let captured = Arc::clone(&last_query);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::SeqCst);
                            *captured.lock().unwrap() = Some(buf[..len].to_vec());
                            let response = Self::build_mock_response(&buf[..len]);
                            let _ = socket.send_to(&response, peer).await;
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            received,
            last_query,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn received(&self) -> usize {
        self.received.load(Ordering::SeqCst)
    }

    /// Raw bytes of the most recent query.
    pub fn last_query(&self) -> Option<Vec<u8>> {
        self.last_query.lock().unwrap().clone()
    }

    /// Echoes the query's ID, flags it as a recursive response and appends a
    /// compressed A record pointing at the first question name.
    fn build_mock_response(query: &[u8]) -> Vec<u8> {
        let Some(question_end) = Self::first_question_end(query) else {
            return vec![];
        };

        let mut response = Vec::with_capacity(512);

        response.extend_from_slice(&query[0..2]);
        // QR=1, RD=1, RA=1, NOERROR
        response.push(0x81);
        response.push(0x80);
        // QDCOUNT=1, ANCOUNT=1, NSCOUNT=0, ARCOUNT=0
        response.extend_from_slice(&[0x00, 0x01]);
        response.extend_from_slice(&[0x00, 0x01]);
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&[0x00, 0x00]);

        response.extend_from_slice(&query[12..question_end]);

        response.extend_from_slice(&[
            0xc0, 0x0c, // pointer to first question name
            0x00, 0x01, // TYPE A
            0x00, 0x01, // CLASS IN
            0x00, 0x00, 0x00, 0x3c, // TTL 60
            0x00, 0x04, // RDLENGTH
            93, 184, 216, 34,
        ]);

        response
    }

    /// Offset just past the first question (uncompressed QNAME + QTYPE + QCLASS).
    fn first_question_end(query: &[u8]) -> Option<usize> {
        let mut pos = 12;
        loop {
            let len = *query.get(pos)? as usize;
            pos += 1;
            if len == 0 {
                break;
            }
            pos += len;
        }
        let end = pos + 4;
        (end <= query.len()).then_some(end)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
