use std::io;
use std::time::Duration;

use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    Timeout,
    Other(String),
}

/// Blocking GET used by the metadata fetcher.
pub trait Transport {
    fn get(&mut self, url: &str, timeout: Duration) -> Result<HttpResponse, TransportError>;
}

/// One agent per run, so connections are reused across attempts.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(user_agent: &str) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().user_agent(user_agent).build(),
        }
    }
}

impl Transport for UreqTransport {
    fn get(&mut self, url: &str, timeout: Duration) -> Result<HttpResponse, TransportError> {
        debug!("GET {}", url);
        let response = match self.agent.get(url).timeout(timeout).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(transport)) => {
                return Err(classify_transport(&transport));
            }
        };

        let status = response.status();
        let body = response.into_string().map_err(|err| {
            classify_io(&err).unwrap_or_else(|| TransportError::Other(err.to_string()))
        })?;
        Ok(HttpResponse { status, body })
    }
}

fn classify_transport(transport: &ureq::Transport) -> TransportError {
    let io_err =
        std::error::Error::source(transport).and_then(|src| src.downcast_ref::<io::Error>());
    match io_err.and_then(classify_io) {
        Some(err) => err,
        None => TransportError::Other(transport.to_string()),
    }
}

fn classify_io(err: &io::Error) -> Option<TransportError> {
    match err.kind() {
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => Some(TransportError::Timeout),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    #[test]
    fn silent_server_is_a_timeout() {
        // Accepted by the kernel backlog, never answered.
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/releases/1", listener.local_addr().unwrap());

        let result = UreqTransport::new("test").get(&url, Duration::from_millis(300));
        assert_eq!(result, Err(TransportError::Timeout));
        drop(listener);
    }

    #[test]
    fn refused_connection_is_not_a_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/releases/1", listener.local_addr().unwrap());
        drop(listener);

        let result = UreqTransport::new("test").get(&url, Duration::from_millis(300));
        assert!(matches!(result, Err(TransportError::Other(_))));
    }

    #[test]
    fn io_timeouts_map_to_timeout() {
        let timed_out = io::Error::new(io::ErrorKind::TimedOut, "timed out");
        let would_block = io::Error::new(io::ErrorKind::WouldBlock, "would block");
        let reset = io::Error::new(io::ErrorKind::ConnectionReset, "reset");

        assert_eq!(classify_io(&timed_out), Some(TransportError::Timeout));
        assert_eq!(classify_io(&would_block), Some(TransportError::Timeout));
        assert_eq!(classify_io(&reset), None);
    }
}
