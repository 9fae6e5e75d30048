//! Integration tests for the transport layer
//!
//! These tests run real loopback sockets with fake server threads to verify
//! the session lifecycle: happy-path exchange, connection refusal, state
//! transitions, and reply accumulation across multiple writes.

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    use crate::protocol::McpError;
    use crate::transport::{
        Endpoint, Session, SessionConfig, SessionState, TcpTransport, Transport,
    };

    /// Binds a loopback listener, serves exactly one connection in a
    /// background thread (consume the request, write `reply`, close), and
    /// returns the bound port.
    fn spawn_one_shot_server(reply: Vec<u8>) -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(&reply);
            }
            // stream and listener drop here, closing the connection
        });
        port
    }

    /// A port that is (almost certainly) not listening: bind, read the
    /// assigned port, drop the listener.
    fn refused_port() -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        port
    }

    #[test]
    fn test_exchange_happy_path() {
        let port = spawn_one_shot_server(br#"{"status":"ok"}"#.to_vec());
        let endpoint = Endpoint::new("127.0.0.1", port).unwrap();

        let mut session = Session::new(endpoint);
        let reply = session.exchange(br#"{"command":"logout","token":"t"}"#).unwrap();

        assert_eq!(reply, br#"{"status":"ok"}"#);
        assert_eq!(session.state(), SessionState::Closed);
    }

    #[test]
    fn test_reply_across_multiple_writes_is_accumulated() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                // two separate writes; the client must return the concatenation
                let _ = stream.write_all(b"first half / ");
                let _ = stream.write_all(b"second half");
            }
        });

        let endpoint = Endpoint::new("127.0.0.1", port).unwrap();
        let reply = Session::new(endpoint).exchange(b"req").unwrap();
        assert_eq!(reply, b"first half / second half");
    }

    #[test]
    fn test_connection_refused() {
        let endpoint = Endpoint::new("127.0.0.1", refused_port()).unwrap();

        let mut session = Session::new(endpoint);
        let err = session.open().unwrap_err();

        assert!(matches!(err, McpError::Connection(_) | McpError::Timeout(_)));
        assert_eq!(session.state(), SessionState::Errored);
    }

    #[test]
    fn test_send_before_open_is_rejected() {
        let endpoint = Endpoint::new("127.0.0.1", 9000).unwrap();
        let mut session = Session::new(endpoint);

        let err = session.send(b"payload").unwrap_err();
        assert!(matches!(err, McpError::Send(_)));
        assert_eq!(session.state(), SessionState::Errored);
    }

    #[test]
    fn test_receive_before_send_is_rejected() {
        let port = spawn_one_shot_server(b"unused".to_vec());
        let endpoint = Endpoint::new("127.0.0.1", port).unwrap();

        let mut session = Session::new(endpoint);
        session.open().unwrap();
        let err = session.receive().unwrap_err();
        assert!(matches!(err, McpError::Receive(_)));
    }

    #[test]
    fn test_close_is_idempotent() {
        let endpoint = Endpoint::new("127.0.0.1", 9000).unwrap();
        let mut session = Session::new(endpoint);
        session.close();
        session.close();
        assert_eq!(session.state(), SessionState::Closed);
    }

    #[test]
    fn test_tcp_transport_exchange() {
        let port = spawn_one_shot_server(b"transport reply".to_vec());
        let endpoint = Endpoint::new("127.0.0.1", port).unwrap();

        let transport = TcpTransport::new();
        let reply = transport.exchange(&endpoint, b"req").unwrap();
        assert_eq!(reply, b"transport reply");
    }

    #[test]
    fn test_tcp_transport_refused_maps_to_connection_error() {
        let endpoint = Endpoint::new("127.0.0.1", refused_port()).unwrap();
        let err = TcpTransport::new().exchange(&endpoint, b"req").unwrap_err();
        assert!(matches!(err, McpError::Connection(_) | McpError::Timeout(_)));
    }

    #[test]
    fn test_custom_config_is_applied() {
        use std::time::Duration;

        let config = SessionConfig {
            connect_timeout: Some(Duration::from_millis(250)),
            read_timeout: Some(Duration::from_secs(2)),
            write_timeout: Some(Duration::from_secs(2)),
        };
        let port = spawn_one_shot_server(b"ok".to_vec());
        let endpoint = Endpoint::new("127.0.0.1", port).unwrap();

        let reply = Session::with_config(endpoint, config).exchange(b"req").unwrap();
        assert_eq!(reply, b"ok");
    }
}
