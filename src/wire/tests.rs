#[cfg(test)]
mod wire_tests {
    use std::net::{IpAddr, Ipv4Addr};
    use crate::tracker::structs::peer_address::PeerAddress;
    use crate::wire::enums::control_request::ControlRequest;
    use crate::wire::enums::control_response::ControlResponse;
    use crate::wire::errors::WireError;
    use crate::wire::structs::keep_alive::KeepAlive;
    use crate::wire::wire::{read_frame, recv_message, send_message, write_frame, MAX_FRAME_SIZE};

    #[test]
    fn test_keep_alive_exact_text() {
        let keep_alive = KeepAlive::new(5700, "a.bin");
        assert_eq!(keep_alive.to_bytes(), b"KEEPALIVE\n5700\na.bin\n".to_vec());
    }

    #[test]
    fn test_keep_alive_parse() {
        let parsed = KeepAlive::from_bytes(b"KEEPALIVE\n5701\nmy file.iso\n").unwrap();
        assert_eq!(parsed.listen_port, 5701);
        assert_eq!(parsed.file_name, "my file.iso");
    }

    #[test]
    fn test_keep_alive_trims_trailing_whitespace() {
        assert_eq!(KeepAlive::from_bytes(b"KEEPALIVE\n5700\na.bin \n").unwrap(), KeepAlive::new(5700, "a.bin"));
        assert_eq!(KeepAlive::from_bytes(b"KEEPALIVE\n5700\na.bin\t\r\n").unwrap(), KeepAlive::new(5700, "a.bin"));
    }

    #[test]
    fn test_keep_alive_rejects_unknown_command() {
        let result = KeepAlive::from_bytes(b"HELLO\n5701\na.bin\n");
        assert!(matches!(result, Err(WireError::MalformedKeepAlive(_))));
    }

    #[test]
    fn test_keep_alive_rejects_bad_port() {
        assert!(KeepAlive::from_bytes(b"KEEPALIVE\n70000\na.bin\n").is_err());
        assert!(KeepAlive::from_bytes(b"KEEPALIVE\nport\na.bin\n").is_err());
        assert!(KeepAlive::from_bytes(b"KEEPALIVE\n5701\n").is_err());
        assert!(KeepAlive::from_bytes(b"").is_err());
    }

    #[tokio::test]
    async fn test_frame_layout() {
        let mut buffer: Vec<u8> = Vec::new();
        write_frame(&mut buffer, b"abc").await.unwrap();
        assert_eq!(buffer, vec![0, 0, 0, 3, b'a', b'b', b'c']);

        let mut reader = buffer.as_slice();
        assert_eq!(read_frame(&mut reader).await.unwrap(), b"abc".to_vec());
    }

    #[tokio::test]
    async fn test_oversized_frame_rejected_on_read() {
        let header = ((MAX_FRAME_SIZE + 1) as u32).to_be_bytes();
        let mut reader = &header[..];
        assert!(matches!(read_frame(&mut reader).await, Err(WireError::FrameTooLarge(_))));
    }

    #[tokio::test]
    async fn test_truncated_frame_is_io_error() {
        let bytes = [0u8, 0, 0, 10, 1, 2];
        let mut reader = &bytes[..];
        assert!(matches!(read_frame(&mut reader).await, Err(WireError::Io(_))));
    }

    #[tokio::test]
    async fn test_control_messages_over_duplex() {
        let (mut client, mut server) = tokio::io::duplex(1024);
        let request = ControlRequest::JoinSwarm { file_name: String::from("a.bin"), listen_port: 5700 };
        send_message(&mut client, &request).await.unwrap();
        let received: ControlRequest = recv_message(&mut server).await.unwrap();
        assert_eq!(received, request);

        let members = ControlResponse::Members(Some(vec![
            PeerAddress::new(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)), 5700)
        ]));
        send_message(&mut server, &members).await.unwrap();
        let received: ControlResponse = recv_message(&mut client).await.unwrap();
        assert_eq!(received, members);
    }

    #[tokio::test]
    async fn test_garbage_body_is_decode_error() {
        let mut buffer: Vec<u8> = Vec::new();
        write_frame(&mut buffer, &[0xc1, 0xc1, 0xc1]).await.unwrap();
        let mut reader = buffer.as_slice();
        let result: Result<ControlRequest, WireError> = recv_message(&mut reader).await;
        assert!(matches!(result, Err(WireError::Decode(_))));
    }
}
