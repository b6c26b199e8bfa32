use std::fmt;
use std::fmt::Formatter;
use crate::wire::errors::WireError;
use crate::wire::structs::keep_alive::KeepAlive;
use crate::wire::wire::{KEEPALIVE_COMMAND, MAX_DATAGRAM_LENGTH};

impl KeepAlive {
    pub fn new(listen_port: u16, file_name: &str) -> KeepAlive {
        KeepAlive {
            listen_port,
            file_name: file_name.to_string(),
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        format!("{KEEPALIVE_COMMAND}\n{}\n{}\n", self.listen_port, self.file_name).into_bytes()
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<KeepAlive, WireError> {
        if bytes.len() > MAX_DATAGRAM_LENGTH {
            return Err(WireError::MalformedKeepAlive(format!("datagram of {} bytes", bytes.len())));
        }
        let text = std::str::from_utf8(bytes)
            .map_err(|_| WireError::MalformedKeepAlive(String::from("not valid UTF-8")))?;

        let mut parts = text.splitn(3, '\n');
        match parts.next() {
            Some(command) if command.trim() == KEEPALIVE_COMMAND => {}
            Some(command) => {
                return Err(WireError::MalformedKeepAlive(format!("unrecognized command {:?}", command.trim())));
            }
            None => {
                return Err(WireError::MalformedKeepAlive(String::from("empty datagram")));
            }
        }

        let listen_port = parts.next()
            .and_then(|port| port.trim().parse::<u16>().ok())
            .ok_or_else(|| WireError::MalformedKeepAlive(String::from("missing or invalid port")))?;

        let file_name = parts.next()
            .map(|name| name.trim_end())
            .unwrap_or_default();
        if file_name.is_empty() {
            return Err(WireError::MalformedKeepAlive(String::from("missing file name")));
        }

        Ok(KeepAlive::new(listen_port, file_name))
    }
}

impl fmt::Display for KeepAlive {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{KEEPALIVE_COMMAND} port={} file={}", self.listen_port, self.file_name)
    }
}
