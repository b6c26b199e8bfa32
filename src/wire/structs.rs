/// Keep-alive datagram payload.
pub mod keep_alive;
