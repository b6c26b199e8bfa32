use byteorder::{NetworkEndian, WriteBytesExt};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use crate::wire::errors::WireError;

pub const MAX_FRAME_SIZE: usize = 16 * 1024 * 1024;
pub const MAX_DATAGRAM_LENGTH: usize = 1 << 10;
pub const KEEPALIVE_COMMAND: &str = "KEEPALIVE";

pub async fn write_frame<W>(writer: &mut W, body: &[u8]) -> Result<(), WireError>
where
    W: AsyncWrite + Unpin
{
    if body.len() > MAX_FRAME_SIZE {
        return Err(WireError::FrameTooLarge(body.len()));
    }
    let mut buffer = Vec::with_capacity(4 + body.len());
    WriteBytesExt::write_u32::<NetworkEndian>(&mut buffer, body.len() as u32)?;
    buffer.extend_from_slice(body);
    writer.write_all(&buffer).await?;
    writer.flush().await?;
    Ok(())
}

pub async fn read_frame<R>(reader: &mut R) -> Result<Vec<u8>, WireError>
where
    R: AsyncRead + Unpin
{
    let length = reader.read_u32().await? as usize;
    if length > MAX_FRAME_SIZE {
        return Err(WireError::FrameTooLarge(length));
    }
    let mut body = vec![0u8; length];
    reader.read_exact(&mut body).await?;
    Ok(body)
}

pub async fn send_message<W, T>(writer: &mut W, message: &T) -> Result<(), WireError>
where
    W: AsyncWrite + Unpin,
    T: Serialize
{
    let body = rmp_serde::to_vec(message)?;
    write_frame(writer, &body).await
}

pub async fn recv_message<R, T>(reader: &mut R) -> Result<T, WireError>
where
    R: AsyncRead + Unpin,
    T: DeserializeOwned
{
    let body = read_frame(reader).await?;
    Ok(rmp_serde::from_slice(&body)?)
}
