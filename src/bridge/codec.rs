//! Native-messaging frame codec
//!
//! Each message is a 4-byte length in native byte order followed by that many
//! bytes of UTF-8 JSON. Browsers cap host-to-browser messages at 1 MiB and
//! send at most 64 MiB in the other direction.

use std::io::{ErrorKind, Read, Write};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::BridgeError;

/// Largest frame accepted from the browser
pub const MAX_INBOUND_FRAME: usize = 64 * 1024 * 1024;

/// Largest frame the browser accepts from a host
pub const MAX_OUTBOUND_FRAME: usize = 1024 * 1024;

const LENGTH_PREFIX: usize = 4;

/// Read one frame payload.
///
/// Returns `Ok(None)` on a clean end of stream (no bytes before the length
/// prefix). A stream that ends partway through a frame is an error.
pub fn read_frame<R: Read>(reader: &mut R) -> Result<Option<Vec<u8>>, BridgeError> {
    let mut prefix = [0u8; LENGTH_PREFIX];
    let mut filled = 0;
    while filled < LENGTH_PREFIX {
        match reader.read(&mut prefix[filled..]) {
            Ok(0) if filled == 0 => return Ok(None),
            Ok(0) => {
                return Err(BridgeError::TruncatedFrame {
                    expected: LENGTH_PREFIX,
                    missing: LENGTH_PREFIX - filled,
                })
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    let len = u32::from_ne_bytes(prefix) as usize;
    if len > MAX_INBOUND_FRAME {
        return Err(BridgeError::FrameTooLarge {
            len,
            limit: MAX_INBOUND_FRAME,
        });
    }

    let mut payload = Vec::with_capacity(len);
    reader.by_ref().take(len as u64).read_to_end(&mut payload)?;
    if payload.len() < len {
        return Err(BridgeError::TruncatedFrame {
            expected: len,
            missing: len - payload.len(),
        });
    }

    Ok(Some(payload))
}

/// Write one frame and flush.
pub fn write_frame<W: Write>(writer: &mut W, payload: &[u8]) -> Result<(), BridgeError> {
    if payload.len() > MAX_OUTBOUND_FRAME {
        return Err(BridgeError::FrameTooLarge {
            len: payload.len(),
            limit: MAX_OUTBOUND_FRAME,
        });
    }

    let len = payload.len() as u32;
    writer.write_all(&len.to_ne_bytes())?;
    writer.write_all(payload)?;
    writer.flush()?;
    Ok(())
}

/// Read and decode one JSON message
pub fn read_message<R, T>(reader: &mut R) -> Result<Option<T>, BridgeError>
where
    R: Read,
    T: DeserializeOwned,
{
    match read_frame(reader)? {
        Some(payload) => Ok(Some(serde_json::from_slice(&payload)?)),
        None => Ok(None),
    }
}

/// Encode and write one JSON message
pub fn write_message<W, T>(writer: &mut W, message: &T) -> Result<(), BridgeError>
where
    W: Write,
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_vec(message)?;
    write_frame(writer, &payload)
}
