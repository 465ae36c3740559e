use bytes::{Buf, Bytes};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::ResponseHead;

/// A fully serialized chunk of the response, drained into the stream.
///
/// The worker writes the header block and the body as two separate
/// writers, header first, so no body byte can precede the blank line.
pub struct ResponseWriter {
    buffer: Bytes,
}

impl ResponseWriter {
    pub fn from_head(head: &ResponseHead) -> Self {
        Self {
            buffer: Bytes::from(head.serialize()),
        }
    }

    pub fn from_body(body: impl Into<Bytes>) -> Self {
        Self {
            buffer: body.into(),
        }
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.buffer.has_remaining() {
            let n = stream.write(self.buffer.chunk()).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.buffer.advance(n);
        }

        Ok(())
    }
}
