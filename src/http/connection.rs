use std::sync::Arc;

use chrono::Local;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::config::Config;
use crate::http::content;
use crate::http::mime::ContentType;
use crate::http::parser;
use crate::http::request::Request;
use crate::http::response::{format_date, ResponseHead, StatusCode};
use crate::http::writer::ResponseWriter;

/// One worker: answers exactly one request on `stream`, then closes it.
pub struct Connection<S> {
    stream: S,
    config: Arc<Config>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Responding(Request),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, config: Arc<Config>) -> Self {
        Self {
            stream,
            config,
            state: ConnectionState::Reading,
        }
    }

    /// Read one request, write one response, shut the stream down.
    ///
    /// A broken or truncated request never fails this call; it is answered
    /// as if the path were whatever was parsed (usually empty). Errors come
    /// from writing to the client or from a body file that cannot be read.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        tracing::debug!("Handling connection");

        loop {
            let state = std::mem::replace(&mut self.state, ConnectionState::Closed);

            self.state = match state {
                ConnectionState::Reading => {
                    let request = self.read_request().await;
                    ConnectionState::Responding(request)
                }

                ConnectionState::Responding(request) => {
                    self.respond(&request).await?;
                    ConnectionState::Closed
                }

                ConnectionState::Closed => break,
            };
        }

        tracing::debug!("Done handling connection");
        Ok(())
    }

    pub async fn read_request(&mut self) -> Request {
        let read_timeout = self.config.server.read_timeout();
        let mut reader = BufReader::new(&mut self.stream);
        parser::read_request(&mut reader, read_timeout).await
    }

    async fn respond(&mut self, request: &Request) -> anyhow::Result<()> {
        let static_files = &self.config.static_files;
        let now = Local::now();

        let content_type = ContentType::from_path(&request.path);
        let file = static_files.resolve(&request.path);
        let status = StatusCode::for_file_exists(content::is_file(&file).await);

        let head = ResponseHead::new(
            status,
            format_date(&now.naive_local()),
            &static_files.server_header,
            content_type,
        );
        ResponseWriter::from_head(&head)
            .write_to_stream(&mut self.stream)
            .await?;

        let body = content::load_body(&request.path, static_files, now.date_naive()).await?;

        tracing::info!(
            path = %request.path,
            status = status.as_u16(),
            content_type = content_type.map(|c| c.as_str()).unwrap_or("-"),
            body = body.kind(),
            "Serving request"
        );

        ResponseWriter::from_body(body.into_bytes())
            .write_to_stream(&mut self.stream)
            .await?;

        self.stream.flush().await?;
        self.stream.shutdown().await?;
        Ok(())
    }
}
