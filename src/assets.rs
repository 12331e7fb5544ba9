use axum::{body::Body, extract::Request, http::header, response::Response};
use rust_embed::RustEmbed;
use std::{convert::Infallible, future::Future, pin::Pin};
use tower::Service;

#[derive(RustEmbed)]
#[folder = "web/dist/"]
struct Assets;

/// Serves the pre-built single-page frontend from the binary.
///
/// Paths that match an embedded file are served with their MIME type;
/// everything else gets `index.html` so client-side routing can take
/// over after a hard reload or deep link.
#[derive(Default, Clone)]
pub struct AssetsService;

impl AssetsService {
    pub fn new() -> Self {
        Self
    }
}

impl Service<Request> for AssetsService {
    type Response = Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(
        &mut self,
        _cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        std::task::Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let path = req.uri().path().trim_start_matches('/').to_string();

        Box::pin(async move {
            let path = if path.is_empty() {
                "index.html".to_string()
            } else {
                path
            };

            let (path, content) = match Assets::get(&path) {
                Some(content) => (path, content),
                _ => match Assets::get("index.html") {
                    Some(content) => ("index.html".to_string(), content),
                    _ => {
                        return Ok(Response::builder()
                            .status(404)
                            .body(Body::from("404 Not Found"))
                            .unwrap());
                    }
                },
            };

            let mime = mime_guess::from_path(&path).first_or_octet_stream();

            Ok(Response::builder()
                .header(header::CONTENT_TYPE, mime.as_ref())
                .body(Body::from(content.data))
                .unwrap())
        })
    }
}
