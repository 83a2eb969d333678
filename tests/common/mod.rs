use bytes::Bytes;
use http_body_util::Full;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;

type Routes = Arc<RwLock<HashMap<String, (StatusCode, Vec<(String, String)>)>>>;

/// Local HTTP server answering each route with a fixed set of response headers
pub struct TestServer {
    addr: SocketAddr,
    routes: Routes,
}

impl TestServer {
    pub async fn new() -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let routes: Routes = Arc::new(RwLock::new(HashMap::new()));
        let routes_clone = routes.clone();

        tokio::spawn(async move {
            loop {
                let (stream, _) = match listener.accept().await {
                    Ok(conn) => conn,
                    Err(_) => break,
                };

                let io = TokioIo::new(stream);
                let routes = routes_clone.clone();

                tokio::spawn(async move {
                    let service = service_fn(move |req: Request<hyper::body::Incoming>| {
                        let routes = routes.clone();
                        async move { handle_request(req, routes).await }
                    });

                    if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                        eprintln!("Error serving connection: {:?}", err);
                    }
                });
            }
        });

        Ok(TestServer { addr, routes })
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn add_route(&self, path: &str, headers: &[(&str, &str)]) {
        self.add_route_with_status(path, StatusCode::OK, headers).await;
    }

    pub async fn add_route_with_status(&self, path: &str, status: StatusCode, headers: &[(&str, &str)]) {
        let headers = headers
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect();
        self.routes.write().await.insert(path.to_string(), (status, headers));
    }
}

async fn handle_request(
    req: Request<hyper::body::Incoming>,
    routes: Routes,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let routes = routes.read().await;
    let response = match routes.get(req.uri().path()) {
        Some((status, headers)) => {
            let mut builder = Response::builder().status(*status);
            for (name, value) in headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            builder.body(Full::new(Bytes::from("ok"))).unwrap()
        }
        None => Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Full::new(Bytes::from("Not Found")))
            .unwrap(),
    };
    Ok(response)
}

/// A URL nothing is listening on
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub const HARDENED_HEADERS: &[(&str, &str)] = &[
    ("X-Content-Type-Options", "nosniff"),
    ("X-Frame-Options", "DENY"),
    ("X-XSS-Protection", "1; mode=block"),
    ("Strict-Transport-Security", "max-age=31536000; includeSubDomains"),
    ("Content-Security-Policy", "default-src 'self'"),
    ("Referrer-Policy", "strict-origin-when-cross-origin"),
];
