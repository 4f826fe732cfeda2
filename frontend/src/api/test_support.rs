#[cfg(test)]
pub mod mock {
    use crate::api::client::{register_mock, TestResponder};
    use crate::api::ApiError;
    use reqwest::Method;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    pub const GET: Method = Method::GET;
    pub const POST: Method = Method::POST;
    pub const PUT: Method = Method::PUT;
    pub const PATCH: Method = Method::PATCH;
    pub const DELETE: Method = Method::DELETE;

    #[derive(Clone)]
    pub struct MockServer {
        inner: Arc<Mutex<Inner>>,
        base: String,
    }

    struct Inner {
        routes: Vec<Route>,
        requests: Vec<RecordedRequest>,
    }

    struct Route {
        method: Method,
        path: String,
        status: u16,
        body: Vec<u8>,
        headers: Vec<(String, String)>,
        remaining: Option<usize>,
    }

    /// What the client actually sent, for assertions.
    #[derive(Clone, Debug)]
    pub struct RecordedRequest {
        pub method: Method,
        pub path: String,
        pub query: Option<String>,
        pub authorization: Option<String>,
        pub request_id: Option<String>,
        pub content_type: Option<String>,
        pub body: Option<Vec<u8>>,
    }

    impl RecordedRequest {
        pub fn json(&self) -> Option<Value> {
            self.body
                .as_ref()
                .and_then(|body| serde_json::from_slice(body).ok())
        }
    }

    impl MockServer {
        pub async fn start_async() -> Self {
            Self::start()
        }

        pub fn start() -> Self {
            static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
            let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            Self {
                inner: Arc::new(Mutex::new(Inner {
                    routes: Vec::new(),
                    requests: Vec::new(),
                })),
                base: format!("http://mock-{}", id),
            }
        }

        pub fn url(&self, path: &str) -> String {
            let base_url = format!("{}{}", self.base, path);
            register_mock(self.base.clone(), Arc::new(self.clone()));
            base_url
        }

        /// Later mocks shadow earlier ones for the same route; a mock limited
        /// with `times` falls through once it is used up.
        pub fn mock<F>(&self, f: F)
        where
            F: FnOnce(&mut When, &mut Then),
        {
            let mut when = When::default();
            let mut then = Then::default();
            f(&mut when, &mut then);

            let method = when.method.clone().expect("mock requires method");
            let path = when.path.clone().expect("mock requires path");
            let body = match (then.raw.take(), then.body.take()) {
                (Some(raw), _) => raw,
                (None, Some(json)) => serde_json::to_vec(&json).expect("mock body"),
                (None, None) => b"{}".to_vec(),
            };

            let mut inner = self.inner.lock().expect("mock lock");
            inner.routes.push(Route {
                method,
                path,
                status: then.status.unwrap_or(200),
                body,
                headers: then.headers.clone(),
                remaining: then.times,
            });
        }

        pub fn hits(&self, method: Method, path: &str) -> usize {
            self.requests_to(method, path).len()
        }

        pub fn requests_to(&self, method: Method, path: &str) -> Vec<RecordedRequest> {
            let inner = self.inner.lock().expect("mock lock");
            inner
                .requests
                .iter()
                .filter(|req| req.method == method && req.path == path)
                .cloned()
                .collect()
        }

        pub fn total_requests(&self) -> usize {
            self.inner.lock().expect("mock lock").requests.len()
        }
    }

    fn header(request: &reqwest::Request, name: &str) -> Option<String> {
        request
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string())
    }

    impl TestResponder for MockServer {
        fn respond(
            &self,
            request: &reqwest::Request,
        ) -> Result<http::Response<Vec<u8>>, ApiError> {
            let method = request.method().clone();
            let path = request.url().path().to_string();
            let mut inner = self.inner.lock().map_err(|_| ApiError::unknown("mock lock"))?;

            inner.requests.push(RecordedRequest {
                method: method.clone(),
                path: path.clone(),
                query: request.url().query().map(|q| q.to_string()),
                authorization: header(request, "authorization"),
                request_id: header(request, "x-request-id"),
                content_type: header(request, "content-type"),
                body: request
                    .body()
                    .and_then(|body| body.as_bytes())
                    .map(|bytes| bytes.to_vec()),
            });

            let route = inner
                .routes
                .iter_mut()
                .rev()
                .find(|route| {
                    route.method == method
                        && route.path == path
                        && route.remaining.map(|n| n > 0).unwrap_or(true)
                })
                .ok_or_else(|| ApiError::request_failed(format!("No mock for {} {}", method, path)))?;
            if let Some(remaining) = route.remaining.as_mut() {
                *remaining -= 1;
            }

            let mut builder = http::Response::builder().status(route.status);
            if !route
                .headers
                .iter()
                .any(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            {
                builder = builder.header("content-type", "application/json");
            }
            for (name, value) in &route.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            builder
                .body(route.body.clone())
                .map_err(|e| ApiError::unknown(e.to_string()))
        }
    }

    #[derive(Default)]
    pub struct When {
        method: Option<Method>,
        path: Option<String>,
    }

    impl When {
        pub fn method(&mut self, method: Method) -> &mut Self {
            self.method = Some(method);
            self
        }

        pub fn path(&mut self, path: &str) -> &mut Self {
            self.path = Some(path.to_string());
            self
        }
    }

    #[derive(Default)]
    pub struct Then {
        status: Option<u16>,
        body: Option<Value>,
        raw: Option<Vec<u8>>,
        headers: Vec<(String, String)>,
        times: Option<usize>,
    }

    impl Then {
        pub fn status(&mut self, status: u16) -> &mut Self {
            self.status = Some(status);
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.body = Some(body);
            self
        }

        pub fn body(&mut self, body: impl Into<Vec<u8>>) -> &mut Self {
            self.raw = Some(body.into());
            self
        }

        pub fn header(&mut self, name: &str, value: &str) -> &mut Self {
            self.headers.push((name.to_string(), value.to_string()));
            self
        }

        pub fn times(&mut self, times: usize) -> &mut Self {
            self.times = Some(times);
            self
        }
    }
}
