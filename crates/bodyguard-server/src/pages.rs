//! Static HTML served outside the inspection route.

pub const HOME_PAGE: &str = r#"<h1>Bodyguard</h1>
<p>A small HTTP request inspector that answers either 200 OK or 403 Forbidden.</p>
<p>To scan a request for "is_malicious", send it (any method) to /api/handle-request.</p>
<p>ex: localhost:5000/api/handle-request with request body { "is_malicious": true }</p>
"#;

pub const NOT_FOUND_PAGE: &str = r#"<h1>404</h1>
<p>The resource could not be found.</p>
<p>To scan a request for "is_malicious", send it (any method) to /api/handle-request.</p>
<p>ex: localhost:5000/api/handle-request with request body { "is_malicious": true }</p>
"#;
