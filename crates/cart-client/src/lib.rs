use std::time::Duration;

use anyhow::Context;
use cart_types::ports::order_gateway::{
    GatewayError, OrderGateway, PlaceOrderRequest, PlaceOrderResponse,
};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Url;

pub const DEFAULT_ORDER_PATH: &str = "place_order";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone)]
pub struct CartClientBuilder {
    base: Url,
    order_path: String,
    headers: HeaderMap,
    timeout: Option<Duration>,
}

/// HTTP client for the storefront's order endpoint.
#[derive(Clone)]
pub struct CartClient {
    base: Url,
    order_path: String,
    client: reqwest::Client,
}

impl CartClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Self::builder(base_url)?.build()
    }

    pub fn builder(base_url: &str) -> anyhow::Result<CartClientBuilder> {
        let base = Url::parse(base_url).context("invalid base url")?;
        Ok(CartClientBuilder {
            base,
            order_path: DEFAULT_ORDER_PATH.to_string(),
            headers: HeaderMap::new(),
            timeout: None,
        })
    }

    fn url(&self, path: &str) -> anyhow::Result<Url> {
        self.base.join(path).context("failed to join url")
    }

    /// Submits the order. Any well-formed JSON answer is returned as-is,
    /// whatever the HTTP status, since business failures travel in the body.
    ///
    /// The request's id goes out as `x-request-id`; a fresh one is minted when
    /// the caller left it blank.
    pub async fn place_order(&self, req: &PlaceOrderRequest) -> anyhow::Result<PlaceOrderResponse> {
        let request_id = if req.request_id.is_empty() {
            uuid::Uuid::new_v4().to_string()
        } else {
            req.request_id.clone()
        };
        tracing::debug!(%request_id, items = req.items.len(), total = req.total, "submitting order");

        let res = self
            .client
            .post(self.url(&self.order_path)?)
            .header(REQUEST_ID_HEADER, &request_id)
            .json(req)
            .send()
            .await?;

        let status = res.status();
        let body = res.bytes().await?;
        match serde_json::from_slice::<PlaceOrderResponse>(&body) {
            Ok(parsed) => {
                tracing::debug!(%request_id, %status, success = parsed.success, "order endpoint answered");
                Ok(parsed)
            }
            Err(_) if !status.is_success() => {
                anyhow::bail!("order endpoint returned {status}")
            }
            Err(e) => Err(e).context("order endpoint returned malformed json"),
        }
    }
}

#[async_trait::async_trait]
impl OrderGateway for CartClient {
    async fn place_order(
        &self,
        request: &PlaceOrderRequest,
    ) -> Result<PlaceOrderResponse, GatewayError> {
        CartClient::place_order(self, request).await.map_err(|err| {
            if err.downcast_ref::<serde_json::Error>().is_some() {
                GatewayError::Decode(format!("{err:#}"))
            } else {
                GatewayError::Transport(format!("{err:#}"))
            }
        })
    }
}

impl CartClientBuilder {
    pub fn with_order_path(mut self, path: impl Into<String>) -> Self {
        self.order_path = path.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_header(
        mut self,
        key: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> anyhow::Result<Self> {
        let header_name =
            HeaderName::from_bytes(key.as_ref().as_bytes()).context("invalid header name")?;
        let header_value = HeaderValue::from_str(value.as_ref()).context("invalid header value")?;
        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    pub fn build(self) -> anyhow::Result<CartClient> {
        let mut builder = reqwest::Client::builder();
        if !self.headers.is_empty() {
            builder = builder.default_headers(self.headers);
        }
        if let Some(t) = self.timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build()?;
        Ok(CartClient {
            base: self.base,
            order_path: self.order_path,
            client,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cart_types::domain::cart::CartItem;
    use httpmock::prelude::*;

    fn sample_request() -> PlaceOrderRequest {
        PlaceOrderRequest {
            items: vec![CartItem {
                id: "A1".into(),
                name: "Item".into(),
                price: 50.0,
                image: "x.jpg".into(),
                quantity: 2,
            }],
            total: 100.0,
            request_id: String::new(),
        }
    }

    fn closed_port_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{port}/")
    }

    #[tokio::test]
    async fn posts_items_and_total_as_json() {
        let server = MockServer::start();
        let req = sample_request();

        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/place_order")
                .header("content-type", "application/json")
                .header_exists(REQUEST_ID_HEADER)
                .json_body_obj(&req);
            then.status(200).json_body_obj(&PlaceOrderResponse {
                success: true,
                message: Some("Order placed successfully!".into()),
                code: None,
            });
        });

        let client = CartClient::new(&server.base_url()).unwrap();
        let res = client.place_order(&req).await.unwrap();
        assert!(res.success);
        mock.assert();
    }

    #[tokio::test]
    async fn request_id_is_forwarded_as_header() {
        let server = MockServer::start();
        let req = PlaceOrderRequest {
            request_id: "7f1c2a9e-0000-4000-8000-000000000001".into(),
            ..sample_request()
        };
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/place_order")
                .header(REQUEST_ID_HEADER, "7f1c2a9e-0000-4000-8000-000000000001")
                .json_body(serde_json::json!({
                    "items": [{"id": "A1", "name": "Item", "price": 50.0, "image": "x.jpg", "quantity": 2}],
                    "total": 100.0
                }));
            then.status(200).json_body(serde_json::json!({"success": true}));
        });

        let client = CartClient::new(&server.base_url()).unwrap();
        assert!(client.place_order(&req).await.unwrap().success);
        mock.assert();
    }

    #[tokio::test]
    async fn business_failure_with_error_status_is_still_decoded() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/checkout");
            then.status(401)
                .json_body(serde_json::json!({"success": false, "message": "Please login"}));
        });

        let client = CartClient::builder(&server.base_url())
            .unwrap()
            .with_order_path("checkout")
            .build()
            .unwrap();
        let res = client.place_order(&sample_request()).await.unwrap();
        assert!(!res.success);
        assert!(res.requires_login());
        mock.assert();
    }

    #[tokio::test]
    async fn error_mapping_through_gateway() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/place_order");
            then.status(200).body("<html>not json</html>");
        });
        let client = CartClient::new(&server.base_url()).unwrap();
        let gateway: &dyn OrderGateway = &client;
        let err = gateway.place_order(&sample_request()).await.unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));

        let server_err = MockServer::start();
        server_err.mock(|when, then| {
            when.method(POST).path("/place_order");
            then.status(500).body("boom");
        });
        let client = CartClient::new(&server_err.base_url()).unwrap();
        let err = OrderGateway::place_order(&client, &sample_request())
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));

        let unreachable = CartClient::new(&closed_port_url()).unwrap();
        let err = OrderGateway::place_order(&unreachable, &sample_request())
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));
    }

    #[test]
    fn builder_rejects_bad_input() {
        assert!(CartClient::new("not a url").is_err());
        let builder = CartClient::builder("http://localhost/").unwrap();
        assert!(builder.with_header("bad header", "v").is_err());
    }
}
