//! Integration test: TradingClient <-> HttpTransport <-> fake trading API
//!
//! Serves the trading endpoints with axum on a local port and drives the
//! real reqwest transport through the facade.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    http::{
        HeaderMap, HeaderName, StatusCode,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    response::Redirect,
    routing::{get, post},
};
use chrono::Utc;
use otc_core::{Instrument, Side};
use otc_gateway::{Endpoints, HttpTransport, TransportConfig};
use otc_ports::{ApiError, TradingApi, TransportError};
use otc_runner::{ConsoleReporter, Error, TradeOutcome, TradingClient};
use rust_decimal_macros::dec;
use serde_json::{Value, json};

const TOKEN: &str = "Token e13e627c49705f83cbe7b60389ac411b6f86fee7";

type Reply = (StatusCode, Json<Value>);

#[derive(Clone)]
struct FakeApi {
    fill_orders: bool,
    hits: Arc<Mutex<Vec<String>>>,
    orders: Arc<Mutex<Vec<Value>>>,
}

impl FakeApi {
    fn new(fill_orders: bool) -> Self {
        Self {
            fill_orders,
            hits: Arc::new(Mutex::new(Vec::new())),
            orders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn hits(&self, path: &str) -> usize {
        self.hits.lock().unwrap().iter().filter(|p| *p == path).count()
    }

    /// Record the hit and check the token
    fn accept(&self, path: &str, headers: &HeaderMap) -> Result<(), Reply> {
        self.hits.lock().unwrap().push(path.to_string());
        let token = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
        if token == Some(TOKEN) {
            Ok(())
        } else {
            Err((
                StatusCode::UNAUTHORIZED,
                Json(json!({"detail": "Invalid token."})),
            ))
        }
    }
}

async fn instruments(State(api): State<FakeApi>, headers: HeaderMap) -> Reply {
    if let Err(reply) = api.accept("instruments", &headers) {
        return reply;
    }
    (
        StatusCode::OK,
        Json(json!([{"name": "BTCUSD.SPOT"}, {"name": "ETHUSD.SPOT"}, {"name": "LTCUSD.SPOT"}])),
    )
}

async fn currency(State(api): State<FakeApi>, headers: HeaderMap) -> Reply {
    if let Err(reply) = api.accept("currency", &headers) {
        return reply;
    }
    (
        StatusCode::OK,
        Json(json!({
            "USD": {
                "stable_coin": false,
                "is_crypto": false,
                "currency_type": "fiat",
                "readable_name": "",
                "long_only": false,
                "minimum_trade_size": 0.01
            },
            "BTC": {
                "stable_coin": false,
                "is_crypto": true,
                "currency_type": "crypto",
                "readable_name": "Bitcoin",
                "long_only": false,
                "minimum_trade_size": 0.001
            }
        })),
    )
}

async fn balance(State(api): State<FakeApi>, headers: HeaderMap) -> Reply {
    if let Err(reply) = api.accept("balance", &headers) {
        return reply;
    }
    (
        StatusCode::OK,
        Json(json!({"USD": "2500.5", "BTC": "1.5"})),
    )
}

async fn request_for_quote(
    State(api): State<FakeApi>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Reply {
    if let Err(reply) = api.accept("request_for_quote", &headers) {
        return reply;
    }
    if body["instrument"] == "LTCUSD.SPOT" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"errors": [{
                "code": 1100,
                "message": "Instrument not allowed",
                "field": "instrument"
            }]})),
        );
    }

    let valid_until = (Utc::now() + chrono::Duration::seconds(30))
        .format("%Y-%m-%dT%H:%M:%S%.6fZ")
        .to_string();
    let mut quote = body;
    quote["price"] = json!("10457.65110000");
    quote["valid_until"] = json!(valid_until);
    quote["rfq_id"] = json!("d4e41399-e7a1-4576-9b46-349420040e1a");
    quote["created"] = json!(Utc::now().to_rfc3339());
    (StatusCode::OK, Json(quote))
}

async fn order(State(api): State<FakeApi>, headers: HeaderMap, Json(body): Json<Value>) -> Reply {
    if let Err(reply) = api.accept("order", &headers) {
        return reply;
    }
    api.orders.lock().unwrap().push(body.clone());

    let executed_price = if api.fill_orders {
        body["price"].clone()
    } else {
        Value::Null
    };
    (
        StatusCode::OK,
        Json(json!({
            "order_id": "b8b8e5a8-2f4f-4b07-9e2c-1b6d1f0a3c5e",
            "client_order_id": body["client_order_id"],
            "instrument": body["instrument"],
            "side": body["side"],
            "quantity": body["quantity"],
            "price": body["price"],
            "executed_price": executed_price,
            "created": Utc::now().to_rfc3339()
        })),
    )
}

/// Serve `app` on a local port and return its base URL
async fn serve_router(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/", addr)
}

/// Start the fake API and return its base URL
async fn serve(api: FakeApi) -> String {
    let app = Router::new()
        .route("/instruments/", get(instruments))
        .route("/currency/", get(currency))
        .route("/balance/", get(balance))
        .route("/request_for_quote/", post(request_for_quote))
        .route("/order/", post(order))
        .with_state(api);
    serve_router(app).await
}

/// Accept connections and never answer; returns the base URL and the
/// number of accepted connections
async fn serve_silent() -> (String, Arc<AtomicUsize>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let accepted = Arc::new(AtomicUsize::new(0));
    let counter = accepted.clone();
    tokio::spawn(async move {
        let mut open = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);
            open.push(socket);
        }
    });
    (format!("http://{}/", addr), accepted)
}

fn transport(base_url: &str, token: &str) -> HttpTransport {
    let config = TransportConfig::new(base_url, token)
        .unwrap()
        .with_timeout(Duration::from_secs(5))
        .with_retry_backoff(Duration::from_millis(10));
    HttpTransport::new(config).unwrap()
}

#[tokio::test]
async fn test_quote_and_trade_round_trip() {
    let _ = env_logger::try_init();

    let api = FakeApi::new(true);
    let base_url = serve(api.clone()).await;
    let reporter = Arc::new(ConsoleReporter::new(Vec::new()));
    let client = TradingClient::new(transport(&base_url, TOKEN), Endpoints::default())
        .with_reporter(reporter.clone());

    let instruments = client.get_instruments().await.unwrap();
    assert_eq!(instruments.len(), 3);

    let instrument = Instrument::new("BTCUSD.SPOT");
    let quote = client
        .request_quote(&instrument, Side::Buy, dec!(1.5))
        .await
        .unwrap();
    assert_eq!(quote.price, dec!(10457.6511));
    assert_eq!(quote.rfq_id.as_deref(), Some("d4e41399-e7a1-4576-9b46-349420040e1a"));

    let outcome = client.execute_quote(&quote).await.unwrap();
    match &outcome {
        TradeOutcome::Executed { order, balance } => {
            assert_eq!(order.executed_price, Some(dec!(10457.6511)));
            assert_eq!(balance.as_ref().unwrap().get("BTC"), Some(dec!(1.5)));
        }
        other => panic!("expected an executed trade, got {:?}", other),
    }
    assert_eq!(api.hits("balance"), 1);

    let orders = api.orders.lock().unwrap().clone();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["order_type"], "FOK");
    assert_eq!(orders[0]["executing_unit"], "risk-adding-strategy");
    assert_eq!(orders[0]["valid_until"], json!(quote.valid_until));
    assert_eq!(orders[0]["quantity"], "1.5");

    drop(client);
    let output = match Arc::try_unwrap(reporter) {
        Ok(reporter) => String::from_utf8(reporter.into_inner()).unwrap(),
        Err(_) => panic!("reporter still shared"),
    };
    assert!(output.starts_with("Quote:\n"));
    assert!(output.contains("Order info:\n"));
    assert!(output.contains("Account Balance: "));
}

#[tokio::test]
async fn test_rejected_trade_does_not_fetch_balance() {
    let api = FakeApi::new(false);
    let base_url = serve(api.clone()).await;
    let client = TradingClient::new(transport(&base_url, TOKEN), Endpoints::default());

    let quote = client
        .request_quote(&Instrument::new("BTCUSD.SPOT"), Side::Sell, dec!(0.25))
        .await
        .unwrap();
    let outcome = client.execute_quote(&quote).await.unwrap();

    assert!(matches!(outcome, TradeOutcome::Rejected(_)));
    assert_eq!(api.hits("order"), 1);
    assert_eq!(api.hits("balance"), 0);
}

#[tokio::test]
async fn test_wrong_token_is_not_retried() {
    let api = FakeApi::new(true);
    let base_url = serve(api.clone()).await;
    let client = TradingClient::new(transport(&base_url, "Token wrong"), Endpoints::default());

    let err = client.get_balance().await.unwrap_err();
    match err {
        Error::Api(ApiError::Transport(TransportError::Status {
            status,
            description,
        })) => {
            assert_eq!(status, 401);
            assert_eq!(description, Some("Unauthorized - Wrong Token."));
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(api.hits("balance"), 1);
}

#[tokio::test]
async fn test_application_errors_surface() {
    let api = FakeApi::new(true);
    let base_url = serve(api.clone()).await;
    let client = TradingClient::new(transport(&base_url, TOKEN), Endpoints::default());

    let err = client
        .request_quote(&Instrument::new("LTCUSD.SPOT"), Side::Buy, dec!(10))
        .await
        .unwrap_err();
    match err {
        Error::Api(ApiError::Application(details)) => {
            assert_eq!(details.len(), 1);
            assert_eq!(details[0].code, Some(1100));
            assert_eq!(details[0].field.as_deref(), Some("instrument"));
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(api.hits("request_for_quote"), 1);
}

#[tokio::test]
async fn test_invalid_quantity_never_reaches_server() {
    let api = FakeApi::new(true);
    let base_url = serve(api.clone()).await;
    let client = TradingClient::new(transport(&base_url, TOKEN), Endpoints::default());

    let err = client
        .request_quote(&Instrument::new("BTCUSD.SPOT"), Side::Buy, dec!(4.11112))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(api.hits("currency"), 1);
    assert_eq!(api.hits("request_for_quote"), 0);
}

#[tokio::test]
async fn test_unanswered_order_is_sent_once() {
    let (base_url, accepted) = serve_silent().await;
    let config = TransportConfig::new(&base_url, TOKEN)
        .unwrap()
        .with_timeout(Duration::from_millis(300))
        .with_retry_backoff(Duration::from_millis(10));
    let transport = HttpTransport::new(config).unwrap();

    let err = transport
        .post_order("order/", &json!({"instrument": "BTCUSD.SPOT"}))
        .await
        .unwrap_err();
    assert!(
        matches!(err, ApiError::Transport(TransportError::Timeout(_))),
        "{:?}",
        err
    );
    assert_eq!(accepted.load(Ordering::SeqCst), 1);

    // reads are safe to repeat and use every attempt
    let err = transport.get("balance/").await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(TransportError::Timeout(_))));
    assert_eq!(accepted.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn test_redirect_loop_is_reported() {
    let app = Router::new().route(
        "/balance/",
        get(|| async { Redirect::temporary("/balance/") }),
    );
    let base_url = serve_router(app).await;
    let client = TradingClient::new(transport(&base_url, TOKEN), Endpoints::default());

    let err = client.get_balance().await.unwrap_err();
    assert!(
        matches!(
            err,
            Error::Api(ApiError::Transport(TransportError::TooManyRedirects))
        ),
        "{:?}",
        err
    );
}

async fn echo_headers(headers: HeaderMap) -> Json<Value> {
    let header = |name: HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    Json(json!({
        "content_type": header(CONTENT_TYPE),
        "authorization": header(AUTHORIZATION),
    }))
}

#[tokio::test]
async fn test_json_and_auth_headers_on_every_request() {
    let app = Router::new().route("/echo/", get(echo_headers).post(echo_headers));
    let base_url = serve_router(app).await;
    let transport = transport(&base_url, TOKEN);

    let from_get = transport.get("echo/").await.unwrap();
    let from_post = transport.post("echo/", &json!({"side": "buy"})).await.unwrap();
    let from_order = transport.post_order("echo/", &json!({})).await.unwrap();

    for seen in [from_get, from_post, from_order] {
        assert_eq!(seen["content_type"], "application/json");
        assert_eq!(seen["authorization"], TOKEN);
    }
}
