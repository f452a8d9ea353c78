//! Integration tests for the inspection endpoints.
//!
//! Most tests drive the axum `Router` directly via `tower::ServiceExt`
//! without starting a TCP server. One test spawns the real server on an
//! ephemeral port.

#![allow(clippy::unwrap_used, clippy::panic)]

use std::io;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use peephole_core::{impl_inspect_struct, Guarded, Inspect, RenderError, RequestContext, Summarizer};
use peephole_server::{build_router, spawn_inspector, Mount, ServerConfig};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tower::ServiceExt;

struct Bar {
    baz: i64,
    boo: String,
}

impl_inspect_struct!(Bar { baz, boo });

/// Fails whenever it is asked for a summary.
struct Broken;

impl_inspect_struct!(Broken {}, with: [summarizer]);

impl Summarizer for Broken {
    fn summary(
        &self,
        _prefix: &str,
        _ctx: &RequestContext,
        _out: &mut dyn io::Write,
    ) -> Result<(), RenderError> {
        Err(RenderError::capability("broken summary"))
    }
}

/// Panics whenever it is asked for a summary.
struct Exploding;

impl_inspect_struct!(Exploding {}, with: [summarizer]);

impl Summarizer for Exploding {
    fn summary(
        &self,
        _prefix: &str,
        _ctx: &RequestContext,
        _out: &mut dyn io::Write,
    ) -> Result<(), RenderError> {
        panic!("summary exploded");
    }
}

struct Foo {
    jar: String,
    ints: Vec<i64>,
    bar: Option<Box<Bar>>,
    nothing: Option<Box<Bar>>,
    counters: Guarded<Vec<u64>>,
}

impl_inspect_struct!(Foo { jar, ints, bar, nothing, counters });

struct Faulty {
    broken: Broken,
    exploding: Vec<Exploding>,
}

impl_inspect_struct!(Faulty { broken, exploding });

fn foo() -> Arc<Foo> {
    Arc::new(Foo {
        jar: String::from("jar <of> things"),
        ints: vec![10, 20, 30],
        bar: Some(Box::new(Bar {
            baz: 7,
            boo: String::from("boo"),
        })),
        nothing: None,
        counters: Guarded::new(vec![1, 2]),
    })
}

fn router_for(root: Arc<dyn Inspect + Send + Sync>) -> Router {
    build_router(vec![Mount::new("/oop/", root).unwrap()], true).unwrap()
}

async fn get(router: Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn root_renders_struct_view() {
    let (status, body) = get(router_for(foo()), "/oop/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("struct Foo {"));
    assert!(body.contains(r#"<a href="/oop/ints">[10, 20, 30]</a>"#));
    assert!(body.contains("&quot;jar &lt;of&gt; things&quot;"));
}

#[tokio::test]
async fn html_content_type() {
    let response = router_for(foo())
        .oneshot(Request::get("/oop/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let content_type = response.headers().get("content-type").unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/html"));
}

#[tokio::test]
async fn path_descends_through_pointers() {
    let (status, body) = get(router_for(foo()), "/oop/bar/baz").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<p>7 i64</p>"));
}

#[tokio::test]
async fn collection_index() {
    let (status, body) = get(router_for(foo()), "/oop/ints/2").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<p>30 i64</p>"));
}

#[tokio::test]
async fn empty_segments_are_ignored() {
    let (_, direct) = get(router_for(foo()), "/oop/bar/baz").await;
    let (status, doubled) = get(router_for(foo()), "/oop/bar//baz/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(direct, doubled);
}

#[tokio::test]
async fn nil_pointer_renders_marker() {
    let (status, body) = get(router_for(foo()), "/oop/nothing/baz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, peephole_core::NIL_MARKER);
}

#[tokio::test]
async fn guarded_state_is_live() {
    let root = foo();
    let router = router_for(Arc::clone(&root) as Arc<dyn Inspect + Send + Sync>);

    let (_, before) = get(router.clone(), "/oop/counters").await;
    assert!(before.contains("(2 elements)"));

    root.counters.write().unwrap().push(3);
    let (_, after) = get(router, "/oop/counters").await;
    assert!(after.contains("(3 elements)"));
}

#[tokio::test]
async fn unknown_field_is_a_500_with_reason() {
    let (status, body) = get(router_for(foo()), "/oop/missing").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("no field `missing` in `Foo`"));
}

#[tokio::test]
async fn bad_index_is_a_500() {
    let (status, body) = get(router_for(foo()), "/oop/ints/x").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("expected a non-negative integer index"));

    let (status, body) = get(router_for(foo()), "/oop/ints/3").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("contains only 3 elements"));
}

#[tokio::test]
async fn capability_failure_is_a_500() {
    let faulty = Arc::new(Faulty {
        broken: Broken,
        exploding: Vec::new(),
    });
    let (status, body) = get(router_for(faulty), "/oop/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("broken summary"));
}

#[tokio::test]
async fn panicking_capability_fails_only_its_request() {
    let faulty = Arc::new(Faulty {
        broken: Broken,
        exploding: vec![Exploding],
    });
    let router = router_for(faulty);

    let (status, body) = get(router.clone(), "/oop/exploding").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.starts_with("render task failed"));

    let (status, _) = get(router, "/oop/broken").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn unmounted_paths_are_not_found() {
    let (status, _) = get(router_for(foo()), "/elsewhere/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn several_mounts_are_served() {
    let ints: Arc<dyn Inspect + Send + Sync> = Arc::new(vec![5_i64]);
    let router = build_router(
        vec![
            Mount::new("/foo/", foo()).unwrap(),
            Mount::new("/ints/", ints).unwrap(),
        ],
        false,
    )
    .unwrap();

    let (status, body) = get(router.clone(), "/ints/0").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<p>5 i64</p>"));

    let (status, body) = get(router, "/foo/bar").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<a href="/foo/bar/baz">7</a>"#));
}

#[tokio::test]
async fn spawned_server_answers_over_tcp() {
    let config = ServerConfig {
        host: String::from("127.0.0.1"),
        port: 0,
        verbose: false,
    };
    let mount = Mount::new("/oop/", foo()).unwrap();
    let (addr, handle) = spawn_inspector(&config, vec![mount]).await.unwrap();

    let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /oop/ints/1 HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    assert!(response.starts_with("HTTP/1.1 200 OK"));
    assert!(response.contains("<p>20 i64</p>"));

    handle.abort();
}
