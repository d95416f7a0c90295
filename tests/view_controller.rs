//! Integration tests for the view controllers against a mock server.

use std::sync::Arc;

use mockito::Server;

use userview::controller::{UserResource, ViewController};
use userview::models::User;
use userview::resource;

fn users_at(server: &Server) -> UserResource {
    let http = resource::http_client().unwrap();
    Arc::new(resource::user_resource(http, &server.url(), "rest/user/:id").unwrap())
}

async fn serve(server: &mut Server, path: &str, status: usize, body: &str) -> mockito::Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

#[tokio::test]
async fn empty_collection_displays_empty_list() {
    let mut server = Server::new_async().await;
    let _mock = serve(&mut server, "/rest/user", 200, "[]").await;

    let mut controller = ViewController::list(users_at(&server));
    let state = controller.settled().await;

    assert!(state.users.is_empty());
    assert!(state.user.is_none());
}

#[tokio::test]
async fn collection_displays_records_in_order() {
    let mut server = Server::new_async().await;
    let _mock = serve(
        &mut server,
        "/rest/user",
        200,
        r#"[{"id":1,"name":"a"},{"id":2,"name":"b"}]"#,
    )
    .await;

    let mut controller = ViewController::list(users_at(&server));
    let state = controller.settled().await;

    assert_eq!(
        state.users,
        vec![User::new(1).with("name", "a"), User::new(2).with("name", "b")]
    );
}

#[tokio::test]
async fn detail_exposes_single_user() {
    let mut server = Server::new_async().await;
    let _list = serve(&mut server, "/rest/user", 200, r#"[{"id":1,"name":"a"}]"#).await;
    let _item = serve(&mut server, "/rest/user/1", 200, r#"{"id":1,"name":"a"}"#).await;

    let mut controller = ViewController::list_and_detail(users_at(&server), 1);
    let state = controller.settled().await;

    assert_eq!(state.user, Some(User::new(1).with("name", "a")));
    assert_eq!(state.users.len(), 1);
}

#[tokio::test]
async fn detail_not_found_leaves_user_unset() {
    let mut server = Server::new_async().await;
    let _list = serve(&mut server, "/rest/user", 200, r#"[{"id":1}]"#).await;
    let _item = serve(&mut server, "/rest/user/7", 404, "").await;

    let mut controller = ViewController::list_and_detail(users_at(&server), 7);
    let state = controller.settled().await;

    assert!(state.user.is_none());
    assert_eq!(state.users, vec![User::new(1)]);
}

#[tokio::test]
async fn failed_collection_leaves_list_empty() {
    let mut server = Server::new_async().await;
    let _list = serve(&mut server, "/rest/user", 503, "").await;
    let _item = serve(&mut server, "/rest/user/1", 200, r#"{"id":1}"#).await;

    let mut controller = ViewController::list_and_detail(users_at(&server), 1);
    let state = controller.settled().await;

    assert!(state.users.is_empty());
    assert_eq!(state.user, Some(User::new(1)));
}

#[tokio::test]
async fn fetches_are_issued_once_at_construction() {
    let mut server = Server::new_async().await;
    let list = server
        .mock("GET", "/rest/user")
        .with_status(200)
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;

    let mut controller = ViewController::list(users_at(&server));
    controller.settled().await;
    let _ = controller.state();
    controller.settled().await;

    list.assert_async().await;
}
