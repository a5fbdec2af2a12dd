//! User listing endpoint tests.
//!
//! Expects the database seeded as described in the `splitwise_tests` crate docs.

use splitwise_tests::create_test_client;

#[tokio::test]
#[ignore = "requires a running server and seeded database"]
async fn test_users_page_lists_seeded_users() {
    let client = create_test_client().expect("Failed to create client");

    let html = client.users_page().await.expect("Failed to load users page");

    assert!(html.contains("Alice"));
    assert!(html.contains("Bob"));
    assert!(html.contains("alice@x.com"));
    assert!(html.contains("bob@x.com"));
}

#[tokio::test]
#[ignore = "requires a running server and seeded database"]
async fn test_list_users_json() {
    let client = create_test_client().expect("Failed to create client");

    let mut users = client.list_users().await.expect("Failed to list users");
    // no ordering is imposed by the query
    users.sort_by_key(|user| user.id);

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "Alice");
    assert_eq!(users[0].email, "alice@x.com");
    assert_eq!(users[1].name, "Bob");
    assert_eq!(users[1].email, "bob@x.com");
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn test_users_page_and_json_agree() {
    let client = create_test_client().expect("Failed to create client");

    let html = client.users_page().await.expect("Failed to load users page");
    let users = client.list_users().await.expect("Failed to list users");

    for user in users {
        assert!(html.contains(&user.email));
    }
}
