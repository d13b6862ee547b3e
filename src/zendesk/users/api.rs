//! User API operations

use serde_json::{Map, Value};

use crate::error::Result;
use crate::zendesk::cache::Snapshot;
use crate::zendesk::traits::find_by_id;
use crate::zendesk::ZendeskClient;

use super::models::{User, UserIdentity};

impl ZendeskClient {
    /// All users (memoized)
    pub async fn users(&self) -> Result<Snapshot<User>> {
        self.inner
            .cache
            .users
            .get_or_fetch(|| self.fetch_all_cursor::<User>("/users.json"))
            .await
    }

    /// User with the given id, or `None`
    pub async fn get_user_by_id(&self, user_id: u64) -> Result<Option<User>> {
        Ok(find_by_id(&self.users().await?, user_id))
    }

    /// Identities of a user (not memoized)
    pub async fn list_user_identities(&self, user_id: u64) -> Result<Vec<UserIdentity>> {
        let path = format!("/users/{}/identities.json", user_id);
        self.fetch_all_linked(&path).await
    }

    /// Single page of users matching a free-text query
    pub async fn search_users(&self, query: &str) -> Result<Vec<User>> {
        self.fetch_single_page("/users/search.json", &[("query", query.to_string())])
            .await
    }

    /// Partially update a user and return the server's record
    pub async fn update_user(&self, user_id: u64, fields: Value) -> Result<Map<String, Value>> {
        let path = format!("/users/{}.json", user_id);
        self.update_record(&path, "user", fields).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ZendeskError;
    use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn users_page(ids: &[u64], has_more: bool, after: Option<&str>) -> Value {
        let users: Vec<Value> = ids
            .iter()
            .map(|id| {
                serde_json::json!({
                    "id": id,
                    "name": format!("User {}", id),
                    "email": format!("user{}@example.com", id),
                    "role": "end-user",
                    "ticket_restriction": "requested"
                })
            })
            .collect();
        serde_json::json!({
            "users": users,
            "meta": {"has_more": has_more, "after_cursor": after}
        })
    }

    async fn mount_two_page_users(mock_server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/users.json"))
            .and(query_param_is_missing("page[after]"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users_page(
                &[1, 2],
                true,
                Some("next"),
            )))
            .expect(1)
            .mount(mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/users.json"))
            .and(query_param("page[after]", "next"))
            .respond_with(ResponseTemplate::new(200).set_body_json(users_page(&[3], false, None)))
            .expect(1)
            .mount(mock_server)
            .await;
    }

    #[tokio::test]
    async fn test_users_fetched_once() {
        let mock_server = MockServer::start().await;
        mount_two_page_users(&mock_server).await;

        let client = ZendeskClient::test_client(&mock_server.uri());
        let first = client.users().await.unwrap();
        let second = client.users().await.unwrap();

        assert_eq!(first.len(), 3);
        assert_eq!(second.len(), 3);
        assert_eq!(
            mock_server.received_requests().await.unwrap().len(),
            2,
            "second access must not hit the API"
        );
    }

    #[tokio::test]
    async fn test_users_server_error_propagates() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users.json"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = ZendeskClient::test_client(&mock_server.uri());
        for _ in 0..2 {
            match client.users().await.unwrap_err() {
                ZendeskError::Http { status, body } => {
                    assert_eq!(status, 500);
                    assert_eq!(body, "oops");
                }
                other => panic!("Expected ZendeskError::Http, got {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_get_user_by_id() {
        let mock_server = MockServer::start().await;
        mount_two_page_users(&mock_server).await;

        let client = ZendeskClient::test_client(&mock_server.uri());
        assert_eq!(
            client.get_user_by_id(3).await.unwrap().unwrap().name.as_deref(),
            Some("User 3")
        );
        assert!(client.get_user_by_id(4).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_external_id_uses_server_value() {
        let mock_server = MockServer::start().await;
        mount_two_page_users(&mock_server).await;

        Mock::given(method("PUT"))
            .and(path("/users/2.json"))
            .and(body_json(serde_json::json!({"user": {"external_id": "E1"}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "user": {"id": 2, "name": "User 2", "external_id": "e1-normalized"}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ZendeskClient::test_client(&mock_server.uri());
        let mut user = client.get_user_by_id(2).await.unwrap().unwrap();

        user.set_external_id("E1").await.unwrap();

        assert_eq!(user.external_id.as_deref(), Some("e1-normalized"));
        assert_eq!(user.email.as_deref(), Some("user2@example.com"));

        let cached = client.get_user_by_id(2).await.unwrap().unwrap();
        assert_eq!(cached.external_id.as_deref(), Some("e1-normalized"));
    }

    #[tokio::test]
    async fn test_set_ticket_restriction_invalid_issues_no_request() {
        let mock_server = MockServer::start().await;
        mount_two_page_users(&mock_server).await;

        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = ZendeskClient::test_client(&mock_server.uri());
        let mut user = client.get_user_by_id(1).await.unwrap().unwrap();

        user.set_ticket_restriction(Some("all")).await.unwrap();

        assert_eq!(user.ticket_restriction.as_deref(), Some("requested"));
    }

    #[tokio::test]
    async fn test_set_ticket_restriction_none_sends_null() {
        let mock_server = MockServer::start().await;
        mount_two_page_users(&mock_server).await;

        Mock::given(method("PUT"))
            .and(path("/users/1.json"))
            .and(body_json(serde_json::json!({"user": {"ticket_restriction": null}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "user": {"id": 1, "ticket_restriction": null}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ZendeskClient::test_client(&mock_server.uri());
        let mut user = client.get_user_by_id(1).await.unwrap().unwrap();

        user.set_ticket_restriction(None).await.unwrap();

        assert!(user.ticket_restriction.is_none());
    }

    #[tokio::test]
    async fn test_emails_fetched_fresh_each_call() {
        let mock_server = MockServer::start().await;
        mount_two_page_users(&mock_server).await;
        let page2 = format!("{}/users/1/identities.json?page=2", mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/users/1/identities.json"))
            .and(query_param_is_missing("page"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "identities": [
                    {"id": 10, "user_id": 1, "type": "email", "value": "one@example.com"},
                    {"id": 11, "user_id": 1, "type": "phone_number", "value": "+1555"}
                ],
                "next_page": page2
            })))
            .expect(2)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/users/1/identities.json"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "identities": [
                    {"id": 12, "user_id": 1, "type": "email", "value": "alias@example.com"}
                ],
                "next_page": null
            })))
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = ZendeskClient::test_client(&mock_server.uri());
        let user = client.get_user_by_id(1).await.unwrap().unwrap();

        let emails = user.emails().await.unwrap();
        assert_eq!(emails, vec!["one@example.com", "alias@example.com"]);
        assert_eq!(user.emails().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_organizations_derived_from_memberships() {
        let mock_server = MockServer::start().await;
        mount_two_page_users(&mock_server).await;

        Mock::given(method("GET"))
            .and(path("/organization_memberships.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "organization_memberships": [
                    {"id": 1, "user_id": 1, "organization_id": 200},
                    {"id": 2, "user_id": 2, "organization_id": 300},
                    {"id": 3, "user_id": 1, "organization_id": 100}
                ],
                "meta": {"has_more": false}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/organizations.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "organizations": [
                    {"id": 100, "name": "A"},
                    {"id": 200, "name": "B"},
                    {"id": 300, "name": "C"}
                ],
                "meta": {"has_more": false}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ZendeskClient::test_client(&mock_server.uri());
        let user = client.get_user_by_id(1).await.unwrap().unwrap();

        let mut names: Vec<String> = user
            .organizations()
            .await
            .unwrap()
            .into_iter()
            .filter_map(|o| o.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["A", "B"]);

        let org = client.get_organization_by_id(300).await.unwrap().unwrap();
        let members = org.users().await.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].id, 2);
    }

    #[tokio::test]
    async fn test_groups_derived_from_memberships() {
        let mock_server = MockServer::start().await;
        mount_two_page_users(&mock_server).await;

        Mock::given(method("GET"))
            .and(path("/group_memberships.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "group_memberships": [
                    {"id": 1, "user_id": 3, "group_id": 7},
                    {"id": 2, "user_id": 1, "group_id": 8}
                ],
                "meta": {"has_more": false}
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/groups.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "groups": [{"id": 7, "name": "Tier 2"}, {"id": 8, "name": "Tier 1"}],
                "meta": {"has_more": false}
            })))
            .mount(&mock_server)
            .await;

        let client = ZendeskClient::test_client(&mock_server.uri());
        let user = client.get_user_by_id(3).await.unwrap().unwrap();

        let groups = user.groups().await.unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name.as_deref(), Some("Tier 2"));

        let group = client.get_group_by_id(8).await.unwrap().unwrap();
        let members = group.users().await.unwrap();
        assert_eq!(members[0].id, 1);
    }

    #[tokio::test]
    async fn test_search_users_single_page() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/search.json"))
            .and(query_param("query", "email:user1@example.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "users": [{"id": 1, "email": "user1@example.com"}],
                "next_page": "http://ignored.example.com/page2",
                "count": 1
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ZendeskClient::test_client(&mock_server.uri());
        let users = client
            .search_users("email:user1@example.com")
            .await
            .unwrap();
        assert_eq!(users.len(), 1);
    }
}
