//! Ticket API operations

use log::debug;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::zendesk::traits::attach_all;
use crate::zendesk::ZendeskClient;

use super::models::{IncrementalTickets, Ticket, TicketComment};

#[derive(Deserialize)]
struct IncrementalPage {
    #[serde(default)]
    tickets: Vec<Value>,
    after_cursor: Option<String>,
    #[serde(default)]
    end_of_stream: bool,
}

impl ZendeskClient {
    /// All tickets; every call fetches fresh
    pub async fn tickets(&self) -> Result<Vec<Ticket>> {
        self.fetch_all_linked("/tickets.json").await
    }

    /// One batch of tickets changed since `start_time` (unix seconds)
    ///
    /// Not drained: callers resume from `after_cursor` themselves.
    pub async fn get_incremental_tickets(&self, start_time: i64) -> Result<IncrementalTickets> {
        let page: IncrementalPage = self
            .get(
                &self.url("/incremental/tickets/cursor.json"),
                &[("start_time", start_time.to_string())],
            )
            .await?;
        let tickets: Vec<Ticket> = attach_all(page.tickets, &self.handle())?;
        debug!(
            "Incremental export from {} returned {} tickets",
            start_time,
            tickets.len()
        );
        Ok(IncrementalTickets {
            tickets,
            after_cursor: page.after_cursor,
            end_of_stream: page.end_of_stream,
        })
    }

    /// Comments on a ticket, following `next_page` links
    pub async fn list_ticket_comments(&self, ticket_id: u64) -> Result<Vec<TicketComment>> {
        let path = format!("/tickets/{}/comments.json", ticket_id);
        self.fetch_all_linked(&path).await
    }

    /// Partially update a ticket and return the server's record
    pub async fn update_ticket(&self, ticket_id: u64, fields: Value) -> Result<Map<String, Value>> {
        let path = format!("/tickets/{}.json", ticket_id);
        self.update_record(&path, "ticket", fields).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ZendeskError;
    use crate::zendesk::traits::Entity;
    use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_tickets_not_memoized() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tickets.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "tickets": [{"id": 1, "status": "open"}, {"id": 2, "status": "new"}],
                "next_page": null,
                "count": 2
            })))
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = ZendeskClient::test_client(&mock_server.uri());
        assert_eq!(client.tickets().await.unwrap().len(), 2);
        assert_eq!(client.tickets().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_tickets_error_propagates() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tickets.json"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .mount(&mock_server)
            .await;

        let client = ZendeskClient::test_client(&mock_server.uri());
        match client.tickets().await.unwrap_err() {
            ZendeskError::Http { status, .. } => assert_eq!(status, 404),
            other => panic!("Expected ZendeskError::Http, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_ticket_comments_follow_next_page() {
        let mock_server = MockServer::start().await;
        let page2 = format!("{}/tickets/3/comments.json?page=2", mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/tickets.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "tickets": [{"id": 3, "subject": "Major certification request for Acme"}],
                "next_page": null
            })))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/tickets/3/comments.json"))
            .and(query_param_is_missing("page"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "comments": [{"id": 30, "html_body": "<h5>From ann@example.com</h5>"}],
                "next_page": page2
            })))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/tickets/3/comments.json"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "comments": [{"id": 31, "body": "Thanks", "public": false}],
                "next_page": null
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ZendeskClient::test_client(&mock_server.uri());
        let ticket = client.tickets().await.unwrap().remove(0);
        let comments = ticket.comments().await.unwrap();

        let ids: Vec<u64> = comments.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![30, 31]);
        assert_eq!(comments[1].public, Some(false));
        assert!(comments[0].handle().client().is_ok());
    }

    #[tokio::test]
    async fn test_incremental_tickets_single_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/incremental/tickets/cursor.json"))
            .and(query_param("start_time", "1332034771"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "tickets": [{"id": 7}, {"id": 8}],
                "after_cursor": "MTU3NjYxMzUzOS4wfHw0Njd8",
                "after_url": "https://example.zendesk.com/api/v2/incremental/tickets/cursor.json?cursor=MTU3NjYxMzUzOS4wfHw0Njd8",
                "end_of_stream": false
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ZendeskClient::test_client(&mock_server.uri());
        let batch = client.get_incremental_tickets(1332034771).await.unwrap();

        assert_eq!(batch.tickets.len(), 2);
        assert_eq!(batch.after_cursor.as_deref(), Some("MTU3NjYxMzUzOS4wfHw0Njd8"));
        assert!(!batch.end_of_stream);
    }

    #[tokio::test]
    async fn test_incremental_tickets_empty_stream() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/incremental/tickets/cursor.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "tickets": [],
                "after_cursor": null,
                "end_of_stream": true
            })))
            .mount(&mock_server)
            .await;

        let client = ZendeskClient::test_client(&mock_server.uri());
        let batch = client.get_incremental_tickets(0).await.unwrap();
        assert!(batch.tickets.is_empty());
        assert!(batch.end_of_stream);
    }

    #[tokio::test]
    async fn test_set_external_id_on_ticket() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tickets.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "tickets": [{"id": 5, "subject": "Printer", "external_id": null}],
                "next_page": null
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("PUT"))
            .and(path("/tickets/5.json"))
            .and(body_json(serde_json::json!({"ticket": {"external_id": "T-5"}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ticket": {"id": 5, "external_id": "t-5"}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ZendeskClient::test_client(&mock_server.uri());
        let mut ticket = client.tickets().await.unwrap().remove(0);

        ticket.set_external_id("T-5").await.unwrap();

        assert_eq!(ticket.external_id.as_deref(), Some("t-5"));
        assert_eq!(ticket.subject.as_deref(), Some("Printer"));
    }

    #[tokio::test]
    async fn test_remove_email_cc() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tickets.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "tickets": [{"id": 9}],
                "next_page": null
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("PUT"))
            .and(path("/tickets/9.json"))
            .and(body_json(serde_json::json!({
                "ticket": {
                    "email_ccs": [{"action": "delete", "user_email": "cc@example.com"}]
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ticket": {"id": 9, "email_cc_ids": []}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ZendeskClient::test_client(&mock_server.uri());
        let ticket = client.tickets().await.unwrap().remove(0);

        let record = ticket.remove_email_cc("cc@example.com").await.unwrap();
        assert_eq!(record["email_cc_ids"], serde_json::json!([]));
    }
}
