//! Ticket command handlers

use chrono::{Duration, Local, NaiveDate};
use log::{debug, error, info};

use crate::cli::{CleanEmailCcsArgs, Cli, MajorCertTicketsArgs, SolveOldTicketsArgs};
use crate::error::Result;
use crate::output::{write_csv_file, MajorCertRow};
use crate::ui::{
    confirm_action, create_spinner, finish_spinner, print_above, update_spinner, ConfirmMode,
};
use crate::zendesk::{SortOrder, Ticket, ZendeskClient};

use super::certification::{CertificationRequest, MAJOR_CERT_QUERY};

/// Outcome of a bulk solve
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SolveSummary {
    pub solved: usize,
    pub failed: usize,
}

/// Run the 'solve-old-tickets' command
pub async fn run_solve_old_tickets_command(
    client: &ZendeskClient,
    cli: &Cli,
    args: &SolveOldTicketsArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cutoff = Local::now().date_naive() - Duration::days(args.days);
    let fill = args.field_id.zip(args.field_value.as_deref());

    let spinner = create_spinner(
        &format!("Solving tickets not updated since {}...", cutoff),
        cli.batch,
    );
    let summary = solve_old_tickets(client, cutoff, fill).await?;
    finish_spinner(spinner);

    info!("Succeeded: {}", summary.solved);
    println!("Solved {} ticket(s)", summary.solved);
    if summary.failed > 0 {
        eprintln!("{} ticket(s) could not be updated, see errors above", summary.failed);
    }
    Ok(())
}

/// Search query for unsolved tickets last updated before `cutoff`
pub fn stale_tickets_query(cutoff: NaiveDate) -> String {
    format!(
        "type:ticket status<solved updated<{}",
        cutoff.format("%Y-%m-%d")
    )
}

/// Solve the stale tickets on the first search page, oldest first
///
/// With `fill`, a custom field present on the ticket with an empty value is
/// set in the same update. A failed update is logged and the batch goes on.
pub async fn solve_old_tickets(
    client: &ZendeskClient,
    cutoff: NaiveDate,
    fill: Option<(u64, &str)>,
) -> Result<SolveSummary> {
    let query = stale_tickets_query(cutoff);
    let tickets = client
        .search_tickets(&query, Some("updated_at"), SortOrder::Asc)
        .await?;
    let mut summary = SolveSummary::default();

    for mut ticket in tickets {
        info!(
            "{} / {} / updated {}",
            ticket.id,
            ticket.subject.as_deref().unwrap_or_default(),
            ticket.updated_on().unwrap_or_default()
        );

        let fields = solve_fields(&ticket, fill);
        match ticket.update(fields).await {
            Ok(()) => summary.solved += 1,
            Err(e) => {
                error!("Failed to solve ticket {}: {}", ticket.id, e);
                summary.failed += 1;
            }
        }
    }
    Ok(summary)
}

fn solve_fields(ticket: &Ticket, fill: Option<(u64, &str)>) -> serde_json::Value {
    let mut fields = serde_json::json!({ "status": "solved" });
    if let Some((field_id, value)) = fill {
        let empty = ticket
            .custom_fields
            .iter()
            .any(|cf| cf.id == field_id && cf.value.is_null());
        if empty {
            fields["custom_fields"] = serde_json::json!([{ "id": field_id, "value": value }]);
        }
    }
    fields
}

/// Run the 'clean-email-ccs' command
pub async fn run_clean_email_ccs_command(
    client: &ZendeskClient,
    cli: &Cli,
    args: &CleanEmailCcsArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner(
        &format!("Searching tickets that cc {}...", args.email),
        cli.batch,
    );
    let tickets = client
        .search_tickets(&cc_query(&args.email), None, SortOrder::default())
        .await?;
    print_above(&spinner, &format!("Found {} ticket(s)", tickets.len()));
    finish_spinner(spinner);

    let mode = ConfirmMode::new(args.yes, cli.batch);
    let mut removed = 0;
    for ticket in &tickets {
        info!("Found a ticket: {}", ticket.id);
        let prompt = format!(
            "Remove {} from the email CCs of ticket {}?",
            args.email, ticket.id
        );
        if !confirm_action(&prompt, mode)? {
            continue;
        }
        let response = ticket.remove_email_cc(&args.email).await?;
        debug!("Ticket {} after update: {:?}", ticket.id, response);
        removed += 1;
    }

    println!("Removed {} from {} ticket(s)", args.email, removed);
    Ok(())
}

/// Search query for unsolved tickets that cc an address
pub fn cc_query(email: &str) -> String {
    format!("type:ticket status<solved cc:{}", email)
}

/// Run the 'major-cert-tickets' command
pub async fn run_major_cert_tickets_command(
    client: &ZendeskClient,
    cli: &Cli,
    args: &MajorCertTicketsArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner("Searching major certification requests...", cli.batch);
    let rows = major_cert_rows(client, |done, total| {
        update_spinner(&spinner, &format!("Reading request {}/{}...", done, total))
    })
    .await?;
    finish_spinner(spinner);

    write_csv_file(&rows, &args.output_file)?;
    println!(
        "Wrote {} request(s) to {}",
        rows.len(),
        args.output_file.display()
    );
    Ok(())
}

/// One row per major certification request, oldest first
///
/// Submitter and video link come from the first comment. Tickets without
/// comments are left out.
pub async fn major_cert_rows<F>(
    client: &ZendeskClient,
    mut progress: F,
) -> Result<Vec<MajorCertRow>>
where
    F: FnMut(usize, usize),
{
    let tickets = client
        .search_tickets(MAJOR_CERT_QUERY, Some("created_at"), SortOrder::Asc)
        .await?;
    info!("Found {} major certification request(s)", tickets.len());

    let mut rows = Vec::with_capacity(tickets.len());
    for (i, ticket) in tickets.iter().enumerate() {
        progress(i + 1, tickets.len());
        let comments = ticket.comments().await?;
        let Some(first) = comments.first() else {
            debug!("Ticket {} has no comments", ticket.id);
            continue;
        };
        let html_body = first.html_body.as_deref().unwrap_or_default();
        rows.push(MajorCertRow::new(ticket, CertificationRequest::parse(html_body)?));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn ticket(value: serde_json::Value) -> Ticket {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_stale_tickets_query() {
        let cutoff = NaiveDate::from_ymd_opt(2023, 4, 5).unwrap();
        assert_eq!(
            stale_tickets_query(cutoff),
            "type:ticket status<solved updated<2023-04-05"
        );
    }

    #[test]
    fn test_cc_query() {
        assert_eq!(
            cc_query("old@example.com"),
            "type:ticket status<solved cc:old@example.com"
        );
    }

    #[test]
    fn test_solve_fields_fills_empty_custom_field() {
        let t = ticket(serde_json::json!({
            "id": 1,
            "custom_fields": [{"id": 42, "value": null}]
        }));
        assert_eq!(
            solve_fields(&t, Some((42, "done"))),
            serde_json::json!({
                "status": "solved",
                "custom_fields": [{"id": 42, "value": "done"}]
            })
        );
    }

    #[test]
    fn test_solve_fields_keeps_existing_value() {
        let t = ticket(serde_json::json!({
            "id": 1,
            "custom_fields": [{"id": 42, "value": "partial"}]
        }));
        assert_eq!(
            solve_fields(&t, Some((42, "done"))),
            serde_json::json!({"status": "solved"})
        );

        let without_field = ticket(serde_json::json!({"id": 2}));
        assert_eq!(
            solve_fields(&without_field, Some((42, "done"))),
            serde_json::json!({"status": "solved"})
        );
        assert_eq!(solve_fields(&t, None), serde_json::json!({"status": "solved"}));
    }

    #[tokio::test]
    async fn test_solve_old_tickets_continues_after_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search.json"))
            .and(query_param(
                "query",
                "type:ticket status<solved updated<2023-01-01",
            ))
            .and(query_param("sort_by", "updated_at"))
            .and(query_param("sort_order", "asc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [
                    {"result_type": "ticket", "id": 1, "subject": "Old", "updated_at": "2022-01-01T00:00:00Z"},
                    {"result_type": "ticket", "id": 2, "subject": "Older", "updated_at": "2021-06-01T00:00:00Z"}
                ],
                "count": 2
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("PUT"))
            .and(path("/tickets/1.json"))
            .respond_with(ResponseTemplate::new(422).set_body_string("Unprocessable"))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("PUT"))
            .and(path("/tickets/2.json"))
            .and(body_json(serde_json::json!({"ticket": {"status": "solved"}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ticket": {"id": 2, "status": "solved"}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ZendeskClient::test_client(&mock_server.uri());
        let cutoff = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let summary = solve_old_tickets(&client, cutoff, None).await.unwrap();

        assert_eq!(
            summary,
            SolveSummary {
                solved: 1,
                failed: 1,
            }
        );
    }

    #[tokio::test]
    async fn test_major_cert_rows_from_first_comment() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search.json"))
            .and(query_param("query", MAJOR_CERT_QUERY))
            .and(query_param("sort_by", "created_at"))
            .and(query_param("sort_order", "asc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [
                    {
                        "result_type": "ticket",
                        "id": 11,
                        "subject": "Major certification request for Acme, Inc",
                        "created_at": "2022-03-01T09:00:00Z"
                    },
                    {
                        "result_type": "ticket",
                        "id": 12,
                        "subject": "Major certification request for Globex",
                        "created_at": "2022-03-02T09:00:00Z"
                    }
                ],
                "count": 2
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/tickets/11/comments.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "comments": [
                    {
                        "id": 1,
                        "html_body": "<h5>Requested by ann@example.com</h5><p><a href=\"https://video.example.com/1\">video</a></p>"
                    },
                    {"id": 2, "html_body": "<h5>Reply from agent@example.com</h5>"}
                ],
                "next_page": null
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/tickets/12/comments.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "comments": [],
                "next_page": null
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ZendeskClient::test_client(&mock_server.uri());
        let mut seen = Vec::new();
        let rows = major_cert_rows(&client, |done, total| seen.push((done, total)))
            .await
            .unwrap();

        assert_eq!(seen, vec![(1, 2), (2, 2)]);
        assert_eq!(
            rows,
            vec![MajorCertRow {
                id: 11,
                subject: "Major certification request for Acme, Inc".to_string(),
                created_at: "2022-03-01T09:00:00Z".to_string(),
                submitter: "ann@example.com".to_string(),
                video_url: "https://video.example.com/1".to_string(),
            }]
        );
    }
}
