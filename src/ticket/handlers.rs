use actix_web::{web, HttpResponse, Responder};
use futures::future;
use std::sync::Arc;

use crate::mail::{MailQueue, OutboundMessage};
use crate::storage::ObjectStorage;
use crate::{AppState, ErrorResponse};

use super::allocator::format_ticket_number;
use super::models::{RecipientRequest, SendTicketsRequest, SendTicketsResponse};
use super::{Category, TicketCounter, TicketError};

/// One unit of per-recipient work, with its ticket number already assigned.
struct TicketJob {
    email: String,
    category: Category,
    ticket_no: String,
}

/// A recipient is valid iff it carries a non-empty email and a known
/// category code. Invalid recipients are skipped, never errors.
fn validate_recipient(recipient: &RecipientRequest) -> Option<(String, Category)> {
    let email = recipient.email.as_deref().filter(|e| !e.is_empty())?;
    let category = Category::from_code(recipient.category?)?;
    Some((email.to_string(), category))
}

/// Run one batch: allocate ticket numbers in input order, then fetch and
/// stamp all templates concurrently, then enqueue all mails concurrently.
///
/// Stamping completes for every recipient before any mail is enqueued, so a
/// template failure anywhere leaves the queue untouched. Any error fails the
/// whole batch; there is no partial success.
pub async fn process_recipients(
    storage: Arc<dyn ObjectStorage + Send + Sync>,
    mail_queue: Arc<dyn MailQueue + Send + Sync>,
    recipients: Vec<RecipientRequest>,
) -> Result<SendTicketsResponse, TicketError> {
    let counter = TicketCounter::new();

    let mut jobs = Vec::new();
    for recipient in &recipients {
        let Some((email, category)) = validate_recipient(recipient) else {
            log::warn!("Skipping invalid recipient: {:?}", recipient);
            continue;
        };
        let sequence = counter.allocate(category);
        let ticket_no = format_ticket_number(category, sequence);
        log::info!("Generating ticket {} for {}", ticket_no, email);
        jobs.push(TicketJob {
            email,
            category,
            ticket_no,
        });
    }

    let stamped = future::try_join_all(jobs.iter().map(|job| {
        let storage = Arc::clone(&storage);
        async move {
            let path = job.category.template_path();
            let template = storage
                .download_file(&path)
                .await
                .map_err(|source| TicketError::TemplateFetch {
                    path: path.clone(),
                    source,
                })?;
            super::stamper::stamp_first_page(&template, &job.ticket_no)
                .map_err(|source| TicketError::Stamp { path, source })
        }
    }))
    .await?;

    future::try_join_all(jobs.iter().zip(&stamped).map(|(job, pdf)| {
        let mail_queue = Arc::clone(&mail_queue);
        async move {
            let message = OutboundMessage::ticket(&job.email, &job.ticket_no, pdf);
            mail_queue
                .enqueue(&message)
                .await
                .map_err(|source| TicketError::Enqueue {
                    email: job.email.clone(),
                    source,
                })
        }
    }))
    .await?;

    let tickets: Vec<String> = jobs.into_iter().map(|job| job.ticket_no).collect();
    log::info!("All tickets queued: {:?}", tickets);

    Ok(SendTicketsResponse {
        success: true,
        count: tickets.len(),
        tickets,
    })
}

#[utoipa::path(
    context_path = "/api",
    tag = "Ticketing Service",
    post,
    path = "/tickets",
    request_body = SendTicketsRequest,
    responses(
        (status = 200, description = "Tickets generated and queued", body = SendTicketsResponse),
        (status = 400, description = "Missing or invalid recipients array", body = ErrorResponse),
        (status = 500, description = "Ticket generation failed", body = ErrorResponse)
    )
)]
pub async fn send_tickets(
    state: web::Data<AppState>,
    payload: web::Json<SendTicketsRequest>,
) -> impl Responder {
    let recipients = match payload.into_inner().recipients {
        Some(recipients) if !recipients.is_empty() => recipients,
        _ => {
            log::error!("No recipients array provided or array is empty");
            return HttpResponse::BadRequest().json(ErrorResponse::invalid_argument(
                "Missing or invalid recipients array",
            ));
        }
    };

    match process_recipients(
        Arc::clone(&state.storage),
        Arc::clone(&state.mail_queue),
        recipients,
    )
    .await
    {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(e) => {
            log::error!("Ticket batch failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&e.to_string()))
        }
    }
}
