#[actix_web::main]
async fn main() -> std::io::Result<()> {
    ticket_mailer_server::run().await
}
