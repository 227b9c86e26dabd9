// trueque-client/examples/marketplace_demo.rs
// Log in against a running backend, then show the cart and exchange views.

use trueque_client::{
    CartOrchestrator, ClientConfig, ExchangeOrchestrator, ExchangeTab, HttpClient, LoginRequest,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        println!("Usage: {} <name_or_email> <password>", args[0]);
        println!("  Example: {} ana@example.com secret", args[0]);
        return Ok(());
    }

    let base_url =
        std::env::var("TRUEQUE_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let client = HttpClient::new(&ClientConfig::new(&base_url));

    let session = client
        .login(&LoginRequest {
            name_or_email: args[1].clone(),
            password: args[2].clone(),
        })
        .await?;
    tracing::info!(user_id = ?session.current_user_id(), "logged in");

    let mut cart = CartOrchestrator::new(client.clone());
    cart.load_cart(&session).await?;
    tracing::info!(
        "cart holds {} products, total {}",
        cart.products().len(),
        cart.total()
    );
    for product in cart.products() {
        tracing::info!("  {} - {}", product.name, product.price);
    }

    let mut exchanges = ExchangeOrchestrator::new(client);
    exchanges.load_exchanges(&session).await?;
    tracing::info!(
        "exchanges: {} pending, {} settled",
        exchanges.filtered(ExchangeTab::Pending).len(),
        exchanges.filtered(ExchangeTab::Accepted).len()
    );

    Ok(())
}
