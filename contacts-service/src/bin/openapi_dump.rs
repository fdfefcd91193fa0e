//! Print the OpenAPI document as JSON.

use contacts_service::api_doc;

fn main() -> Result<(), serde_json::Error> {
    let public_url = std::env::var("PUBLIC_URL")
        .unwrap_or_else(|_| "http://localhost:3000".to_string());
    println!("{}", api_doc(&public_url).to_pretty_json()?);
    Ok(())
}
