use std::io;

use passinfo::{BatchId, Credentials, MessageId, PassInfoClient};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = required_env("PASSINFO_API_KEY")?;
    let client_id = required_env("PASSINFO_CLIENT_ID")?;

    let client = PassInfoClient::new(Credentials::new(api_key, client_id)?);

    // Either a single message id or a bulk batch id.
    if let Ok(message_id) = std::env::var("PASSINFO_MESSAGE_ID") {
        let status = client.get_message_status(&MessageId::new(message_id)?)?;
        println!("message: {status:#}");
    }
    if let Ok(batch_id) = std::env::var("PASSINFO_BATCH_ID") {
        let status = client.get_message_status_bulk(&BatchId::new(batch_id)?)?;
        println!("batch: {status:#}");
    }

    Ok(())
}
