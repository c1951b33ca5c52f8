use std::io;

use passinfo::{Credentials, PassInfoClient, SendMessage};

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
    let contact = required_env("PASSINFO_CONTACT")?;
    let sender = std::env::var("PASSINFO_SENDER").unwrap_or_else(|_| "PassInfo".to_owned());
    let message = std::env::var("PASSINFO_MESSAGE")
        .unwrap_or_else(|_| "Hello from the passinfo demo.".to_owned());

    let client = PassInfoClient::new(Credentials::new(api_key, client_id)?);
    let request = SendMessage::new(message, contact, sender)?;

    let response = client.send_message(request)?;
    println!("{response:#}");

    Ok(())
}
