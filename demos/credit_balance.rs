use std::io;

use passinfo::{Credentials, PassInfoClient};

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

    let mut builder = PassInfoClient::builder(Credentials::new(api_key, client_id)?);
    if let Ok(base_url) = std::env::var("PASSINFO_BASE_URL") {
        builder = builder.base_url(base_url);
    }
    let client = builder.build()?;

    println!("balance: {}", client.get_credit_balance()?);

    Ok(())
}
