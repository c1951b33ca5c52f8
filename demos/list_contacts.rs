use std::io;

use passinfo::{Credentials, ListContacts, PassInfoClient};

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
    let page = std::env::var("PASSINFO_PAGE")
        .ok()
        .and_then(|it| it.parse().ok())
        .unwrap_or(1);
    let limit = std::env::var("PASSINFO_LIMIT")
        .ok()
        .and_then(|it| it.parse().ok())
        .unwrap_or(10);

    let client = PassInfoClient::new(Credentials::new(api_key, client_id)?);
    let contacts = client.get_contacts_list(ListContacts::new(page, limit)?)?;

    for contact in contacts {
        println!(
            "{} {} <{}>",
            contact.first_name, contact.last_name, contact.phone_number
        );
    }

    Ok(())
}
