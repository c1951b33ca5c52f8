//! Client layer: the request dispatcher plus one method per PassInfo operation.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace, warn};
use url::Url;

use crate::domain::{
    AddContactToGroup, AddUsersToContact, ApiKey, BatchId, ClientId, Contact, CreateContact,
    ListContacts, MessageId, SendBulkMessage, SendGroupMessage, SendMessage, ValidationError,
};
use crate::transport::{self, Endpoint};

const DEFAULT_BASE_URL: &str = "https://api.passinfo.net";
const JSON_MEDIA_TYPE: &str = "application/json";

#[derive(Debug, Clone)]
struct HttpRequest {
    method: Method,
    url: Url,
    headers: Vec<(&'static str, String)>,
    body: Option<String>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>> {
        let mut builder = self.client.request(request.method, request.url);
        for (name, value) in request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpResponse { status, body })
    }
}

#[derive(Clone)]
/// PassInfo API credentials: API key plus client identifier.
///
/// Both are sent as headers on every request and never change for the lifetime of a client.
pub struct Credentials {
    api_key: ApiKey,
    client_id: ClientId,
}

impl Credentials {
    /// Validate that both values are non-empty after trimming.
    pub fn new(
        api_key: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            api_key: ApiKey::new(api_key)?,
            client_id: ClientId::new(client_id)?,
        })
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("client_id", &self.client_id)
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`PassInfoClient`].
///
/// Every operation reports failures through this type; nothing is swallowed.
pub enum PassInfoError {
    /// A required argument was missing or blank. No request was sent.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The HTTP exchange failed: network error, timeout, non-2xx status, or a body that
    /// could not be read as the expected JSON.
    ///
    /// `status` is the HTTP status when one was received, otherwise 500.
    #[error("{message} (status {status})")]
    Transport {
        status: u16,
        message: String,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}

impl PassInfoError {
    /// Status reported for [`PassInfoError::Validation`].
    pub const VALIDATION_STATUS: u16 = 400;
    /// Status reported when no HTTP response was received.
    pub const FALLBACK_STATUS: u16 = 500;

    /// HTTP-like status code: 400 for validation failures, the transport status otherwise.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => Self::VALIDATION_STATUS,
            Self::Transport { status, .. } => *status,
        }
    }

    fn transport(err: Box<dyn StdError + Send + Sync>) -> Self {
        let status = err
            .downcast_ref::<reqwest::Error>()
            .and_then(reqwest::Error::status)
            .map_or(Self::FALLBACK_STATUS, |status| status.as_u16());
        Self::Transport {
            status,
            message: format!("API request failed: {err}"),
            source: Some(err),
        }
    }

    fn http_status(status: u16, body: &str) -> Self {
        let body = body.trim();
        let message = if body.is_empty() {
            format!("API request failed: unexpected HTTP status {status}")
        } else {
            format!("API request failed: unexpected HTTP status {status}: {body}")
        };
        Self::Transport {
            status,
            message,
            source: None,
        }
    }

    fn invalid<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Transport {
            status: Self::FALLBACK_STATUS,
            message: format!("API request failed: {err}"),
            source: Some(Box::new(err)),
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`PassInfoClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct PassInfoClientBuilder {
    credentials: Credentials,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl PassInfoClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base URL (default `https://api.passinfo.net`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`PassInfoClient`].
    ///
    /// Fails when the base URL does not parse as an absolute URL.
    pub fn build(self) -> Result<PassInfoClient, PassInfoError> {
        let parsed = Url::parse(&self.base_url).map_err(PassInfoError::invalid)?;
        if parsed.cannot_be_a_base() {
            return Err(PassInfoError::invalid(
                transport::TransportError::CannotBeABase(self.base_url),
            ));
        }

        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder.build().map_err(PassInfoError::invalid)?;

        Ok(PassInfoClient {
            credentials: self.credentials,
            base_url: self.base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// Blocking PassInfo client.
///
/// Request records arrive already validated; each call builds the JSON body, sends exactly
/// one request and maps the outcome. Requests carry the `Api-Key` and `Client-Id` headers
/// plus JSON `Content-Type`/`Accept`.
pub struct PassInfoClient {
    credentials: Credentials,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl PassInfoClient {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`PassInfoClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::blocking::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> PassInfoClientBuilder {
        PassInfoClientBuilder::new(credentials)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Send one message to one recipient. Returns the response JSON unchanged.
    pub fn send_message(&self, request: SendMessage) -> Result<Value, PassInfoError> {
        self.post(
            transport::SEND_MESSAGE,
            &transport::encode_send_message_body(&request),
        )
    }

    /// Send the same message to every listed recipient. Returns the response JSON unchanged.
    pub fn send_message_bulk(&self, request: SendBulkMessage) -> Result<Value, PassInfoError> {
        self.post(
            transport::SEND_BULK_MESSAGE,
            &transport::encode_send_bulk_message_body(&request),
        )
    }

    /// Send a message to every member of a server-side group.
    pub fn send_message_group(&self, request: SendGroupMessage) -> Result<Value, PassInfoError> {
        self.post(
            transport::send_group_message_endpoint(&request),
            &transport::encode_send_group_message_body(&request),
        )
    }

    /// Delivery status of a single message.
    pub fn get_message_status(&self, message_id: &MessageId) -> Result<Value, PassInfoError> {
        self.get(transport::message_status_endpoint(message_id), &[])
    }

    /// Delivery status of a bulk send batch.
    pub fn get_message_status_bulk(&self, batch_id: &BatchId) -> Result<Value, PassInfoError> {
        self.get(transport::message_status_bulk_endpoint(batch_id), &[])
    }

    /// Register a contact.
    ///
    /// Returns `Ok(None)` when the server answers without a truthy `success` flag.
    pub fn create_contact(
        &self,
        request: CreateContact,
    ) -> Result<Option<Contact>, PassInfoError> {
        let response = self.post(
            transport::ADD_CONTACT,
            &transport::encode_create_contact_body(&request),
        )?;
        transport::decode_create_contact_response(&request, response)
            .map_err(PassInfoError::invalid)
    }

    /// All groups owned by the account. Returns the response JSON unchanged.
    pub fn get_user_groups(&self) -> Result<Value, PassInfoError> {
        self.get(transport::GET_USER_GROUPS, &[])
    }

    pub fn add_contact_to_group(&self, request: AddContactToGroup) -> Result<bool, PassInfoError> {
        let response = self.post(
            transport::ADD_CONTACT_TO_GROUP,
            &transport::encode_add_contact_to_group_body(&request),
        )?;
        transport::decode_add_contact_to_group_response(response).map_err(PassInfoError::invalid)
    }

    /// Remaining SMS credits (`solde`). An absent field reads as `0`.
    pub fn get_credit_balance(&self) -> Result<f64, PassInfoError> {
        let response = self.get(transport::GET_CREDIT_BALANCE, &[])?;
        transport::decode_credit_balance_response(response).map_err(PassInfoError::invalid)
    }

    /// Rotate the API key and return the new one. An absent field reads as `""`.
    ///
    /// The client keeps using the credentials it was built with.
    pub fn renew_api_key(&self) -> Result<String, PassInfoError> {
        let response = self.get(transport::RENEW_API_KEY, &[])?;
        transport::decode_renew_api_key_response(response).map_err(PassInfoError::invalid)
    }

    /// One page of the account's contacts.
    pub fn get_contacts_list(&self, request: ListContacts) -> Result<Vec<Contact>, PassInfoError> {
        let query = transport::encode_list_contacts_query(request);
        let response = self.get(transport::LIST_CONTACTS, &query)?;
        transport::decode_list_contacts_response(response).map_err(PassInfoError::invalid)
    }

    pub fn add_users_to_contact(&self, request: AddUsersToContact) -> Result<bool, PassInfoError> {
        let response = self.post(
            transport::ADD_USERS_TO_CONTACT,
            &transport::encode_add_users_to_contact_body(&request),
        )?;
        transport::decode_add_users_to_contact_response(response).map_err(PassInfoError::invalid)
    }

    fn get(
        &self,
        endpoint: Endpoint<'_>,
        query: &[(&'static str, String)],
    ) -> Result<Value, PassInfoError> {
        self.dispatch::<()>(Method::GET, endpoint, query, None)
    }

    fn post<B>(&self, endpoint: Endpoint<'_>, body: &B) -> Result<Value, PassInfoError>
    where
        B: Serialize,
    {
        self.dispatch(Method::POST, endpoint, &[], Some(body))
    }

    fn dispatch<B>(
        &self,
        method: Method,
        endpoint: Endpoint<'_>,
        query: &[(&'static str, String)],
        body: Option<&B>,
    ) -> Result<Value, PassInfoError>
    where
        B: Serialize + ?Sized,
    {
        let mut url = endpoint
            .url(&self.base_url)
            .map_err(PassInfoError::invalid)?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
        }

        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(PassInfoError::invalid)?;

        debug!(
            %method,
            %url,
            client_id = self.credentials.client_id.as_str(),
            "sending PassInfo request"
        );

        let request = HttpRequest {
            method,
            url,
            headers: self.headers(),
            body,
        };

        let response = self.http.execute(request).map_err(|err| {
            let err = PassInfoError::transport(err);
            warn!(error = %err, endpoint = endpoint.path(), "PassInfo request failed");
            err
        })?;

        debug!(status = response.status, "received PassInfo response");
        trace!(body = %response.body, "raw PassInfo response");

        if !(200..=299).contains(&response.status) {
            return Err(PassInfoError::http_status(response.status, &response.body));
        }

        serde_json::from_str(&response.body).map_err(PassInfoError::invalid)
    }

    fn headers(&self) -> Vec<(&'static str, String)> {
        vec![
            (ApiKey::FIELD, self.credentials.api_key.as_str().to_owned()),
            (
                ClientId::FIELD,
                self.credentials.client_id.as_str().to_owned(),
            ),
            ("Content-Type", JSON_MEDIA_TYPE.to_owned()),
            ("Accept", JSON_MEDIA_TYPE.to_owned()),
        ]
    }
}
