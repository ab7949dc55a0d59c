//! Main AutoDNS gateway client implementation.

use crate::api::{DomainApi, ZoneApi};
use crate::config::ClientConfig;
use crate::trace::{Exchange, TraceHook};
use crate::transport::{HttpsTransport, Transport};
use autodns_core::{
    build_request, interpret, Command, Credentials, ResponseResult, ResponseSchema, Result,
    DEFAULT_LANGUAGE,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// The public AutoDNS XML gateway
pub const DEFAULT_BASE_URL: &str = "https://gateway.autodns.com";

/// Main AutoDNS gateway client
#[derive(Clone)]
pub struct AutoDnsClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    credentials: Credentials,
    language: String,
    transport: Arc<dyn Transport>,
    trace: Option<TraceHook>,
}

impl AutoDnsClient {
    /// Create a new client for the public gateway using default settings
    pub fn new(
        user: impl Into<String>,
        password: impl Into<String>,
        context: impl Into<String>,
    ) -> Result<Self> {
        AutoDnsClientBuilder::new(user, password, context).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(
        user: impl Into<String>,
        password: impl Into<String>,
        context: impl Into<String>,
    ) -> AutoDnsClientBuilder {
        AutoDnsClientBuilder::new(user, password, context)
    }

    /// Create a client from a loaded configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.builder().build()
    }

    /// Access domain operations
    #[must_use]
    pub fn domains(&self) -> DomainApi<'_> {
        DomainApi::new(self)
    }

    /// Access zone operations
    #[must_use]
    pub fn zones(&self) -> ZoneApi<'_> {
        ZoneApi::new(self)
    }

    /// Credentials sent with every request
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }

    /// Language requested for status texts
    #[must_use]
    pub fn language(&self) -> &str {
        &self.inner.language
    }

    /// Send one command and interpret the reply.
    ///
    /// `schema` declares which response paths are sequences. Gateway
    /// errors come back as [`AutoDnsError::Protocol`](autodns_core::AutoDnsError::Protocol).
    pub async fn execute(
        &self,
        command: &Command,
        schema: &ResponseSchema,
    ) -> Result<ResponseResult> {
        let document = build_request(
            &self.inner.credentials,
            Some(&self.inner.language),
            command,
        )?;
        let object_type = command.object_type().map(|o| o.as_str());
        debug!(code = %command.code, object = ?object_type, "sending command");

        let started = Instant::now();
        let body = self.inner.transport.send(document).await?;
        let elapsed = started.elapsed();
        trace!(code = %command.code, body = %body, "raw gateway response");

        if let Some(hook) = &self.inner.trace {
            hook(&Exchange {
                code: &command.code,
                object_type,
                response: &body,
                elapsed,
            });
        }

        match interpret(&body, schema) {
            Ok(result) => {
                debug!(code = %command.code, status = %result.status.code, "command succeeded");
                Ok(result)
            }
            Err(e) => {
                debug!(code = %command.code, error = %e, "command failed");
                Err(e)
            }
        }
    }
}

/// Builder for configuring an [`AutoDnsClient`]
pub struct AutoDnsClientBuilder {
    credentials: Credentials,
    language: String,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: String,
    transport: Option<Arc<dyn Transport>>,
    trace: Option<TraceHook>,
}

impl AutoDnsClientBuilder {
    /// Create a new builder with the given login
    #[must_use]
    pub fn new(
        user: impl Into<String>,
        password: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            credentials: Credentials::new(user, password, context),
            language: DEFAULT_LANGUAGE.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: format!("autodns-rust/{}", env!("CARGO_PKG_VERSION")),
            transport: None,
            trace: None,
        }
    }

    /// Set the language for gateway status texts (default "en")
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the email asynchronous replies are routed to
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.credentials.email = Some(email.into());
        self
    }

    /// Set the gateway URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a request timeout. Requests wait indefinitely without one.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Replace the HTTPS transport. `base_url`, `timeout` and `user_agent`
    /// are ignored when a custom transport is set.
    #[must_use]
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Install a callback that sees every raw response
    #[must_use]
    pub fn trace<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Exchange<'_>) + Send + Sync + 'static,
    {
        self.trace = Some(Arc::new(hook));
        self
    }

    /// Build the client
    pub fn build(self) -> Result<AutoDnsClient> {
        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpsTransport::new(
                &self.base_url,
                self.timeout,
                &self.user_agent,
            )?),
        };

        Ok(AutoDnsClient {
            inner: Arc::new(ClientInner {
                credentials: self.credentials,
                language: self.language,
                transport,
                trace: self.trace,
            }),
        })
    }
}
