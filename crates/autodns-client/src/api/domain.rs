//! Domain operations.

use super::take_data;
use crate::AutoDnsClient;
use autodns_core::{
    codes, BatchItem, Command, Identifier, Lookup, ObjectType, ResponseSchema, Result, Status,
    Target, WriteOptions,
};
use futures_util::future::join_all;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Sequences in a domain info reply
const DOMAIN_INFO: ResponseSchema = ResponseSchema::new(&["data.domain.nserver"]);

/// Domain operations
pub struct DomainApi<'a> {
    client: &'a AutoDnsClient,
}

impl<'a> DomainApi<'a> {
    pub(crate) const fn new(client: &'a AutoDnsClient) -> Self {
        Self { client }
    }

    /// Get one domain (code 0105), returning its `data.domain` block.
    ///
    /// A success reply without that block returns `Value::Null`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let domain = client.domains().get("example.com").await?;
    /// println!("{}", domain["name"]);
    /// ```
    pub async fn get(&self, id: impl Into<Identifier>) -> Result<Value> {
        let command = Command::new(
            codes::DOMAIN_INFO,
            ObjectType::Domain,
            id.into().into_payload(),
        );
        let result = self.client.execute(&command, &DOMAIN_INFO).await?;
        Ok(take_data(result, &ObjectType::Domain))
    }

    /// Get several domains concurrently, one request each.
    ///
    /// The output has one entry per input, in input order; a failed lookup
    /// only fails its own entry.
    pub async fn get_many<I>(&self, ids: impl IntoIterator<Item = I>) -> Vec<BatchItem>
    where
        I: Into<Identifier>,
    {
        let lookups: Vec<_> = ids.into_iter().map(|id| self.get(id)).collect();
        debug!(count = lookups.len(), "fetching domains");
        join_all(lookups).await
    }

    /// Get a single domain or a batch, as chosen by the [`Target`] variant
    pub async fn lookup(&self, target: impl Into<Target>) -> Result<Lookup> {
        match target.into() {
            Target::Name(name) => self.get(Identifier::Name(name)).await.map(Lookup::Single),
            Target::Object(payload) => self.get(Identifier::Object(payload)).await.map(Lookup::Single),
            Target::Batch(ids) => Ok(Lookup::Batch(self.get_many(ids).await)),
        }
    }

    /// Transfer domains in from another registrar (code 0104).
    ///
    /// All requests go out as one command. Reply routing to the configured
    /// email is always requested so the gateway can report completion.
    pub async fn transfer_in<T: Serialize>(
        &self,
        requests: &[T],
        options: WriteOptions,
    ) -> Result<Status> {
        let command = Command::new(
            codes::DOMAIN_TRANSFER_IN,
            ObjectType::Domain,
            serde_json::to_value(requests)?,
        )
        .with_defaults(options.defaults)
        .with_reply_to(true);

        let result = self.client.execute(&command, &ResponseSchema::EMPTY).await?;
        Ok(result.status)
    }
}
