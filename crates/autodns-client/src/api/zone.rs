//! Zone operations.

use super::take_data;
use crate::AutoDnsClient;
use autodns_core::{
    codes, Command, Identifier, ListZonesQuery, ObjectType, ResponseSchema, Result, Status,
    WriteOptions,
};
use serde::Serialize;
use serde_json::Value;

/// Sequences in a zone info reply
const ZONE_INFO: ResponseSchema = ResponseSchema::new(&["data.zone.nserver", "data.zone.rr"]);

/// Sequences in a zone listing; every zone is a list entry
const ZONE_LIST: ResponseSchema =
    ResponseSchema::new(&["data.zone", "data.zone.nserver", "data.zone.rr"]);

/// Zone operations
pub struct ZoneApi<'a> {
    client: &'a AutoDnsClient,
}

impl<'a> ZoneApi<'a> {
    pub(crate) const fn new(client: &'a AutoDnsClient) -> Self {
        Self { client }
    }

    /// Create a zone (code 0201)
    pub async fn create<T: Serialize>(&self, zone: &T, options: WriteOptions) -> Result<Status> {
        self.write(codes::ZONE_CREATE, serde_json::to_value(zone)?, options)
            .await
    }

    /// Update a zone (code 0202)
    pub async fn update<T: Serialize>(&self, zone: &T, options: WriteOptions) -> Result<Status> {
        self.write(codes::ZONE_UPDATE, serde_json::to_value(zone)?, options)
            .await
    }

    /// Delete a zone (code 0203)
    pub async fn delete(&self, id: impl Into<Identifier>) -> Result<Status> {
        self.write(codes::ZONE_DELETE, id.into().into_payload(), WriteOptions::new())
            .await
    }

    /// Get one zone (code 0205), returning its `data.zone` block
    pub async fn get(&self, id: impl Into<Identifier>) -> Result<Value> {
        let command = Command::new(codes::ZONE_INFO, ObjectType::Zone, id.into().into_payload());
        let result = self.client.execute(&command, &ZONE_INFO).await?;
        Ok(take_data(result, &ObjectType::Zone))
    }

    /// List zones (code 0205 with `view`/`where`/`key`).
    ///
    /// Returns an empty list when the gateway sends no zone entries.
    pub async fn list(&self, query: &ListZonesQuery) -> Result<Vec<Value>> {
        let command = Command::raw(codes::ZONE_INFO, query.to_task());
        let mut result = self.client.execute(&command, &ZONE_LIST).await?;

        match result.take_data_for(ObjectType::Zone.as_str()) {
            Some(Value::Array(zones)) => Ok(zones),
            Some(other) => Ok(vec![other]),
            None => Ok(Vec::new()),
        }
    }

    async fn write(&self, code: &str, payload: Value, options: WriteOptions) -> Result<Status> {
        let command =
            Command::new(code, ObjectType::Zone, payload).with_defaults(options.defaults);
        let result = self.client.execute(&command, &ResponseSchema::EMPTY).await?;
        Ok(result.status)
    }
}
