use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Paging options for list queries (`<view>`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListView {
    /// Number of entries to skip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    /// Maximum number of entries to return
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Include child objects (records) in every entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<bool>,
}

/// Filter predicate for list queries (`<where>`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhereClause {
    /// `key operator value`, e.g. `name like *.de`
    Condition {
        /// Field name
        key: String,
        /// Comparison operator (eq, like, lt, gt, ...)
        operator: String,
        /// Value to compare against
        value: String,
    },
    /// All clauses must match
    And(Vec<WhereClause>),
    /// Any clause may match
    Or(Vec<WhereClause>),
}

impl WhereClause {
    /// Single comparison
    #[must_use]
    pub fn condition(
        key: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::Condition {
            key: key.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    /// Parse the `KEY:OPERATOR:VALUE` shorthand. The value may contain colons.
    #[must_use]
    pub fn parse_shorthand(input: &str) -> Option<Self> {
        let mut parts = input.splitn(3, ':');
        let key = parts.next().filter(|k| !k.is_empty())?;
        let operator = parts.next().filter(|o| !o.is_empty())?;
        let value = parts.next()?;
        Some(Self::condition(key, operator, value))
    }

    fn to_value(&self) -> Value {
        match self {
            Self::Condition {
                key,
                operator,
                value,
            } => json!({ "key": key, "operator": operator, "value": value }),
            Self::And(clauses) => json!({ "and": clauses.iter().map(Self::to_value).collect::<Vec<_>>() }),
            Self::Or(clauses) => json!({ "or": clauses.iter().map(Self::to_value).collect::<Vec<_>>() }),
        }
    }
}

/// Zone listing query: paging, filter and the fields to return
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListZonesQuery {
    /// Paging options
    pub view: Option<ListView>,
    /// Filter predicate
    pub filter: Option<WhereClause>,
    /// Extra fields the gateway should include per entry
    pub keys: Vec<String>,
}

impl ListZonesQuery {
    /// Query without paging, filter or keys
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set paging options
    #[must_use]
    pub fn view(mut self, view: ListView) -> Self {
        self.view = Some(view);
        self
    }

    /// Set the filter predicate
    #[must_use]
    pub fn filter(mut self, filter: WhereClause) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Add a key to return per entry
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.keys.push(key.into());
        self
    }

    /// Task fields for a raw command (`view`, `where`, `key`)
    #[must_use]
    pub fn to_task(&self) -> Map<String, Value> {
        let mut task = Map::new();
        if let Some(view) = &self.view {
            task.insert("view".into(), json!(view));
        }
        if let Some(filter) = &self.filter {
            task.insert("where".into(), filter.to_value());
        }
        if !self.keys.is_empty() {
            task.insert("key".into(), json!(self.keys));
        }
        task
    }
}
