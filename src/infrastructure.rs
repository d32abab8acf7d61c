mod customer;
mod memory;

use std::sync::Arc;

use eventstore::{ClientSettings, EventData, ResolvedEvent};
use serde_json::{json, Value};
use thiserror::Error;

use crate::domain::customer::CustomerRepository;
use crate::domain::{DataAccessError, Event};
use crate::{Backend, ClienteleConfig};

pub use self::customer::*;
pub use self::memory::*;

/// 設定されたバックエンドの顧客リポジトリを生成する
pub fn connect(config: &ClienteleConfig) -> Result<Arc<dyn CustomerRepository>, DataAccessError> {
    match config.storage.backend {
        Backend::Memory => Ok(Arc::new(MemoryCustomerRepository::new())),
        Backend::EventStore => {
            let url = config
                .eventstore
                .as_ref()
                .map(|eventstore| eventstore.url.as_str())
                .ok_or_else(|| {
                    DataAccessError::ConnectionError("eventstore.url is not configured".into())
                })?;
            let settings = url
                .parse::<ClientSettings>()
                .map_err(|e| DataAccessError::ConnectionError(e.into()))?;
            let client = eventstore::Client::new(settings)
                .map_err(|e| DataAccessError::ConnectionError(e.into()))?;
            Ok(Arc::new(EventStoreCustomerRepository::new(client)))
        }
    }
}

impl From<eventstore::Error> for DataAccessError {
    fn from(value: eventstore::Error) -> Self {
        match value {
            eventstore::Error::ConnectionClosed
            | eventstore::Error::GrpcConnectionError(_)
            | eventstore::Error::DeadlineExceeded
            | eventstore::Error::InitializationError(_) => Self::ConnectionError(Box::new(value)),
            eventstore::Error::ResourceNotFound | eventstore::Error::ResourceDeleted => {
                Self::ReadError(Box::new(value))
            }
            eventstore::Error::ResourceAlreadyExists
            | eventstore::Error::WrongExpectedVersion { .. } => Self::WriteError(Box::new(value)),
            eventstore::Error::IllegalStateError(_) => Self::ClientSideError(Box::new(value)),
            _ => Self::QueryError(Box::new(value)),
        }
    }
}

impl From<EventEnvelopeError> for DataAccessError {
    fn from(value: EventEnvelopeError) -> Self {
        DataAccessError::ClientSideError(Box::new(value))
    }
}

/// イベントとストリーム上のJSONペイロードとの変換エラー
#[derive(Error, Debug)]
pub enum EventEnvelopeError {
    #[error("Event is not tagged with its event type")]
    MissingEventType,
    #[error("Malformed event payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// `{"EventType": {...}}` 形式のイベントをイベント種別とペイロードに分解する
fn from_event<E: Event>(event: &E) -> Result<EventData, EventEnvelopeError> {
    let root = serde_json::to_value(event)?;
    let (event_type, data) = root
        .as_object()
        .and_then(|object| object.iter().next())
        .ok_or(EventEnvelopeError::MissingEventType)?;
    Ok(EventData::json(event_type, data)?)
}

fn try_from_resolved_event<E: Event>(value: &ResolvedEvent) -> Result<E, EventEnvelopeError> {
    let event = value.get_original_event();
    let data: Value = serde_json::from_slice(event.data.as_ref())?;
    let json = json!({ &event.event_type: data });
    Ok(serde_json::from_value(json)?)
}
