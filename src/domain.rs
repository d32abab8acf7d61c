pub mod customer;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    error::Error,
    fmt::{Debug, Display},
    ops::Deref,
};
use thiserror::Error;

pub trait Id:
    Copy
    + Eq
    + Deref<Target = Self::Inner>
    + From<Self::Inner>
    + Display
    + Debug
    + Serialize
    + for<'de> Deserialize<'de>
{
    type Inner;
}

/// `{"EventType": {...}}` 形式でシリアライズされるドメインイベント
pub trait Event: Clone + Eq + Debug + Serialize + DeserializeOwned {}

/// 永続化の単位となるエンティティ
pub trait Entity: Debug + Clone {
    type Id: Id;

    /// エンティティセット名 (ストリーム名)
    const ENTITY_NAME: &'static str;

    fn id(&self) -> Self::Id;
}

pub type BoxError = Box<dyn Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum DataAccessError {
    #[error("Database connection error: {0}")]
    ConnectionError(BoxError),
    #[error("Database query error: {0}")]
    QueryError(BoxError),
    #[error("Data read error: {0}")]
    ReadError(BoxError),
    #[error("Data write error: {0}")]
    WriteError(BoxError),
    #[error("Client side error: {0}")]
    ClientSideError(BoxError),
}
