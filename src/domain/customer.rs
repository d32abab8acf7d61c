use async_trait::async_trait;
use derive_more::{Deref, Display, From};
use serde::{
    de::{IgnoredAny, MapAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};
use std::fmt;

use crate::domain::{DataAccessError, Entity, Event, Id};

/// 顧客リポジトリ
///
/// 登録順を保持する追記専用のコレクション。
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// 全顧客を登録順で取得する
    async fn list(&self) -> Result<Vec<Customer>, DataAccessError>;
    /// 顧客を末尾に追加する
    async fn append(&self, customer: Customer) -> Result<(), DataAccessError>;
}

/// 顧客ID
///
/// 呼び出し側が指定する。一意性は保証されない。
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Display, From, Deref, Default,
)]
pub struct CustomerId(i32);

impl Id for CustomerId {
    type Inner = i32;
}

/// 顧客イベント
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerEvent {
    /// 顧客が追加された
    CustomerAdded {
        id: CustomerId,
        first_name: Option<String>,
        surname: Option<String>,
    },
}

impl Event for CustomerEvent {}

/// 顧客エンティティ
///
/// 入力時のキーは大文字小文字を区別しない。欠落したフィールドは既定値になる。
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Customer {
    #[serde(rename = "ID")]
    id: CustomerId,
    #[serde(rename = "FirstName")]
    first_name: Option<String>,
    #[serde(rename = "Surname")]
    surname: Option<String>,
}

impl Customer {
    pub fn new(id: CustomerId, first_name: Option<String>, surname: Option<String>) -> Self {
        Self {
            id,
            first_name,
            surname,
        }
    }
}

impl<'de> Deserialize<'de> for Customer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CustomerVisitor)
    }
}

struct CustomerVisitor;

impl<'de> Visitor<'de> for CustomerVisitor {
    type Value = Customer;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a customer object with ID, FirstName and Surname")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut customer = Customer::default();
        // 同じキーが複数ある場合は後勝ち
        while let Some(key) = map.next_key::<String>()? {
            match key.to_ascii_lowercase().as_str() {
                "id" => customer.id = map.next_value()?,
                "firstname" => customer.first_name = map.next_value()?,
                "surname" => customer.surname = map.next_value()?,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(customer)
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    const ENTITY_NAME: &'static str = "customer";

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl From<Customer> for CustomerEvent {
    fn from(value: Customer) -> Self {
        CustomerEvent::CustomerAdded {
            id: value.id,
            first_name: value.first_name,
            surname: value.surname,
        }
    }
}

impl From<CustomerEvent> for Customer {
    fn from(value: CustomerEvent) -> Self {
        match value {
            CustomerEvent::CustomerAdded {
                id,
                first_name,
                surname,
            } => Customer::new(id, first_name, surname),
        }
    }
}
