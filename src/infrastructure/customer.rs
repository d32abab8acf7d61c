use async_trait::async_trait;
use eventstore::{AppendToStreamOptions, Client, ExpectedRevision};
use tracing::debug;

use crate::domain::customer::{Customer, CustomerEvent, CustomerRepository};
use crate::domain::{DataAccessError, Entity};
use crate::infrastructure::{from_event, try_from_resolved_event};

/// EventStoreDB上の顧客リポジトリ
///
/// 全顧客を単一の `customer` ストリームに `CustomerAdded` として追記する。
#[derive(Clone)]
pub struct EventStoreCustomerRepository {
    client: Client,
}

impl EventStoreCustomerRepository {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CustomerRepository for EventStoreCustomerRepository {
    async fn list(&self) -> Result<Vec<Customer>, DataAccessError> {
        let mut stream = match self
            .client
            .read_stream(Customer::ENTITY_NAME, &Default::default())
            .await
        {
            Ok(stream) => stream,
            Err(eventstore::Error::ResourceNotFound | eventstore::Error::ResourceDeleted) => {
                return Ok(Vec::new())
            }
            Err(e) => return Err(e.into()),
        };
        let mut customers = Vec::new();
        loop {
            match stream.next().await {
                Ok(Some(e)) => {
                    let event = try_from_resolved_event::<CustomerEvent>(&e)?;
                    customers.push(Customer::from(event));
                }
                Ok(None) => break,
                Err(eventstore::Error::ResourceNotFound | eventstore::Error::ResourceDeleted) => {
                    return Ok(Vec::new())
                }
                Err(e) => return Err(e.into()),
            }
        }
        debug!("{}件のイベントを読み込みました", customers.len());
        Ok(customers)
    }

    async fn append(&self, customer: Customer) -> Result<(), DataAccessError> {
        let event = from_event(&CustomerEvent::from(customer))?;
        self.client
            .append_to_stream(
                Customer::ENTITY_NAME,
                &AppendToStreamOptions::default().expected_revision(ExpectedRevision::Any),
                vec![event],
            )
            .await?;
        Ok(())
    }
}
