use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::customer::{Customer, CustomerRepository};
use crate::domain::DataAccessError;

/// インメモリ顧客リポジトリ
///
/// プロセス終了で内容は失われる。クローンは同じ列を共有する。
#[derive(Clone, Debug, Default)]
pub struct MemoryCustomerRepository {
    customers: Arc<RwLock<Vec<Customer>>>,
}

impl MemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerRepository for MemoryCustomerRepository {
    async fn list(&self) -> Result<Vec<Customer>, DataAccessError> {
        Ok(self.customers.read().await.clone())
    }

    async fn append(&self, customer: Customer) -> Result<(), DataAccessError> {
        self.customers.write().await.push(customer);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::customer::CustomerId;
    use crate::domain::Entity;

    use super::*;

    fn customer(id: i32, first_name: &str, surname: &str) -> Customer {
        Customer::new(
            CustomerId::from(id),
            Some(first_name.to_owned()),
            Some(surname.to_owned()),
        )
    }

    #[tokio::test]
    async fn test_empty_on_creation() {
        let repo = MemoryCustomerRepository::new();
        assert_eq!(repo.list().await.unwrap(), vec![]);
    }

    #[tokio::test]
    async fn test_append_preserves_order() {
        let repo = MemoryCustomerRepository::new();
        let customers = vec![
            customer(3, "Hanako", "Yamada"),
            customer(1, "John", "Doe"),
            customer(2, "Jane", "Roe"),
        ];
        for c in customers.iter().cloned() {
            repo.append(c).await.unwrap();
        }
        assert_eq!(repo.list().await.unwrap(), customers);
        // 追加がなければ同じ結果を返す
        assert_eq!(repo.list().await.unwrap(), customers);
    }

    #[tokio::test]
    async fn test_append_accepts_duplicates() {
        let repo = MemoryCustomerRepository::new();
        repo.append(customer(1, "John", "Doe")).await.unwrap();
        repo.append(customer(1, "", "")).await.unwrap();
        repo.append(Customer::default()).await.unwrap();
        assert_eq!(
            repo.list().await.unwrap(),
            vec![
                customer(1, "John", "Doe"),
                customer(1, "", ""),
                Customer::default()
            ]
        );
    }

    #[tokio::test]
    async fn test_clones_share_sequence() {
        let repo = MemoryCustomerRepository::new();
        let other = repo.clone();
        other.append(customer(1, "John", "Doe")).await.unwrap();
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_are_not_lost() {
        let repo = MemoryCustomerRepository::new();
        let handles = (0..200)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.append(customer(i, "John", "Doe")).await })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }
        let mut ids = repo
            .list()
            .await
            .unwrap()
            .iter()
            .map(|c| *c.id())
            .collect::<Vec<_>>();
        ids.sort();
        assert_eq!(ids, (0..200).collect::<Vec<_>>());
    }
}
