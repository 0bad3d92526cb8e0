//! In-memory store abstractions standing in for a database.
//!
//! Handlers receive stores through these traits so the backing collection
//! can be swapped for a real persistence layer. The in-memory
//! implementations guard their collections with a mutex; the duplicate
//! check and the append happen under the same lock, so concurrent
//! registrations cannot race past the membership test.

use std::sync::{Mutex, PoisonError};

use crate::catalog::Product;
use crate::error::{Error, Result};
use crate::user::Registration;

/// Append-only product collection with process lifetime.
pub trait ProductStore: Send + Sync {
    /// Appends a product and returns the stored value.
    fn add(&self, product: Product) -> Product;

    /// Returns the full current collection in insertion order.
    fn all(&self) -> Vec<Product>;

    /// Returns the number of stored products.
    fn len(&self) -> usize;

    /// Returns `true` if no products are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Registered-user collection with process lifetime.
pub trait UserStore: Send + Sync {
    /// Registers a user, rejecting duplicates by username.
    ///
    /// On success returns the full accumulated list, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateUser`] when the username is already
    /// registered.
    fn register(&self, registration: Registration) -> Result<Vec<Registration>>;

    /// Returns the full current collection in insertion order.
    fn all(&self) -> Vec<Registration>;
}

/// Mutex-guarded in-memory [`ProductStore`].
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    products: Mutex<Vec<Product>>,
}

impl MemoryProductStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductStore for MemoryProductStore {
    fn add(&self, product: Product) -> Product {
        let mut products = self
            .products
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        products.push(product.clone());
        tracing::debug!(name = %product.name, total = products.len(), "Product stored");
        product
    }

    fn all(&self) -> Vec<Product> {
        self.products
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn len(&self) -> usize {
        self.products
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Mutex-guarded in-memory [`UserStore`].
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<Registration>>,
}

impl MemoryUserStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for MemoryUserStore {
    fn register(&self, registration: Registration) -> Result<Vec<Registration>> {
        let mut users = self.users.lock().unwrap_or_else(PoisonError::into_inner);

        // Membership test and append under the same lock.
        if users.iter().any(|u| u.username == registration.username) {
            return Err(Error::duplicate_user(&registration.username));
        }

        tracing::debug!(username = %registration.username, "User registered");
        users.push(registration);
        Ok(users.clone())
    }

    fn all(&self) -> Vec<Registration> {
        self.users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::Gender;

    fn registration(username: &str) -> Registration {
        Registration {
            firstname: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
            username: username.to_string(),
            date_of_birth: "1815-12-10".to_string(),
            email: "ada@example.com".to_string(),
            gender: Gender::Female,
            phone: "555-0100".to_string(),
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
        }
    }

    fn product(name: &str) -> Product {
        Product {
            name: name.to_string(),
            price: 200.0,
            description: None,
            tax: 0.0,
        }
    }

    #[test]
    fn test_product_store_appends_in_order() {
        let store = MemoryProductStore::new();
        store.add(product("first"));
        store.add(product("second"));

        let all = store.all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "first");
        assert_eq!(all[1].name, "second");
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let store = MemoryUserStore::new();
        let users = store.register(registration("ada")).unwrap();
        assert_eq!(users.len(), 1);

        let err = store.register(registration("ada")).unwrap_err();
        assert!(matches!(err, Error::DuplicateUser { ref username } if username == "ada"));

        // Exactly one entry survives for that username.
        assert_eq!(store.all().len(), 1);
    }

    #[test]
    fn test_distinct_usernames_accumulate() {
        let store = MemoryUserStore::new();
        store.register(registration("ada")).unwrap();
        let users = store.register(registration("grace")).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username, "ada");
        assert_eq!(users[1].username, "grace");
    }

    #[test]
    fn test_concurrent_registration_keeps_one_entry() {
        use std::sync::Arc;

        let store = Arc::new(MemoryUserStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.register(registration("ada")).is_ok())
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join())
            .filter(|r| matches!(r, Ok(true)))
            .count();

        assert_eq!(successes, 1);
        assert_eq!(store.all().len(), 1);
    }
}
