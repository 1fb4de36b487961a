//! Contacts API
//!
//! Wraps the four REST operations and mirrors every successful mutation
//! into the shared [`ContactsManager`].

mod http;

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use thiserror::Error;

use crate::contacts::ContactsManager;
use crate::form::FormSnapshot;
use crate::models::{Contact, ContactId, ContactRecord};

pub use http::HttpBackend;

/// Common result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server answered {status} for {url}")]
    Status { status: u16, url: String },
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("form has no contact id to update")]
    MissingId,
}

/// Transport for the contacts endpoint.
///
/// Browser futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait ContactsBackend {
    /// GET the collection
    async fn fetch_all(&self) -> ApiResult<Vec<ContactRecord>>;

    /// POST a new contact
    async fn create(&self, body: &FormSnapshot) -> ApiResult<ContactRecord>;

    /// PUT an existing contact
    async fn update(&self, id: ContactId, body: &FormSnapshot) -> ApiResult<ContactRecord>;

    /// Send DELETE without waiting for the response
    fn delete(&self, id: ContactId);
}

pub struct Api<B> {
    backend: B,
    contacts: Rc<RefCell<ContactsManager>>,
}

impl<B: ContactsBackend> Api<B> {
    pub fn new(backend: B, contacts: Rc<RefCell<ContactsManager>>) -> Self {
        Self { backend, contacts }
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }

    /// Load every contact, feed their tags to the registry, then replace the list.
    pub async fn list(&self) -> ApiResult<usize> {
        let records = self.backend.fetch_all().await?;
        let contacts: Vec<Contact> = records.into_iter().map(Contact::from).collect();
        let count = contacts.len();

        let mut manager = self.contacts.borrow_mut();
        for contact in &contacts {
            manager.register_tags(&contact.tags);
        }
        manager.replace_all(contacts);
        tracing::debug!(count, "contacts loaded");
        Ok(count)
    }

    pub async fn create(&self, snapshot: &FormSnapshot) -> ApiResult<Contact> {
        let contact = Contact::from(self.backend.create(snapshot).await?);
        tracing::info!(id = contact.id, "contact created");
        self.contacts.borrow_mut().add(contact.clone());
        Ok(contact)
    }

    pub async fn update(&self, snapshot: &FormSnapshot) -> ApiResult<Contact> {
        let id = snapshot.id().ok_or(ApiError::MissingId)?;
        let contact = Contact::from(self.backend.update(id, snapshot).await?);
        tracing::info!(id = contact.id, "contact updated");
        if !self.contacts.borrow_mut().replace(contact.clone()) {
            tracing::warn!(id = contact.id, "updated contact was not in the local list");
        }
        Ok(contact)
    }

    /// Optimistic: the contact leaves the local list before the request is sent,
    /// and the server's answer is never inspected.
    pub fn delete(&self, id: ContactId) {
        if !self.contacts.borrow_mut().remove(id) {
            tracing::debug!(id, "delete for unknown contact");
        }
        self.backend.delete(id);
    }
}
