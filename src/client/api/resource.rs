//! CRUD API trait and per-resource call groups

use std::marker::PhantomData;

use async_trait::async_trait;

use crate::client::resource::{Appointments, Hubs, Partners, Resource, Slots};
use crate::error::Result;

/// CRUD operations over any [`Resource`] collection
#[async_trait]
pub trait ResourceApi: Send + Sync {
    /// List the whole collection
    async fn get_all<R: Resource>(&self) -> Result<Vec<R::Record>>;

    /// Fetch one record. A non-2xx answer (404 in particular) is an error.
    async fn get_by_id<R: Resource>(&self, id: &str) -> Result<R::Record>;

    /// Create a record and return it as stored by the server
    async fn create<R: Resource>(&self, draft: &R::Draft) -> Result<R::Record>;

    /// Replace fields of a record and return the updated version
    async fn update<R: Resource>(&self, id: &str, draft: &R::Draft) -> Result<R::Record>;

    /// Delete a record
    async fn delete<R: Resource>(&self, id: &str) -> Result<()>;
}

/// Call group scoped to one collection, e.g. `client.partners().get_all()`.
/// The group is `Copy` and its methods consume it.
pub struct ResourceGroup<'a, C, R> {
    client: &'a C,
    _resource: PhantomData<fn() -> R>,
}

impl<C, R> Clone for ResourceGroup<'_, C, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, R> Copy for ResourceGroup<'_, C, R> {}

impl<'a, C: ResourceApi, R: Resource> ResourceGroup<'a, C, R> {
    pub fn new(client: &'a C) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    pub async fn get_all(self) -> Result<Vec<R::Record>> {
        self.client.get_all::<R>().await
    }

    pub async fn get_by_id(self, id: &str) -> Result<R::Record> {
        self.client.get_by_id::<R>(id).await
    }

    pub async fn create(self, draft: &R::Draft) -> Result<R::Record> {
        self.client.create::<R>(draft).await
    }

    pub async fn update(self, id: &str, draft: &R::Draft) -> Result<R::Record> {
        self.client.update::<R>(id, draft).await
    }

    pub async fn delete(self, id: &str) -> Result<()> {
        self.client.delete::<R>(id).await
    }
}

/// Named call groups for every collection the platform exposes
pub trait ResourceGroups: ResourceApi + Sized {
    fn partners(&self) -> ResourceGroup<'_, Self, Partners> {
        ResourceGroup::new(self)
    }

    fn hubs(&self) -> ResourceGroup<'_, Self, Hubs> {
        ResourceGroup::new(self)
    }

    fn slots(&self) -> ResourceGroup<'_, Self, Slots> {
        ResourceGroup::new(self)
    }

    fn appointments(&self) -> ResourceGroup<'_, Self, Appointments> {
        ResourceGroup::new(self)
    }
}

impl<T: ResourceApi> ResourceGroups for T {}
