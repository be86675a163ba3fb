//! Fixture loading: wipe a collection, then insert the fixtures
//!
//! Every step runs sequentially and stops at the first failed call. A
//! collection ends up holding exactly its fixture list because everything
//! is deleted before anything is inserted; nothing is diffed.

use crate::client::{Collection, CollectionApi, RemoteRecord};
use crate::error::{Error, Result};
use crate::fixtures::{Fixture, FixtureSet};

/// Outcome of reloading one collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub collection: Collection,
    pub deleted: usize,
    pub created: usize,
}

/// List every record in a collection
pub async fn list_collection<C>(client: &C, collection: Collection) -> Result<Vec<RemoteRecord>>
where
    C: CollectionApi + ?Sized,
{
    let records = client.list(collection).await?;
    log::debug!("Listed {} {}", records.len(), collection);
    Ok(records)
}

/// Delete every record in a collection, one DELETE per record.
///
/// Returns how many records were deleted. The first failed deletion aborts
/// the rest.
pub async fn delete_all<C>(client: &C, collection: Collection) -> Result<usize>
where
    C: CollectionApi + ?Sized,
{
    let records = list_collection(client, collection).await?;

    for record in &records {
        log::info!("Deleting: {}", record.name);
        client.delete(collection, &record.id).await?;
    }

    log::info!("Deleted {} {}", records.len(), collection);
    Ok(records.len())
}

/// Insert fixtures in order, one POST per fixture.
///
/// Returns the records as created by the service. The first failed insert
/// aborts the rest.
pub async fn insert_all<C, F>(client: &C, fixtures: &[F]) -> Result<Vec<RemoteRecord>>
where
    C: CollectionApi + ?Sized,
    F: Fixture,
{
    let collection = F::COLLECTION;
    let mut created = Vec::with_capacity(fixtures.len());

    for fixture in fixtures {
        let body = serde_json::to_value(fixture)?;
        let record = client.create(collection, &body).await?;
        log::info!("Created: {}", serde_json::to_string(&record)?);
        created.push(record);
    }

    log::info!("Created {} {}", created.len(), collection);
    Ok(created)
}

/// Check that a collection holds exactly the given fixtures.
pub async fn verify<C, F>(client: &C, fixtures: &[F]) -> Result<()>
where
    C: CollectionApi + ?Sized,
    F: Fixture,
{
    let collection = F::COLLECTION;
    let mut remaining = list_collection(client, collection).await?;

    let mut missing = Vec::new();
    for fixture in fixtures {
        match remaining.iter().position(|r| fixture.matches(r)) {
            Some(idx) => {
                remaining.remove(idx);
            }
            None => missing.push(fixture.label().to_string()),
        }
    }

    if missing.is_empty() && remaining.is_empty() {
        log::info!("Verified {} {}", fixtures.len(), collection);
        return Ok(());
    }

    let mut problems = Vec::new();
    if !missing.is_empty() {
        problems.push(format!("missing {}", missing.join(", ")));
    }
    if !remaining.is_empty() {
        let extra: Vec<_> = remaining.iter().map(|r| r.name.as_str()).collect();
        problems.push(format!("unexpected {}", extra.join(", ")));
    }
    Err(Error::Verification(format!(
        "{}: {}",
        collection,
        problems.join("; ")
    )))
}

/// Delete everything in the fixtures' collection, then insert the fixtures.
pub async fn reload<C, F>(client: &C, fixtures: &[F], check: bool) -> Result<LoadSummary>
where
    C: CollectionApi + ?Sized,
    F: Fixture,
{
    let collection = F::COLLECTION;
    log::debug!("Reloading {}", collection);

    let deleted = delete_all(client, collection).await?;
    let created = insert_all(client, fixtures).await?.len();
    if check {
        verify(client, fixtures).await?;
    }

    Ok(LoadSummary {
        collection,
        deleted,
        created,
    })
}

/// Reload the selected collections, companies first, then users.
///
/// `only` restricts the run to a single collection.
pub async fn load<C>(
    client: &C,
    set: &FixtureSet,
    only: Option<Collection>,
    check: bool,
) -> Result<Vec<LoadSummary>>
where
    C: CollectionApi + ?Sized,
{
    let mut summaries = Vec::new();

    for collection in selected(only) {
        let summary = match collection {
            Collection::Companies => reload(client, &set.companies, check).await?,
            Collection::Users => reload(client, &set.users, check).await?,
        };
        summaries.push(summary);
    }

    Ok(summaries)
}

/// Delete everything in the selected collections, inserting nothing.
pub async fn reset<C>(client: &C, only: Option<Collection>) -> Result<Vec<LoadSummary>>
where
    C: CollectionApi + ?Sized,
{
    let mut summaries = Vec::new();

    for collection in selected(only) {
        let deleted = delete_all(client, collection).await?;
        summaries.push(LoadSummary {
            collection,
            deleted,
            created: 0,
        });
    }

    Ok(summaries)
}

fn selected(only: Option<Collection>) -> Vec<Collection> {
    match only {
        Some(collection) => vec![collection],
        None => Collection::ALL.to_vec(),
    }
}
