//! Seeding pipeline: copy, derive, overlay.

use std::path::Path;

use seedforge_config::{BatchPolicy, ConfigError, SeedConfig};
use seedforge_core::copier;
use seedforge_core::{derive_id, FieldSource, Result, SeedEntity, SeedError, SeedRecord};
use tracing::{debug, info, warn};

/// Converts one record into an `E` carrying its derived identifier.
///
/// The record is copied onto a fresh instance with the identifier still at
/// its zero value, the identifier is derived from that instance, then
/// written into the shape's identifier field.
pub fn copy_with_unique_id<E: SeedEntity>(record: &impl FieldSource) -> Result<E> {
    convert(record, None)
}

/// Converts every record, aborting on the first failure.
///
/// Output order matches input order.
pub fn seed_data_with_unique_id<E, I>(records: I) -> Result<Vec<E>>
where
    E: SeedEntity,
    I: IntoIterator,
    I::Item: FieldSource,
{
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| convert(&record, None).map_err(|e| e.in_record(index)))
        .collect()
}

fn convert<E: SeedEntity>(record: &impl FieldSource, id_field: Option<&str>) -> Result<E> {
    let descriptor = E::descriptor();
    let id_field = id_field.unwrap_or(descriptor.id_field);
    let Some(id_descriptor) = descriptor.find_field(id_field) else {
        return Err(SeedError::UnknownIdField {
            shape: descriptor.qualified_name,
            field: id_field.to_string(),
        });
    };

    let mut instance = descriptor.instantiate()?;
    copier::apply(&descriptor, &mut instance, record)?;

    let id = derive_id(&instance);
    let patch = SeedRecord::new().with(id_descriptor.name, id);
    copier::apply(&descriptor, &mut instance, &patch)?;

    debug!(
        event = "seed_row",
        shape = descriptor.qualified_name,
        id = %id,
    );
    Ok(instance)
}

/// The ORM's "seed these fixed rows" call.
pub trait SeedSink<E> {
    /// Receives the finished rows.
    fn has_data(&mut self, rows: Vec<E>);
}

impl<E> SeedSink<E> for Vec<E> {
    fn has_data(&mut self, rows: Vec<E>) {
        self.extend(rows);
    }
}

/// Seeds any [`SeedSink`] with rows carrying derived identifiers.
///
/// # Example
///
/// ```
/// use seedforge::prelude::*;
///
/// #[derive(SeedEntity)]
/// pub struct Foo {
///     id: Uuid,
///     name: String,
/// }
///
/// let mut table: Vec<Foo> = Vec::new();
/// table
///     .seed_data_with_unique_id(vec![seed_record! { name: "Foo 1" }])
///     .unwrap();
/// assert_eq!(table.len(), 1);
/// ```
pub trait SeedDataExt<E: SeedEntity>: SeedSink<E> {
    /// Converts `records` and forwards them to the sink in one call.
    ///
    /// Nothing is forwarded if any record fails.
    fn seed_data_with_unique_id<I>(&mut self, records: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: FieldSource,
    {
        let rows: Vec<E> = seed_data_with_unique_id(records)?;
        SeedSink::<E>::has_data(self, rows);
        Ok(self)
    }
}

impl<E: SeedEntity, S: SeedSink<E> + ?Sized> SeedDataExt<E> for S {}

/// Runs the pipeline under a [`SeedConfig`].
///
/// Honors the configured batch policy and identifier field override.
#[derive(Debug, Clone, Default)]
pub struct Seeder {
    config: SeedConfig,
}

impl Seeder {
    /// Creates a seeder with the given configuration.
    pub fn new(config: SeedConfig) -> Self {
        Self { config }
    }

    /// Creates a seeder from a TOML configuration file.
    pub fn from_config_file(path: impl AsRef<Path>) -> std::result::Result<Self, ConfigError> {
        Ok(Self::new(SeedConfig::load(path)?))
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &SeedConfig {
        &self.config
    }

    /// Converts a batch of records.
    ///
    /// With `BatchPolicy::AbortOnError` the first failure is returned. With
    /// `BatchPolicy::SkipFailed` failed records are logged and left out; the
    /// surviving rows keep their relative order.
    ///
    /// Unlike [`seed_data_with_unique_id`], which accepts any iterator, this
    /// takes a slice so the `parallel` feature can split it across threads.
    /// Collect an iterator into a `Vec` first.
    pub fn seed<E, R>(&self, records: &[R]) -> Result<Vec<E>>
    where
        E: SeedEntity,
        R: FieldSource + Sync,
    {
        let shape = E::descriptor().qualified_name;
        info!(event = "seed_start", shape, record_count = records.len());

        let id_field = self.config.id_field.as_deref();
        let results = convert_all::<E, R>(records, id_field);

        let mut rows = Vec::with_capacity(results.len());
        for (index, result) in results.into_iter().enumerate() {
            match result {
                Ok(row) => rows.push(row),
                Err(e) => match self.config.batch_policy {
                    BatchPolicy::AbortOnError => return Err(e.in_record(index)),
                    BatchPolicy::SkipFailed => {
                        warn!(event = "seed_skip", shape, index, error = %e);
                    }
                },
            }
        }

        info!(event = "seed_end", shape, row_count = rows.len());
        Ok(rows)
    }

    /// Converts a batch and forwards the rows to `sink`.
    pub fn seed_into<E, R, S>(&self, sink: &mut S, records: &[R]) -> Result<()>
    where
        E: SeedEntity,
        R: FieldSource + Sync,
        S: SeedSink<E> + ?Sized,
    {
        let rows: Vec<E> = self.seed(records)?;
        sink.has_data(rows);
        Ok(())
    }
}

#[cfg(not(feature = "parallel"))]
fn convert_all<E, R>(records: &[R], id_field: Option<&str>) -> Vec<Result<E>>
where
    E: SeedEntity,
    R: FieldSource + Sync,
{
    records.iter().map(|r| convert(r, id_field)).collect()
}

#[cfg(feature = "parallel")]
fn convert_all<E, R>(records: &[R], id_field: Option<&str>) -> Vec<Result<E>>
where
    E: SeedEntity,
    R: FieldSource + Sync,
{
    use rayon::prelude::*;

    records.par_iter().map(|r| convert(r, id_field)).collect()
}
