//! Publisher Factory
//!
//! Creates publishers with infrastructure dependencies wired up.
//! This is the dependency injection point for the application: one engine is
//! built per process and shared by the asset and config publishers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::{AssetPublisher, ConfigPublisher, PublishOptions, TreePublisher};
use crate::config::Config;
use crate::domain::ports::PublishEventSink;
use crate::infrastructure::{LocalFs, TracingEventSink};

/// Type alias for the engine backed by the local file system
pub type ConcreteTreePublisher = TreePublisher<LocalFs>;

/// Type alias for the concrete AssetPublisher
pub type ConcreteAssetPublisher = AssetPublisher<LocalFs>;

/// Type alias for the concrete ConfigPublisher
pub type ConcreteConfigPublisher = ConfigPublisher<LocalFs>;

/// Resolved roots and options a host needs to build publishers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublisherSettings {
    pub vendor_dir: PathBuf,
    pub public_dir: PathBuf,
    pub config_dir: PathBuf,
    pub namespaced: bool,
    pub merge_configs: bool,
    pub options: PublishOptions,
}

impl PublisherSettings {
    /// Resolve a loaded config against the project base
    pub fn from_config(config: &Config, base: &Path) -> Self {
        Self {
            vendor_dir: config.vendor_dir(base),
            public_dir: config.public_dir(base),
            config_dir: config.config_dir(base),
            namespaced: config.publish.namespaced,
            merge_configs: config.publish.merge_configs,
            options: PublishOptions::new().with_failure_mode(config.publish.failure_mode),
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.options = self.options.with_dry_run(dry_run);
        self
    }
}

/// Both publishers, sharing one engine
pub struct Publishers {
    pub assets: ConcreteAssetPublisher,
    pub configs: ConcreteConfigPublisher,
}

/// Create the engine with a tracing event sink
pub fn create_engine(options: PublishOptions) -> Arc<ConcreteTreePublisher> {
    create_engine_with_sink(options, Arc::new(TracingEventSink))
}

/// Create the engine with a specific event sink
pub fn create_engine_with_sink(
    options: PublishOptions,
    event_sink: Arc<dyn PublishEventSink>,
) -> Arc<ConcreteTreePublisher> {
    Arc::new(
        TreePublisher::new(LocalFs::new())
            .with_options(options)
            .with_event_sink(event_sink),
    )
}

pub fn create_asset_publisher(
    settings: &PublisherSettings,
    engine: Arc<ConcreteTreePublisher>,
) -> ConcreteAssetPublisher {
    AssetPublisher::new(engine, &settings.vendor_dir, &settings.public_dir)
        .with_namespaced(settings.namespaced)
}

pub fn create_config_publisher(
    settings: &PublisherSettings,
    engine: Arc<ConcreteTreePublisher>,
) -> ConcreteConfigPublisher {
    let publisher = ConfigPublisher::new(engine, &settings.vendor_dir, &settings.config_dir)
        .with_namespaced(settings.namespaced);
    if settings.merge_configs {
        publisher.merging()
    } else {
        publisher
    }
}

/// Create both publishers around one shared engine
pub fn create_publishers(
    settings: &PublisherSettings,
    event_sink: Arc<dyn PublishEventSink>,
) -> Publishers {
    let engine = create_engine_with_sink(settings.options, event_sink);
    Publishers {
        assets: create_asset_publisher(settings, Arc::clone(&engine)),
        configs: create_config_publisher(settings, engine),
    }
}
