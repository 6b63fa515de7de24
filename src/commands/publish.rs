//! asset:publish / config:publish handlers

use std::sync::Arc;

use anyhow::{Context, Result};

use vendorpub::application::PackagePublisher;
use vendorpub::domain::ports::{FileSystem, PublishEventSink};
use vendorpub::infrastructure::{JsonEventSink, PublishLock, TracingEventSink};
use vendorpub::presentation::factory::create_publishers;
use vendorpub::presentation::output::print_summary;
use vendorpub::presentation::{OutputFormat, PackageReport, PublishSummary};

use super::CommandContext;
use crate::cli::PublishArgs;

/// Which publisher a command drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishKind {
    Assets,
    Configs,
}

impl PublishKind {
    pub fn command(self) -> &'static str {
        match self {
            PublishKind::Assets => "asset:publish",
            PublishKind::Configs => "config:publish",
        }
    }
}

/// Execute asset:publish or config:publish
pub fn cmd_publish(ctx: &CommandContext, kind: PublishKind, args: &PublishArgs) -> Result<bool> {
    let dry_run = ctx.settings.options.dry_run;
    let _lock = if dry_run {
        None
    } else {
        Some(
            PublishLock::acquire(&ctx.base)
                .with_context(|| format!("cannot lock {}", ctx.base.display()))?,
        )
    };

    let sink: Arc<dyn PublishEventSink> = match ctx.format {
        OutputFormat::Json => Arc::new(JsonEventSink::stdout(kind.command())),
        OutputFormat::Text => Arc::new(TracingEventSink),
    };
    let publishers = create_publishers(&ctx.settings, sink);
    let publisher = match kind {
        PublishKind::Assets => publishers.assets.publisher(),
        PublishKind::Configs => publishers.configs.publisher(),
    };

    let summary = run(publisher, kind, args, dry_run);
    print_summary(&summary, ctx.format, ctx.unicode, ctx.verbose);
    Ok(summary.is_success())
}

fn run<FS: FileSystem>(
    publisher: &PackagePublisher<FS>,
    kind: PublishKind,
    args: &PublishArgs,
    dry_run: bool,
) -> PublishSummary {
    let mut summary = PublishSummary::new(
        kind.command(),
        publisher.target().destination_root(),
        dry_run,
    );

    match (&args.package, &args.path) {
        (Some(name), path) => {
            let outcome = match path {
                Some(source) => publisher.run_from(name, source),
                None => publisher.run_package(name),
            };
            let report = match outcome {
                Ok(result) => PackageReport::from_result(name, &result),
                Err(error) => PackageReport::from_error(name, &error),
            };
            summary.push(report);
        }
        (None, _) => {
            let results = publisher.publish_all();
            if results.is_empty() {
                tracing::info!(
                    vendor = %publisher.vendor_root().display(),
                    "no packages to publish"
                );
            }
            summary.extend_from_results(&results);
        }
    }

    summary
}
