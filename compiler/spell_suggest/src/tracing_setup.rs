//! Optional tracing output for embedders and tests.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for suggestion lookups.
///
/// Call this once at startup. Safe to call multiple times, and a no-op
/// unless `RUST_LOG` is set (e.g. `RUST_LOG=spell_suggest=trace` shows every
/// candidate the ranker rejects or promotes). Setting `SPELL_LOG_TREE` nests
/// the output by span instead of printing flat lines.
///
/// If the embedder already installed a global subscriber, that one is kept.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var_os("RUST_LOG").is_none() {
            return;
        }

        let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
        let installed = if std::env::var_os("SPELL_LOG_TREE").is_some() {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_level(true))
                .try_init()
        };

        if installed.is_err() {
            tracing::debug!("global subscriber already set; keeping it");
        }
    });
}
