// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shakesearch::{CompiledQuery, SearchPage, Searcher};

mod cli;
use cli::display;
use cli::{Cli, Commands, EngineArgs};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.command);

    match cli.command {
        #[cfg(feature = "server")]
        Commands::Serve {
            engine,
            static_dir,
            host,
            port,
        } => {
            let searcher = load(&engine)?;
            let addr = std::net::SocketAddr::new(host, port);
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .context("failed to start async runtime")?
                .block_on(shakesearch::server::serve(
                    std::sync::Arc::new(searcher),
                    addr,
                    static_dir,
                ))
                .with_context(|| format!("server on {} failed", addr))?;
        }
        Commands::Search {
            engine,
            query,
            offset,
            all,
            json,
        } => {
            let searcher = load(&engine)?;
            run_search(&searcher, &query, offset, all, json)?;
        }
        Commands::Inspect { engine } => {
            let searcher = load(&engine)?;
            display::inspect_report(&engine.corpus, &searcher.stats(), searcher.config());
        }
    }

    Ok(())
}

/// Install the global subscriber. `RUST_LOG` wins; otherwise the server logs
/// at info and the one-shot commands only warn.
fn init_tracing(command: &Commands) {
    let default_filter = match command {
        #[cfg(feature = "server")]
        Commands::Serve { .. } => "shakesearch=info,tower_http=info",
        _ => "shakesearch=warn",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load(engine: &EngineArgs) -> anyhow::Result<Searcher> {
    engine.load().map_err(|err| {
        tracing::error!(error = %err, "failed to load corpus");
        anyhow::Error::new(err)
    })
}

fn run_search(
    searcher: &Searcher,
    query: &str,
    offset: i64,
    all: bool,
    json: bool,
) -> anyhow::Result<()> {
    let matches = searcher.find_all(query)?;
    let compiled = searcher.compile(query)?;

    let mut offset = offset;
    loop {
        let page = searcher.paginate(&matches, offset);

        if json {
            let line = serde_json::to_string(&page).context("failed to encode page")?;
            println!("{}", line);
        } else {
            print_page(searcher, &compiled, query, &page);
        }

        match page.next_offset() {
            Some(next) if all => offset = next as i64,
            _ => break,
        }
    }

    Ok(())
}

fn print_page(
    searcher: &Searcher,
    compiled: &CompiledQuery,
    query: &str,
    page: &SearchPage,
) {
    let text = searcher.index().text();
    for (i, &pos) in page.positions.iter().enumerate() {
        let (start, end) = searcher.window(pos);
        let match_end = compiled
            .regex()
            .find_at(text, pos)
            .map_or(pos, |m| m.end());

        display::match_header(page.offset + i + 1, pos);
        println!("{}", display::render_preview(text, start..end, pos..match_end));
    }
    display::page_footer(query, page);
}
