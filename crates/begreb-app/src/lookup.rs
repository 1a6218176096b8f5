use std::io::Write;

use anyhow::Context;
use begreb_client::LookupService;
use begreb_core::render_posts;
use begreb_types::Node;

/// One direct lookup without the debounce, printed to `out`
pub async fn run_lookup(
    service: &dyn LookupService,
    min_query_len: usize,
    query: &str,
    out: &mut impl Write,
    pretty: bool,
) -> anyhow::Result<()> {
    if query.encode_utf16().count() < min_query_len {
        anyhow::bail!("query '{query}' is shorter than {min_query_len} characters");
    }

    let posts = service
        .lookup(query)
        .await
        .with_context(|| format!("lookup against {} failed", service.endpoint()))?;

    write_nodes(out, &render_posts(&posts), pretty)?;
    Ok(())
}

/// Terminals get one block per card, pipes get one tab-separated line per card
pub fn write_nodes(out: &mut impl Write, nodes: &[Node], pretty: bool) -> std::io::Result<()> {
    for (i, node) in nodes.iter().enumerate() {
        match node {
            Node::Text(text) => writeln!(out, "{text}")?,
            Node::Card(card) if pretty => {
                if i > 0 {
                    writeln!(out)?;
                }
                for text in card.texts() {
                    writeln!(out, "{text}")?;
                }
            }
            Node::Card(card) => writeln!(out, "{}", card.texts().join("\t"))?,
        }
    }
    out.flush()
}
