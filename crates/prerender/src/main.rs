use anyhow::Context;
use storefront_core::LoadState;
use storefront_prerender::{Settings, prerender};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let settings = Settings::from_env().context("invalid prerender settings")?;
    let source = settings.source();
    tracing::info!(
        products = %settings.config.products_file,
        base_url = ?settings.base_url,
        "prerendering product grid"
    );

    let output = prerender(&source, settings.config).await;
    println!("{}", output.html);

    if output.state == LoadState::Unavailable {
        anyhow::bail!("catalog unavailable; emitted error indicator");
    }
    Ok(())
}
