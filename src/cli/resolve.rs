//! Single page resolution.

use anyhow::{Context, Result};
use std::fs;

use crate::config::SiteConfig;
use crate::log;
use crate::resolve::LocaleNavResolver;

use super::ResolveArgs;

/// Print the resolved page as JSON, or its alternate link tags.
pub fn resolve_path(config: &SiteConfig, args: &ResolveArgs) -> Result<()> {
    let output = render(config, args)?;

    if let Some(ref output_path) = args.output {
        fs::write(output_path, &output)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        log!("resolve"; "wrote output to {}", output_path.display());
    } else {
        print!("{output}");
    }
    Ok(())
}

fn render(config: &SiteConfig, args: &ResolveArgs) -> Result<String> {
    let resolver = LocaleNavResolver::new(config);

    let path = match &args.locale {
        Some(target) => {
            let owner = resolver.locale_of(&args.path)?;
            resolver.localize_path(&args.path, owner.id.as_str(), target)?
        }
        None => args.path.clone(),
    };
    let page = resolver
        .resolve_page(&path)
        .with_context(|| format!("Failed to resolve `{path}`"))?;

    if args.html {
        return Ok(page.alternates.to_html());
    }
    let mut json = if args.pretty {
        serde_json::to_string_pretty(&page)?
    } else {
        serde_json::to_string(&page)?
    };
    json.push('\n');
    Ok(json)
}
