//! Path resolution: mapping lookup keys to prompt file paths.
//!
//! A resolver is a pure function from an ordered list of lookup keys to a
//! relative path inside the prompt tree. It never touches the filesystem;
//! the same keys always produce the same path.

use promptvault_core::{AppError, AppResult};

/// Maps lookup keys to a `/`-separated path relative to the prompt tree
/// root.
pub trait PathResolver: Send + Sync + std::fmt::Debug {
    /// Get scheme name (e.g., "hierarchical", "brand-metric")
    fn scheme_name(&self) -> &str;

    /// Resolve lookup keys to a relative file path.
    ///
    /// # Errors
    /// `InvalidKeys` when the keys do not satisfy the scheme's arity or are
    /// blank.
    fn resolve(&self, keys: &[String]) -> AppResult<String>;
}

/// Convert a name to a filesystem-friendly slug.
///
/// Lowercases and replaces spaces and hyphens with underscores, so
/// "Goldman Sachs" becomes "goldman_sachs".
pub fn slug(name: &str) -> String {
    name.to_lowercase().replace([' ', '-'], "_")
}

/// Brand/metric scheme: exactly two keys.
///
/// The `generic` brand routes to `generic/<metric>.yaml`; every other brand
/// routes to `customized/<brand>/<metric>.yaml`.
#[derive(Debug, Default)]
pub struct BrandMetricResolver;

impl PathResolver for BrandMetricResolver {
    fn scheme_name(&self) -> &str {
        "brand-metric"
    }

    fn resolve(&self, keys: &[String]) -> AppResult<String> {
        let [brand, metric] = keys else {
            return Err(AppError::InvalidKeys(format!(
                "Expected exactly 2 keys (brand, metric), got {}",
                keys.len()
            )));
        };

        let brand_slug = non_blank_slug(brand)?;
        let metric_slug = non_blank_slug(metric)?;

        if brand_slug == "generic" {
            Ok(format!("generic/{}.yaml", metric_slug))
        } else {
            Ok(format!("customized/{}/{}.yaml", brand_slug, metric_slug))
        }
    }
}

/// Hierarchical scheme: one or more keys.
///
/// All but the last key become nested directories; the last key is the file
/// stem. `["finance", "metrics", "tvpi"]` resolves to
/// `finance/metrics/tvpi.yaml`.
#[derive(Debug, Default)]
pub struct HierarchicalResolver;

impl PathResolver for HierarchicalResolver {
    fn scheme_name(&self) -> &str {
        "hierarchical"
    }

    fn resolve(&self, keys: &[String]) -> AppResult<String> {
        if keys.is_empty() {
            return Err(AppError::InvalidKeys(
                "At least one key is required".to_string(),
            ));
        }

        let slugs = keys
            .iter()
            .map(|k| non_blank_slug(k))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(format!("{}.yaml", slugs.join("/")))
    }
}

fn non_blank_slug(key: &str) -> AppResult<String> {
    let slugged = slug(key.trim());
    if slugged.is_empty() {
        return Err(AppError::InvalidKeys("Keys must not be blank".to_string()));
    }
    Ok(slugged)
}

/// Create a path resolver based on the configured scheme name.
pub fn create_resolver(scheme: &str) -> AppResult<Box<dyn PathResolver>> {
    match scheme {
        "hierarchical" => Ok(Box::new(HierarchicalResolver)),

        "brand-metric" => Ok(Box::new(BrandMetricResolver)),

        _ => Err(AppError::Config(format!(
            "Unknown path scheme: '{}'. Supported schemes: hierarchical, brand-metric",
            scheme
        ))),
    }
}
