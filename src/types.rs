use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A CSS selector kept as config data. The publishing site's generated class
/// names churn between redesigns, so selectors are editable without a rebuild.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sel(pub String);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0".into(),
            timeout_ms: 10_000,
        }
    }
}

/// Where to find the title, ingredient lines and slideshow links on the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteProfile {
    /// Heading element carrying the recipe title.
    pub title: Sel,
    /// Ingredient-list container, matched on a class-substring since the
    /// surrounding generated class names are unstable.
    pub ingredients: Sel,
    /// Anchors on a slideshow page that point at individual recipes.
    pub slide_links: Sel,
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self {
            title: Sel("h1.split-screen-content-header__hed".into()),
            ingredients: Sel(r#"div[class*="recipe__ingredient-list"]"#.into()),
            slide_links: Sel(r#"a[class*="button--utility gallery-slide-caption__cta"]"#.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paths {
    /// Vocabulary file, one canonical ingredient token per line. Rewritten
    /// wholesale when a run finishes.
    pub vocabulary: PathBuf,
    /// Ledger the current run appends to.
    pub active_ledger: PathBuf,
    /// Older ledger files read only for title de-duplication.
    pub legacy_ledgers: Vec<PathBuf>,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            vocabulary: "ingredients.txt".into(),
            active_ledger: "recipe_data_2.csv".into(),
            legacy_ledgers: vec!["recipe_data.csv".into()],
        }
    }
}

impl Paths {
    /// Every file whose titles count as "already collected": the active
    /// ledger first, then the legacy ones.
    pub fn title_sources(&self) -> impl Iterator<Item = &PathBuf> {
        std::iter::once(&self.active_ledger).chain(self.legacy_ledgers.iter())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub profile: SiteProfile,
    #[serde(default)]
    pub paths: Paths,
}

/// Title and raw ingredient lines pulled from one recipe page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipePage {
    pub title: String,
    pub ingredients: Vec<String>,
}

/// Operator answer to the fallback prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// One new canonical token.
    One(String),
    /// Several new canonical tokens at once.
    Many(Vec<String>),
    /// Treat the line as a non-ingredient, learn nothing.
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// A new row was appended to the ledger.
    Collected,
    /// Title already present in the ledger or earlier in this run.
    Duplicate,
    /// The page does not match the expected structure.
    NoMatch,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct RunSummary {
    pub collected: u32,
    pub duplicates: u32,
    pub unmatched: u32,
    pub failed: u32,
}
