//! Source catalog the dataset is generated from.
//!
//! The built-in catalog holds 100 accounts and the name and title lists contacts are drawn
//! from. A JSON file can replace any of the lists; lists missing from the file keep their
//! built-in values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// One account row before ids and flags are assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceAccount {
    /// Company name.
    pub name: String,
    /// Two-letter region code.
    pub state: String,
    /// Annual revenue in whole dollars.
    pub revenue: u64,
}

/// Everything the generator needs besides the seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// Accounts in generation order.
    pub accounts: Vec<SourceAccount>,
    /// Job titles contacts are drawn from.
    pub job_titles: Vec<String>,
    /// First names contacts are drawn from.
    pub first_names: Vec<String>,
    /// Last names contacts are drawn from.
    pub last_names: Vec<String>,
}

impl Catalog {
    /// Load a catalog from a JSON file and validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a list is empty.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let catalog: Self = serde_json::from_str(&contents)?;
        catalog.validate()?;

        tracing::info!(
            path = %path.display(),
            accounts = catalog.accounts.len(),
            "Loaded catalog from file"
        );

        Ok(catalog)
    }

    /// Check that every list the generator draws from is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidCatalog`] naming the first empty list.
    pub fn validate(&self) -> Result<()> {
        let lists = [
            ("accounts", self.accounts.is_empty()),
            ("job_titles", self.job_titles.is_empty()),
            ("first_names", self.first_names.is_empty()),
            ("last_names", self.last_names.is_empty()),
        ];

        match lists.iter().find(|(_, empty)| *empty) {
            Some((name, _)) => Err(StoreError::InvalidCatalog(format!("{name} is empty"))),
            None => Ok(()),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            accounts: BUILTIN_ACCOUNTS
                .iter()
                .map(|&(name, state, revenue)| SourceAccount {
                    name: name.to_string(),
                    state: state.to_string(),
                    revenue,
                })
                .collect(),
            job_titles: to_strings(&JOB_TITLES),
            first_names: to_strings(&FIRST_NAMES),
            last_names: to_strings(&LAST_NAMES),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// Job titles assigned to contacts.
pub const JOB_TITLES: [&str; 10] = [
    "Chief Executive Officer",
    "Chief Technology Officer",
    "Chief Financial Officer",
    "Vice President of Sales",
    "Director of Marketing",
    "Sales Manager",
    "Product Manager",
    "Account Executive",
    "Data Scientist",
    "Software Engineer",
];

/// First names for generated contacts.
pub const FIRST_NAMES: [&str; 10] = [
    "Alice", "Bob", "Charlie", "Diana", "Ethan", "Fiona", "George", "Helen", "Ian", "Julia",
];

/// Last names for generated contacts.
pub const LAST_NAMES: [&str; 8] = [
    "Johnson",
    "Williams",
    "Davis",
    "Miller",
    "Garcia",
    "Rodriguez",
    "Wilson",
    "Martinez",
];

/// Built-in accounts as (name, state, revenue).
const BUILTIN_ACCOUNTS: [(&str, &str, u64); 100] = [
    ("Apex Industries", "NY", 1_200_000),
    ("Starlight Corp", "FL", 300_000),
    ("Phoenix Holdings", "CA", 9_500_000),
    ("Meridian Enterprises", "IL", 750_000),
    ("Zenith Group", "TX", 4_500_000),
    ("Silverline Systems", "WA", 6_800_000),
    ("Frontier Tech", "CO", 2_100_000),
    ("Evergreen LLC", "OR", 900_000),
    ("Innovate Inc.", "CA", 5_500_000),
    ("Data Flow Inc.", "TX", 7_100_000),
    ("Cloud Sphere LLC", "WA", 4_300_000),
    ("Net Weavers Corp", "NY", 2_200_000),
    ("Info Stream Tech", "CA", 8_900_000),
    ("Global Reach Inc.", "FL", 1_500_000),
    ("Terra Firm Ltd.", "CO", 3_200_000),
    ("Blue Ocean Co.", "CA", 6_200_000),
    ("Red River LLC", "TX", 500_000),
    ("Golden Gate Group", "CA", 9_800_000),
    ("Keystone Industries", "PA", 3_400_000),
    ("Sunbeam Systems", "FL", 1_800_000),
    ("Crystal Clear Co.", "AZ", 2_900_000),
    ("Summit Strategies", "CO", 5_300_000),
    ("North Star Ent.", "MN", 4_100_000),
    ("Alpha Wave Tech", "WA", 7_600_000),
    ("Omega Solutions", "TX", 8_300_000),
    ("Delta Force Inc.", "GA", 2_700_000),
    ("Gamma Ray Group", "IL", 6_400_000),
    ("Echo Labs", "CA", 4_900_000),
    ("Bravo Corp", "NY", 1_100_000),
    ("Momentum Machines", "MI", 3_800_000),
    ("Velocity Ventures", "TX", 5_900_000),
    ("Pinnacle Partners", "IL", 7_200_000),
    ("Horizon Holdings", "FL", 2_400_000),
    ("Catalyst Creations", "CA", 8_800_000),
    ("Synergy Systems", "TX", 6_700_000),
    ("Vanguard Vision", "NY", 3_300_000),
    ("Triton Tech", "WA", 5_100_000),
    ("Orion Operations", "CO", 2_600_000),
    ("Helios Holdings", "FL", 400_000),
    ("Titan Industries", "MI", 4_800_000),
    ("Matrix Methods", "IL", 7_900_000),
    ("Vertex Ventures", "CA", 9_200_000),
    ("Nexus Networks", "TX", 6_100_000),
    ("Spectrum Solutions", "NY", 1_700_000),
    ("Polaris Projects", "MN", 3_600_000),
    ("Quasar Queries", "AZ", 2_300_000),
    ("Stellar Systems", "WA", 5_800_000),
    ("Nebula Networks", "OR", 850_000),
    ("Andromeda Inc.", "CA", 9_700_000),
    ("Cosmos Creations", "TX", 7_400_000),
    ("Galaxy Group", "FL", 1_300_000),
    ("Supernova Systems", "NY", 3_000_000),
    ("Blackhole Co.", "IL", 6_900_000),
    ("Rocket Corp", "FL", 2_000_000),
    ("Comet Co.", "CO", 1_400_000),
    ("Meteorite Methods", "AZ", 950_000),
    ("Asteroid Ventures", "TX", 3_700_000),
    ("Planet Partners", "CA", 8_100_000),
    ("Starship Systems", "WA", 5_600_000),
    ("Warp Drive Inc.", "NY", 4_200_000),
    ("Teleport Tech", "CA", 7_700_000),
    ("Time Travel Co.", "IL", 6_300_000),
    ("Future Forward", "TX", 9_000_000),
    ("Next Gen Group", "WA", 4_700_000),
    ("Legacy Labs", "NY", 800_000),
    ("Tradition Tech", "PA", 2_500_000),
    ("Old School Systems", "OH", 1_900_000),
    ("Heritage Holdings", "GA", 3_100_000),
    ("Pioneer Partners", "OR", 700_000),
    ("Settler Solutions", "CO", 1_600_000),
    ("Homestead Inc.", "MN", 4_400_000),
    ("Frontier Flow", "TX", 5_200_000),
    ("Wild West Web", "AZ", 600_000),
    ("Gold Rush Group", "CA", 9_999_999),
    ("Silicon Valley Co.", "CA", 9_400_000),
    ("Route 66 Systems", "IL", 3_900_000),
    ("Big Apple Biz", "NY", 8_600_000),
    ("Lone Star Logic", "TX", 9_300_000),
    ("Sunshine State Co.", "FL", 2_800_000),
    ("Windy City Web", "IL", 6_600_000),
    ("Badger State Biz", "WI", 3_500_000),
    ("Wolverine Web", "MI", 4_600_000),
    ("Buckeye Biz", "OH", 2_000_000),
    ("Empire State Ent.", "NY", 8_400_000),
    ("Golden State Group", "CA", 9_600_000),
    ("Evergreen Ent.", "WA", 5_400_000),
    ("Centennial Co.", "CO", 2_200_000),
    ("Beaver State Biz", "OR", 1_000_000),
    ("Grand Canyon Group", "AZ", 1_200_000),
    ("Silver State Systems", "NV", 1_800_000),
    ("Beehive Biz", "UT", 1_500_000),
    ("Gem State Group", "ID", 1_100_000),
    ("Big Sky Biz", "MT", 900_000),
    ("Equality State Ent.", "WY", 700_000),
    ("Cornhusker Co.", "NE", 1_400_000),
    ("Sunflower State", "KS", 1_300_000),
    ("Sooner State", "OK", 1_700_000),
    ("Show Me Systems", "MO", 2_100_000),
    ("Hawkeye Holdings", "IA", 1_900_000),
    ("North Star Inc.", "MN", 2_300_000),
];
