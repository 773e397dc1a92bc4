//! # TravelCo Directory
//!
//! The visa-information directory behind the TravelCo site: an immutable,
//! load-once list of country records with slug lookup and client-side
//! search filtering.
//!
//! The directory is an explicitly constructed value rather than a global,
//! so callers (and tests) inject whichever record list they want:
//!
//! ```rust
//! use travelco_directory::{Directory, FilterState, RegionFilter};
//!
//! let directory = Directory::builtin();
//!
//! let filter = FilterState {
//!     query: "tur".to_string(),
//!     region: RegionFilter::All,
//! };
//! let matches = filter.apply(directory.records());
//! assert_eq!(matches[0].name, "Turkey");
//!
//! assert!(directory.find_by_slug("turkey").is_some());
//! assert!(directory.find_by_slug("atlantis").is_none());
//! ```

pub mod directory;
pub mod filter;
pub mod record;

pub use directory::{Directory, DirectoryError};
pub use filter::{apply_filter, FilterState, RegionFilter};
pub use record::{CountryRecord, Region};
