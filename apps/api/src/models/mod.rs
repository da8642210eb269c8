pub mod profile;
pub mod suggestion;

pub use profile::Profile;
pub use suggestion::CareerSuggestion;
