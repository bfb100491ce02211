pub mod extract;
pub mod level;
pub mod official;
pub mod view;

pub use extract::{PartyStyle, SocialLink, SocialPlatform};
pub use level::{Level, LevelBucket, classify, group_by_level};
pub use official::{District, Identifier, Office, Official, PostalAddress};
pub use view::{OfficialCard, ResultsView, Section};
