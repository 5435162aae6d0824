pub mod feed_manager;
pub mod match_manager;
pub mod profile_manager;
pub mod session_manager;

pub use feed_manager::{
    create_shared_feed_manager, filter_listings, FeedManager, RefreshKind, SharedFeedManager,
};
pub use match_manager::{create_shared_match_manager, MatchManager, SharedMatchManager};
pub use profile_manager::{
    create_shared_profile_manager, ProfileManager, SharedProfileManager,
};
pub use session_manager::{
    create_shared_session_manager, SessionManager, SharedSessionManager,
};
