pub mod use_portal;

pub use use_portal::{use_portal, PortalHandle};
