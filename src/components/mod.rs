//! Shared UI components: the page header, the upload panel, and the
//! chat transcript building blocks.

pub mod chat_bubble;
pub mod header;
pub mod toast;
pub mod upload_panel;

pub use chat_bubble::{ChatBubble, LoadingBubble};
pub use header::Header;
pub use toast::Toast;
pub use upload_panel::UploadPanel;
