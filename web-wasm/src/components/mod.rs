//! UIコンポーネント

pub mod form_step;
pub mod loader_overlay;
pub mod recommendations_step;
pub mod upload_step;

pub use form_step::FormStep;
pub use loader_overlay::LoaderOverlay;
pub use recommendations_step::RecommendationsStep;
pub use upload_step::UploadStep;
