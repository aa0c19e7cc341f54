// Element ids and class names shared with the static page shell.

// Mount root and drawing surface
pub const ROOT_ID: &str = "portfolio-root";
pub const CANVAS_ID: &str = "particle-canvas";
pub const CURSOR_ID: &str = "cursor-follower";

// Navigation
pub const NAV_SECTION_ATTR: &str = "data-nav-section";
pub const PROJECT_ID_ATTR: &str = "data-project-id";

// Project modal
pub const MODAL_ID: &str = "project-modal";
pub const MODAL_CLOSE_ID: &str = "project-modal-close";
pub const MODAL_TITLE_ID: &str = "project-modal-title";
pub const MODAL_IMAGE_ID: &str = "project-modal-image";
pub const MODAL_DESCRIPTION_ID: &str = "project-modal-description";
pub const MODAL_FEATURES_ID: &str = "project-modal-features";
pub const MODAL_TECH_ID: &str = "project-modal-tech";
pub const MODAL_GITHUB_ID: &str = "project-modal-github";

// Classes toggled by the front-end
pub const VISIBLE_CLASS: &str = "is-visible";
pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "hidden";

// Frame statistics are reported at debug level this often
pub const FPS_REPORT_INTERVAL_SEC: f32 = 5.0;
