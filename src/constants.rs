/// Page structure and styling hooks.
///
/// The front-end never creates the static page; it looks these up in the
/// served HTML and only creates decoys and overlay elements itself.

// Static elements
pub const DECOY_CONTAINER_ID: &str = "no-container";
pub const FINAL_SCREEN_ID: &str = "final-screen";
pub const LOADER_ID: &str = "loader";
pub const CONFIRM_SELECTOR: &str = ".yes-button";
pub const SCENE_SELECTOR: &str = ".scene";
pub const FINAL_TEXT_SELECTOR: &str = ".final-text";

// Classes applied to created elements
pub const DECOY_CLASS: &str = "no-button";
pub const VANISHED_CLASS: &str = "fade";
pub const HIDDEN_CLASS: &str = "hidden";
pub const PHRASE_CLASS: &str = "phrase";
pub const POPUP_IMAGE_CLASS: &str = "popup-image";
pub const STICKER_CLASS: &str = "sticker";
pub const HEART_CLASS: &str = "heart";
pub const HEART_GLYPH: &str = "❤";

// Data attributes read at startup (besides the config override keys)
pub const IMAGES_ATTR: &str = "data-images";
pub const STICKERS_ATTR: &str = "data-stickers";
pub const CONFIG_ATTR_PREFIX: &str = "data-";

pub const SCENE_FADE_OPACITY: &str = "0";
