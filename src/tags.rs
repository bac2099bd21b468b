//! Native component names the web tags are rewritten to.

pub const VIEW: &str = "View";
pub const TEXT: &str = "Text";
pub const BUTTON: &str = "Button";
pub const IMAGE: &str = "Image";
pub const LINK: &str = "Link";
pub const CHECKBOX: &str = "Checkbox";
pub const INPUT: &str = "Input";
